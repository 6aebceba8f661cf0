//! Loading input arrays from disk.
//!
//! Arrays are read in NumPy `.npy` format, so inputs can be produced with
//! `numpy.save("input.npy", np.array([...], dtype=np.int64))`.

mod array_load;

pub use array_load::*;

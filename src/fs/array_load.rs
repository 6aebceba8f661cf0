use std::path::Path;

use anyhow::{Context, bail};

/// Reads a one-dimensional `int64` array from the `.npy` file at `path`.
pub fn load_npy_i64(path: impl AsRef<Path>) -> anyhow::Result<Vec<i64>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    parse_npy_i64(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Decodes a one-dimensional `int64` array from `.npy` bytes.
pub fn parse_npy_i64(bytes: &[u8]) -> anyhow::Result<Vec<i64>> {
    let npy = npyz::NpyFile::new(bytes).context("not an npy file")?;
    if npy.shape().len() != 1 {
        bail!("expected a one-dimensional array, got shape {:?}", npy.shape());
    }
    let len = usize::try_from(npy.shape()[0]).context("array length does not fit in memory")?;

    // the header's length is unchecked until the payload is read, never reserve past the input
    let mut values = Vec::with_capacity(len.min(bytes.len() / size_of::<i64>()));
    for value in npy.data::<i64>().context("array is not int64")? {
        values.push(value?);
    }
    Ok(values)
}

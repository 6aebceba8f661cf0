//! Failure conditions shared by every container in the catalog.

use thiserror::Error;

/// Largest key span (`max - min + 1`) counting sort agrees to allocate a tally for.
pub const MAX_COUNTING_SPAN: u128 = 1 << 24;

/// Errors raised by container operations on an empty or out-of-bounds target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("{container} is empty")]
    Empty { container: &'static str },

    #[error("invalid position {position} for length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("key span {span} exceeds the counting sort limit of {MAX_COUNTING_SPAN}")]
    CountingRangeTooLarge { span: u128 },
}

impl ContainerError {
    pub(crate) fn empty(container: &'static str) -> Self {
        ContainerError::Empty { container }
    }

    pub(crate) fn out_of_range(position: usize, len: usize) -> Self {
        ContainerError::PositionOutOfRange { position, len }
    }
}

pub type Result<T> = std::result::Result<T, ContainerError>;

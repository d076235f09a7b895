use thiserror::Error;

/// Errors reported by the fixed-capacity containers.
///
/// Every variant is returned *before* any slot is touched, so a container that
/// hands one back is exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Growing the container would exceed its fixed bound.
    #[error("capacity exceeded: {requested} elements requested, capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// An index was outside the active range `[0, len)`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// One side of a swap does not fit the other side's bound.
    #[error(
        "incompatible swap: length {len} (capacity {capacity}) with length {other_len} (capacity {other_capacity})"
    )]
    IncompatibleSwap {
        len: usize,
        capacity: usize,
        other_len: usize,
        other_capacity: usize,
    },
}

impl CollectionError {
    /// Returns `true` for [`CollectionError::CapacityExceeded`].
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, CollectionError::CapacityExceeded { .. })
    }
}

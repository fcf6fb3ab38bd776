use thiserror::Error;

/// Failure to provide storage for a [`DynamicArray`](crate::DynamicArray).
///
/// Returned by the `try_*` family. The infallible operations treat every variant as fatal.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CapacityError {
    #[error("allocation failed with new capacity {new_capacity}")]
    AllocFailed {
        new_capacity: usize,
    },
    #[error("requested capacity {requested} overflows the address space")]
    CapacityOverflow {
        requested: usize,
    },
    #[error("size of element type is zero")]
    ZeroSizedElement,
}

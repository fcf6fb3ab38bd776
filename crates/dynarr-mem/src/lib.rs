//! A growable array over one raw memory block.
//!
//! [`DynamicArray`] keeps `len` live elements at the front of a block of `capacity`
//! uninitialized slots. Growth is driven by insertion only and follows a
//! [`CapacityPolicy`]; the default [`Geometric`] policy starts at 8 slots and grows by
//! a factor of 1.6.
//!
//! ```
//! use dynarr_mem::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! for i in 1..=10 {
//!     array.insert(i);
//! }
//! array.insert_at(3, 999);
//! assert_eq!(array[3], 999);
//! assert_eq!(array[4], 4);
//!
//! array.remove(3);
//! let mut cursor = array.rev_cursor();
//! assert_eq!(cursor.get(), &10);
//! cursor.move_next();
//! assert_eq!(cursor.get(), &9);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod capacity_policy;
pub mod array_types;

mod errors;
mod allocator;
mod global_alloc;


pub use errors::CapacityError;
pub use allocator::Allocator;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use capacity_policy::{CapacityPolicy, Geometric};
pub use array_types::{
    DynamicArray,
    Cursor,
    CursorMut,
    Direction,
    Iter,
    IterMut,
    IntoIter,
};

#[cfg(any(test, feature = "test_utils"))]
pub use global_alloc::fail_next_allocation;

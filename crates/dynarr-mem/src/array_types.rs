mod raw_block;
mod strategies;
mod dynamic_array;
mod iter;
mod into_iter;
mod cursor;

pub(crate) use raw_block::RawBlock;
pub(crate) use strategies::RelocateStrategy;

pub use dynamic_array::DynamicArray;
pub use iter::{Iter, IterMut};
pub use into_iter::IntoIter;
pub use cursor::{Cursor, CursorMut, Direction};

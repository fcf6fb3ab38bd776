//! Position-and-direction cursors over a [`DynamicArray`].
//!
//! A cursor borrows its array for as long as it lives, so the array cannot grow, shrink
//! or move underneath it. Using a cursor after a capacity-changing insertion is rejected
//! at compile time:
//!
//! ```compile_fail
//! use dynarr_mem::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.insert(1);
//! let cursor = array.cursor();
//! for i in 0..16 {
//!     array.insert(i);
//! }
//! cursor.get();
//! ```
//!
//! The same holds for mutable cursors:
//!
//! ```compile_fail
//! use dynarr_mem::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.insert(1);
//! let mut cursor = array.cursor_mut();
//! array.insert(2);
//! cursor.set(3);
//! ```
//!
//! A cursor is consumed by advancing it. Restarting a traversal takes a fresh cursor.

use core::mem;

use crate::capacity_policy::{CapacityPolicy, Geometric};

use super::DynamicArray;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug)]
struct Position {
    index: Option<usize>,
    direction: Direction,
}

impl Position {

    #[inline(always)]
    fn start(len: usize, direction: Direction) -> Self {
        let index = match direction {
            Direction::Forward => Some(0),
            Direction::Reverse => len.checked_sub(1),
        };
        Self {
            index,
            direction,
        }
    }

    #[inline(always)]
    fn current(&self, len: usize) -> Option<usize> {
        self.index.filter(|&index| index < len)
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.index = match self.direction {
            Direction::Forward => self.index.and_then(|index| index.checked_add(1)),
            Direction::Reverse => self.index.and_then(|index| index.checked_sub(1)),
        };
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn exhausted() -> ! {
    panic!("cursor has no current element")
}

/// Read-only cursor. Also an [`Iterator`] over `&T` in its direction.
pub struct Cursor<'a, T, Policy: CapacityPolicy = Geometric> {
    array: &'a DynamicArray<T, Policy>,
    position: Position,
}

impl<'a, T, Policy: CapacityPolicy> Cursor<'a, T, Policy> {

    #[inline(always)]
    pub(crate) fn new(array: &'a DynamicArray<T, Policy>, direction: Direction) -> Self {
        Self {
            position: Position::start(array.len(), direction),
            array,
        }
    }

    /// Whether the cursor still points at a live element.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.index().is_some()
    }

    /// Index of the current element, if any.
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        self.position.current(self.array.len())
    }

    #[inline(always)]
    pub fn direction(&self) -> Direction {
        self.position.direction
    }

    /// # Panics
    /// If [`has_next`](Self::has_next) is false.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &'a T {
        match self.index() {
            Some(index) => &self.array.as_slice()[index],
            None => exhausted(),
        }
    }

    /// Steps one element in the cursor's direction.
    #[inline(always)]
    pub fn move_next(&mut self) {
        self.position.advance()
    }
}

impl<'a, T, Policy: CapacityPolicy> Clone for Cursor<'a, T, Policy> {

    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            position: self.position,
        }
    }
}

impl<'a, T, Policy: CapacityPolicy> Iterator for Cursor<'a, T, Policy> {

    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index()?;
        self.position.advance();
        Some(&self.array.as_slice()[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.index(), self.position.direction) {
            (None, _) => 0,
            (Some(index), Direction::Forward) => self.array.len() - index,
            (Some(index), Direction::Reverse) => index + 1,
        };
        (remaining, Some(remaining))
    }
}

/// Mutable cursor: reads, overwrites and edits elements in place.
pub struct CursorMut<'a, T, Policy: CapacityPolicy = Geometric> {
    array: &'a mut DynamicArray<T, Policy>,
    position: Position,
}

impl<'a, T, Policy: CapacityPolicy> CursorMut<'a, T, Policy> {

    #[inline(always)]
    pub(crate) fn new(array: &'a mut DynamicArray<T, Policy>, direction: Direction) -> Self {
        Self {
            position: Position::start(array.len(), direction),
            array,
        }
    }

    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.index().is_some()
    }

    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        self.position.current(self.array.len())
    }

    #[inline(always)]
    pub fn direction(&self) -> Direction {
        self.position.direction
    }

    /// # Panics
    /// If [`has_next`](Self::has_next) is false.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        match self.index() {
            Some(index) => &self.array[index],
            None => exhausted(),
        }
    }

    /// # Panics
    /// If [`has_next`](Self::has_next) is false.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        match self.index() {
            Some(index) => &mut self.array[index],
            None => exhausted(),
        }
    }

    /// Overwrites the current element, dropping the old value.
    ///
    /// # Panics
    /// If [`has_next`](Self::has_next) is false.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, value: T) {
        *self.get_mut() = value;
    }

    /// Overwrites the current element and returns the old value.
    #[inline]
    #[track_caller]
    pub fn replace(&mut self, value: T) -> T {
        mem::replace(self.get_mut(), value)
    }

    #[inline(always)]
    pub fn move_next(&mut self) {
        self.position.advance()
    }
}

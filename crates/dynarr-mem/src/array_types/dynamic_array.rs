use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut, Index, IndexMut, Range},
    slice,
};

use alloc::alloc::handle_alloc_error;

use crate::{
    capacity_policy::{CapacityPolicy, Geometric, next_capacity},
    errors::CapacityError,
};

use super::{
    RawBlock,
    RelocateStrategy,
    Iter,
    IterMut,
    IntoIter,
    Cursor,
    CursorMut,
    Direction,
};

use CapacityError::CapacityOverflow;

/// A growable, index-addressable sequence backed by one exclusively owned raw block.
///
/// Slots `[0, len)` hold live values; slots `[len, capacity)` are uninitialized and are
/// never read. Capacity only changes when an insertion needs one more slot than the block
/// has, and it never shrinks on its own.
///
/// Index and cursor preconditions are checked in every build and panic when broken.
/// Allocation failure is fatal for [`insert`](Self::insert) and friends; the `try_*`
/// variants report it instead and leave the array untouched.
pub struct DynamicArray<T, Policy: CapacityPolicy = Geometric> {
    block: RawBlock<T>,
    len: usize,
    _markers: PhantomData<(T, fn() -> Policy)>,
}

const_assert!(size_of!(DynamicArray<u32>) == size_of!(Option<DynamicArray<u32>>));

unsafe impl<T: Send, Policy: CapacityPolicy> Send for DynamicArray<T, Policy> {}

unsafe impl<T: Sync, Policy: CapacityPolicy> Sync for DynamicArray<T, Policy> {}

#[cold]
#[inline(never)]
fn capacity_failure<T>(err: CapacityError) -> ! {
    if let CapacityError::AllocFailed { new_capacity } = err {
        if let Some(layout) = RawBlock::<T>::layout(new_capacity) {
            handle_alloc_error(layout)
        }
    }
    panic!("{}", err)
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index {} out of bounds for length {}", index, len)
}

impl<T> DynamicArray<T> {

    /// Creates an array with [`Geometric::DEFAULT_CAPACITY`] slots.
    ///
    /// Aborts through [`handle_alloc_error`] if the block cannot be allocated.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy()
    }

    #[inline]
    pub fn try_new() -> Result<Self, CapacityError> {
        Self::try_with_policy()
    }

    /// Creates an array with `capacity` slots, or the default capacity when `capacity`
    /// is zero.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy_and_capacity(capacity)
    }

    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::try_with_policy_and_capacity(capacity)
    }
}

impl<T, Policy: CapacityPolicy> DynamicArray<T, Policy> {

    /// A moved-from array: no block, no capacity.
    #[inline(always)]
    const fn empty() -> Self {
        Self {
            block: RawBlock::empty(),
            len: 0,
            _markers: PhantomData,
        }
    }

    /// Creates an array with `Policy::DEFAULT_CAPACITY` slots.
    pub fn with_policy() -> Self {
        Self::try_with_policy().unwrap_or_else(|err| capacity_failure::<T>(err))
    }

    pub fn try_with_policy() -> Result<Self, CapacityError> {
        Self::try_with_policy_and_capacity(Policy::DEFAULT_CAPACITY)
    }

    pub fn with_policy_and_capacity(capacity: usize) -> Self {
        Self::try_with_policy_and_capacity(capacity)
            .unwrap_or_else(|err| capacity_failure::<T>(err))
    }

    /// Allocates `capacity` slots, or `Policy::DEFAULT_CAPACITY` when `capacity` is zero.
    pub fn try_with_policy_and_capacity(capacity: usize) -> Result<Self, CapacityError> {
        let capacity =
            if capacity > 0 {
                capacity
            }
            else {
                Policy::DEFAULT_CAPACITY
            };
        Ok(Self {
            block: RawBlock::allocate(capacity)?,
            len: 0,
            _markers: PhantomData,
        })
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or not.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_non_null().as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_non_null().as_ptr()
    }

    /// The `begin..end` pointers of the live span.
    #[inline(always)]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    #[inline(always)]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(unsafe { self.block.get(index) })
        }
        else {
            None
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(unsafe { self.block.get_mut(index) })
        }
        else {
            None
        }
    }

    /// Appends `value` and returns its index.
    #[inline]
    pub fn insert(&mut self, value: T) -> usize {
        self.try_insert(value).unwrap_or_else(|err| capacity_failure::<T>(err))
    }

    /// Appends `value` and returns its index.
    ///
    /// On error `value` is dropped and the array is unchanged.
    pub fn try_insert(&mut self, value: T) -> Result<usize, CapacityError> {
        self.reserve_one()?;
        let index = self.len;
        unsafe { self.block.construct_at(index, value) }
        self.len += 1;
        Ok(index)
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Panics
    /// If `index > len`.
    #[inline]
    #[track_caller]
    pub fn insert_at(&mut self, index: usize, value: T) -> usize {
        self.try_insert_at(index, value).unwrap_or_else(|err| capacity_failure::<T>(err))
    }

    /// Fallible [`insert_at`](Self::insert_at).
    ///
    /// # Panics
    /// If `index > len`. The bound is checked before any growth.
    #[track_caller]
    pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<usize, CapacityError> {
        if index > self.len {
            panic!("insertion index {} out of bounds for length {}", index, self.len)
        }
        self.reserve_one()?;
        unsafe {
            if index < self.len {
                self.block.shift_right(index, self.len);
            }
            self.block.construct_at(index, value);
        }
        self.len += 1;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)` one slot
    /// left. Capacity is kept.
    ///
    /// # Panics
    /// If `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            index_out_of_bounds(index, self.len)
        }
        unsafe {
            let removed = self.block.read_at(index);
            self.block.shift_left(index, self.len);
            self.len -= 1;
            removed
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.block.read_at(self.len) })
    }

    /// Drops every live element. Capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe { self.block.drop_range(0, len) }
    }

    /// Moves the contents out, leaving `self` with no block and zero capacity.
    ///
    /// The emptied array stays usable; its next insertion allocates the policy's default
    /// capacity.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new(self.block.as_non_null(), self.len) }
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe { IterMut::new(self.block.as_non_null(), self.len) }
    }

    /// Read-only cursor starting at index 0.
    #[inline(always)]
    pub fn cursor(&self) -> Cursor<'_, T, Policy> {
        Cursor::new(self, Direction::Forward)
    }

    /// Read-only cursor starting at the last element.
    #[inline(always)]
    pub fn rev_cursor(&self) -> Cursor<'_, T, Policy> {
        Cursor::new(self, Direction::Reverse)
    }

    /// Mutable cursor starting at index 0.
    #[inline(always)]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, Policy> {
        CursorMut::new(self, Direction::Forward)
    }

    /// Mutable cursor starting at the last element.
    #[inline(always)]
    pub fn rev_cursor_mut(&mut self) -> CursorMut<'_, T, Policy> {
        CursorMut::new(self, Direction::Reverse)
    }

    fn reserve_one(&mut self) -> Result<(), CapacityError> {
        if self.len < self.block.capacity() {
            return Ok(())
        }
        let required = self.len
            .checked_add(1)
            .ok_or(CapacityOverflow { requested: usize::MAX })?;
        let new_capacity = next_capacity::<Policy>(self.block.capacity(), required)
            .ok_or(CapacityOverflow { requested: required })?;
        self.reallocate(new_capacity)
    }

    /// Moves the live elements into a fresh block of `new_capacity` slots.
    ///
    /// The old block is only touched once the new one exists.
    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), CapacityError> {
        debug_assert!(new_capacity >= self.len);
        let mut block = RawBlock::allocate(new_capacity)?;
        unsafe {
            self.block.relocate_to(&mut block, self.len);
            self.block.free();
        }
        self.block = block;
        Ok(())
    }

    /// Drops every live element and frees the block.
    fn release(&mut self) {
        self.clear();
        unsafe { self.block.free() }
    }

    /// Appends clones of `source` into spare capacity.
    fn clone_elements_from(&mut self, source: &[T])
        where
            T: Clone
    {
        debug_assert!(self.len + source.len() <= self.block.capacity());
        for value in source {
            unsafe { self.block.construct_at(self.len, value.clone()) }
            self.len += 1;
        }
    }

    fn clone_capacity(source: &Self) -> usize {
        if source.len > 0 {
            source.capacity()
        }
        else {
            Policy::DEFAULT_CAPACITY
        }
    }
}

impl<T, Policy: CapacityPolicy> Drop for DynamicArray<T, Policy> {

    fn drop(&mut self) {
        self.release()
    }
}

impl<T, Policy: CapacityPolicy> Default for DynamicArray<T, Policy> {

    #[inline]
    fn default() -> Self {
        Self::with_policy()
    }
}

impl<T: Clone, Policy: CapacityPolicy> Clone for DynamicArray<T, Policy> {

    /// Deep copy with the source's capacity, or the default capacity if the source is
    /// empty.
    fn clone(&self) -> Self {
        let mut copy = Self::with_policy_and_capacity(Self::clone_capacity(self));
        copy.clone_elements_from(self.as_slice());
        copy
    }

    /// Releases the current block, then copies `source` as [`clone`](Clone::clone) does.
    fn clone_from(&mut self, source: &Self) {
        self.release();
        let capacity = Self::clone_capacity(source);
        self.block = RawBlock::allocate(capacity).unwrap_or_else(|err| capacity_failure::<T>(err));
        self.clone_elements_from(source.as_slice());
    }
}

impl<T: Debug, Policy: CapacityPolicy> Debug for DynamicArray<T, Policy> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, Policy, OtherPolicy> PartialEq<DynamicArray<U, OtherPolicy>> for DynamicArray<T, Policy>
    where
        T: PartialEq<U>,
        Policy: CapacityPolicy,
        OtherPolicy: CapacityPolicy,
{

    #[inline]
    fn eq(&self, other: &DynamicArray<U, OtherPolicy>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, Policy: CapacityPolicy> Eq for DynamicArray<T, Policy> {}

impl<T, U, Policy, const N: usize> PartialEq<[U; N]> for DynamicArray<T, Policy>
    where
        T: PartialEq<U>,
        Policy: CapacityPolicy,
{

    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, Policy> PartialEq<[U]> for DynamicArray<T, Policy>
    where
        T: PartialEq<U>,
        Policy: CapacityPolicy,
{

    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, Policy: CapacityPolicy> Index<usize> for DynamicArray<T, Policy> {

    type Output = T;

    #[inline(always)]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            index_out_of_bounds(index, self.len)
        }
        unsafe { self.block.get(index) }
    }
}

impl<T, Policy: CapacityPolicy> IndexMut<usize> for DynamicArray<T, Policy> {

    #[inline(always)]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            index_out_of_bounds(index, self.len)
        }
        unsafe { self.block.get_mut(index) }
    }
}

impl<T, Policy: CapacityPolicy> Deref for DynamicArray<T, Policy> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, Policy: CapacityPolicy> DerefMut for DynamicArray<T, Policy> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, Policy: CapacityPolicy> AsRef<[T]> for DynamicArray<T, Policy> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, Policy: CapacityPolicy> AsMut<[T]> for DynamicArray<T, Policy> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, Policy: CapacityPolicy> Extend<T> for DynamicArray<T, Policy> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, Policy: CapacityPolicy> FromIterator<T> for DynamicArray<T, Policy> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::with_policy();
        array.extend(iter);
        array
    }
}

impl<T: Clone, Policy: CapacityPolicy> From<&[T]> for DynamicArray<T, Policy> {

    fn from(values: &[T]) -> Self {
        let mut array = Self::with_policy_and_capacity(values.len());
        array.clone_elements_from(values);
        array
    }
}

impl<'a, T, Policy: CapacityPolicy> IntoIterator for &'a DynamicArray<T, Policy> {

    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Policy: CapacityPolicy> IntoIterator for &'a mut DynamicArray<T, Policy> {

    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, Policy: CapacityPolicy> IntoIterator for DynamicArray<T, Policy> {

    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);
        let block = mem::replace(&mut self.block, RawBlock::empty());
        unsafe { IntoIter::new(block, len) }
    }
}

use core::{
    alloc::Layout,
    ptr::NonNull,
};

use crate::{
    Allocator,
    CapacityError,
    GLOBAL_ALLOC,
};

use CapacityError::{AllocFailed, CapacityOverflow, ZeroSizedElement};

/// A block of `capacity` uninitialized slots of `T`.
///
/// The block does not know which slots are live. Every slot operation is unsafe and the
/// owner keeps the live/uninitialized boundary. Dropping a `RawBlock` leaks it; the owner
/// calls [`RawBlock::free`] once all live slots are destroyed or moved out.
pub(crate) struct RawBlock<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

impl<T> RawBlock<T> {

    /// A block with no slots and no allocation.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    pub fn allocate(capacity: usize) -> Result<Self, CapacityError> {
        if size_of!(T) == 0 {
            return Err(ZeroSizedElement)
        }
        debug_assert!(capacity != 0);
        if Self::layout(capacity).is_none() {
            return Err(CapacityOverflow { requested: capacity })
        }
        let ptr = unsafe { GLOBAL_ALLOC.allocate_uninit::<T>(capacity) }
            .ok_or(AllocFailed { new_capacity: capacity })?;
        Ok(Self {
            ptr,
            capacity,
        })
    }

    #[inline(always)]
    pub fn layout(capacity: usize) -> Option<Layout> {
        Layout::array::<T>(capacity).ok()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    /// # Safety
    /// `index` must be at most `capacity`.
    #[inline(always)]
    pub unsafe fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index <= self.capacity);
        unsafe { self.ptr.add(index) }
    }

    /// # Safety
    /// Slot `index` must be in bounds and uninitialized.
    #[inline(always)]
    pub unsafe fn construct_at(&mut self, index: usize, value: T) {
        unsafe { self.slot(index).write(value) }
    }

    /// Moves the value out of slot `index`.
    ///
    /// # Safety
    /// Slot `index` must be live. It is uninitialized afterwards.
    #[inline(always)]
    pub unsafe fn read_at(&self, index: usize) -> T {
        unsafe { self.slot(index).read() }
    }

    /// # Safety
    /// Slot `index` must be live for `'a` and not mutably aliased.
    #[inline(always)]
    pub unsafe fn get<'a>(&self, index: usize) -> &'a T {
        unsafe { self.slot(index).as_ref() }
    }

    /// # Safety
    /// Slot `index` must be live for `'a` and not aliased.
    #[inline(always)]
    pub unsafe fn get_mut<'a>(&mut self, index: usize) -> &'a mut T {
        unsafe { self.slot(index).as_mut() }
    }

    /// Returns the allocation to the heap and leaves the block empty.
    ///
    /// # Safety
    /// No slot may be live.
    pub unsafe fn free(&mut self) {
        if self.capacity != 0 {
            unsafe { GLOBAL_ALLOC.free_uninit(self.ptr, self.capacity) }
        }
        *self = Self::empty();
    }
}

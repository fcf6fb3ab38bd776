use core::{
    mem::needs_drop,
    ptr,
};

use super::RawBlock;

/// Bulk slot moves inside and between blocks.
///
/// Every Rust value can be relocated with a bitwise copy, so none of these need `Clone`.
/// A relocated source slot counts as uninitialized afterwards and is never dropped.
pub(crate) unsafe trait RelocateStrategy<T> {

    /// Moves slots `[0, len)` into the front of `dst`.
    unsafe fn relocate_to(&self, dst: &mut RawBlock<T>, len: usize);

    /// Moves slots `[index, len)` to `[index + 1, len + 1)`, leaving `index` uninitialized.
    unsafe fn shift_right(&mut self, index: usize, len: usize);

    /// Moves slots `[index + 1, len)` to `[index, len - 1)`. Slot `index` must already be
    /// uninitialized and slot `len - 1` is uninitialized afterwards.
    unsafe fn shift_left(&mut self, index: usize, len: usize);

    /// Destroys the live slots `[start, end)`.
    unsafe fn drop_range(&mut self, start: usize, end: usize);
}

unsafe impl<T> RelocateStrategy<T> for RawBlock<T> {

    #[inline(always)]
    unsafe fn relocate_to(&self, dst: &mut RawBlock<T>, len: usize) {
        debug_assert!(len <= self.capacity() && len <= dst.capacity());
        unsafe {
            self.as_non_null().copy_to_nonoverlapping(dst.as_non_null(), len);
        }
    }

    #[inline(always)]
    unsafe fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity());
        unsafe {
            let src = self.slot(index);
            src.copy_to(src.add(1), len - index);
        }
    }

    #[inline(always)]
    unsafe fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity());
        unsafe {
            let dst = self.slot(index);
            dst.add(1).copy_to(dst, len - index - 1);
        }
    }

    #[inline(always)]
    unsafe fn drop_range(&mut self, start: usize, end: usize) {
        if needs_drop::<T>() && start < end {
            unsafe {
                let first = self.slot(start);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first.as_ptr(), end - start));
            }
        }
    }
}

use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
    slice,
};

use super::{RawBlock, RelocateStrategy};

/// Owning iterator produced by `DynamicArray::into_iter`.
///
/// Elements not yielded are dropped with the iterator, which then frees the block.
pub struct IntoIter<T> {
    block: RawBlock<T>,
    start: usize,
    end: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for IntoIter<T> {}

unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {

    /// # Safety
    /// Slots `[0, len)` of `block` must be live and owned by the caller.
    #[inline(always)]
    pub(crate) unsafe fn new(block: RawBlock<T>, len: usize) -> Self {
        Self {
            block,
            start: 0,
            end: len,
            _marker: PhantomData,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.block.slot(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {

    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None
        }
        let value = unsafe { self.block.read_at(self.start) };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {

    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None
        }
        self.end -= 1;
        Some(unsafe { self.block.read_at(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {

    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        unsafe {
            self.block.drop_range(start, end);
            self.block.free();
        }
    }
}

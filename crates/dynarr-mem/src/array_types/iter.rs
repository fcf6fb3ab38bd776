use core::{
    iter::FusedIterator,
    marker::PhantomData,
    ptr::NonNull,
};

/// Borrowing iterator over the live span of a [`DynamicArray`](crate::DynamicArray).
pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _marker: PhantomData<&'a T>,
}

/// Mutable borrowing iterator over the live span of a [`DynamicArray`](crate::DynamicArray).
pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _marker: PhantomData<&'a mut T>,
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}

unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

impl<'a, T> Iter<'a, T> {

    /// # Safety
    /// `ptr` must point at `len` live elements that stay borrowed for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            end: unsafe { ptr.add(len) },
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IterMut<'a, T> {

    /// # Safety
    /// `ptr` must point at `len` live elements that stay exclusively borrowed for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            end: unsafe { ptr.add(len) },
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {

    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            ptr: self.ptr,
            end: self.end,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_ref() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_ref() })
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {

    #[inline]
    fn len(&self) -> usize {
        unsafe { self.end.offset_from(self.ptr) as usize }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_mut() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_mut() })
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {

    #[inline]
    fn len(&self) -> usize {
        unsafe { self.end.offset_from(self.ptr) as usize }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

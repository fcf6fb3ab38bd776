use core::{
    alloc::Layout,
    ptr::NonNull,
};

/// Raw memory source for array blocks.
///
/// # Safety
/// Implementors must return blocks valid for reads and writes of `layout.size()` bytes,
/// aligned to `layout.align()`, and accept those same blocks back in `free_raw`.
pub unsafe trait Allocator {

    unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>>;

    unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout);

    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        unsafe { self.allocate_raw(layout).map(|ptr| ptr.cast::<T>()) }
    }

    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let layout = match Layout::array::<T>(count) {
            Ok(l) => l,
            Err(_) => return,
        };
        unsafe { self.free_raw(ptr.cast::<u8>(), layout) }
    }
}

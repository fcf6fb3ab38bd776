use alloc::alloc::{Layout, alloc, dealloc};

use core::ptr::NonNull;

use crate::Allocator;

/// The process-wide heap, the only memory source arrays use.
pub struct GlobalAlloc;

pub static GLOBAL_ALLOC: GlobalAlloc = GlobalAlloc;

unsafe impl Allocator for GlobalAlloc {

    unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None
        }
        #[cfg(any(test, feature = "test_utils"))]
        if fault::take() {
            return None
        }
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr)
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return
        }
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }
}

#[cfg(any(test, feature = "test_utils"))]
mod fault {

    use core::cell::Cell;

    std::thread_local! {
        static FAIL_NEXT: Cell<bool> = const { Cell::new(false) };
    }

    pub fn arm() {
        FAIL_NEXT.with(|flag| flag.set(true));
    }

    pub fn take() -> bool {
        FAIL_NEXT.with(|flag| flag.replace(false))
    }
}

/// Makes the next [`GlobalAlloc`] allocation on the current thread fail.
#[cfg(any(test, feature = "test_utils"))]
pub fn fail_next_allocation() {
    fault::arm();
}

//! Host memory for the pool. The region comes from the C heap; nothing
//! here is OS-specific.

use core::ptr;

/// Acquire `len` bytes of pool storage from the host allocator.
/// Returns null when the host cannot supply the region.
///
/// # Safety
/// `len` must be non-zero.
pub unsafe fn pool_acquire(len: usize) -> *mut u8 {
    let p = libc::malloc(len);
    if p.is_null() {
        ptr::null_mut()
    } else {
        p as *mut u8
    }
}

/// Release a region returned by `pool_acquire`.
///
/// # Safety
/// `ptr` must have come from `pool_acquire` and must not be used afterwards.
pub unsafe fn pool_release(ptr: *mut u8) {
    libc::free(ptr as *mut libc::c_void);
}

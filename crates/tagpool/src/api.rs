//! The public surface over the singleton pool: lifecycle plus the
//! allocate / free / reallocate triad.

use crate::diag;
use crate::init;

// ============================================================================
// Pool lifecycle
// ============================================================================

/// Create the process-wide pool, sized by [`config::set_pool_bytes`]
/// (or the default). Aborts when the host refuses the region.
///
/// # Safety
/// Single-threaded; must precede every other call in this module.
///
/// [`config::set_pool_bytes`]: crate::config::set_pool_bytes
pub unsafe fn arena_init() {
    init::pool_init();
}

/// Tear down the process-wide pool, releasing its region to the host.
///
/// # Safety
/// Invalidates every outstanding payload pointer; single-threaded.
pub unsafe fn arena_close() {
    init::pool_close();
}

// ============================================================================
// The allocation triad
// ============================================================================

/// Allocate `size` bytes from the pool. Returns null (after a stderr
/// diagnostic) when the request is ill-formed or no free block admits it;
/// the heap is unchanged in that case.
///
/// # Safety
/// `arena_init` must have been called; single-threaded.
pub unsafe fn allocate(size: usize) -> *mut u8 {
    let p = init::pool().allocate(size);
    if p.is_null() {
        diag::warn_unservable(size);
    }
    p
}

/// Free a payload previously returned by `allocate` or `reallocate`.
/// Aborts on an invalid address.
///
/// # Safety
/// `arena_init` must have been called; `payload` must not be used again;
/// single-threaded.
pub unsafe fn free(payload: *mut u8) {
    init::pool().free(payload);
}

/// Resize `payload` to `new_size` bytes, preserving the overlapping
/// prefix. On a null return (after a stderr diagnostic) the old block is
/// preserved exactly and `payload` remains valid.
///
/// # Safety
/// `arena_init` must have been called; on success `payload` must not be
/// used again; single-threaded.
pub unsafe fn reallocate(payload: *mut u8, new_size: usize) -> *mut u8 {
    let p = init::pool().reallocate(payload, new_size);
    if p.is_null() {
        diag::warn_unservable(new_size);
    }
    p
}

//! The process-wide singleton pool. The library can be driven through an
//! explicit [`Arena`](crate::arena::Arena) instead; this module exists for
//! embedders that want the classic module-scoped allocator state.

use crate::arena::Arena;
use crate::config;
use crate::diag;
use core::cell::UnsafeCell;

struct PoolHolder(UnsafeCell<Option<Arena>>);

// Single-threaded by contract; the holder only exists so the static
// compiles.
unsafe impl Sync for PoolHolder {}

static POOL: PoolHolder = PoolHolder(UnsafeCell::new(None));

/// Acquire the process-wide pool, sized by `config::pool_bytes()`.
/// Aborts when the host cannot supply the region: no allocator state
/// exists yet, so there is nothing to recover.
///
/// # Safety
/// Single-threaded use only; the pool must not already be live.
pub unsafe fn pool_init() {
    let slot = &mut *POOL.0.get();
    if slot.is_some() {
        diag::abort_with_message("tagpool: pool already initialized\n");
    }
    match Arena::create(config::pool_bytes()) {
        Some(arena) => *slot = Some(arena),
        None => diag::abort_with_message("tagpool: could not obtain pool from the host\n"),
    }
}

/// Release the process-wide pool back to the host.
///
/// # Safety
/// Invalidates every outstanding payload pointer; single-threaded use
/// only.
pub unsafe fn pool_close() {
    let slot = &mut *POOL.0.get();
    if slot.take().is_none() {
        diag::abort_with_message("tagpool: pool closed before init\n");
    }
}

/// The live pool. Aborts on use before `pool_init` or after `pool_close`.
#[inline]
pub(crate) unsafe fn pool() -> &'static mut Arena {
    match &mut *POOL.0.get() {
        Some(arena) => arena,
        None => diag::abort_with_message("tagpool: pool used before init\n"),
    }
}

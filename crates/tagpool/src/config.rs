use crate::util::DEFAULT_POOL_BYTES;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Cached pool size (read once at `arena_init`, never on the allocation
/// paths).
static POOL_BYTES: AtomicUsize = AtomicUsize::new(DEFAULT_POOL_BYTES);

/// Set the pool size used by the next `arena_init`.
/// Has no effect on a pool that is already live.
pub fn set_pool_bytes(len: usize) {
    POOL_BYTES.store(len, Ordering::Relaxed);
}

pub fn pool_bytes() -> usize {
    POOL_BYTES.load(Ordering::Relaxed)
}

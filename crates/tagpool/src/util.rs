/// Size in bytes of one boundary tag word.
pub const TAG_BYTES: usize = core::mem::size_of::<i32>();

/// Bytes taken by the two free-list link words at the start of a free
/// block's payload. Every payload must be able to host them, so this is
/// also the minimum payload size.
pub const LINK_BYTES: usize = 2 * core::mem::size_of::<usize>();

/// Per-block overhead: one header tag plus one footer tag.
pub const BLOCK_OVERHEAD: usize = 2 * TAG_BYTES;

/// Smallest pool that can hold the initial free block.
pub const MIN_POOL_BYTES: usize = LINK_BYTES + BLOCK_OVERHEAD;

/// Largest payload a tag word can describe.
pub const MAX_REQUEST: usize = i32::MAX as usize;

/// Pool size used when the embedder never calls `config::set_pool_bytes`.
pub const DEFAULT_POOL_BYTES: usize = 1 << 20; // 1 MiB

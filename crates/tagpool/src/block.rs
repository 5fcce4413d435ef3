//! Boundary-tag block layout.
//!
//! A block is `[header tag][payload][footer tag]`. Both 4-byte tags hold
//! the payload size: positive while the block is free, negative while it
//! is allocated. A free block's payload starts with two pointer-sized link
//! words (`prev`, then `next`) threading it into the free list; those words
//! are user data the moment the block is allocated.
//!
//! Payload sizes are byte-granular, so tag and link words can sit at any
//! offset. Every in-band word is read and written unaligned.

use crate::util::{BLOCK_OVERHEAD, TAG_BYTES};
use core::mem::size_of;

/// Cursor over one block, identified by its header address. All other
/// locations inside the block are derived by offset arithmetic; no side
/// table of blocks exists anywhere.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockCursor {
    head: *mut u8,
}

impl BlockCursor {
    /// Cursor for the block whose header tag is at `head`.
    #[inline]
    pub fn from_head(head: *mut u8) -> Self {
        BlockCursor { head }
    }

    /// Cursor for the block whose payload starts at `payload`.
    #[inline]
    pub fn from_payload(payload: *mut u8) -> Self {
        BlockCursor {
            head: payload.wrapping_sub(TAG_BYTES),
        }
    }

    #[inline]
    pub fn head_addr(self) -> *mut u8 {
        self.head
    }

    #[inline]
    pub fn payload_ptr(self) -> *mut u8 {
        self.head.wrapping_add(TAG_BYTES)
    }

    /// Read the header tag.
    ///
    /// # Safety
    /// `self` must address a block inside a live pool.
    #[inline]
    pub unsafe fn tag(self) -> i32 {
        (self.head as *const i32).read_unaligned()
    }

    /// Payload size in bytes, regardless of allocation state.
    ///
    /// # Safety
    /// Same as [`tag`](Self::tag).
    #[inline]
    pub unsafe fn payload_len(self) -> usize {
        self.tag().unsigned_abs() as usize
    }

    /// # Safety
    /// Same as [`tag`](Self::tag).
    #[inline]
    pub unsafe fn is_free(self) -> bool {
        self.tag() > 0
    }

    /// Address of the footer tag word.
    ///
    /// # Safety
    /// Same as [`tag`](Self::tag).
    #[inline]
    pub unsafe fn footer_ptr(self) -> *mut u8 {
        self.head.add(TAG_BYTES + self.payload_len())
    }

    /// Read the footer tag. Equals the header tag on a well-formed block.
    ///
    /// # Safety
    /// Same as [`tag`](Self::tag).
    #[inline]
    pub unsafe fn footer_tag(self) -> i32 {
        (self.footer_ptr() as *const i32).read_unaligned()
    }

    /// One past the footer: the next block's header, or the pool end.
    ///
    /// # Safety
    /// Same as [`tag`](Self::tag).
    #[inline]
    pub unsafe fn end_addr(self) -> *mut u8 {
        self.head.add(BLOCK_OVERHEAD + self.payload_len())
    }

    /// Write both tags as free (`+len`).
    ///
    /// # Safety
    /// The block's span `[head, head + len + 2 tags)` must lie inside the
    /// live pool.
    #[inline]
    pub unsafe fn set_free(self, len: usize) {
        self.write_tags(len as i32);
    }

    /// Write both tags as allocated (`-len`).
    ///
    /// # Safety
    /// Same as [`set_free`](Self::set_free).
    #[inline]
    pub unsafe fn set_allocated(self, len: usize) {
        self.write_tags(-(len as i32));
    }

    unsafe fn write_tags(self, tag: i32) {
        let len = tag.unsigned_abs() as usize;
        (self.head as *mut i32).write_unaligned(tag);
        (self.head.add(TAG_BYTES + len) as *mut i32).write_unaligned(tag);
    }

    // Link words. Meaningful only while the block is free; they overlay
    // user bytes otherwise.

    /// Header address of the previous free-list node, null at the head.
    ///
    /// # Safety
    /// The block must be free and linked.
    #[inline]
    pub unsafe fn link_prev(self) -> *mut u8 {
        (self.payload_ptr() as *const usize).read_unaligned() as *mut u8
    }

    /// # Safety
    /// The block must be free.
    #[inline]
    pub unsafe fn set_link_prev(self, prev: *mut u8) {
        (self.payload_ptr() as *mut usize).write_unaligned(prev as usize);
    }

    /// Header address of the next free-list node, null at the tail.
    ///
    /// # Safety
    /// The block must be free and linked.
    #[inline]
    pub unsafe fn link_next(self) -> *mut u8 {
        (self.payload_ptr().add(size_of::<usize>()) as *const usize).read_unaligned() as *mut u8
    }

    /// # Safety
    /// The block must be free.
    #[inline]
    pub unsafe fn set_link_next(self, next: *mut u8) {
        (self.payload_ptr().add(size_of::<usize>()) as *mut usize).write_unaligned(next as usize);
    }
}

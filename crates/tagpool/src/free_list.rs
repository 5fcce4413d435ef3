//! The explicit free list: a doubly-linked list whose nodes live inside
//! the free blocks themselves. Unordered; pushes go to the head, so the
//! list reads in LIFO insertion order. All operations are O(1).

use crate::block::BlockCursor;
use core::ptr;

/// Push `node` onto the front of the list.
///
/// # Safety
/// `node` must be a free block inside the live pool and not currently
/// linked.
pub unsafe fn push_front(head: &mut *mut u8, node: BlockCursor) {
    let old = *head;
    node.set_link_prev(ptr::null_mut());
    node.set_link_next(old);
    if !old.is_null() {
        BlockCursor::from_head(old).set_link_prev(node.head_addr());
    }
    *head = node.head_addr();
}

/// Unlink `node`, repairing its neighbors. `node`'s own link words are
/// left as they were.
///
/// # Safety
/// `node` must currently be linked.
pub unsafe fn remove(head: &mut *mut u8, node: BlockCursor) {
    let prev = node.link_prev();
    let next = node.link_next();
    if prev.is_null() {
        *head = next;
    } else {
        BlockCursor::from_head(prev).set_link_next(next);
    }
    if !next.is_null() {
        BlockCursor::from_head(next).set_link_prev(prev);
    }
}

/// Re-link a removed node at the position its link words still describe.
///
/// Because `remove` never touches the victim's own link words, a node that
/// was unlinked can be put back exactly where it sat, preserving list
/// order. A stale `prev` equal to `displaced` means the node had been
/// pushed off the head by `displaced` and belongs at the head again.
///
/// # Safety
/// The node's link words must be unchanged since `remove`, and every block
/// they name (other than `displaced`) must be a current list member.
pub unsafe fn restore(head: &mut *mut u8, node: BlockCursor, displaced: *mut u8) {
    let prev = node.link_prev();
    let next = node.link_next();
    if prev.is_null() || prev == displaced {
        node.set_link_prev(ptr::null_mut());
        *head = node.head_addr();
    } else {
        BlockCursor::from_head(prev).set_link_next(node.head_addr());
    }
    if !next.is_null() {
        BlockCursor::from_head(next).set_link_prev(node.head_addr());
    }
}

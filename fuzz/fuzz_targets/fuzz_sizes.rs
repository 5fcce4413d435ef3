#![no_main]

use libfuzzer_sys::fuzz_target;
use tagpool::arena::Arena;

// Fuzz target that exercises size boundaries. Interprets input as a series
// of u32 sizes, allocates each, writes the full extent, verifies the
// bytes, and frees. The pool must account fully throughout and collapse
// back to a single free block at the end.

const POOL_BYTES: usize = 1 << 13;

fuzz_target!(|data: &[u8]| {
    let mut arena = match Arena::create(POOL_BYTES) {
        Some(arena) => arena,
        None => return,
    };

    let mut i = 0;
    while i + 4 <= data.len() {
        let raw = u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
        i += 4;

        // Stretch a little past the pool so exhaustion paths run too.
        let size = (raw as usize) % (POOL_BYTES + 64);

        let ptr = unsafe { arena.allocate(size) };
        if size == 0 {
            assert!(ptr.is_null(), "zero-size request must fail");
            continue;
        }
        if ptr.is_null() {
            // Exhaustion must leave the heap untouched.
            assert_eq!(arena.total_accounted(), POOL_BYTES);
            continue;
        }

        unsafe {
            std::ptr::write_bytes(ptr, 0xBB, size);
            for j in 0..size {
                assert_eq!(*ptr.add(j), 0xBB);
            }
            assert_eq!(arena.total_accounted(), POOL_BYTES);
            arena.free(ptr);
        }
    }

    assert_eq!(arena.free_list_payloads(), vec![POOL_BYTES - 8]);
});

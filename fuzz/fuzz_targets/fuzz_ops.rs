#![no_main]

use libfuzzer_sys::fuzz_target;
use tagpool::arena::Arena;

/// Fuzz target that interprets a byte slice as a sequence of pool
/// operations.
///
/// Each operation is encoded as:
///   byte 0: opcode (0/1=allocate, 2=free, 3=reallocate)
///   byte 1-2: size (little-endian u16, clamped and made non-zero)
///   byte 3: slot index (which tracked payload to operate on)
///
/// We track up to 16 live payloads and assert full accounting after every
/// operation.
const MAX_SLOTS: usize = 16;
const POOL_BYTES: usize = 1 << 14;

fuzz_target!(|data: &[u8]| {
    let mut arena = match Arena::create(POOL_BYTES) {
        Some(arena) => arena,
        None => return,
    };
    let mut slots: [*mut u8; MAX_SLOTS] = [std::ptr::null_mut(); MAX_SLOTS];
    let mut sizes: [usize; MAX_SLOTS] = [0; MAX_SLOTS];

    let mut i = 0;
    while i + 4 <= data.len() {
        let opcode = data[i] & 0x03;
        let size = (u16::from_le_bytes([data[i + 1], data[i + 2]]) as usize % 2048) + 1;
        let slot = (data[i + 3] as usize) % MAX_SLOTS;
        i += 4;

        unsafe {
            match opcode {
                0 | 1 => {
                    if !slots[slot].is_null() {
                        check_fill(slots[slot], sizes[slot], slot as u8);
                        arena.free(slots[slot]);
                    }
                    let ptr = arena.allocate(size);
                    slots[slot] = ptr;
                    sizes[slot] = size;
                    if !ptr.is_null() {
                        std::ptr::write_bytes(ptr, slot as u8, size);
                    }
                }
                2 => {
                    if !slots[slot].is_null() {
                        check_fill(slots[slot], sizes[slot], slot as u8);
                        arena.free(slots[slot]);
                        slots[slot] = std::ptr::null_mut();
                        sizes[slot] = 0;
                    }
                }
                _ => {
                    if !slots[slot].is_null() {
                        let ptr = arena.reallocate(slots[slot], size);
                        if ptr.is_null() {
                            // Failure must leave the old payload intact.
                            check_fill(slots[slot], sizes[slot], slot as u8);
                        } else {
                            check_fill(ptr, sizes[slot].min(size), slot as u8);
                            std::ptr::write_bytes(ptr, slot as u8, size);
                            slots[slot] = ptr;
                            sizes[slot] = size;
                        }
                    }
                }
            }
        }

        assert_eq!(arena.total_accounted(), POOL_BYTES);
    }

    // Cleanup: freeing everything must coalesce back to one spanning block.
    for slot in &mut slots {
        if !slot.is_null() {
            unsafe { arena.free(*slot) };
            *slot = std::ptr::null_mut();
        }
    }
    assert_eq!(arena.free_list_payloads(), vec![POOL_BYTES - 8]);
});

fn check_fill(ptr: *const u8, len: usize, fill: u8) {
    let s = unsafe { std::slice::from_raw_parts(ptr, len) };
    assert!(s.iter().all(|&b| b == fill), "payload fill corrupted");
}

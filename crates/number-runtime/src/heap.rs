use crate::resizeable_memory::ResizeableMemory;

/// Page size used when the heap needs to grow. Boxed numbers are tiny
/// (12-16 bytes) compared to a page; the allocator packs many cells per
/// page rather than growing one page per allocation.
pub const HEAP_PAGE_SIZE_IN_BYTES: usize = 64 * 1024;

/// A flat, byte-addressable store for heap cells.
///
/// `Heap` itself has no notion of "numbers" or "cells with a tag" -- it
/// is just growable memory. `number-heap` knows how to lay a `BOXED_NUM`
/// cell out in a byte slice; the `Allocator` (see `allocator.rs`) knows
/// how to find free bytes. This one only owns the bytes.
pub struct Heap {
    data: Vec<u8>,
}

impl Heap {
    pub fn new(init_size_in_pages: usize) -> Self {
        let len = init_size_in_pages * HEAP_PAGE_SIZE_IN_BYTES;
        Self {
            data: vec![0u8; len],
        }
    }

    #[inline]
    pub fn load(&self, address: usize, length_in_bytes: usize) -> &[u8] {
        self.bounds_check(address, length_in_bytes);
        &self.data[address..address + length_in_bytes]
    }

    #[inline]
    pub fn load_mut(&mut self, address: usize, length_in_bytes: usize) -> &mut [u8] {
        self.bounds_check(address, length_in_bytes);
        &mut self.data[address..address + length_in_bytes]
    }

    // with the `bounds_check` feature off, an out-of-range access still
    // panics -- via the slice index below -- it just loses the address
    // and requested length in the message.
    #[inline]
    fn bounds_check(&self, address: usize, length_in_bytes: usize) {
        #[cfg(feature = "bounds_check")]
        {
            if address + length_in_bytes > self.data.len() {
                panic!(
                    "heap access out of bounds: address {address}, length {length_in_bytes}, heap size {}",
                    self.data.len()
                );
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ResizeableMemory for Heap {
    fn get_capacity_in_pages(&self) -> usize {
        self.data.len() / HEAP_PAGE_SIZE_IN_BYTES
    }

    fn resize(&mut self, new_size_in_pages: usize) -> usize {
        let new_len = new_size_in_pages * HEAP_PAGE_SIZE_IN_BYTES;
        self.data.resize(new_len, 0);
        new_size_in_pages
    }
}

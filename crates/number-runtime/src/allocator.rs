use number_heap::cell_size_in_bytes;
use number_types::tagging::{BoxedTag, HeapAddress};

use crate::{heap::Heap, resizeable_memory::ResizeableMemory};

/// The allocator collaborator: hands back a fresh heap address large
/// enough to hold a cell of the given tag.
///
/// Reclamation is the host's problem: this trait has no `free`, since the
/// core never retains or mutates a cell once it is published.
pub trait Allocator {
    fn allocate(&mut self, heap: &mut Heap, tag: BoxedTag) -> HeapAddress;
}

/// A bump allocator: every call advances a watermark by the size of the
/// requested cell, growing the heap a page at a time when the watermark
/// would run past the end of the backing store.
///
/// Grows by whole pages rather than tracking a free-list -- boxed numbers
/// are never freed individually in this core, so a free-list would track
/// state nothing ever queries.
pub struct BumpAllocator {
    next_free: usize,
}

impl BumpAllocator {
    pub fn new() -> Self {
        Self { next_free: 0 }
    }
}

impl Default for BumpAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator for BumpAllocator {
    fn allocate(&mut self, heap: &mut Heap, tag: BoxedTag) -> HeapAddress {
        let size = cell_size_in_bytes(tag);

        if self.next_free + size > heap.len() {
            let current_pages = heap.get_capacity_in_pages();
            let needed_pages =
                (self.next_free + size).div_ceil(crate::heap::HEAP_PAGE_SIZE_IN_BYTES);
            heap.resize(current_pages.max(needed_pages) + 1);
        }

        let address = self.next_free;
        self.next_free += size;
        address as HeapAddress
    }
}

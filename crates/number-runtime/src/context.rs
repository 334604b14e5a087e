use number_types::{FaultKind, FaultReporter};

use crate::{allocator::Allocator, heap::Heap};

/// Initial heap size; the allocator grows it on demand. Process-wide
/// state is injected as a small capability struct threaded through
/// public entry points rather than kept behind hidden globals.
pub const INIT_HEAP_SIZE_IN_PAGES: usize = 0;

/// The capability struct every public operation in `number-ops` takes by
/// reference (or mutable reference, when an allocation may happen): one
/// place that owns the heap, the allocator, and the fault reporter, so
/// call sites never reach for global state.
pub struct NumericContext {
    pub heap: Heap,
    pub allocator: Box<dyn Allocator>,
    pub fault_reporter: Box<dyn FaultReporter>,
}

impl NumericContext {
    pub fn new(allocator: Box<dyn Allocator>, fault_reporter: Box<dyn FaultReporter>) -> Self {
        Self {
            heap: Heap::new(INIT_HEAP_SIZE_IN_PAGES),
            allocator,
            fault_reporter,
        }
    }

    #[inline]
    pub fn fault(&self, kind: FaultKind) -> ! {
        self.fault_reporter.fault(kind)
    }
}

pub mod allocator;
pub mod codec;
pub mod context;
pub mod fault;
pub mod heap;
pub mod resizeable_memory;

pub use allocator::{Allocator, BumpAllocator};
pub use codec::{decode_word, encode_number};
pub use context::NumericContext;
pub use fault::{catch_fault, NumericFault, PanicFaultReporter, RecordingFaultReporter};
pub use heap::Heap;

use std::{any::Any, cell::RefCell, fmt::Display};

use number_types::{FaultKind, FaultReporter, RuntimeError};

/// Default `FaultReporter`: formats a diagnostic and panics. Suitable for
/// an embedding host that wants faults to become ordinary unwinding
/// panics it can catch at a thread boundary.
#[derive(Debug, Default)]
pub struct PanicFaultReporter;

impl FaultReporter for PanicFaultReporter {
    fn fault(&self, kind: FaultKind) -> ! {
        panic!("{}", NumericFault::new(kind));
    }
}

/// A recording double for tests. It still never returns -- it records,
/// then unwinds via `panic!` carrying the recorded kind as the payload,
/// so a test can assert on the fault without the operator under test
/// ever observing a `Result`.
#[derive(Debug, Default)]
pub struct RecordingFaultReporter {
    pub recorded: RefCell<Option<FaultKind>>,
}

impl RecordingFaultReporter {
    pub fn new() -> Self {
        Self {
            recorded: RefCell::new(None),
        }
    }

    pub fn last(&self) -> Option<FaultKind> {
        *self.recorded.borrow()
    }
}

impl FaultReporter for RecordingFaultReporter {
    fn fault(&self, kind: FaultKind) -> ! {
        *self.recorded.borrow_mut() = Some(kind);
        std::panic::panic_any(kind);
    }
}

#[derive(Debug)]
pub struct NumericFault {
    kind: FaultKind,
    message: String,
}

impl NumericFault {
    pub fn new(kind: FaultKind) -> Self {
        Self {
            message: kind.to_string(),
            kind,
        }
    }
}

impl Display for NumericFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "numeric fault: {}", self.message)
    }
}

impl RuntimeError for NumericFault {
    fn get_message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> FaultKind {
        self.kind
    }
}

/// Helper for tests that want to assert a closure faulted with a
/// specific kind without threading a `RecordingFaultReporter` through by
/// hand every time.
pub fn catch_fault<F, T>(f: F) -> Option<FaultKind>
where
    F: FnOnce() -> T + std::panic::UnwindSafe,
{
    let result = std::panic::catch_unwind(f);
    match result {
        Ok(_) => None,
        Err(payload) => downcast_fault_kind(payload),
    }
}

fn downcast_fault_kind(payload: Box<dyn Any + Send>) -> Option<FaultKind> {
    payload.downcast_ref::<FaultKind>().copied()
}

use std::fmt::{Debug, Display};

pub mod tagging;

pub use tagging::{BoxedTag, HeapAddress, TaggedWord};

/// A reduced rational: numerator and denominator are coprime, the
/// denominator is always positive, and the numerator is never zero
/// (the zero case collapses to an integer `Number`, see canonicalisation).
///
/// note: this is `Copy`, same as the rest of `Number`'s payloads -- a
/// rational is two 32-bit fields, no heavier than an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalValue {
    pub numerator: i32,
    pub denominator: u32,
}

/// The generic numeric value of the language.
///
/// This is the statically typed analogue of the tagged machine word: the
/// low-bit tag and secondary heap tag are decoded once at the public
/// boundary (see `number-runtime`'s `decode_word`/`encode_number`),
/// everything downstream of that is a plain Rust `match`, not
/// hand-written bit masks.
///
/// `Immediate` and `I32` both carry a 32-bit payload; they are kept as
/// distinct variants because the canonical-form invariants require the
/// smallest-category result to be picked deterministically, and
/// "smallest category" is a property of the *representation*, not just
/// the numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Immediate(i32),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Rational(RationalValue),
}

impl Number {
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        matches!(self, Number::Rational(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Immediate(_) | Number::I32(_) | Number::I64(_))
    }
}

/// The three fault kinds the numeric core can signal.
///
/// `NotIntLike` carries the offending operand so the host can format a
/// diagnostic without re-deriving which side of an operator was wrong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaultKind {
    Overflow,
    DivisionByZero,
    NotIntLike(Number),
}

impl Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaultKind::Overflow => write!(f, "arithmetic overflow"),
            FaultKind::DivisionByZero => write!(f, "division by zero"),
            FaultKind::NotIntLike(operand) => {
                write!(f, "operand is not integer-like: {operand:?}")
            }
        }
    }
}

/// Injectable collaborator that signals a fault and never returns.
///
/// A fault is -- by definition -- not recoverable inside the core: the
/// trap is reported and unwinds, the operator that triggered it never
/// produces a `Number`. Tests substitute a recording implementation so
/// the fault path itself is assertable (see
/// `number-runtime::fault::RecordingFaultReporter`).
pub trait FaultReporter {
    fn fault(&self, kind: FaultKind) -> !;
}

/// `RuntimeError` variants surfaced by the surrounding host once a fault
/// has unwound out of the core. Kept separate from `FaultReporter` so a
/// host can catch the unwind and re-package it as an ordinary `Result`
/// without the core itself ever returning one.
pub trait RuntimeError: Debug + Display {
    fn get_message(&self) -> &str;
    fn kind(&self) -> FaultKind;
}

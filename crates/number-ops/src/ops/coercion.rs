//! Coercion: widen a `Number` to a target machine type.
//!
//! `to_i64` is strict -- floats and rationals always fault, even when
//! the float happens to hold an integral value with no fractional part.
//! That "safe integer" leniency belongs to equality comparisons, not to
//! this coercion; the two are deliberately separate.

use number_types::{FaultKind, FaultReporter, Number};

pub fn to_f64(n: Number) -> f64 {
    match n {
        Number::Immediate(v) | Number::I32(v) => v as f64,
        Number::I64(v) => v as f64,
        Number::F32(v) => v as f64,
        Number::F64(v) => v,
        Number::Rational(r) => r.numerator as f64 / r.denominator as f64,
    }
}

/// Narrower counterpart of `to_f64`. Kept width-matched for the rational
/// case (`f32(num) / f32(den)`) rather than dividing an `f64` numerator
/// by an `f32` denominator.
pub fn to_f32(n: Number) -> f32 {
    match n {
        Number::Immediate(v) | Number::I32(v) => v as f32,
        Number::I64(v) => v as f32,
        Number::F32(v) => v,
        Number::F64(v) => v as f32,
        Number::Rational(r) => r.numerator as f32 / r.denominator as f32,
    }
}

pub fn to_i64(fault: &dyn FaultReporter, n: Number) -> i64 {
    match n {
        Number::Immediate(v) | Number::I32(v) => v as i64,
        Number::I64(v) => v,
        other => fault.fault(FaultKind::NotIntLike(other)),
    }
}

/// Non-faulting counterpart used internally where a float/rational
/// operand should simply fall through to a different code path rather
/// than trap (e.g. equality's cross-representation comparisons).
pub fn integer_value(n: Number) -> Option<i64> {
    match n {
        Number::Immediate(v) | Number::I32(v) => Some(v as i64),
        Number::I64(v) => Some(v),
        _ => None,
    }
}

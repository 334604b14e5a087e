//! Ordering and modulus: `<`, `>`, `<=`, `>=`, `mod`. Named `modulo` here
//! since `mod` is a Rust keyword.

use number_types::{FaultKind, FaultReporter, Number};

use super::{canonical::reduce_to_integer, coercion::to_f64, equality::eq};

/// Both sides coerced to `f64` and compared; precision loss on large
/// `i64` magnitudes is accepted.
pub fn lt(left: Number, right: Number) -> bool {
    to_f64(left) < to_f64(right)
}

pub fn gt(left: Number, right: Number) -> bool {
    to_f64(left) > to_f64(right)
}

/// Strict `f64` comparison first; falls back to exact equality so two
/// rationals that are equal but would round to the same `f64` still
/// satisfy `le`/`ge`.
pub fn le(left: Number, right: Number) -> bool {
    lt(left, right) || eq(left, right)
}

pub fn ge(left: Number, right: Number) -> bool {
    gt(left, right) || eq(left, right)
}

/// `checked_rem` rather than the raw `%`: `i64::MIN % -1` overflows (the
/// quotient `i64::MAX + 1` doesn't fit in `i64`) and the bare operator
/// panics instead of producing a value, so that case has to be routed
/// through the fault reporter like any other overflow.
pub fn modulo(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    let a = super::coercion::to_i64(fault, left);
    let b = super::coercion::to_i64(fault, right);
    if b == 0 {
        fault.fault(FaultKind::DivisionByZero);
    }
    match a.checked_rem(b) {
        Some(v) => reduce_to_integer(v),
        None => fault.fault(FaultKind::Overflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use number_runtime::{catch_fault, RecordingFaultReporter};
    use number_types::RationalValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn le_and_ge_agree_with_lt_gt_and_eq() {
        let a = Number::Immediate(3);
        let b = Number::Immediate(5);
        assert!(lt(a, b));
        assert!(!lt(b, a));
        assert!(le(a, b));
        assert!(ge(b, a));
        assert!(le(a, a) && ge(a, a));
    }

    #[test]
    fn le_holds_for_exactly_equal_rationals() {
        let a = Number::Rational(RationalValue { numerator: 1, denominator: 3 });
        let b = Number::Rational(RationalValue { numerator: 1, denominator: 3 });
        assert!(le(a, b) && ge(a, b));
    }

    #[test]
    fn modulo_takes_the_sign_of_the_dividend() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(modulo(&fault, Number::Immediate(211), Number::Immediate(-13)), Number::Immediate(3));
    }

    #[test]
    fn modulo_by_zero_faults() {
        let kind = catch_fault(|| {
            modulo(&RecordingFaultReporter::new(), Number::Immediate(7), Number::Immediate(0))
        });
        assert_eq!(kind, Some(FaultKind::DivisionByZero));
    }

    #[test]
    fn modulo_faults_not_int_like_on_a_fractional_float() {
        let kind = catch_fault(|| {
            modulo(&RecordingFaultReporter::new(), Number::F64(7.5), Number::Immediate(2))
        });
        assert_eq!(kind, Some(FaultKind::NotIntLike(Number::F64(7.5))));
    }

    #[test]
    fn modulo_of_i64_min_by_negative_one_faults_overflow_instead_of_panicking() {
        let kind = catch_fault(|| {
            modulo(&RecordingFaultReporter::new(), Number::I64(i64::MIN), Number::Immediate(-1))
        });
        assert_eq!(kind, Some(FaultKind::Overflow));
    }
}

//! Canonicalisation: every arithmetic result is funnelled through
//! `reduce_to_integer` or `reduce_fraction` before it leaves this crate,
//! so the smallest-representation and reduced-fraction invariants hold
//! at every public boundary without each operator having to re-derive
//! them.

use number_types::{
    tagging::{IMMEDIATE_MAX, IMMEDIATE_MIN},
    FaultKind, FaultReporter, Number, RationalValue,
};

/// Picks the smallest integer representation that holds `v`: immediate,
/// then `I32`, then `I64`.
pub fn reduce_to_integer(v: i64) -> Number {
    if (IMMEDIATE_MIN..=IMMEDIATE_MAX).contains(&v) {
        Number::Immediate(v as i32)
    } else if let Ok(v32) = i32::try_from(v) {
        Number::I32(v32)
    } else {
        Number::I64(v)
    }
}

/// Normalises `n/d` into a canonical `Number`: faults on a zero
/// denominator, collapses to an integer when it divides evenly,
/// otherwise reduces by the binary gcd and boxes a `Rational`.
///
/// Negative-denominator normalisation happens before the evenly-divides
/// check, and the reduced components are range-checked only after
/// dividing by the gcd.
pub fn reduce_fraction(fault: &dyn FaultReporter, n: i64, d: i64) -> Number {
    if d == 0 {
        fault.fault(FaultKind::DivisionByZero);
    }
    if n == 0 {
        return Number::Immediate(0);
    }

    let (mut n, mut d) = (n, d);
    if d < 0 {
        n = n.checked_neg().unwrap_or_else(|| fault.fault(FaultKind::Overflow));
        d = d.checked_neg().unwrap_or_else(|| fault.fault(FaultKind::Overflow));
    }

    if n % d == 0 {
        return reduce_to_integer(n / d);
    }

    let g = binary_gcd(n.unsigned_abs(), d.unsigned_abs()) as i64;
    let reduced_num = n / g;
    let reduced_den = d / g;

    if reduced_num < i32::MIN as i64 || reduced_num > i32::MAX as i64 || reduced_den > u32::MAX as i64
    {
        fault.fault(FaultKind::Overflow);
    }

    Number::Rational(RationalValue {
        numerator: reduced_num as i32,
        denominator: reduced_den as u32,
    })
}

/// Stein's algorithm on unsigned 64-bit magnitudes.
pub fn binary_gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }

    a << shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use number_runtime::{catch_fault, RecordingFaultReporter};
    use pretty_assertions::assert_eq;

    #[test]
    fn reduce_to_integer_picks_smallest_category() {
        assert_eq!(reduce_to_integer(0), Number::Immediate(0));
        assert_eq!(reduce_to_integer(IMMEDIATE_MAX), Number::Immediate(IMMEDIATE_MAX as i32));
        assert_eq!(reduce_to_integer(IMMEDIATE_MAX + 1), Number::I32((IMMEDIATE_MAX + 1) as i32));
        assert_eq!(reduce_to_integer(i32::MAX as i64 + 1), Number::I64(i32::MAX as i64 + 1));
    }

    #[test]
    fn binary_gcd_matches_euclid_on_small_cases() {
        assert_eq!(binary_gcd(12, 18), 6);
        assert_eq!(binary_gcd(17, 5), 1);
        assert_eq!(binary_gcd(0, 9), 9);
        assert_eq!(binary_gcd(9, 0), 9);
    }

    #[test]
    fn reduce_fraction_collapses_to_integer_when_exact() {
        let reporter = RecordingFaultReporter::new();
        assert_eq!(reduce_fraction(&reporter, 6, 3), Number::Immediate(2));
    }

    #[test]
    fn reduce_fraction_reduces_and_normalises_sign() {
        let reporter = RecordingFaultReporter::new();
        assert_eq!(
            reduce_fraction(&reporter, 4, -6),
            Number::Rational(RationalValue { numerator: -2, denominator: 3 })
        );
    }

    #[test]
    fn reduce_fraction_faults_on_zero_denominator() {
        let kind = catch_fault(|| reduce_fraction(&RecordingFaultReporter::new(), 1, 0));
        assert_eq!(kind, Some(FaultKind::DivisionByZero));
    }
}

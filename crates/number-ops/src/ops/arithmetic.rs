//! Additive and multiplicative arithmetic: `plus`, `minus`, `times`,
//! `divide`.
//!
//! Every public entry dispatches on the left operand's category,
//! delegates to a helper that dispatches on the right. The categories
//! are representation-independent widths (`Int(i64)`, `Rational`, `F32`,
//! `F64`) rather than one helper per `Number` variant, since every
//! integer-backed variant widens to the same `i64` arithmetic before any
//! work happens.

use number_types::{FaultKind, FaultReporter, Number, RationalValue};

use super::{
    canonical::reduce_to_integer,
    coercion::{to_f32, to_f64},
};

#[derive(Clone, Copy)]
enum Category {
    Int(i64),
    Rational(RationalValue),
    F32(f32),
    F64(f64),
}

fn classify(n: Number) -> Category {
    match n {
        Number::Immediate(v) | Number::I32(v) => Category::Int(v as i64),
        Number::I64(v) => Category::Int(v),
        Number::Rational(r) => Category::Rational(r),
        Number::F32(v) => Category::F32(v),
        Number::F64(v) => Category::F64(v),
    }
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

/// The product of `a` and `b`, or an overflow fault if it doesn't fit in
/// an `i64`.
pub fn safe_mul_i64(fault: &dyn FaultReporter, a: i64, b: i64) -> i64 {
    a.checked_mul(b).unwrap_or_else(|| fault.fault(FaultKind::Overflow))
}

pub fn plus(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    combine(fault, Op::Add, left, right)
}

pub fn minus(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    combine(fault, Op::Sub, left, right)
}

pub fn times(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    combine(fault, Op::Mul, left, right)
}

pub fn divide(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    combine(fault, Op::Div, left, right)
}

fn combine(fault: &dyn FaultReporter, op: Op, left: Number, right: Number) -> Number {
    match (classify(left), classify(right)) {
        (Category::Int(a), Category::Int(b)) => int_op(fault, op, a, b),
        (Category::Int(x), Category::Rational(r)) => int_rational(fault, op, x, r),
        (Category::Rational(r), Category::Int(x)) => rational_int(fault, op, r, x),
        (Category::Rational(a), Category::Rational(b)) => rational_rational(fault, op, a, b),

        (Category::Int(x), Category::F32(f)) => Number::F32(apply_f32(op, x as f32, f)),
        (Category::F32(f), Category::Int(x)) => Number::F32(apply_f32(op, f, x as f32)),
        (Category::Int(x), Category::F64(f)) => Number::F64(apply_f64(op, x as f64, f)),
        (Category::F64(f), Category::Int(x)) => Number::F64(apply_f64(op, f, x as f64)),

        (Category::Rational(r), Category::F32(f)) => {
            Number::F32(apply_f32(op, to_f32(Number::Rational(r)), f))
        }
        (Category::F32(f), Category::Rational(r)) => {
            Number::F32(apply_f32(op, f, to_f32(Number::Rational(r))))
        }
        (Category::Rational(r), Category::F64(f)) => {
            Number::F64(apply_f64(op, to_f64(Number::Rational(r)), f))
        }
        (Category::F64(f), Category::Rational(r)) => {
            Number::F64(apply_f64(op, f, to_f64(Number::Rational(r))))
        }

        (Category::F32(a), Category::F32(b)) => Number::F32(apply_f32(op, a, b)),
        (Category::F64(a), Category::F64(b)) => Number::F64(apply_f64(op, a, b)),
        (Category::F32(a), Category::F64(b)) => Number::F64(apply_f64(op, a as f64, b)),
        (Category::F64(a), Category::F32(b)) => Number::F64(apply_f64(op, a, b as f64)),
    }
}

fn apply_f32(op: Op, a: f32, b: f32) -> f32 {
    match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
    }
}

fn apply_f64(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
    }
}

fn int_op(fault: &dyn FaultReporter, op: Op, a: i64, b: i64) -> Number {
    match op {
        Op::Add => match a.checked_add(b) {
            Some(v) => reduce_to_integer(v),
            None => fault.fault(FaultKind::Overflow),
        },
        Op::Sub => match a.checked_sub(b) {
            Some(v) => reduce_to_integer(v),
            None => fault.fault(FaultKind::Overflow),
        },
        Op::Mul => match a.checked_mul(b) {
            Some(v) => reduce_to_integer(v),
            None => fault.fault(FaultKind::Overflow),
        },
        Op::Div => {
            if b == 0 {
                fault.fault(FaultKind::DivisionByZero);
            }
            match a.checked_rem(b) {
                Some(0) => reduce_to_integer(a.checked_div(b).unwrap()),
                Some(_) => super::canonical::reduce_fraction(fault, a, b),
                None => fault.fault(FaultKind::Overflow),
            }
        }
    }
}

/// Integer × rational. Add/sub widen by `safe_mul_i64` and range-check
/// the raw numerator *before* calling `reduce_fraction`, so a numerator
/// that overflows signed 32-bit range faults here rather than relying on
/// `reduce_fraction`'s own post-reduction check to catch it.
fn int_rational(fault: &dyn FaultReporter, op: Op, x: i64, r: RationalValue) -> Number {
    let a = r.numerator as i64;
    let b = r.denominator as i64;
    match op {
        Op::Add | Op::Sub => {
            let expanded = safe_mul_i64(fault, x, b);
            let new_num = match op {
                Op::Add => expanded.checked_add(a),
                _ => expanded.checked_sub(a),
            }
            .unwrap_or_else(|| fault.fault(FaultKind::Overflow));
            fault_if_outside_i32(fault, new_num);
            super::canonical::reduce_fraction(fault, new_num, b)
        }
        Op::Mul => {
            let numerator_out = safe_mul_i64(fault, x, a);
            super::canonical::reduce_fraction(fault, numerator_out, b)
        }
        Op::Div => {
            let numerator_out = safe_mul_i64(fault, x, b);
            super::canonical::reduce_fraction(fault, numerator_out, a)
        }
    }
}

/// Rational × integer: the same algebra as `int_rational`, with operand
/// order honoured for the non-commutative operators (subtraction and
/// division).
fn rational_int(fault: &dyn FaultReporter, op: Op, r: RationalValue, x: i64) -> Number {
    let a = r.numerator as i64;
    let b = r.denominator as i64;
    match op {
        Op::Add | Op::Sub => {
            let expanded = safe_mul_i64(fault, x, b);
            let new_num = match op {
                Op::Add => a.checked_add(expanded),
                _ => a.checked_sub(expanded),
            }
            .unwrap_or_else(|| fault.fault(FaultKind::Overflow));
            fault_if_outside_i32(fault, new_num);
            super::canonical::reduce_fraction(fault, new_num, b)
        }
        Op::Mul => {
            let numerator_out = safe_mul_i64(fault, a, x);
            super::canonical::reduce_fraction(fault, numerator_out, b)
        }
        Op::Div => {
            if x == 0 {
                fault.fault(FaultKind::DivisionByZero);
            }
            let denominator_out = safe_mul_i64(fault, b, x);
            super::canonical::reduce_fraction(fault, a, denominator_out)
        }
    }
}

/// Rational × rational: common-denominator shortcut for add/sub,
/// cross-multiplication otherwise; times and divide are the standard
/// fraction formulas, always routed through `reduce_fraction`.
fn rational_rational(fault: &dyn FaultReporter, op: Op, left: RationalValue, right: RationalValue) -> Number {
    let (n1, d1) = (left.numerator as i64, left.denominator as i64);
    let (n2, d2) = (right.numerator as i64, right.denominator as i64);

    match op {
        Op::Add | Op::Sub => {
            if d1 == d2 {
                let new_num = match op {
                    Op::Add => n1 + n2,
                    _ => n1 - n2,
                };
                super::canonical::reduce_fraction(fault, new_num, d1)
            } else {
                let left_cross = safe_mul_i64(fault, n1, d2);
                let right_cross = safe_mul_i64(fault, n2, d1);
                let new_num = match op {
                    Op::Add => left_cross.checked_add(right_cross),
                    _ => left_cross.checked_sub(right_cross),
                }
                .unwrap_or_else(|| fault.fault(FaultKind::Overflow));
                let new_den = safe_mul_i64(fault, d1, d2);
                super::canonical::reduce_fraction(fault, new_num, new_den)
            }
        }
        Op::Mul => {
            let numerator_out = safe_mul_i64(fault, n1, n2);
            let denominator_out = safe_mul_i64(fault, d1, d2);
            super::canonical::reduce_fraction(fault, numerator_out, denominator_out)
        }
        Op::Div => {
            let numerator_out = safe_mul_i64(fault, n1, d2);
            let denominator_out = safe_mul_i64(fault, d1, n2);
            super::canonical::reduce_fraction(fault, numerator_out, denominator_out)
        }
    }
}

fn fault_if_outside_i32(fault: &dyn FaultReporter, v: i64) {
    if v < i32::MIN as i64 || v > i32::MAX as i64 {
        fault.fault(FaultKind::Overflow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use number_runtime::{catch_fault, RecordingFaultReporter};
    use pretty_assertions::assert_eq;

    fn r(numerator: i32, denominator: u32) -> Number {
        Number::Rational(RationalValue { numerator, denominator })
    }

    #[test]
    fn plus_adds_small_integers_as_immediates() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(plus(&fault, Number::Immediate(3), Number::Immediate(4)), Number::Immediate(7));
    }

    #[test]
    fn plus_promotes_past_i32_range_to_i64() {
        let fault = RecordingFaultReporter::new();
        let two_billion = Number::I32(2_000_000_000);
        assert_eq!(times(&fault, two_billion, Number::Immediate(2)), Number::I64(4_000_000_000));
    }

    #[test]
    fn plus_on_i64_max_faults_overflow() {
        let kind = catch_fault(|| {
            plus(&RecordingFaultReporter::new(), Number::I64(i64::MAX), Number::Immediate(1))
        });
        assert_eq!(kind, Some(FaultKind::Overflow));
    }

    #[test]
    fn divide_one_third_is_an_exact_rational() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(divide(&fault, Number::Immediate(1), Number::Immediate(3)), r(1, 3));
    }

    #[test]
    fn plus_one_half_and_one_third_is_five_sixths() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(plus(&fault, r(1, 2), r(1, 3)), r(5, 6));
    }

    #[test]
    fn plus_one_half_and_one_half_collapses_to_an_integer() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(plus(&fault, r(1, 2), r(1, 2)), Number::Immediate(1));
    }

    #[test]
    fn integer_divided_by_zero_faults() {
        let kind = catch_fault(|| {
            divide(&RecordingFaultReporter::new(), Number::Immediate(1), Number::Immediate(0))
        });
        assert_eq!(kind, Some(FaultKind::DivisionByZero));
    }

    #[test]
    fn float_divided_by_zero_follows_ieee_rules() {
        let fault = RecordingFaultReporter::new();
        match divide(&fault, Number::F64(1.0), Number::F64(0.0)) {
            Number::F64(v) => assert!(v.is_infinite()),
            other => panic!("expected a float, got {other:?}"),
        }
    }

    #[test]
    fn integer_plus_float_promotes_to_the_float_width() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(plus(&fault, Number::Immediate(1), Number::F32(0.5)), Number::F32(1.5));
        assert_eq!(plus(&fault, Number::Immediate(1), Number::F64(0.5)), Number::F64(1.5));
    }

    #[test]
    fn mixed_width_floats_promote_to_f64() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(plus(&fault, Number::F32(1.0), Number::F64(2.0)), Number::F64(3.0));
    }
}

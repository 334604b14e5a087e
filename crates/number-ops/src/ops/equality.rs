//! Cross-representation numeric equality, dispatching on the left
//! operand the same way every other public entry point in this crate
//! does.

use number_types::{Number, RationalValue};

use super::coercion::{integer_value, to_f64};

pub fn eq(left: Number, right: Number) -> bool {
    match left {
        Number::Immediate(_) | Number::I32(_) | Number::I64(_) => eq_integer_left(left, right),
        Number::Rational(a) => eq_rational_left(a, right),
        Number::F32(_) | Number::F64(_) => eq_float_left(left, right),
    }
}

fn eq_integer_left(left: Number, right: Number) -> bool {
    let a = integer_value(left).expect("left is an integer representation");
    match right {
        Number::Immediate(_) | Number::I32(_) | Number::I64(_) => {
            a == integer_value(right).expect("right is an integer representation")
        }
        Number::Rational(_) => false,
        Number::F32(_) | Number::F64(_) => float_equals_integer(to_f64(right), a),
    }
}

fn eq_rational_left(left: RationalValue, right: Number) -> bool {
    match right {
        Number::Rational(b) => left.numerator == b.numerator && left.denominator == b.denominator,
        Number::F32(_) | Number::F64(_) => rational_to_f64(left) == to_f64(right),
        _ => false,
    }
}

fn eq_float_left(left: Number, right: Number) -> bool {
    let a = to_f64(left);
    match right {
        Number::Rational(b) => a == rational_to_f64(b),
        Number::F32(_) | Number::F64(_) => a == to_f64(right),
        _ => float_equals_integer(a, integer_value(right).expect("right is an integer representation")),
    }
}

fn rational_to_f64(r: RationalValue) -> f64 {
    to_f64(Number::Rational(r))
}

/// A float is "safe-integer equal" to `i` when casting it to `i64` and
/// back reproduces it exactly -- no fractional part, and within the
/// contiguous-integer range a 64-bit float can represent exactly.
fn float_equals_integer(f: f64, i: i64) -> bool {
    is_safe_integer(f) && (f as i64) == i
}

fn is_safe_integer(f: f64) -> bool {
    f.is_finite() && (f as i64) as f64 == f
}

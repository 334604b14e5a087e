//! Bitwise operators: `and`, `or`, `xor`, and the three shifts. Every
//! operand is coerced to `i64` first and the machine operation is
//! applied to the coerced values, never to the original `Number`.

use number_types::{FaultReporter, Number};

use super::{canonical::reduce_to_integer, coercion::to_i64};

/// Shift counts are taken modulo 64 regardless of sign, so a negative
/// coerced value still yields a well-defined shift amount in `[0, 64)`.
fn shift_amount(fault: &dyn FaultReporter, n: Number) -> u32 {
    to_i64(fault, n).rem_euclid(64) as u32
}

pub fn shl(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    let a = to_i64(fault, left);
    let shift = shift_amount(fault, right);
    reduce_to_integer(a.wrapping_shl(shift))
}

pub fn shr_logical(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    let a = to_i64(fault, left) as u64;
    let shift = shift_amount(fault, right);
    reduce_to_integer(a.wrapping_shr(shift) as i64)
}

pub fn shr_arith(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    let a = to_i64(fault, left);
    let shift = shift_amount(fault, right);
    reduce_to_integer(a.wrapping_shr(shift))
}

pub fn bit_and(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    reduce_to_integer(to_i64(fault, left) & to_i64(fault, right))
}

pub fn bit_or(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    reduce_to_integer(to_i64(fault, left) | to_i64(fault, right))
}

pub fn bit_xor(fault: &dyn FaultReporter, left: Number, right: Number) -> Number {
    reduce_to_integer(to_i64(fault, left) ^ to_i64(fault, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use number_runtime::{catch_fault, RecordingFaultReporter};
    use number_types::FaultKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn shifts_and_bitwise_ops_on_immediates() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(shl(&fault, Number::Immediate(1), Number::Immediate(4)), Number::Immediate(16));
        assert_eq!(bit_and(&fault, Number::Immediate(0b1100), Number::Immediate(0b1010)), Number::Immediate(0b1000));
        assert_eq!(bit_or(&fault, Number::Immediate(0b1100), Number::Immediate(0b0010)), Number::Immediate(0b1110));
        assert_eq!(bit_xor(&fault, Number::Immediate(0b1100), Number::Immediate(0b1010)), Number::Immediate(0b0110));
    }

    #[test]
    fn shift_arithmetic_vs_logical_differ_on_negative_operands() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(shr_arith(&fault, Number::Immediate(-8), Number::Immediate(1)), Number::Immediate(-4));
        assert_eq!(shr_logical(&fault, Number::Immediate(-8), Number::Immediate(1)), Number::I64(i64::MAX - 3));
    }

    #[test]
    fn shift_count_wraps_modulo_64() {
        let fault = RecordingFaultReporter::new();
        assert_eq!(shl(&fault, Number::Immediate(1), Number::Immediate(64)), Number::Immediate(1));
    }

    #[test]
    fn bitwise_on_a_float_faults_not_int_like() {
        let kind = catch_fault(|| {
            bit_and(&RecordingFaultReporter::new(), Number::F64(1.0), Number::Immediate(1))
        });
        assert_eq!(kind, Some(FaultKind::NotIntLike(Number::F64(1.0))));
    }
}

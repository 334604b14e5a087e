//! Public operations: every function here takes tagged words, decodes
//! through `number_runtime::decode_word`, runs the pure `Number`-level
//! algorithm, and re-encodes the result (or, for predicates, an
//! immediate boolean). Faults unwind out of the decode/compute step and
//! never reach the encode step.

pub mod arithmetic;
pub mod bitwise;
pub mod canonical;
pub mod comparison;
pub mod coercion;
pub mod equality;

use number_heap::cell_size_in_bytes;
use number_types::tagging::{self, BoxedTag, TaggedWord, HEAP_KIND_BOXED_NUM};
use number_runtime::{decode_word, encode_number, NumericContext};

fn box_bool(value: bool) -> TaggedWord {
    tagging::box_immediate(value as i32)
}

/// Recognises a tagged word as belonging to this numeric core: every
/// immediate is a number, and a heap reference is a number only if its
/// heap-kind word is `BOXED_NUM` (the surrounding VM may use the same
/// heap-reference primary tag for strings, closures, and the like).
pub fn is_number(ctx: &NumericContext, word: TaggedWord) -> bool {
    if tagging::is_immediate(word) {
        return true;
    }
    if !tagging::is_boxed_number(word) {
        return false;
    }
    let addr = tagging::heap_address_of(word) as usize;
    let header = ctx.heap.load(addr, cell_size_in_bytes(BoxedTag::Int32));
    number_heap::heap_kind(header) == HEAP_KIND_BOXED_NUM
}

macro_rules! binary_arith_op {
    ($name:ident, $f:path) => {
        pub fn $name(ctx: &mut NumericContext, left: TaggedWord, right: TaggedWord) -> TaggedWord {
            let l = decode_word(ctx, left);
            let r = decode_word(ctx, right);
            let result = $f(ctx.fault_reporter.as_ref(), l, r);
            encode_number(ctx, result)
        }
    };
}

binary_arith_op!(plus, arithmetic::plus);
binary_arith_op!(minus, arithmetic::minus);
binary_arith_op!(times, arithmetic::times);
binary_arith_op!(divide, arithmetic::divide);
binary_arith_op!(modulo, comparison::modulo);
binary_arith_op!(shl, bitwise::shl);
binary_arith_op!(shr_logical, bitwise::shr_logical);
binary_arith_op!(shr_arith, bitwise::shr_arith);
binary_arith_op!(bit_and, bitwise::bit_and);
binary_arith_op!(bit_or, bitwise::bit_or);
binary_arith_op!(bit_xor, bitwise::bit_xor);

macro_rules! binary_predicate_op {
    ($name:ident, $f:path) => {
        pub fn $name(ctx: &NumericContext, left: TaggedWord, right: TaggedWord) -> TaggedWord {
            let l = decode_word(ctx, left);
            let r = decode_word(ctx, right);
            box_bool($f(l, r))
        }
    };
}

binary_predicate_op!(lt, comparison::lt);
binary_predicate_op!(gt, comparison::gt);
binary_predicate_op!(le, comparison::le);
binary_predicate_op!(ge, comparison::ge);

/// `eq` is the one comparison with a documented non-number path:
/// pointer-equal words short-circuit to `true`, and a word that is not a
/// recognised number compares unequal rather than panicking on decode.
pub fn eq(ctx: &NumericContext, left: TaggedWord, right: TaggedWord) -> TaggedWord {
    let result = if left == right {
        true
    } else if !is_number(ctx, left) || !is_number(ctx, right) {
        false
    } else {
        equality::eq(decode_word(ctx, left), decode_word(ctx, right))
    };
    box_bool(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use number_runtime::{BumpAllocator, PanicFaultReporter};
    use number_types::tagging::box_immediate;
    use pretty_assertions::assert_eq;

    fn new_ctx() -> NumericContext {
        NumericContext::new(Box::new(BumpAllocator::new()), Box::new(PanicFaultReporter))
    }

    #[test]
    fn plus_three_and_four_is_seven() {
        let mut ctx = new_ctx();
        let result = plus(&mut ctx, box_immediate(3), box_immediate(4));
        assert_eq!(decode_word(&ctx, result), number_types::Number::Immediate(7));
    }

    #[test]
    fn divide_one_by_three_is_an_exact_rational() {
        let mut ctx = new_ctx();
        let word = divide(&mut ctx, box_immediate(1), box_immediate(3));
        assert!(!tagging::is_immediate(word));
        assert_eq!(
            decode_word(&ctx, word),
            number_types::Number::Rational(number_types::RationalValue { numerator: 1, denominator: 3 })
        );
    }

    #[test]
    fn eq_is_reflexive_through_the_word_level_api() {
        let ctx = new_ctx();
        let word = box_immediate(9);
        assert_eq!(eq(&ctx, word, word), box_immediate(1));
    }

    #[test]
    fn is_number_is_true_for_every_immediate() {
        let ctx = new_ctx();
        assert!(is_number(&ctx, box_immediate(-1)));
        assert!(is_number(&ctx, box_immediate(0)));
    }
}

//! Decode/encode the tagged machine word at the boundary between this
//! crate and whatever embeds it. Everything upstream of `decode_word`
//! and downstream of `encode_number` works with the plain `Number` enum;
//! only these two functions know about tag bits and heap addresses.

use number_heap::{
    boxed_tag, cell_size_in_bytes, f32_of, f64_of, i32_of, i64_of, rational_den, rational_num,
    write_f32_cell, write_f64_cell, write_i32_cell, write_i64_cell, write_rational_cell,
};
use number_types::{
    tagging::{self, BoxedTag, TaggedWord},
    Number, RationalValue,
};

use crate::context::NumericContext;

/// Decodes a tagged word into a `Number`, reading the heap if the word
/// is a heap reference. The returned `Number` carries the materialised
/// payload, not the address -- decoding happens once, at the boundary.
pub fn decode_word(ctx: &NumericContext, word: TaggedWord) -> Number {
    if tagging::is_immediate(word) {
        return Number::Immediate(tagging::unbox_immediate(word));
    }

    let addr = tagging::heap_address_of(word) as usize;
    // every cell has a heap-kind word and a tag word before any payload,
    // so the smallest cell size (Int32's, 12 bytes) always covers the
    // header; reading Int64's 16-byte size here instead would over-read
    // past the end of the heap for a 12-byte cell allocated last.
    let tag = boxed_tag(ctx.heap.load(addr, cell_size_in_bytes(BoxedTag::Int32)));
    let bytes = ctx.heap.load(addr, cell_size_in_bytes(tag));

    match tag {
        BoxedTag::Int32 => Number::I32(i32_of(bytes)),
        BoxedTag::Int64 => Number::I64(i64_of(bytes)),
        BoxedTag::Float32 => Number::F32(f32_of(bytes)),
        BoxedTag::Float64 => Number::F64(f64_of(bytes)),
        BoxedTag::Rational => Number::Rational(RationalValue {
            numerator: rational_num(bytes),
            denominator: rational_den(bytes),
        }),
    }
}

/// Encodes a `Number` into a tagged word, allocating a fresh heap cell
/// through `ctx.allocator` for every variant that cannot be carried as
/// an immediate. Every boxed result here is a brand-new allocation; a
/// cell, once published, is never rewritten in place.
pub fn encode_number(ctx: &mut NumericContext, value: Number) -> TaggedWord {
    match value {
        Number::Immediate(v) => tagging::box_immediate(v),
        Number::I32(v) => {
            let addr = ctx.allocator.allocate(&mut ctx.heap, BoxedTag::Int32);
            let bytes = ctx
                .heap
                .load_mut(addr as usize, cell_size_in_bytes(BoxedTag::Int32));
            write_i32_cell(bytes, v);
            tagging::tag_heap_address(addr)
        }
        Number::I64(v) => {
            let addr = ctx.allocator.allocate(&mut ctx.heap, BoxedTag::Int64);
            let bytes = ctx
                .heap
                .load_mut(addr as usize, cell_size_in_bytes(BoxedTag::Int64));
            write_i64_cell(bytes, v);
            tagging::tag_heap_address(addr)
        }
        Number::F32(v) => {
            let addr = ctx.allocator.allocate(&mut ctx.heap, BoxedTag::Float32);
            let bytes = ctx
                .heap
                .load_mut(addr as usize, cell_size_in_bytes(BoxedTag::Float32));
            write_f32_cell(bytes, v);
            tagging::tag_heap_address(addr)
        }
        Number::F64(v) => {
            let addr = ctx.allocator.allocate(&mut ctx.heap, BoxedTag::Float64);
            let bytes = ctx
                .heap
                .load_mut(addr as usize, cell_size_in_bytes(BoxedTag::Float64));
            write_f64_cell(bytes, v);
            tagging::tag_heap_address(addr)
        }
        Number::Rational(r) => {
            let addr = ctx.allocator.allocate(&mut ctx.heap, BoxedTag::Rational);
            let bytes = ctx
                .heap
                .load_mut(addr as usize, cell_size_in_bytes(BoxedTag::Rational));
            write_rational_cell(bytes, r.numerator, r.denominator);
            tagging::tag_heap_address(addr)
        }
    }
}

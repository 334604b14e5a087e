//! Heap cell encoding.
//!
//! A `BOXED_NUM` cell is a small, fixed-layout, word-aligned record:
//!
//! ```text
//! offset 0  | heap kind          (always HEAP_KIND_BOXED_NUM)
//! offset 1W | boxed-number tag   (BoxedTag)
//! offset 2W | payload word 0
//! offset 3W | payload word 1     (absent for 32-bit payloads)
//! ```
//!
//! This module only knows how to read and write those fixed offsets in a
//! byte buffer; it has no notion of where the buffer came from (that is
//! `number-runtime::Heap`'s job) and no notion of which address a value
//! lives at (the allocator's job). It is a small, fixed-width field
//! encoder/decoder pair with no control-flow of its own.

use number_types::tagging::{BoxedTag, HEAP_KIND_BOXED_NUM, WORD_BITS};

const WORD_SIZE: usize = (WORD_BITS / 8) as usize;

const OFFSET_HEAP_KIND: usize = 0;
const OFFSET_BOXED_TAG: usize = WORD_SIZE;
const OFFSET_PAYLOAD_0: usize = 2 * WORD_SIZE;
const OFFSET_PAYLOAD_1: usize = 3 * WORD_SIZE;

/// Size in bytes of a `BOXED_NUM` cell for the given tag.
#[inline]
pub fn cell_size_in_bytes(tag: BoxedTag) -> usize {
    (2 + tag.payload_words()) * WORD_SIZE
}

#[inline]
fn write_word(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + WORD_SIZE].copy_from_slice(&value.to_le_bytes());
}

#[inline]
fn read_word(bytes: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; WORD_SIZE];
    buf.copy_from_slice(&bytes[offset..offset + WORD_SIZE]);
    u32::from_le_bytes(buf)
}

fn write_header(bytes: &mut [u8], tag: BoxedTag) {
    write_word(bytes, OFFSET_HEAP_KIND, HEAP_KIND_BOXED_NUM);
    write_word(bytes, OFFSET_BOXED_TAG, tag as u32);
}

/// Reads the heap-kind word. Callers that walk the heap by address (as
/// opposed to following a tagged word that already claims to be a
/// `BOXED_NUM`) use this to tell a number cell apart from other heap
/// kinds the surrounding VM may store (strings, closures, ...).
#[inline]
pub fn heap_kind(bytes: &[u8]) -> u32 {
    read_word(bytes, OFFSET_HEAP_KIND)
}

#[inline]
pub fn boxed_tag(bytes: &[u8]) -> BoxedTag {
    match read_word(bytes, OFFSET_BOXED_TAG) {
        0 => BoxedTag::Int32,
        1 => BoxedTag::Int64,
        2 => BoxedTag::Float32,
        3 => BoxedTag::Float64,
        4 => BoxedTag::Rational,
        other => unreachable!("corrupt boxed-number tag: {other}"),
    }
}

pub fn write_i32_cell(bytes: &mut [u8], value: i32) {
    write_header(bytes, BoxedTag::Int32);
    write_word(bytes, OFFSET_PAYLOAD_0, value as u32);
}

pub fn i32_of(bytes: &[u8]) -> i32 {
    read_word(bytes, OFFSET_PAYLOAD_0) as i32
}

pub fn write_i64_cell(bytes: &mut [u8], value: i64) {
    write_header(bytes, BoxedTag::Int64);
    write_word(bytes, OFFSET_PAYLOAD_0, value as u32);
    write_word(bytes, OFFSET_PAYLOAD_1, (value >> 32) as u32);
}

pub fn i64_of(bytes: &[u8]) -> i64 {
    let low = read_word(bytes, OFFSET_PAYLOAD_0) as u64;
    let high = read_word(bytes, OFFSET_PAYLOAD_1) as u64;
    ((high << 32) | low) as i64
}

pub fn write_f32_cell(bytes: &mut [u8], value: f32) {
    write_header(bytes, BoxedTag::Float32);
    write_word(bytes, OFFSET_PAYLOAD_0, value.to_bits());
}

pub fn f32_of(bytes: &[u8]) -> f32 {
    f32::from_bits(read_word(bytes, OFFSET_PAYLOAD_0))
}

pub fn write_f64_cell(bytes: &mut [u8], value: f64) {
    write_header(bytes, BoxedTag::Float64);
    let bits = value.to_bits();
    write_word(bytes, OFFSET_PAYLOAD_0, bits as u32);
    write_word(bytes, OFFSET_PAYLOAD_1, (bits >> 32) as u32);
}

pub fn f64_of(bytes: &[u8]) -> f64 {
    let low = read_word(bytes, OFFSET_PAYLOAD_0) as u64;
    let high = read_word(bytes, OFFSET_PAYLOAD_1) as u64;
    f64::from_bits((high << 32) | low)
}

/// Callers must route through `reduce_fraction` before calling this --
/// `den` of zero is a logic error here, not a fault the codec can raise.
pub fn write_rational_cell(bytes: &mut [u8], numerator: i32, denominator: u32) {
    debug_assert!(denominator != 0, "rational cell with zero denominator");
    write_header(bytes, BoxedTag::Rational);
    write_word(bytes, OFFSET_PAYLOAD_0, numerator as u32);
    write_word(bytes, OFFSET_PAYLOAD_1, denominator);
}

pub fn rational_num(bytes: &[u8]) -> i32 {
    read_word(bytes, OFFSET_PAYLOAD_0) as i32
}

pub fn rational_den(bytes: &[u8]) -> u32 {
    read_word(bytes, OFFSET_PAYLOAD_1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn i32_cell_round_trips() {
        let mut bytes = [0u8; 16];
        write_i32_cell(&mut bytes, -123);
        assert_eq!(heap_kind(&bytes), HEAP_KIND_BOXED_NUM);
        assert_eq!(boxed_tag(&bytes), BoxedTag::Int32);
        assert_eq!(i32_of(&bytes), -123);
    }

    #[test]
    fn i64_cell_round_trips() {
        let mut bytes = [0u8; 16];
        write_i64_cell(&mut bytes, i64::MIN);
        assert_eq!(boxed_tag(&bytes), BoxedTag::Int64);
        assert_eq!(i64_of(&bytes), i64::MIN);
    }

    #[test]
    fn f32_cell_round_trips() {
        let mut bytes = [0u8; 16];
        write_f32_cell(&mut bytes, -1.5_f32);
        assert_eq!(boxed_tag(&bytes), BoxedTag::Float32);
        assert_eq!(f32_of(&bytes), -1.5_f32);
    }

    #[test]
    fn f64_cell_round_trips() {
        let mut bytes = [0u8; 16];
        write_f64_cell(&mut bytes, f64::NAN);
        assert_eq!(boxed_tag(&bytes), BoxedTag::Float64);
        assert!(f64_of(&bytes).is_nan());
    }

    #[test]
    fn rational_cell_round_trips() {
        let mut bytes = [0u8; 16];
        write_rational_cell(&mut bytes, -5, 7);
        assert_eq!(boxed_tag(&bytes), BoxedTag::Rational);
        assert_eq!(rational_num(&bytes), -5);
        assert_eq!(rational_den(&bytes), 7);
    }

    #[test]
    fn cell_sizes_match_payload_words() {
        assert_eq!(cell_size_in_bytes(BoxedTag::Int32), 12);
        assert_eq!(cell_size_in_bytes(BoxedTag::Int64), 16);
        assert_eq!(cell_size_in_bytes(BoxedTag::Rational), 16);
    }
}

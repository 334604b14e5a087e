pub mod ops;

pub use ops::{
    bit_and, bit_or, bit_xor, divide, eq, ge, gt, is_number, le, lt, minus, modulo, plus,
    shl, shr_arith, shr_logical, times,
};

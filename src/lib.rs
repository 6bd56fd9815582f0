//! Bitwise AND/OR/XOR/NOT, shifts, bit test/set/unset and binary-string conversion,
//! built only from division, remainder, powers of two and base-2 string parsing.

pub mod bit_table;
pub mod bitops_core;
pub mod combinator;
pub mod convert;
pub mod error;
pub mod policy;
pub mod shift;

#[cfg(target_arch = "wasm32")]
pub mod bitops_wasm;

pub use bit_table::BitTable;
pub use bitops_core::{
    BitQuery, Bitops, band, bisset, bisset_all, blshift, bnot, bor, brshift, bset, bunset, bxor,
    frombin, tobin,
};
pub use combinator::{AND, BinaryOp, OR, XOR};
pub use error::BitopsError;
pub use policy::WidthPolicy;

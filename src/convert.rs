//! Number <-> `'0'`/`'1'` string conversion.

use crate::bit_table::{BitTable, parse_base2};
use crate::error::{BitopsError, Result};

/// Binary digits of `x`, left-padded with `'0'` to at least `min_len` characters.
pub fn to_binary_string(x: u64, min_len: usize) -> String {
    let digits = BitTable::encode(x).to_string();
    format!("{digits:0>min_len$}")
}

/// Parses a string of `'0'`/`'1'`. Leading zeros are dropped first, so an
/// all-zero or empty string reads as 0.
pub fn from_binary_string(s: &str) -> Result<u64> {
    if let Some((index, ch)) = s.char_indices().find(|&(_, ch)| ch != '0' && ch != '1') {
        return Err(BitopsError::InvalidDigit { ch, index });
    }
    parse_base2(s.trim_start_matches('0'), "frombin")
}

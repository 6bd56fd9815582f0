use crate::error::{BitopsError, Result};

/// `2^bits`, failing once the power leaves `u64`.
pub fn pow2(bits: u32) -> Result<u64> {
    2u64.checked_pow(bits)
        .ok_or(BitopsError::Overflow { op: "pow2" })
}

/// `2^bits - 1`, i.e. `bits` ones. Defined up to 64.
pub fn ones(bits: u32) -> Result<u64> {
    match bits {
        64 => Ok(u64::MAX),
        b if b < 64 => Ok(pow2(b)? - 1),
        _ => Err(BitopsError::Overflow { op: "bnot" }),
    }
}

/// `x * 2^bits`.
pub fn blshift(x: u64, bits: u32) -> Result<u64> {
    if x == 0 {
        return Ok(0);
    }
    pow2(bits)
        .ok()
        .and_then(|factor| x.checked_mul(factor))
        .ok_or(BitopsError::Overflow { op: "blshift" })
}

/// `floor(x / 2^bits)`. Shifting by 64 or more leaves nothing.
pub fn brshift(x: u64, bits: u32) -> u64 {
    match pow2(bits) {
        Ok(divisor) => x / divisor,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_by_zero_is_identity() {
        assert_eq!(blshift(0xBEEF, 0), Ok(0xBEEF));
        assert_eq!(brshift(0xBEEF, 0), 0xBEEF);
    }

    #[test]
    fn right_shift_truncates() {
        assert_eq!(brshift(7, 1), 3);
        assert_eq!(brshift(1, 1), 0);
        assert_eq!(brshift(u64::MAX, 63), 1);
        assert_eq!(brshift(u64::MAX, 64), 0);
        assert_eq!(brshift(u64::MAX, 200), 0);
    }

    #[test]
    fn left_shift_overflow() {
        assert_eq!(blshift(1, 63), Ok(1 << 63));
        assert_eq!(blshift(1, 64), Err(BitopsError::Overflow { op: "blshift" }));
        assert_eq!(blshift(3, 63), Err(BitopsError::Overflow { op: "blshift" }));
        assert_eq!(blshift(0, 500), Ok(0));
    }

    #[test]
    fn masks() {
        assert_eq!(ones(0), Ok(0));
        assert_eq!(ones(8), Ok(0xFF));
        assert_eq!(ones(64), Ok(u64::MAX));
        assert!(ones(65).is_err());
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BitopsError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BitopsError {
    /// A host number that is not a non-negative integer below 2^53.
    #[error("invalid argument: {value} is not a non-negative safe integer")]
    InvalidArgument { value: f64 },

    #[error("{op}: expected at least one operand")]
    EmptyOperands { op: &'static str },

    #[error("invalid binary digit {ch:?} at index {index}")]
    InvalidDigit { ch: char, index: usize },

    #[error("{op}: result does not fit in 64 bits")]
    Overflow { op: &'static str },

    /// A result too large to cross back into a double without losing bits.
    #[error("result {value} exceeds the largest safe integer")]
    Unrepresentable { value: u64 },
}

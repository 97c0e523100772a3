use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("base must be between 2 and 10, got {0}")]
    InvalidBase(u32),

    #[error("digit {digit:?} is not valid in base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("bases must be the same, got {0} and {1}")]
    BaseMismatch(u32, u32),

    #[error("subtraction a - b requires a >= b")]
    Underflow,

    #[error("division by zero")]
    DivideByZero,

    #[error("malformed number literal {0:?}, expected (digits)_base")]
    InvalidFormat(String),

    #[error("internal invariant violated: {0}")]
    Invariant(&'static str),
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;

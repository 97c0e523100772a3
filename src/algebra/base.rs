use crate::error::{ArithmeticError, Result};

/// Radix of a positional number, always in `[Base::MIN, Base::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Base(u8);

impl Base {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 10;
    pub const TEN: Base = Base(10);

    pub fn new(base: u32) -> Result<Self> {
        if base < Self::MIN || base > Self::MAX {
            return Err(ArithmeticError::InvalidBase(base));
        }
        Ok(Base(base as u8))
    }

    pub fn get(&self) -> u32 {
        self.0 as u32
    }

    /// Value of an ASCII digit, if it is a valid coefficient in this base.
    pub fn digit_of(&self, c: char) -> Result<u8> {
        match c.to_digit(10) {
            Some(d) if d < self.get() => Ok(d as u8),
            _ => Err(ArithmeticError::InvalidDigit {
                digit: c,
                base: self.get(),
            }),
        }
    }

    pub fn check_digit(&self, d: u32) -> Result<u8> {
        if d >= self.get() {
            return Err(ArithmeticError::InvalidDigit {
                digit: char::from_digit(d, 36).unwrap_or('?'),
                base: self.get(),
            });
        }
        Ok(d as u8)
    }

    pub(crate) fn ensure_same(&self, rhs: &Base) -> Result<()> {
        if self != rhs {
            return Err(ArithmeticError::BaseMismatch(self.get(), rhs.get()));
        }
        Ok(())
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

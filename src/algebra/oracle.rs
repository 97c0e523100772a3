//! Multiplication and division by repeated addition and subtraction.
//!
//! These are far slower than the schoolbook versions in `arith` and exist to
//! check them. `slow_divide` is also the digit oracle inside `divide`, where
//! the quotient is always a single digit.

use std::cmp::Ordering;

use tracing::debug;

use super::natural::NaturalNumber;
use crate::error::{ArithmeticError, Result};

impl NaturalNumber {
    /// `self * rhs`, adding `self` to an accumulator `rhs` times.
    pub fn slow_times(&self, rhs: &NaturalNumber) -> Result<NaturalNumber> {
        self.base.ensure_same(&rhs.base)?;
        let one = NaturalNumber::one(self.base);
        let mut product = NaturalNumber::zero(self.base);
        let mut counter = NaturalNumber::zero(self.base);
        while counter.compare(rhs) == Ordering::Less {
            product = product.plus(self)?;
            counter = counter.plus(&one)?;
        }
        Ok(product)
    }

    /// `self / rhs` rounded down, subtracting `rhs` until the remainder drops
    /// below it.
    pub fn slow_divide(&self, rhs: &NaturalNumber) -> Result<NaturalNumber> {
        self.base.ensure_same(&rhs.base)?;
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        let one = NaturalNumber::one(self.base);
        let mut quotient = NaturalNumber::zero(self.base);
        let mut remainder = self.clone();
        while remainder.compare(rhs) != Ordering::Less {
            remainder = remainder.minus(rhs)?;
            quotient = quotient.plus(&one)?;
        }
        debug!(%quotient, %remainder, "slow divide");
        Ok(quotient)
    }
}

use std::cmp::Ordering;

use tracing::trace;

use super::natural::NaturalNumber;
use crate::error::{ArithmeticError, Result};

impl NaturalNumber {
    /// Schoolbook addition, one carry per position.
    pub fn plus(&self, rhs: &NaturalNumber) -> Result<NaturalNumber> {
        self.base.ensure_same(&rhs.base)?;
        let base = self.base.get();
        let len = self.len().max(rhs.len());
        let mut sum = NaturalNumber::empty(self.base);
        sum.digits.reserve(len + 1);
        // two digits plus a carry stay below 2 * base, so carry is 0 or 1
        let mut carry = 0;
        for i in 0..len {
            let t = self.digit(i) + rhs.digit(i) + carry;
            sum.digits.push((t % base) as u8);
            carry = t / base;
        }
        if carry > 0 {
            sum.digits.push(carry as u8);
        }
        sum.canonicalize();
        Ok(sum)
    }

    /// Schoolbook subtraction `self - rhs`. Fails with `Underflow` when
    /// `self < rhs`.
    pub fn minus(&self, rhs: &NaturalNumber) -> Result<NaturalNumber> {
        self.base.ensure_same(&rhs.base)?;
        if self.compare(rhs) == Ordering::Less {
            return Err(ArithmeticError::Underflow);
        }
        let base = self.base.get() as i32;
        // borrows are written into the next position, which may dip to -1
        let mut scratch: Vec<i32> = self.digits.iter().map(|&d| d as i32).collect();
        let mut difference = NaturalNumber::empty(self.base);
        difference.digits.reserve(scratch.len());
        for i in 0..scratch.len() {
            let y = rhs.digit(i) as i32;
            if scratch[i] >= y {
                difference.digits.push((scratch[i] - y) as u8);
            } else {
                difference.digits.push((scratch[i] + base - y) as u8);
                match scratch.get_mut(i + 1) {
                    Some(next) => *next -= 1,
                    None => {
                        return Err(ArithmeticError::Invariant(
                            "borrow out of the most significant digit",
                        ))
                    }
                }
            }
        }
        difference.canonicalize();
        Ok(difference)
    }

    /// Long multiplication: one partial product line per digit of `self`,
    /// shifted into place and accumulated.
    pub fn times(&self, rhs: &NaturalNumber) -> Result<NaturalNumber> {
        self.base.ensure_same(&rhs.base)?;
        let base = self.base.get();
        let mut product = NaturalNumber::zero(self.base);
        for (i, &a) in self.digits.iter().enumerate() {
            let mut line = NaturalNumber::empty(self.base);
            line.digits.reserve(i + rhs.len() + 1);
            // (base - 1)^2 + carry < base^2, well inside u32
            let mut carry = 0;
            for &b in &rhs.digits {
                let t = a as u32 * b as u32 + carry;
                line.digits.push((t % base) as u8);
                carry = t / base;
            }
            if carry > 0 {
                line.digits.push(carry as u8);
            }
            line.times_base_to_the_power(i);
            line.canonicalize();
            product = product.plus(&line)?;
        }
        product.canonicalize();
        Ok(product)
    }

    /// Long division, quotient only. Each quotient digit is found by
    /// `slow_divide` against the divisor shifted to the current position.
    pub fn divide(&self, rhs: &NaturalNumber) -> Result<NaturalNumber> {
        self.base.ensure_same(&rhs.base)?;
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        if rhs.compare(self) == Ordering::Greater {
            return Ok(NaturalNumber::zero(self.base));
        }

        let mut dividend = self.clone();
        let mut divisor = rhs.clone();
        let mut k = self.len() - rhs.len() + 1;
        divisor.times_base_to_the_power(k - 1);
        if divisor.compare(&dividend) == Ordering::Greater {
            divisor.divide_by_base();
            k -= 1;
        }

        // most significant quotient digit first
        let mut quotient = Vec::with_capacity(k);
        for i in 0..k {
            let d = dividend.slow_divide(&divisor)?;
            let q = match d.digits[..] {
                [q] => q,
                _ => {
                    return Err(ArithmeticError::Invariant(
                        "quotient digit does not fit in one position",
                    ))
                }
            };
            trace!(position = k - 1 - i, digit = q, "quotient digit");
            quotient.push(q);
            if q != 0 {
                dividend = dividend.minus(&divisor.times(&d)?)?;
            }
            if i + 1 < k {
                divisor.divide_by_base();
            }
        }
        quotient.reverse();
        Ok(NaturalNumber::from_parts(self.base, quotient))
    }
}

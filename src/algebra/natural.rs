use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::str::FromStr;

use rand::Rng;

use super::base::Base;
use crate::error::{ArithmeticError, Result};

/// A non-negative integer written in a radix between 2 and 10.
///
/// Digits are stored least-significant first. Every value handed out by this
/// module is canonical: at least one digit, and no zero at the most-significant
/// end unless the value is zero itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NaturalNumber {
    pub(super) base: Base,
    pub(super) digits: Vec<u8>,
}

impl NaturalNumber {
    // Scratch accumulator; canonicalize before it escapes.
    pub(super) fn empty(base: Base) -> NaturalNumber {
        NaturalNumber {
            base,
            digits: vec![],
        }
    }

    pub(super) fn from_parts(base: Base, digits: Vec<u8>) -> NaturalNumber {
        let mut res = NaturalNumber { base, digits };
        res.canonicalize();
        res
    }

    pub fn zero(base: Base) -> NaturalNumber {
        NaturalNumber {
            base,
            digits: vec![0],
        }
    }

    pub fn one(base: Base) -> NaturalNumber {
        NaturalNumber {
            base,
            digits: vec![1],
        }
    }

    /// A single-digit number, `0 <= d < base`.
    pub fn from_digit(d: u32, base: u32) -> Result<NaturalNumber> {
        let base = Base::new(base)?;
        let d = base.check_digit(d)?;
        Ok(NaturalNumber {
            base,
            digits: vec![d],
        })
    }

    /// Builds a number from a string of decimal characters, most-significant
    /// first. Every character must be a digit smaller than `base`. The empty
    /// string is read as zero.
    pub fn from_decimal_str(s: &str, base: u32) -> Result<NaturalNumber> {
        let base = Base::new(base)?;
        Self::parse_digits(s, base)
    }

    fn parse_digits(s: &str, base: Base) -> Result<NaturalNumber> {
        let digits = s
            .chars()
            .rev()
            .map(|c| base.digit_of(c))
            .collect::<Result<Vec<u8>>>()?;
        Ok(NaturalNumber::from_parts(base, digits))
    }

    pub fn from_u64(mut value: u64, base: u32) -> Result<NaturalNumber> {
        let base = Base::new(base)?;
        let b = base.get() as u64;
        let mut digits = vec![];
        while value != 0 {
            digits.push((value % b) as u8);
            value /= b;
        }
        Ok(NaturalNumber::from_parts(base, digits))
    }

    /// The value as a machine integer, or `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        let b = self.base.get() as u64;
        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(b)?.checked_add(d as u64))
    }

    /// Re-expresses this value in another base by Horner evaluation.
    pub fn to_base(&self, target: u32) -> Result<NaturalNumber> {
        let target = Base::new(target)?;
        if target == self.base {
            return Ok(self.clone());
        }
        let radix = NaturalNumber::from_u64(self.base.get() as u64, target.get())?;
        let mut res = NaturalNumber::zero(target);
        for &d in self.digits.iter().rev() {
            let digit = NaturalNumber::from_u64(d as u64, target.get())?;
            res = res.times(&radix)?.plus(&digit)?;
        }
        Ok(res)
    }

    /// A random number with at most `length` digits.
    pub fn random(length: usize, base: Base) -> NaturalNumber {
        let mut rng = rand::thread_rng();
        let digits = (0..length.max(1))
            .map(|_| rng.gen_range(0..base.get()) as u8)
            .collect();
        NaturalNumber::from_parts(base, digits)
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// Coefficients, least-significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    pub(super) fn digit(&self, i: usize) -> u32 {
        self.digits.get(i).map_or(0, |&d| d as u32)
    }

    pub(super) fn canonicalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_canonical(&self) -> bool {
        let b = self.base.get() as u8;
        !self.digits.is_empty()
            && self.digits.iter().all(|&d| d < b)
            && (self.digits.len() == 1 || self.digits.last() != Some(&0))
    }

    /// Both operands must be canonical and share a base.
    pub(super) fn compare(&self, rhs: &NaturalNumber) -> Ordering {
        self.digits
            .len()
            .cmp(&rhs.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(rhs.digits.iter().rev()))
    }

    pub fn try_cmp(&self, rhs: &NaturalNumber) -> Result<Ordering> {
        self.base.ensure_same(&rhs.base)?;
        Ok(self.compare(rhs))
    }

    // self * base^n
    pub(super) fn times_base_to_the_power(&mut self, n: usize) -> &mut Self {
        self.digits.splice(0..0, iter::repeat(0).take(n));
        self
    }

    // self / base, dropping the lowest digit
    pub(super) fn divide_by_base(&mut self) -> &mut Self {
        if self.digits.len() > 1 {
            self.digits.remove(0);
        } else {
            self.digits[0] = 0;
        }
        self
    }
}

impl PartialOrd for NaturalNumber {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        (self.base == rhs.base).then(|| self.compare(rhs))
    }
}

impl fmt::Display for NaturalNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("(")?;
        for d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        write!(f, ")_{}", self.base)
    }
}

impl FromStr for NaturalNumber {
    type Err = ArithmeticError;

    /// Reads the rendered form `(digits)_base`.
    fn from_str(s: &str) -> Result<NaturalNumber> {
        let malformed = || ArithmeticError::InvalidFormat(s.to_string());
        let (digits, base) = s
            .strip_prefix('(')
            .and_then(|rest| rest.rsplit_once(")_"))
            .ok_or_else(malformed)?;
        if digits.is_empty() || base.is_empty() || !base.bytes().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let base = base.parse::<u32>().map_err(|_| malformed())?;
        Self::parse_digits(digits, Base::new(base)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(s: &str, base: u32) -> NaturalNumber {
        NaturalNumber::from_decimal_str(s, base).unwrap()
    }

    #[test]
    fn construct() {
        let a = nat("1011", 2);
        assert_eq!(a.digits(), &[1, 1, 0, 1]);
        assert_eq!(a.base().get(), 2);
        assert_eq!(nat("0", 7).digits(), &[0]);
        assert_eq!(nat("000120", 3).digits(), &[0, 2, 1]);
        assert_eq!(nat("", 10), NaturalNumber::zero(Base::TEN));
        assert_eq!(
            NaturalNumber::from_digit(4, 5).unwrap().digits(),
            &[4]
        );
    }

    #[test]
    fn construct_errors() {
        assert_eq!(
            NaturalNumber::from_decimal_str("12", 11),
            Err(ArithmeticError::InvalidBase(11))
        );
        assert_eq!(
            NaturalNumber::from_decimal_str("12", 1),
            Err(ArithmeticError::InvalidBase(1))
        );
        assert_eq!(
            NaturalNumber::from_decimal_str("102", 2),
            Err(ArithmeticError::InvalidDigit { digit: '2', base: 2 })
        );
        assert_eq!(
            NaturalNumber::from_decimal_str("1a", 10),
            Err(ArithmeticError::InvalidDigit { digit: 'a', base: 10 })
        );
        assert!(NaturalNumber::from_digit(5, 5).is_err());
        assert!(NaturalNumber::from_digit(0, 12).is_err());
    }

    #[test]
    fn canonical_zero() {
        let mut a = NaturalNumber::empty(Base::TEN);
        a.canonicalize();
        assert_eq!(a.digits(), &[0]);
        assert!(a.is_zero());
        let a = NaturalNumber::from_parts(Base::TEN, vec![0, 0, 0]);
        assert_eq!(a.digits(), &[0]);
        assert!(a.is_canonical());
    }

    #[test]
    fn render() {
        assert_eq!(nat("1011", 2).to_string(), "(1011)_2");
        assert_eq!(nat("0", 2).to_string(), "(0)_2");
        assert_eq!(nat("0042", 10).to_string(), "(42)_10");
    }

    #[test]
    fn parse_rendered() {
        for base in Base::MIN..=Base::MAX {
            let base = Base::new(base).unwrap();
            for _i in 0..10 {
                let a = NaturalNumber::random(20, base);
                assert_eq!(a.to_string().parse::<NaturalNumber>(), Ok(a));
            }
        }
        for bad in ["", "(", "()_10", "(12)", "12_10", "(12)_", "(12)_x", "(12)_+3"] {
            assert_eq!(
                bad.parse::<NaturalNumber>(),
                Err(ArithmeticError::InvalidFormat(bad.to_string()))
            );
        }
        assert_eq!(
            "(12)_11".parse::<NaturalNumber>(),
            Err(ArithmeticError::InvalidBase(11))
        );
        assert_eq!(
            "(12)_2".parse::<NaturalNumber>(),
            Err(ArithmeticError::InvalidDigit { digit: '2', base: 2 })
        );
    }

    #[test]
    fn compare() {
        assert_eq!(nat("123", 10).compare(&nat("99", 10)), Ordering::Greater);
        assert_eq!(nat("123", 10).compare(&nat("124", 10)), Ordering::Less);
        assert_eq!(nat("0123", 10).compare(&nat("123", 10)), Ordering::Equal);
        assert_eq!(nat("0", 10).compare(&nat("1", 10)), Ordering::Less);
        assert_eq!(
            nat("12", 3).try_cmp(&nat("12", 4)),
            Err(ArithmeticError::BaseMismatch(3, 4))
        );
        assert_eq!(nat("12", 3).partial_cmp(&nat("12", 4)), None);
        assert!(nat("21", 3) > nat("12", 3));
    }

    #[test]
    fn shifts() {
        let mut a = nat("101", 2);
        a.times_base_to_the_power(3);
        assert_eq!(a, nat("101000", 2));
        a.times_base_to_the_power(0);
        assert_eq!(a, nat("101000", 2));
        a.divide_by_base();
        assert_eq!(a, nat("10100", 2));
        let mut b = nat("7", 10);
        b.divide_by_base();
        assert_eq!(b, nat("0", 10));
    }

    #[test]
    fn clone_is_independent() {
        let a = nat("456", 10);
        let mut b = a.clone();
        b.times_base_to_the_power(2);
        assert_eq!(a, nat("456", 10));
        assert_eq!(b, nat("45600", 10));
    }

    #[test]
    fn machine_integers() {
        assert_eq!(NaturalNumber::from_u64(11, 2).unwrap(), nat("1011", 2));
        assert_eq!(NaturalNumber::from_u64(0, 9).unwrap(), nat("0", 9));
        assert_eq!(nat("1011", 2).to_u64(), Some(11));
        let max = NaturalNumber::from_u64(u64::MAX, 10).unwrap();
        assert_eq!(max.to_string(), format!("({})_10", u64::MAX));
        assert_eq!(max.to_u64(), Some(u64::MAX));
        assert_eq!(nat("18446744073709551616", 10).to_u64(), None);
    }

    #[test]
    fn base_conversion() {
        let a = nat("1234", 10);
        assert_eq!(a.to_base(2).unwrap(), nat("10011010010", 2));
        assert_eq!(a.to_base(7).unwrap(), nat("3412", 7));
        assert_eq!(a.to_base(10).unwrap(), a);
        assert_eq!(nat("0", 3).to_base(5).unwrap(), nat("0", 5));
        assert_eq!(a.to_base(1), Err(ArithmeticError::InvalidBase(1)));
    }

    #[test]
    fn random_is_canonical() {
        for _i in 0..20 {
            let a = NaturalNumber::random(8, Base::new(4).unwrap());
            assert!(a.is_canonical());
            assert!(a.len() <= 8);
        }
        assert!(NaturalNumber::random(0, Base::TEN).is_canonical());
    }
}

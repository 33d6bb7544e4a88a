//! Arbitrary-precision decimal whose equality ignores scale.
//!
//! A `Decimal` is `unscaled * 10^-scale` with an unbounded `BigInt`
//! unscaled value. Two decimals that denote the same number compare equal
//! and hash identically regardless of how many fractional digits they
//! carry, so `1.0 == 1.00`. Representation equality is still available
//! through `is_identical`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};

/// Errors from parsing a `Decimal`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    #[error("cannot parse a decimal from empty input")]
    Empty,
    #[error("expected at least one digit")]
    NoDigits,
    #[error("invalid character {found:?} at offset {offset}")]
    InvalidDigit { found: char, offset: usize },
    #[error("{0} fractional digits exceed the supported scale")]
    ScaleTooLarge(usize),
}

/// A signed arbitrary-precision decimal number.
#[derive(Clone)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

impl Decimal {
    /// Create `unscaled * 10^-scale`.
    pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn one() -> Self {
        Self::new(1, 0)
    }

    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of fractional digits carried.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.sign() == Sign::NoSign
    }

    /// Same unscaled value and same scale.
    #[inline]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.scale == other.scale && self.unscaled == other.unscaled
    }

    /// Strip trailing fractional zeros. Zero normalizes to scale 0.
    pub fn normalize(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 && (&unscaled % 10u32).sign() == Sign::NoSign {
            unscaled /= 10u32;
            scale -= 1;
        }
        Self { unscaled, scale }
    }

    fn numeric_cmp(&self, other: &Self) -> Ordering {
        let lhs = self.normalize();
        let rhs = other.normalize();
        match lhs.scale.cmp(&rhs.scale) {
            Ordering::Equal => lhs.unscaled.cmp(&rhs.unscaled),
            Ordering::Less => rescale(&lhs.unscaled, rhs.scale - lhs.scale).cmp(&rhs.unscaled),
            Ordering::Greater => lhs
                .unscaled
                .cmp(&rescale(&rhs.unscaled, lhs.scale - rhs.scale)),
        }
    }
}

/// `unscaled * 10^by`.
fn rescale(unscaled: &BigInt, by: u32) -> BigInt {
    unscaled * BigInt::from(10u32).pow(by)
}

// Comparison (numeric)

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.numeric_cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric_cmp(other)
    }
}

// Hashing

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

// Conversions

impl From<i64> for Decimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigInt> for Decimal {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecimalError::Empty);
        }
        let (negative, start) = match s.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };

        let mut digits = String::with_capacity(s.len());
        let mut fraction_digits = 0usize;
        let mut seen_point = false;
        for (offset, ch) in s[start..].char_indices() {
            if ch == '.' && !seen_point {
                seen_point = true;
                continue;
            }
            if !ch.is_ascii_digit() {
                return Err(DecimalError::InvalidDigit {
                    found: ch,
                    offset: start + offset,
                });
            }
            digits.push(ch);
            if seen_point {
                fraction_digits += 1;
            }
        }

        let magnitude =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(DecimalError::NoDigits)?;
        let scale = u32::try_from(fraction_digits)
            .map_err(|_| DecimalError::ScaleTooLarge(fraction_digits))?;
        let unscaled = if negative { -magnitude } else { magnitude };
        Ok(Self { unscaled, scale })
    }
}

// Formatting

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;
        if self.unscaled.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{int_part}.{frac_part}")
        } else {
            write!(f, "0.{digits:0>scale$}")
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

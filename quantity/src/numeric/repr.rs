/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::RoundingMode;
use crate::error::UnitError;

/// Largest decimal exponent accepted when parsing.
pub const MAX_EXPONENT: i64 = 1000;

/// Backend-independent decimal: `mantissa * 10^-scale`.
///
/// The scale is part of the value's identity for display purposes
/// ("5000.0000000000" has scale 10), but not for comparisons.
#[derive(Clone, Debug)]
pub struct DecimalRepr {
    mantissa: BigInt,
    scale: u32,
}

impl DecimalRepr {
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        DecimalRepr { mantissa, scale }
    }

    pub fn zero() -> Self {
        DecimalRepr::new(BigInt::zero(), 0)
    }

    pub fn one() -> Self {
        DecimalRepr::new(BigInt::one(), 0)
    }

    pub fn from_i64(n: i64) -> Self {
        DecimalRepr::new(BigInt::from(n), 0)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    pub fn negate(&self) -> Self {
        DecimalRepr::new(-&self.mantissa, self.scale)
    }

    pub fn abs(&self) -> Self {
        DecimalRepr::new(self.mantissa.abs(), self.scale)
    }

    /// Same value, expressed with at least `scale` fractional digits.
    pub fn with_scale_at_least(&self, scale: u32) -> Self {
        match scale > self.scale {
            true => DecimalRepr::new(
                &self.mantissa * pow10(scale - self.scale),
                scale,
            ),
            false => self.clone(),
        }
    }

    /// Mantissas of both operands at their common scale.
    pub fn align(&self, other: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(other.scale);
        (
            self.with_scale_at_least(scale).mantissa,
            other.with_scale_at_least(scale).mantissa,
            scale,
        )
    }

    /// Strips trailing fractional zeros.
    pub fn normalized(&self) -> Self {
        let ten = BigInt::from(10);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;
        while scale > 0 && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            scale -= 1;
        }
        DecimalRepr::new(mantissa, scale)
    }

    /// `self / other` with exactly `scale` fractional digits. The
    /// divisor must be nonzero.
    pub(crate) fn quotient(
        &self,
        other: &Self,
        scale: u32,
        mode: RoundingMode,
    ) -> Self {
        /* (ma / 10^sa) / (mb / 10^sb) * 10^scale */
        let n = &self.mantissa * pow10(scale + other.scale);
        let d = &other.mantissa * pow10(self.scale);
        DecimalRepr::new(div_rounded(&n, &d, mode), scale)
    }

    /// Rounded to exactly `scale` fractional digits, or padded when it
    /// has fewer.
    pub(crate) fn rounded(&self, scale: u32, mode: RoundingMode) -> Self {
        match scale >= self.scale {
            true => self.with_scale_at_least(scale),
            false => DecimalRepr::new(
                div_rounded(&self.mantissa, &pow10(self.scale - scale), mode),
                scale,
            ),
        }
    }

    /// Square root with exactly `scale` fractional digits. The value
    /// must not be negative.
    pub(crate) fn square_root(&self, scale: u32, mode: RoundingMode) -> Self {
        /* sqrt(m / 10^s) * 10^scale = sqrt(n / d) */
        let shift = 2 * scale as i64 - self.scale as i64;
        let (n, d) = match shift >= 0 {
            true => (&self.mantissa * pow10(shift as u32), BigInt::one()),
            false => (self.mantissa.clone(), pow10((-shift) as u32)),
        };
        let q = (&n / &d).sqrt();
        if &q * &q * &d == n {
            return DecimalRepr::new(q, scale);
        }
        let next = &q * BigInt::from(2) + BigInt::one();
        let half = (&n * BigInt::from(4)).cmp(&(&next * &next * &d));
        let root = match mode.rounds_away(false, half, q.is_odd()) {
            true => q + BigInt::one(),
            false => q,
        };
        DecimalRepr::new(root, scale)
    }
}

pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// `n / d` rounded to an integer according to `mode`.
pub(crate) fn div_rounded(
    n: &BigInt,
    d: &BigInt,
    mode: RoundingMode,
) -> BigInt {
    let (q, r) = n.div_rem(d);
    if r.is_zero() {
        return q;
    }
    let negative = (n.sign() == Sign::Minus) != (d.sign() == Sign::Minus);
    let half = (r.abs() * BigInt::from(2)).cmp(&d.abs());
    match mode.rounds_away(negative, half, q.is_odd()) {
        true if negative => q - BigInt::one(),
        true => q + BigInt::one(),
        false => q,
    }
}

impl PartialEq for DecimalRepr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalRepr {}

impl PartialOrd for DecimalRepr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalRepr {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.align(other);
        a.cmp(&b)
    }
}

impl Display for DecimalRepr {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let digits = self.mantissa.abs().to_string();
        let scale = self.scale as usize;
        let sign = match self.is_negative() {
            true => "-",
            false => "",
        };
        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }
        let padded = match digits.len() <= scale {
            true => {
                format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
            }
            false => digits,
        };
        let (int, frac) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, int, frac)
    }
}

impl FromStr for DecimalRepr {
    type Err = UnitError;

    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || UnitError::InvalidNumber(input.to_string());
        let s = input.trim();
        let (number, exponent) = match s.find(['e', 'E']) {
            Some(i) => {
                let exp: i64 = s[i + 1..].parse().map_err(|_| invalid())?;
                if exp.unsigned_abs() > MAX_EXPONENT as u64 {
                    return Err(invalid());
                }
                (&s[..i], exp)
            }
            None => (s, 0),
        };
        let (negative, unsigned) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number.strip_prefix('+').unwrap_or(number)),
        };
        let (int, frac) = match unsigned.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (unsigned, ""),
        };
        if (int.is_empty() && frac.is_empty())
            || !int.chars().chain(frac.chars()).all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        let digits = format!("{}{}", int, frac);
        let mut mantissa: BigInt = digits.parse().map_err(|_| invalid())?;
        if negative {
            mantissa = -mantissa;
        }
        let scale = frac.len() as i64 - exponent;
        match scale >= 0 {
            true => Ok(DecimalRepr::new(
                mantissa,
                u32::try_from(scale).map_err(|_| invalid())?,
            )),
            false => {
                let shift = u32::try_from(-scale).map_err(|_| invalid())?;
                Ok(DecimalRepr::new(mantissa * pow10(shift), 0))
            }
        }
    }
}

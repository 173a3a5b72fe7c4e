/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::ops::{Div, Mul};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::UnitError;
use crate::numeric::repr::pow10;
use crate::numeric::{Backend, DecimalRepr, NumericValue, RoundingMode};

/// Exact rational factor between a unit and its base unit.
///
/// Unit definitions combine these without loss (km/h is 1000/3600);
/// only the final conversion rule rounds, once.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Factor {
    num: BigInt,
    den: BigInt,
}

impl Factor {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        let gcd = num.gcd(&den);
        let (mut num, mut den) = match gcd.is_zero() {
            true => (num, den),
            false => (num / &gcd, den / &gcd),
        };
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        Factor { num, den }
    }

    pub fn zero() -> Self {
        Factor::new(BigInt::zero(), BigInt::one())
    }

    pub fn one() -> Self {
        Factor::new(BigInt::one(), BigInt::one())
    }

    pub fn integer(n: i64) -> Self {
        Factor::new(BigInt::from(n), BigInt::one())
    }

    /// A decimal literal such as `"0.3048"`.
    pub fn decimal(literal: &str) -> Result<Self, UnitError> {
        let repr: DecimalRepr = literal.parse()?;
        Ok(Factor::new(repr.mantissa().clone(), pow10(repr.scale())))
    }

    pub fn ratio(num: i64, den: i64) -> Self {
        Factor::new(BigInt::from(num), BigInt::from(den))
    }

    /// `base^power`, for prefixes.
    pub fn power_of(base: u64, power: i64) -> Self {
        let magnitude = BigInt::from(base).pow(power.unsigned_abs() as u32);
        match power >= 0 {
            true => Factor::new(magnitude, BigInt::one()),
            false => Factor::new(BigInt::one(), magnitude),
        }
    }

    pub fn powi(&self, n: i32) -> Self {
        let e = n.unsigned_abs();
        match n >= 0 {
            true => Factor::new(self.num.pow(e), self.den.pow(e)),
            false => Factor::new(self.den.pow(e), self.num.pow(e)),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }

    /// The factor as a decimal; rounds at `scale` only when the
    /// denominator does not divide a power of ten.
    ///
    /// The quotient is taken on the exact integers; the backend only
    /// has to hold the result.
    pub fn to_value(
        &self,
        backend: &Backend,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<NumericValue, UnitError> {
        let num = DecimalRepr::new(self.num.clone(), 0);
        let repr = match self.den.is_one() {
            true => num,
            false => num.quotient(
                &DecimalRepr::new(self.den.clone(), 0),
                self.terminating_scale().unwrap_or(scale),
                mode,
            ),
        };
        let scale = repr.scale();
        NumericValue::new(repr, backend.clone()).round(scale, mode)
    }

    /// Number of decimals of the exact expansion, if it terminates.
    fn terminating_scale(&self) -> Option<u32> {
        let mut den = self.den.clone();
        let (two, five) = (BigInt::from(2), BigInt::from(5));
        let (mut twos, mut fives) = (0u32, 0u32);
        while (&den % &two).is_zero() {
            den /= &two;
            twos += 1;
        }
        while (&den % &five).is_zero() {
            den /= &five;
            fives += 1;
        }
        match den.is_one() {
            true => Some(twos.max(fives)),
            false => None,
        }
    }
}

impl Mul<Factor> for Factor {
    type Output = Factor;
    fn mul(self, rhs: Factor) -> Factor {
        Factor::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div<Factor> for Factor {
    type Output = Factor;
    fn div(self, rhs: Factor) -> Factor {
        Factor::new(self.num * rhs.den, self.den * rhs.num)
    }
}

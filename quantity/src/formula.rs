/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// The seven SI base dimensions plus digital information.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Digital,
}

impl BaseDimension {
    pub const LIST: &'static [Self] = &[
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::ElectricCurrent,
        Self::Temperature,
        Self::AmountOfSubstance,
        Self::LuminousIntensity,
        Self::Digital,
    ];

    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
            BaseDimension::Digital => "D",
        }
    }

    /// Symbol of the coherent unit for this base dimension.
    pub const fn unit_symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::ElectricCurrent => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::AmountOfSubstance => "mol",
            BaseDimension::LuminousIntensity => "cd",
            BaseDimension::Digital => "B",
        }
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

/// Exponent vector over the base dimensions.
///
/// All composite dimensions are derived from the base vectors through
/// `multiply`, `divide`, `power` and `root`.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DimensionalFormula([i32; 8]);

impl DimensionalFormula {
    pub const DIMENSIONLESS: Self = DimensionalFormula([0; 8]);
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    pub const TIME: Self = Self::base(BaseDimension::Time);
    pub const ELECTRIC_CURRENT: Self =
        Self::base(BaseDimension::ElectricCurrent);
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    pub const AMOUNT_OF_SUBSTANCE: Self =
        Self::base(BaseDimension::AmountOfSubstance);
    pub const LUMINOUS_INTENSITY: Self =
        Self::base(BaseDimension::LuminousIntensity);
    pub const DIGITAL: Self = Self::base(BaseDimension::Digital);

    pub const fn new(exponents: [i32; 8]) -> Self {
        DimensionalFormula(exponents)
    }

    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0; 8];
        exponents[dimension.index()] = 1;
        DimensionalFormula(exponents)
    }

    pub const fn exponents(&self) -> [i32; 8] {
        self.0
    }

    pub const fn exponent(&self, dimension: BaseDimension) -> i32 {
        self.0[dimension.index()]
    }

    pub const fn multiply(self, rhs: Self) -> Self {
        let mut r = self.0;
        let mut i = 0;
        while i < r.len() {
            r[i] += rhs.0[i];
            i += 1;
        }
        DimensionalFormula(r)
    }

    pub const fn divide(self, rhs: Self) -> Self {
        let mut r = self.0;
        let mut i = 0;
        while i < r.len() {
            r[i] -= rhs.0[i];
            i += 1;
        }
        DimensionalFormula(r)
    }

    pub const fn power(self, n: i32) -> Self {
        let mut r = self.0;
        let mut i = 0;
        while i < r.len() {
            r[i] *= n;
            i += 1;
        }
        DimensionalFormula(r)
    }

    /// `multiply`, failing `ExponentOverflow` instead of wrapping.
    pub fn checked_multiply(self, rhs: Self) -> Result<Self, UnitError> {
        self.zip_with(rhs, i32::checked_add, "*")
    }

    /// `divide`, failing `ExponentOverflow` instead of wrapping.
    pub fn checked_divide(self, rhs: Self) -> Result<Self, UnitError> {
        self.zip_with(rhs, i32::checked_sub, "/")
    }

    /// `power`, failing `ExponentOverflow` instead of wrapping.
    pub fn checked_power(self, n: i32) -> Result<Self, UnitError> {
        let mut r = self.0;
        for e in r.iter_mut() {
            *e = e.checked_mul(n).ok_or_else(|| {
                UnitError::ExponentOverflow(format!("{}^{}", self, n))
            })?;
        }
        Ok(DimensionalFormula(r))
    }

    pub fn root(self, n: i32) -> Result<Self, UnitError> {
        if n == 0 {
            return Err(UnitError::InvalidRoot(n));
        }
        let mut r = self.0;
        for e in r.iter_mut() {
            match e.checked_rem(n) {
                Some(0) => *e /= n,
                Some(_) => return Err(UnitError::NonIntegerRoot(self, n)),
                None => {
                    return Err(UnitError::ExponentOverflow(format!(
                        "{}^(1/{})",
                        self, n
                    )))
                }
            }
        }
        Ok(DimensionalFormula(r))
    }

    fn zip_with(
        self,
        rhs: Self,
        op: fn(i32, i32) -> Option<i32>,
        symbol: &str,
    ) -> Result<Self, UnitError> {
        let mut r = self.0;
        for (e, x) in r.iter_mut().zip(rhs.0) {
            *e = op(*e, x).ok_or_else(|| {
                UnitError::ExponentOverflow(format!(
                    "{} {} {}",
                    self, symbol, rhs
                ))
            })?;
        }
        Ok(DimensionalFormula(r))
    }

    pub fn inverse(self) -> Self {
        self.power(-1)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| *e == 0)
    }

    /// Nonzero exponents paired with their base dimension.
    pub fn terms(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::LIST
            .iter()
            .map(|d| (*d, self.exponent(*d)))
            .filter(|(_, e)| *e != 0)
    }

    /// Composite coherent-unit symbol, e.g. `kg⋅m/s²`.
    pub fn unit_symbol(&self, ascii: bool) -> String {
        if self.is_dimensionless() {
            return String::new();
        }
        let (sep, render): (&str, fn(i32) -> String) = match ascii {
            true => ("*", ascii_power),
            false => ("\u{22c5}", superscript_power),
        };
        let join = |positive: bool| {
            self.terms()
                .filter(|(_, e)| (*e > 0) == positive)
                .map(|(d, e)| format!("{}{}", d.unit_symbol(), render(e.abs())))
                .collect::<Vec<_>>()
                .join(sep)
        };
        let (num, den) = (join(true), join(false));
        match (num.is_empty(), den.is_empty()) {
            (_, true) => num,
            (true, false) => format!("1/{}", den),
            (false, false) => format!("{}/{}", num, den),
        }
    }

    /// Reads back a symbol rendered by `unit_symbol`, in either
    /// notation.
    pub fn from_unit_symbol(symbol: &str) -> Option<Self> {
        let (num, den) = match symbol.split_once('/') {
            Some((num, den)) => (num, Some(den)),
            None => (symbol, None),
        };
        let num = match num {
            "1" => DimensionalFormula::DIMENSIONLESS,
            _ => read_terms(num)?,
        };
        match den {
            Some(den) => Some(num / read_terms(den)?),
            None => Some(num),
        }
    }
}

impl Mul<DimensionalFormula> for DimensionalFormula {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div<DimensionalFormula> for DimensionalFormula {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

/// Canonical form: `[L¹T⁻²]`, zeros omitted.
impl Display for DimensionalFormula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "[")?;
        for (d, e) in self.terms() {
            write!(f, "{}{}", d.symbol(), superscript(e))?;
        }
        write!(f, "]")
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(val: i32) -> String {
    val.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(n) => SS[n as usize],
            None => '\u{207b}',
        })
        .collect()
}

fn superscript_power(val: i32) -> String {
    match val {
        1 => String::new(),
        _ => superscript(val),
    }
}

fn read_terms(terms: &str) -> Option<DimensionalFormula> {
    terms.split(['*', '\u{22c5}']).try_fold(
        DimensionalFormula::DIMENSIONLESS,
        |formula, term| {
            let (dimension, power) =
                BaseDimension::LIST.iter().find_map(|d| {
                    let rest = term.strip_prefix(d.unit_symbol())?;
                    Some((*d, read_power(rest)?))
                })?;
            Some(formula * DimensionalFormula::base(dimension).power(power))
        },
    )
}

fn read_power(power: &str) -> Option<i32> {
    if power.is_empty() {
        return Some(1);
    }
    if let Some(ascii) = power.strip_prefix('^') {
        return ascii.parse().ok();
    }
    power
        .chars()
        .map(|c| match SS.iter().position(|s| *s == c) {
            Some(n) => char::from_digit(n as u32, 10),
            None => (c == '\u{207b}').then_some('-'),
        })
        .collect::<Option<String>>()?
        .parse()
        .ok()
}

fn ascii_power(val: i32) -> String {
    match val {
        1 => String::new(),
        _ => format!("^{}", val),
    }
}

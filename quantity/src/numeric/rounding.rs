/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Policy for resolving digits beyond the requested scale.
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
    Default,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Towards zero.
    Down,
    /// Away from zero.
    Up,
    /// Nearest neighbour, ties away from zero.
    #[default]
    HalfUp,
    /// Nearest neighbour, ties towards zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour.
    HalfEven,
    /// Nearest neighbour, ties to the odd neighbour.
    HalfOdd,
}

impl RoundingMode {
    pub const LIST: &'static [Self] = &[
        Self::Ceiling,
        Self::Floor,
        Self::Down,
        Self::Up,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
        Self::HalfOdd,
    ];

    /// Decides whether an inexact result, truncated towards zero,
    /// must be bumped one unit away from zero.
    ///
    /// `negative` is the sign of the exact result, `half` compares the
    /// discarded remainder with half a unit and `odd` is the parity of
    /// the truncated result. Every backend rounds through this one
    /// function.
    pub fn rounds_away(
        self,
        negative: bool,
        half: Ordering,
        odd: bool,
    ) -> bool {
        match self {
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::Down => false,
            RoundingMode::Up => true,
            RoundingMode::HalfUp => half != Ordering::Less,
            RoundingMode::HalfDown => half == Ordering::Greater,
            RoundingMode::HalfEven => {
                half == Ordering::Greater || (half == Ordering::Equal && odd)
            }
            RoundingMode::HalfOdd => {
                half == Ordering::Greater || (half == Ordering::Equal && !odd)
            }
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            RoundingMode::Ceiling => "ceiling",
            RoundingMode::Floor => "floor",
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfDown => "half_down",
            RoundingMode::HalfEven => "half_even",
            RoundingMode::HalfOdd => "half_odd",
        }
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// Scale and rounding applied to every inexact step of an operation.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MathContext {
    pub scale: u32,
    pub rounding: RoundingMode,
}

impl MathContext {
    pub const DEFAULT_SCALE: u32 = 10;

    pub const fn new(scale: u32, rounding: RoundingMode) -> Self {
        MathContext { scale, rounding }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::new(Self::DEFAULT_SCALE, RoundingMode::HalfUp)
    }
}


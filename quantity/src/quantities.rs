/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Thin typed wrappers that guard the dimension of a `Quantity`.

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::numeric::NumericValue;
use crate::quantity::{Measure, Quantity, QuantityType};
use crate::unit::Unit;

macro_rules! typed_quantity {
    ($(#[$meta:meta])* $name:ident, $dimension:ident) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
        #[serde(try_from = "Quantity", into = "Quantity")]
        pub struct $name(Quantity);

        impl $name {
            pub const TYPE: QuantityType =
                QuantityType::Named(Dimension::$dimension);

            pub fn of(
                value: NumericValue,
                unit: Unit,
            ) -> Result<Self, UnitError> {
                Self::TYPE.of(value, unit).map($name)
            }

            pub fn into_inner(self) -> Quantity {
                self.0
            }
        }

        impl Measure for $name {
            fn value(&self) -> &NumericValue {
                self.0.value()
            }

            fn unit(&self) -> Unit {
                self.0.unit()
            }
        }

        impl TryFrom<Quantity> for $name {
            type Error = UnitError;
            fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
                Self::TYPE.from(quantity).map($name)
            }
        }

        impl From<$name> for Quantity {
            fn from(val: $name) -> Self {
                val.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
                self.0.fmt(f)
            }
        }
    };
}

typed_quantity!(Length, Length);
typed_quantity!(Area, Area);
typed_quantity!(Volume, Volume);
typed_quantity!(Mass, Mass);
typed_quantity!(
    /// A span of time, in any time unit.
    Duration,
    Time
);
typed_quantity!(Temperature, Temperature);
typed_quantity!(Speed, Speed);
typed_quantity!(Information, DigitalVolume);
typed_quantity!(DataRate, DataRate);

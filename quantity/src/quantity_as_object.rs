/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::numeric::NumericValue;
use crate::{Quantity, Unit, NEUTRAL_UNIT};

#[derive(Serialize, Deserialize)]
struct QuantityObject {
    value: NumericValue,
    unit: Unit,
}

/* A bare decimal string reads as a dimensionless count. */
#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityEnum {
    Plain(NumericValue),
    Object(QuantityObject),
}

impl From<&Quantity> for QuantityObject {
    fn from(val: &Quantity) -> Self {
        QuantityObject {
            value: val.value().clone(),
            unit: val.unit(),
        }
    }
}

impl From<QuantityEnum> for Quantity {
    fn from(val: QuantityEnum) -> Self {
        match val {
            QuantityEnum::Plain(v) => Quantity::new(v, NEUTRAL_UNIT),
            QuantityEnum::Object(q) => Quantity::new(q.value, q.unit),
        }
    }
}

pub fn serialize<S: Serializer>(
    quantity: &Quantity,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    QuantityObject::from(quantity).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Quantity, D::Error> {
    Ok(QuantityEnum::deserialize(deserializer)?.into())
}

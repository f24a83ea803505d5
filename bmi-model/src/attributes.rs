#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Age,
    Height,
    Weight,
}

/// Attributes recovered from free text. Age is in years, height in meters
/// and weight in kilograms.
///
/// Every field is assigned at most once: the first accepted candidate wins
/// and later candidates for the same field are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedAttributes {
    pub age: Option<u32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl ParsedAttributes {
    pub fn new(age: Option<u32>, height: Option<f64>, weight: Option<f64>) -> Self {
        Self {
            age,
            height,
            weight,
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Age => self.age.map(f64::from),
            Field::Height => self.height,
            Field::Weight => self.weight,
        }
    }

    pub fn is_resolved(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.age.is_some() && self.height.is_some() && self.weight.is_some()
    }

    /// Assigns `value` to `field` unless it already holds one. Age keeps only
    /// the integer part. Returns whether the value was taken.
    pub fn resolve(&mut self, field: Field, value: f64) -> bool {
        if self.is_resolved(field) {
            return false;
        }

        match field {
            Field::Age => self.age = Some(value.trunc() as u32),
            Field::Height => self.height = Some(value),
            Field::Weight => self.weight = Some(value),
        }
        true
    }
}

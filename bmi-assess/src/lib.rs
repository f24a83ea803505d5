use std::ops::RangeInclusive;

use bmi_extract::{Extractor, KeywordExtractor};
use bmi_model::{
    attributes::{Field, ParsedAttributes},
    bmi::BmiResult,
};
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("missing {0}")]
    MissingValue(Field),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: Field, value: f64 },
    #[error(transparent)]
    Classify(#[from] bmi_classify::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

const AGE_YEARS: RangeInclusive<f64> = 1.0..=120.0;
const HEIGHT_M: RangeInclusive<f64> = 0.5..=2.5;
const WEIGHT_KG: RangeInclusive<f64> = 2.0..=500.0;

fn accepted_range(field: Field) -> RangeInclusive<f64> {
    match field {
        Field::Age => AGE_YEARS,
        Field::Height => HEIGHT_M,
        Field::Weight => WEIGHT_KG,
    }
}

/// Checks that all three attributes are present and within the ranges a
/// person can sensibly enter. Returns `(weight, height, age)`.
pub fn validate(attributes: &ParsedAttributes) -> Result<(f64, f64, u32)> {
    let mut values = [0.0; 3];
    for (slot, field) in values
        .iter_mut()
        .zip([Field::Age, Field::Height, Field::Weight])
    {
        let value = attributes.get(field).ok_or(Error::MissingValue(field))?;
        if !accepted_range(field).contains(&value) {
            return Err(Error::OutOfRange { field, value });
        }
        *slot = value;
    }

    let [age, height, weight] = values;
    Ok((weight, height, age as u32))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Assessment {
    pub attributes: ParsedAttributes,
    pub result: BmiResult,
}

pub struct Assessor {
    extractor: Box<dyn Extractor>,
}

impl Assessor {
    pub fn new(extractor: Box<dyn Extractor>) -> Self {
        Self { extractor }
    }

    pub fn assess(&self, text: &str) -> Result<Assessment> {
        let attributes = self.extractor.extract(text);
        info!("Extracted {:?}", attributes);

        let (weight, height, _) = validate(&attributes).inspect_err(|e| {
            warn!("Cannot assess text: {}", e);
        })?;
        let result = bmi_classify::classify(weight, height)?;
        info!(
            "BMI {} classified as {}",
            result.bmi, result.classification
        );

        Ok(Assessment { attributes, result })
    }
}

impl Default for Assessor {
    fn default() -> Self {
        Self::new(Box::new(KeywordExtractor::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_complete_attributes() {
        let attributes = ParsedAttributes::new(Some(25), Some(1.65), Some(70.0));
        assert_eq!(validate(&attributes), Ok((70.0, 1.65, 25)));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let test_data = [
            (ParsedAttributes::new(None, None, None), Field::Age),
            (ParsedAttributes::new(Some(25), None, Some(70.0)), Field::Height),
            (ParsedAttributes::new(Some(25), Some(1.65), None), Field::Weight),
        ];

        for (i, (attributes, expected_field)) in test_data.into_iter().enumerate() {
            assert_eq!(
                validate(&attributes),
                Err(Error::MissingValue(expected_field)),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let test_data = [
            (ParsedAttributes::new(Some(0), Some(1.65), Some(70.0)), Field::Age, 0.0),
            (ParsedAttributes::new(Some(121), Some(1.65), Some(70.0)), Field::Age, 121.0),
            (ParsedAttributes::new(Some(25), Some(2.6), Some(70.0)), Field::Height, 2.6),
            (ParsedAttributes::new(Some(25), Some(1.65), Some(501.0)), Field::Weight, 501.0),
            (ParsedAttributes::new(Some(25), Some(1.65), Some(1.5)), Field::Weight, 1.5),
        ];

        for (i, (attributes, field, value)) in test_data.into_iter().enumerate() {
            assert_eq!(
                validate(&attributes),
                Err(Error::OutOfRange { field, value }),
                "Test case #{}",
                i
            );
        }
    }
}

use bmi_model::bmi::{Bmi, BmiResult, Classification};
use log::debug;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: weight={weight}, height={height}")]
    InvalidInput { weight: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Exclusive upper bounds, checked in order. Anything above the last bound
/// is `ObesityIII`.
const BANDS: [(f64, Classification); 5] = [
    (18.5, Classification::BelowWeight),
    (25.0, Classification::NormalWeight),
    (30.0, Classification::Overweight),
    (35.0, Classification::ObesityI),
    (40.0, Classification::ObesityII),
];

pub fn classification_of(bmi: Bmi) -> Classification {
    BANDS
        .iter()
        .find(|(upper_bound, _)| bmi.value() < *upper_bound)
        .map(|(_, classification)| *classification)
        .unwrap_or(Classification::ObesityIII)
}

/// Computes BMI from weight in kilograms and height in meters and looks up
/// its band. Both inputs must be finite and positive.
pub fn classify(weight: f64, height: f64) -> Result<BmiResult> {
    if !(weight.is_finite() && height.is_finite() && weight > 0.0 && height > 0.0) {
        return Err(Error::InvalidInput { weight, height });
    }

    let bmi = Bmi::new(weight, height);
    let classification = classification_of(bmi);
    debug!("BMI {} classified as {:?}", bmi, classification);

    Ok(BmiResult::new(bmi, classification))
}

pub mod attributes;
pub mod bmi;

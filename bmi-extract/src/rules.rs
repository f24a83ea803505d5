use std::{fs::File, io::BufReader, path::Path};

use bmi_model::attributes::Field;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::Result;

/// How the captured number of a rule becomes a field value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Conversion {
    Decimal,
    /// Decimal divided by 100, for heights written in centimeters.
    Centimeters,
    /// Leading digits only.
    Integer,
}

impl Conversion {
    pub fn apply(&self, raw: &str) -> Option<f64> {
        match self {
            Conversion::Decimal => parse_decimal(raw),
            Conversion::Centimeters => parse_decimal(raw).map(|cm| cm / 100.0),
            Conversion::Integer => raw
                .split('.')
                .next()
                .and_then(|digits| digits.parse::<u32>().ok())
                .map(f64::from),
        }
    }
}

pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// A number immediately followed (after optional whitespace) by one of the
/// unit keywords. `pattern` must not contain capture groups of its own.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Rule {
    pub field: Field,
    pub pattern: String,
    pub keywords: Vec<String>,
    pub conversion: Conversion,
}

impl Rule {
    pub fn new(field: Field, pattern: &str, keywords: &[&str], conversion: Conversion) -> Self {
        Self {
            field,
            pattern: pattern.to_owned(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            conversion,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExtractionRules {
    pub rules: Vec<Rule>,
}

impl ExtractionRules {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let rules: ExtractionRules = ron::de::from_reader(BufReader::new(file))?;

        info!(
            "Loaded {} extraction rules from {}",
            rules.rules.len(),
            path.as_ref().display()
        );
        debug!("Loaded rules: {:?}", rules);
        Ok(rules)
    }
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self::new(vec![
            Rule::new(
                Field::Weight,
                r"[0-9]{2,3}\.?[0-9]*",
                &["kg", "kgs", "quilo", "quilos", "kilos", "pesando"],
                Conversion::Decimal,
            ),
            Rule::new(
                Field::Height,
                r"[0-2]\.[0-9]{1,2}",
                &["m", "metros", "mt", "mts"],
                Conversion::Decimal,
            ),
            Rule::new(
                Field::Height,
                r"1[3-9][0-9]|2[0-2][0-9]",
                &["cm", "centimetros"],
                Conversion::Centimeters,
            ),
            Rule::new(
                Field::Age,
                r"[0-9]{1,3}",
                &["anos", "idade"],
                Conversion::Integer,
            ),
        ])
    }
}

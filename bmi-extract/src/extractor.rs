use std::{
    ops::{Range, RangeInclusive},
    path::Path,
    sync::LazyLock,
};

use bmi_model::attributes::{Field, ParsedAttributes};
use itertools::Itertools;
use log::debug;
use regex::Regex;

use crate::{
    rules::{parse_decimal, Conversion, ExtractionRules, Rule},
    Result,
};

const HEIGHT_CM: RangeInclusive<f64> = 135.0..=230.0;
const HEIGHT_M: RangeInclusive<f64> = 1.35..=2.30;
const WEIGHT_KG: Range<f64> = 35.0..400.0;
const AGE_YEARS: RangeInclusive<f64> = 1.0..=120.0;

static LEFTOVER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").unwrap());

#[mockall::automock]
pub trait Extractor: Send + Sync {
    fn extract(&self, text: &str) -> ParsedAttributes;
}

#[derive(Clone)]
struct CompiledRule {
    field: Field,
    regex: Regex,
    conversion: Conversion,
}

impl CompiledRule {
    fn new(rule: &Rule) -> Result<Self> {
        let keywords = rule.keywords.iter().map(|k| regex::escape(k)).join("|");
        let regex = Regex::new(&format!(r"({})\s*({})", rule.pattern, keywords))?;
        Ok(Self {
            field: rule.field,
            regex,
            conversion: rule.conversion,
        })
    }

    /// Resolves the field from the first match and erases every match, so
    /// unit-tagged numbers never reach inference.
    fn apply(
        &self,
        (text, mut attributes): (String, ParsedAttributes),
    ) -> (String, ParsedAttributes) {
        if attributes.is_resolved(self.field) {
            return (text, attributes);
        }
        let Some(captures) = self.regex.captures(&text) else {
            return (text, attributes);
        };

        match self.conversion.apply(&captures[1]) {
            Some(value) => {
                debug!("Found {} {} in {:?}", self.field, value, &captures[0]);
                attributes.resolve(self.field, value);
            }
            None => debug!("Ignoring unparseable {} in {:?}", self.field, &captures[0]),
        }

        let text = self.regex.replace_all(&text, "").into_owned();
        (text, attributes)
    }
}

/// Finds age, height and weight in free text: first through numbers tagged
/// with a unit keyword, then by guessing from plausible ranges.
#[derive(Clone)]
pub struct KeywordExtractor {
    rules: Vec<CompiledRule>,
}

impl KeywordExtractor {
    pub fn new(rules: &ExtractionRules) -> Result<Self> {
        let rules = rules
            .rules
            .iter()
            .map(CompiledRule::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(&ExtractionRules::from_file(path)?)
    }
}

impl Extractor for KeywordExtractor {
    fn extract(&self, text: &str) -> ParsedAttributes {
        let (leftover, attributes) = self
            .rules
            .iter()
            .fold((normalize(text), ParsedAttributes::default()), |state, rule| {
                rule.apply(state)
            });

        infer(&leftover, attributes)
    }
}

/// Lowercases, turns decimal commas into points and collapses whitespace.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace(',', ".")
        .split_whitespace()
        .join(" ")
}

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0
}

fn infer(leftover: &str, mut attributes: ParsedAttributes) -> ParsedAttributes {
    let values = LEFTOVER_NUMBER
        .find_iter(leftover)
        .filter_map(|m| parse_decimal(m.as_str()));

    for value in values {
        if attributes.height.is_none() {
            if is_whole(value) && HEIGHT_CM.contains(&value) {
                debug!("Inferred height {} cm", value);
                attributes.resolve(Field::Height, value / 100.0);
                continue;
            }
            if HEIGHT_M.contains(&value) {
                debug!("Inferred height {} m", value);
                attributes.resolve(Field::Height, value);
                continue;
            }
        }
        if attributes.weight.is_none() && WEIGHT_KG.contains(&value) {
            debug!("Inferred weight {} kg", value);
            attributes.resolve(Field::Weight, value);
            continue;
        }
        if attributes.age.is_none() && is_whole(value) && AGE_YEARS.contains(&value) {
            debug!("Inferred age {}", value);
            attributes.resolve(Field::Age, value);
            continue;
        }
        debug!("Ignoring leftover number {}", value);
    }

    attributes
}

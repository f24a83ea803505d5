use bmi_assess::{Assessor, Error};
use bmi_extract::MockExtractor;
use bmi_model::{
    attributes::{Field, ParsedAttributes},
    bmi::Classification,
};

fn assessor_returning(attributes: ParsedAttributes) -> Assessor {
    let mut extractor = MockExtractor::new();
    extractor
        .expect_extract()
        .withf(|text| text == "texto da cliente")
        .times(1)
        .returning(move |_| attributes);
    Assessor::new(Box::new(extractor))
}

#[test]
fn assess_classifies_extracted_attributes() {
    let assessor = assessor_returning(ParsedAttributes::new(Some(25), Some(1.65), Some(70.0)));

    let assessment = assessor.assess("texto da cliente").unwrap();

    assert_eq!(assessment.attributes.age, Some(25));
    assert_eq!(assessment.result.bmi.to_string(), "25.71");
    assert_eq!(assessment.result.classification, Classification::Overweight);
    assert_eq!(assessment.result.range, "entre 25.0 e 29.9");
}

#[test]
fn assess_requires_every_attribute() {
    let assessor = assessor_returning(ParsedAttributes::new(Some(25), None, Some(70.0)));

    assert_eq!(
        assessor.assess("texto da cliente"),
        Err(Error::MissingValue(Field::Height))
    );
}

#[test]
fn assess_rejects_values_outside_form_ranges() {
    let assessor = assessor_returning(ParsedAttributes::new(Some(25), Some(3.0), Some(70.0)));

    assert_eq!(
        assessor.assess("texto da cliente"),
        Err(Error::OutOfRange {
            field: Field::Height,
            value: 3.0
        })
    );
}

#[test]
fn assess_free_text_with_default_extractor() {
    let assessor = Assessor::default();

    let test_data = [
        ("Tenho 25 anos, 1.65m e 70kg", "25.71", Classification::Overweight),
        ("peso 80, altura 180, 30 anos", "24.69", Classification::NormalWeight),
        ("Idade 40 anos, 1,70 m, 50 kg", "17.30", Classification::BelowWeight),
        ("tenho 52 anos, 160cm e 105 quilos", "41.02", Classification::ObesityIII),
    ];

    for (i, (text, bmi, classification)) in test_data.into_iter().enumerate() {
        let assessment = assessor.assess(text).unwrap();
        assert_eq!(assessment.result.bmi.to_string(), bmi, "Test case #{}", i);
        assert_eq!(
            assessment.result.classification, classification,
            "Test case #{}",
            i
        );
    }
}

#[test]
fn assessment_serializes_for_callers() {
    let assessment = Assessor::default()
        .assess("Tenho 25 anos, 1.65m e 70kg")
        .unwrap();

    let json = serde_json::to_value(&assessment).unwrap();

    assert_eq!(json["attributes"]["age"], 25);
    assert_eq!(json["attributes"]["height"], 1.65);
    assert_eq!(json["attributes"]["weight"], 70.0);
    assert_eq!(json["result"]["bmi"], "25.71");
    assert_eq!(json["result"]["classification"], "Overweight");
    assert_eq!(json["result"]["range"], "entre 25.0 e 29.9");
}

#[test]
fn unresolved_attributes_serialize_as_null() {
    let json = serde_json::to_value(bmi_extract::extract("sem números")).unwrap();

    assert!(json["age"].is_null());
    assert!(json["height"].is_null());
    assert!(json["weight"].is_null());
}

//! Tests for semantic setting values.

use super::SettingValue;

#[test]
fn parses_numbers_and_choices() {
    assert_eq!("4".parse::<SettingValue>().unwrap(), SettingValue::Number(4.0));
    assert_eq!(
        "1.625".parse::<SettingValue>().unwrap(),
        SettingValue::Number(1.625)
    );
    assert_eq!(
        " G1GC ".parse::<SettingValue>().unwrap(),
        SettingValue::Choice("G1GC".to_string())
    );
}

#[test]
fn integral_numbers_serialize_as_integers() {
    assert_eq!(serde_json::to_string(&SettingValue::Number(3.0)).unwrap(), "3");
    assert_eq!(
        serde_json::to_string(&SettingValue::Number(1.625)).unwrap(),
        "1.625"
    );
    assert_eq!(
        serde_json::to_string(&SettingValue::from("G1GC")).unwrap(),
        "\"G1GC\""
    );
}

#[test]
fn deserializes_untagged() {
    let values: Vec<SettingValue> = serde_json::from_str(r#"[4, 0.5, "ParNewGC"]"#).unwrap();
    assert_eq!(
        values,
        vec![
            SettingValue::Number(4.0),
            SettingValue::Number(0.5),
            SettingValue::Choice("ParNewGC".to_string()),
        ]
    );
}

#[test]
fn accessors_match_kind() {
    let number = SettingValue::from(59);
    assert_eq!(number.as_number(), Some(59.0));
    assert_eq!(number.as_choice(), None);
    assert_eq!(number.kind(), "number");

    let choice = SettingValue::from("G1GC".to_string());
    assert_eq!(choice.as_choice(), Some("G1GC"));
    assert_eq!(choice.as_number(), None);
    assert_eq!(choice.kind(), "choice");
}

#[test]
fn display_quotes_choices() {
    assert_eq!(SettingValue::Number(2.5).to_string(), "2.5");
    assert_eq!(SettingValue::Number(4.0).to_string(), "4");
    assert_eq!(SettingValue::from("G1GC").to_string(), "'G1GC'");
}

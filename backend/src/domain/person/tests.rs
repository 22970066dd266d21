//! Tests for the person model and name grammar.

use super::*;
use rstest::rstest;
use serde_json::json;

fn legal_name_of_len(len: usize) -> String {
    let mut name = String::from("T");
    name.extend("est. -9".chars().cycle().take(len.saturating_sub(1)));
    name
}

#[rstest]
#[case("Test")]
#[case("T")]
#[case("Ada Lovelace")]
#[case("Jean-Luc Picard")]
#[case("J. R. R. Tolkien")]
#[case("R2D2")]
#[case("X-")]
fn accepts_grammatical_names(#[case] name: &str) {
    assert_eq!(validate_name(name), Ok(()));
}

#[rstest]
fn accepts_exactly_max_length() {
    let name = legal_name_of_len(PERSON_NAME_MAX);
    assert_eq!(name.chars().count(), PERSON_NAME_MAX);
    assert_eq!(validate_name(&name), Ok(()));
}

#[rstest]
fn rejects_empty_name() {
    assert_eq!(validate_name(""), Err(NameValidationError::Empty));
}

#[rstest]
#[case("test")]
#[case("Test=")]
#[case(" Test")]
#[case("1Test")]
#[case("Test_Name")]
#[case("Ünal")]
#[case("Tést")]
#[case("Test\n")]
fn rejects_names_outside_grammar(#[case] name: &str) {
    assert_eq!(
        validate_name(name),
        Err(NameValidationError::InvalidCharacters)
    );
}

#[rstest]
fn rejects_legal_but_too_long_name() {
    let name = "TestTestTestTestTestTestTestTestTestTestTestTestTest";
    assert!(name.len() > PERSON_NAME_MAX);
    assert_eq!(
        validate_name(name),
        Err(NameValidationError::TooLong {
            max: PERSON_NAME_MAX
        })
    );
}

#[rstest]
fn grammar_is_checked_before_length() {
    let name = format!("{}=", legal_name_of_len(PERSON_NAME_MAX + 10));
    assert_eq!(
        validate_name(&name),
        Err(NameValidationError::InvalidCharacters)
    );
}

#[rstest]
#[case(
    NameValidationError::Empty,
    "Invalid name! The name must not be empty!"
)]
#[case(
    NameValidationError::InvalidCharacters,
    "Invalid name! The name must contain Latin characters, numbers, signs '-', '.' and start with a capital letter!"
)]
#[case(
    NameValidationError::TooLong { max: PERSON_NAME_MAX },
    "Invalid name! The name must be no longer than 50 characters!"
)]
fn messages_match_public_contract(#[case] error: NameValidationError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn person_name_rejects_invalid_input() {
    assert_eq!(PersonName::new("nope"), Err(NameValidationError::InvalidCharacters));
}

#[rstest]
fn person_serialises_id_and_name() {
    let person = Person::new(PersonId::new(7), PersonName::new("TestA").expect("valid name"));
    let value = serde_json::to_value(&person).expect("serialise person");
    assert_eq!(value, json!({ "id": 7, "name": "TestA" }));
}

#[rstest]
fn person_deserialisation_validates_name() {
    let result: Result<Person, _> = serde_json::from_value(json!({ "id": 1, "name": "bad" }));
    assert!(result.is_err());
}

#[rstest]
fn rename_keeps_identifier() {
    let mut person = Person::new(PersonId::new(3), PersonName::new("TestA").expect("valid name"));
    person.rename(PersonName::new("TestB").expect("valid name"));
    assert_eq!(person.id(), PersonId::new(3));
    assert_eq!(person.name().as_ref(), "TestB");
}

//! Field validation for musician creation
//!
//! Rules are plain functions over a [`CandidateMusician`]. All of them run on
//! every payload and their failures are collected in rule order, so a client
//! sees every problem at once.

use bandroll_common::NewMusician;
use serde::Serialize;
use serde_json::Value;

pub const NAME_REQUIRED: &str = "Name field is required and cannot be empty or whitespace";
pub const INSTRUMENT_REQUIRED: &str =
    "Instrument field is required and cannot be empty or whitespace";

/// Submitted fields before validation
///
/// `None` covers absent, `null` and non-string JSON values alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateMusician {
    pub name: Option<String>,
    pub instrument: Option<String>,
}

impl CandidateMusician {
    /// Pull the candidate fields out of an arbitrary JSON body
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            name: field("name"),
            instrument: field("instrument"),
        }
    }
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: &'static str,
    pub msg: &'static str,
    pub location: &'static str,
}

impl ValidationFailure {
    fn body(field: &'static str, msg: &'static str) -> Self {
        Self {
            field,
            msg,
            location: "body",
        }
    }
}

type Rule = fn(&CandidateMusician) -> Option<ValidationFailure>;

/// Rules in reporting order
const RULES: &[Rule] = &[name_present, instrument_present];

/// Unicode whitespace plus the byte order mark, which
/// `char::is_whitespace` leaves alone
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_field(value: &str) -> &str {
    value.trim_matches(is_trimmable)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| trim_field(v).is_empty())
}

fn name_present(candidate: &CandidateMusician) -> Option<ValidationFailure> {
    is_blank(candidate.name.as_deref()).then(|| ValidationFailure::body("name", NAME_REQUIRED))
}

fn instrument_present(candidate: &CandidateMusician) -> Option<ValidationFailure> {
    is_blank(candidate.instrument.as_deref())
        .then(|| ValidationFailure::body("instrument", INSTRUMENT_REQUIRED))
}

/// Run every rule and collect the failures
pub fn validate(candidate: &CandidateMusician) -> Vec<ValidationFailure> {
    RULES.iter().filter_map(|rule| rule(candidate)).collect()
}

/// Validate and, on success, produce the trimmed record to insert
pub fn validate_new_musician(
    candidate: &CandidateMusician,
) -> Result<NewMusician, Vec<ValidationFailure>> {
    let failures = validate(candidate);

    match (candidate.name.as_deref(), candidate.instrument.as_deref()) {
        (Some(name), Some(instrument)) if failures.is_empty() => {
            Ok(NewMusician::new(trim_field(name), trim_field(instrument)))
        }
        _ => Err(failures),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(name: Option<&str>, instrument: Option<&str>) -> CandidateMusician {
        CandidateMusician {
            name: name.map(String::from),
            instrument: instrument.map(String::from),
        }
    }

    #[test]
    fn test_valid_candidate_has_no_failures() {
        assert!(validate(&candidate(Some("John Doe"), Some("Drums"))).is_empty());
    }

    #[test]
    fn test_missing_name() {
        let failures = validate(&candidate(None, Some("Drums")));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "name");
        assert_eq!(failures[0].msg, NAME_REQUIRED);
    }

    #[test]
    fn test_missing_instrument() {
        let failures = validate(&candidate(Some("Jane Doe"), None));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "instrument");
        assert_eq!(failures[0].msg, INSTRUMENT_REQUIRED);
    }

    #[test]
    fn test_both_missing_accumulates_in_order() {
        let failures = validate(&CandidateMusician::default());
        let fields: Vec<&str> = failures.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["name", "instrument"]);
    }

    #[test]
    fn test_whitespace_equals_missing() {
        for blank in ["", " ", "\t\n  "] {
            assert_eq!(
                validate(&candidate(Some(blank), Some("Bass"))),
                validate(&candidate(None, Some("Bass"))),
                "blank name {:?} should fail like a missing one",
                blank
            );
            assert_eq!(
                validate(&candidate(Some("Sting"), Some(blank))),
                validate(&candidate(Some("Sting"), None)),
            );
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let failures = validate(&candidate(Some("\u{FEFF}"), Some("Bass")));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].msg, NAME_REQUIRED);

        let failures = validate(&candidate(Some("Sting"), Some(" \u{FEFF}\u{A0} ")));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].msg, INSTRUMENT_REQUIRED);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed_from_stored_value() {
        let record = validate_new_musician(&candidate(Some("\u{FEFF}Sting"), Some("Bass\u{FEFF}")))
            .expect("Candidate should be valid");
        assert_eq!(record, NewMusician::new("Sting", "Bass"));
    }

    #[test]
    fn test_from_json_ignores_non_strings() {
        let parsed = CandidateMusician::from_json(&json!({
            "name": null,
            "instrument": 42,
        }));
        assert_eq!(parsed, CandidateMusician::default());

        let parsed = CandidateMusician::from_json(&json!(["not", "an", "object"]));
        assert_eq!(parsed, CandidateMusician::default());
    }

    #[test]
    fn test_validated_record_is_trimmed() {
        let record = validate_new_musician(&candidate(Some("  Ringo Starr "), Some("Drums\n")))
            .expect("Candidate should be valid");
        assert_eq!(record, NewMusician::new("Ringo Starr", "Drums"));
    }

    #[test]
    fn test_failure_serializes_with_msg_key() {
        let value = serde_json::to_value(ValidationFailure::body("name", NAME_REQUIRED)).unwrap();
        assert_eq!(
            value,
            json!({ "field": "name", "msg": NAME_REQUIRED, "location": "body" })
        );
    }
}

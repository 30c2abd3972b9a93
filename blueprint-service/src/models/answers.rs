//! The assessment answers submitted by the client.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One submitted assessment. Nothing is validated: whatever the caller sent
/// is rendered into the prompt, and anything missing renders as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnswerRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub business: String,
    #[serde(deserialize_with = "lenient_text")]
    pub goal: String,
    #[serde(deserialize_with = "lenient_text")]
    pub challenge: String,
    #[serde(deserialize_with = "lenient_text")]
    pub current_marketing: String,
    #[serde(deserialize_with = "lenient_text")]
    pub target_customer: String,
    #[serde(deserialize_with = "lenient_text")]
    pub budget: String,
}

impl AnswerRecord {
    /// Parse a raw request body.
    ///
    /// A blank body, or valid JSON that is not an object, yields an
    /// all-empty record. Only bytes that are not JSON at all are an error.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            _ => Ok(Self::default()),
        }
    }
}

/// Accept any JSON value for a text field: null is empty, strings pass
/// through, everything else keeps its JSON rendering.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let body = br#"{
            "name": "Dana",
            "business": "Bakery",
            "goal": "Scale Revenue & Growth",
            "challenge": "Inconsistent leads",
            "current_marketing": "Instagram",
            "target_customer": "Local families",
            "budget": "$500"
        }"#;

        let answers = AnswerRecord::from_body(body).unwrap();
        assert_eq!(answers.name, "Dana");
        assert_eq!(answers.goal, "Scale Revenue & Growth");
        assert_eq!(answers.current_marketing, "Instagram");
        assert_eq!(answers.budget, "$500");
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let answers = AnswerRecord::from_body(br#"{"name": "Dana", "goal": null}"#).unwrap();
        assert_eq!(answers.name, "Dana");
        assert_eq!(answers.goal, "");
        assert_eq!(answers.business, "");
    }

    #[test]
    fn non_string_values_keep_their_json_text() {
        let answers =
            AnswerRecord::from_body(br#"{"budget": 1500, "goal": true, "challenge": ["a"]}"#)
                .unwrap();
        assert_eq!(answers.budget, "1500");
        assert_eq!(answers.goal, "true");
        assert_eq!(answers.challenge, r#"["a"]"#);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let answers = AnswerRecord::from_body(br#"{"name": "Dana", "email": "x@y.z"}"#).unwrap();
        assert_eq!(answers.name, "Dana");
    }

    #[test]
    fn blank_body_is_an_empty_record() {
        assert_eq!(AnswerRecord::from_body(b"").unwrap(), AnswerRecord::default());
        assert_eq!(
            AnswerRecord::from_body(b"  \n").unwrap(),
            AnswerRecord::default()
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AnswerRecord::from_body(b"{not json").is_err());
    }

    #[test]
    fn non_object_json_is_an_empty_record() {
        let bodies: [&[u8]; 4] = [br#"["Dana", "Bakery"]"#, br#""Dana""#, b"42", b"null"];
        for body in bodies {
            assert_eq!(AnswerRecord::from_body(body).unwrap(), AnswerRecord::default());
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A person's registration record. `program` is free text; nothing ties it
/// to an existing [`crate::Program`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BioData {
    /// Store-assigned identifier, hex string on the wire.
    pub id: String,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub program: String,
    pub date: DateTime<Utc>,
}

/// Request body for creating or fully replacing a BioData record.
///
/// Text fields default to the empty string when omitted: a PUT replaces all
/// four fields, never merges.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BioDataInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    #[serde(default)]
    pub program: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn wire_field_is_camel_case() {
        let rec = BioData {
            id: "652f8a1e9d1c2b3a4f5e6d7c".into(),
            name: "Ada".into(),
            phone_number: "555-1111".into(),
            program: "Choir".into(),
            date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["phoneNumber"], "555-1111");
        assert!(json.get("phone_number").is_none());
    }

    #[test]
    fn input_text_fields_default_to_empty() {
        let input: BioDataInput =
            serde_json::from_str(r#"{"date":"2024-03-01T00:00:00Z"}"#).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.phone_number, "");
        assert_eq!(input.program, "");
    }

    #[test]
    fn input_requires_date() {
        let res = serde_json::from_str::<BioDataInput>(r#"{"name":"Ada"}"#);
        assert!(res.is_err());
    }
}

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// One workshop as it appears on the wire. Field names are camelCase there;
/// unknown extra fields are ignored, missing or mistyped ones are an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopRecord {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed workshop payload: {message}")]
    Malformed { message: String },
    #[error("workshop {id}: {field} is not a date: {value:?}")]
    InvalidDate {
        id: u64,
        field: &'static str,
        value: String,
    },
}

/// Decode a page of workshops from raw JSON bytes, validating the strict
/// record shape. The service's loosely typed payload never passes through
/// undecoded; a failure here surfaces as a failed fetch.
pub fn decode_page(bytes: &[u8]) -> Result<Vec<WorkshopRecord>, DecodeError> {
    let records: Vec<WorkshopRecord> =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Malformed {
            message: err.to_string(),
        })?;

    for record in &records {
        validate_date(record.id, "startDate", &record.start_date)?;
        validate_date(record.id, "endDate", &record.end_date)?;
    }

    Ok(records)
}

/// Accepts plain ISO-8601 calendar dates and full RFC 3339 timestamps,
/// the two shapes the reference service emits.
fn validate_date(id: u64, field: &'static str, value: &str) -> Result<(), DecodeError> {
    let plain = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    let timestamp = DateTime::parse_from_rfc3339(value).is_ok();
    if plain || timestamp {
        Ok(())
    } else {
        Err(DecodeError::InvalidDate {
            id,
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_page, DecodeError};

    #[test]
    fn decodes_camel_case_records_and_ignores_extras() {
        let body = br#"[
            {
                "id": 1,
                "name": "Angular JS Bootcamp",
                "imageUrl": "https://example.com/angular.png",
                "startDate": "2019-01-01",
                "endDate": "2019-01-03",
                "category": "frontend",
                "location": { "address": "Tata Elxsi", "city": "Bangalore" }
            }
        ]"#;

        let records = decode_page(body).expect("decode ok");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Angular JS Bootcamp");
        assert_eq!(records[0].image_url, "https://example.com/angular.png");
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        let body = br#"[
            {
                "id": 2,
                "name": "React Bootcamp",
                "imageUrl": "https://example.com/react.png",
                "startDate": "2019-12-24T04:55:49.697Z",
                "endDate": "2019-12-28T04:55:49.697Z"
            }
        ]"#;

        assert!(decode_page(body).is_ok());
    }

    #[test]
    fn missing_field_is_malformed() {
        let body = br#"[{ "id": 1, "name": "No image" }]"#;
        assert!(matches!(
            decode_page(body),
            Err(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn non_array_payload_is_malformed() {
        let body = br#"{ "error": "oops" }"#;
        assert!(matches!(
            decode_page(body),
            Err(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn garbage_date_is_rejected() {
        let body = br#"[
            {
                "id": 3,
                "name": "Bad dates",
                "imageUrl": "https://example.com/bad.png",
                "startDate": "soon",
                "endDate": "2019-01-03"
            }
        ]"#;

        assert_eq!(
            decode_page(body),
            Err(DecodeError::InvalidDate {
                id: 3,
                field: "startDate",
                value: "soon".to_string(),
            })
        );
    }

    #[test]
    fn empty_array_decodes_to_empty_page() {
        assert_eq!(decode_page(b"[]").expect("decode ok"), Vec::new());
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::ContentBlock;
use crate::timestamp;

/// One clipboard history entry as read from the source store.
///
/// Field names follow the store's own vocabulary on the JSON side
/// (`firstCopiedAt`, `numberOfCopies`, ...). `pin` and `application` are
/// dropped from the output when empty, `contents` when it has no blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pin: String,
    pub first_copied_at: DateTime<Utc>,
    pub last_copied_at: DateTime<Utc>,
    pub number_of_copies: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub application: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<ContentBlock>,
}

impl HistoryRecord {
    pub fn is_pinned(&self) -> bool {
        !self.pin.is_empty()
    }
}

/// Row staging form: every column the store may hand back as NULL.
///
/// Produced by the row decoder, then promoted with [`NullableRecord::into_record`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullableRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub pin: Option<String>,
    /// Raw reference-relative seconds, see [`crate::timestamp`].
    pub first_copied_at: Option<f64>,
    pub last_copied_at: Option<f64>,
    pub number_of_copies: Option<i64>,
    pub application: Option<String>,
}

impl NullableRecord {
    /// Promote to a [`HistoryRecord`] with empty contents.
    ///
    /// NULL columns become zero values; negative copy counts clamp to zero.
    pub fn into_record(self) -> HistoryRecord {
        HistoryRecord {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            pin: self.pin.unwrap_or_default(),
            first_copied_at: self
                .first_copied_at
                .map(timestamp::decode)
                .unwrap_or_else(timestamp::unrecorded),
            last_copied_at: self
                .last_copied_at
                .map(timestamp::decode)
                .unwrap_or_else(timestamp::unrecorded),
            number_of_copies: self
                .number_of_copies
                .map(|n| n.max(0) as u64)
                .unwrap_or_default(),
            application: self.application.unwrap_or_default(),
            contents: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_all_null_promotes_to_zero_values() {
        let record = NullableRecord::default().into_record();

        assert_eq!(record.id, 0);
        assert_eq!(record.title, "");
        assert_eq!(record.pin, "");
        assert_eq!(record.application, "");
        assert_eq!(record.number_of_copies, 0);
        assert!(timestamp::is_unrecorded(&record.first_copied_at));
        assert!(timestamp::is_unrecorded(&record.last_copied_at));
        assert!(record.contents.is_empty());
    }

    #[test]
    fn test_promotion_decodes_timestamps() {
        let record = NullableRecord {
            id: Some(7),
            title: Some("hello".to_string()),
            pin: Some("h".to_string()),
            first_copied_at: Some(0.0),
            last_copied_at: Some(86_400.5),
            number_of_copies: Some(3),
            application: Some("com.apple.Safari".to_string()),
        }
        .into_record();

        assert_eq!(record.id, 7);
        assert!(record.is_pinned());
        assert_eq!(
            record.first_copied_at,
            Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            record.last_copied_at,
            Utc.with_ymd_and_hms(2001, 1, 2, 0, 0, 0).unwrap()
                + chrono::TimeDelta::milliseconds(500)
        );
        assert_eq!(record.number_of_copies, 3);
    }

    #[test]
    fn test_inverted_copy_times_pass_through() {
        let record = NullableRecord {
            first_copied_at: Some(200.0),
            last_copied_at: Some(100.0),
            ..Default::default()
        }
        .into_record();

        assert!(record.last_copied_at < record.first_copied_at);
    }

    #[test]
    fn test_negative_copy_count_clamps() {
        let record = NullableRecord {
            number_of_copies: Some(-4),
            ..Default::default()
        }
        .into_record();

        assert_eq!(record.number_of_copies, 0);
    }

    #[test]
    fn test_empty_optional_fields_are_omitted_from_json() {
        let record = NullableRecord {
            id: Some(1),
            title: Some("plain".to_string()),
            first_copied_at: Some(0.0),
            last_copied_at: Some(60.0),
            number_of_copies: Some(1),
            ..Default::default()
        }
        .into_record();

        insta::assert_json_snapshot!(record, @r###"
        {
          "id": 1,
          "title": "plain",
          "firstCopiedAt": "2001-01-01T00:00:00Z",
          "lastCopiedAt": "2001-01-01T00:01:00Z",
          "numberOfCopies": 1
        }
        "###);
    }

    #[test]
    fn test_populated_record_json_field_names() {
        let mut record = NullableRecord {
            id: Some(2),
            title: Some("logo".to_string()),
            pin: Some("l".to_string()),
            first_copied_at: Some(0.0),
            last_copied_at: Some(0.0),
            number_of_copies: Some(2),
            application: Some("com.figma.Desktop".to_string()),
        }
        .into_record();
        record.contents.push(ContentBlock::new("public.png", vec![1, 2, 3]));

        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        for key in [
            "id",
            "title",
            "pin",
            "firstCopiedAt",
            "lastCopiedAt",
            "numberOfCopies",
            "application",
            "contents",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(json["contents"][0]["value"], "AQID");
    }
}

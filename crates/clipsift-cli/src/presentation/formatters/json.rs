use clipsift_types::HistoryRecord;

/// Two-space indented JSON array, the shape `items`, `pins` and `export` share.
pub fn records_to_json(records: &[HistoryRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use clipsift_types::ContentBlock;

    #[test]
    fn test_records_to_json_is_indented_array() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let record = HistoryRecord {
            id: 7,
            title: "hi".to_string(),
            pin: String::new(),
            first_copied_at: at,
            last_copied_at: at,
            number_of_copies: 2,
            application: "com.apple.Terminal".to_string(),
            contents: vec![ContentBlock::new("public.utf8-plain-text", "hi")],
        };

        let json = records_to_json(&[record]).unwrap();

        assert!(json.starts_with("[\n  {\n    \"id\": 7,"));
        assert!(json.contains("\"lastCopiedAt\": \"2024-03-01T09:00:00Z\""));
        assert!(!json.contains("\"pin\""));
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(records_to_json(&[]).unwrap(), "[]");
    }
}

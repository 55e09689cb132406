// Flattens the nested API response into ShareRecords.

use crate::api::{RawResponse, RawShare};
use crate::model::{ShareRecord, UNKNOWN};

/// Turn one API response into records for `post_id`, keeping API order.
/// A response without `data` yields no records.
pub fn normalize(post_id: &str, raw: &RawResponse) -> Vec<ShareRecord> {
    raw.data
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|share| to_record(post_id, share))
        .collect()
}

fn to_record(post_id: &str, share: &RawShare) -> ShareRecord {
    let from = share.from.as_ref();
    let or_unknown = |v: Option<&String>| v.cloned().unwrap_or_else(|| UNKNOWN.to_string());

    ShareRecord {
        post_id: post_id.to_string(),
        shared_by: or_unknown(from.and_then(|f| f.name.as_ref())),
        user_id: or_unknown(from.and_then(|f| f.id.as_ref())),
        shared_time: or_unknown(share.created_time.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> RawResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn single_share_maps_every_field() {
        let raw = parse(
            r#"{"data":[{"id":"s1","from":{"name":"Alice","id":"u1"},"created_time":"2024-01-01T00:00:00+0000"}]}"#,
        );
        let records = normalize("123", &raw);
        assert_eq!(
            records,
            vec![ShareRecord {
                post_id: "123".into(),
                shared_by: "Alice".into(),
                user_id: "u1".into(),
                shared_time: "2024-01-01T00:00:00+0000".into(),
            }]
        );
    }

    #[test]
    fn no_data_key_gives_nothing() {
        assert!(normalize("1", &parse(r#"{"paging":{}}"#)).is_empty());
        assert!(normalize("1", &parse(r#"{"data":[]}"#)).is_empty());
    }

    #[test]
    fn only_missing_fields_become_unknown() {
        let raw = parse(
            r#"{"data":[
                {"from":{"id":"u2"},"created_time":"t2"},
                {"from":{"name":"Bob"},"created_time":"t3"},
                {"from":{"name":"Cy","id":"u4"}},
                {"id":"s5"}
            ]}"#,
        );
        let records = normalize("p", &raw);

        assert_eq!(records[0].shared_by, UNKNOWN);
        assert_eq!(records[0].user_id, "u2");
        assert_eq!(records[0].shared_time, "t2");

        assert_eq!(records[1].shared_by, "Bob");
        assert_eq!(records[1].user_id, UNKNOWN);

        assert_eq!(records[2].user_id, "u4");
        assert_eq!(records[2].shared_time, UNKNOWN);

        assert_eq!(records[3].values(), ["p", UNKNOWN, UNKNOWN, UNKNOWN]);
    }

    #[test]
    fn keeps_api_order_and_duplicates() {
        let raw = parse(
            r#"{"data":[
                {"from":{"name":"Z","id":"1"}},
                {"from":{"name":"A","id":"2"}},
                {"from":{"name":"Z","id":"1"}}
            ]}"#,
        );
        let names: Vec<_> = normalize("p", &raw)
            .into_iter()
            .map(|r| r.shared_by)
            .collect();
        assert_eq!(names, ["Z", "A", "Z"]);
    }
}

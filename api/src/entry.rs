use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::sentinel::Sentinel;

/// One block of the ledger, as served by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub index: u64,
    pub timestamp: i64, // seconds since 1970-01-01 00:00 UTC
    #[serde(rename = "data")]
    pub payload: String,
    #[serde(rename = "previous")]
    pub previous_hash: String,
    pub nonce: u64,
    pub hash: String,
    #[serde(rename = "diff_bits")]
    pub difficulty_bits: u32,
    #[serde(rename = "acc_diff", serialize_with = "serialize_difficulty")]
    pub accumulated_difficulty: f64,
}

// Largest integer an f64 holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Whole values go back out as JSON integers, the way the node sends them.
fn serialize_difficulty<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        if *value >= 0.0 {
            serializer.serialize_u64(*value as u64)
        } else {
            serializer.serialize_i64(*value as i64)
        }
    } else {
        serializer.serialize_f64(*value)
    }
}

impl LedgerEntry {
    pub fn from_json(json: &str) -> Result<LedgerEntry, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The block time, or `None` if the timestamp is out of range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    pub fn is_genesis(&self, sentinel: &Sentinel) -> bool {
        sentinel.matches(&self.previous_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIRE: &str = r#"{
        "index": 7,
        "timestamp": 1700000000,
        "data": "hello",
        "previous": "ab12",
        "nonce": 42,
        "hash": "cd34",
        "diff_bits": 8,
        "acc_diff": 2048
    }"#;

    #[test]
    fn test_decode_wire_names() {
        let entry = LedgerEntry::from_json(WIRE).unwrap();
        assert_eq!(entry.index, 7);
        assert_eq!(entry.payload, "hello");
        assert_eq!(entry.previous_hash, "ab12");
        assert_eq!(entry.hash, "cd34");
        assert_eq!(entry.difficulty_bits, 8);
        assert_eq!(entry.accumulated_difficulty, 2048.0);
    }

    #[test]
    fn test_encode_uses_wire_names() {
        let entry = LedgerEntry::from_json(WIRE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&entry.to_json().unwrap()).unwrap();
        assert_eq!(value["data"], "hello");
        assert_eq!(value["previous"], "ab12");
        assert_eq!(value["diff_bits"], 8);
        assert!(value.get("payload").is_none());
    }

    #[test]
    fn test_whole_difficulty_stays_integer() {
        let entry = LedgerEntry::from_json(WIRE).unwrap();
        let json = entry.to_json().unwrap();
        assert!(json.contains(r#""acc_diff":2048"#));
        assert!(!json.contains("2048.0"));

        let mut fractional = entry.clone();
        fractional.accumulated_difficulty = 12.5;
        assert!(fractional.to_json().unwrap().contains(r#""acc_diff":12.5"#));

        let back = LedgerEntry::from_json(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_missing_field_is_error() {
        assert!(LedgerEntry::from_json(r#"{"index": 1}"#).is_err());
    }

    #[test]
    fn test_datetime() {
        let entry = LedgerEntry::from_json(WIRE).unwrap();
        let dt = entry.datetime().unwrap();
        assert_eq!(dt.to_rfc2822(), "Tue, 14 Nov 2023 22:13:20 +0000");
    }

    #[test]
    fn test_is_genesis() {
        let mut entry = LedgerEntry::from_json(WIRE).unwrap();
        let sentinel = Sentinel::zeros(4).unwrap();
        assert!(!entry.is_genesis(&sentinel));
        entry.previous_hash = "0000".into();
        assert!(entry.is_genesis(&sentinel));
    }
}

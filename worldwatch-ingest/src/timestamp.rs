//! Millisecond timestamps in the extended-JSON envelope the endpoint emits:
//! `{"$date": {"$numberLong": "1700000000000"}}`. `$numberLong` arrives as a
//! string or a number depending on the record, and legacy records carry a
//! bare millisecond number under `$date`.

use serde::{Deserialize, Deserializer};

/// Optional epoch-millisecond instant. Default (and any unparseable
/// envelope) is "absent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp(Option<i64>);

impl Timestamp {
    pub fn from_millis(ms: i64) -> Self {
        Timestamp(Some(ms))
    }

    pub fn millis(&self) -> Option<i64> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Outer {
            Envelope(Envelope),
            // Anything that is not an envelope object (a bare number, a
            // string, garbage inside `$date`) decodes as absent.
            Other(serde::de::IgnoredAny),
        }

        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "$date", default)]
            date: Option<DateRepr>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DateRepr {
            Wrapped {
                #[serde(rename = "$numberLong")]
                value: LongRepr,
            },
            Millis(i64),
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LongRepr {
            Number(i64),
            Text(String),
        }

        let millis = match Outer::deserialize(deserializer)? {
            Outer::Envelope(env) => match env.date {
                Some(DateRepr::Wrapped {
                    value: LongRepr::Number(n),
                }) => Some(n),
                Some(DateRepr::Wrapped {
                    value: LongRepr::Text(s),
                }) => s.parse::<i64>().ok(),
                Some(DateRepr::Millis(n)) => Some(n),
                None => None,
            },
            Outer::Other(_) => None,
        };

        Ok(Timestamp(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(rename = "Expiry", default)]
        expiry: Timestamp,
    }

    #[test]
    fn test_string_number_long() {
        let h: Holder =
            serde_json::from_str(r#"{"Expiry": {"$date": {"$numberLong": "1700000000000"}}}"#)
                .unwrap();
        assert_eq!(h.expiry.millis(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_numeric_number_long() {
        let h: Holder =
            serde_json::from_str(r#"{"Expiry": {"$date": {"$numberLong": 1700000000000}}}"#)
                .unwrap();
        assert_eq!(h.expiry.millis(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_bare_millis_date() {
        let h: Holder = serde_json::from_str(r#"{"Expiry": {"$date": 1700000000000}}"#).unwrap();
        assert_eq!(h.expiry.millis(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_missing_field_is_absent() {
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(h.expiry.millis(), None);
    }

    #[test]
    fn test_garbage_number_long_is_absent() {
        let h: Holder =
            serde_json::from_str(r#"{"Expiry": {"$date": {"$numberLong": "soon"}}}"#).unwrap();
        assert_eq!(h.expiry.millis(), None);
    }

    #[test]
    fn test_non_object_envelope_is_absent() {
        for body in [
            r#"{"Expiry": 1700000000000}"#,
            r#"{"Expiry": "soon"}"#,
            r#"{"Expiry": null}"#,
            r#"{"Expiry": {"$date": true}}"#,
        ] {
            let h: Holder = serde_json::from_str(body).unwrap();
            assert_eq!(h.expiry.millis(), None, "body: {body}");
        }
    }
}

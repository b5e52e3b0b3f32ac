//! Serde support: an `SrpInteger` travels as its fixed-width hex string.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::SrpInteger;

impl Serialize for SrpInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hex = self
            .to_hex()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&hex)
    }
}

struct SrpIntegerVisitor;

impl<'de> Visitor<'de> for SrpIntegerVisitor {
    type Value = SrpInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a hex string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SrpInteger, E> {
        SrpInteger::from_hex(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for SrpInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(SrpIntegerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    struct Ephemeral {
        public: SrpInteger,
        secret: SrpInteger,
    }

    #[test]
    fn test_serialize_keeps_width() {
        let value = SrpInteger::from_hex("00ff").unwrap();
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("00ff"));
    }

    #[test]
    fn test_serialize_without_width_fails() {
        let a = SrpInteger::from_hex("01").unwrap();
        let sum = a.add(&a);

        let err = serde_json::to_string(&sum).unwrap_err();
        assert!(err.to_string().contains("no specified length"));
    }

    #[test]
    fn test_deserialize_struct() {
        let input = r#"{"public": "000a", "secret": "ff"}"#;
        let ephemeral: Ephemeral = serde_json::from_str(input).unwrap();

        assert_eq!(ephemeral.public.length(), Some(4));
        assert_eq!(ephemeral.secret.to_hex().unwrap(), "ff");

        let output = serde_json::to_value(&ephemeral).unwrap();
        assert_eq!(output, json!({"public": "000a", "secret": "ff"}));
    }

    #[test]
    fn test_deserialize_rejects_bad_hex() {
        assert!(serde_json::from_str::<SrpInteger>(r#""0xff""#).is_err());
        assert!(serde_json::from_str::<SrpInteger>("255").is_err());
    }
}

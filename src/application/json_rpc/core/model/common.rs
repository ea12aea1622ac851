use std::fmt::Display;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use strum::EnumString;
use thiserror::Error;

use crate::application::json_rpc::core::error::RpcError;
use crate::application::json_rpc::core::error::RpcResult;

const HEX_PREFIX: &str = "0x";

/// Returns `value` with a canonical lower-case `0x` prefix.
///
/// Idempotent: a value that already carries the prefix is returned unchanged,
/// and an upper-case `0X` prefix is rewritten. The rest of the string is left
/// as is.
pub fn ensure_hex_prefix(value: &str) -> String {
    let body = value
        .strip_prefix(HEX_PREFIX)
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    format!("{HEX_PREFIX}{body}")
}

/// An account address in its textual, hex-prefixed form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RpcAddress(String);

impl RpcAddress {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(ensure_hex_prefix(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RpcAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RpcAddress {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Display for RpcAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RpcAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RpcAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

/// How an [`RpcQuantity`] is written into a request.
///
/// Nodes disagree on this: geth decodes the unlock duration as a plain JSON
/// number, while the Ethereum QUANTITY convention is a `0x` hex string.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum QuantityEncoding {
    #[default]
    Decimal,
    Hex,
}

/// A non-negative integer of arbitrary size, e.g. an unlock duration in
/// seconds.
///
/// Serializes as a QUANTITY (`0x`-prefixed hex without leading zeros) and
/// deserializes from either a QUANTITY or a JSON number.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RpcQuantity(pub BigUint);

impl RpcQuantity {
    pub fn to_hex(&self) -> String {
        format!("{HEX_PREFIX}{:x}", self.0)
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Converts into the wire representation selected by `encoding`.
    pub fn encode(&self, encoding: QuantityEncoding) -> RpcResult<EncodedQuantity> {
        match encoding {
            QuantityEncoding::Decimal => self
                .to_u64()
                .map(EncodedQuantity::Decimal)
                .ok_or_else(|| RpcError::QuantityOverflow(self.to_hex())),
            QuantityEncoding::Hex => Ok(EncodedQuantity::Hex(self.clone())),
        }
    }
}

impl From<u64> for RpcQuantity {
    fn from(v: u64) -> Self {
        RpcQuantity(BigUint::from(v))
    }
}

impl From<u32> for RpcQuantity {
    fn from(v: u32) -> Self {
        RpcQuantity(BigUint::from(v))
    }
}

impl From<BigUint> for RpcQuantity {
    fn from(v: BigUint) -> Self {
        RpcQuantity(v)
    }
}

impl Display for RpcQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcQuantityParseError {
    #[error("empty quantity")]
    Empty,

    #[error("invalid base-{radix} digits in quantity {input:?}")]
    InvalidDigits { input: String, radix: u32 },
}

impl FromStr for RpcQuantity {
    type Err = RpcQuantityParseError;

    /// Accepts `0x`-prefixed hex or plain decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, radix) = match s.strip_prefix(HEX_PREFIX) {
            Some(hex) => (hex, 16),
            None => (s, 10),
        };
        if digits.is_empty() {
            return Err(Self::Err::Empty);
        }
        // parse_bytes also allows `_` separators and a leading `+`.
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(Self::Err::InvalidDigits {
                input: s.to_string(),
                radix,
            });
        }

        BigUint::parse_bytes(digits.as_bytes(), radix)
            .map(RpcQuantity)
            .ok_or_else(|| Self::Err::InvalidDigits {
                input: s.to_string(),
                radix,
            })
    }
}

impl Serialize for RpcQuantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RpcQuantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n.into()),
            Raw::Text(s) => {
                if !s.starts_with(HEX_PREFIX) {
                    return Err(serde::de::Error::custom(format!(
                        "quantity string must be 0x-prefixed, got {s:?}"
                    )));
                }
                FromStr::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    }
}

/// A quantity in the form it is put on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncodedQuantity {
    Decimal(u64),
    Hex(RpcQuantity),
}

/// Correlation token of a JSON-RPC envelope. Passed through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(u64),
    String(String),
}

impl From<u64> for RequestId {
    fn from(v: u64) -> Self {
        RequestId::Number(v)
    }
}

impl From<&str> for RequestId {
    fn from(v: &str) -> Self {
        RequestId::String(v.to_string())
    }
}

impl From<String> for RequestId {
    fn from(v: String) -> Self {
        RequestId::String(v)
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{n}"),
            RequestId::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use proptest::prop_assert;
    use proptest::prop_assert_eq;
    use serde_json::json;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn hex_prefix_is_added_when_missing() {
        assert_eq!(ensure_hex_prefix("6fc2"), "0x6fc2");
        assert_eq!(ensure_hex_prefix(""), "0x");
    }

    #[test]
    fn hex_prefix_is_kept_when_present() {
        assert_eq!(ensure_hex_prefix("0x6fc2"), "0x6fc2");
        assert_eq!(ensure_hex_prefix("0X6FC2"), "0x6FC2");
    }

    #[proptest]
    fn hex_prefix_normalization_is_idempotent(#[strategy("(0[xX])?[0-9a-fA-F]{0,40}")] s: String) {
        let once = ensure_hex_prefix(&s);
        prop_assert!(once.starts_with("0x"));
        prop_assert_eq!(ensure_hex_prefix(&once), once);
    }

    #[test]
    fn rpc_address_serde() {
        let address = RpcAddress::from("6fc2d1a4f9e1a4c6b0a3");
        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!("0x6fc2d1a4f9e1a4c6b0a3")
        );

        let decoded: RpcAddress = serde_json::from_value(json!("6fc2d1a4")).unwrap();
        assert_eq!(decoded.as_str(), "0x6fc2d1a4");
    }

    #[test]
    fn rpc_quantity_hex_has_no_leading_zeros() {
        assert_eq!(RpcQuantity::from(0u64).to_hex(), "0x0");
        assert_eq!(RpcQuantity::from(300u64).to_hex(), "0x12c");
        assert_eq!(
            serde_json::to_string(&RpcQuantity::from(255u64)).unwrap(),
            "\"0xff\""
        );
    }

    #[test]
    fn rpc_quantity_from_str() {
        assert_eq!("0x12c".parse::<RpcQuantity>(), Ok(300u64.into()));
        assert_eq!("300".parse::<RpcQuantity>(), Ok(300u64.into()));
        assert_eq!("0x".parse::<RpcQuantity>(), Err(RpcQuantityParseError::Empty));
        assert!("0xzz".parse::<RpcQuantity>().is_err());
        assert!("12a".parse::<RpcQuantity>().is_err());

        for input in ["1_000", "+300", "0x1_2c", "0x+12c"] {
            assert!(
                matches!(
                    input.parse::<RpcQuantity>(),
                    Err(RpcQuantityParseError::InvalidDigits { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rpc_quantity_deserializes_number_or_hex() {
        let from_number: RpcQuantity = serde_json::from_value(json!(300)).unwrap();
        let from_hex: RpcQuantity = serde_json::from_value(json!("0x12c")).unwrap();
        assert_eq!(from_number, from_hex);

        assert!(serde_json::from_value::<RpcQuantity>(json!("300")).is_err());
        assert!(serde_json::from_value::<RpcQuantity>(json!("0x1_2c")).is_err());
        assert!(serde_json::from_value::<RpcQuantity>(json!(-1)).is_err());
    }

    #[test]
    fn decimal_encoding_rejects_values_beyond_u64() {
        let huge = RpcQuantity(BigUint::from(u64::MAX) + 1u32);

        assert!(matches!(
            huge.encode(QuantityEncoding::Decimal),
            Err(RpcError::QuantityOverflow(_))
        ));
        assert_eq!(
            huge.encode(QuantityEncoding::Hex).unwrap(),
            EncodedQuantity::Hex(huge.clone())
        );
    }

    #[test]
    fn encoded_quantity_wire_format() {
        let duration = RpcQuantity::from(300u64);

        let decimal = duration.encode(QuantityEncoding::Decimal).unwrap();
        let hex = duration.encode(QuantityEncoding::Hex).unwrap();

        assert_eq!(serde_json::to_value(decimal).unwrap(), json!(300));
        assert_eq!(serde_json::to_value(hex).unwrap(), json!("0x12c"));
    }

    #[test]
    fn quantity_encoding_parses_case_insensitively() {
        assert_eq!("HEX".parse::<QuantityEncoding>(), Ok(QuantityEncoding::Hex));
        assert_eq!(QuantityEncoding::default().to_string(), "decimal");
        assert!("octal".parse::<QuantityEncoding>().is_err());
    }

    #[test]
    fn request_id_passes_through_numbers_and_strings() {
        assert_eq!(serde_json::to_value(RequestId::from(9)).unwrap(), json!(9));
        assert_eq!(
            serde_json::to_value(RequestId::from("abc")).unwrap(),
            json!("abc")
        );
        assert_eq!(
            serde_json::from_value::<RequestId>(json!("abc")).unwrap(),
            RequestId::String("abc".to_string())
        );
    }
}

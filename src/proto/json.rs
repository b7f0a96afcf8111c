//! proto3 JSON mapping helpers used by the serde derives on the message types.
//!
//! Field names are emitted as the original proto field names (what the Cosmos
//! REST gateway returns), and the lowerCamelCase spelling is accepted through
//! serde aliases on each message. The modules here cover the proto3
//! encodings serde has no opinion on: base64 bytes, 64-bit integers as
//! strings, symbolic enums, oneof envelopes and `Any`. Timestamps and
//! durations come from `pbjson_types`, which carry their own serde impls.

use std::fmt;
use std::marker::PhantomData;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Encode bytes with the standard, padded base64 alphabet
pub fn encode_base64(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Decode base64 in either the standard or URL-safe alphabet, padded or not
pub fn decode_base64(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if input.contains(|c| c == '-' || c == '_') {
        URL_SAFE.decode(input)
    } else {
        STANDARD.decode(input)
    }
}

/// Enumerations carried as `i32` on the wire.
///
/// The raw integer is kept on the message so unknown values survive a
/// round trip; `from_raw` resolves it, falling back to the `UNRECOGNIZED`
/// sentinel instead of failing.
pub trait ProtoEnum: Copy + Sized + 'static {
    const UNRECOGNIZED: Self;

    fn as_str_name(&self) -> &'static str;

    fn from_str_name(name: &str) -> Option<Self>;

    fn try_from_raw(raw: i32) -> Option<Self>;

    fn to_raw(self) -> i32;

    fn from_raw(raw: i32) -> Self {
        Self::try_from_raw(raw).unwrap_or(Self::UNRECOGNIZED)
    }
}

/// `#[serde(with = "Enum::<E>")]` for an `i32` enum field.
///
/// Known values serialize as their symbolic name, values outside the table
/// as a bare number. Names and numbers are both accepted on input; an
/// unknown name maps to the `UNRECOGNIZED` sentinel.
pub struct Enum<E>(PhantomData<E>);

impl<E: ProtoEnum> Enum<E> {
    pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        match E::try_from_raw(*value) {
            Some(known) => serializer.serialize_str(known.as_str_name()),
            None => serializer.serialize_i32(*value),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        deserializer.deserialize_any(EnumVisitor::<E>(PhantomData))
    }
}

struct EnumVisitor<E>(PhantomData<E>);

impl<'de, E: ProtoEnum> Visitor<'de> for EnumVisitor<E> {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an enum name or number")
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<i32, Er> {
        Ok(E::from_str_name(v).unwrap_or(E::UNRECOGNIZED).to_raw())
    }

    fn visit_i64<Er: de::Error>(self, v: i64) -> Result<i32, Er> {
        Ok(i32::try_from(v).unwrap_or_else(|_| E::UNRECOGNIZED.to_raw()))
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<i32, Er> {
        Ok(i32::try_from(v).unwrap_or_else(|_| E::UNRECOGNIZED.to_raw()))
    }

    fn visit_unit<Er: de::Error>(self) -> Result<i32, Er> {
        Ok(0)
    }
}

/// `bytes` fields as base64 strings
pub mod bytes {
    use super::*;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&encode_base64(value.as_ref()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => decode_base64(&s).map_err(de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}

/// `repeated bytes` fields as arrays of base64 strings
pub mod bytes_vec {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| encode_base64(v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        Option::<Vec<String>>::deserialize(deserializer)?
            .unwrap_or_default()
            .iter()
            .map(|s| decode_base64(s).map_err(de::Error::custom))
            .collect()
    }
}

macro_rules! int64_as_string {
    ($module:ident, $ty:ty) => {
        /// 64-bit integer fields: decimal strings out, strings or numbers in
        pub mod $module {
            use super::*;

            pub fn serialize<S: Serializer>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(value)
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$ty, D::Error> {
                struct IntVisitor;

                impl<'de> Visitor<'de> for IntVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("an integer or a decimal string")
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<$ty, E> {
                        <$ty>::try_from(v).map_err(E::custom)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<$ty, E> {
                        <$ty>::try_from(v).map_err(E::custom)
                    }

                    fn visit_f64<E: de::Error>(self, v: f64) -> Result<$ty, E> {
                        // MAX as f64 rounds up to 2^N, which is already out of range
                        if v.fract() == 0.0 && v >= <$ty>::MIN as f64 && v < <$ty>::MAX as f64 {
                            Ok(v as $ty)
                        } else {
                            Err(E::custom(format!("{} is not an integer", v)))
                        }
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$ty, E> {
                        if v.is_empty() {
                            return Ok(0);
                        }
                        v.parse::<$ty>().map_err(E::custom)
                    }

                    fn visit_unit<E: de::Error>(self) -> Result<$ty, E> {
                        Ok(0)
                    }
                }

                deserializer.deserialize_any(IntVisitor)
            }
        }
    };
}

int64_as_string!(int64, i64);
int64_as_string!(uint64, u64);

/// Oneof envelope of a message that holds nothing else, such as the ABCI
/// `Request`: `{"<field>": {...}}` when set, `{}` when not. A present but
/// malformed member is an error rather than an unset oneof.
pub mod oneof {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let mut fields = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        // null members count as unset
        fields.retain(|_, v| !v.is_null());
        if fields.is_empty() {
            return Ok(None);
        }
        T::deserialize(Value::Object(fields))
            .map(Some)
            .map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct AnyJson {
    #[serde(alias = "typeUrl")]
    type_url: String,
    #[serde(with = "bytes", default)]
    value: Vec<u8>,
}

impl From<&prost_types::Any> for AnyJson {
    fn from(any: &prost_types::Any) -> Self {
        Self {
            type_url: any.type_url.clone(),
            value: any.value.clone(),
        }
    }
}

impl From<AnyJson> for prost_types::Any {
    fn from(any: AnyJson) -> Self {
        Self {
            type_url: any.type_url,
            value: any.value,
        }
    }
}

/// Read one `Any` from either JSON shape:
///
/// - `{"@type": "/pkg.Msg", ...fields}`, the inline form the gateway emits,
///   re-encoded through the `codec` registry
/// - `{"type_url": "/pkg.Msg", "value": "<base64>"}`, the packed form
fn any_from_json<E: de::Error>(value: Value) -> Result<Option<prost_types::Any>, E> {
    let mut fields = match value {
        Value::Null => return Ok(None),
        Value::Object(fields) => fields,
        other => return Err(E::custom(format!("expected an Any object, got {}", other))),
    };
    match fields.remove("@type") {
        Some(Value::String(type_url)) => {
            let value = crate::codec::encode_json(&type_url, Value::Object(fields))
                .map_err(|e| E::custom(format!("Any of type {}: {}", type_url, e)))?;
            Ok(Some(prost_types::Any { type_url, value }))
        }
        Some(other) => Err(E::custom(format!("@type must be a string, got {}", other))),
        None => serde_json::from_value::<AnyJson>(Value::Object(fields))
            .map(|packed| Some(packed.into()))
            .map_err(E::custom),
    }
}

/// Optional `google.protobuf.Any`, written as `{"type_url": ..., "value": <base64>}`
pub mod any {
    use super::*;
    use prost_types::Any;

    pub fn serialize<S: Serializer>(value: &Option<Any>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(any) => serializer.serialize_some(&AnyJson::from(any)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Any>, D::Error> {
        any_from_json(Value::deserialize(deserializer)?)
    }
}

/// `repeated google.protobuf.Any`
pub mod any_vec {
    use super::*;
    use prost_types::Any;

    pub fn serialize<S: Serializer>(values: &[Any], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(AnyJson::from))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Any>, D::Error> {
        let mut out = Vec::new();
        for value in Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default() {
            if let Some(any) = any_from_json(value)? {
                out.push(any);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base64_accepts_both_alphabets() {
        assert_eq!(decode_base64("+/8=").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode_base64("-_8").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode_base64("+/8").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(encode_base64(&[0xfb, 0xff]), "+/8=");
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    #[serde(default)]
    struct Wide {
        #[serde(with = "int64")]
        signed: i64,
        #[serde(with = "uint64")]
        unsigned: u64,
    }

    #[test]
    fn test_int64_as_string_or_number() {
        let value = Wide { signed: -42, unsigned: u64::MAX };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"signed":"-42","unsigned":"18446744073709551615"}"#);
        assert_eq!(serde_json::from_str::<Wide>(&json).unwrap(), value);

        let numeric: Wide = serde_json::from_str(r#"{"signed":7,"unsigned":9}"#).unwrap();
        assert_eq!(numeric, Wide { signed: 7, unsigned: 9 });

        assert!(serde_json::from_str::<Wide>(r#"{"unsigned":"-1"}"#).is_err());
        assert!(serde_json::from_str::<Wide>(r#"{"signed":1.5}"#).is_err());
    }

    #[test]
    fn test_int64_float_bounds() {
        let exact: Wide = serde_json::from_str(r#"{"signed":-9223372036854775808.0}"#).unwrap();
        assert_eq!(exact.signed, i64::MIN);
        let below_max: Wide = serde_json::from_str(r#"{"unsigned":1e19}"#).unwrap();
        assert_eq!(below_max.unsigned, 10_000_000_000_000_000_000);

        // 2^63 and 2^64 do not fit; they must not saturate to MAX
        assert!(serde_json::from_str::<Wide>(r#"{"signed":9223372036854775808.0}"#).is_err());
        assert!(serde_json::from_str::<Wide>(r#"{"unsigned":18446744073709551616.0}"#).is_err());
        assert!(serde_json::from_str::<Wide>(r#"{"unsigned":-1.0}"#).is_err());
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "snake_case")]
    enum Choice {
        Number(#[serde(with = "int64")] i64),
        Text(String),
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    #[serde(transparent)]
    struct Envelope {
        #[serde(with = "oneof")]
        choice: Option<Choice>,
    }

    #[test]
    fn test_oneof_envelope() {
        let set = Envelope { choice: Some(Choice::Number(5)) };
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({ "number": "5" }));
        assert_eq!(serde_json::from_value::<Envelope>(json!({ "number": 5 })).unwrap(), set);

        let unset = Envelope { choice: None };
        assert_eq!(serde_json::to_value(&unset).unwrap(), json!({}));
        assert_eq!(serde_json::from_value::<Envelope>(json!({})).unwrap(), unset);
        assert_eq!(serde_json::from_value::<Envelope>(json!(null)).unwrap(), unset);
        assert_eq!(serde_json::from_value::<Envelope>(json!({ "text": null })).unwrap(), unset);

        // a bad member or two members is an error, not an unset oneof
        assert!(serde_json::from_value::<Envelope>(json!({ "number": "five" })).is_err());
        assert!(serde_json::from_value::<Envelope>(json!({ "nothing": 1 })).is_err());
        assert!(serde_json::from_value::<Envelope>(json!({ "number": 1, "text": "x" })).is_err());
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    #[serde(default)]
    struct Holder {
        #[serde(with = "any")]
        one: Option<prost_types::Any>,
        #[serde(with = "any_vec")]
        many: Vec<prost_types::Any>,
    }

    #[test]
    fn test_any_inline_and_packed() {
        let holder: Holder = serde_json::from_value(json!({
            "one": {
                "@type": "/sei.oracle.v1.MsgDelegateFeedConsent",
                "operator": "seivaloper1op",
                "delegate": "sei1feeder"
            },
            "many": [
                { "typeUrl": "/cosmos.authz.v1beta1.GenericAuthorization", "value": "CgR0ZXN0" },
                null
            ]
        }))
        .unwrap();

        let one = holder.one.clone().unwrap();
        assert_eq!(one.type_url, "/sei.oracle.v1.MsgDelegateFeedConsent");
        let consent: crate::proto::oracle::MsgDelegateFeedConsent =
            crate::codec::from_any(&one).unwrap();
        assert_eq!(consent.operator, "seivaloper1op");
        assert_eq!(consent.delegate, "sei1feeder");

        assert_eq!(holder.many.len(), 1);
        assert_eq!(holder.many[0].value, b"\n\x04test".to_vec());

        // output is always the packed form, which reads back unchanged
        let value = serde_json::to_value(&holder).unwrap();
        assert_eq!(value["one"]["type_url"], "/sei.oracle.v1.MsgDelegateFeedConsent");
        assert_eq!(serde_json::from_value::<Holder>(value).unwrap(), holder);
    }

    #[test]
    fn test_any_rejects_unknown_or_untyped() {
        let unknown = serde_json::from_value::<Holder>(json!({
            "one": { "@type": "/cosmos.bank.v1beta1.MsgSend", "amount": [] }
        }));
        assert!(unknown.unwrap_err().to_string().contains("cosmos.bank.v1beta1.MsgSend"));

        assert!(serde_json::from_value::<Holder>(json!({ "one": { "value": "" } })).is_err());
        assert!(serde_json::from_value::<Holder>(json!({ "one": { "@type": 7 } })).is_err());
        assert!(serde_json::from_value::<Holder>(json!({ "one": "oops" })).is_err());
    }
}

use prost::{Message, Name};
use prost_types::Any;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::proto::{authz, base_abci, legacy_oracle, oracle, tendermint, upgrade};

/// Encode a message to its protobuf bytes
pub fn encode<M: Message>(msg: &M) -> Vec<u8> {
    msg.encode_to_vec()
}

/// Decode a message from protobuf bytes. Unknown fields are skipped and
/// missing fields take their proto3 defaults.
pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M> {
    Ok(M::decode(bytes)?)
}

/// Encode with a varint length prefix, the framing the consensus engine uses
/// on the ABCI socket
pub fn encode_delimited<M: Message>(msg: &M) -> Vec<u8> {
    msg.encode_length_delimited_to_vec()
}

/// Decode one length-prefixed message from the front of `buf`.
///
/// Returns `Ok(None)` while the buffer does not yet hold a complete frame,
/// otherwise the message and the number of bytes consumed.
pub fn decode_delimited<M: Message + Default>(buf: &[u8]) -> Result<Option<(M, usize)>> {
    // a varint is at most 10 bytes; all-continuation bytes so far means it is cut short
    if buf.len() < 10 && buf.iter().all(|b| b & 0x80 != 0) {
        return Ok(None);
    }
    let mut cursor = buf;
    let len = prost::encoding::decode_varint(&mut cursor)? as usize;
    let header = buf.len() - cursor.len();
    if cursor.len() < len {
        return Ok(None);
    }
    let msg = M::decode(&cursor[..len])?;
    Ok(Some((msg, header + len)))
}

/// Pack a message into `google.protobuf.Any`
pub fn to_any<M: Message + Name>(msg: &M) -> Any {
    Any {
        type_url: M::type_url(),
        value: msg.encode_to_vec(),
    }
}

/// Unpack `google.protobuf.Any`, rejecting a type URL other than `M`'s
pub fn from_any<M: Message + Name + Default>(any: &Any) -> Result<M> {
    let expected = M::type_url();
    if any.type_url != expected {
        return Err(Error::UnexpectedTypeUrl {
            expected,
            actual: any.type_url.clone(),
        });
    }
    Ok(M::decode(any.value.as_slice())?)
}

/// Tendermint transaction hash: uppercase hex SHA-256 of the raw tx bytes
pub fn tx_hash(tx: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(tx))
}

macro_rules! message_registry {
    ($($name:literal => $ty:ty),+ $(,)?) => {
        /// Fully-qualified proto names `decode_json` understands
        pub const KNOWN_TYPES: &[&str] = &[$($name),+];

        /// Decode protobuf bytes of the named message into proto3 JSON.
        /// Accepts `pkg.Message` or a type URL (`/pkg.Message`).
        pub fn decode_json(type_name: &str, bytes: &[u8]) -> Result<serde_json::Value> {
            match type_name.trim_start_matches('/') {
                $($name => Ok(serde_json::to_value(<$ty>::decode(bytes)?)?),)+
                other => Err(Error::UnknownMessageType(other.to_string())),
            }
        }

        /// Encode the proto3 JSON of the named message into protobuf bytes,
        /// used for `Any` values written inline under `@type`
        pub fn encode_json(type_name: &str, value: serde_json::Value) -> Result<Vec<u8>> {
            match type_name.trim_start_matches('/') {
                $($name => Ok(serde_json::from_value::<$ty>(value)?.encode_to_vec()),)+
                other => Err(Error::UnknownMessageType(other.to_string())),
            }
        }
    };
}

message_registry! {
    "tendermint.abci.Request" => tendermint::abci::Request,
    "tendermint.abci.Response" => tendermint::abci::Response,
    "tendermint.abci.ResponseCheckTx" => tendermint::abci::ResponseCheckTx,
    "tendermint.abci.ResponseDeliverTx" => tendermint::abci::ResponseDeliverTx,
    "tendermint.abci.ResponseQuery" => tendermint::abci::ResponseQuery,
    "tendermint.abci.ResponseApplySnapshotChunk" => tendermint::abci::ResponseApplySnapshotChunk,
    "tendermint.abci.TxResult" => tendermint::abci::TxResult,
    "tendermint.abci.Event" => tendermint::abci::Event,
    "tendermint.abci.Snapshot" => tendermint::abci::Snapshot,
    "tendermint.types.Header" => tendermint::types::Header,
    "tendermint.types.ConsensusParams" => tendermint::types::ConsensusParams,
    "cosmos.base.abci.v1beta1.TxResponse" => base_abci::TxResponse,
    "cosmos.base.abci.v1beta1.TxMsgData" => base_abci::TxMsgData,
    "cosmos.base.abci.v1beta1.SimulationResponse" => base_abci::SimulationResponse,
    "cosmos.authz.v1beta1.GenericAuthorization" => authz::GenericAuthorization,
    "cosmos.authz.v1beta1.EventGrant" => authz::EventGrant,
    "cosmos.authz.v1beta1.EventRevoke" => authz::EventRevoke,
    "cosmos.authz.v1beta1.Grant" => authz::Grant,
    "cosmos.authz.v1beta1.MsgGrant" => authz::MsgGrant,
    "cosmos.authz.v1beta1.MsgExec" => authz::MsgExec,
    "cosmos.authz.v1beta1.MsgExecResponse" => authz::MsgExecResponse,
    "cosmos.authz.v1beta1.MsgRevoke" => authz::MsgRevoke,
    "cosmos.authz.v1beta1.QueryGrantsResponse" => authz::QueryGrantsResponse,
    "cosmos.upgrade.v1beta1.Plan" => upgrade::Plan,
    "cosmos.upgrade.v1beta1.SoftwareUpgradeProposal" => upgrade::SoftwareUpgradeProposal,
    "cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal" => upgrade::CancelSoftwareUpgradeProposal,
    "sei.oracle.v1.Params" => oracle::Params,
    "sei.oracle.v1.AggregateExchangeRateVote" => oracle::AggregateExchangeRateVote,
    "sei.oracle.v1.PriceSnapshot" => oracle::PriceSnapshot,
    "sei.oracle.v1.MsgAggregateExchangeRateVote" => oracle::MsgAggregateExchangeRateVote,
    "sei.oracle.v1.MsgDelegateFeedConsent" => oracle::MsgDelegateFeedConsent,
    "sei.oracle.v1.VotePenaltyCounter" => oracle::VotePenaltyCounter,
    "seiprotocol.seichain.oracle.AggregateExchangeRatePrevote" => legacy_oracle::AggregateExchangeRatePrevote,
    "seiprotocol.seichain.oracle.MsgAggregateExchangeRatePrevote" => legacy_oracle::MsgAggregateExchangeRatePrevote,
    "seiprotocol.seichain.oracle.MsgAggregateExchangeRateVote" => legacy_oracle::MsgAggregateExchangeRateVote,
    "seiprotocol.seichain.oracle.MsgAggregateExchangeRateCombinedVote" => legacy_oracle::MsgAggregateExchangeRateCombinedVote,
}

/// Decode an `Any` into proto3 JSON using its type URL
pub fn decode_any_json(any: &Any) -> Result<serde_json::Value> {
    decode_json(&any.type_url, &any.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::abci::{Request, RequestEcho};
    use crate::proto::abci::request::Value;

    fn echo(message: &str) -> Request {
        Request {
            value: Some(Value::Echo(RequestEcho {
                message: message.to_string(),
            })),
        }
    }

    #[test]
    fn test_delimited_stream() {
        let mut stream = encode_delimited(&echo("first"));
        stream.extend(encode_delimited(&echo("second")));

        let (first, used) = decode_delimited::<Request>(&stream).unwrap().unwrap();
        assert_eq!(first, echo("first"));
        let (second, rest) = decode_delimited::<Request>(&stream[used..]).unwrap().unwrap();
        assert_eq!(second, echo("second"));
        assert_eq!(used + rest, stream.len());
    }

    #[test]
    fn test_delimited_partial_frame() {
        let frame = encode_delimited(&echo("partial"));
        assert!(decode_delimited::<Request>(&[]).unwrap().is_none());
        assert!(decode_delimited::<Request>(&frame[..frame.len() - 1]).unwrap().is_none());
        assert!(decode_delimited::<Request>(&frame).unwrap().is_some());
    }

    #[test]
    fn test_any_round_trip_and_mismatch() {
        let msg = oracle::MsgDelegateFeedConsent {
            operator: "seivaloper1op".to_string(),
            delegate: "sei1feeder".to_string(),
        };
        let any = to_any(&msg);
        assert_eq!(any.type_url, "/sei.oracle.v1.MsgDelegateFeedConsent");
        assert_eq!(from_any::<oracle::MsgDelegateFeedConsent>(&any).unwrap(), msg);

        let err = from_any::<authz::MsgRevoke>(&any).unwrap_err();
        assert!(matches!(err, Error::UnexpectedTypeUrl { .. }));
    }

    #[test]
    fn test_tx_hash() {
        // sha256("") is well known
        assert_eq!(
            tx_hash(b""),
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn test_decode_json_by_name() {
        let bytes = encode(&upgrade::Plan {
            name: "v2.0.0".to_string(),
            height: 1_000,
            ..Default::default()
        });
        let json = decode_json("/cosmos.upgrade.v1beta1.Plan", &bytes).unwrap();
        assert_eq!(json["name"], "v2.0.0");
        assert_eq!(json["height"], "1000");

        assert!(matches!(
            decode_json("foo.Bar", &bytes),
            Err(Error::UnknownMessageType(_))
        ));
        assert!(KNOWN_TYPES.contains(&"sei.oracle.v1.Params"));
    }

    #[test]
    fn test_encode_json_by_name() {
        let bytes = encode_json(
            "/sei.oracle.v1.MsgDelegateFeedConsent",
            serde_json::json!({ "operator": "seivaloper1op", "delegate": "sei1feeder" }),
        )
        .unwrap();
        let msg: oracle::MsgDelegateFeedConsent = decode(&bytes).unwrap();
        assert_eq!(msg.delegate, "sei1feeder");

        let prevote = encode_json(
            "seiprotocol.seichain.oracle.MsgAggregateExchangeRatePrevote",
            serde_json::json!({ "hash": "19c30cf9", "feeder": "sei1f", "validator": "seivaloper1v" }),
        )
        .unwrap();
        let json = decode_json("seiprotocol.seichain.oracle.MsgAggregateExchangeRatePrevote", &prevote).unwrap();
        assert_eq!(json["hash"], "19c30cf9");

        assert!(matches!(
            encode_json("foo.Bar", serde_json::json!({})),
            Err(Error::UnknownMessageType(_))
        ));
        assert!(matches!(
            encode_json("cosmos.upgrade.v1beta1.Plan", serde_json::json!({ "height": "x" })),
            Err(Error::Json(_))
        ));
    }
}

// Generated messages survive binary and JSON encoding unchanged

use proptest::collection::vec;
use proptest::prelude::*;

use sei_proto::codec::{decode, encode};
use sei_proto::proto::abci::{
    request, Event, EventAttribute, Request, RequestCheckTx, RequestEcho, RequestQuery,
    ResponseApplySnapshotChunk, Snapshot,
};
use sei_proto::proto::authz::Grant;
use sei_proto::proto::base_abci::{AbciMessageLog, Attribute, StringEvent, TxResponse};
use sei_proto::proto::oracle::{Denom, Params};

/// Last second of year 9999, the RFC 3339 upper bound
const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..48)
}

fn any_message() -> impl Strategy<Value = prost_types::Any> {
    ("/[a-z]{1,8}\\.[a-zA-Z.]{1,24}", bytes())
        .prop_map(|(type_url, value)| prost_types::Any { type_url, value })
}

prop_compose! {
    fn event()(
        r#type in "[a-z_]{1,16}",
        attributes in vec((bytes(), bytes(), any::<bool>()), 0..4),
    ) -> Event {
        Event {
            r#type,
            attributes: attributes
                .into_iter()
                .map(|(key, value, index)| EventAttribute { key, value, index })
                .collect(),
        }
    }
}

prop_compose! {
    fn message_log()(
        msg_index in any::<u32>(),
        log in any::<String>(),
        events in vec(("[a-z_]{1,12}", vec((any::<String>(), any::<String>()), 0..3)), 0..3),
    ) -> AbciMessageLog {
        AbciMessageLog {
            msg_index,
            log,
            events: events
                .into_iter()
                .map(|(r#type, attributes)| StringEvent {
                    r#type,
                    attributes: attributes
                        .into_iter()
                        .map(|(key, value)| Attribute { key, value })
                        .collect(),
                })
                .collect(),
        }
    }
}

prop_compose! {
    fn tx_response()(
        height in any::<i64>(),
        txhash in "[0-9A-F]{64}",
        codespace in any::<String>(),
        code in any::<u32>(),
        raw_log in any::<String>(),
        logs in vec(message_log(), 0..3),
        gas in (any::<i64>(), any::<i64>()),
        tx in proptest::option::of(any_message()),
        events in vec(event(), 0..3),
    ) -> TxResponse {
        TxResponse {
            height,
            txhash,
            codespace,
            code,
            raw_log,
            logs,
            gas_wanted: gas.0,
            gas_used: gas.1,
            tx,
            events,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn snapshot()(
        height in any::<u64>(),
        format in any::<u32>(),
        chunks in any::<u32>(),
        hash in bytes(),
        metadata in bytes(),
    ) -> Snapshot {
        Snapshot { height, format, chunks, hash, metadata }
    }
}

prop_compose! {
    fn apply_snapshot_chunk()(
        result in prop_oneof![0..=4i32, any::<i32>()],
        refetch_chunks in vec(any::<u32>(), 0..6),
        reject_senders in vec("[a-z0-9]{1,20}", 0..3),
    ) -> ResponseApplySnapshotChunk {
        ResponseApplySnapshotChunk { result, refetch_chunks, reject_senders }
    }
}

prop_compose! {
    fn grant()(
        authorization in proptest::option::of(any_message()),
        expiration in proptest::option::of((0..=MAX_TIMESTAMP_SECONDS, 0..1_000_000_000i32)),
    ) -> Grant {
        Grant {
            authorization,
            expiration: expiration.map(|(seconds, nanos)| pbjson_types::Timestamp { seconds, nanos }),
        }
    }
}

prop_compose! {
    fn params()(
        vote_period in any::<u64>(),
        fractions in vec("0\\.[0-9]{18}", 3),
        whitelist in vec("u[a-z]{2,8}", 0..5),
        slash_window in any::<u64>(),
        lookback_duration in any::<u64>(),
    ) -> Params {
        Params {
            vote_period,
            vote_threshold: fractions[0].clone(),
            reward_band: fractions[1].clone(),
            whitelist: whitelist.into_iter().map(|name| Denom { name }).collect(),
            slash_fraction: fractions[2].clone(),
            slash_window,
            min_valid_per_window: fractions[0].clone(),
            lookback_duration,
        }
    }
}

fn abci_request() -> impl Strategy<Value = Request> {
    prop_oneof![
        Just(None),
        any::<String>().prop_map(|message| Some(request::Value::Echo(RequestEcho { message }))),
        (bytes(), 0..=1i32)
            .prop_map(|(tx, r#type)| Some(request::Value::CheckTx(RequestCheckTx { tx, r#type }))),
        (bytes(), "/[a-z/]{0,16}", any::<i64>(), any::<bool>()).prop_map(
            |(data, path, height, prove)| Some(request::Value::Query(RequestQuery {
                data,
                path,
                height,
                prove,
            }))
        ),
    ]
    .prop_map(|value| Request { value })
}

/// Binary and JSON round trips both give back the original message
macro_rules! assert_round_trips {
    ($ty:ty, $msg:expr) => {{
        let msg: $ty = $msg;
        let from_wire: $ty = decode(&encode(&msg)).unwrap();
        prop_assert_eq!(&from_wire, &msg);

        let json = serde_json::to_string(&msg).unwrap();
        let from_json: $ty = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&from_json, &msg);
    }};
}

proptest! {
    #[test]
    fn test_tx_response_round_trips(msg in tx_response()) {
        assert_round_trips!(TxResponse, msg);
    }

    #[test]
    fn test_snapshot_round_trips(msg in snapshot()) {
        assert_round_trips!(Snapshot, msg);
    }

    #[test]
    fn test_apply_snapshot_chunk_round_trips(msg in apply_snapshot_chunk()) {
        assert_round_trips!(ResponseApplySnapshotChunk, msg);
    }

    #[test]
    fn test_grant_round_trips(msg in grant()) {
        assert_round_trips!(Grant, msg);
    }

    #[test]
    fn test_oracle_params_round_trip(msg in params()) {
        assert_round_trips!(Params, msg);
    }

    #[test]
    fn test_abci_request_round_trips(msg in abci_request()) {
        assert_round_trips!(Request, msg);
    }

    #[test]
    fn test_int64_json_is_a_decimal_string(height in any::<u64>(), gas in any::<i64>()) {
        let snapshot = serde_json::to_value(Snapshot { height, ..Default::default() }).unwrap();
        let expected = height.to_string();
        prop_assert_eq!(snapshot["height"].as_str(), Some(expected.as_str()));

        let tx = serde_json::to_value(TxResponse { gas_used: gas, ..Default::default() }).unwrap();
        let expected = gas.to_string();
        prop_assert_eq!(tx["gas_used"].as_str(), Some(expected.as_str()));
    }
}

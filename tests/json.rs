// proto3 JSON mapping of the message types

use serde_json::json;

use sei_proto::proto::abci::{
    request, response, response_apply_snapshot_chunk, Request, RequestEcho, RequestOfferSnapshot,
    Response, ResponseApplySnapshotChunk, ResponseCheckTx, Snapshot,
};
use sei_proto::proto::authz::Grant;
use sei_proto::proto::base_abci::TxResponse;
use sei_proto::proto::oracle::{QueryTwapsResponse, VotePenaltyCounter};
use sei_proto::proto::upgrade::Plan;

#[test]
fn test_bytes_as_base64() {
    let snapshot = Snapshot {
        height: 1_000_000,
        format: 1,
        chunks: 4,
        hash: vec![0xde, 0xad, 0xbe, 0xef],
        metadata: Vec::new(),
    };
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["hash"], "3q2+7w==");
    assert_eq!(value["metadata"], "");
    assert_eq!(value["height"], "1000000");

    let back: Snapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_int64_accepts_strings_and_numbers() {
    let from_string: VotePenaltyCounter =
        serde_json::from_value(json!({ "miss_count": "18446744073709551615" })).unwrap();
    assert_eq!(from_string.miss_count, u64::MAX);

    let from_number: VotePenaltyCounter =
        serde_json::from_value(json!({ "abstain_count": 7, "success_count": "12" })).unwrap();
    assert_eq!(from_number.abstain_count, 7);
    assert_eq!(from_number.success_count, 12);

    assert!(serde_json::from_value::<VotePenaltyCounter>(json!({ "miss_count": "many" })).is_err());
}

#[test]
fn test_enum_names_and_numbers() {
    let chunk = ResponseApplySnapshotChunk {
        result: response_apply_snapshot_chunk::Result::Accept as i32,
        refetch_chunks: vec![2, 5],
        reject_senders: vec!["senderA".to_string()],
    };
    let value = serde_json::to_value(&chunk).unwrap();
    assert_eq!(value["result"], "ACCEPT");
    assert_eq!(serde_json::from_value::<ResponseApplySnapshotChunk>(value).unwrap(), chunk);

    let by_number: ResponseApplySnapshotChunk =
        serde_json::from_value(json!({ "result": 3 })).unwrap();
    assert_eq!(by_number.result, response_apply_snapshot_chunk::Result::Retry as i32);

    let unknown_name: ResponseApplySnapshotChunk =
        serde_json::from_value(json!({ "result": "EXPLODE" })).unwrap();
    assert_eq!(unknown_name.result, -1);

    // numbers outside the table are printed raw
    let raw = ResponseApplySnapshotChunk {
        result: 42,
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&raw).unwrap()["result"], 42);
}

#[test]
fn test_camel_case_input() {
    let chunk: ResponseApplySnapshotChunk = serde_json::from_value(json!({
        "result": "RETRY_SNAPSHOT",
        "refetchChunks": [1],
        "rejectSenders": ["peer1", "peer2"]
    }))
    .unwrap();
    assert_eq!(chunk.refetch_chunks, vec![1]);
    assert_eq!(chunk.reject_senders, vec!["peer1", "peer2"]);

    let twaps: QueryTwapsResponse = serde_json::from_value(json!({
        "oracleTwaps": [{ "denom": "uatom", "twap": "11.2", "lookbackSeconds": "3600" }]
    }))
    .unwrap();
    assert_eq!(twaps.oracle_twaps[0].lookback_seconds, 3600);

    let check: ResponseCheckTx =
        serde_json::from_value(json!({ "gasWanted": "200000", "gasUsed": 180000 })).unwrap();
    assert_eq!(check.gas_wanted, 200_000);
    assert_eq!(check.gas_used, 180_000);
}

#[test]
fn test_oneof_request() {
    let request = Request {
        value: Some(request::Value::Echo(RequestEcho {
            message: "ping".to_string(),
        })),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({ "echo": { "message": "ping" } }));
    assert_eq!(serde_json::from_value::<Request>(value).unwrap(), request);

    let offer: Request = serde_json::from_value(json!({
        "offer_snapshot": {
            "snapshot": { "height": "10", "format": 1, "chunks": 2, "hash": "AQI=" },
            "appHash": "AwQ="
        }
    }))
    .unwrap();
    match offer.value {
        Some(request::Value::OfferSnapshot(RequestOfferSnapshot { snapshot, app_hash })) => {
            let snapshot = snapshot.unwrap();
            assert_eq!(snapshot.height, 10);
            assert_eq!(snapshot.hash, vec![1, 2]);
            assert_eq!(app_hash, vec![3, 4]);
        }
        _ => panic!("expected offer_snapshot"),
    }

    let empty: Response = serde_json::from_value(json!({})).unwrap();
    assert!(empty.value.is_none());
    assert!(matches!(
        serde_json::from_value::<Response>(json!({ "exception": { "error": "boom" } }))
            .unwrap()
            .value,
        Some(response::Value::Exception(_))
    ));
}

#[test]
fn test_timestamps_and_any() {
    let grant: Grant = serde_json::from_value(json!({
        "authorization": {
            "@type": "/cosmos.authz.v1beta1.GenericAuthorization",
            "msg": "/sei.oracle.v1.MsgAggregateExchangeRateVote"
        },
        "expiration": "2030-01-01T00:00:00Z"
    }))
    .unwrap();
    let expiration = grant.expiration.clone().unwrap();
    assert_eq!(expiration.seconds, 1_893_456_000);
    assert_eq!(
        grant.generic_msg_type_url().as_deref(),
        Some("/sei.oracle.v1.MsgAggregateExchangeRateVote")
    );

    let value = serde_json::to_value(&grant).unwrap();
    assert_eq!(value["expiration"], "2030-01-01T00:00:00Z");
    assert_eq!(
        value["authorization"]["type_url"],
        "/cosmos.authz.v1beta1.GenericAuthorization"
    );
    assert_eq!(
        value["authorization"]["value"],
        "Cisvc2VpLm9yYWNsZS52MS5Nc2dBZ2dyZWdhdGVFeGNoYW5nZVJhdGVWb3Rl"
    );
    assert_eq!(serde_json::from_value::<Grant>(value).unwrap(), grant);

    // absent optional fields are omitted on output
    let plan = Plan {
        name: "v3".to_string(),
        height: 5,
        ..Default::default()
    };
    let value = serde_json::to_value(&plan).unwrap();
    assert!(value.get("time").is_none());
    assert_eq!(value["height"], "5");
}

#[test]
fn test_any_inline_with_unknown_type_is_an_error() {
    let result = serde_json::from_value::<Grant>(json!({
        "authorization": {
            "@type": "/cosmos.bank.v1beta1.SendAuthorization",
            "spend_limit": [{ "denom": "usei", "amount": "10" }]
        }
    }));
    assert!(result.is_err());
}

#[test]
fn test_oneof_member_errors_surface() {
    // wrong type inside the one set member
    assert!(serde_json::from_value::<Request>(json!({ "echo": { "message": 5 } })).is_err());
    assert!(serde_json::from_value::<Request>(json!({ "check_tx": { "tx": "!!notbase64" } })).is_err());
    // unknown member name
    assert!(serde_json::from_value::<Request>(json!({ "teleport": {} })).is_err());
    // two members set at once
    assert!(serde_json::from_value::<Request>(json!({
        "echo": { "message": "a" },
        "flush": {}
    }))
    .is_err());

    let unset: Request = serde_json::from_value(json!({})).unwrap();
    assert!(unset.value.is_none());
    assert_eq!(serde_json::to_value(&unset).unwrap(), json!({}));

    let check: Request = serde_json::from_value(json!({ "checkTx": { "tx": "AQI=", "type": "RECHECK" } })).unwrap();
    match check.value {
        Some(request::Value::CheckTx(tx)) => {
            assert_eq!(tx.tx, vec![1, 2]);
            assert_eq!(tx.r#type, 1);
        }
        other => panic!("expected check_tx, got {:?}", other),
    }
}

#[test]
fn test_tx_response_from_rest_json() {
    let tx: TxResponse = serde_json::from_value(json!({
        "height": "100",
        "txhash": "ABCD",
        "code": 0,
        "raw_log": "[]",
        "logs": [{
            "msg_index": 0,
            "log": "",
            "events": [{ "type": "message", "attributes": [{ "key": "action", "value": "vote" }] }]
        }],
        "gas_wanted": "50000",
        "gas_used": "41000",
        "events": [{
            "type": "tx",
            "attributes": [{ "key": "ZmVl", "value": "MTAwdXNlaQ==", "index": true }]
        }]
    }))
    .unwrap();
    assert_eq!(tx.height, 100);
    assert_eq!(tx.gas_wanted, 50000);
    assert_eq!(tx.logs[0].events[0].attributes[0].value, "vote");
    assert_eq!(tx.attribute("tx", "fee").as_deref(), Some("100usei"));
    assert!(tx.is_ok());
}

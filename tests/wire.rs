// Binary encoding behaviour of the checked-in message types

use prost::Message;

use sei_proto::codec::{self, decode, encode};
use sei_proto::proto::abci::{
    response_apply_snapshot_chunk, CheckTxType, Event, EventAttribute, RequestCheckTx,
    ResponseApplySnapshotChunk, ResponseQuery,
};
use sei_proto::proto::authz::{GenericAuthorization, Grant, QueryGrantsResponse};
use sei_proto::proto::base_abci::{AbciMessageLog, Attribute, StringEvent, TxResponse};
use sei_proto::proto::json::ProtoEnum;
use sei_proto::proto::oracle::{
    AggregateExchangeRateVote, ExchangeRateTuple, OracleExchangeRate, Params,
    QueryExchangeRateResponse, VotePenaltyCounter,
};
use sei_proto::proto::upgrade::{ModuleVersion, Plan, QueryModuleVersionsResponse};

#[test]
fn test_apply_snapshot_chunk_round_trip() {
    let response = ResponseApplySnapshotChunk {
        result: response_apply_snapshot_chunk::Result::Accept as i32,
        refetch_chunks: vec![2, 5],
        reject_senders: vec!["senderA".to_string()],
    };

    let decoded: ResponseApplySnapshotChunk = decode(&encode(&response)).unwrap();
    assert_eq!(decoded.result, 1);
    assert_eq!(decoded.refetch_chunks, vec![2, 5]);
    assert_eq!(decoded.reject_senders, vec!["senderA"]);
    assert_eq!(decoded, response);
}

#[test]
fn test_tx_response_round_trip() {
    let response = TxResponse {
        height: 100,
        txhash: "8D5E2E1A".to_string(),
        gas_wanted: 50000,
        gas_used: 41234,
        logs: vec![AbciMessageLog {
            msg_index: 0,
            log: String::new(),
            events: vec![StringEvent {
                r#type: "aggregate_vote".to_string(),
                attributes: vec![Attribute {
                    key: "voter".to_string(),
                    value: "seivaloper1xyz".to_string(),
                }],
            }],
        }],
        timestamp: "2023-06-01T12:00:00Z".to_string(),
        ..Default::default()
    };

    let decoded: TxResponse = decode(&encode(&response)).unwrap();
    assert_eq!(decoded.height, 100);
    assert_eq!(decoded.gas_wanted, 50000);
    assert_eq!(decoded.logs.len(), 1);
    assert_eq!(decoded.logs[0].events[0].r#type, "aggregate_vote");
    assert_eq!(decoded.logs[0].events[0].attributes[0].value, "seivaloper1xyz");
    assert_eq!(decoded, response);
}

#[test]
fn test_oracle_messages_round_trip() {
    let params = Params {
        vote_period: 2,
        vote_threshold: "0.500000000000000000".to_string(),
        reward_band: "0.020000000000000000".to_string(),
        slash_window: 108000,
        min_valid_per_window: "0.050000000000000000".to_string(),
        lookback_duration: 3600,
        ..Default::default()
    };
    assert_eq!(decode::<Params>(&encode(&params)).unwrap(), params);

    let vote = AggregateExchangeRateVote {
        exchange_rate_tuples: vec![ExchangeRateTuple {
            denom: "uatom".to_string(),
            exchange_rate: "11.25".to_string(),
        }],
        voter: "seivaloper1xyz".to_string(),
    };
    assert_eq!(decode::<AggregateExchangeRateVote>(&encode(&vote)).unwrap(), vote);

    let rate = QueryExchangeRateResponse {
        oracle_exchange_rate: Some(OracleExchangeRate {
            exchange_rate: "11.25".to_string(),
            last_update: "1234".to_string(),
            last_update_timestamp: 1_700_000_000,
        }),
    };
    assert_eq!(decode::<QueryExchangeRateResponse>(&encode(&rate)).unwrap(), rate);

    let counter = VotePenaltyCounter {
        miss_count: u64::MAX,
        abstain_count: 3,
        success_count: 9000,
    };
    assert_eq!(decode::<VotePenaltyCounter>(&encode(&counter)).unwrap(), counter);
}

#[test]
fn test_upgrade_and_authz_round_trip() {
    let plan = Plan {
        name: "v5.0.0".to_string(),
        height: 90_000_000,
        info: "{\"binaries\":{}}".to_string(),
        ..Default::default()
    };
    assert_eq!(decode::<Plan>(&encode(&plan)).unwrap(), plan);

    let versions = QueryModuleVersionsResponse {
        module_versions: vec![
            ModuleVersion {
                name: "bank".to_string(),
                version: 2,
            },
            ModuleVersion {
                name: "oracle".to_string(),
                version: 3,
            },
        ],
    };
    assert_eq!(
        decode::<QueryModuleVersionsResponse>(&encode(&versions)).unwrap(),
        versions
    );

    let grants = QueryGrantsResponse {
        grants: vec![Grant {
            authorization: Some(codec::to_any(&GenericAuthorization {
                msg: "/sei.oracle.v1.MsgAggregateExchangeRateVote".to_string(),
            })),
            expiration: Some(pbjson_types::Timestamp {
                seconds: 1_900_000_000,
                nanos: 0,
            }),
        }],
        pagination: None,
    };
    let decoded: QueryGrantsResponse = decode(&encode(&grants)).unwrap();
    assert_eq!(decoded, grants);
    let auth: GenericAuthorization =
        codec::from_any(decoded.grants[0].authorization.as_ref().unwrap()).unwrap();
    assert_eq!(auth.msg, "/sei.oracle.v1.MsgAggregateExchangeRateVote");
}

#[test]
fn test_empty_buffer_decodes_to_defaults() {
    let tx: TxResponse = decode(&[]).unwrap();
    assert_eq!(tx.height, 0);
    assert!(tx.txhash.is_empty());
    assert!(tx.logs.is_empty());
    assert!(tx.tx.is_none());

    let query: ResponseQuery = decode(&[]).unwrap();
    assert!(query.key.is_empty());
    assert!(query.value.is_empty());
    assert!(query.proof_ops.is_none());

    let chunk: ResponseApplySnapshotChunk = decode(&[]).unwrap();
    assert_eq!(chunk.result, response_apply_snapshot_chunk::Result::Unknown as i32);
    assert!(chunk.refetch_chunks.is_empty());
}

#[test]
fn test_unknown_fields_are_skipped() {
    let plan = Plan {
        name: "v2".to_string(),
        height: 42,
        ..Default::default()
    };
    let mut bytes = encode(&plan);
    // field 99, varint wire type, value 150
    bytes.extend_from_slice(&[0x98, 0x06, 0x96, 0x01]);
    // field 100, length-delimited, 3 bytes
    bytes.extend_from_slice(&[0xa2, 0x06, 0x03, b'a', b'b', b'c']);

    let decoded: Plan = decode(&bytes).unwrap();
    assert_eq!(decoded, plan);
}

#[test]
fn test_malformed_input_is_an_error() {
    // length prefix promises more bytes than present
    assert!(decode::<Plan>(&[0x0a, 0x10, b'v']).is_err());
    // truncated varint
    assert!(decode::<Plan>(&[0x18, 0xff]).is_err());
}

#[test]
fn test_unrecognized_enum_value() {
    // result = 42, outside the defined table
    let bytes = [0x08, 0x2a];
    let decoded: ResponseApplySnapshotChunk = decode(&bytes).unwrap();
    assert_eq!(decoded.result, 42);
    assert_eq!(
        response_apply_snapshot_chunk::Result::from_raw(decoded.result),
        response_apply_snapshot_chunk::Result::Unrecognized
    );
    // the raw value survives re-encoding
    assert_eq!(encode(&decoded), bytes.to_vec());

    let check = RequestCheckTx {
        tx: vec![1, 2, 3],
        r#type: CheckTxType::Recheck as i32,
    };
    let decoded: RequestCheckTx = decode(&encode(&check)).unwrap();
    assert_eq!(CheckTxType::from_raw(decoded.r#type), CheckTxType::Recheck);
}

#[test]
fn test_event_bytes_survive() {
    let event = Event {
        r#type: "transfer".to_string(),
        attributes: vec![EventAttribute {
            key: vec![0xff, 0x00],
            value: b"100usei".to_vec(),
            index: true,
        }],
    };
    let decoded = Event::decode(event.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, event);
}

// A small application driven through length-prefixed request frames,
// the way the consensus engine talks to it over the socket

use std::collections::BTreeMap;
use std::sync::Mutex;

use sei_proto::codec::{decode_delimited, encode_delimited, tx_hash};
use sei_proto::proto::abci::request::Value as RequestValue;
use sei_proto::proto::abci::response::Value as ResponseValue;
use sei_proto::proto::abci::*;
use sei_proto::{handle, Application};

/// Stores `key=value` transactions; queries look up a key
#[derive(Default)]
struct KvStore {
    pending: Mutex<Vec<(String, String)>>,
    committed: Mutex<BTreeMap<String, String>>,
}

fn parse_tx(tx: &[u8]) -> Option<(String, String)> {
    let text = std::str::from_utf8(tx).ok()?;
    let (key, value) = text.split_once('=')?;
    Some((key.to_string(), value.to_string()))
}

impl Application for KvStore {
    fn info(&self, _request: RequestInfo) -> ResponseInfo {
        ResponseInfo {
            data: "kvstore".to_string(),
            last_block_height: 0,
            ..Default::default()
        }
    }

    fn check_tx(&self, request: RequestCheckTx) -> ResponseCheckTx {
        match parse_tx(&request.tx) {
            Some(_) => ResponseCheckTx {
                gas_wanted: 1,
                ..Default::default()
            },
            None => ResponseCheckTx {
                code: 1,
                log: "expected key=value".to_string(),
                ..Default::default()
            },
        }
    }

    fn deliver_tx(&self, request: RequestDeliverTx) -> ResponseDeliverTx {
        let Some((key, value)) = parse_tx(&request.tx) else {
            return ResponseDeliverTx {
                code: 1,
                ..Default::default()
            };
        };
        self.pending.lock().unwrap().push((key.clone(), value));
        ResponseDeliverTx {
            events: vec![Event {
                r#type: "app".to_string(),
                attributes: vec![EventAttribute {
                    key: b"key".to_vec(),
                    value: key.into_bytes(),
                    index: true,
                }],
            }],
            ..Default::default()
        }
    }

    fn commit(&self) -> ResponseCommit {
        let mut committed = self.committed.lock().unwrap();
        committed.extend(self.pending.lock().unwrap().drain(..));
        let state: Vec<u8> = committed
            .iter()
            .flat_map(|(k, v)| format!("{}={};", k, v).into_bytes())
            .collect();
        ResponseCommit {
            data: tx_hash(&state).into_bytes(),
            retain_height: 0,
        }
    }

    fn query(&self, request: RequestQuery) -> ResponseQuery {
        let key = String::from_utf8_lossy(&request.data).into_owned();
        match self.committed.lock().unwrap().get(&key) {
            Some(value) => ResponseQuery {
                key: request.data,
                value: value.clone().into_bytes(),
                log: "exists".to_string(),
                ..Default::default()
            },
            None => ResponseQuery {
                code: 1,
                log: "does not exist".to_string(),
                ..Default::default()
            },
        }
    }
}

fn frame(value: RequestValue) -> Vec<u8> {
    encode_delimited(&Request { value: Some(value) })
}

/// Decode every complete request in `stream`, answer it, and return the
/// encoded responses plus any trailing partial frame
fn serve(app: &dyn Application, mut stream: &[u8]) -> (Vec<Response>, usize) {
    let mut responses = Vec::new();
    while let Some((request, used)) = decode_delimited::<Request>(stream).unwrap() {
        let response = handle(app, request);
        let bytes = encode_delimited(&response);
        let (decoded, _) = decode_delimited::<Response>(&bytes).unwrap().unwrap();
        responses.push(decoded);
        stream = &stream[used..];
    }
    (responses, stream.len())
}

#[test]
fn test_block_lifecycle_over_frames() {
    let app = KvStore::default();

    let mut stream = Vec::new();
    stream.extend(frame(RequestValue::Info(RequestInfo::default())));
    stream.extend(frame(RequestValue::CheckTx(RequestCheckTx {
        tx: b"name=sei".to_vec(),
        r#type: CheckTxType::New as i32,
    })));
    stream.extend(frame(RequestValue::CheckTx(RequestCheckTx {
        tx: b"garbage".to_vec(),
        r#type: CheckTxType::New as i32,
    })));
    stream.extend(frame(RequestValue::BeginBlock(RequestBeginBlock::default())));
    stream.extend(frame(RequestValue::DeliverTx(RequestDeliverTx {
        tx: b"name=sei".to_vec(),
    })));
    stream.extend(frame(RequestValue::EndBlock(RequestEndBlock { height: 1 })));
    stream.extend(frame(RequestValue::Commit(RequestCommit {})));
    stream.extend(frame(RequestValue::Query(RequestQuery {
        data: b"name".to_vec(),
        path: "/store".to_string(),
        height: 1,
        prove: false,
    })));
    stream.extend(frame(RequestValue::Flush(RequestFlush {})));

    let (responses, rest) = serve(&app, &stream);
    assert_eq!(rest, 0);
    assert_eq!(responses.len(), 9);

    match &responses[0].value {
        Some(ResponseValue::Info(info)) => assert_eq!(info.data, "kvstore"),
        other => panic!("unexpected {:?}", other),
    }
    match (&responses[1].value, &responses[2].value) {
        (Some(ResponseValue::CheckTx(ok)), Some(ResponseValue::CheckTx(bad))) => {
            assert!(ok.is_ok());
            assert!(!bad.is_ok());
            assert_eq!(bad.log, "expected key=value");
        }
        other => panic!("unexpected {:?}", other),
    }
    match &responses[4].value {
        Some(ResponseValue::DeliverTx(deliver)) => {
            assert!(deliver.is_ok());
            assert_eq!(deliver.events[0].attributes[0].value, b"name");
        }
        other => panic!("unexpected {:?}", other),
    }
    match &responses[6].value {
        Some(ResponseValue::Commit(commit)) => {
            assert_eq!(commit.data, tx_hash(b"name=sei;").into_bytes());
        }
        other => panic!("unexpected {:?}", other),
    }
    match &responses[7].value {
        Some(ResponseValue::Query(query)) => {
            assert!(query.is_ok());
            assert_eq!(query.value, b"sei");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(responses[8].value, Some(ResponseValue::Flush(_))));
}

#[test]
fn test_partial_frame_waits_for_more_bytes() {
    let app = KvStore::default();
    let echo = frame(RequestValue::Echo(RequestEcho {
        message: "hello".to_string(),
    }));

    let mut stream = echo.clone();
    stream.extend_from_slice(&echo[..3]);

    let (responses, rest) = serve(&app, &stream);
    assert_eq!(responses.len(), 1);
    assert_eq!(rest, 3);
    match &responses[0].value {
        Some(ResponseValue::Echo(echo)) => assert_eq!(echo.message, "hello"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_empty_request_gets_exception() {
    let app = KvStore::default();
    let (responses, _) = serve(&app, &encode_delimited(&Request { value: None }));
    assert!(matches!(
        &responses[0].value,
        Some(ResponseValue::Exception(e)) if !e.error.is_empty()
    ));
}

#[test]
fn test_default_snapshot_handlers() {
    let app = KvStore::default();
    let response = handle(
        &app,
        Request {
            value: Some(RequestValue::ApplySnapshotChunk(RequestApplySnapshotChunk {
                index: 0,
                chunk: vec![1, 2, 3],
                sender: "peer".to_string(),
            })),
        },
    );
    match response.value {
        Some(ResponseValue::ApplySnapshotChunk(r)) => {
            assert_eq!(r.result, response_apply_snapshot_chunk::Result::Unknown as i32);
            assert!(r.refetch_chunks.is_empty());
        }
        other => panic!("unexpected {:?}", other),
    }
}

//! The ABCI boundary between a consensus engine and an application state
//! machine.
//!
//! An application implements [`Application`]; every method has a default
//! that answers the way an empty Tendermint application does, so only the
//! calls the application cares about need overriding. [`handle`] routes a
//! decoded [`Request`] to the matching method and wraps the answer in a
//! [`Response`]. Framing the socket stream is left to
//! [`crate::codec::encode_delimited`] / [`crate::codec::decode_delimited`].
//!
//! The calls arrive over three connections:
//!
//! - consensus: `InitChain`, `BeginBlock`, `DeliverTx`, `EndBlock`, `Commit`
//! - mempool: `CheckTx`
//! - info: `Info`, `SetOption`, `Query`
//!
//! plus the state-sync snapshot calls, and `Echo`/`Flush` on every connection.

use crate::proto::abci::request::Value as RequestValue;
use crate::proto::abci::response::Value as ResponseValue;
use crate::proto::abci::*;

/// Application state machine driven by the consensus engine.
///
/// Methods take `&self`; implementations keep their state behind `Mutex`/`RwLock`
/// since the three connections call in concurrently.
pub trait Application: Send + Sync {
    /// Echo a string to test the connection
    fn echo(&self, request: RequestEcho) -> ResponseEcho {
        ResponseEcho {
            message: request.message,
        }
    }

    /// Report application info, queried once at startup for the handshake
    fn info(&self, _request: RequestInfo) -> ResponseInfo {
        ResponseInfo::default()
    }

    /// Set a non-consensus option
    fn set_option(&self, _request: RequestSetOption) -> ResponseSetOption {
        ResponseSetOption::default()
    }

    /// Called once at genesis
    fn init_chain(&self, _request: RequestInitChain) -> ResponseInitChain {
        ResponseInitChain::default()
    }

    /// Query application state
    fn query(&self, _request: RequestQuery) -> ResponseQuery {
        ResponseQuery::default()
    }

    /// Mempool admission. Code 0 accepts the transaction.
    fn check_tx(&self, _request: RequestCheckTx) -> ResponseCheckTx {
        ResponseCheckTx::default()
    }

    fn begin_block(&self, _request: RequestBeginBlock) -> ResponseBeginBlock {
        ResponseBeginBlock::default()
    }

    /// Execute a transaction in the current block
    fn deliver_tx(&self, _request: RequestDeliverTx) -> ResponseDeliverTx {
        ResponseDeliverTx::default()
    }

    fn end_block(&self, _request: RequestEndBlock) -> ResponseEndBlock {
        ResponseEndBlock::default()
    }

    fn flush(&self) -> ResponseFlush {
        ResponseFlush::default()
    }

    /// Persist the block's state changes and return the app hash in `data`
    fn commit(&self) -> ResponseCommit {
        ResponseCommit::default()
    }

    fn list_snapshots(&self) -> ResponseListSnapshots {
        ResponseListSnapshots::default()
    }

    /// Offer a snapshot to restore from. The default result is `UNKNOWN`,
    /// which aborts state sync.
    fn offer_snapshot(&self, _request: RequestOfferSnapshot) -> ResponseOfferSnapshot {
        ResponseOfferSnapshot::default()
    }

    fn load_snapshot_chunk(&self, _request: RequestLoadSnapshotChunk) -> ResponseLoadSnapshotChunk {
        ResponseLoadSnapshotChunk::default()
    }

    fn apply_snapshot_chunk(
        &self,
        _request: RequestApplySnapshotChunk,
    ) -> ResponseApplySnapshotChunk {
        ResponseApplySnapshotChunk::default()
    }
}

/// Route a request to the application and wrap its answer.
///
/// A request with no variant set gets an `exception` response rather than
/// an error, matching what the engine expects on a malformed frame.
pub fn handle<A: Application + ?Sized>(app: &A, request: Request) -> Response {
    let value = match request.value {
        Some(RequestValue::Echo(req)) => ResponseValue::Echo(app.echo(req)),
        Some(RequestValue::Flush(_)) => ResponseValue::Flush(app.flush()),
        Some(RequestValue::Info(req)) => ResponseValue::Info(app.info(req)),
        Some(RequestValue::SetOption(req)) => ResponseValue::SetOption(app.set_option(req)),
        Some(RequestValue::InitChain(req)) => ResponseValue::InitChain(app.init_chain(req)),
        Some(RequestValue::Query(req)) => ResponseValue::Query(app.query(req)),
        Some(RequestValue::BeginBlock(req)) => ResponseValue::BeginBlock(app.begin_block(req)),
        Some(RequestValue::CheckTx(req)) => ResponseValue::CheckTx(app.check_tx(req)),
        Some(RequestValue::DeliverTx(req)) => ResponseValue::DeliverTx(app.deliver_tx(req)),
        Some(RequestValue::EndBlock(req)) => ResponseValue::EndBlock(app.end_block(req)),
        Some(RequestValue::Commit(_)) => ResponseValue::Commit(app.commit()),
        Some(RequestValue::ListSnapshots(_)) => ResponseValue::ListSnapshots(app.list_snapshots()),
        Some(RequestValue::OfferSnapshot(req)) => {
            ResponseValue::OfferSnapshot(app.offer_snapshot(req))
        }
        Some(RequestValue::LoadSnapshotChunk(req)) => {
            ResponseValue::LoadSnapshotChunk(app.load_snapshot_chunk(req))
        }
        Some(RequestValue::ApplySnapshotChunk(req)) => {
            ResponseValue::ApplySnapshotChunk(app.apply_snapshot_chunk(req))
        }
        None => {
            log::warn!("Received ABCI request with no value set");
            ResponseValue::Exception(ResponseException {
                error: "request has no value".to_string(),
            })
        }
    };
    Response { value: Some(value) }
}

impl ResponseCheckTx {
    /// Code 0 means the transaction was accepted into the mempool
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

impl ResponseDeliverTx {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

impl ResponseQuery {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::json::ProtoEnum;
    use std::sync::Mutex;

    struct NoopApp;

    impl Application for NoopApp {}

    /// Counts delivered transactions and reports the count as its app hash
    #[derive(Default)]
    struct CounterApp {
        count: Mutex<u64>,
    }

    impl Application for CounterApp {
        fn check_tx(&self, request: RequestCheckTx) -> ResponseCheckTx {
            if request.tx.is_empty() {
                ResponseCheckTx {
                    code: 1,
                    log: "empty tx".to_string(),
                    ..Default::default()
                }
            } else {
                ResponseCheckTx::default()
            }
        }

        fn deliver_tx(&self, _request: RequestDeliverTx) -> ResponseDeliverTx {
            *self.count.lock().unwrap() += 1;
            ResponseDeliverTx::default()
        }

        fn commit(&self) -> ResponseCommit {
            let count = *self.count.lock().unwrap();
            ResponseCommit {
                data: count.to_be_bytes().to_vec(),
                retain_height: 0,
            }
        }
    }

    fn request(value: RequestValue) -> Request {
        Request { value: Some(value) }
    }

    #[test]
    fn test_echo_default() {
        let response = handle(
            &NoopApp,
            request(RequestValue::Echo(RequestEcho {
                message: "hello".to_string(),
            })),
        );
        assert_eq!(
            response.value,
            Some(ResponseValue::Echo(ResponseEcho {
                message: "hello".to_string()
            }))
        );
    }

    #[test]
    fn test_empty_request_is_exception() {
        let response = handle(&NoopApp, Request::default());
        match response.value {
            Some(ResponseValue::Exception(e)) => assert!(!e.error.is_empty()),
            other => panic!("expected exception, got {:?}", other),
        }
    }

    #[test]
    fn test_offer_snapshot_defaults_to_unknown() {
        let response = handle(
            &NoopApp,
            request(RequestValue::OfferSnapshot(RequestOfferSnapshot::default())),
        );
        match response.value {
            Some(ResponseValue::OfferSnapshot(r)) => assert_eq!(
                response_offer_snapshot::Result::from_raw(r.result),
                response_offer_snapshot::Result::Unknown
            ),
            other => panic!("expected offer_snapshot, got {:?}", other),
        }
    }

    #[test]
    fn test_block_lifecycle() {
        let app = CounterApp::default();

        let rejected = handle(&app, request(RequestValue::CheckTx(RequestCheckTx::default())));
        match rejected.value {
            Some(ResponseValue::CheckTx(r)) => assert!(!r.is_ok()),
            other => panic!("expected check_tx, got {:?}", other),
        }

        handle(&app, request(RequestValue::BeginBlock(RequestBeginBlock::default())));
        for tx in [b"a".to_vec(), b"b".to_vec()] {
            let delivered = handle(&app, request(RequestValue::DeliverTx(RequestDeliverTx { tx })));
            assert!(matches!(delivered.value, Some(ResponseValue::DeliverTx(ref r)) if r.is_ok()));
        }
        handle(&app, request(RequestValue::EndBlock(RequestEndBlock { height: 1 })));

        let committed = handle(&app, request(RequestValue::Commit(RequestCommit {})));
        match committed.value {
            Some(ResponseValue::Commit(r)) => assert_eq!(r.data, 2u64.to_be_bytes().to_vec()),
            other => panic!("expected commit, got {:?}", other),
        }
    }
}

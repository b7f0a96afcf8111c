pub mod client;
pub mod logs;
pub mod messages;
pub mod rest;

pub use client::QueryClient;
pub use logs::{parse_abci_logs, stringify_events};
pub use messages::{
    aggregate_vote_hash, format_exchange_rate_tuples, parse_exchange_rate_tuples, MessageBuilder,
};
pub use rest::RestClient;

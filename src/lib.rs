// Library exports for sei_proto

pub mod abci;
pub mod chain;
pub mod codec;
pub mod config;
pub mod error;
pub mod proto;

// Re-export main types for convenience
pub use abci::{handle, Application};
pub use chain::{QueryClient, RestClient};
pub use codec::{decode, decode_delimited, encode, encode_delimited, from_any, to_any, tx_hash};
pub use config::{ClientConfig, Config};
pub use error::{Error, Result};

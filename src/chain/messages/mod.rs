mod authz;
mod oracle;

pub use authz::expiration_at;
pub use oracle::{aggregate_vote_hash, format_exchange_rate_tuples, parse_exchange_rate_tuples};

use prost::{Message, Name};
use prost_types::Any;

/// Helper trait for packing transaction messages
pub trait MessageBuilder: Message + Name + Sized {
    /// Type URL this message is packed under, e.g. `/sei.oracle.v1.MsgDelegateFeedConsent`
    fn type_url_of(&self) -> String {
        Self::type_url()
    }

    /// Pack the message into `google.protobuf.Any` for a tx body or `MsgExec`
    fn to_any(&self) -> Any {
        crate::codec::to_any(self)
    }
}

impl<M: Message + Name + Sized> MessageBuilder for M {}

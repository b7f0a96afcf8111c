/// Consensus captures the consensus rules for processing a block in the blockchain,
/// including all blockchain data structures and the rules of the application's
/// state transition machine.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct Consensus {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::proto::json::uint64")]
    pub block: u64,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::proto::json::uint64")]
    pub app: u64,
}

/// PartsetHeader
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct PartSetHeader {
    #[prost(uint32, tag = "1")]
    pub total: u32,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "crate::proto::json::bytes")]
    pub hash: ::prost::alloc::vec::Vec<u8>,
}
/// BlockID
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct BlockId {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::proto::json::bytes")]
    pub hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    #[serde(alias = "partSetHeader", skip_serializing_if = "Option::is_none")]
    pub part_set_header: ::core::option::Option<PartSetHeader>,
}
/// Header defines the structure of a Tendermint block header.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct Header {
    /// basic block info
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: ::core::option::Option<super::version::Consensus>,
    #[prost(string, tag = "2")]
    #[serde(alias = "chainId")]
    pub chain_id: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    #[serde(with = "crate::proto::json::int64")]
    pub height: i64,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: ::core::option::Option<::pbjson_types::Timestamp>,
    /// prev block info
    #[prost(message, optional, tag = "5")]
    #[serde(alias = "lastBlockId", skip_serializing_if = "Option::is_none")]
    pub last_block_id: ::core::option::Option<BlockId>,
    /// hashes of block data
    ///
    /// commit from validators from the last block
    #[prost(bytes = "vec", tag = "6")]
    #[serde(alias = "lastCommitHash", with = "crate::proto::json::bytes")]
    pub last_commit_hash: ::prost::alloc::vec::Vec<u8>,
    /// transactions
    #[prost(bytes = "vec", tag = "7")]
    #[serde(alias = "dataHash", with = "crate::proto::json::bytes")]
    pub data_hash: ::prost::alloc::vec::Vec<u8>,
    /// hashes from the app output from the prev block
    ///
    /// validators for the current block
    #[prost(bytes = "vec", tag = "8")]
    #[serde(alias = "validatorsHash", with = "crate::proto::json::bytes")]
    pub validators_hash: ::prost::alloc::vec::Vec<u8>,
    /// validators for the next block
    #[prost(bytes = "vec", tag = "9")]
    #[serde(alias = "nextValidatorsHash", with = "crate::proto::json::bytes")]
    pub next_validators_hash: ::prost::alloc::vec::Vec<u8>,
    /// consensus params for current block
    #[prost(bytes = "vec", tag = "10")]
    #[serde(alias = "consensusHash", with = "crate::proto::json::bytes")]
    pub consensus_hash: ::prost::alloc::vec::Vec<u8>,
    /// state after txs from the previous block
    #[prost(bytes = "vec", tag = "11")]
    #[serde(alias = "appHash", with = "crate::proto::json::bytes")]
    pub app_hash: ::prost::alloc::vec::Vec<u8>,
    /// root hash of all results from the txs from the previous block
    #[prost(bytes = "vec", tag = "12")]
    #[serde(alias = "lastResultsHash", with = "crate::proto::json::bytes")]
    pub last_results_hash: ::prost::alloc::vec::Vec<u8>,
    /// consensus info
    ///
    /// evidence included in the block
    #[prost(bytes = "vec", tag = "13")]
    #[serde(alias = "evidenceHash", with = "crate::proto::json::bytes")]
    pub evidence_hash: ::prost::alloc::vec::Vec<u8>,
    /// original proposer of the block
    #[prost(bytes = "vec", tag = "14")]
    #[serde(alias = "proposerAddress", with = "crate::proto::json::bytes")]
    pub proposer_address: ::prost::alloc::vec::Vec<u8>,
}
/// ConsensusParams contains consensus critical parameters that determine the
/// validity of blocks.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: ::core::option::Option<BlockParams>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: ::core::option::Option<EvidenceParams>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: ::core::option::Option<ValidatorParams>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: ::core::option::Option<VersionParams>,
}
/// BlockParams contains limits on the block size.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct BlockParams {
    /// Max block size, in bytes.
    /// Note: must be greater than 0
    #[prost(int64, tag = "1")]
    #[serde(alias = "maxBytes", with = "crate::proto::json::int64")]
    pub max_bytes: i64,
    /// Max gas per block.
    /// Note: must be greater or equal to -1
    #[prost(int64, tag = "2")]
    #[serde(alias = "maxGas", with = "crate::proto::json::int64")]
    pub max_gas: i64,
    /// Minimum time increment between consecutive blocks (in milliseconds) If the
    /// block header timestamp is ahead of the system clock, decrease this value.
    #[prost(int64, tag = "3")]
    #[serde(alias = "timeIotaMs", with = "crate::proto::json::int64")]
    pub time_iota_ms: i64,
}
/// EvidenceParams determine how we handle evidence of malfeasance.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct EvidenceParams {
    /// Max age of evidence, in blocks.
    #[prost(int64, tag = "1")]
    #[serde(alias = "maxAgeNumBlocks", with = "crate::proto::json::int64")]
    pub max_age_num_blocks: i64,
    /// Max age of evidence, in time.
    #[prost(message, optional, tag = "2")]
    #[serde(alias = "maxAgeDuration", skip_serializing_if = "Option::is_none")]
    pub max_age_duration: ::core::option::Option<::pbjson_types::Duration>,
    /// This sets the maximum size of total evidence in bytes that can be committed in a single block.
    #[prost(int64, tag = "3")]
    #[serde(alias = "maxBytes", with = "crate::proto::json::int64")]
    pub max_bytes: i64,
}
/// ValidatorParams restrict the public key types validators can use.
/// NOTE: uses ABCI pubkey naming, not Amino names.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct ValidatorParams {
    #[prost(string, repeated, tag = "1")]
    #[serde(alias = "pubKeyTypes")]
    pub pub_key_types: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// VersionParams contains the ABCI application version.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct VersionParams {
    #[prost(uint64, tag = "1")]
    #[serde(alias = "appVersion", with = "crate::proto::json::uint64")]
    pub app_version: u64,
}
/// HashedParams is a subset of ConsensusParams.
///
/// It is hashed into the Header.ConsensusHash.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct HashedParams {
    #[prost(int64, tag = "1")]
    #[serde(alias = "blockMaxBytes", with = "crate::proto::json::int64")]
    pub block_max_bytes: i64,
    #[prost(int64, tag = "2")]
    #[serde(alias = "blockMaxGas", with = "crate::proto::json::int64")]
    pub block_max_gas: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct Params {
    /// The number of blocks per voting window, at the end of the vote period, the oracle votes are assessed and exchange rates are calculated. If the vote period is 1 this is equivalent to having oracle votes assessed and exchange rates calculated in each block.
    #[prost(uint64, tag = "1")]
    #[serde(alias = "votePeriod", with = "crate::proto::json::uint64")]
    pub vote_period: u64,
    #[prost(string, tag = "2")]
    #[serde(alias = "voteThreshold")]
    pub vote_threshold: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    #[serde(alias = "rewardBand")]
    pub reward_band: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub whitelist: ::prost::alloc::vec::Vec<Denom>,
    #[prost(string, tag = "5")]
    #[serde(alias = "slashFraction")]
    pub slash_fraction: ::prost::alloc::string::String,
    /// The interval in blocks at which the oracle module will assess validator penalty counters, and penalize validators with too poor performance.
    #[prost(uint64, tag = "6")]
    #[serde(alias = "slashWindow", with = "crate::proto::json::uint64")]
    pub slash_window: u64,
    /// The minimum percentage of voting windows for which a validator must have `success`es in order to not be penalized at the end of the slash window.
    #[prost(string, tag = "7")]
    #[serde(alias = "minValidPerWindow")]
    pub min_valid_per_window: ::prost::alloc::string::String,
    #[prost(uint64, tag = "9")]
    #[serde(alias = "lookbackDuration", with = "crate::proto::json::uint64")]
    pub lookback_duration: u64,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct Denom {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct AggregateExchangeRateVote {
    #[prost(message, repeated, tag = "1")]
    #[serde(alias = "exchangeRateTuples")]
    pub exchange_rate_tuples: ::prost::alloc::vec::Vec<ExchangeRateTuple>,
    #[prost(string, tag = "2")]
    pub voter: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct ExchangeRateTuple {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    #[serde(alias = "exchangeRate")]
    pub exchange_rate: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct OracleExchangeRate {
    #[prost(string, tag = "1")]
    #[serde(alias = "exchangeRate")]
    pub exchange_rate: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    #[serde(alias = "lastUpdate")]
    pub last_update: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    #[serde(alias = "lastUpdateTimestamp", with = "crate::proto::json::int64")]
    pub last_update_timestamp: i64,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct PriceSnapshotItem {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    #[serde(alias = "oracleExchangeRate", skip_serializing_if = "Option::is_none")]
    pub oracle_exchange_rate: ::core::option::Option<OracleExchangeRate>,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct PriceSnapshot {
    #[prost(int64, tag = "1")]
    #[serde(alias = "snapshotTimestamp", with = "crate::proto::json::int64")]
    pub snapshot_timestamp: i64,
    #[prost(message, repeated, tag = "2")]
    #[serde(alias = "priceSnapshotItems")]
    pub price_snapshot_items: ::prost::alloc::vec::Vec<PriceSnapshotItem>,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct OracleTwap {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub twap: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    #[serde(alias = "lookbackSeconds", with = "crate::proto::json::int64")]
    pub lookback_seconds: i64,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct VotePenaltyCounter {
    #[prost(uint64, tag = "1")]
    #[serde(alias = "missCount", with = "crate::proto::json::uint64")]
    pub miss_count: u64,
    #[prost(uint64, tag = "2")]
    #[serde(alias = "abstainCount", with = "crate::proto::json::uint64")]
    pub abstain_count: u64,
    #[prost(uint64, tag = "3")]
    #[serde(alias = "successCount", with = "crate::proto::json::uint64")]
    pub success_count: u64,
}
/// QueryExchangeRateRequest is the request type for the Query/ExchangeRate RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryExchangeRateRequest {
    /// denom defines the denomination to query for.
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
}
/// QueryExchangeRateResponse is response type for the
/// Query/ExchangeRate RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryExchangeRateResponse {
    /// exchange_rate defines the exchange rate of Sei denominated in various Sei
    #[prost(message, optional, tag = "1")]
    #[serde(alias = "oracleExchangeRate", skip_serializing_if = "Option::is_none")]
    pub oracle_exchange_rate: ::core::option::Option<OracleExchangeRate>,
}
/// QueryExchangeRatesRequest is the request type for the Query/ExchangeRates RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryExchangeRatesRequest {}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct DenomOracleExchangeRatePair {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    #[serde(alias = "oracleExchangeRate", skip_serializing_if = "Option::is_none")]
    pub oracle_exchange_rate: ::core::option::Option<OracleExchangeRate>,
}
/// QueryExchangeRatesResponse is response type for the
/// Query/ExchangeRates RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryExchangeRatesResponse {
    /// exchange_rates defines a list of the exchange rate for all whitelisted denoms.
    #[prost(message, repeated, tag = "1")]
    #[serde(alias = "denomOracleExchangeRatePairs")]
    pub denom_oracle_exchange_rate_pairs: ::prost::alloc::vec::Vec<DenomOracleExchangeRatePair>,
}
/// QueryActivesRequest is the request type for the Query/Actives RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryActivesRequest {}
/// QueryActivesResponse is response type for the
/// Query/Actives RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryActivesResponse {
    /// actives defines a list of the denomination which oracle prices aggreed upon.
    #[prost(string, repeated, tag = "1")]
    pub actives: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// QueryVoteTargetsRequest is the request type for the Query/VoteTargets RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryVoteTargetsRequest {}
/// QueryVoteTargetsResponse is response type for the
/// Query/VoteTargets RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryVoteTargetsResponse {
    /// vote_targets defines a list of the denomination in which everyone
    /// should vote in the current vote period.
    #[prost(string, repeated, tag = "1")]
    #[serde(alias = "voteTargets")]
    pub vote_targets: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// request type for price snapshot history RPC method
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryPriceSnapshotHistoryRequest {}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryPriceSnapshotHistoryResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(alias = "priceSnapshots")]
    pub price_snapshots: ::prost::alloc::vec::Vec<PriceSnapshot>,
}
/// request type for twap RPC method
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryTwapsRequest {
    #[prost(uint64, tag = "1")]
    #[serde(alias = "lookbackSeconds", with = "crate::proto::json::uint64")]
    pub lookback_seconds: u64,
}
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryTwapsResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(alias = "oracleTwaps")]
    pub oracle_twaps: ::prost::alloc::vec::Vec<OracleTwap>,
}
/// QueryFeederDelegationRequest is the request type for the Query/FeederDelegation RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryFeederDelegationRequest {
    /// validator defines the validator address to query for.
    #[prost(string, tag = "1")]
    #[serde(alias = "validatorAddr")]
    pub validator_addr: ::prost::alloc::string::String,
}
/// QueryFeederDelegationResponse is response type for the
/// Query/FeederDelegation RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryFeederDelegationResponse {
    /// feeder_addr defines the feeder delegation of a validator
    #[prost(string, tag = "1")]
    #[serde(alias = "feederAddr")]
    pub feeder_addr: ::prost::alloc::string::String,
}
/// QueryVotePenaltyCounterRequest is the request type for the Query/MissCounter RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryVotePenaltyCounterRequest {
    /// validator defines the validator address to query for.
    #[prost(string, tag = "1")]
    #[serde(alias = "validatorAddr")]
    pub validator_addr: ::prost::alloc::string::String,
}
/// QueryVotePenaltyCounterResponse is response type for the
/// Query/VotePenaltyCounter RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryVotePenaltyCounterResponse {
    #[prost(message, optional, tag = "1")]
    #[serde(alias = "votePenaltyCounter", skip_serializing_if = "Option::is_none")]
    pub vote_penalty_counter: ::core::option::Option<VotePenaltyCounter>,
}
/// QuerySlashWindow is the request type for the
/// Query/SlashWindow RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QuerySlashWindowRequest {}
/// QuerySlashWindowResponse is response type for the
/// Query/SlashWindow RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QuerySlashWindowResponse {
    /// window_progress defines the number of voting periods
    /// since the last slashing event would have taken place.
    #[prost(uint64, tag = "1")]
    #[serde(alias = "windowProgress", with = "crate::proto::json::uint64")]
    pub window_progress: u64,
}
/// QueryParamsRequest is the request type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryParamsRequest {}
/// QueryParamsResponse is the response type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryParamsResponse {
    /// params defines the parameters of the module.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: ::core::option::Option<Params>,
}
/// MsgAggregateExchangeRateVote represents a message to submit
/// aggregate exchange rate vote.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateVote {
    /// 1 reserved from old field `salt`
    #[prost(string, tag = "2")]
    #[serde(alias = "exchangeRates")]
    pub exchange_rates: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub feeder: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub validator: ::prost::alloc::string::String,
}
/// MsgAggregateExchangeRateVoteResponse defines the Msg/AggregateExchangeRateVote response type.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateVoteResponse {}
/// MsgDelegateFeedConsent represents a message to
/// delegate oracle voting rights to another address.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgDelegateFeedConsent {
    #[prost(string, tag = "1")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub delegate: ::prost::alloc::string::String,
}
/// MsgDelegateFeedConsentResponse defines the Msg/DelegateFeedConsent response type.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgDelegateFeedConsentResponse {}
/// Generated client implementations.
pub mod query_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /// Query defines the gRPC querier service.
    #[derive(Debug, Clone)]
    pub struct QueryClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl QueryClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> QueryClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        /// ExchangeRate returns exchange rate of a denom
        pub async fn exchange_rate(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryExchangeRateRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryExchangeRateResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/ExchangeRate",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "ExchangeRate"));
            self.inner.unary(req, path, codec).await
        }
        /// ExchangeRates returns exchange rates of all denoms
        pub async fn exchange_rates(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryExchangeRatesRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryExchangeRatesResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/ExchangeRates",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "ExchangeRates"));
            self.inner.unary(req, path, codec).await
        }
        /// Actives returns all active denoms
        pub async fn actives(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryActivesRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryActivesResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/Actives",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "Actives"));
            self.inner.unary(req, path, codec).await
        }
        /// VoteTargets returns all vote target denoms
        pub async fn vote_targets(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryVoteTargetsRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryVoteTargetsResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/VoteTargets",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "VoteTargets"));
            self.inner.unary(req, path, codec).await
        }
        /// PriceSnapshotHistory returns the history of price snapshots for all assets
        pub async fn price_snapshot_history(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryPriceSnapshotHistoryRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryPriceSnapshotHistoryResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/PriceSnapshotHistory",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "PriceSnapshotHistory"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn twaps(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryTwapsRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryTwapsResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/Twaps",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "Twaps"));
            self.inner.unary(req, path, codec).await
        }
        /// FeederDelegation returns feeder delegation of a validator
        pub async fn feeder_delegation(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryFeederDelegationRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryFeederDelegationResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/FeederDelegation",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "FeederDelegation"));
            self.inner.unary(req, path, codec).await
        }
        /// MissCounter returns oracle miss counter of a validator
        pub async fn vote_penalty_counter(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryVotePenaltyCounterRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryVotePenaltyCounterResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/VotePenaltyCounter",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "VotePenaltyCounter"));
            self.inner.unary(req, path, codec).await
        }
        /// SlashWindow returns slash window information
        pub async fn slash_window(
            &mut self,
            request: impl tonic::IntoRequest<super::QuerySlashWindowRequest>,
        ) -> std::result::Result<tonic::Response<super::QuerySlashWindowResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/SlashWindow",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "SlashWindow"));
            self.inner.unary(req, path, codec).await
        }
        /// Params queries all parameters.
        pub async fn params(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryParamsRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryParamsResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/sei.oracle.v1.Query/Params",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sei.oracle.v1.Query", "Params"));
            self.inner.unary(req, path, codec).await
        }
    }
}

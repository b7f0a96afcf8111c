/// AggregateExchangeRatePrevote is the commit half of the two-step
/// commit-reveal vote used by chains that predate combined voting.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct AggregateExchangeRatePrevote {
    #[prost(string, tag = "1")]
    pub hash: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub voter: ::prost::alloc::string::String,
    #[prost(uint64, tag = "3")]
    #[serde(alias = "submitBlock", with = "crate::proto::json::uint64")]
    pub submit_block: u64,
}
/// MsgAggregateExchangeRatePrevote represents a message to submit
/// aggregate exchange rate prevote.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRatePrevote {
    #[prost(string, tag = "1")]
    pub hash: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub feeder: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub validator: ::prost::alloc::string::String,
}
/// MsgAggregateExchangeRatePrevoteResponse defines the Msg/AggregateExchangeRatePrevote response type.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRatePrevoteResponse {}
/// MsgAggregateExchangeRateVote represents a message to submit
/// aggregate exchange rate vote revealing a prior prevote.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateVote {
    #[prost(string, tag = "1")]
    pub salt: ::prost::alloc::string::String,
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
/// MsgAggregateExchangeRateCombinedVote reveals the previous vote and
/// commits the next prevote in one message.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateCombinedVote {
    #[prost(string, tag = "1")]
    #[serde(alias = "voteSalt")]
    pub vote_salt: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    #[serde(alias = "voteExchangeRates")]
    pub vote_exchange_rates: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    #[serde(alias = "prevoteHash")]
    pub prevote_hash: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub feeder: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub validator: ::prost::alloc::string::String,
}
/// MsgAggregateExchangeRateCombinedVoteResponse defines the Msg/AggregateExchangeRateCombinedVote response type.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateCombinedVoteResponse {}
/// QueryAggregatePrevoteRequest is the request type for the Query/AggregatePrevote RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregatePrevoteRequest {
    /// validator defines the validator address to query for.
    #[prost(string, tag = "1")]
    #[serde(alias = "validatorAddr")]
    pub validator_addr: ::prost::alloc::string::String,
}
/// QueryAggregatePrevoteResponse is response type for the
/// Query/AggregatePrevote RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregatePrevoteResponse {
    #[prost(message, optional, tag = "1")]
    #[serde(alias = "aggregatePrevote", skip_serializing_if = "Option::is_none")]
    pub aggregate_prevote: ::core::option::Option<AggregateExchangeRatePrevote>,
}
/// QueryAggregatePrevotesRequest is the request type for the Query/AggregatePrevotes RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregatePrevotesRequest {}
/// QueryAggregatePrevotesResponse is response type for the
/// Query/AggregatePrevotes RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregatePrevotesResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(alias = "aggregatePrevotes")]
    pub aggregate_prevotes: ::prost::alloc::vec::Vec<AggregateExchangeRatePrevote>,
}
/// QueryAggregateVoteRequest is the request type for the Query/AggregateVote RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregateVoteRequest {
    /// validator defines the validator address to query for.
    #[prost(string, tag = "1")]
    #[serde(alias = "validatorAddr")]
    pub validator_addr: ::prost::alloc::string::String,
}
/// QueryAggregateVoteResponse is response type for the
/// Query/AggregateVote RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregateVoteResponse {
    #[prost(message, optional, tag = "1")]
    #[serde(alias = "aggregateVote", skip_serializing_if = "Option::is_none")]
    pub aggregate_vote: ::core::option::Option<
        super::super::super::sei::oracle::v1::AggregateExchangeRateVote,
    >,
}
/// QueryAggregateVotesRequest is the request type for the Query/AggregateVotes RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregateVotesRequest {}
/// QueryAggregateVotesResponse is response type for the
/// Query/AggregateVotes RPC method.
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct QueryAggregateVotesResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(alias = "aggregateVotes")]
    pub aggregate_votes: ::prost::alloc::vec::Vec<
        super::super::super::sei::oracle::v1::AggregateExchangeRateVote,
    >,
}
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
        /// AggregatePrevote returns an aggregate prevote of a validator
        pub async fn aggregate_prevote(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryAggregatePrevoteRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryAggregatePrevoteResponse>, tonic::Status> {
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
                "/seiprotocol.seichain.oracle.Query/AggregatePrevote",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("seiprotocol.seichain.oracle.Query", "AggregatePrevote"));
            self.inner.unary(req, path, codec).await
        }
        /// AggregatePrevotes returns aggregate prevotes of all validators
        pub async fn aggregate_prevotes(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryAggregatePrevotesRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryAggregatePrevotesResponse>, tonic::Status> {
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
                "/seiprotocol.seichain.oracle.Query/AggregatePrevotes",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("seiprotocol.seichain.oracle.Query", "AggregatePrevotes"));
            self.inner.unary(req, path, codec).await
        }
        /// AggregateVote returns an aggregate vote of a validator
        pub async fn aggregate_vote(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryAggregateVoteRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryAggregateVoteResponse>, tonic::Status> {
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
                "/seiprotocol.seichain.oracle.Query/AggregateVote",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("seiprotocol.seichain.oracle.Query", "AggregateVote"));
            self.inner.unary(req, path, codec).await
        }
        /// AggregateVotes returns aggregate votes of all validators
        pub async fn aggregate_votes(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryAggregateVotesRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryAggregateVotesResponse>, tonic::Status> {
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
                "/seiprotocol.seichain.oracle.Query/AggregateVotes",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("seiprotocol.seichain.oracle.Query", "AggregateVotes"));
            self.inner.unary(req, path, codec).await
        }
    }
}

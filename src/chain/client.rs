use std::future::Future;
use std::time::Duration;

use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::Code;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::proto::authz::{QueryGrantsRequest, QueryGrantsResponse};
use crate::proto::cosmos::base::query::v1beta1::PageRequest;
use crate::proto::oracle::*;
use crate::proto::legacy_oracle::{
    QueryAggregatePrevoteRequest, QueryAggregatePrevoteResponse, QueryAggregatePrevotesRequest,
    QueryAggregatePrevotesResponse, QueryAggregateVoteRequest, QueryAggregateVoteResponse,
    QueryAggregateVotesRequest, QueryAggregateVotesResponse,
};
use crate::proto::upgrade::*;
use crate::proto::{
    AbciApplicationClient, AuthzQueryClient, LegacyOracleQueryClient, OracleQueryClient,
    UpgradeQueryClient,
};

/// gRPC query client for the oracle, upgrade and authz modules
#[derive(Clone)]
pub struct QueryClient {
    config: ClientConfig,
    channel: Option<Channel>,
}

impl QueryClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            channel: None,
        }
    }

    /// Connect to the gRPC endpoint
    pub async fn connect(&mut self) -> Result<()> {
        log::info!("Connecting to gRPC endpoint {}", self.config.grpc_endpoint);

        let mut endpoint = Endpoint::from_shared(self.config.grpc_endpoint.clone())?
            .timeout(Duration::from_secs(self.config.request_timeout))
            .connect_timeout(Duration::from_secs(self.config.connection_timeout));
        if self.config.grpc_endpoint.starts_with("https://") {
            endpoint = endpoint.tls_config(ClientTlsConfig::new())?;
        }

        let channel = endpoint.connect().await?;
        self.channel = Some(channel);

        log::info!("Connected to {}", self.config.grpc_endpoint);
        Ok(())
    }

    /// Check if the client is connected
    pub fn is_connected(&self) -> bool {
        self.channel.is_some()
    }

    fn channel(&self) -> Result<Channel> {
        self.channel.clone().ok_or(Error::NotConnected)
    }

    /// Raw generated clients on the shared channel
    pub fn oracle(&self) -> Result<OracleQueryClient<Channel>> {
        Ok(OracleQueryClient::new(self.channel()?))
    }

    pub fn legacy_oracle(&self) -> Result<LegacyOracleQueryClient<Channel>> {
        Ok(LegacyOracleQueryClient::new(self.channel()?))
    }

    pub fn upgrade(&self) -> Result<UpgradeQueryClient<Channel>> {
        Ok(UpgradeQueryClient::new(self.channel()?))
    }

    pub fn authz(&self) -> Result<AuthzQueryClient<Channel>> {
        Ok(AuthzQueryClient::new(self.channel()?))
    }

    pub fn abci(&self) -> Result<AbciApplicationClient<Channel>> {
        Ok(AbciApplicationClient::new(self.channel()?))
    }

    // --- oracle ---

    pub async fn exchange_rate(&self, denom: &str) -> Result<QueryExchangeRateResponse> {
        let request = QueryExchangeRateRequest {
            denom: denom.to_string(),
        };
        self.with_retry("oracle/ExchangeRate", |channel| {
            let request = request.clone();
            async move { OracleQueryClient::new(channel).exchange_rate(request).await }
        })
        .await
    }

    pub async fn exchange_rates(&self) -> Result<QueryExchangeRatesResponse> {
        self.with_retry("oracle/ExchangeRates", |channel| async move {
            OracleQueryClient::new(channel)
                .exchange_rates(QueryExchangeRatesRequest {})
                .await
        })
        .await
    }

    pub async fn actives(&self) -> Result<QueryActivesResponse> {
        self.with_retry("oracle/Actives", |channel| async move {
            OracleQueryClient::new(channel)
                .actives(QueryActivesRequest {})
                .await
        })
        .await
    }

    pub async fn vote_targets(&self) -> Result<QueryVoteTargetsResponse> {
        self.with_retry("oracle/VoteTargets", |channel| async move {
            OracleQueryClient::new(channel)
                .vote_targets(QueryVoteTargetsRequest {})
                .await
        })
        .await
    }

    pub async fn price_snapshot_history(&self) -> Result<QueryPriceSnapshotHistoryResponse> {
        self.with_retry("oracle/PriceSnapshotHistory", |channel| async move {
            OracleQueryClient::new(channel)
                .price_snapshot_history(QueryPriceSnapshotHistoryRequest {})
                .await
        })
        .await
    }

    pub async fn twaps(&self, lookback_seconds: u64) -> Result<QueryTwapsResponse> {
        self.with_retry("oracle/Twaps", |channel| async move {
            OracleQueryClient::new(channel)
                .twaps(QueryTwapsRequest { lookback_seconds })
                .await
        })
        .await
    }

    pub async fn feeder_delegation(&self, validator_addr: &str) -> Result<QueryFeederDelegationResponse> {
        let request = QueryFeederDelegationRequest {
            validator_addr: validator_addr.to_string(),
        };
        self.with_retry("oracle/FeederDelegation", |channel| {
            let request = request.clone();
            async move { OracleQueryClient::new(channel).feeder_delegation(request).await }
        })
        .await
    }

    pub async fn vote_penalty_counter(
        &self,
        validator_addr: &str,
    ) -> Result<QueryVotePenaltyCounterResponse> {
        let request = QueryVotePenaltyCounterRequest {
            validator_addr: validator_addr.to_string(),
        };
        self.with_retry("oracle/VotePenaltyCounter", |channel| {
            let request = request.clone();
            async move { OracleQueryClient::new(channel).vote_penalty_counter(request).await }
        })
        .await
    }

    pub async fn slash_window(&self) -> Result<QuerySlashWindowResponse> {
        self.with_retry("oracle/SlashWindow", |channel| async move {
            OracleQueryClient::new(channel)
                .slash_window(QuerySlashWindowRequest {})
                .await
        })
        .await
    }

    pub async fn oracle_params(&self) -> Result<QueryParamsResponse> {
        self.with_retry("oracle/Params", |channel| async move {
            OracleQueryClient::new(channel)
                .params(QueryParamsRequest {})
                .await
        })
        .await
    }

    // --- prevotes, served by the seiprotocol.seichain.oracle package ---

    pub async fn aggregate_prevote(&self, validator_addr: &str) -> Result<QueryAggregatePrevoteResponse> {
        let request = QueryAggregatePrevoteRequest {
            validator_addr: validator_addr.to_string(),
        };
        self.with_retry("oracle/AggregatePrevote", |channel| {
            let request = request.clone();
            async move { LegacyOracleQueryClient::new(channel).aggregate_prevote(request).await }
        })
        .await
    }

    pub async fn aggregate_prevotes(&self) -> Result<QueryAggregatePrevotesResponse> {
        self.with_retry("oracle/AggregatePrevotes", |channel| async move {
            LegacyOracleQueryClient::new(channel)
                .aggregate_prevotes(QueryAggregatePrevotesRequest {})
                .await
        })
        .await
    }

    pub async fn aggregate_vote(&self, validator_addr: &str) -> Result<QueryAggregateVoteResponse> {
        let request = QueryAggregateVoteRequest {
            validator_addr: validator_addr.to_string(),
        };
        self.with_retry("oracle/AggregateVote", |channel| {
            let request = request.clone();
            async move { LegacyOracleQueryClient::new(channel).aggregate_vote(request).await }
        })
        .await
    }

    pub async fn aggregate_votes(&self) -> Result<QueryAggregateVotesResponse> {
        self.with_retry("oracle/AggregateVotes", |channel| async move {
            LegacyOracleQueryClient::new(channel)
                .aggregate_votes(QueryAggregateVotesRequest {})
                .await
        })
        .await
    }

    // --- upgrade ---

    pub async fn current_plan(&self) -> Result<QueryCurrentPlanResponse> {
        self.with_retry("upgrade/CurrentPlan", |channel| async move {
            UpgradeQueryClient::new(channel)
                .current_plan(QueryCurrentPlanRequest {})
                .await
        })
        .await
    }

    pub async fn applied_plan(&self, name: &str) -> Result<QueryAppliedPlanResponse> {
        let request = QueryAppliedPlanRequest {
            name: name.to_string(),
        };
        self.with_retry("upgrade/AppliedPlan", |channel| {
            let request = request.clone();
            async move { UpgradeQueryClient::new(channel).applied_plan(request).await }
        })
        .await
    }

    pub async fn upgraded_consensus_state(
        &self,
        last_height: i64,
    ) -> Result<QueryUpgradedConsensusStateResponse> {
        self.with_retry("upgrade/UpgradedConsensusState", |channel| async move {
            UpgradeQueryClient::new(channel)
                .upgraded_consensus_state(QueryUpgradedConsensusStateRequest { last_height })
                .await
        })
        .await
    }

    /// Consensus versions of every module, or of `module_name` alone
    pub async fn module_versions(&self, module_name: Option<&str>) -> Result<QueryModuleVersionsResponse> {
        let request = QueryModuleVersionsRequest {
            module_name: module_name.unwrap_or_default().to_string(),
        };
        self.with_retry("upgrade/ModuleVersions", |channel| {
            let request = request.clone();
            async move { UpgradeQueryClient::new(channel).module_versions(request).await }
        })
        .await
    }

    // --- authz ---

    /// Grants from `granter` to `grantee`, optionally only for one message type
    pub async fn grants(
        &self,
        granter: &str,
        grantee: &str,
        msg_type_url: Option<&str>,
        pagination: Option<PageRequest>,
    ) -> Result<QueryGrantsResponse> {
        let request = QueryGrantsRequest {
            granter: granter.to_string(),
            grantee: grantee.to_string(),
            msg_type_url: msg_type_url.unwrap_or_default().to_string(),
            pagination,
        };
        self.with_retry("authz/Grants", |channel| {
            let request = request.clone();
            async move { AuthzQueryClient::new(channel).grants(request).await }
        })
        .await
    }

    /// Run `f` on the shared channel under the configured retry policy
    async fn with_retry<T, F, Fut>(&self, method: &str, f: F) -> Result<T>
    where
        F: Fn(Channel) -> Fut,
        Fut: Future<Output = std::result::Result<tonic::Response<T>, tonic::Status>>,
    {
        let channel = self.channel()?;
        retry(method, self.config.max_retries, || f(channel.clone())).await
    }
}

/// Call until success, a non-transient status, or `max_retries` retries,
/// sleeping 100 ms times the retry number between attempts
async fn retry<T, F, Fut>(method: &str, max_retries: u32, mut call: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<tonic::Response<T>, tonic::Status>>,
{
    let mut retries = 0;
    loop {
        match call().await {
            Ok(response) => return Ok(response.into_inner()),
            Err(status) if retries < max_retries && is_retryable(&status) => {
                retries += 1;
                log::warn!(
                    "{} failed ({:?}: {}), retry {}/{}",
                    method,
                    status.code(),
                    status.message(),
                    retries,
                    max_retries
                );
                tokio::time::sleep(Duration::from_millis(100 * retries as u64)).await;
            }
            Err(status) => {
                log::debug!("{} failed: {}", method, status);
                return Err(status.into());
            }
        }
    }
}

/// Transient failures worth another attempt; everything else is the node's answer
fn is_retryable(status: &tonic::Status) -> bool {
    matches!(
        status.code(),
        Code::Unavailable | Code::DeadlineExceeded | Code::ResourceExhausted | Code::Aborted
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_connected() {
        let client = QueryClient::new(ClientConfig::default());
        assert!(!client.is_connected());
        assert!(matches!(client.oracle(), Err(Error::NotConnected)));
    }

    #[tokio::test]
    async fn test_query_before_connect_fails() {
        let client = QueryClient::new(ClientConfig::default());
        let err = client.actives().await.unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }

    #[tokio::test]
    async fn test_invalid_endpoint() {
        let mut client = QueryClient::new(ClientConfig {
            grpc_endpoint: "not a uri".to_string(),
            ..ClientConfig::default()
        });
        assert!(client.connect().await.is_err());
    }

    #[test]
    fn test_retryable_codes() {
        assert!(is_retryable(&tonic::Status::unavailable("node restarting")));
        assert!(is_retryable(&tonic::Status::deadline_exceeded("slow")));
        assert!(!is_retryable(&tonic::Status::not_found("no such denom")));
        assert!(!is_retryable(&tonic::Status::invalid_argument("bad address")));
    }

    /// Answers `outcomes` in order, then succeeds
    async fn run_script(
        max_retries: u32,
        outcomes: Vec<tonic::Status>,
    ) -> (Result<u32>, u32, Duration) {
        let mut script = std::collections::VecDeque::from(outcomes);
        let mut attempts = 0;
        let start = tokio::time::Instant::now();
        let result = retry("test/Scripted", max_retries, || {
            attempts += 1;
            let outcome = match script.pop_front() {
                Some(status) => Err(status),
                None => Ok(tonic::Response::new(attempts)),
            };
            async move { outcome }
        })
        .await;
        (result, attempts, start.elapsed())
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_until_success() {
        let (result, attempts, elapsed) = run_script(
            3,
            vec![
                tonic::Status::unavailable("node restarting"),
                tonic::Status::unavailable("node restarting"),
            ],
        )
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(attempts, 3);
        // 100 ms then 200 ms
        assert!(elapsed >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_retry_on_final_status() {
        let (result, attempts, elapsed) =
            run_script(3, vec![tonic::Status::not_found("no such denom")]).await;
        assert_eq!(attempts, 1);
        assert_eq!(elapsed, Duration::ZERO);
        match result {
            Err(Error::Status(status)) => assert_eq!(status.code(), Code::NotFound),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_exhausted() {
        let outcomes = (0..5)
            .map(|_| tonic::Status::deadline_exceeded("slow"))
            .collect();
        let (result, attempts, _) = run_script(2, outcomes).await;
        assert_eq!(attempts, 3);
        assert!(matches!(
            result,
            Err(Error::Status(status)) if status.code() == Code::DeadlineExceeded
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_retries() {
        let (result, attempts, _) =
            run_script(0, vec![tonic::Status::unavailable("down")]).await;
        assert_eq!(attempts, 1);
        assert!(result.is_err());
    }
}

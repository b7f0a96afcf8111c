use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::proto::authz::QueryGrantsResponse;
use crate::proto::legacy_oracle::{
    QueryAggregatePrevoteResponse, QueryAggregatePrevotesResponse, QueryAggregateVoteResponse,
    QueryAggregateVotesResponse,
};
use crate::proto::oracle::*;
use crate::proto::upgrade::*;

const ORACLE_PREFIX: &[&str] = &["sei", "oracle", "v1"];
const LEGACY_ORACLE_PREFIX: &[&str] = &["sei-protocol", "sei-chain", "oracle"];
const ORACLE_PARAMS: &[&str] = &["sei-protocol", "oracle", "v1", "params"];
const UPGRADE_PREFIX: &[&str] = &["cosmos", "upgrade", "v1beta1"];
const AUTHZ_GRANTS: &[&str] = &["cosmos", "authz", "v1beta1", "grants"];

/// Client for the gRPC-gateway REST routes. Each query is one GET returning
/// the proto3 JSON of the response message.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    legacy_paths: bool,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.rest_endpoint)
            .map_err(|_| Error::InvalidUrl(config.rest_endpoint.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(config.rest_endpoint.clone()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .build()?;
        Ok(Self {
            http,
            base_url,
            legacy_paths: config.legacy_paths,
        })
    }

    /// Append `segments` to the base URL, percent-encoding each one so a
    /// denom like `ibc/0A1B` stays a single path segment
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(segments)?;
        log::debug!("GET {}", url);

        let response = self.http.get(url.clone()).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("GET {} returned {}", url, status);
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    async fn get_under<T: DeserializeOwned>(&self, prefix: &[&str], route: &[&str]) -> Result<T> {
        let segments: Vec<&str> = prefix.iter().chain(route).copied().collect();
        self.get(&segments, &[]).await
    }

    async fn oracle_get<T: DeserializeOwned>(&self, route: &[&str]) -> Result<T> {
        let prefix = if self.legacy_paths {
            LEGACY_ORACLE_PREFIX
        } else {
            ORACLE_PREFIX
        };
        self.get_under(prefix, route).await
    }

    // --- oracle ---

    pub async fn oracle_params(&self) -> Result<QueryParamsResponse> {
        if self.legacy_paths {
            self.get_under(LEGACY_ORACLE_PREFIX, &["params"]).await
        } else {
            self.get(ORACLE_PARAMS, &[]).await
        }
    }

    pub async fn actives(&self) -> Result<QueryActivesResponse> {
        self.oracle_get(&["denoms", "actives"]).await
    }

    pub async fn exchange_rates(&self) -> Result<QueryExchangeRatesResponse> {
        self.oracle_get(&["denoms", "exchange_rates"]).await
    }

    pub async fn exchange_rate(&self, denom: &str) -> Result<QueryExchangeRateResponse> {
        self.oracle_get(&["denoms", denom, "exchange_rate"]).await
    }

    pub async fn price_snapshot_history(&self) -> Result<QueryPriceSnapshotHistoryResponse> {
        self.oracle_get(&["denoms", "price_snapshot_history"]).await
    }

    pub async fn twaps(&self, lookback_seconds: u64) -> Result<QueryTwapsResponse> {
        let lookback = lookback_seconds.to_string();
        self.oracle_get(&["denoms", "twaps", lookback.as_str()]).await
    }

    pub async fn vote_targets(&self) -> Result<QueryVoteTargetsResponse> {
        self.oracle_get(&["denoms", "vote_targets"]).await
    }

    pub async fn slash_window(&self) -> Result<QuerySlashWindowResponse> {
        self.oracle_get(&["slash_window"]).await
    }

    pub async fn feeder_delegation(&self, validator_addr: &str) -> Result<QueryFeederDelegationResponse> {
        self.oracle_get(&["validators", validator_addr, "feeder"]).await
    }

    pub async fn vote_penalty_counter(
        &self,
        validator_addr: &str,
    ) -> Result<QueryVotePenaltyCounterResponse> {
        self.oracle_get(&["validators", validator_addr, "vote_penalty_counter"])
            .await
    }

    // --- prevotes, only served under the legacy prefix ---

    pub async fn aggregate_prevotes(&self) -> Result<QueryAggregatePrevotesResponse> {
        self.get_under(LEGACY_ORACLE_PREFIX, &["validators", "aggregate_prevotes"])
            .await
    }

    pub async fn aggregate_prevote(&self, validator_addr: &str) -> Result<QueryAggregatePrevoteResponse> {
        self.get_under(
            LEGACY_ORACLE_PREFIX,
            &["validators", validator_addr, "aggregate_prevote"],
        )
        .await
    }

    pub async fn aggregate_votes(&self) -> Result<QueryAggregateVotesResponse> {
        self.get_under(LEGACY_ORACLE_PREFIX, &["validators", "aggregate_votes"])
            .await
    }

    pub async fn aggregate_vote(&self, validator_addr: &str) -> Result<QueryAggregateVoteResponse> {
        self.get_under(
            LEGACY_ORACLE_PREFIX,
            &["validators", validator_addr, "aggregate_vote"],
        )
        .await
    }

    // --- upgrade ---

    pub async fn current_plan(&self) -> Result<QueryCurrentPlanResponse> {
        self.get_under(UPGRADE_PREFIX, &["current_plan"]).await
    }

    pub async fn applied_plan(&self, name: &str) -> Result<QueryAppliedPlanResponse> {
        self.get_under(UPGRADE_PREFIX, &["applied_plan", name]).await
    }

    pub async fn upgraded_consensus_state(
        &self,
        last_height: i64,
    ) -> Result<QueryUpgradedConsensusStateResponse> {
        let height = last_height.to_string();
        self.get_under(UPGRADE_PREFIX, &["upgraded_consensus_state", height.as_str()])
            .await
    }

    pub async fn module_versions(&self, module_name: Option<&str>) -> Result<QueryModuleVersionsResponse> {
        let segments: Vec<&str> = UPGRADE_PREFIX.iter().copied().chain(["module_versions"]).collect();
        let query: Vec<(&str, &str)> = module_name.map(|m| ("module_name", m)).into_iter().collect();
        self.get(&segments, &query).await
    }

    // --- authz ---

    pub async fn grants(
        &self,
        granter: &str,
        grantee: &str,
        msg_type_url: Option<&str>,
    ) -> Result<QueryGrantsResponse> {
        let mut query = vec![("granter", granter), ("grantee", grantee)];
        if let Some(url) = msg_type_url {
            query.push(("msg_type_url", url));
        }
        self.get(AUTHZ_GRANTS, &query).await
    }
}

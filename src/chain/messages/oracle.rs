use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::proto::legacy_oracle;
use crate::proto::oracle::{ExchangeRateTuple, MsgAggregateExchangeRateVote, MsgDelegateFeedConsent};

/// sdk.Dec carries 18 fractional digits
const MAX_DECIMAL_PLACES: usize = 18;

/// Prevote hashes are sha256 truncated to 20 bytes
const VOTE_HASH_LEN: usize = 20;

impl MsgAggregateExchangeRateVote {
    /// Build a vote from parsed tuples, encoding them into the
    /// `exchange_rates` string the chain expects
    pub fn new<F, V>(tuples: &[ExchangeRateTuple], feeder: F, validator: V) -> Self
    where
        F: Into<String>,
        V: Into<String>,
    {
        Self {
            exchange_rates: format_exchange_rate_tuples(tuples),
            feeder: feeder.into(),
            validator: validator.into(),
        }
    }

    /// Parse the `exchange_rates` string back into tuples
    pub fn tuples(&self) -> Result<Vec<ExchangeRateTuple>> {
        parse_exchange_rate_tuples(&self.exchange_rates)
    }
}

impl MsgDelegateFeedConsent {
    /// Delegate the validator operator's oracle voting rights to `delegate`
    pub fn new<O: Into<String>, D: Into<String>>(operator: O, delegate: D) -> Self {
        Self {
            operator: operator.into(),
            delegate: delegate.into(),
        }
    }
}

/// Hex hash committed by a prevote: truncated sha256 of `salt:rates:validator`
pub fn aggregate_vote_hash(salt: &str, exchange_rates: &str, validator: &str) -> String {
    let digest = Sha256::digest(format!("{}:{}:{}", salt, exchange_rates, validator));
    hex::encode(&digest[..VOTE_HASH_LEN])
}

impl legacy_oracle::MsgAggregateExchangeRatePrevote {
    /// Commit to `tuples` without revealing them
    pub fn new<F, V>(salt: &str, tuples: &[ExchangeRateTuple], feeder: F, validator: V) -> Self
    where
        F: Into<String>,
        V: Into<String>,
    {
        let validator = validator.into();
        Self {
            hash: aggregate_vote_hash(salt, &format_exchange_rate_tuples(tuples), &validator),
            feeder: feeder.into(),
            validator,
        }
    }
}

impl legacy_oracle::MsgAggregateExchangeRateVote {
    /// Reveal the rates committed by an earlier prevote with the same salt
    pub fn new<F, V>(salt: &str, tuples: &[ExchangeRateTuple], feeder: F, validator: V) -> Self
    where
        F: Into<String>,
        V: Into<String>,
    {
        Self {
            salt: salt.to_string(),
            exchange_rates: format_exchange_rate_tuples(tuples),
            feeder: feeder.into(),
            validator: validator.into(),
        }
    }

    /// Hash this reveal must match
    pub fn vote_hash(&self) -> String {
        aggregate_vote_hash(&self.salt, &self.exchange_rates, &self.validator)
    }

    pub fn tuples(&self) -> Result<Vec<ExchangeRateTuple>> {
        parse_exchange_rate_tuples(&self.exchange_rates)
    }
}

impl legacy_oracle::AggregateExchangeRatePrevote {
    /// Whether `vote` reveals the rates this prevote committed to
    pub fn matches(&self, vote: &legacy_oracle::MsgAggregateExchangeRateVote) -> bool {
        self.voter == vote.validator && self.hash == vote.vote_hash()
    }
}

/// Parse `"1.2uatom,0.5usei"` into exchange-rate tuples.
///
/// Each entry is a positive decimal amount followed by a denom of 3 to 128
/// characters that starts with a letter and continues with `[a-zA-Z0-9/:._-]`.
/// A denom may appear only once.
pub fn parse_exchange_rate_tuples(input: &str) -> Result<Vec<ExchangeRateTuple>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::invalid_exchange_rate(input, "no exchange rates"));
    }

    let mut seen = HashSet::new();
    let mut tuples = Vec::new();
    for entry in input.split(',') {
        let tuple = parse_tuple(entry.trim())?;
        if !seen.insert(tuple.denom.clone()) {
            return Err(Error::invalid_exchange_rate(
                input,
                format!("duplicated denom {}", tuple.denom),
            ));
        }
        tuples.push(tuple);
    }
    Ok(tuples)
}

/// Inverse of [`parse_exchange_rate_tuples`]
pub fn format_exchange_rate_tuples(tuples: &[ExchangeRateTuple]) -> String {
    tuples
        .iter()
        .map(|t| format!("{}{}", t.exchange_rate, t.denom))
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_tuple(entry: &str) -> Result<ExchangeRateTuple> {
    let split = entry
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(|| Error::invalid_exchange_rate(entry, "missing denom"))?;
    let (amount, denom) = entry.split_at(split);
    let denom = denom.trim_start();

    validate_amount(entry, amount)?;
    validate_denom(entry, denom)?;

    Ok(ExchangeRateTuple {
        denom: denom.to_string(),
        exchange_rate: amount.to_string(),
    })
}

fn validate_amount(entry: &str, amount: &str) -> Result<()> {
    let (whole, frac) = match amount.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (amount, None),
    };
    let well_formed = match frac {
        Some(f) => !f.is_empty() && !f.contains('.') && f.len() <= MAX_DECIMAL_PLACES,
        None => !whole.is_empty(),
    };
    if !well_formed {
        return Err(Error::invalid_exchange_rate(entry, "malformed decimal amount"));
    }
    if amount.bytes().all(|b| b == b'0' || b == b'.') {
        return Err(Error::invalid_exchange_rate(entry, "exchange rate must be positive"));
    }
    Ok(())
}

fn validate_denom(entry: &str, denom: &str) -> Result<()> {
    let mut chars = denom.chars();
    let starts_with_letter = chars.next().map_or(false, |c| c.is_ascii_alphabetic());
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));
    if !(3..=128).contains(&denom.len()) || !starts_with_letter || !valid_rest {
        return Err(Error::invalid_exchange_rate(entry, format!("invalid denom {:?}", denom)));
    }
    Ok(())
}

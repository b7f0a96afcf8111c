use chrono::{DateTime, Utc};
use pbjson_types::Timestamp;
use prost_types::Any;

use crate::codec;
use crate::proto::authz::{GenericAuthorization, Grant, MsgExec, MsgGrant, MsgRevoke};

impl MsgGrant {
    /// Grant `grantee` unrestricted use of one message type on behalf of `granter`
    pub fn generic<G, E, U>(
        granter: G,
        grantee: E,
        msg_type_url: U,
        expiration: Option<Timestamp>,
    ) -> Self
    where
        G: Into<String>,
        E: Into<String>,
        U: Into<String>,
    {
        let authorization = GenericAuthorization {
            msg: msg_type_url.into(),
        };
        Self {
            granter: granter.into(),
            grantee: grantee.into(),
            grant: Some(Grant {
                authorization: Some(codec::to_any(&authorization)),
                expiration,
            }),
        }
    }
}

impl Grant {
    /// The message type URL when this grant holds a `GenericAuthorization`
    pub fn generic_msg_type_url(&self) -> Option<String> {
        let any = self.authorization.as_ref()?;
        codec::from_any::<GenericAuthorization>(any).ok().map(|a| a.msg)
    }

    /// Expiration as a UTC time; `None` when the grant never expires or
    /// the timestamp is out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let ts = self.expiration.as_ref()?;
        DateTime::from_timestamp(ts.seconds, u32::try_from(ts.nanos).ok()?)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map_or(false, |expiry| expiry <= now)
    }
}

/// Timestamp for a grant expiring at `time`
pub fn expiration_at(time: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    }
}

impl MsgExec {
    pub fn new<G: Into<String>>(grantee: G, msgs: Vec<Any>) -> Self {
        Self {
            grantee: grantee.into(),
            msgs,
        }
    }
}

impl MsgRevoke {
    pub fn new<G, E, U>(granter: G, grantee: E, msg_type_url: U) -> Self
    where
        G: Into<String>,
        E: Into<String>,
        U: Into<String>,
    {
        Self {
            granter: granter.into(),
            grantee: grantee.into(),
            msg_type_url: msg_type_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::messages::MessageBuilder;
    use crate::proto::oracle::MsgAggregateExchangeRateVote;
    use prost::Name;

    #[test]
    fn test_generic_grant() {
        let url = MsgAggregateExchangeRateVote::type_url();
        let expiration = Timestamp { seconds: 1_700_000_000, nanos: 0 };
        let msg = MsgGrant::generic("sei1validator", "sei1feeder", url.clone(), Some(expiration.clone()));

        let grant = msg.grant.as_ref().unwrap();
        assert_eq!(
            grant.authorization.as_ref().unwrap().type_url,
            "/cosmos.authz.v1beta1.GenericAuthorization"
        );
        assert_eq!(grant.generic_msg_type_url(), Some(url));
        assert_eq!(grant.expiration, Some(expiration));
    }

    #[test]
    fn test_grant_expiry() {
        let expiry = DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let msg = MsgGrant::generic(
            "sei1validator",
            "sei1feeder",
            "/sei.oracle.v1.MsgAggregateExchangeRateVote",
            Some(expiration_at(expiry)),
        );
        let grant = msg.grant.unwrap();
        assert_eq!(grant.expiration.as_ref().unwrap().seconds, 1_893_456_000);
        assert_eq!(grant.expires_at(), Some(expiry));
        assert!(!grant.is_expired_at(expiry - chrono::Duration::seconds(1)));
        assert!(grant.is_expired_at(expiry));

        let forever = Grant::default();
        assert_eq!(forever.expires_at(), None);
        assert!(!forever.is_expired_at(expiry));
    }

    #[test]
    fn test_exec_wraps_messages() {
        let vote = MsgAggregateExchangeRateVote::new(&[], "sei1feeder", "seivaloper1val");
        let exec = MsgExec::new("sei1feeder", vec![vote.to_any()]);
        assert_eq!(exec.msgs.len(), 1);
        assert_eq!(exec.msgs[0].type_url, "/sei.oracle.v1.MsgAggregateExchangeRateVote");
        assert_eq!(exec.type_url_of(), "/cosmos.authz.v1beta1.MsgExec");
    }

    #[test]
    fn test_revoke() {
        let msg = MsgRevoke::new("sei1a", "sei1b", "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(msg.msg_type_url, "/cosmos.bank.v1beta1.MsgSend");
    }
}

/// Protobuf types for the Tendermint ABCI, Cosmos SDK and Sei oracle packages.
/// The `*.rs` files next to this one are prost/tonic output checked into the
/// tree, with serde derives for the proto3 JSON mapping in `json`.
pub mod json;

/// `ProtoEnum` for a prost enumeration whose last variant is `Unrecognized = -1`
macro_rules! proto_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::proto::json::ProtoEnum for $ty {
                const UNRECOGNIZED: Self = Self::Unrecognized;

                fn as_str_name(&self) -> &'static str {
                    <$ty>::as_str_name(self)
                }

                fn from_str_name(name: &str) -> Option<Self> {
                    <$ty>::from_str_name(name)
                }

                fn try_from_raw(raw: i32) -> Option<Self> {
                    <$ty>::try_from(raw).ok()
                }

                fn to_raw(self) -> i32 {
                    self as i32
                }
            }
        )+
    };
}

/// `prost::Name` for messages whose Rust name matches the proto name
macro_rules! proto_name {
    ($package:literal: $($ty:ident),+ $(,)?) => {
        $(
            impl ::prost::Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = $package;
            }
        )+
    };
}

pub mod tendermint {
    pub mod crypto {
        include!("tendermint.crypto.rs");
    }

    pub mod version {
        include!("tendermint.version.rs");
    }

    pub mod types {
        include!("tendermint.types.rs");
    }

    pub mod abci {
        include!("tendermint.abci.rs");

        proto_enum!(
            CheckTxType,
            EvidenceType,
            response_offer_snapshot::Result,
            response_apply_snapshot_chunk::Result,
        );

        proto_name!("tendermint.abci": Request, Response, Event, EventAttribute, TxResult);
    }
}

pub mod cosmos {
    pub mod base {
        pub mod v1beta1 {
            include!("cosmos.base.v1beta1.rs");

            proto_name!("cosmos.base.v1beta1": Coin, DecCoin);
        }

        pub mod query {
            pub mod v1beta1 {
                include!("cosmos.base.query.v1beta1.rs");
            }
        }

        pub mod abci {
            pub mod v1beta1 {
                include!("cosmos.base.abci.v1beta1.rs");

                proto_name!("cosmos.base.abci.v1beta1": TxResponse, TxMsgData, MsgData);
            }
        }
    }

    pub mod authz {
        pub mod v1beta1 {
            include!("cosmos.authz.v1beta1.rs");

            proto_name!(
                "cosmos.authz.v1beta1":
                GenericAuthorization,
                Grant,
                MsgGrant,
                MsgGrantResponse,
                MsgExec,
                MsgExecResponse,
                MsgRevoke,
                MsgRevokeResponse,
                EventGrant,
                EventRevoke,
            );
        }
    }

    pub mod upgrade {
        pub mod v1beta1 {
            include!("cosmos.upgrade.v1beta1.rs");

            proto_name!(
                "cosmos.upgrade.v1beta1":
                Plan,
                SoftwareUpgradeProposal,
                CancelSoftwareUpgradeProposal,
                ModuleVersion,
            );
        }
    }
}

pub mod sei {
    pub mod oracle {
        pub mod v1 {
            include!("sei.oracle.v1.rs");

            proto_name!(
                "sei.oracle.v1":
                Params,
                AggregateExchangeRateVote,
                ExchangeRateTuple,
                MsgAggregateExchangeRateVote,
                MsgAggregateExchangeRateVoteResponse,
                MsgDelegateFeedConsent,
                MsgDelegateFeedConsentResponse,
            );
        }
    }
}

/// Oracle package served by chains that predate `sei.oracle.v1`, including
/// the commit-reveal prevote flow
pub mod seiprotocol {
    pub mod seichain {
        pub mod oracle {
            include!("seiprotocol.seichain.oracle.rs");

            proto_name!(
                "seiprotocol.seichain.oracle":
                AggregateExchangeRatePrevote,
                MsgAggregateExchangeRatePrevote,
                MsgAggregateExchangeRatePrevoteResponse,
                MsgAggregateExchangeRateVote,
                MsgAggregateExchangeRateVoteResponse,
                MsgAggregateExchangeRateCombinedVote,
                MsgAggregateExchangeRateCombinedVoteResponse,
            );
        }
    }
}

// Short aliases for the packages the clients and CLI work with
pub use cosmos::authz::v1beta1 as authz;
pub use cosmos::base::abci::v1beta1 as base_abci;
pub use cosmos::upgrade::v1beta1 as upgrade;
pub use sei::oracle::v1 as oracle;
pub use seiprotocol::seichain::oracle as legacy_oracle;
pub use tendermint::abci;

pub use abci::abci_application_client::AbciApplicationClient;
pub use authz::query_client::QueryClient as AuthzQueryClient;
pub use legacy_oracle::query_client::QueryClient as LegacyOracleQueryClient;
pub use oracle::query_client::QueryClient as OracleQueryClient;
pub use upgrade::query_client::QueryClient as UpgradeQueryClient;

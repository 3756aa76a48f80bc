//! Canonical event types emitted by the points ledger contract.
//!
//! These mirror the topics published from `contracts/points_ledger/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the ledger contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A founder was registered (`fnd_reg` topic).
    FounderRegistered,
    /// A product was registered under a founder (`prd_reg` topic).
    ProductRegistered,
    /// A founder's first API key was issued (`key_set` topic).
    ApiKeyIssued,
    /// A founder's API key was replaced (`key_rot` topic).
    ApiKeyRotated,
    /// A founder was activated or deactivated (`fnd_stat` topic).
    FounderStatusChanged,
    /// A product's verification flag changed (`prd_ver` topic).
    ProductVerified,
    /// Points were allocated to a founder (`alloc` topic).
    PointsAllocated,
    /// Points were moved onto a product (`distrib` topic).
    PointsDistributed,
    /// Product points were converted into pending rewards (`convert` topic).
    PointsConverted,
    /// Pending rewards were claimed (`claim` topic).
    RewardsClaimed,
    /// The ledger was paused (`paused` topic).
    LedgerPaused,
    /// The ledger was resumed (`resumed` topic).
    LedgerResumed,
    /// The administrator capability moved (`adm_xfer` topic).
    AdminTransferred,
    /// The view read policy changed (`policy` topic).
    ReadPolicySet,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "fnd_reg" => Self::FounderRegistered,
            "prd_reg" => Self::ProductRegistered,
            "key_set" => Self::ApiKeyIssued,
            "key_rot" => Self::ApiKeyRotated,
            "fnd_stat" => Self::FounderStatusChanged,
            "prd_ver" => Self::ProductVerified,
            "alloc" => Self::PointsAllocated,
            "distrib" => Self::PointsDistributed,
            "convert" => Self::PointsConverted,
            "claim" => Self::RewardsClaimed,
            "paused" => Self::LedgerPaused,
            "resumed" => Self::LedgerResumed,
            "adm_xfer" => Self::AdminTransferred,
            "policy" => Self::ReadPolicySet,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FounderRegistered => "founder_registered",
            Self::ProductRegistered => "product_registered",
            Self::ApiKeyIssued => "api_key_issued",
            Self::ApiKeyRotated => "api_key_rotated",
            Self::FounderStatusChanged => "founder_status_changed",
            Self::ProductVerified => "product_verified",
            Self::PointsAllocated => "points_allocated",
            Self::PointsDistributed => "points_distributed",
            Self::PointsConverted => "points_converted",
            Self::RewardsClaimed => "rewards_claimed",
            Self::LedgerPaused => "ledger_paused",
            Self::LedgerResumed => "ledger_resumed",
            Self::AdminTransferred => "admin_transferred",
            Self::ReadPolicySet => "read_policy_set",
            Self::Unknown => "unknown",
        }
    }

    /// Inverse of [`EventKind::as_str`], used to validate API filters.
    pub fn from_stored(s: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.as_str() == s)
    }
}

const ALL_KINDS: [EventKind; 15] = [
    EventKind::FounderRegistered,
    EventKind::ProductRegistered,
    EventKind::ApiKeyIssued,
    EventKind::ApiKeyRotated,
    EventKind::FounderStatusChanged,
    EventKind::ProductVerified,
    EventKind::PointsAllocated,
    EventKind::PointsDistributed,
    EventKind::PointsConverted,
    EventKind::RewardsClaimed,
    EventKind::LedgerPaused,
    EventKind::LedgerResumed,
    EventKind::AdminTransferred,
    EventKind::ReadPolicySet,
    EventKind::Unknown,
];

/// A fully decoded ledger event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// RPC event id, unique per event.
    pub event_id: String,
    pub event_type: String,
    /// Second topic: the founder, product or administrator the event is about.
    pub subject: Option<String>,
    pub founder: Option<String>,
    pub product: Option<String>,
    /// Points or rewards moved by the event, as a decimal string (`u128`).
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub subject: Option<String>,
    pub founder: Option<String>,
    pub product: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

//! Response types for the domain service.

use crate::types::{DecomposedDuration, EpochMicros, Validity};
use serde::{Deserialize, Serialize};

/// DNS check result for a sending domain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckSendingDomainResponse {
    /// Envelope status
    #[serde(default)]
    pub status: String,
    /// Checked domain
    pub domain: String,
    /// SPF record check
    #[serde(default)]
    pub spf: Validity,
    /// DKIM record check
    #[serde(default)]
    pub dkim: Validity,
    /// Provider summary of the signing setup
    #[serde(default)]
    pub valid_signing: String,
}

/// DNS check result for a tracking domain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckTrackingDomainResponse {
    /// Envelope status
    #[serde(default)]
    pub status: String,
    /// Checked domain
    pub domain: String,
    /// Provider summary of the tracking setup
    #[serde(default)]
    pub valid_tracking: String,
    /// CNAME record check
    #[serde(default)]
    pub cname: Validity,
}

/// A sending domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendingDomain {
    /// Domain name
    pub domain: String,
    /// Creation time broken into units
    pub create_date: DecomposedDuration,
    /// Creation time as sent
    pub created: EpochMicros,
    /// Ownership verification
    pub verified: Validity,
    /// SPF record check
    pub spf: Validity,
    /// DKIM record check
    pub dkim: Validity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSendingDomain {
    domain: String,
    create_date: EpochMicros,
    #[serde(default)]
    verify_domain: Validity,
    #[serde(default)]
    spf: Validity,
    #[serde(default)]
    dkim: Validity,
}

impl From<RawSendingDomain> for SendingDomain {
    fn from(raw: RawSendingDomain) -> Self {
        Self {
            domain: raw.domain,
            create_date: raw.create_date.decompose(),
            created: raw.create_date,
            verified: raw.verify_domain,
            spf: raw.spf,
            dkim: raw.dkim,
        }
    }
}

/// A tracking domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingDomain {
    /// Domain name
    pub domain: String,
    /// Creation time broken into units
    pub create_date: DecomposedDuration,
    /// Creation time as sent
    pub created: EpochMicros,
    /// CNAME record check, when reported
    pub cname: Option<Validity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTrackingDomain {
    domain: String,
    create_date: EpochMicros,
    #[serde(default)]
    cname: Option<Validity>,
}

impl From<RawTrackingDomain> for TrackingDomain {
    fn from(raw: RawTrackingDomain) -> Self {
        Self {
            domain: raw.domain,
            create_date: raw.create_date.decompose(),
            created: raw.create_date,
            cname: raw.cname,
        }
    }
}

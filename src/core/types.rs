use serde::{Deserialize, Serialize};

/// Lifecycle states a certificate can be in and still be considered for selection.
/// Expired, revoked and failed certificates never reach the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    /// Requested but not yet validated by the issuer
    PendingValidation,
    /// Issued and usable
    Issued,
    /// Issued but not currently in use
    Inactive,
}

/// A certificate available in the account, as returned by a `CertificateProvider`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Opaque handle handed back to the caller (an ARN for ACM)
    pub identifier: String,
    /// Main covered name, possibly wildcarded (e.g. "*.example.com")
    pub primary_name: String,
    /// Subject alternative names, possibly wildcarded
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub status: CertificateStatus,
}

impl Certificate {
    pub fn new(
        identifier: impl Into<String>,
        primary_name: impl Into<String>,
        alternate_names: Vec<String>,
        status: CertificateStatus,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            primary_name: primary_name.into(),
            alternate_names,
            status,
        }
    }

    /// Primary name followed by the alternate names, in their given order.
    pub fn covered_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_name.as_str())
            .chain(self.alternate_names.iter().map(String::as_str))
    }
}

/// What the caller wants a certificate for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRequest {
    /// Domain name the certificate should cover
    pub requested_name: String,
    /// Registered certificate name that bypasses domain matching when set
    #[serde(default)]
    pub explicit_certificate_key: Option<String>,
}

impl DomainRequest {
    pub fn for_domain(requested_name: impl Into<String>) -> Self {
        Self {
            requested_name: requested_name.into(),
            explicit_certificate_key: None,
        }
    }

    pub fn with_certificate_key(mut self, key: impl Into<String>) -> Self {
        self.explicit_certificate_key = Some(key.into());
        self
    }

    pub fn mode(&self) -> SelectionMode<'_> {
        match self.explicit_certificate_key.as_deref() {
            Some(key) => SelectionMode::ExplicitKey(key),
            None => SelectionMode::DomainMatch(&self.requested_name),
        }
    }
}

/// The single selection mode active for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode<'a> {
    ExplicitKey(&'a str),
    DomainMatch(&'a str),
}

use anyhow::Result;
use log::{debug, info, warn};

use crate::core::types::{Certificate, CertificateStatus, DomainRequest, SelectionMode};

mod acm;
mod selector;

pub use acm::AcmCertificateProvider;
pub use selector::{select_certificate, SelectionError};

/// Statuses a certificate must have to be considered at all.
pub const CANDIDATE_STATUSES: [CertificateStatus; 3] = [
    CertificateStatus::PendingValidation,
    CertificateStatus::Issued,
    CertificateStatus::Inactive,
];

/// Source of candidate certificates.
///
/// Implementations return every certificate whose status is in `statuses`,
/// following pagination to the end. The order must be stable for one call
/// since it decides ties during selection.
pub trait CertificateProvider: Send + Sync {
    fn list_certificates(&self, statuses: &[CertificateStatus]) -> Result<Vec<Certificate>>;
}

/// Lists certificates from a provider and selects the best one for a request.
pub struct CertificateLookup<P> {
    provider: P,
}

impl<P: CertificateProvider> CertificateLookup<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[cfg(test)]
    fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the identifier of the certificate selected for `request`.
    ///
    /// Provider failures surface as `SelectionError::LookupFailed` and are not
    /// retried here; an empty or non-matching listing is `SelectionError::NotFound`.
    pub fn certificate_identifier(&self, request: &DomainRequest) -> Result<String, SelectionError> {
        match request.mode() {
            SelectionMode::ExplicitKey(key) => {
                debug!("[cert-select] Looking up certificate by name '{}'", key)
            }
            SelectionMode::DomainMatch(domain) => {
                debug!("[cert-select] Looking up certificate for domain '{}'", domain)
            }
        }

        let candidates = self
            .provider
            .list_certificates(&CANDIDATE_STATUSES)
            .map_err(|err| {
                warn!("[cert-select] Listing certificates failed: {:#}", err);
                SelectionError::LookupFailed(format!("{:#}", err))
            })?;
        debug!("[cert-select] {} candidate certificate(s)", candidates.len());

        let identifier = select_certificate(request, &candidates)?;
        info!(
            "[cert-select] Selected {} for '{}'",
            identifier,
            request
                .explicit_certificate_key
                .as_deref()
                .unwrap_or(&request.requested_name)
        );
        Ok(identifier)
    }
}

pub mod certificates;
pub mod config;
pub mod core;
pub mod domain;

pub use certificates::{
    select_certificate, AcmCertificateProvider, CertificateLookup, CertificateProvider,
    SelectionError, CANDIDATE_STATUSES,
};
pub use config::{EndpointType, SelectorConfig};
pub use crate::core::types::{Certificate, CertificateStatus, DomainRequest};

/// Resolves the certificate ARN for `request` from ACM using `config`.
pub fn certificate_arn(config: SelectorConfig, request: &DomainRequest) -> Result<String, SelectionError> {
    CertificateLookup::new(AcmCertificateProvider::new(config)).certificate_identifier(request)
}

use log::debug;
use thiserror::Error;

use crate::core::types::{Certificate, DomainRequest, SelectionMode};
use crate::domain::{bare_name, covers};

/// Ways a certificate selection can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Listing certificates from the provider failed.
    #[error("Could not search certificates in Certificate Manager.\n{0}")]
    LookupFailed(String),
    /// Listing succeeded but nothing matched the searched name or key.
    #[error("Could not find an in-date certificate for '{0}'.")]
    NotFound(String),
}

/// Picks the identifier of the certificate that best serves `request`.
///
/// With an explicit key, the first certificate whose primary name equals the
/// key wins. Otherwise the covered name with the longest bare name contained in
/// the requested domain wins, the earliest one on equal length.
pub fn select_certificate(
    request: &DomainRequest,
    candidates: &[Certificate],
) -> Result<String, SelectionError> {
    match request.mode() {
        SelectionMode::ExplicitKey(key) => select_by_name(candidates, key)
            .ok_or_else(|| SelectionError::NotFound(key.to_string())),
        SelectionMode::DomainMatch(domain) => select_by_domain(candidates, domain)
            .ok_or_else(|| SelectionError::NotFound(domain.to_string())),
    }
}

fn select_by_name(candidates: &[Certificate], name: &str) -> Option<String> {
    candidates
        .iter()
        .find(|cert| cert.primary_name == name)
        .map(|cert| cert.identifier.clone())
}

fn select_by_domain(candidates: &[Certificate], domain: &str) -> Option<String> {
    // (bare name length, certificate) of the most specific match so far
    let mut best: Option<(usize, &Certificate)> = None;

    for cert in candidates {
        for name in cert.covered_names() {
            if !covers(name, domain) {
                continue;
            }
            // length in UTF-16 code units
            let len = bare_name(name).encode_utf16().count();
            let better = match best {
                Some((best_len, _)) => len > best_len,
                None => true,
            };
            if better {
                debug!(
                    "[cert-select] {} covers {} via '{}' (length {})",
                    cert.identifier, domain, name, len
                );
                best = Some((len, cert));
            }
        }
    }

    best.map(|(_, cert)| cert.identifier.clone())
}

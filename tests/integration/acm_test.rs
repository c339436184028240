use anyhow::{anyhow, Result};

use acm_cert_selector_lib::{
    certificate_arn, AcmCertificateProvider, CertificateProvider, DomainRequest, SelectionError,
    CANDIDATE_STATUSES,
};

use super::test_utils::{load_acm_config, unmatched_domain};

#[test]
fn acm_lists_only_candidate_statuses() -> Result<()> {
    let config = load_acm_config()?;
    let provider = AcmCertificateProvider::new(config.selector.clone());

    let certificates = provider.list_certificates(&CANDIDATE_STATUSES)?;
    if certificates.is_empty() {
        return Err(anyhow!("Expected at least one certificate in the test account"));
    }
    if let Some(cert) = certificates
        .iter()
        .find(|cert| !CANDIDATE_STATUSES.contains(&cert.status))
    {
        return Err(anyhow!("Unexpected status {:?} for {}", cert.status, cert.identifier));
    }

    Ok(())
}

#[test]
fn acm_selects_expected_certificate_for_domain() -> Result<()> {
    let config = load_acm_config()?;

    let arn = certificate_arn(config.selector.clone(), &DomainRequest::for_domain(&config.domain))?;
    if arn != config.expected_arn {
        return Err(anyhow!("Expected {}, got {}", config.expected_arn, arn));
    }

    Ok(())
}

#[test]
fn acm_selects_certificate_by_name() -> Result<()> {
    let config = load_acm_config()?;

    let request = DomainRequest::for_domain(unmatched_domain())
        .with_certificate_key(config.certificate_name.clone());
    let arn = certificate_arn(config.selector.clone(), &request)?;
    if arn != config.expected_arn {
        return Err(anyhow!("Expected {}, got {}", config.expected_arn, arn));
    }

    Ok(())
}

#[test]
fn acm_reports_not_found_for_unknown_domain() -> Result<()> {
    let config = load_acm_config()?;
    let domain = unmatched_domain();

    match certificate_arn(config.selector.clone(), &DomainRequest::for_domain(&domain)) {
        Err(SelectionError::NotFound(name)) if name == domain => Ok(()),
        other => Err(anyhow!("Expected NotFound for {}, got {:?}", domain, other)),
    }
}

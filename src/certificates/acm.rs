use anyhow::{Context, Result};
use aws_sdk_acm::types::{
    CertificateStatus as AcmStatus, CertificateSummary, Filters, KeyAlgorithm,
};
use log::{debug, warn};

use super::CertificateProvider;
use crate::config::SelectorConfig;
use crate::core::types::{Certificate, CertificateStatus};

const PAGE_SIZE: i32 = 100;

/// Lists certificates from AWS Certificate Manager.
pub struct AcmCertificateProvider {
    config: SelectorConfig,
}

impl AcmCertificateProvider {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    async fn client(&self) -> aws_sdk_acm::Client {
        use aws_config::BehaviorVersion;
        use aws_sdk_acm::config::{Credentials, Region};

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = self.config.acm_region() {
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = &self.config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some((access_key, secret_key)) = self.config.static_credentials() {
            let credentials =
                Credentials::new(access_key, secret_key, None, None, "acm-cert-selector");
            loader = loader.credentials_provider(credentials);
        }

        let sdk_config = loader.load().await;
        aws_sdk_acm::Client::new(&sdk_config)
    }

    async fn fetch_certificates(&self, statuses: &[CertificateStatus]) -> Result<Vec<Certificate>> {
        let client = self.client().await;
        debug!(
            "[acm] Listing certificates ({} endpoint, region {:?})",
            self.config.endpoint_type,
            self.config.acm_region()
        );

        let mut paginator = client
            .list_certificates()
            .set_certificate_statuses(Some(statuses.iter().map(|s| to_acm_status(*s)).collect()))
            .includes(all_key_types())
            .into_paginator()
            .page_size(PAGE_SIZE)
            .send();

        let mut certificates = Vec::new();
        let mut pages = 0;
        while let Some(page) = paginator.next().await {
            let page = page.context("Failed to list ACM certificates")?;
            pages += 1;
            for summary in page.certificate_summary_list() {
                if let Some(certificate) = from_summary(summary, statuses) {
                    certificates.push(certificate);
                }
            }
        }

        debug!(
            "[acm] Listed {} certificate(s) across {} page(s)",
            certificates.len(),
            pages
        );
        Ok(certificates)
    }
}

impl CertificateProvider for AcmCertificateProvider {
    fn list_certificates(&self, statuses: &[CertificateStatus]) -> Result<Vec<Certificate>> {
        // ACM SDK is async, drive it on a private runtime
        let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        rt.block_on(self.fetch_certificates(statuses))
    }
}

/// ACM only lists RSA_2048 certificates unless key types are asked for explicitly.
fn all_key_types() -> Filters {
    Filters::builder()
        .set_key_types(Some(
            KeyAlgorithm::values()
                .iter()
                .map(|name| KeyAlgorithm::from(*name))
                .collect(),
        ))
        .build()
}

fn to_acm_status(status: CertificateStatus) -> AcmStatus {
    match status {
        CertificateStatus::PendingValidation => AcmStatus::PendingValidation,
        CertificateStatus::Issued => AcmStatus::Issued,
        CertificateStatus::Inactive => AcmStatus::Inactive,
    }
}

fn from_acm_status(status: &AcmStatus) -> Option<CertificateStatus> {
    match status {
        AcmStatus::PendingValidation => Some(CertificateStatus::PendingValidation),
        AcmStatus::Issued => Some(CertificateStatus::Issued),
        AcmStatus::Inactive => Some(CertificateStatus::Inactive),
        _ => None,
    }
}

/// Maps a summary to a candidate, dropping ones that are incomplete or
/// outside the requested statuses.
fn from_summary(summary: &CertificateSummary, statuses: &[CertificateStatus]) -> Option<Certificate> {
    let Some(arn) = summary.certificate_arn() else {
        warn!("[acm] Skipping certificate summary without an ARN");
        return None;
    };
    let Some(domain_name) = summary.domain_name() else {
        warn!("[acm] Skipping {} without a domain name", arn);
        return None;
    };
    let status = match summary.status().and_then(from_acm_status) {
        Some(status) if statuses.contains(&status) => status,
        other => {
            warn!("[acm] Skipping {} with status {:?}", arn, other);
            return None;
        }
    };

    Some(Certificate::new(
        arn,
        domain_name,
        summary.subject_alternative_name_summaries().to_vec(),
        status,
    ))
}

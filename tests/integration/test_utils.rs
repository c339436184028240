use anyhow::{Context, Result};
use std::env;

use acm_cert_selector_lib::SelectorConfig;

/// A certificate known to exist in the test account.
#[derive(Clone)]
pub struct AcmTestConfig {
    pub selector: SelectorConfig,
    /// Domain to request, e.g. "integration.example.com"
    pub domain: String,
    /// ARN the domain is expected to resolve to
    pub expected_arn: String,
    /// Primary name of the expected certificate, for explicit-name lookups
    pub certificate_name: String,
}

pub fn load_acm_config() -> Result<AcmTestConfig> {
    let selector = SelectorConfig::from_env().context("invalid AWS settings in environment")?;
    let domain = env::var("ACM_TEST_DOMAIN").context("ACM_TEST_DOMAIN not set")?;
    let expected_arn = env::var("ACM_TEST_EXPECTED_ARN").context("ACM_TEST_EXPECTED_ARN not set")?;
    let certificate_name =
        env::var("ACM_TEST_CERTIFICATE_NAME").context("ACM_TEST_CERTIFICATE_NAME not set")?;
    Ok(AcmTestConfig {
        selector,
        domain,
        expected_arn,
        certificate_name,
    })
}

/// A domain no certificate in the account should cover.
pub fn unmatched_domain() -> String {
    format!("no-certificate-{}.invalid", std::process::id())
}

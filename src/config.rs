//! Settings for reaching AWS Certificate Manager.
//!
//! Settings come either from the process environment or from a JSON document.
//! They only decide where certificates are listed from; selection itself has
//! no configuration.

use std::{env, fmt, str::FromStr};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Region ACM certificates must live in for edge-optimized endpoints.
pub const EDGE_CERTIFICATE_REGION: &str = "us-east-1";

pub const ENDPOINT_TYPE_VAR: &str = "ACM_SELECTOR_ENDPOINT_TYPE";
pub const REGION_VAR: &str = "AWS_REGION";
pub const PROFILE_VAR: &str = "AWS_PROFILE";
pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Kind of endpoint the certificate will be attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointType {
    #[default]
    Edge,
    Regional,
}

impl FromStr for EndpointType {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "edge" => Ok(EndpointType::Edge),
            "regional" => Ok(EndpointType::Regional),
            other => Err(anyhow!(
                "unsupported endpoint type '{}', expected 'edge' or 'regional'",
                other
            )),
        }
    }
}

impl fmt::Display for EndpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointType::Edge => write!(f, "edge"),
            EndpointType::Regional => write!(f, "regional"),
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorConfig {
    pub endpoint_type: EndpointType,
    /// Region for regional endpoints; the SDK default chain applies when unset
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl fmt::Debug for SelectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorConfig")
            .field("endpoint_type", &self.endpoint_type)
            .field("region", &self.region)
            .field("profile", &self.profile)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl SelectorConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parses settings from a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: SelectorConfig =
            serde_json::from_str(raw).context("failed to parse selector config JSON")?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let endpoint_type = match non_empty(ENDPOINT_TYPE_VAR) {
            Some(raw) => raw
                .parse::<EndpointType>()
                .with_context(|| format!("invalid {}", ENDPOINT_TYPE_VAR))?,
            None => EndpointType::default(),
        };

        let config = Self {
            endpoint_type,
            region: non_empty(REGION_VAR),
            profile: non_empty(PROFILE_VAR),
            access_key_id: non_empty(ACCESS_KEY_VAR),
            secret_access_key: non_empty(SECRET_KEY_VAR),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(_), None) => Err(anyhow!("access key id set without a secret access key")),
            (None, Some(_)) => Err(anyhow!("secret access key set without an access key id")),
            _ => Ok(()),
        }
    }

    /// Region to query ACM in. Edge endpoints always use `us-east-1`;
    /// `None` defers to the SDK's default region chain.
    pub fn acm_region(&self) -> Option<String> {
        match self.endpoint_type {
            EndpointType::Edge => Some(EDGE_CERTIFICATE_REGION.to_string()),
            EndpointType::Regional => self.region.clone(),
        }
    }

    /// Static credentials, when both halves of a key pair are configured.
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(access), Some(secret)) => Some((access.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

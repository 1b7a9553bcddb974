//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs and value ranges (timeouts > 0, poll bounds ordered)
//! - Check the selected network has a package id
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::AppConfig;
use crate::network::Network;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (name, vars) in &config.networks {
        if name.parse::<Network>().is_err() {
            errors.push(ValidationError::new(
                format!("networks.{}", name),
                "unknown network name",
            ));
        }
        if vars.package.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("networks.{}.package", name),
                "must not be empty",
            ));
        }
    }

    if let Some(url) = &config.fullnode.rpc_url {
        check_url(&mut errors, "fullnode.rpc_url", url);
    }
    for (i, url) in config.fullnode.failover_urls.iter().enumerate() {
        check_url(&mut errors, &format!("fullnode.failover_urls[{}]", i), url);
    }
    if config.fullnode.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("fullnode.rpc_timeout_secs", "must be > 0"));
    }
    if config.fullnode.finality_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "fullnode.finality_timeout_secs",
            "must be > 0",
        ));
    }
    if config.fullnode.poll_base_ms == 0 || config.fullnode.poll_base_ms > config.fullnode.poll_max_ms {
        errors.push(ValidationError::new(
            "fullnode.poll_base_ms",
            "must be > 0 and <= poll_max_ms",
        ));
    }

    if config.sponsor.enabled {
        check_url(&mut errors, "sponsor.url", &config.sponsor.url);
        if config.sponsor.timeout_secs == 0 {
            errors.push(ValidationError::new("sponsor.timeout_secs", "must be > 0"));
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            "must be a socket address",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if let Err(e) = url::Url::parse(value) {
        errors.push(ValidationError::new(field, format!("invalid URL '{}': {}", value, e)));
    }
}

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::identifier::{IdentifierKind, IdentifierValue, ValidationRequest};
use crate::normalization::normalize;
use crate::observability::labels::Labels;
use crate::secondary_validation::Validator;
use crate::verdict::{InvalidReason, Verdict};

use self::config::ValidatorConfig;
use self::error::ValidationError;
use self::metrics::ValidatorMetrics;

pub mod config;
pub mod error;
pub mod metrics;


static DEFAULT_VALIDATOR: Lazy<IdentifierValidator> = Lazy::new(IdentifierValidator::default);

/// Validates a typed identifier with the default configuration.
pub fn validate(kind: IdentifierKind, value: impl Into<IdentifierValue>) -> bool {
    DEFAULT_VALIDATOR.validate(kind, value)
}

/// Validates an external `{ type, value }` request with the default configuration.
pub fn validate_request(request: &ValidationRequest) -> Result<bool, ValidationError> {
    DEFAULT_VALIDATOR.validate_request(request)
}

/// Runs the normalize, filter, checksum pipeline for every identifier kind.
///
/// Holds no mutable state, a single instance can be shared between threads.
pub struct IdentifierValidator {
    config: ValidatorConfig,
    metrics: ValidatorMetrics,
}

impl IdentifierValidator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn validate(&self, kind: IdentifierKind, value: impl Into<IdentifierValue>) -> bool {
        self.check(kind, Some(&value.into())).is_valid()
    }

    /// Validates and explains the result. A missing value is invalid, never an error.
    pub fn check(&self, kind: IdentifierKind, value: Option<&IdentifierValue>) -> Verdict {
        let verdict = match normalize(kind, value, &self.config) {
            Some(normalized) => Verdict::from_check(kind, kind.check(&normalized)),
            None => Verdict::invalid(kind, InvalidReason::Missing),
        };

        if let Some(reason) = verdict.reason {
            debug!(kind = kind.as_str(), reason = reason.as_str(), "identifier rejected");
        }
        self.metrics.record_verdict(&verdict);
        verdict
    }

    /// Validates a value whose kind is only known by name. An unknown name is
    /// an error regardless of the value.
    pub fn validate_named(
        &self,
        kind_name: &str,
        value: Option<&IdentifierValue>,
    ) -> Result<bool, ValidationError> {
        let kind = IdentifierKind::from_name(kind_name).map_err(|err| {
            warn!(kind = kind_name, "unknown identifier kind");
            self.metrics.record_unknown_kind();
            err
        })?;
        Ok(self.check(kind, value).is_valid())
    }

    pub fn validate_request(&self, request: &ValidationRequest) -> Result<bool, ValidationError> {
        self.validate_named(&request.kind, request.value.as_ref())
    }
}

impl Default for IdentifierValidator {
    fn default() -> Self {
        ValidatorBuilder::new().build()
    }
}

pub struct ValidatorBuilder {
    config: ValidatorConfig,
    labels: Labels,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        ValidatorBuilder {
            config: ValidatorConfig::default(),
            labels: Labels::empty(),
        }
    }

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> IdentifierValidator {
        IdentifierValidator {
            config: self.config,
            metrics: ValidatorMetrics::new(&self.labels),
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

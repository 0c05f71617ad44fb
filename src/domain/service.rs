// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Name Value Object
//!
//! Every lifecycle event belongs to a logical service. Two of them are
//! well-known (entitlement and billing) and a third, the combined
//! entitlement+billing service, stands for a simultaneous change of both.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Service name validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceNameError {
    #[error("Service name is empty")]
    Empty,

    #[error("Service name has surrounding whitespace: {0:?}")]
    Whitespace(String),
}

/// Name of the logical service a lifecycle event belongs to
///
/// # Invariants
/// - Non-empty
/// - No leading or trailing whitespace
///
/// # Examples
///
/// ```rust
/// use subscription_transitions::domain::{ServiceFanOut, ServiceName};
///
/// let service = ServiceName::new("entitlement+billing-service").unwrap();
/// assert!(service.is_combined());
/// assert!(matches!(service.fan_out(), ServiceFanOut::Combined { .. }));
///
/// assert!(ServiceName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

/// How a service tag maps onto the services that receive transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFanOut {
    /// Plain service: one transition tagged with the service itself
    Single(ServiceName),

    /// Combined service: one transition per constituent, primary first
    Combined {
        primary: ServiceName,
        secondary: ServiceName,
    },
}

impl ServiceName {
    /// Entitlement service
    pub const ENTITLEMENT: &'static str = "entitlement-service";

    /// Billing service
    pub const BILLING: &'static str = "billing-service";

    /// Combined entitlement and billing service
    pub const ENTITLEMENT_BILLING: &'static str = "entitlement+billing-service";

    /// Create a new service name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ServiceNameError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ServiceNameError::Empty);
        }

        if name.trim() != name {
            return Err(ServiceNameError::Whitespace(name));
        }

        Ok(Self(name))
    }

    pub fn entitlement() -> Self {
        Self(Self::ENTITLEMENT.to_string())
    }

    pub fn billing() -> Self {
        Self(Self::BILLING.to_string())
    }

    pub fn entitlement_billing() -> Self {
        Self(Self::ENTITLEMENT_BILLING.to_string())
    }

    /// Whether this is the combined entitlement+billing service
    pub fn is_combined(&self) -> bool {
        self.0 == Self::ENTITLEMENT_BILLING
    }

    /// Services that receive a transition for an event tagged with this name
    pub fn fan_out(&self) -> ServiceFanOut {
        if self.is_combined() {
            ServiceFanOut::Combined {
                primary: Self::entitlement(),
                secondary: Self::billing(),
            }
        } else {
            ServiceFanOut::Single(self.clone())
        }
    }

    /// Get the service name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ServiceFanOut {
    /// Target services in emission order
    pub fn targets(&self) -> Vec<&ServiceName> {
        match self {
            ServiceFanOut::Single(service) => vec![service],
            ServiceFanOut::Combined { primary, secondary } => vec![primary, secondary],
        }
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServiceName {
    type Error = ServiceNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ServiceName {
    type Error = ServiceNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ServiceName> for String {
    fn from(value: ServiceName) -> Self {
        value.0
    }
}

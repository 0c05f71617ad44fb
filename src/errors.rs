// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for transition building and account refreshes

use thiserror::Error;
use uuid::Uuid;

use crate::events::ObjectType;

/// Kind of entity a collaborator failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Bundle,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Account => write!(f, "Account"),
            EntityKind::Bundle => write!(f, "Bundle"),
        }
    }
}

/// Errors that can occur while building subscription transitions
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Unknown account or bundle
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: Uuid },

    /// Missing record id or audit data for a lifecycle event
    #[error("Audit lookup failed for {object_type} {event_id}: {reason}")]
    AuditLookup {
        event_id: Uuid,
        object_type: ObjectType,
        reason: String,
    },

    /// Currency or report group resolution failure
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading collaborator documents
    #[error("I/O error: {0}")]
    Io(String),
}

impl AnalyticsError {
    /// Shorthand for an unknown account
    pub fn account_not_found(id: Uuid) -> Self {
        AnalyticsError::NotFound {
            kind: EntityKind::Account,
            id,
        }
    }

    /// Shorthand for a missing audit record
    pub fn audit_lookup(event_id: Uuid, object_type: ObjectType, reason: impl Into<String>) -> Self {
        AnalyticsError::AuditLookup {
            event_id,
            object_type,
            reason: reason.into(),
        }
    }
}

/// Result type for transition building operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AnalyticsError {
    fn from(err: std::io::Error) -> Self {
        AnalyticsError::Io(err.to_string())
    }
}

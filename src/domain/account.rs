// Copyright (c) 2025 - Cowboy AI, Inc.
//! Accounts, bundles, report groups, audit logs and call contexts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::currency::Currency;
use crate::events::SubscriptionEvent;

/// Account owning one or more subscription bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub external_key: String,
    /// Billing currency; unset until the first subscription is created
    pub currency: Option<Currency>,
}

/// Reporting group an account belongs to (`None` is the default group)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportGroup {
    Test,
    Partner,
}

impl fmt::Display for ReportGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportGroup::Test => write!(f, "test"),
            ReportGroup::Partner => write!(f, "partner"),
        }
    }
}

/// Group of related subscriptions sharing one lifecycle timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: Uuid,
    pub external_key: String,
    pub account_id: Uuid,
    /// Lifecycle events in chronological order
    #[serde(default)]
    pub events: Vec<SubscriptionEvent>,
}

impl Bundle {
    /// Chronologically ordered lifecycle events of this bundle
    pub fn timeline(&self) -> &[SubscriptionEvent] {
        &self.events
    }
}

/// Creation audit record of a lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    pub change_type: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub reason_code: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub user_token: Option<Uuid>,
}

/// Caller identity passed through to every collaborator lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub tenant_id: Option<Uuid>,
    pub user_name: String,
    pub user_token: Uuid,
}

impl CallContext {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            tenant_id: None,
            user_name: user_name.into(),
            user_token: Uuid::now_v7(),
        }
    }

    pub fn with_tenant(mut self, tenant_id: Uuid) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }
}

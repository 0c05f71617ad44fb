// Copyright (c) 2025 - Cowboy AI, Inc.
//! Collaborator Interfaces
//!
//! Account identity, currency settings, bundle retrieval and audit data are
//! owned by other services. The builder reaches them only through these
//! traits.
//!
//! ```text
//! BundleAggregator ──> AnalyticsApi ──> accounts, report groups,
//!        │                              currency, bundles
//!        ▼
//! TransitionStreamBuilder ──> AuditLookup ──> record ids, audit logs
//! ```
//!
//! Calls are synchronous and may block. Retry and timeout policies belong to
//! the implementations.

use uuid::Uuid;

use crate::domain::{Account, AuditLog, Bundle, CallContext, CurrencyContext, ReportGroup};
use crate::errors::AnalyticsResult;
use crate::events::ObjectType;

/// Audit data of lifecycle events
pub trait AuditLookup: Send + Sync {
    /// Record id of the stored row behind `event_id`
    ///
    /// # Errors
    ///
    /// `AnalyticsError::AuditLookup` when no row exists.
    fn resolve_event_record_id(
        &self,
        event_id: Uuid,
        object_type: ObjectType,
        context: &CallContext,
    ) -> AnalyticsResult<i64>;

    /// Audit log written when `event_id` was created
    ///
    /// # Errors
    ///
    /// `AnalyticsError::AuditLookup` when no creation log exists.
    fn resolve_creation_audit_log(
        &self,
        event_id: Uuid,
        object_type: ObjectType,
        context: &CallContext,
    ) -> AnalyticsResult<AuditLog>;
}

/// Account-level lookups needed to refresh an account's transitions
pub trait AnalyticsApi: AuditLookup {
    /// # Errors
    ///
    /// `AnalyticsError::NotFound` for unknown accounts.
    fn resolve_account(&self, account_id: Uuid, context: &CallContext) -> AnalyticsResult<Account>;

    fn resolve_report_group(
        &self,
        account_id: Uuid,
        context: &CallContext,
    ) -> AnalyticsResult<Option<ReportGroup>>;

    fn resolve_currency_context(&self) -> AnalyticsResult<CurrencyContext>;

    /// Bundles of the account, each carrying its ordered timeline
    fn list_bundles(&self, account_id: Uuid, context: &CallContext) -> AnalyticsResult<Vec<Bundle>>;
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Business Subscription Transitions
//!
//! A transition pairs the previous and next snapshot of one service for one
//! lifecycle event. Its end date is unknown when it is emitted and is filled
//! in once by the backfiller from the next transition of the same service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{AuditLog, ReportGroup, ServiceName};
use crate::events::{BusinessSubscriptionEvent, SubscriptionEvent};
use crate::snapshot::SubscriptionSnapshot;

/// Account and bundle identifiers stamped on every transition of a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOwner {
    pub account_id: Uuid,
    pub account_external_key: String,
    pub account_record_id: i64,
    pub tenant_record_id: i64,
    pub bundle_id: Uuid,
    pub bundle_external_key: String,
    pub report_group: Option<ReportGroup>,
}

/// One per-service transition of a subscription
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionTransition {
    pub account_id: Uuid,
    pub account_external_key: String,
    pub account_record_id: i64,
    pub tenant_record_id: i64,
    pub bundle_id: Uuid,
    pub bundle_external_key: String,
    pub entitlement_id: Uuid,

    /// Raw event this transition was derived from
    pub event_id: Uuid,
    pub subscription_event_record_id: i64,
    pub event: BusinessSubscriptionEvent,

    /// `None` for the first transition of a service (subscription created)
    pub prev: Option<SubscriptionSnapshot>,
    pub next: SubscriptionSnapshot,

    pub report_group: Option<ReportGroup>,
    pub creation_audit: AuditLog,

    next_end_date: Option<DateTime<Utc>>,
}

impl SubscriptionTransition {
    pub fn new(
        owner: &TransitionOwner,
        event: &SubscriptionEvent,
        subscription_event_record_id: i64,
        creation_audit: AuditLog,
        prev: Option<SubscriptionSnapshot>,
        next: SubscriptionSnapshot,
    ) -> Self {
        Self {
            account_id: owner.account_id,
            account_external_key: owner.account_external_key.clone(),
            account_record_id: owner.account_record_id,
            tenant_record_id: owner.tenant_record_id,
            bundle_id: owner.bundle_id,
            bundle_external_key: owner.bundle_external_key.clone(),
            entitlement_id: event.entitlement_id,
            event_id: event.id,
            subscription_event_record_id,
            event: BusinessSubscriptionEvent::from_event(event),
            prev,
            next,
            report_group: owner.report_group,
            creation_audit,
            next_end_date: None,
        }
    }

    /// Service this transition is recorded under
    pub fn next_service(&self) -> &ServiceName {
        &self.next.service
    }

    pub fn next_start_date(&self) -> DateTime<Utc> {
        self.next.start_date
    }

    /// Start of the next transition of the same service, if any
    pub fn next_end_date(&self) -> Option<DateTime<Utc>> {
        self.next_end_date
    }

    /// Whether this is the first transition recorded for its service
    pub fn is_creation(&self) -> bool {
        self.prev.is_none()
    }

    // Assigned at most once, by the backfiller.
    pub(crate) fn set_next_end_date(&mut self, end: DateTime<Utc>) {
        debug_assert!(
            self.next_end_date.is_none(),
            "end date of transition {} assigned twice",
            self.event_id
        );
        self.next_end_date = Some(end);
    }
}

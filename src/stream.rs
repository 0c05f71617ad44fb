// Copyright (c) 2025 - Cowboy AI, Inc.
//! Transition Stream Builder
//!
//! Turns one bundle's ordered lifecycle events into per-service transitions.
//!
//! # Demultiplexing
//!
//! ```text
//! events:       e1(entitlement+billing)     e2(entitlement)
//!                   │          │                  │
//!                   ▼          ▼                  ▼
//! transitions:  t0(ent)     t1(bill)           t2(ent)
//!
//! per service:  entitlement → [t0, t2]
//!               billing     → [t1]
//! ```
//!
//! Each transition's `prev` is the `next` snapshot of the transition emitted
//! before it for the same service. The global order is emission order:
//! the billing half of a combined event directly follows its entitlement
//! half. End dates are left unset here; see [`crate::backfill`].

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::api::AuditLookup;
use crate::domain::{Account, Bundle, CallContext, CurrencyContext, ReportGroup, ServiceName};
use crate::errors::AnalyticsResult;
use crate::events::SubscriptionEvent;
use crate::snapshot::SubscriptionSnapshot;
use crate::transition::{SubscriptionTransition, TransitionOwner};

/// Transitions of one bundle in emission order, indexed per service
///
/// `per_service` holds, for each service, the positions of its transitions
/// in `transitions`, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionStream {
    pub(crate) transitions: Vec<SubscriptionTransition>,
    pub(crate) per_service: HashMap<ServiceName, Vec<usize>>,
}

impl TransitionStream {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, transition: SubscriptionTransition) {
        let index = self.transitions.len();
        self.per_service
            .entry(transition.next_service().clone())
            .or_default()
            .push(index);
        self.transitions.push(transition);
    }

    /// All transitions in emission order
    pub fn transitions(&self) -> &[SubscriptionTransition] {
        &self.transitions
    }

    /// Transitions of one service in emission order
    pub fn for_service<'a>(
        &'a self,
        service: &ServiceName,
    ) -> impl Iterator<Item = &'a SubscriptionTransition> + 'a {
        self.per_service
            .get(service)
            .into_iter()
            .flatten()
            .map(move |&index| &self.transitions[index])
    }

    /// Services that received at least one transition
    pub fn services(&self) -> impl Iterator<Item = &ServiceName> {
        self.per_service.keys()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn into_transitions(self) -> Vec<SubscriptionTransition> {
        self.transitions
    }
}

/// Builds the transition stream of one bundle
///
/// Holds no per-bundle state: every [`build`](Self::build) call allocates
/// its own maps, so one builder can serve any number of bundles.
pub struct TransitionStreamBuilder<'a, L: AuditLookup + ?Sized> {
    audit: &'a L,
    context: &'a CallContext,
    account_record_id: i64,
    tenant_record_id: i64,
    report_group: Option<ReportGroup>,
}

impl<'a, L: AuditLookup + ?Sized> TransitionStreamBuilder<'a, L> {
    pub fn new(audit: &'a L, context: &'a CallContext) -> Self {
        Self {
            audit,
            context,
            account_record_id: 0,
            tenant_record_id: 0,
            report_group: None,
        }
    }

    pub fn with_record_ids(mut self, account_record_id: i64, tenant_record_id: i64) -> Self {
        self.account_record_id = account_record_id;
        self.tenant_record_id = tenant_record_id;
        self
    }

    pub fn with_report_group(mut self, report_group: Option<ReportGroup>) -> Self {
        self.report_group = report_group;
        self
    }

    /// Build the transitions of `bundle` from its ordered `events`
    ///
    /// `events` must be in chronological order; they are never reordered.
    ///
    /// # Errors
    ///
    /// Propagates the first failed record id or audit log lookup; no
    /// partial stream is returned.
    pub fn build(
        &self,
        account: &Account,
        bundle: &Bundle,
        events: &[SubscriptionEvent],
        currency: &CurrencyContext,
    ) -> AnalyticsResult<TransitionStream> {
        let owner = TransitionOwner {
            account_id: account.id,
            account_external_key: account.external_key.clone(),
            account_record_id: self.account_record_id,
            tenant_record_id: self.tenant_record_id,
            bundle_id: bundle.id,
            bundle_external_key: bundle.external_key.clone(),
            report_group: self.report_group,
        };

        let mut previous: HashMap<ServiceName, SubscriptionSnapshot> = HashMap::new();
        let mut stream = TransitionStream::new();

        for event in events {
            debug!(
                "Processing {} event {} for service {}",
                event.event_type, event.id, event.service_name
            );

            for service in event.service_name.fan_out().targets() {
                let snapshot = SubscriptionSnapshot::from_event(account, event, service, currency);
                self.emit(&owner, event, snapshot, &mut previous, &mut stream)?;
            }
        }

        debug!(
            "Built {} transitions across {} services for bundle {}",
            stream.len(),
            stream.per_service.len(),
            bundle.id
        );

        Ok(stream)
    }

    fn emit(
        &self,
        owner: &TransitionOwner,
        event: &SubscriptionEvent,
        next: SubscriptionSnapshot,
        previous: &mut HashMap<ServiceName, SubscriptionSnapshot>,
        stream: &mut TransitionStream,
    ) -> AnalyticsResult<()> {
        let object_type = event.object_type();
        let record_id = self
            .audit
            .resolve_event_record_id(event.id, object_type, self.context)?;
        let creation_audit = self
            .audit
            .resolve_creation_audit_log(event.id, object_type, self.context)?;

        let prev = previous.insert(next.service.clone(), next.clone());
        trace!(
            "Emitting transition for {} (created: {})",
            next.service,
            prev.is_none()
        );

        stream.push(SubscriptionTransition::new(
            owner,
            event,
            record_id,
            creation_audit,
            prev,
            next,
        ));
        Ok(())
    }
}

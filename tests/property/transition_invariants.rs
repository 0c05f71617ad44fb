// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Transition Streams
//!
//! Demultiplexing, prev/next chaining and end-date backfill must hold for
//! every chronologically ordered event sequence.

use proptest::prelude::*;
use uuid::Uuid;

use crate::fixtures::*;
use subscription_transitions::domain::{AuditLog, CallContext, CurrencyContext};
use subscription_transitions::events::{ObjectType, SubscriptionEvent, SubscriptionEventType};
use subscription_transitions::{
    backfill_end_dates, AnalyticsResult, AuditLookup, SubscriptionTransition, TransitionStream,
    TransitionStreamBuilder,
};

// ============================================================================
// Test Collaborator
// ============================================================================

/// Resolves every event, with the record id derived from the event id
struct AlwaysAudited;

impl AuditLookup for AlwaysAudited {
    fn resolve_event_record_id(
        &self,
        event_id: Uuid,
        _object_type: ObjectType,
        _context: &CallContext,
    ) -> AnalyticsResult<i64> {
        Ok((event_id.as_u128() & 0xffff) as i64)
    }

    fn resolve_creation_audit_log(
        &self,
        _event_id: Uuid,
        _object_type: ObjectType,
        _context: &CallContext,
    ) -> AnalyticsResult<AuditLog> {
        Ok(creation_audit_log(0))
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

const SERVICES: [&str; 4] = [ENTITLEMENT, BILLING, ENTITLEMENT_BILLING, "overdue-service"];

const EVENT_TYPES: [SubscriptionEventType; 5] = [
    SubscriptionEventType::StartEntitlement,
    SubscriptionEventType::Change,
    SubscriptionEventType::Phase,
    SubscriptionEventType::PauseBilling,
    SubscriptionEventType::ServiceStateChange,
];

/// Generate a chronologically ordered event sequence
///
/// Gaps of zero days are allowed so several events can share a timestamp.
fn event_sequence() -> impl Strategy<Value = Vec<SubscriptionEvent>> {
    prop::collection::vec((0usize..SERVICES.len(), 0usize..EVENT_TYPES.len(), 0i64..10), 0..40)
        .prop_map(|specs| {
            let mut days = 0;
            specs
                .into_iter()
                .enumerate()
                .map(|(n, (service, event_type, gap))| {
                    days += gap;
                    lifecycle_event(
                        n as u32,
                        SERVICES[service],
                        EVENT_TYPES[event_type],
                        days,
                        &format!("plan-{n}"),
                    )
                })
                .collect()
        })
}

fn build(events: &[SubscriptionEvent]) -> TransitionStream {
    let context = call_context();
    let account = account(ACCOUNT_ID_1);
    let bundle = bundle(BUNDLE_ID_1, ACCOUNT_ID_1, events.to_vec());

    let mut stream = TransitionStreamBuilder::new(&AlwaysAudited, &context)
        .build(&account, &bundle, bundle.timeline(), &CurrencyContext::default())
        .expect("audit lookups always succeed");
    backfill_end_dates(&mut stream);
    stream
}

fn expected_len(events: &[SubscriptionEvent]) -> usize {
    events
        .iter()
        .map(|e| if e.service_name.is_combined() { 2 } else { 1 })
        .sum()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: one transition per plain event, two per combined event,
    /// emitted in event order with the billing half right after its
    /// entitlement half.
    #[test]
    fn prop_demultiplexing(events in event_sequence()) {
        let stream = build(&events);
        let transitions = stream.transitions();

        prop_assert_eq!(transitions.len(), expected_len(&events));

        let mut position = 0;
        for event in &events {
            if event.service_name.is_combined() {
                let (primary, secondary) = (&transitions[position], &transitions[position + 1]);
                prop_assert_eq!(primary.next_service().as_str(), ENTITLEMENT);
                prop_assert_eq!(secondary.next_service().as_str(), BILLING);
                prop_assert_eq!(primary.event_id, event.id);
                prop_assert_eq!(secondary.event_id, event.id);
                prop_assert_eq!(primary.next_start_date(), event.effective_date);
                prop_assert_eq!(secondary.next_start_date(), event.effective_date);
                position += 2;
            } else {
                let transition = &transitions[position];
                prop_assert_eq!(transition.next_service(), &event.service_name);
                prop_assert_eq!(transition.event_id, event.id);
                position += 1;
            }
        }
    }

    /// Property: within each service, every end date is the next start date
    /// and only the last transition stays open.
    #[test]
    fn prop_end_date_is_next_start(events in event_sequence()) {
        let stream = build(&events);

        for service in stream.services() {
            let transitions: Vec<&SubscriptionTransition> = stream.for_service(service).collect();

            for pair in transitions.windows(2) {
                prop_assert_eq!(pair[0].next_end_date(), Some(pair[1].next_start_date()));
            }
            prop_assert!(transitions.last().unwrap().next_end_date().is_none());
        }
    }

    /// Property: the first transition of a service has no previous snapshot;
    /// every later one points at its predecessor's next snapshot.
    #[test]
    fn prop_prev_chains_per_service(events in event_sequence()) {
        let stream = build(&events);

        for service in stream.services() {
            let transitions: Vec<&SubscriptionTransition> = stream.for_service(service).collect();

            prop_assert!(transitions[0].prev.is_none());
            for pair in transitions.windows(2) {
                prop_assert_eq!(pair[1].prev.as_ref(), Some(&pair[0].next));
            }
        }
    }

    /// Property: rebuilding from the same events yields the same stream
    #[test]
    fn prop_build_is_deterministic(events in event_sequence()) {
        prop_assert_eq!(build(&events), build(&events));
    }

    /// Property: combined and plain services never share a buffer
    #[test]
    fn prop_combined_service_never_buffered(events in event_sequence()) {
        let stream = build(&events);
        prop_assert!(stream.services().all(|service| !service.is_combined()));
    }
}

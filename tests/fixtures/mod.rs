// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for subscription-transitions
//!
//! Provides deterministic accounts, bundles and lifecycle events.
//! All UUIDs and timestamps are fixed constants so tests are reproducible.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use subscription_transitions::domain::{
    Account, AuditLog, Bundle, CallContext, Currency, ServiceName,
};
use subscription_transitions::events::{ProductCategory, SubscriptionEvent, SubscriptionEventType};
use subscription_transitions::in_memory::{AccountRecord, AuditRecord};
use subscription_transitions::InMemoryAnalyticsApi;

pub const ACCOUNT_ID_1: &str = "01934f4a-1000-7000-8000-000000001000";
pub const ACCOUNT_ID_2: &str = "01934f4a-1001-7000-8000-000000001001";

pub const BUNDLE_ID_1: &str = "01934f4a-2000-7000-8000-000000002000";
pub const BUNDLE_ID_2: &str = "01934f4a-2001-7000-8000-000000002001";

pub const ENTITLEMENT_ID_1: &str = "01934f4a-3000-7000-8000-000000003000";

pub const USER_TOKEN: &str = "01934f4a-c001-7000-8000-00000000c001";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub const ENTITLEMENT: &str = ServiceName::ENTITLEMENT;
pub const BILLING: &str = ServiceName::BILLING;
pub const ENTITLEMENT_BILLING: &str = ServiceName::ENTITLEMENT_BILLING;

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Deterministic event id number `n`
pub fn event_id(n: u32) -> Uuid {
    Uuid::from_u128(0x01934f4a_0000_7000_8000_000000000000 | n as u128)
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// Fixed timestamp shifted by `days`
pub fn day(days: i64) -> DateTime<Utc> {
    fixed_timestamp() + Duration::days(days)
}

pub fn service(name: &str) -> ServiceName {
    ServiceName::new(name).expect("Invalid service name in test fixture")
}

pub fn call_context() -> CallContext {
    CallContext {
        tenant_id: None,
        user_name: "fixture".to_string(),
        user_token: parse_uuid(USER_TOKEN),
    }
}

pub fn account(id: &str) -> Account {
    Account {
        id: parse_uuid(id),
        external_key: format!("ext-{}", &id[..13]),
        currency: Some(Currency::new("EUR").expect("Invalid currency")),
    }
}

pub fn bundle(id: &str, account_id: &str, events: Vec<SubscriptionEvent>) -> Bundle {
    Bundle {
        id: parse_uuid(id),
        external_key: format!("bundle-{}", &id[..13]),
        account_id: parse_uuid(account_id),
        events,
    }
}

/// Lifecycle event `n` for `service_name`, effective `days` after the fixed timestamp
pub fn lifecycle_event(
    n: u32,
    service_name: &str,
    event_type: SubscriptionEventType,
    days: i64,
    plan: &str,
) -> SubscriptionEvent {
    SubscriptionEvent {
        id: event_id(n),
        event_type,
        entitlement_id: parse_uuid(ENTITLEMENT_ID_1),
        effective_date: day(days),
        service_name: service(service_name),
        service_state_name: event_type.as_str().to_string(),
        next_plan: Some(plan.to_string()),
        next_phase: Some(format!("{plan}-evergreen")),
        next_price_list: Some("DEFAULT".to_string()),
        next_product_category: Some(ProductCategory::Base),
    }
}

pub fn creation_audit_log(n: u32) -> AuditLog {
    AuditLog {
        change_type: "INSERT".to_string(),
        created_by: format!("user-{n}"),
        created_date: fixed_timestamp(),
        reason_code: None,
        comments: None,
        user_token: Some(parse_uuid(USER_TOKEN)),
    }
}

/// Audit record for `event`, record id derived from the event id
pub fn audit_record(event: &SubscriptionEvent) -> AuditRecord {
    let n = (event.id.as_u128() & 0xffff_ffff) as u32;
    AuditRecord {
        event_id: event.id,
        object_type: event.object_type(),
        record_id: 1000 + i64::from(n),
        log: creation_audit_log(n),
    }
}

/// Collaborators holding `accounts`, with audit data for every event
pub fn api_for(accounts: Vec<AccountRecord>) -> InMemoryAnalyticsApi {
    let mut api = InMemoryAnalyticsApi::new();
    for record in accounts {
        for bundle in &record.bundles {
            for event in bundle.timeline() {
                api.insert_audit(audit_record(event));
            }
        }
        api.insert_account(record).expect("Invalid account fixture");
    }
    api
}

pub fn account_record(id: &str, record_id: i64, bundles: Vec<Bundle>) -> AccountRecord {
    AccountRecord {
        record_id,
        account: account(id),
        report_group: None,
        bundles,
    }
}

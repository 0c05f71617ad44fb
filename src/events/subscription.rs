// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subscription Lifecycle Events
//!
//! Raw events as delivered by the bundle timeline. They are immutable facts
//! and arrive already ordered by effective date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::ServiceName;

/// Kind of lifecycle change a raw event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionEventType {
    StartEntitlement,
    StartBilling,
    PauseEntitlement,
    PauseBilling,
    ResumeEntitlement,
    ResumeBilling,
    Phase,
    Change,
    StopEntitlement,
    StopBilling,
    ServiceStateChange,
}

/// Storage table an event's audit trail lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    SubscriptionEvent,
    BlockingStates,
}

/// Product category of the plan an event moves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Base,
    AddOn,
    Standalone,
}

impl SubscriptionEventType {
    /// Object type used to resolve record ids and audit logs
    ///
    /// Entitlement-side changes are recorded as blocking states; billing-side
    /// changes as subscription events.
    pub fn object_type(&self) -> ObjectType {
        match self {
            SubscriptionEventType::StartBilling
            | SubscriptionEventType::Phase
            | SubscriptionEventType::Change
            | SubscriptionEventType::StopBilling => ObjectType::SubscriptionEvent,
            SubscriptionEventType::StartEntitlement
            | SubscriptionEventType::PauseEntitlement
            | SubscriptionEventType::PauseBilling
            | SubscriptionEventType::ResumeEntitlement
            | SubscriptionEventType::ResumeBilling
            | SubscriptionEventType::StopEntitlement
            | SubscriptionEventType::ServiceStateChange => ObjectType::BlockingStates,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionEventType::StartEntitlement => "START_ENTITLEMENT",
            SubscriptionEventType::StartBilling => "START_BILLING",
            SubscriptionEventType::PauseEntitlement => "PAUSE_ENTITLEMENT",
            SubscriptionEventType::PauseBilling => "PAUSE_BILLING",
            SubscriptionEventType::ResumeEntitlement => "RESUME_ENTITLEMENT",
            SubscriptionEventType::ResumeBilling => "RESUME_BILLING",
            SubscriptionEventType::Phase => "PHASE",
            SubscriptionEventType::Change => "CHANGE",
            SubscriptionEventType::StopEntitlement => "STOP_ENTITLEMENT",
            SubscriptionEventType::StopBilling => "STOP_BILLING",
            SubscriptionEventType::ServiceStateChange => "SERVICE_STATE_CHANGE",
        }
    }
}

impl fmt::Display for SubscriptionEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::SubscriptionEvent => write!(f, "SUBSCRIPTION_EVENT"),
            ObjectType::BlockingStates => write!(f, "BLOCKING_STATES"),
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Base => write!(f, "BASE"),
            ProductCategory::AddOn => write!(f, "ADD_ON"),
            ProductCategory::Standalone => write!(f, "STANDALONE"),
        }
    }
}

/// Raw lifecycle event of one bundle's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionEvent {
    /// Event identifier
    pub id: Uuid,

    pub event_type: SubscriptionEventType,

    /// Entitlement (subscription) the event applies to
    pub entitlement_id: Uuid,

    /// When the change takes effect
    pub effective_date: DateTime<Utc>,

    /// Service the event belongs to, possibly the combined service
    pub service_name: ServiceName,

    /// State name of the service after the event (e.g. `ENT_STARTED`)
    pub service_state_name: String,

    #[serde(default)]
    pub next_plan: Option<String>,

    #[serde(default)]
    pub next_phase: Option<String>,

    #[serde(default)]
    pub next_price_list: Option<String>,

    #[serde(default)]
    pub next_product_category: Option<ProductCategory>,
}

impl SubscriptionEvent {
    pub fn object_type(&self) -> ObjectType {
        self.event_type.object_type()
    }
}

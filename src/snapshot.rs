// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subscription Snapshots
//!
//! A snapshot is the state of one service of a subscription right after a
//! lifecycle event took effect. Snapshots are immutable values; combined
//! events produce one snapshot per constituent service from the same event
//! data, differing only in their service tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Currency, CurrencyContext, ServiceName};
use crate::events::SubscriptionEvent;

/// State of one service of a subscription at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSnapshot {
    pub plan: Option<String>,
    pub phase: Option<String>,
    pub price_list: Option<String>,
    /// Account currency
    pub currency: Option<Currency>,
    /// Reference currency converted amounts are expressed in
    pub converted_currency: Option<Currency>,
    pub start_date: DateTime<Utc>,
    pub service: ServiceName,
    pub state: String,
}

impl SubscriptionSnapshot {
    /// Build the snapshot `event` produces for `service`
    ///
    /// `service` is passed explicitly because a combined event is
    /// snapshotted once per constituent service.
    pub fn from_event(
        account: &Account,
        event: &SubscriptionEvent,
        service: &ServiceName,
        currency: &CurrencyContext,
    ) -> Self {
        Self {
            plan: event.next_plan.clone(),
            phase: event.next_phase.clone(),
            price_list: event.next_price_list.clone(),
            currency: account.currency.clone(),
            converted_currency: currency.reference_currency().cloned(),
            start_date: event.effective_date,
            service: service.clone(),
            state: event.service_state_name.clone(),
        }
    }
}

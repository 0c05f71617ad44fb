// Copyright (c) 2025 - Cowboy AI, Inc.
//! Business-level classification of a lifecycle event

use serde::Serialize;
use std::fmt;

use super::subscription::{ProductCategory, SubscriptionEvent, SubscriptionEventType};

/// Lifecycle action qualified by the product category it applies to
///
/// Rendered as `ACTION_CATEGORY`, e.g. `START_ENTITLEMENT_BASE`, or `ACTION`
/// alone when the category is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct BusinessSubscriptionEvent {
    pub event_type: SubscriptionEventType,
    pub category: Option<ProductCategory>,
}

impl BusinessSubscriptionEvent {
    pub fn from_event(event: &SubscriptionEvent) -> Self {
        Self {
            event_type: event.event_type,
            category: event.next_product_category,
        }
    }
}

impl fmt::Display for BusinessSubscriptionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Some(category) => write!(f, "{}_{}", self.event_type, category),
            None => write!(f, "{}", self.event_type),
        }
    }
}

impl From<BusinessSubscriptionEvent> for String {
    fn from(value: BusinessSubscriptionEvent) -> Self {
        value.to_string()
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subscription Lifecycle Events
//!
//! - [`subscription`] - raw events of a bundle timeline
//! - [`business`] - business classification stamped on each transition
//!
//! Raw events are immutable facts. A bundle's timeline delivers them in
//! chronological order and nothing in this crate reorders them.

pub mod business;
pub mod subscription;

pub use business::BusinessSubscriptionEvent;
pub use subscription::{ObjectType, ProductCategory, SubscriptionEvent, SubscriptionEventType};

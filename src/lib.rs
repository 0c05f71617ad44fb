// Copyright (c) 2025 - Cowboy AI, Inc.
//! Business subscription transitions
//!
//! Rebuilds, per account and per service, the timeline of subscription
//! transitions from the ordered lifecycle events of each bundle:
//!
//! ```text
//! Bundle timeline ──> TransitionStreamBuilder ──> backfill_end_dates
//!   (raw events)       (demux, prev/next)          (end = next start)
//! ```
//!
//! [`BundleAggregator`] runs both passes for every bundle of an account.
//! Collaborators are reached through the traits in [`api`].

pub mod aggregator;
pub mod api;
pub mod backfill;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod in_memory;
pub mod snapshot;
pub mod stream;
pub mod transition;

// Re-export commonly used types
pub use aggregator::BundleAggregator;
pub use api::{AnalyticsApi, AuditLookup};
pub use backfill::backfill_end_dates;
pub use config::RefreshConfig;
pub use errors::{AnalyticsError, AnalyticsResult};
pub use in_memory::{AnalyticsDocument, InMemoryAnalyticsApi};
pub use snapshot::SubscriptionSnapshot;
pub use stream::{TransitionStream, TransitionStreamBuilder};
pub use transition::SubscriptionTransition;

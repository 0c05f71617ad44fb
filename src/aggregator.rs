// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bundle Aggregator
//!
//! Refreshes all subscription transitions of one account:
//!
//! ```text
//! account ──> report group, currency context, bundles
//!                               │
//!            for each bundle:   ▼
//!              timeline ──> TransitionStreamBuilder ──> backfill_end_dates
//!                               │
//!                               ▼
//!                      concatenated transitions
//! ```
//!
//! The first failure aborts the account; no partial result is returned.

use tracing::{debug, info};
use uuid::Uuid;

use crate::api::AnalyticsApi;
use crate::backfill::backfill_end_dates;
use crate::domain::CallContext;
use crate::errors::AnalyticsResult;
use crate::stream::TransitionStreamBuilder;
use crate::transition::SubscriptionTransition;

/// Builds the transitions of every bundle of an account
pub struct BundleAggregator<A: AnalyticsApi> {
    api: A,
}

impl<A: AnalyticsApi> BundleAggregator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Build and backfill the transitions of all bundles of `account_id`
    ///
    /// Transitions of one bundle stay in emission order; bundles are
    /// concatenated in the order the collaborator lists them, which callers
    /// should not rely on.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the account is unknown
    /// - `Resolution` if the report group or currency context cannot be resolved
    /// - `AuditLookup` if any event of any bundle lacks audit data
    pub fn build_for_account(
        &self,
        account_id: Uuid,
        account_record_id: i64,
        tenant_record_id: i64,
        context: &CallContext,
    ) -> AnalyticsResult<Vec<SubscriptionTransition>> {
        let account = self.api.resolve_account(account_id, context)?;
        let report_group = self.api.resolve_report_group(account.id, context)?;
        let currency = self.api.resolve_currency_context()?;
        let bundles = self.api.list_bundles(account.id, context)?;

        let builder = TransitionStreamBuilder::new(&self.api, context)
            .with_record_ids(account_record_id, tenant_record_id)
            .with_report_group(report_group);

        let mut transitions = Vec::new();
        for bundle in &bundles {
            let mut stream = builder.build(&account, bundle, bundle.timeline(), &currency)?;
            backfill_end_dates(&mut stream);

            debug!(
                "Bundle {} produced {} transitions",
                bundle.external_key,
                stream.len()
            );
            transitions.extend(stream.into_transitions());
        }

        info!(
            "Built {} transitions from {} bundles for account {}",
            transitions.len(),
            bundles.len(),
            account.id
        );

        Ok(transitions)
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Business Subscription Transition Refresh
//!
//! Loads accounts, bundles and audit records from a JSON document, rebuilds
//! the subscription transitions of every requested account and writes them
//! as JSON.
//!
//! Run with: BST_INPUT=accounts.json cargo run --bin bst-refresh
//!
//! Accounts are refreshed concurrently on blocking workers. The first failed
//! account fails the run and nothing is written.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use subscription_transitions::domain::CallContext;
use subscription_transitions::{
    BundleAggregator, InMemoryAnalyticsApi, RefreshConfig, SubscriptionTransition,
};
use tokio::task::JoinSet;
use tracing::{error, info};
use uuid::Uuid;

/// Transitions of one refreshed account
#[derive(Debug, Serialize)]
struct AccountTransitions {
    account_id: Uuid,
    transitions: Vec<SubscriptionTransition>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting subscription transition refresh");

    let config = RefreshConfig::from_env().context("Failed to load configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - Input: {}", config.input.display());
    info!("  - Tenant record id: {}", config.tenant_record_id);

    let mut api = InMemoryAnalyticsApi::from_path(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;
    if config.reference_currency.is_some() {
        api = api.with_reference_currency(config.reference_currency.clone());
    }

    let accounts = if config.accounts.is_empty() {
        api.account_ids().to_vec()
    } else {
        config.accounts.clone()
    };
    info!("🔄 Refreshing {} accounts", accounts.len());

    let aggregator = Arc::new(BundleAggregator::new(api));
    let context = CallContext::new(config.user.clone());

    let mut workers = JoinSet::new();
    for (position, account_id) in accounts.iter().copied().enumerate() {
        let aggregator = Arc::clone(&aggregator);
        let context = context.clone();
        let tenant_record_id = config.tenant_record_id;

        workers.spawn_blocking(move || {
            let account_record_id = aggregator.api().account_record_id(account_id).unwrap_or(0);
            let transitions = aggregator.build_for_account(
                account_id,
                account_record_id,
                tenant_record_id,
                &context,
            );
            (position, account_id, transitions)
        });
    }

    let mut results = Vec::with_capacity(accounts.len());
    while let Some(joined) = workers.join_next().await {
        let (position, account_id, transitions) = joined.context("Refresh worker panicked")?;
        match transitions {
            Ok(transitions) => results.push((
                position,
                AccountTransitions {
                    account_id,
                    transitions,
                },
            )),
            Err(e) => {
                error!("❌ Failed to refresh account {}: {}", account_id, e);
                workers.abort_all();
                return Err(e).with_context(|| format!("Failed to refresh account {account_id}"));
            }
        }
    }
    results.sort_by_key(|(position, _)| *position);
    let results: Vec<AccountTransitions> = results.into_iter().map(|(_, r)| r).collect();

    let total: usize = results.iter().map(|r| r.transitions.len()).sum();
    let payload = if config.pretty {
        serde_json::to_vec_pretty(&results)?
    } else {
        serde_json::to_vec(&results)?
    };

    match &config.output {
        Some(path) => std::fs::write(path, &payload)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&payload)?;
            stdout.write_all(b"\n")?;
        }
    }

    info!(
        "✅ Wrote {} transitions for {} accounts",
        total,
        results.len()
    );
    Ok(())
}

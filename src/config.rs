// Copyright (c) 2025 - Cowboy AI, Inc.
//! Refresh configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Currency;
use crate::errors::{AnalyticsError, AnalyticsResult};

/// Configuration of one `bst-refresh` run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// JSON document holding accounts, bundles and audit records
    pub input: PathBuf,

    /// Accounts to refresh; empty means every account of the document
    pub accounts: Vec<Uuid>,

    /// Tenant record id stamped on every transition
    pub tenant_record_id: i64,

    /// Overrides the document's reference currency
    pub reference_currency: Option<Currency>,

    /// Output file (stdout if not set)
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// User name recorded in the call context
    pub user: String,
}

impl RefreshConfig {
    pub const INPUT_VAR: &'static str = "BST_INPUT";
    pub const ACCOUNTS_VAR: &'static str = "BST_ACCOUNTS";
    pub const TENANT_RECORD_ID_VAR: &'static str = "BST_TENANT_RECORD_ID";
    pub const REFERENCE_CURRENCY_VAR: &'static str = "BST_REFERENCE_CURRENCY";
    pub const OUTPUT_VAR: &'static str = "BST_OUTPUT";
    pub const PRETTY_VAR: &'static str = "BST_PRETTY";
    pub const USER_VAR: &'static str = "BST_USER";

    /// Create a configuration reading `input` with defaults for everything else
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> AnalyticsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> AnalyticsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let input = get(Self::INPUT_VAR).ok_or_else(|| {
            AnalyticsError::Configuration(format!("{} not set", Self::INPUT_VAR))
        })?;

        let mut config = Self::new(input);

        if let Some(accounts) = get(Self::ACCOUNTS_VAR) {
            config.accounts = parse_accounts(&accounts)?;
        }

        if let Some(tenant) = get(Self::TENANT_RECORD_ID_VAR) {
            config.tenant_record_id = tenant.trim().parse().map_err(|_| {
                AnalyticsError::Configuration(format!(
                    "{} is not an integer: {}",
                    Self::TENANT_RECORD_ID_VAR,
                    tenant
                ))
            })?;
        }

        if let Some(currency) = get(Self::REFERENCE_CURRENCY_VAR) {
            let currency = Currency::new(currency.trim())
                .map_err(|e| AnalyticsError::Configuration(e.to_string()))?;
            config.reference_currency = Some(currency);
        }

        config.output = get(Self::OUTPUT_VAR).map(PathBuf::from);

        if let Some(pretty) = get(Self::PRETTY_VAR) {
            config.pretty = parse_flag(Self::PRETTY_VAR, &pretty)?;
        }

        if let Some(user) = get(Self::USER_VAR) {
            config.user = user;
        }

        Ok(config)
    }

    pub fn with_accounts(mut self, accounts: Vec<Uuid>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_reference_currency(mut self, currency: Currency) -> Self {
        self.reference_currency = Some(currency);
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("bst.json"),
            accounts: Vec::new(),
            tenant_record_id: 1,
            reference_currency: None,
            output: None,
            pretty: false,
            user: "analytics-refresh".to_string(),
        }
    }
}

fn parse_accounts(value: &str) -> AnalyticsResult<Vec<Uuid>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            Uuid::parse_str(id).map_err(|e| {
                AnalyticsError::Configuration(format!("invalid account id {id}: {e}"))
            })
        })
        .collect()
}

fn parse_flag(key: &str, value: &str) -> AnalyticsResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(AnalyticsError::Configuration(format!(
            "{key} must be a boolean, got {other}"
        ))),
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Collaborators
//!
//! [`InMemoryAnalyticsApi`] answers every collaborator lookup from data held
//! in memory, typically loaded from a JSON [`AnalyticsDocument`]:
//!
//! ```json
//! {
//!   "reference_currency": "USD",
//!   "accounts": [
//!     {
//!       "record_id": 10,
//!       "account": { "id": "...", "external_key": "acme", "currency": "EUR" },
//!       "report_group": "test",
//!       "bundles": [ { "id": "...", "external_key": "b1", "account_id": "...", "events": [] } ]
//!     }
//!   ],
//!   "audit": [
//!     { "event_id": "...", "object_type": "BLOCKING_STATES", "record_id": 1, "log": { } }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::api::{AnalyticsApi, AuditLookup};
use crate::domain::{
    Account, AuditLog, Bundle, CallContext, Currency, CurrencyContext, ReportGroup,
};
use crate::errors::{AnalyticsError, AnalyticsResult};
use crate::events::ObjectType;

/// Account with its record id, report group and bundles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub record_id: i64,
    pub account: Account,
    #[serde(default)]
    pub report_group: Option<ReportGroup>,
    #[serde(default)]
    pub bundles: Vec<Bundle>,
}

/// Record id and creation audit log of one stored event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub event_id: Uuid,
    pub object_type: ObjectType,
    pub record_id: i64,
    pub log: AuditLog,
}

/// Serializable content of an [`InMemoryAnalyticsApi`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsDocument {
    #[serde(default)]
    pub reference_currency: Option<Currency>,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
    #[serde(default)]
    pub audit: Vec<AuditRecord>,
}

/// Collaborators backed by in-memory maps
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalyticsApi {
    account_order: Vec<Uuid>,
    accounts: HashMap<Uuid, AccountRecord>,
    audit: HashMap<(Uuid, ObjectType), AuditRecord>,
    currency: CurrencyContext,
}

impl InMemoryAnalyticsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a document
    ///
    /// # Errors
    ///
    /// `Resolution` if a bundle is listed under an account it does not
    /// belong to.
    pub fn from_document(document: AnalyticsDocument) -> AnalyticsResult<Self> {
        let mut api = Self::new().with_reference_currency(document.reference_currency);

        for record in document.accounts {
            api.insert_account(record)?;
        }
        for record in document.audit {
            api.insert_audit(record);
        }

        debug!(
            "Loaded {} accounts and {} audit records",
            api.accounts.len(),
            api.audit.len()
        );
        Ok(api)
    }

    pub fn from_json_str(json: &str) -> AnalyticsResult<Self> {
        let document: AnalyticsDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AnalyticsResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn with_reference_currency(mut self, currency: Option<Currency>) -> Self {
        self.currency = CurrencyContext::new(currency);
        self
    }

    pub fn insert_account(&mut self, record: AccountRecord) -> AnalyticsResult<()> {
        let account_id = record.account.id;

        if let Some(bundle) = record.bundles.iter().find(|b| b.account_id != account_id) {
            return Err(AnalyticsError::Resolution(format!(
                "bundle {} listed under account {} belongs to account {}",
                bundle.id, account_id, bundle.account_id
            )));
        }

        if self.accounts.insert(account_id, record).is_none() {
            self.account_order.push(account_id);
        }
        Ok(())
    }

    pub fn insert_audit(&mut self, record: AuditRecord) {
        self.audit
            .insert((record.event_id, record.object_type), record);
    }

    /// Account ids in insertion order
    pub fn account_ids(&self) -> &[Uuid] {
        &self.account_order
    }

    pub fn account_record_id(&self, account_id: Uuid) -> Option<i64> {
        self.accounts.get(&account_id).map(|record| record.record_id)
    }

    fn account_record(&self, account_id: Uuid) -> AnalyticsResult<&AccountRecord> {
        self.accounts
            .get(&account_id)
            .ok_or_else(|| AnalyticsError::account_not_found(account_id))
    }

    fn audit_record(&self, event_id: Uuid, object_type: ObjectType) -> AnalyticsResult<&AuditRecord> {
        self.audit.get(&(event_id, object_type)).ok_or_else(|| {
            AnalyticsError::audit_lookup(event_id, object_type, "no stored record for event")
        })
    }
}

impl AuditLookup for InMemoryAnalyticsApi {
    fn resolve_event_record_id(
        &self,
        event_id: Uuid,
        object_type: ObjectType,
        _context: &CallContext,
    ) -> AnalyticsResult<i64> {
        self.audit_record(event_id, object_type)
            .map(|record| record.record_id)
    }

    fn resolve_creation_audit_log(
        &self,
        event_id: Uuid,
        object_type: ObjectType,
        _context: &CallContext,
    ) -> AnalyticsResult<AuditLog> {
        self.audit_record(event_id, object_type)
            .map(|record| record.log.clone())
    }
}

impl AnalyticsApi for InMemoryAnalyticsApi {
    fn resolve_account(&self, account_id: Uuid, _context: &CallContext) -> AnalyticsResult<Account> {
        self.account_record(account_id)
            .map(|record| record.account.clone())
    }

    fn resolve_report_group(
        &self,
        account_id: Uuid,
        _context: &CallContext,
    ) -> AnalyticsResult<Option<ReportGroup>> {
        self.account_record(account_id)
            .map(|record| record.report_group)
    }

    fn resolve_currency_context(&self) -> AnalyticsResult<CurrencyContext> {
        Ok(self.currency.clone())
    }

    fn list_bundles(&self, account_id: Uuid, _context: &CallContext) -> AnalyticsResult<Vec<Bundle>> {
        self.account_record(account_id)
            .map(|record| record.bundles.clone())
    }
}

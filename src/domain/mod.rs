// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subscription Analytics Domain Models
//!
//! # Value Objects with Invariants
//!
//! - [`ServiceName`] - logical service of a lifecycle event, with the
//!   combined entitlement+billing fan-out
//! - [`Currency`] - ISO 4217 currency code
//!
//! # Collaborator Records
//!
//! - [`Account`], [`Bundle`], [`AuditLog`], [`ReportGroup`] - data resolved
//!   through [`crate::api`]
//! - [`CallContext`] - caller identity passed to every lookup
//! - [`CurrencyContext`] - reference currency for converted amounts

pub mod account;
pub mod currency;
pub mod service;

pub use account::{Account, AuditLog, Bundle, CallContext, ReportGroup};
pub use currency::{Currency, CurrencyContext, CurrencyError};
pub use service::{ServiceFanOut, ServiceName, ServiceNameError};

//! Domain types for the tax register.
//!
//! All keys are opaque strings compared by exact ordinal order — no
//! locale-aware collation. Empty strings are ordinary, valid values.
//! All types are serializable/deserializable via serde.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed financial account identifier.
///
/// Globally unique across live registrations and immutable for the life of
/// a person's registration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The composite key uniquely identifying a registered person.
///
/// Ordering is lexicographic by `name`, then by `address` for equal names.
/// The derived `Ord` gives exactly that because of field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub address: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self { name: name.into(), address: address.into() }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.name, self.address)
    }
}

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// How a caller refers to a registered person in an accounting operation:
/// either by account id or by the (name, address) identity pair.
///
/// `From` impls let call sites pass either form directly:
/// `register.record_income("123", 3000)` or
/// `register.record_income(("John Smith", "Oak Road 23"), 500)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    Account(&'a str),
    Identity { name: &'a str, address: &'a str },
}

impl<'a> From<&'a str> for Locator<'a> {
    fn from(account: &'a str) -> Self {
        Locator::Account(account)
    }
}

impl<'a> From<(&'a str, &'a str)> for Locator<'a> {
    fn from((name, address): (&'a str, &'a str)) -> Self {
        Locator::Identity { name, address }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One registered person and their sole account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub identity: Identity,
    pub account: AccountId,
    pub total_income: i64,
    pub total_expense: i64,
    pub registered_at: DateTime<Utc>,
}

impl Person {
    /// A fresh registration with zeroed accumulators, stamped now.
    pub fn new(identity: Identity, account: AccountId) -> Self {
        Self {
            identity,
            account,
            total_income: 0,
            total_expense: 0,
            registered_at: Utc::now(),
        }
    }
}

/// The read-out returned by a successful audit: account id and both
/// accumulators, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub account: AccountId,
    pub total_income: i64,
    pub total_expense: i64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

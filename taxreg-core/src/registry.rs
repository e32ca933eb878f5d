//! In-memory register of persons, dual-indexed by identity and by account.
//!
//! # Storage layout
//!
//! ```text
//! people:      HashMap<PersonId, Person>        (the one owned record table)
//! by_identity: BTreeMap<Identity, PersonId>     (ordered: name, then address)
//! by_account:  BTreeMap<AccountId, PersonId>    (ordered: account id)
//! ```
//!
//! Both indexes point into the same table, so the "identity view" and the
//! "account view" of a person are one record reached through two keys —
//! accumulator updates can never diverge between views.
//!
//! # API pattern
//!
//! Every operation has two forms:
//! - `try_fn(…) -> Result<_, RegistryError>` — distinguishes failure kinds;
//!   used by tests and by callers that care which rule declined.
//! - `fn(…) -> bool` / `Option<_>` — the plain success/failure contract.
//!
//! All failures leave the register untouched: duplicate and existence checks
//! run before the first insert or delete of an operation.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, error, trace};

use crate::cursor::{Cursor, CursorEntry};
use crate::error::RegistryError;
use crate::types::{AccountId, Audit, Identity, Locator, Person};

/// Surrogate key for a row of the record table. Never reused within one
/// register's lifetime, never exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct PersonId(u64);

/// The register. Single-threaded by design: no interior locking, callers
/// needing shared access serialize externally.
#[derive(Debug, Default)]
pub struct TaxRegister {
    people: HashMap<PersonId, Person>,
    by_identity: BTreeMap<Identity, PersonId>,
    by_account: BTreeMap<AccountId, PersonId>,
    next_id: u64,
}

impl TaxRegister {
    /// An empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    // -----------------------------------------------------------------------
    // 1. Create
    // -----------------------------------------------------------------------

    /// Register a new person with zeroed accumulators.
    ///
    /// Declines with `DuplicateIdentity` if the (name, address) pair is
    /// taken, `DuplicateAccount` if the account id is taken. Both checks
    /// run before anything is inserted, so a decline mutates nothing.
    pub fn try_create(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        account: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let identity = Identity::new(name, address);
        let account = AccountId::from(account.into());

        if self.by_identity.contains_key(&identity) {
            return Err(RegistryError::DuplicateIdentity {
                name: identity.name,
                address: identity.address,
            });
        }
        if self.by_account.contains_key(&account) {
            return Err(RegistryError::DuplicateAccount { account: account.0 });
        }

        let id = PersonId(self.next_id);
        self.next_id += 1;

        debug!(name = %identity.name, address = %identity.address, account = %account,
               "registered person");
        self.by_identity.insert(identity.clone(), id);
        self.by_account.insert(account.clone(), id);
        self.people.insert(id, Person::new(identity, account));
        Ok(())
    }

    /// Bool form of [`try_create`](Self::try_create).
    pub fn create(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        account: impl Into<String>,
    ) -> bool {
        self.try_create(name, address, account).is_ok()
    }

    // -----------------------------------------------------------------------
    // 2. Remove
    // -----------------------------------------------------------------------

    /// Remove a person by identity, freeing both the (name, address) pair
    /// and the account id for reuse.
    ///
    /// Declines with `NotFound` if the identity is unknown. Declines with
    /// `InconsistentState` — deleting nothing — if the account-side entry
    /// for the person cannot be located; that path is unreachable under
    /// single-threaded use and exists so a corrupted register fails loudly
    /// instead of shedding half a registration.
    pub fn try_remove(&mut self, name: &str, address: &str) -> Result<(), RegistryError> {
        let identity = Identity::new(name, address);
        let id = *self.by_identity.get(&identity).ok_or(RegistryError::NotFound)?;

        // Verify the whole record before touching anything.
        let account = match self.people.get(&id) {
            Some(person) => person.account.clone(),
            None => {
                error!(name, address, "identity index points at a missing record");
                return Err(RegistryError::InconsistentState {
                    detail: format!("no record table entry for {identity}"),
                });
            }
        };
        match self.by_account.get(&account) {
            Some(account_id) if *account_id == id => {}
            _ => {
                error!(name, address, account = %account,
                       "account index disagrees with identity index");
                return Err(RegistryError::InconsistentState {
                    detail: format!("account index entry for {account} is missing or foreign"),
                });
            }
        }

        self.by_identity.remove(&identity);
        self.by_account.remove(&account);
        self.people.remove(&id);
        debug!(name, address, account = %account, "removed person");
        Ok(())
    }

    /// Bool form of [`try_remove`](Self::try_remove).
    pub fn remove(&mut self, name: &str, address: &str) -> bool {
        self.try_remove(name, address).is_ok()
    }

    // -----------------------------------------------------------------------
    // 3. Accounting
    // -----------------------------------------------------------------------

    /// Add `amount` to a person's income total.
    ///
    /// The person may be located by account id or by identity pair; see
    /// [`Locator`]. `amount` is any `i64` — negative and zero included, no
    /// sign or bounds validation. Accumulation saturates at the `i64`
    /// limits.
    pub fn try_record_income<'a>(
        &mut self,
        by: impl Into<Locator<'a>>,
        amount: i64,
    ) -> Result<(), RegistryError> {
        let person = self.resolve_mut(by.into())?;
        person.total_income = person.total_income.saturating_add(amount);
        trace!(account = %person.account, amount, total = person.total_income,
               "recorded income");
        Ok(())
    }

    /// Bool form of [`try_record_income`](Self::try_record_income).
    pub fn record_income<'a>(&mut self, by: impl Into<Locator<'a>>, amount: i64) -> bool {
        self.try_record_income(by, amount).is_ok()
    }

    /// Add `amount` to a person's expense total. Same contract as
    /// [`try_record_income`](Self::try_record_income).
    pub fn try_record_expense<'a>(
        &mut self,
        by: impl Into<Locator<'a>>,
        amount: i64,
    ) -> Result<(), RegistryError> {
        let person = self.resolve_mut(by.into())?;
        person.total_expense = person.total_expense.saturating_add(amount);
        trace!(account = %person.account, amount, total = person.total_expense,
               "recorded expense");
        Ok(())
    }

    /// Bool form of [`try_record_expense`](Self::try_record_expense).
    pub fn record_expense<'a>(&mut self, by: impl Into<Locator<'a>>, amount: i64) -> bool {
        self.try_record_expense(by, amount).is_ok()
    }

    // -----------------------------------------------------------------------
    // 4. Audit
    // -----------------------------------------------------------------------

    /// Look up a person by identity and return account id and both
    /// accumulators. Pure read; declines with `NotFound` if absent.
    pub fn try_audit(&self, name: &str, address: &str) -> Result<Audit, RegistryError> {
        let identity = Identity::new(name, address);
        let id = self.by_identity.get(&identity).ok_or(RegistryError::NotFound)?;
        let person = self.people.get(id).ok_or_else(|| {
            error!(name, address, "identity index points at a missing record");
            RegistryError::InconsistentState {
                detail: format!("no record table entry for {identity}"),
            }
        })?;
        Ok(Audit {
            account: person.account.clone(),
            total_income: person.total_income,
            total_expense: person.total_expense,
        })
    }

    /// Option form of [`try_audit`](Self::try_audit).
    pub fn audit(&self, name: &str, address: &str) -> Option<Audit> {
        self.try_audit(name, address).ok()
    }

    // -----------------------------------------------------------------------
    // 5. Snapshot
    // -----------------------------------------------------------------------

    /// Copy the identity-ordered view into a frozen [`Cursor`].
    ///
    /// The cursor holds its own data: later mutations of the register do
    /// not affect it. Calling this again yields an independent cursor over
    /// the register's state at that later time.
    pub fn list_by_identity(&self) -> Cursor {
        let entries = self
            .by_identity
            .iter()
            .filter_map(|(identity, id)| {
                let person = self.people.get(id)?;
                Some(CursorEntry {
                    name: identity.name.clone(),
                    address: identity.address.clone(),
                    account: person.account.0.clone(),
                })
            })
            .collect();
        Cursor::new(entries)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Resolve a locator to a mutable record, through either index.
    fn resolve_mut(&mut self, by: Locator<'_>) -> Result<&mut Person, RegistryError> {
        let id = match by {
            Locator::Account(account) => {
                let account = AccountId::from(account);
                *self.by_account.get(&account).ok_or(RegistryError::NotFound)?
            }
            Locator::Identity { name, address } => {
                let identity = Identity::new(name, address);
                *self.by_identity.get(&identity).ok_or(RegistryError::NotFound)?
            }
        };
        self.people.get_mut(&id).ok_or_else(|| {
            error!(?by, "index points at a missing record");
            RegistryError::InconsistentState {
                detail: format!("no record table entry behind locator {by:?}"),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

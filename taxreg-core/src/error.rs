//! Error types for taxreg-core.

use thiserror::Error;

/// All the ways a register operation can decline.
///
/// The bool/Option surface on [`crate::TaxRegister`] collapses every variant
/// to "operation declined"; the `try_` forms expose the distinction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A person with the same (name, address) pair is already registered.
    #[error("person {name} / {address} is already registered")]
    DuplicateIdentity { name: String, address: String },

    /// The account id is already held by a registered person.
    #[error("account {account} is already registered")]
    DuplicateAccount { account: String },

    /// No registered person matches the given identity or account.
    #[error("no registered person matches the given identity or account")]
    NotFound,

    /// The identity and account views disagree about a record. Unreachable
    /// under single-threaded use; the register declines rather than delete
    /// half a registration.
    #[error("identity and account views disagree: {detail}")]
    InconsistentState { detail: String },
}

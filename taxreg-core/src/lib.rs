//! Tax register core library — domain types, dual-index registry, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — [`TaxRegister`]: create / remove / accounting / audit
//! - [`cursor`] — [`Cursor`]: frozen, identity-ordered traversal

pub mod cursor;
pub mod error;
pub mod registry;
pub mod types;

pub use cursor::{Cursor, CursorEntry};
pub use error::RegistryError;
pub use registry::TaxRegister;
pub use types::{AccountId, Audit, Identity, Locator, Person};

//! Land-title core library: title records, the authorization-gated
//! registry, and the store/identity seams it runs against.
//!
//! - [`types`] — [`LandTitle`] and its newtypes
//! - [`error`] — [`RegistryError`], [`StoreError`], [`IdentityError`]
//! - [`store`] — [`StateStore`] trait and [`MemoryStore`]
//! - [`file_store`] — on-disk [`FileStore`]
//! - [`identity`] — [`CallerIdentity`] trait
//! - [`registry`] — [`TitleRegistry`]

pub mod error;
pub mod file_store;
pub mod identity;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{ErrorKind, IdentityError, RegistryError, StoreError};
pub use file_store::FileStore;
pub use identity::{CallerIdentity, ClientIdentity};
pub use registry::{check_caller_org, TitleRegistry};
pub use store::{MemoryStore, StateScan, StateStore};
pub use types::{seed_titles, LandTitle, OrgId, TitleDraft, TitleId};

//! Title registry: authorization-gated operations over a [`StateStore`].
//!
//! # Authorization
//!
//! Every stored title carries an `Organization`. Update and transfer succeed
//! only when the caller's organization equals it exactly; create stamps the
//! caller's organization onto the new record. Transfer moves that stamp, so
//! the previous organization loses write access once the write commits.
//!
//! Each successful operation performs at most one `put_state`. Read-then-write
//! sequences are not isolated here; ordering of conflicting writes on the same
//! key is the hosting ledger's concern.

use tracing::{debug, info, warn};

use crate::error::RegistryError;
use crate::identity::CallerIdentity;
use crate::store::StateStore;
use crate::types::{seed_titles, LandTitle, OrgId, TitleDraft, TitleId};

/// Owns the store and exposes the land-title operations.
#[derive(Debug)]
pub struct TitleRegistry<S> {
    store: S,
}

impl<S: StateStore> TitleRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // -----------------------------------------------------------------------
    // Bootstrap
    // -----------------------------------------------------------------------

    /// Writes the seed titles unconditionally. Meant for an empty store; a
    /// failed write leaves the earlier seeds in place.
    pub fn init_ledger(&mut self) -> Result<(), RegistryError> {
        for title in seed_titles() {
            self.save(&title)?;
        }
        info!("ledger seeded");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Create / read
    // -----------------------------------------------------------------------

    /// Stores a new title owned, for authorization purposes, by the caller's
    /// organization. Fails if the identifier is taken.
    pub fn create_land_title(
        &mut self,
        caller: &impl CallerIdentity,
        draft: TitleDraft,
    ) -> Result<LandTitle, RegistryError> {
        let org = caller.caller_organization()?;
        if self.land_title_exists(&draft.id)? {
            return Err(RegistryError::AlreadyExists { id: draft.id });
        }

        let title = draft.into_title(org);
        self.save(&title)?;
        info!(id = %title.id, org = %title.organization, "land title created");
        Ok(title)
    }

    pub fn read_land_title(&self, id: &TitleId) -> Result<LandTitle, RegistryError> {
        debug!(id = %id, "reading land title");
        let bytes = self
            .store
            .get_state(id.as_str())?
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        decode(id.as_str(), &bytes)
    }

    pub fn land_title_exists(&self, id: &TitleId) -> Result<bool, RegistryError> {
        Ok(self.store.get_state(id.as_str())?.is_some())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Replaces `Owner` and `PropertyValue`; every other field is kept.
    pub fn update_land_title(
        &mut self,
        caller: &impl CallerIdentity,
        id: &TitleId,
        new_owner: impl Into<String>,
        new_value: f64,
    ) -> Result<LandTitle, RegistryError> {
        let mut title = self.read_land_title(id)?;
        check_caller_org(caller, &title.organization)?;

        title.owner = new_owner.into();
        title.property_value = new_value;
        self.save(&title)?;
        info!(id = %title.id, owner = %title.owner, "land title updated");
        Ok(title)
    }

    /// Replaces `Owner` and `Organization`; every other field is kept.
    pub fn transfer_land_title(
        &mut self,
        caller: &impl CallerIdentity,
        id: &TitleId,
        new_owner: impl Into<String>,
        new_org: OrgId,
    ) -> Result<LandTitle, RegistryError> {
        let mut title = self.read_land_title(id)?;
        check_caller_org(caller, &title.organization)?;

        let from = std::mem::replace(&mut title.organization, new_org);
        title.owner = new_owner.into();
        self.save(&title)?;
        info!(
            id = %title.id,
            from = %from,
            to = %title.organization,
            "land title transferred"
        );
        Ok(title)
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// Every stored title in the store's key order. A single undecodable
    /// entry fails the whole listing.
    pub fn get_all_land_titles(&self) -> Result<Vec<LandTitle>, RegistryError> {
        let scan = self.store.scan_range("", "")?;
        let mut titles = Vec::new();
        for item in scan {
            let (key, bytes) = item?;
            titles.push(decode(&key, &bytes)?);
        }
        debug!(count = titles.len(), "listed land titles");
        Ok(titles)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn save(&mut self, title: &LandTitle) -> Result<(), RegistryError> {
        // serde_json writes non-finite floats as `null`, which never decodes.
        if !title.property_value.is_finite() {
            return Err(RegistryError::NonFiniteValue {
                id: title.id.clone(),
                value: title.property_value,
            });
        }
        let bytes = serde_json::to_vec(title).map_err(|source| RegistryError::Encode {
            id: title.id.clone(),
            source,
        })?;
        self.store.put_state(title.id.as_str(), bytes)?;
        Ok(())
    }
}

/// Succeeds iff the caller's organization is exactly `expected`.
pub fn check_caller_org(
    caller: &impl CallerIdentity,
    expected: &OrgId,
) -> Result<(), RegistryError> {
    let org = caller.caller_organization()?;
    if org != *expected {
        warn!(expected = %expected, caller = %org, "access denied");
        return Err(RegistryError::AccessDenied {
            expected: expected.clone(),
            caller: org,
        });
    }
    Ok(())
}

fn decode(key: &str, bytes: &[u8]) -> Result<LandTitle, RegistryError> {
    serde_json::from_slice(bytes).map_err(|source| RegistryError::Decode {
        key: key.to_owned(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

//! Caller identity seam.
//!
//! The hosting platform authenticates the caller; this crate only asks it
//! which organization the caller belongs to.

use crate::error::IdentityError;
use crate::types::OrgId;

/// Source of the invoking party's organization credential.
pub trait CallerIdentity {
    fn caller_organization(&self) -> Result<OrgId, IdentityError>;
}

/// A fixed credential.
impl CallerIdentity for OrgId {
    fn caller_organization(&self) -> Result<OrgId, IdentityError> {
        Ok(self.clone())
    }
}

/// Client credential as configured by a front end; may be absent.
#[derive(Debug, Clone, Default)]
pub struct ClientIdentity {
    msp_id: Option<OrgId>,
}

impl ClientIdentity {
    pub fn new(msp_id: Option<OrgId>) -> Self {
        Self { msp_id }
    }
}

impl CallerIdentity for ClientIdentity {
    fn caller_organization(&self) -> Result<OrgId, IdentityError> {
        self.msp_id.clone().ok_or(IdentityError::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn org_id_is_its_own_credential() {
        let org = OrgId::from("Org1MSP");
        assert_eq!(org.caller_organization().unwrap(), org);
    }

    #[test]
    fn client_identity_without_msp_id_fails() {
        let err = ClientIdentity::default().caller_organization().unwrap_err();
        assert!(matches!(err, IdentityError::Missing));
    }

    #[test]
    fn client_identity_with_msp_id() {
        let id = ClientIdentity::new(Some(OrgId::from("Org2MSP")));
        assert_eq!(id.caller_organization().unwrap().as_str(), "Org2MSP");
    }
}

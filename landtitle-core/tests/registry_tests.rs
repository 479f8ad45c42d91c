//! End-to-end registry behaviour against the in-memory store: uniqueness,
//! read-after-write, the organization gate, and field scope of mutations.

use landtitle_core::{
    ErrorKind, LandTitle, MemoryStore, OrgId, RegistryError, TitleDraft, TitleId, TitleRegistry,
};
use rstest::rstest;

fn org(s: &str) -> OrgId {
    OrgId::from(s)
}

fn draft(id: &str, owner: &str, desc: &str, value: f64, ts: &str, hash: &str) -> TitleDraft {
    TitleDraft {
        id: TitleId::from(id),
        owner: owner.to_string(),
        property_description: desc.to_string(),
        property_value: value,
        timestamp: ts.to_string(),
        document_hash: hash.to_string(),
    }
}

fn t1() -> TitleDraft {
    draft("T1", "Alice", "House", 500_000.0, "2025-01-01", "Qm1")
}

fn registry() -> TitleRegistry<MemoryStore> {
    TitleRegistry::new(MemoryStore::new())
}

// ---------------------------------------------------------------------------
// 1. Full ownership scenario
// ---------------------------------------------------------------------------

#[test]
fn create_update_transfer_scenario() {
    let mut reg = registry();
    let id = TitleId::from("T1");

    reg.create_land_title(&org("Org1MSP"), t1()).expect("create");
    let read = reg.read_land_title(&id).expect("read");
    assert_eq!(
        read,
        LandTitle {
            id: id.clone(),
            owner: "Alice".into(),
            property_description: "House".into(),
            property_value: 500_000.0,
            document_hash: "Qm1".into(),
            timestamp: "2025-01-01".into(),
            organization: org("Org1MSP"),
        }
    );

    let err = reg
        .update_land_title(&org("Org2MSP"), &id, "Bob", 600_000.0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);

    reg.update_land_title(&org("Org1MSP"), &id, "Bob", 600_000.0)
        .expect("update");
    let read = reg.read_land_title(&id).expect("read");
    assert_eq!(read.owner, "Bob");
    assert_eq!(read.property_value, 600_000.0);
    assert_eq!(read.organization, org("Org1MSP"));

    reg.transfer_land_title(&org("Org1MSP"), &id, "Carol", org("Org2MSP"))
        .expect("transfer");
    let err = reg
        .update_land_title(&org("Org1MSP"), &id, "Dave", 1.0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);
    reg.update_land_title(&org("Org2MSP"), &id, "Dave", 1.0)
        .expect("update by new org");
}

// ---------------------------------------------------------------------------
// 2. Uniqueness
// ---------------------------------------------------------------------------

#[rstest]
#[case::same_org("Org1MSP", "Alice", 500_000.0)]
#[case::other_org("Org2MSP", "Mallory", 1.0)]
#[case::lowercase_org("org1msp", "", 0.0)]
fn second_create_always_conflicts(#[case] caller: &str, #[case] owner: &str, #[case] value: f64) {
    let mut reg = registry();
    reg.create_land_title(&org("Org1MSP"), t1()).expect("first create");

    let err = reg
        .create_land_title(
            &org(caller),
            draft("T1", owner, "other", value, "2030-01-01", "QmX"),
        )
        .unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyExists { .. }), "got: {err}");
    assert_eq!(
        reg.read_land_title(&TitleId::from("T1")).unwrap().organization,
        org("Org1MSP")
    );
}

// ---------------------------------------------------------------------------
// 3. Authorization gate
// ---------------------------------------------------------------------------

#[rstest]
#[case::other_org("Org2MSP")]
#[case::case_mismatch("org1MSP")]
#[case::trailing_space("Org1MSP ")]
#[case::empty("")]
fn foreign_org_cannot_mutate(#[case] caller: &str) {
    let mut reg = registry();
    let id = TitleId::from("T1");
    reg.create_land_title(&org("Org1MSP"), t1()).expect("create");
    let before = reg.read_land_title(&id).unwrap();

    let err = reg
        .update_land_title(&org(caller), &id, "Eve", 9.0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);
    assert!(err.to_string().contains("Org1MSP"));

    let err = reg
        .transfer_land_title(&org(caller), &id, "Eve", org(caller))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);

    assert_eq!(reg.read_land_title(&id).unwrap(), before);
}

// ---------------------------------------------------------------------------
// 4. Field scope
// ---------------------------------------------------------------------------

#[test]
fn update_changes_only_owner_and_value() {
    let mut reg = registry();
    let id = TitleId::from("T1");
    reg.create_land_title(&org("Org1MSP"), t1()).unwrap();
    let before = reg.read_land_title(&id).unwrap();

    let after = reg
        .update_land_title(&org("Org1MSP"), &id, "Bob", 42.5)
        .unwrap();
    assert_eq!(after, reg.read_land_title(&id).unwrap());
    assert_eq!(
        after,
        LandTitle {
            owner: "Bob".into(),
            property_value: 42.5,
            ..before
        }
    );
}

#[test]
fn transfer_changes_only_owner_and_org() {
    let mut reg = registry();
    let id = TitleId::from("T1");
    reg.create_land_title(&org("Org1MSP"), t1()).unwrap();
    let before = reg.read_land_title(&id).unwrap();

    reg.transfer_land_title(&org("Org1MSP"), &id, "Carol", org("Org3MSP"))
        .unwrap();
    assert_eq!(
        reg.read_land_title(&id).unwrap(),
        LandTitle {
            owner: "Carol".into(),
            organization: org("Org3MSP"),
            ..before
        }
    );

    let err = reg
        .transfer_land_title(&org("Org1MSP"), &id, "Alice", org("Org1MSP"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);
}

// ---------------------------------------------------------------------------
// 5. Existence and listing
// ---------------------------------------------------------------------------

#[rstest]
#[case(&["1", "2", "3"])]
#[case(&["3", "1", "2"])]
#[case(&["2", "3", "1"])]
fn listing_is_complete_regardless_of_create_order(#[case] ids: &[&str]) {
    let mut reg = registry();
    for id in ids {
        assert!(!reg.land_title_exists(&TitleId::from(*id)).unwrap());
        reg.create_land_title(
            &org("Org1MSP"),
            draft(id, &format!("owner-{id}"), "Lot", 1.0, "2025-01-01", "Qm"),
        )
        .unwrap();
        assert!(reg.land_title_exists(&TitleId::from(*id)).unwrap());
    }

    let all = reg.get_all_land_titles().expect("list");
    let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    for t in &all {
        assert_eq!(t.owner, format!("owner-{}", t.id));
        assert_eq!(*t, reg.read_land_title(&t.id).unwrap());
    }
    assert_eq!(reg.store().open_scans(), 0);
}

#[test]
fn listing_empty_store_is_empty() {
    let reg = registry();
    assert!(reg.get_all_land_titles().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// 6. Non-finite values never reach the store
// ---------------------------------------------------------------------------

#[rstest]
#[case::nan(f64::NAN)]
#[case::pos_inf(f64::INFINITY)]
#[case::neg_inf(f64::NEG_INFINITY)]
fn non_finite_value_is_rejected_without_write(#[case] value: f64) {
    let mut reg = registry();
    let err = reg
        .create_land_title(
            &org("Org1MSP"),
            draft("bad", "Alice", "House", value, "2025-01-01", "Qm1"),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serialization);
    assert!(!reg.land_title_exists(&TitleId::from("bad")).unwrap());

    reg.create_land_title(&org("Org1MSP"), t1()).unwrap();
    let id = TitleId::from("T1");
    let before = reg.read_land_title(&id).unwrap();
    let err = reg
        .update_land_title(&org("Org1MSP"), &id, "Bob", value)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serialization);

    assert_eq!(reg.get_all_land_titles().unwrap(), vec![before]);
}

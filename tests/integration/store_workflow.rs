//! Integration test: full license store lifecycle.
//!
//! Tests the complete lifecycle of a keyed multi store:
//! 1. Store three plain licenses with distinct ids
//! 2. Retrieve each by id, unmodified
//! 3. Iterate all of them
//! 4. Delete one by id and iterate again
//! 5. Delete the whole store and iterate as empty
//!
//! Plus: signed envelopes survive storage byte-for-byte, and corrupt
//! files never abort an iteration.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use licentia::{
    FileStoreReference, FsLicenseStore, License, LicenseData, LicenseId, LicenseSerializer,
    LicenseType, SignedEnvelope, SignedLicense, XmlCodec,
};

fn plain_license(license_type: LicenseType, email: &str) -> License {
    let mut data = LicenseData::new(license_type);
    data.features = vec!["com.example.app".into()];
    data.licensee.insert("email".into(), email.into());
    data.expiration = Some(Utc.with_ymd_and_hms(2030, 6, 30, 12, 0, 0).unwrap());
    data.max_user_count = Some(25);
    License::Plain(data)
}

#[test]
fn multi_store_lifecycle() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("licenses");
    std::fs::create_dir(&dir).unwrap();

    let store = FsLicenseStore::new(XmlCodec);
    let multi = FileStoreReference::multi(&dir);

    // ── Step 1: Store three licenses ────────────────────────────────────
    let licenses = vec![
        plain_license(LicenseType::Free, "free@example.com"),
        plain_license(LicenseType::Trial, "trial@example.com"),
        plain_license(LicenseType::Paid, "paid@example.com"),
    ];
    for license in &licenses {
        store.store(&multi, license).unwrap();
    }

    // ── Step 2: Retrieve each by id, unmodified ─────────────────────────
    for license in &licenses {
        let back = store.retrieve_by_id(&multi, license.id()).unwrap();
        assert_eq!(back.as_ref(), Some(license));
    }

    // ── Step 3: Iterate all of them (order unspecified) ─────────────────
    let seen: BTreeSet<LicenseId> = store
        .licenses(&multi)
        .unwrap()
        .map(|license| license.id())
        .collect();
    let expected: BTreeSet<LicenseId> = licenses.iter().map(|license| license.id()).collect();
    assert_eq!(seen, expected);

    // ── Step 4: Delete one by id ────────────────────────────────────────
    store.delete_by_id(&multi, licenses[1].id()).unwrap();
    assert_eq!(store.licenses(&multi).unwrap().count(), 2);
    assert_eq!(store.retrieve_by_id(&multi, licenses[1].id()).unwrap(), None);

    // ── Step 5: Delete the whole store ──────────────────────────────────
    store.delete(&multi).unwrap();
    assert!(!dir.exists());
    assert_eq!(store.licenses(&multi).unwrap().count(), 0);
}

#[test]
fn signed_license_survives_storage_byte_for_byte() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("licenses");
    std::fs::create_dir(&dir).unwrap();

    let store = FsLicenseStore::new(XmlCodec);
    let multi = FileStoreReference::multi(&dir);

    // Fabricate an envelope the way the external signer would: the XML
    // rendering of the terms plus a detached signature.
    let mut data = LicenseData::new(LicenseType::Paid);
    data.instance_ids = vec!["prod-eu-1".into()];
    let payload = XmlCodec.serialize(&data).unwrap().into_bytes();
    let encoded = SignedEnvelope::new(payload, vec![0x5a; 64], "signer-2024")
        .to_bytes()
        .unwrap();
    let license = License::Signed(SignedLicense::from_parts(data.clone(), encoded.clone()));

    store.store(&multi, &license).unwrap();

    // The file on disk is the envelope, untouched.
    let on_disk = std::fs::read(dir.join(format!("{}.license", data.id))).unwrap();
    assert_eq!(on_disk, encoded);

    // Retrieval sniffs the binary form and reconstructs the signed variant.
    match store.retrieve_by_id(&multi, data.id).unwrap() {
        Some(License::Signed(signed)) => {
            assert_eq!(signed.data(), &data);
            assert_eq!(signed.encoded(), &encoded[..]);
        }
        other => panic!("expected a signed license, got {other:?}"),
    }
}

#[test]
fn iteration_skips_corrupt_files() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("licenses");
    std::fs::create_dir(&dir).unwrap();

    let store = FsLicenseStore::new(XmlCodec);
    let multi = FileStoreReference::multi(&dir);

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        store
            .store(&multi, &plain_license(LicenseType::Paid, email))
            .unwrap();
    }

    // Candidate-shaped names with content nothing can decode.
    for garbage in [&b"\x00\x01\x02"[..], &b"<?xml version=\"1.0\"?><lic"[..]] {
        std::fs::write(dir.join(format!("{}.license", LicenseId::new())), garbage).unwrap();
    }
    // A non-candidate name is invisible regardless of content.
    std::fs::write(dir.join("notes.license"), "scratch").unwrap();

    let decoded: Vec<License> = store.licenses(&multi).unwrap().collect();
    assert_eq!(decoded.len(), 3);
}

//! End-to-end tests for the Merkle key collection signature scheme
//!
//! Drives the whole pipeline the way an identity layer would: generate a
//! collection, publish its key data, sign as different members, verify with
//! and without revocation flags in play.

use keygrove_signatures::{
    restore_one, revoke_one, revoke_set, Blake3, Ed25519, KeyCollection, RevocationFlags,
    Sha256, SignatureError, Signer, VerificationKey, Verifier,
};

#[test]
fn every_member_of_a_collection_can_sign() {
    let collection = KeyCollection::new_ed25519(16).unwrap();
    let key_data = collection.verification_key::<Sha256, _>(&Ed25519).unwrap();

    let signer = Signer::<Sha256, _>::new(Ed25519);
    let verifier = Verifier::<Sha256, _>::new(Ed25519);
    let key = VerificationKey::new(&key_data);

    for index in 0..collection.len() {
        let member = collection.signing_key::<Sha256>(index).unwrap();
        let value = signer.sign(b"signed by any member", &member).unwrap();

        assert!(
            verifier.verify(b"signed by any member", &value, &key).is_ok(),
            "member {} failed to verify",
            index
        );
    }
}

#[test]
fn blake3_collections_work_end_to_end() {
    let collection = KeyCollection::new_ed25519(7).unwrap();
    let key_data = collection.verification_key::<Blake3, _>(&Ed25519).unwrap();

    let signer = Signer::<Blake3, _>::new(Ed25519);
    let member = collection.signing_key::<Blake3>(6).unwrap();
    let value = signer.sign(b"blake3 flavored", &member).unwrap();

    let verifier = Verifier::<Blake3, _>::new(Ed25519);
    let key = VerificationKey::new(&key_data);
    assert!(verifier.verify(b"blake3 flavored", &value, &key).is_ok());
}

#[test]
fn single_member_collection_has_empty_proof() {
    let collection = KeyCollection::new_ed25519(1).unwrap();
    let key_data = collection.verification_key::<Sha256, _>(&Ed25519).unwrap();

    let member = collection.signing_key::<Sha256>(0).unwrap();
    assert!(member.proof().is_empty());

    let signer = Signer::<Sha256, _>::new(Ed25519);
    let value = signer.sign(b"lonely", &member).unwrap();

    let verifier = Verifier::<Sha256, _>::new(Ed25519);
    let key = VerificationKey::new(&key_data);
    assert!(verifier.verify(b"lonely", &value, &key).is_ok());
}

#[test]
fn revocation_is_metadata_not_key_destruction() {
    let collection = KeyCollection::new_ed25519(8).unwrap();
    let key_data = collection.verification_key::<Sha256, _>(&Ed25519).unwrap();

    let signer = Signer::<Sha256, _>::new(Ed25519);
    let member = collection.signing_key::<Sha256>(4).unwrap();
    let value = signer.sign(b"issued before revocation", &member).unwrap();

    let verifier = Verifier::<Sha256, _>::new(Ed25519);
    let mut flags = RevocationFlags::new();

    // Valid before revocation
    let key = VerificationKey::new(&key_data).with_revocation(&flags);
    assert!(verifier
        .verify(b"issued before revocation", &value, &key)
        .is_ok());

    // Blocked while revoked, even though the cryptography still holds
    revoke_one(&mut flags, 4);
    let key = VerificationKey::new(&key_data).with_revocation(&flags);
    let err = verifier
        .verify(b"issued before revocation", &value, &key)
        .unwrap_err();
    assert!(err.is_revocation());

    // The same value verifies again after restoration
    restore_one(&mut flags, 4);
    let key = VerificationKey::new(&key_data).with_revocation(&flags);
    assert!(verifier
        .verify(b"issued before revocation", &value, &key)
        .is_ok());
}

#[test]
fn batch_revocation_blocks_all_named_members() {
    let collection = KeyCollection::new_ed25519(6).unwrap();
    let key_data = collection.verification_key::<Sha256, _>(&Ed25519).unwrap();

    let signer = Signer::<Sha256, _>::new(Ed25519);
    let verifier = Verifier::<Sha256, _>::new(Ed25519);

    let mut flags = RevocationFlags::new();
    revoke_set(&mut flags, &[0, 2, 5]);
    let key = VerificationKey::new(&key_data).with_revocation(&flags);

    for index in 0..collection.len() {
        let member = collection.signing_key::<Sha256>(index).unwrap();
        let value = signer.sign(b"batch", &member).unwrap();
        let result = verifier.verify(b"batch", &value, &key);

        if flags.contains(index as u32) {
            assert_eq!(
                result.unwrap_err(),
                SignatureError::KeyRevoked {
                    index: index as u32
                }
            );
        } else {
            assert!(result.is_ok(), "unrevoked member {} was blocked", index);
        }
    }
}

#[test]
fn signatures_do_not_transfer_between_collections() {
    let first = KeyCollection::new_ed25519(4).unwrap();
    let second = KeyCollection::new_ed25519(4).unwrap();

    let signer = Signer::<Sha256, _>::new(Ed25519);
    let member = first.signing_key::<Sha256>(0).unwrap();
    let value = signer.sign(b"collection bound", &member).unwrap();

    let second_key_data = second.verification_key::<Sha256, _>(&Ed25519).unwrap();
    let verifier = Verifier::<Sha256, _>::new(Ed25519);
    let key = VerificationKey::new(&second_key_data);

    assert!(matches!(
        verifier.verify(b"collection bound", &value, &key),
        Err(SignatureError::InvalidProof(_))
    ));
}

#[test]
fn out_of_range_revocation_flags_do_not_block_members() {
    let collection = KeyCollection::new_ed25519(3).unwrap();
    let key_data = collection.verification_key::<Sha256, _>(&Ed25519).unwrap();

    let mut flags = RevocationFlags::new();
    revoke_one(&mut flags, 4000); // No such member

    let signer = Signer::<Sha256, _>::new(Ed25519);
    let member = collection.signing_key::<Sha256>(1).unwrap();
    let value = signer.sign(b"still fine", &member).unwrap();

    let verifier = Verifier::<Sha256, _>::new(Ed25519);
    let key = VerificationKey::new(&key_data).with_revocation(&flags);
    assert!(verifier.verify(b"still fine", &value, &key).is_ok());
}

#[test]
fn revocation_flags_survive_serialization() {
    let mut flags = RevocationFlags::new();
    revoke_set(&mut flags, &[3, 64, 128]);

    let json = serde_json::to_string(&flags).unwrap();
    let restored: RevocationFlags = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, flags);
    assert!(restored.contains(64));
}

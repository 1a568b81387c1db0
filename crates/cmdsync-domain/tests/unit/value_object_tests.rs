//! Tests for scope, digest and mention value objects

use cmdsync_domain::value_objects::{CommandDigest, Mention, Scope};

#[test]
fn test_scope_conversions() {
    assert_eq!(Scope::from(None), Scope::Global);
    assert_eq!(Scope::from(Some(5)), Scope::Guild(5));
    assert_eq!(Scope::Guild(5).guild_id(), Some(5));
    assert!(Scope::Global.is_global());
    assert_eq!(Scope::Global.to_string(), "global");
}

#[test]
fn test_digest_is_big_endian() {
    let digest = CommandDigest::from_u64(0x0102_0304_0506_0708);
    assert_eq!(digest.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(digest.to_hex(), "0102030405060708");
}

#[test]
fn test_digest_from_slice_rejects_sentinel_and_garbage() {
    assert_eq!(CommandDigest::from_slice(&[]), None);
    assert_eq!(CommandDigest::from_slice(&[1, 2, 3]), None);
    assert_eq!(
        CommandDigest::from_slice(&[0, 0, 0, 0, 0, 0, 0, 9]),
        Some(CommandDigest::from_u64(9))
    );
}

#[test]
fn test_mention_format() {
    let mention = Mention::new("play", 42);
    assert_eq!(mention.to_string(), "</play:42>");
    assert_eq!(mention.id(), 42);
    assert_eq!(mention.qualified_name(), "play");
}

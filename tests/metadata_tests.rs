// tests/metadata_tests.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cipher_toolkit::metadata::{decode, encode};
use cipher_toolkit::{CoreError, FileMetadata};

#[test]
fn test_encode_decode_roundtrip() {
    let metadata = FileMetadata::new("pdf", "application/pdf");
    let token = encode(&metadata);
    assert_eq!(decode(&token).unwrap(), metadata);
}

#[test]
fn test_roundtrip_with_empty_fields() {
    let metadata = FileMetadata::default();
    assert_eq!(decode(&encode(&metadata)).unwrap(), metadata);
}

#[test]
fn test_token_wire_format_is_base64_json() {
    let token = encode(&FileMetadata::new("png", "image/png"));

    let json = STANDARD.decode(&token).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["ext"], "png");
    assert_eq!(value["type"], "image/png");
}

#[test]
fn test_malformed_tokens_fail_with_parse_error() {
    // Not base64 at all
    assert!(matches!(
        decode("!!not base64!!"),
        Err(CoreError::MetadataParse(_))
    ));
    // Valid base64, but not JSON underneath
    let not_json = STANDARD.encode("plain text");
    assert!(matches!(
        decode(&not_json),
        Err(CoreError::MetadataParse(_))
    ));
}

#[test]
fn test_decode_tolerates_surrounding_whitespace() {
    let token = encode(&FileMetadata::new("txt", "text/plain"));
    let decoded = decode(&format!("  {token}\n")).unwrap();
    assert_eq!(decoded.extension, "txt");
}

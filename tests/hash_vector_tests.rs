use speechrel::{HashValue, SpeechError};

#[test]
fn test_jenkins_reference_vector() {
    // Canonical one-at-a-time result for "a"
    assert_eq!(HashValue::of("a").unwrap().value(), 0xCA2E9442);
}

#[test]
fn test_jenkins_known_names() {
    assert_eq!(HashValue::of("hello").unwrap().value(), 0xC8FD181B);
    assert_eq!(HashValue::of("Bob").unwrap().value(), 0xC7699FB9);
}

#[test]
fn test_jenkins_is_deterministic() {
    for name in ["speaker", "dlc_speech", "foo_bar", "x"] {
        assert_eq!(HashValue::of(name).unwrap(), HashValue::of(name).unwrap());
    }
}

#[test]
fn test_empty_string_is_rejected() {
    assert!(matches!(HashValue::of(""), Err(SpeechError::EmptyInput)));
}

#[test]
fn test_xor_combination_is_symmetric() {
    let wave = HashValue::of("foo_bar").unwrap();
    let speaker = HashValue::of("Alice").unwrap();
    assert_eq!(wave.combine(&speaker), speaker.combine(&wave));
}

#[test]
fn test_combined_bytes_match_xor_of_words() {
    let wave = HashValue::of("hello").unwrap();
    let speaker = HashValue::of("Bob").unwrap();
    let combined = wave.combine(&speaker);
    let expected = (wave.value() ^ speaker.value()).to_be_bytes();
    assert_eq!(combined.bytes(), &expected);
}

#[test]
fn test_hex_renderings() {
    let h = HashValue::of("hello").unwrap();
    assert_eq!(format!("{}", h), "C8FD181B");
    assert_eq!(h.to_hex_lower(), "c8fd181b");
}

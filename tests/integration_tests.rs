//! Integration tests for invisitext
//!
//! Covers the round trip through every embedding mode, the optional
//! compression/encryption layers, auto-detection, capacity limits and the
//! scanner.

use invisitext::crypto::{Identity, Plaintext};
use invisitext::{
    capacity, decode, decode_bytes, decode_with, encode, encode_bytes, encode_with, payload_bits,
    scan, Capacity, DecodeMode, DecoderConfig, EmbedMode, EncoderConfig, StegoError, SYMBOL_0,
    SYMBOL_1,
};
use proptest::prelude::*;

const COVER: &str = "The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Sphinx of black quartz, judge my vow. \
                     The five boxing wizards jump quickly.";

/// Concrete scenario: tail encode, auto decode
#[test]
fn test_hi_in_tail_mode() {
    let config = EncoderConfig::new(EmbedMode::Tail);
    let encoded = encode("Hi!", "This is a test message.", &config).unwrap();
    let config = DecoderConfig::new("auto".parse().unwrap());

    assert_eq!(decode(&encoded, &config).unwrap(), "Hi!");
}

/// Test basic roundtrip in each mode with the matching decode mode
#[test]
fn test_roundtrip_each_mode() {
    let message = "meet at dawn";

    for mode in EmbedMode::ALL {
        let encoded = encode(message, COVER, &EncoderConfig::new(mode)).unwrap();
        let decoded = decode(&encoded, &DecoderConfig::new(mode.into())).unwrap();
        assert_eq!(decoded, message, "mode {mode}");
    }
}

/// Rendered text is unchanged: stripping the symbols gives back the cover
#[test]
fn test_visible_text_preserved() {
    for mode in EmbedMode::ALL {
        let encoded = encode("x", COVER, &EncoderConfig::new(mode)).unwrap();
        let visible: String = encoded
            .chars()
            .filter(|&c| c != SYMBOL_0 && c != SYMBOL_1)
            .collect();
        assert_eq!(visible, COVER);
    }
}

/// Auto-detect recovers tail and interleaved output without being told
#[test]
fn test_auto_detect() {
    let message = "auto ✓";

    for mode in EmbedMode::ALL {
        let encoded = encode(message, COVER, &EncoderConfig::new(mode)).unwrap();
        assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), message);
    }
}

/// Cover with room for the salt, nonce and tag in every mode
fn roomy_cover() -> String {
    "🌍 sunny, 🎉 party, 👨\u{200D}👩\u{200D}👧 family. ".repeat(60)
}

/// Test compression + encryption roundtrip with the right passphrase
#[test]
fn test_roundtrip_compressed_encrypted() {
    let cover = roomy_cover();

    for message in ["Repeat after me. ".repeat(20), "héllo ✓ world".to_string()] {
        for mode in EmbedMode::ALL {
            let encoder = EncoderConfig::new(mode)
                .with_compression()
                .with_passphrase("correct horse");
            let encoded = encode(&message, &cover, &encoder).unwrap();

            let explicit = DecoderConfig::new(mode.into()).with_passphrase("correct horse");
            assert_eq!(decode(&encoded, &explicit).unwrap(), message, "mode {mode}");

            let auto = DecoderConfig::default().with_passphrase("correct horse");
            assert_eq!(decode(&encoded, &auto).unwrap(), message, "mode {mode}");
        }
    }
}

/// Compression shrinks the tail for repetitive messages
#[test]
fn test_compression_reduces_symbols() {
    let message = "la ".repeat(100);
    let plain = encode(&message, "", &EncoderConfig::default()).unwrap();
    let packed = encode(&message, "", &EncoderConfig::default().with_compression()).unwrap();

    assert!(scan(&packed).symbol_count < scan(&plain).symbol_count);
}

/// Wrong passphrase fails loudly, never returns a wrong message
#[test]
fn test_wrong_passphrase_fails() {
    let cover = roomy_cover();

    for mode in EmbedMode::ALL {
        for compress in [false, true] {
            let mut encoder = EncoderConfig::new(mode).with_passphrase("right");
            encoder.compress = compress;
            let encoded = encode("top secret", &cover, &encoder).unwrap();

            let decoder = DecoderConfig::new(mode.into()).with_passphrase("wrong");
            assert!(
                matches!(
                    decode(&encoded, &decoder),
                    Err(StegoError::DecryptionFailed(_))
                ),
                "mode {mode}, compress {compress}"
            );
        }
    }
}

/// Missing passphrase on an encrypted payload
#[test]
fn test_encrypted_without_passphrase() {
    let encoded = encode("x", "", &EncoderConfig::default().with_passphrase("pw")).unwrap();

    assert!(matches!(
        decode(&encoded, &DecoderConfig::default()),
        Err(StegoError::PassphraseRequired)
    ));
}

/// Interleaved capacity is one bit per code point
#[test]
fn test_capacity_boundary_interleaved() {
    // header + N bytes of 'A' need 8 * (N + 1) bits
    assert!(matches!(
        encode("A", "Hi", &EncoderConfig::new(EmbedMode::Interleaved)),
        Err(StegoError::CapacityExceeded { needed: 16, available: 2, .. })
    ));

    let config = EncoderConfig::new(EmbedMode::Interleaved);
    for n in 0..4 {
        let message = "A".repeat(n);
        let needed = 8 * (n + 1);

        let exact = "x".repeat(needed);
        let encoded = encode(&message, &exact, &config).unwrap();
        assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), message);

        let short = "x".repeat(needed - 1);
        assert!(matches!(
            encode(&message, &short, &config),
            Err(StegoError::CapacityExceeded { .. })
        ));
    }
}

/// Grapheme-aware capacity counts clusters, so emoji covers hold fewer bits
#[test]
fn test_grapheme_capacity_with_emoji() {
    let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
    let cover = family.repeat(16);

    assert_eq!(capacity(&cover, EmbedMode::GraphemeAware), Capacity::Bits(16));
    assert_eq!(capacity(&cover, EmbedMode::Interleaved), Capacity::Bits(112));

    let config = EncoderConfig::new(EmbedMode::GraphemeAware);
    let encoded = encode("A", &cover, &config).unwrap();
    assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), "A");
    assert!(encode("AB", &cover, &config).is_err());
}

/// Symbols never split a grapheme cluster
#[test]
fn test_grapheme_aware_does_not_split_emoji() {
    let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
    let cover = format!("{family}{family}{family}{family}{family}{family}{family}{family}");
    let encoded = encode("", &cover, &EncoderConfig::new(EmbedMode::GraphemeAware)).unwrap();

    for piece in encoded.split([SYMBOL_0, SYMBOL_1]).filter(|s| !s.is_empty()) {
        assert_eq!(piece, family);
    }
}

/// `payload_bits` predicts what encode needs
#[test]
fn test_payload_bits_matches_encode() {
    let config = EncoderConfig::default().with_compression().with_passphrase("pw");
    let bits = payload_bits("predictable", &config).unwrap();
    let encoded = encode("predictable", "", &config).unwrap();

    assert_eq!(scan(&encoded).symbol_count, bits);
}

/// Test scanner on encoded and clean text
#[test]
fn test_scanner_accuracy() {
    let encoded = encode("scan me", COVER, &EncoderConfig::default()).unwrap();
    let report = scan(&encoded);

    assert!(report.has_hidden_data);
    assert_eq!(report.symbol_count, 64);
    assert_eq!(report.estimated_bytes, 8);
    assert!(!scan(COVER).has_hidden_data);

    // Idempotent and non-mutating
    assert_eq!(scan(&encoded), report);
}

/// Empty message and empty cover are both fine
#[test]
fn test_empty_inputs() {
    let encoded = encode("", "Cover text", &EncoderConfig::default()).unwrap();
    assert!(encoded.starts_with("Cover text"));
    assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), "");

    let encoded = encode("msg", "", &EncoderConfig::default()).unwrap();
    assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), "msg");
}

/// Plain text has nothing to decode
#[test]
fn test_no_hidden_data() {
    assert!(matches!(
        decode(COVER, &DecoderConfig::default()),
        Err(StegoError::NoHiddenData)
    ));
}

/// Cover text that already carries VS16 (emoji presentation) still round-trips
#[test]
fn test_cover_with_existing_variation_selector() {
    let cover =
        "I \u{2764}\u{FE0F} Rust and \u{263A}\u{FE0E} Unicode, every single day of the week.";

    for mode in EmbedMode::ALL {
        let encoded = encode("ok", cover, &EncoderConfig::new(mode)).unwrap();
        assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), "ok");
    }
}

/// Binary payloads go through encode_bytes / decode_bytes
#[test]
fn test_binary_roundtrip() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode_bytes(&data, COVER, &EncoderConfig::default().with_compression()).unwrap();

    assert_eq!(decode_bytes(&encoded, &DecoderConfig::default()).unwrap(), data);
}

/// Injected identity collaborators still honour the header flags
#[test]
fn test_fake_collaborators_roundtrip() {
    let encoder = EncoderConfig::new(EmbedMode::Interleaved)
        .with_compression()
        .with_passphrase("ignored");
    let encoded = encode_with(b"fake", COVER, &encoder, &Identity, &Plaintext).unwrap();

    // Identity collaborators add no overhead: header + 4 bytes
    assert_eq!(scan(&encoded).symbol_count, 40);

    let decoder = DecoderConfig::new(DecodeMode::Interleaved).with_passphrase("ignored");
    assert_eq!(decode_with(&encoded, &decoder, &Identity, &Plaintext).unwrap(), b"fake");
}

/// Encoding and decoding on separate threads share nothing
#[test]
fn test_parallel_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let message = format!("thread {i}");
                let config = EncoderConfig::new(EmbedMode::Interleaved);
                let encoded = encode(&message, COVER, &config).unwrap();
                decode(&encoded, &DecoderConfig::default()).unwrap() == message
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_roundtrip_any_message_any_cover(message in any::<String>(), cover in any::<String>()) {
        for mode in EmbedMode::ALL {
            let config = EncoderConfig::new(mode);
            let needed = payload_bits(&message, &config).unwrap();
            if !capacity(&cover, mode).fits(needed) {
                continue;
            }
            let encoded = encode(&message, &cover, &config).unwrap();
            let decoded = decode(&encoded, &DecoderConfig::new(mode.into())).unwrap();
            prop_assert_eq!(&decoded, &message);
        }
    }

    #[test]
    fn prop_tail_autodetect(message in ".{0,40}", cover in "\\PC{0,80}") {
        let encoded = encode(&message, &cover, &EncoderConfig::default()).unwrap();
        prop_assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), message);
    }

    #[test]
    fn prop_interleaved_autodetect(message in "[a-z]{0,8}", cover in "[A-Za-z ]{80,120}") {
        let config = EncoderConfig::new(EmbedMode::Interleaved);
        let encoded = encode(&message, &cover, &config).unwrap();
        prop_assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), message);
    }
}

proptest! {
    // Each case runs Argon2 twice per mode
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_roundtrip_compressed_encrypted(message in ".{0,24}", passphrase in "[a-z]{1,12}") {
        let cover = roomy_cover();
        for mode in EmbedMode::ALL {
            let config = EncoderConfig::new(mode)
                .with_compression()
                .with_passphrase(passphrase.clone());
            let encoded = encode(&message, &cover, &config).unwrap();

            let decoder = DecoderConfig::new(mode.into()).with_passphrase(passphrase.clone());
            prop_assert_eq!(decode(&encoded, &decoder).unwrap(), message.clone());
        }
    }
}

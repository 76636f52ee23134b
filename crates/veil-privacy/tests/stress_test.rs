//! Stress tests: entity coverage, false positive resistance, idempotency,
//! throughput, and long inputs.

use std::sync::Arc;
use std::time::Instant;

use veil_core::traits::ISanitizer;
use veil_privacy::SanitizationPipeline;

fn pipeline() -> SanitizationPipeline {
    SanitizationPipeline::with_defaults().unwrap()
}

// ── Entity coverage ──────────────────────────────────────────────────────

#[test]
fn stress_all_builtin_types_detected() {
    let pipeline = pipeline();

    let samples = [
        ("email", "Contact john.doe@company.org for details", "<EMAIL>"),
        ("phone", "Call (555) 123-4567 now", "<PHONE>"),
        ("ssn", "SSN: 234-56-7890", "<SSN>"),
        ("credit_card", "Card: 4111 1111 1111 1111", "<CREDIT_CARD>"),
        ("ipv4", "Server at 192.168.1.100 is down", "<IP_ADDRESS>"),
        (
            "ipv6",
            "host 2001:0db8:85a3:0000:0000:8a2e:0370:7334 up",
            "<IP_ADDRESS>",
        ),
        ("mac", "nic 00:1A:2B:3C:4D:5E attached", "<MAC_ADDRESS>"),
        ("iban", "IBAN GB82WEST12345698765432 ok", "<IBAN>"),
    ];

    for (name, input, placeholder) in &samples {
        let result = pipeline.sanitize(input, "en").unwrap();
        assert!(
            result.sanitized_text.contains(placeholder),
            "'{}' not detected in '{}' → '{}'",
            name,
            input,
            result.sanitized_text
        );
        assert_eq!(result.detections.len(), 1, "{name}: {:?}", result.detections);
    }
}

// ── Idempotency ──────────────────────────────────────────────────────────

#[test]
fn stress_idempotency_100_rounds() {
    let pipeline = pipeline();
    let inputs = [
        "Email john.doe@company.org and call (555) 123-4567",
        "SSN 234-56-7890 and card 4111 1111 1111 1111",
        "Server 10.0.0.1 behind 00:1A:2B:3C:4D:5E",
    ];

    for input in &inputs {
        let first = pipeline.sanitize(input, "en").unwrap();
        let mut text = first.sanitized_text.clone();
        for _ in 0..100 {
            let again = pipeline.sanitize(&text, "en").unwrap();
            assert!(again.detections.is_empty(), "re-detected in '{text}'");
            text = again.sanitized_text;
        }
        assert_eq!(text, first.sanitized_text);
    }
}

// ── False positive resistance ────────────────────────────────────────────

#[test]
fn stress_false_positives_code_patterns() {
    let pipeline = pipeline();

    let safe_inputs = [
        "id: 550e8400-e29b-41d4-a716-446655440000",
        "color: #FF5733",
        "fn process_data(input: &str) -> Result<()>",
        "const MAX_RETRIES: u32 = 3;",
        "release 1.2.3 shipped",
        "email: <EMAIL>",
        "order 000-00-0000 is a dummy",
        "card 4111 1111 1111 1112",
    ];

    for input in &safe_inputs {
        let result = pipeline.sanitize(input, "en").unwrap();
        assert!(
            result.detections.is_empty(),
            "false positive for '{}': {:?}",
            input,
            result.detections
        );
        assert_eq!(&result.sanitized_text, input);
    }
}

// ── Many entities in one text ────────────────────────────────────────────

#[test]
fn stress_multiple_entities_single_text() {
    let pipeline = pipeline();
    let input = "Config:\n  email: admin@company.org\n  phone: (555) 987-6543\n  ssn: 234-56-7890\n  ip: 172.16.0.4";

    let result = pipeline.sanitize(input, "en").unwrap();

    assert_eq!(result.detections.len(), 4, "{:?}", result.detections);
    assert!(!result.sanitized_text.contains("admin@company.org"));
    assert!(!result.sanitized_text.contains("987-6543"));
    assert!(!result.sanitized_text.contains("234-56-7890"));
    assert!(result
        .detections
        .windows(2)
        .all(|w| w[0].end <= w[1].start));
}

// ── Throughput ───────────────────────────────────────────────────────────

#[test]
fn stress_throughput_1000_sanitizations() {
    let pipeline = pipeline();
    let input = "Contact john.doe@example.com at (555) 123-4567 from 10.1.2.3";

    let start = Instant::now();
    for _ in 0..1000 {
        let _ = pipeline.sanitize(input, "en").unwrap();
    }
    let elapsed = start.elapsed();

    assert!(
        elapsed.as_secs() < 10,
        "1000 sanitizations took {:?} (>10s)",
        elapsed
    );
}

#[test]
fn stress_concurrent_callers_share_one_pipeline() {
    let pipeline = Arc::new(pipeline());
    let input = "mail a@b.io or c@d.io";
    let expected = pipeline.sanitize(input, "en").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            std::thread::spawn(move || {
                (0..200)
                    .map(|_| pipeline.sanitize(input, "en").unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}

// ── Edge cases ───────────────────────────────────────────────────────────

#[test]
fn stress_very_long_text() {
    let pipeline = pipeline();
    // ~10KB of text with one email buried in the middle.
    let padding = "Normal text about software engineering. ".repeat(250);
    let input = format!("{padding}mail jane@example.com here. {padding}");

    let start = Instant::now();
    let result = pipeline.sanitize(&input, "en").unwrap();
    let elapsed = start.elapsed();

    assert_eq!(result.detections.len(), 1);
    let email_start = padding.chars().count() + "mail ".len();
    assert_eq!(result.detections[0].start, email_start);
    assert_eq!(result.detections[0].end, email_start + "jane@example.com".len());
    assert!(
        elapsed.as_secs() < 5,
        "long text sanitization took {:?}",
        elapsed
    );
}

#[test]
fn stress_batch_matches_sequential() {
    let pipeline = pipeline();
    let texts: Vec<String> = (0..500)
        .map(|i| format!("user{i}@example.com called 555-010-{:04}", i % 10_000))
        .collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();

    let batch = pipeline.sanitize_batch(&refs, "en").unwrap();
    assert_eq!(batch.len(), texts.len());
    for (text, result) in refs.iter().zip(&batch) {
        assert_eq!(result, &pipeline.sanitize(text, "en").unwrap());
        assert_eq!(result.sanitized_text, "<EMAIL> called <PHONE>");
    }
}

use proptest::prelude::*;
use veil_core::traits::ISanitizer;
use veil_core::{EntityType, Text};
use veil_privacy::SanitizationPipeline;

/// A text fragment and, when it is PII, the entity it should be reported as.
#[derive(Debug, Clone)]
struct Piece {
    text: String,
    entity: Option<EntityType>,
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        4 => "[a-z]{2,8}".prop_map(|w| Piece { text: w, entity: None }),
        1 => ("[a-z]{3,8}", "[a-z]{3,8}").prop_map(|(user, domain)| Piece {
            text: format!("{user}@{domain}.com"),
            entity: Some(EntityType::EMAIL),
        }),
        1 => prop_oneof![Just("123-45-6789"), Just("234-56-7890")].prop_map(|s| Piece {
            text: s.to_string(),
            entity: Some(EntityType::SSN),
        }),
        1 => prop_oneof![Just("555-123-4567"), Just("(555) 987-6543")].prop_map(|s| Piece {
            text: s.to_string(),
            entity: Some(EntityType::PHONE),
        }),
        1 => Just(Piece {
            text: "4111 1111 1111 1111".to_string(),
            entity: Some(EntityType::CREDIT_CARD),
        }),
    ]
}

fn record() -> impl Strategy<Value = (String, Vec<(EntityType, String)>)> {
    prop::collection::vec(piece(), 0..10).prop_map(|pieces| {
        // Space-separated digit groups would let a card number start inside
        // the preceding number, so pieces are comma-separated.
        let text = pieces
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let pii = pieces
            .into_iter()
            .filter_map(|p| p.entity.map(|e| (e, p.text)))
            .collect();
        (text, pii)
    })
}

// ── Detections never overlap ─────────────────────────────────────────────

proptest! {
    #[test]
    fn detections_never_overlap(text in ".{0,200}") {
        let pipeline = SanitizationPipeline::with_defaults().unwrap();
        let result = pipeline.sanitize(&text, "en").unwrap();
        for pair in result.detections.windows(2) {
            prop_assert!(pair[0].start < pair[0].end);
            prop_assert!(
                pair[0].end <= pair[1].start,
                "overlapping detections: {:?}",
                pair
            );
        }
    }

    #[test]
    fn sanitization_is_deterministic(text in ".{0,200}") {
        let pipeline = SanitizationPipeline::with_defaults().unwrap();
        let first = pipeline.sanitize(&text, "en").unwrap();
        let second = pipeline.sanitize(&text, "en").unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── Reports point at the original text ───────────────────────────────────

proptest! {
    #[test]
    fn every_injected_pii_is_reported_at_its_input_position((text, pii) in record()) {
        let pipeline = SanitizationPipeline::with_defaults().unwrap();
        let result = pipeline.sanitize(&text, "en").unwrap();
        let indexed = Text::new(&text);

        prop_assert_eq!(result.detections.len(), pii.len());
        for (detection, (entity, original)) in result.detections.iter().zip(pii.iter()) {
            prop_assert_eq!(&detection.entity_type, entity);
            prop_assert_eq!(
                indexed.slice(detection.start, detection.end),
                Some(original.as_str())
            );
        }
        for (_, original) in &pii {
            prop_assert!(
                !result.sanitized_text.contains(original.as_str()),
                "raw PII left in output: {}",
                result.sanitized_text
            );
        }
    }

    #[test]
    fn sanitized_output_is_not_detected_again((text, _pii) in record()) {
        let pipeline = SanitizationPipeline::with_defaults().unwrap();
        let first = pipeline.sanitize(&text, "en").unwrap();
        let second = pipeline.sanitize(&first.sanitized_text, "en").unwrap();
        prop_assert!(
            second.detections.is_empty(),
            "placeholders re-detected: {:?}",
            second.detections
        );
        prop_assert_eq!(&first.sanitized_text, &second.sanitized_text);
    }
}

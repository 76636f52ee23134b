use veil_core::{AcceptedSpan, CandidateSpan, DetectionEntry, EntityType, SanitizationResult};

#[test]
fn entity_type_serializes_as_bare_string() {
    let json = serde_json::to_string(&EntityType::EMAIL).unwrap();
    assert_eq!(json, "\"EMAIL\"");

    let parsed: EntityType = serde_json::from_str("\"CREDIT_CARD\"").unwrap();
    assert_eq!(parsed, EntityType::CREDIT_CARD);
}

#[test]
fn runtime_names_normalize_to_constants() {
    assert_eq!(EntityType::new(" email "), EntityType::EMAIL);
    assert_eq!(EntityType::from("Phone"), EntityType::PHONE);
    assert_eq!(EntityType::new("employee_id").as_str(), "EMPLOYEE_ID");
}

#[test]
fn entity_types_order_by_name() {
    let mut types = vec![
        EntityType::PHONE,
        EntityType::EMAIL,
        EntityType::new("ZIP"),
        EntityType::CREDIT_CARD,
    ];
    types.sort();
    let names: Vec<&str> = types.iter().map(EntityType::as_str).collect();
    assert_eq!(names, vec!["CREDIT_CARD", "EMAIL", "PHONE", "ZIP"]);
}

#[test]
fn detection_entry_uses_type_key() {
    let entry = DetectionEntry {
        entity_type: EntityType::PERSON,
        start: 8,
        end: 16,
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"type": "PERSON", "start": 8, "end": 16})
    );
}

#[test]
fn accepted_span_keeps_candidate_coordinates() {
    let candidate = CandidateSpan::new(EntityType::EMAIL, 20, 36, 0.95, "pattern:email");
    assert_eq!(candidate.len(), 16);
    assert!(!candidate.is_empty());

    let accepted = AcceptedSpan::from(candidate);
    let entry = DetectionEntry::from(&accepted);
    assert_eq!((entry.start, entry.end), (20, 36));
    assert_eq!(entry.entity_type, EntityType::EMAIL);
}

#[test]
fn inverted_candidates_are_empty() {
    let c = CandidateSpan::new(EntityType::PHONE, 9, 4, 0.5, "custom");
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
}

#[test]
fn overlap_is_half_open() {
    let a = AcceptedSpan {
        entity_type: EntityType::EMAIL,
        start: 0,
        end: 5,
        score: 1.0,
    };
    let touching = AcceptedSpan { start: 5, end: 9, ..a.clone() };
    let nested = AcceptedSpan { start: 2, end: 3, ..a.clone() };
    assert!(!a.overlaps(&touching));
    assert!(a.overlaps(&nested));
    assert!(nested.overlaps(&a));
}

#[test]
fn unchanged_result_has_no_detections() {
    let result = SanitizationResult::unchanged("nothing here");
    assert_eq!(result.sanitized_text, "nothing here");
    assert!(!result.has_detections());
}

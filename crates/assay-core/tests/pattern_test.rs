use assay_core::{NormalizedPattern, Pattern};
use serde_json::json;

#[test]
fn full_pattern_deserializes() {
    let p = Pattern::from_value(json!({
        "pattern_id": "PAT-001",
        "name": "Invoice approval",
        "description": "Route invoices for approval",
        "domain": "finance",
        "feasibility": "Automatable",
        "pattern_type": ["workflow_automation"],
        "tech_stack": ["Python", "Celery"],
        "compliance_requirements": ["SOX"],
        "integrations": ["SAP"],
        "confidence_score": 0.9,
        "complexity": "Medium"
    }))
    .unwrap();
    assert_eq!(p.pattern_id, "PAT-001");
    assert_eq!(p.tech_stack, vec!["Python", "Celery"]);
    assert_eq!(p.compliance_requirements, vec!["SOX"]);
    assert_eq!(p.confidence_score, Some(0.9));
    assert!(p.extra.is_empty());
}

#[test]
fn missing_fields_default_to_empty() {
    let p = Pattern::from_json_str(r#"{"pattern_id": "PAT-002"}"#).unwrap();
    assert!(p.tech_stack.is_empty());
    assert!(p.pattern_type.is_empty());
    assert!(p.compliance_requirements.is_empty());
    assert!(p.domain.is_none());
    assert!(p.has_id());
}

#[test]
fn malformed_collections_are_coerced_not_rejected() {
    let p = Pattern::from_value(json!({
        "pattern_id": "PAT-003",
        "tech_stack": {"backend": "Rust"},
        "pattern_type": "auth",
        "compliance_requirements": ["GDPR", 7, null],
        "confidence_score": "0.75"
    }))
    .unwrap();
    assert!(p.tech_stack.is_empty());
    assert_eq!(p.pattern_type, vec!["auth"]);
    assert_eq!(p.compliance_requirements, vec!["GDPR"]);
    assert_eq!(p.confidence_score, Some(0.75));
}

#[test]
fn unknown_fields_round_trip() {
    let source = json!({
        "pattern_id": "PAT-004",
        "estimated_effort": "2-4 weeks",
        "llm_insights": {"score": 3}
    });
    let p = Pattern::from_value(source).unwrap();
    assert_eq!(p.extra["estimated_effort"], json!("2-4 weeks"));

    let back = serde_json::to_value(&p).unwrap();
    assert_eq!(back["estimated_effort"], json!("2-4 weeks"));
    assert_eq!(back["llm_insights"]["score"], json!(3));
}

#[test]
fn blank_id_is_not_an_id() {
    let p = Pattern::new("   ");
    assert!(!p.has_id());
    assert!(!Pattern::default().has_id());
}

#[test]
fn normalized_view_extracts_keywords() {
    let mut p = Pattern::new("PAT-005");
    p.description = "Automated customer onboarding with identity verification".into();
    let n = NormalizedPattern::from_pattern(&p);
    assert!(n.business_keywords.contains("customer"));
    assert!(n.business_keywords.contains("onboarding"));
    assert!(n.business_keywords.contains("verification"));
}

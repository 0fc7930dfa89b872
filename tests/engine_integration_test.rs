//! End-to-end flow: route a request, gate it on dependencies, validate the
//! generated output, record it, and catch the follow-up duplicate.

use brandloom::{
    AgentId, BrandContext, CapabilityRegistry, CheckKind, DuplicateDetector, IntentRouter,
    IsolationGuard, JobRequest, PriorOutputRecord, QualityGate, ToneOfVoice, WorkflowValidator,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn acme() -> BrandContext {
    BrandContext::new("acme", ToneOfVoice::Bold)
        .with_usp(vec!["the only zero-setup analytics".to_string()])
        .with_audience("indie saas founders")
        .with_visual_mood(vec!["neon".to_string(), "grainy".to_string()])
        .with_pricing_model("freemium")
}

#[test]
fn full_session_flow() {
    init_tracing();

    let registry = CapabilityRegistry::new();
    registry.verify_integrity().unwrap();

    let router = IntentRouter::new();
    let workflow = WorkflowValidator::new(registry);
    let gate = QualityGate::with_defaults();
    let detector = DuplicateDetector::new();
    let guard = IsolationGuard::new();

    let brand = acme();
    let mut history: Vec<PriorOutputRecord> = Vec::new();

    // First request: market research.
    let request = JobRequest::new(
        "analyze the market for our product",
        vec!["market".into(), "competitor".into(), "swot".into()],
        "acme",
    );

    assert!(guard.check_isolation(&brand, &request.brand_id).allowed);
    assert!(!detector.detect(&request, &history).is_duplicate);

    let decision = router.route(&request);
    assert_eq!(decision.primary, AgentId::MarketAnalyzer);
    assert!(decision.confidence > 0.0);

    let readiness = workflow.validate_dependencies(decision.primary.as_str(), &[]);
    assert!(readiness.is_ready);

    // Simulated completion-service output for the market analyst.
    let output = json!({
        "task": "market analysis",
        "result": "the zero-setup analytics niche grows 14% yearly [source: industry report]",
        "reasoning": "competitor pricing pages and funding data",
        "sources": ["industry report"],
        "swot": {"strengths": ["zero setup"]},
        "competitors": {"direct": ["globex analytics"]}
    });

    let verdict = gate.validate(decision.primary, &output, Some(&brand), &history);
    assert!(verdict.passed, "score was {}", verdict.score);

    history.push(PriorOutputRecord::new(
        decision.primary,
        request.intent.clone(),
        output,
    ));

    // The same request again is flagged as duplicate work.
    let repeat = JobRequest::new(
        "analyze the market for our product",
        vec!["market".into()],
        "acme",
    );
    let dup = detector.detect(&repeat, &history);
    assert!(dup.is_duplicate);
    assert_eq!(dup.duplicate_agents, vec![AgentId::MarketAnalyzer]);
}

#[test]
fn positioning_waits_for_market_analysis() {
    let workflow = WorkflowValidator::new(CapabilityRegistry::new());

    let blocked = workflow.validate_dependencies("positioning-strategist", &[]);
    assert!(!blocked.is_ready);
    assert_eq!(
        blocked.missing_dependencies,
        vec!["market-analyzer".to_string()]
    );

    let ready =
        workflow.validate_dependencies("positioning-strategist", &[AgentId::MarketAnalyzer]);
    assert!(ready.is_ready);
}

#[test]
fn copied_output_is_caught_by_the_gate_not_the_detector() {
    let gate = QualityGate::with_defaults();
    let detector = DuplicateDetector::new();

    let original = "three bold headlines for the freemium launch [source: brief]";
    let history = vec![PriorOutputRecord::new(
        AgentId::Copywriter,
        "write launch headlines",
        json!({"task": "headlines", "result": original, "reasoning": "brief"}),
    )];

    // A reworded request slips past the exact-match duplicate detector.
    let reworded = JobRequest::new("write the launch headlines", vec!["copy".into()], "acme");
    assert!(!detector.detect(&reworded, &history).is_duplicate);

    // A near-identical regenerated result is still caught by anti-copycat.
    let regenerated = json!({
        "task": "headlines",
        "result": "three bold headlines for the freemium relaunch [source: brief]",
        "reasoning": "brief",
        "variants": []
    });
    let verdict = gate.validate(AgentId::Copywriter, &regenerated, None, &history);
    assert!(!verdict.check(CheckKind::AntiCopycat).unwrap().passed);
}

#[test]
fn cross_brand_request_is_refused() {
    let guard = IsolationGuard::new();
    let check = guard.check_isolation(&acme(), "globex");
    assert!(!check.allowed);
}

#[test]
fn escalation_path_for_unroutable_request() {
    let router = IntentRouter::new();
    let workflow = WorkflowValidator::new(CapabilityRegistry::new());

    let request = JobRequest::new(
        "qwerty",
        vec!["xyz".into(), "unknown".into()],
        "acme",
    );
    let decision = router.route(&request);
    assert!(decision.is_escalation());

    // The sentinel agent is always ready to run.
    let readiness = workflow.validate_dependencies(decision.primary.as_str(), &[]);
    assert!(readiness.is_ready);
}

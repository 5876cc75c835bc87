use enforcement_types::{EvaluatorResult, ReasonCode, RewriteGuidance};

/// Rewrite class and hints for a reason code, if the code has one.
pub fn guidance_for(code: ReasonCode) -> Option<RewriteGuidance> {
    let guidance = match code {
        ReasonCode::EmotionalDependencyRisk => RewriteGuidance::new(
            "REDUCE_EMOTIONAL_DEPENDENCY",
            [
                "avoid exclusivity",
                "encourage autonomy",
                "neutral supportive tone",
            ],
        ),
        ReasonCode::ManipulativeBehaviorDetected => RewriteGuidance::new(
            "REMOVE_MANIPULATION",
            ["remove pressure framing", "avoid guilt language"],
        ),
        ReasonCode::PlatformPolicyRewrite => RewriteGuidance::new(
            "PLATFORM_SAFE_REWRITE",
            ["remove disallowed phrasing", "comply with platform norms"],
        ),
        ReasonCode::LowKarmaConfidence => RewriteGuidance::new(
            "CONFIDENCE_SUPPORTIVE_TONE",
            [
                "use steady, non-hyped language",
                "affirm without dependency",
                "prefer clarity over persuasion",
            ],
        ),
        ReasonCode::AgeRestrictionViolation
        | ReasonCode::RegionPolicyBlock
        | ReasonCode::CriticalSafetyRisk
        | ReasonCode::SexualContentEscalation => return None,
    };
    Some(guidance)
}

/// Guidance for the first triggered result, in registration order, whose
/// code maps to a rewrite class.
pub fn generate_rewrite_guidance(results: &[EvaluatorResult]) -> Option<RewriteGuidance> {
    results
        .iter()
        .filter(|r| r.triggered)
        .filter_map(|r| r.code)
        .find_map(guidance_for)
}

//! Property tests over randomly generated inputs.

use std::sync::Arc;

use enforcement_config::{ConfigSnapshot, RuntimeConfig};
use enforcement_engine::{resolve, EnforcementEngine, MemoryAuditSink};
use enforcement_types::{
    Action, AgeGateStatus, EnforcementInput, EvaluatorResult, ReasonCode, KILL_SWITCH_TRACE_ID,
};
use proptest::prelude::*;

const FLAGS: [&str; 5] = [
    "HIGH_RISK",
    "SEXUAL_ESCALATION",
    "EMOTIONAL_MANIPULATION",
    "PLATFORM_VIOLATION",
    "UNKNOWN_TAG",
];

fn region_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("IN".to_string()),
        Just("EU".to_string()),
        Just("US".to_string()),
        Just("RESTRICTED".to_string()),
    ]
}

fn input_strategy() -> impl Strategy<Value = EnforcementInput> {
    (
        0.0f64..=1.0,
        any::<bool>(),
        region_strategy(),
        -1.0f64..=1.0,
        proptest::sample::subsequence(FLAGS.to_vec(), 0..=FLAGS.len()),
    )
        .prop_map(|(dependency, age_blocked, region, karma, flags)| {
            EnforcementInput::builder("generated")
                .dependency_score(dependency)
                .age_gate_status(if age_blocked {
                    AgeGateStatus::Blocked
                } else {
                    AgeGateStatus::Allowed
                })
                .region_policy(region)
                .karma_score(karma)
                .risk_flags(flags)
                .build()
        })
}

fn vote_strategy() -> impl Strategy<Value = EvaluatorResult> {
    prop_oneof![
        Just(EvaluatorResult::pass("quiet")),
        Just(EvaluatorResult::triggered(
            "rewrite",
            Action::Rewrite,
            ReasonCode::PlatformPolicyRewrite,
        )),
        Just(EvaluatorResult::triggered(
            "block",
            Action::Block,
            ReasonCode::CriticalSafetyRisk,
        )),
    ]
}

fn engine() -> EnforcementEngine {
    EnforcementEngine::new(Arc::new(MemoryAuditSink::new()))
}

fn demo_config() -> ConfigSnapshot {
    ConfigSnapshot::from_runtime(
        RuntimeConfig::default()
            .with_env("demo")
            .with_region_threshold("EU", -0.4)
            .with_overlay("demo", "EU", -0.2),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn any_block_vote_blocks(votes in proptest::collection::vec(vote_strategy(), 0..12)) {
        let decision = resolve(&votes);
        let has_block = votes.iter().any(|v| v.triggered && v.action == Action::Block);
        let has_rewrite = votes.iter().any(|v| v.triggered && v.action == Action::Rewrite);

        if has_block {
            prop_assert_eq!(decision, Action::Block);
        } else if has_rewrite {
            prop_assert_eq!(decision, Action::Rewrite);
        } else {
            prop_assert_eq!(decision, Action::Execute);
        }

        let mut reversed = votes.clone();
        reversed.reverse();
        prop_assert_eq!(resolve(&reversed), decision);
    }

    #[test]
    fn decisions_are_deterministic(input in input_strategy()) {
        let engine = engine();
        let config = demo_config();
        let a = engine.enforce(&input, &config).unwrap();
        let b = engine.enforce(&input, &config).unwrap();
        prop_assert_eq!(a.decision(), b.decision());
        prop_assert_eq!(a.rewrite_class(), b.rewrite_class());
    }

    #[test]
    fn guidance_present_iff_rewrite(input in input_strategy()) {
        let decision = engine().enforce(&input, &demo_config()).unwrap();
        prop_assert_eq!(
            decision.decision() == Action::Rewrite,
            decision.rewrite_guidance().is_some()
        );
    }

    #[test]
    fn high_risk_always_blocks(input in input_strategy()) {
        let mut input = input;
        input.risk_flags.insert("HIGH_RISK".to_string());
        let decision = engine().enforce(&input, &demo_config()).unwrap();
        prop_assert_eq!(decision.decision(), Action::Block);
    }

    #[test]
    fn kill_switch_dominates(input in input_strategy()) {
        let config = ConfigSnapshot::from_runtime(
            RuntimeConfig::default().with_kill_switch(true),
        ).unwrap();
        let decision = engine().enforce(&input, &config).unwrap();
        prop_assert_eq!(decision.decision(), Action::Block);
        prop_assert_eq!(decision.trace_id(), KILL_SWITCH_TRACE_ID);
    }

    #[test]
    fn threshold_always_within_karma_domain(raw in -50.0f64..50.0) {
        let runtime = RuntimeConfig::default().with_region_threshold("EU", raw);
        let threshold = runtime.karma_threshold_for("EU");
        prop_assert!((-1.0..=1.0).contains(&threshold));
    }
}

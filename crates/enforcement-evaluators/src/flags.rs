//! Risk flag tags raised by the upstream signal collaborator.

pub const HIGH_RISK: &str = "HIGH_RISK";
pub const SEXUAL_ESCALATION: &str = "SEXUAL_ESCALATION";
pub const EMOTIONAL_MANIPULATION: &str = "EMOTIONAL_MANIPULATION";
pub const PLATFORM_VIOLATION: &str = "PLATFORM_VIOLATION";

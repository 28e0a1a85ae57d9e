use crate::config::ReportConfig;
use ferry_core::{DestinationEffect, EffectType};
use serde::Serialize;

/// Exit status for a no-op run when `fail_on_noop` is set.
pub const NO_OP_EXIT_CODE: i32 = 4;

/// Overall result of a set of destination effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    /// Nothing was written: no effects, or only NOOP ones.
    NoOp,
    Failure,
}

impl Outcome {
    pub fn evaluate<'a>(
        effects: impl IntoIterator<Item = &'a DestinationEffect>,
        config: &ReportConfig,
    ) -> Self {
        let mut any_written = false;
        for effect in effects {
            match effect.effect_type() {
                EffectType::Error => return Outcome::Failure,
                EffectType::InsufficientApprovals if config.fail_on_insufficient_approvals => {
                    return Outcome::Failure
                }
                EffectType::InsufficientApprovals => {}
                EffectType::Created | EffectType::Updated => any_written = true,
                EffectType::Noop => {}
            }
        }
        if any_written {
            Outcome::Success
        } else {
            Outcome::NoOp
        }
    }

    pub fn exit_code(&self, config: &ReportConfig) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::NoOp if config.fail_on_noop => NO_OP_EXIT_CODE,
            Outcome::NoOp => 0,
            Outcome::Failure => 1,
        }
    }
}

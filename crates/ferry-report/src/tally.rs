use ferry_core::{DestinationEffect, EffectType};
use serde::Serialize;
use std::fmt;

/// Number of effects per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub created: usize,
    pub updated: usize,
    pub noop: usize,
    pub insufficient_approvals: usize,
    pub error: usize,
}

impl Tally {
    pub fn from_effects<'a>(effects: impl IntoIterator<Item = &'a DestinationEffect>) -> Self {
        let mut tally = Self::default();
        for effect in effects {
            tally.add(effect.effect_type());
        }
        tally
    }

    pub fn add(&mut self, effect_type: EffectType) {
        match effect_type {
            EffectType::Created => self.created += 1,
            EffectType::Updated => self.updated += 1,
            EffectType::Noop => self.noop += 1,
            EffectType::InsufficientApprovals => self.insufficient_approvals += 1,
            EffectType::Error => self.error += 1,
        }
    }

    pub fn get(&self, effect_type: EffectType) -> usize {
        match effect_type {
            EffectType::Created => self.created,
            EffectType::Updated => self.updated,
            EffectType::Noop => self.noop,
            EffectType::InsufficientApprovals => self.insufficient_approvals,
            EffectType::Error => self.error,
        }
    }

    pub fn total(&self) -> usize {
        EffectType::ALL.iter().map(|t| self.get(*t)).sum()
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total() == 0 {
            return f.write_str("no effects");
        }
        let parts: Vec<String> = EffectType::ALL
            .iter()
            .filter(|t| self.get(**t) > 0)
            .map(|t| format!("{} {}", self.get(*t), t))
            .collect();
        let total = self.total();
        let noun = if total == 1 { "effect" } else { "effects" };
        write!(f, "{total} {noun}: {}", parts.join(", "))
    }
}

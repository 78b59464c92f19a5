//! Dark-agent attack schedules.
//!
//! A schedule maps a tick to the number of messages the dark originator
//! emits on that tick. It is a pure function of `(tick, kind, start)` plus the
//! fixed shape parameters; the schedule carries no cross-tick state.
//!
//! ```text
//! offset = tick - start        S = strength, L = length, d = decay
//!
//! Burst        offset 0                 -> S
//! Escalating   offset 2i      (i < L)   -> S - (L-1-i)·d
//! Decaying     offset 2i, 2i+1 (i < L)  -> S - i·d
//! Default      always                   -> baseline
//! ```
//!
//! Every tick that is not part of a scripted step emits at the baseline
//! frequency, so the dark agent never falls silent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Messages per share event outside scripted steps
pub const BASELINE_FREQUENCY: u32 = 1;

/// Named attack profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    /// One high-volume tick at `start`
    #[default]
    Burst,
    /// Widening steps every other tick, peaking at `strength`
    Escalating,
    /// Steps held for two ticks each, shrinking from `strength`
    Decaying,
    /// No script: behaves like any other agent
    Default,
}

impl AttackKind {
    /// All kinds, in declaration order
    pub const ALL: [AttackKind; 4] = [
        AttackKind::Burst,
        AttackKind::Escalating,
        AttackKind::Decaying,
        AttackKind::Default,
    ];

    /// Lowercase name used in config files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            AttackKind::Burst => "burst",
            AttackKind::Escalating => "escalating",
            AttackKind::Decaying => "decaying",
            AttackKind::Default => "default",
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttackKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        AttackKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimError::Config(format!("Unknown attack kind: {s}")))
    }
}

/// Attack schedule of the dark originator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackSchedule {
    /// Attack profile
    pub kind: AttackKind,
    /// First scripted tick
    pub start: usize,
    /// Number of scripted steps (escalating / decaying)
    pub length: usize,
    /// Peak messages per share event
    pub strength: u32,
    /// Frequency difference between consecutive steps
    pub decay: u32,
}

impl Default for AttackSchedule {
    fn default() -> Self {
        Self {
            kind: AttackKind::Burst,
            start: 5,
            length: 5,
            strength: 50,
            decay: 10,
        }
    }
}

impl AttackSchedule {
    /// Schedule of the given kind with default shape parameters
    pub fn new(kind: AttackKind, start: usize) -> Self {
        Self {
            kind,
            start,
            ..Self::default()
        }
    }

    /// Set the number of scripted steps
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the peak frequency
    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = strength;
        self
    }

    /// Set the per-step decay
    pub fn with_decay(mut self, decay: u32) -> Self {
        self.decay = decay;
        self
    }

    /// Messages per share event at `tick`
    pub fn frequency_at(&self, tick: usize) -> u32 {
        let Some(offset) = tick.checked_sub(self.start) else {
            return BASELINE_FREQUENCY;
        };

        let scripted = match self.kind {
            AttackKind::Burst => (offset == 0).then_some(self.strength),
            AttackKind::Escalating => {
                let step = offset / 2;
                (offset % 2 == 0 && step < self.length)
                    .then(|| self.step_down(self.length - 1 - step))
            },
            AttackKind::Decaying => {
                let step = offset / 2;
                (step < self.length).then(|| self.step_down(step))
            },
            AttackKind::Default => None,
        };

        scripted.unwrap_or(BASELINE_FREQUENCY)
    }

    /// Strength reduced by `steps` decays, never below baseline
    fn step_down(&self, steps: usize) -> u32 {
        let steps = u32::try_from(steps).unwrap_or(u32::MAX);
        self.strength
            .saturating_sub(self.decay.saturating_mul(steps))
            .max(BASELINE_FREQUENCY)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.kind == AttackKind::Default {
            return Ok(());
        }
        if self.strength < BASELINE_FREQUENCY {
            return Err(SimError::Config(format!(
                "attack.strength must be at least {BASELINE_FREQUENCY} (got {})",
                self.strength
            )));
        }
        if self.length == 0 && self.kind != AttackKind::Burst {
            return Err(SimError::Config(format!(
                "attack.length must be at least 1 for {} attacks",
                self.kind
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(schedule: &AttackSchedule, ticks: std::ops::Range<usize>) -> Vec<u32> {
        ticks.map(|t| schedule.frequency_at(t)).collect()
    }

    #[test]
    fn test_burst_single_tick() {
        let schedule = AttackSchedule::new(AttackKind::Burst, 5);
        assert_eq!(schedule.frequency_at(4), 1);
        assert_eq!(schedule.frequency_at(5), 50);
        assert_eq!(schedule.frequency_at(6), 1);
        assert_eq!(schedule.frequency_at(100), 1);
    }

    #[test]
    fn test_burst_custom_strength() {
        let schedule = AttackSchedule::new(AttackKind::Burst, 0).with_strength(80);
        assert_eq!(frequencies(&schedule, 0..3), vec![80, 1, 1]);
    }

    #[test]
    fn test_escalating_three_steps() {
        let schedule = AttackSchedule::new(AttackKind::Escalating, 5)
            .with_length(3)
            .with_decay(20);

        assert_eq!(schedule.frequency_at(5), 10);
        assert_eq!(schedule.frequency_at(6), 1);
        assert_eq!(schedule.frequency_at(7), 30);
        assert_eq!(schedule.frequency_at(8), 1);
        assert_eq!(schedule.frequency_at(9), 50);
        assert_eq!(frequencies(&schedule, 0..5), vec![1; 5]);
        assert_eq!(frequencies(&schedule, 10..20), vec![1; 10]);
    }

    #[test]
    fn test_escalating_defaults() {
        let schedule = AttackSchedule::new(AttackKind::Escalating, 5);
        assert_eq!(
            frequencies(&schedule, 5..15),
            vec![10, 1, 20, 1, 30, 1, 40, 1, 50, 1]
        );
    }

    #[test]
    fn test_escalating_floors_at_baseline() {
        // 50 - 4*20 would go negative
        let schedule = AttackSchedule::new(AttackKind::Escalating, 0)
            .with_length(5)
            .with_decay(20);
        assert_eq!(frequencies(&schedule, 0..9), vec![1, 1, 1, 1, 10, 1, 30, 1, 50]);
    }

    #[test]
    fn test_decaying_pairs() {
        let schedule = AttackSchedule::new(AttackKind::Decaying, 5);
        assert_eq!(schedule.frequency_at(4), 1);
        assert_eq!(
            frequencies(&schedule, 5..15),
            vec![50, 50, 40, 40, 30, 30, 20, 20, 10, 10]
        );
        assert_eq!(schedule.frequency_at(15), 1);
        assert_eq!(schedule.frequency_at(16), 1);
    }

    #[test]
    fn test_default_kind_is_baseline() {
        let schedule = AttackSchedule::new(AttackKind::Default, 5);
        assert!(frequencies(&schedule, 0..30).iter().all(|&f| f == BASELINE_FREQUENCY));
    }

    #[test]
    fn test_schedule_is_pure() {
        let schedule = AttackSchedule::new(AttackKind::Decaying, 2);
        let forward = frequencies(&schedule, 0..20);
        let backward: Vec<u32> = (0..20).rev().map(|t| schedule.frequency_at(t)).collect();
        assert_eq!(forward, backward.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("burst".parse::<AttackKind>().unwrap(), AttackKind::Burst);
        assert_eq!(" Escalating ".parse::<AttackKind>().unwrap(), AttackKind::Escalating);
        assert!("wave".parse::<AttackKind>().is_err());
        for kind in AttackKind::ALL {
            assert_eq!(kind.to_string().parse::<AttackKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_validate() {
        assert!(AttackSchedule::default().validate().is_ok());
        assert!(AttackSchedule::default().with_strength(0).validate().is_err());
        assert!(AttackSchedule::new(AttackKind::Decaying, 0)
            .with_length(0)
            .validate()
            .is_err());
        assert!(AttackSchedule::new(AttackKind::Default, 0)
            .with_strength(0)
            .validate()
            .is_ok());
    }
}

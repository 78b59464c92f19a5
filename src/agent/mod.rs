//! Agents and their belief state machine.
//!
//! # State Machine
//!
//! ```text
//!                          disinformation share > threshold
//!     [Susceptible] ──────────────────────────────────────> [Infected]
//!          │
//!          │ fact-check exposure, prebunk roll succeeds
//!          v
//!     [Resistant] ───── immunization roll succeeds ──────> [ActiveResistant]
//!                       (same perceive call)
//! ```
//!
//! `UnresistantInfected` and `ActiveResistant` are also the statuses the dark
//! and light originators are promoted into. Every non-susceptible state is
//! terminal: once `resistance` is set, opinion and status never change again.
//!
//! # Tick Phases
//!
//! Each tick runs three phases over the whole population, in population order:
//!
//! 1. [`Agent::emit`]: roll against the share probability and fill the
//!    engagement buffer with `frequency` copies of the held opinion.
//! 2. [`Agent::perceive`]: read the friends' engagement from phase 1 as an
//!    [`Exposure`] and stage the next opinion.
//! 3. [`Agent::commit`]: log the held opinion and apply the staged one.

pub mod attack;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use self::attack::AttackSchedule;
use crate::error::{Result, SimError};
use crate::random;

/// Stable agent identifier, an index into the population arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub usize);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent#{}", self.0)
    }
}

/// Content an agent holds and shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opinion {
    /// No opinion
    #[default]
    None,
    /// Disinformation
    Disinformation,
    /// Fact-checking / prebunking content
    FactCheck,
}

impl Opinion {
    /// Numeric code (0, 1, 2)
    pub fn code(self) -> u8 {
        match self {
            Opinion::None => 0,
            Opinion::Disinformation => 1,
            Opinion::FactCheck => 2,
        }
    }
}

impl TryFrom<u8> for Opinion {
    type Error = SimError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Opinion::None),
            1 => Ok(Opinion::Disinformation),
            2 => Ok(Opinion::FactCheck),
            other => Err(SimError::InvalidOpinion(other.to_string())),
        }
    }
}

impl FromStr for Opinion {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" | "none" => Ok(Opinion::None),
            "1" | "disinformation" => Ok(Opinion::Disinformation),
            "2" | "fact_check" | "factcheck" => Ok(Opinion::FactCheck),
            other => Err(SimError::InvalidOpinion(other.to_string())),
        }
    }
}

/// Epidemic-style status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Not yet converted
    #[default]
    #[serde(rename = "S")]
    Susceptible,
    /// Converted by disinformation exposure
    #[serde(rename = "I")]
    Infected,
    /// The dark originator
    #[serde(rename = "uI")]
    UnresistantInfected,
    /// Immunized by fact-check exposure, shares nothing in particular
    #[serde(rename = "R")]
    Resistant,
    /// Immunized and rebroadcasting fact-checks (includes the light originator)
    #[serde(rename = "aR")]
    ActiveResistant,
}

impl Status {
    /// Short status code (`S`, `I`, `uI`, `R`, `aR`)
    pub fn code(self) -> &'static str {
        match self {
            Status::Susceptible => "S",
            Status::Infected => "I",
            Status::UnresistantInfected => "uI",
            Status::Resistant => "R",
            Status::ActiveResistant => "aR",
        }
    }

    /// Infected or dark originator
    pub fn is_infected(self) -> bool {
        matches!(self, Status::Infected | Status::UnresistantInfected)
    }

    /// Resistant or active resistant
    pub fn is_resistant(self) -> bool {
        matches!(self, Status::Resistant | Status::ActiveResistant)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Status {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "S" => Ok(Status::Susceptible),
            "I" => Ok(Status::Infected),
            "uI" => Ok(Status::UnresistantInfected),
            "R" => Ok(Status::Resistant),
            "aR" => Ok(Status::ActiveResistant),
            other => Err(SimError::InvalidStatus(other.to_string())),
        }
    }
}

/// Structural role, fixed at population setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary member of the population
    #[default]
    Regular,
    /// Disinformation originator
    Dark,
    /// Prebunking originator
    Prebunk,
}

/// Promotion applied to a chosen agent before the first tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Originator {
    /// Disinformation originator following the given schedule
    Dark(AttackSchedule),
    /// Prebunking originator
    Light,
}

/// Share probability selected by the opinion an agent holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharePolicy {
    /// Probability while holding no opinion
    pub none: f64,
    /// Probability while holding disinformation
    pub disinformation: f64,
    /// Probability while holding fact-checks
    pub fact_check: f64,
}

impl Default for SharePolicy {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

impl SharePolicy {
    /// Same probability for every opinion
    pub fn uniform(p: f64) -> Self {
        Self {
            none: p,
            disinformation: p,
            fact_check: p,
        }
    }

    /// Probability for an agent holding `opinion`
    pub fn for_opinion(&self, opinion: Opinion) -> f64 {
        match opinion {
            Opinion::None => self.none,
            Opinion::Disinformation => self.disinformation,
            Opinion::FactCheck => self.fact_check,
        }
    }
}

/// Conversion thresholds of a single agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Susceptibility {
    /// Disinformation fraction of exposure that must be exceeded (strictly)
    pub disinformation_threshold: f64,
    /// Chance that fact-check exposure grants resistance
    pub prebunk_probability: f64,
    /// Chance that a newly resistant agent also rebroadcasts fact-checks
    pub immunization_probability: f64,
}

impl Default for Susceptibility {
    fn default() -> Self {
        Self {
            disinformation_threshold: 0.5,
            prebunk_probability: 1.0,
            immunization_probability: 0.0,
        }
    }
}

/// Opinion counts over the concatenated engagement of an agent's friends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exposure {
    /// Entries of every kind
    pub total: usize,
    /// Disinformation entries
    pub disinformation: usize,
    /// Fact-check entries
    pub fact_check: usize,
}

impl Exposure {
    /// Tally the engagement buffers of a set of friends
    pub fn collect<'a>(engagements: impl IntoIterator<Item = &'a [Opinion]>) -> Self {
        engagements
            .into_iter()
            .flatten()
            .fold(Self::default(), |mut exposure, opinion| {
                exposure.add(*opinion, 1);
                exposure
            })
    }

    /// Add `count` entries of `opinion`
    pub fn add(&mut self, opinion: Opinion, count: usize) {
        self.total += count;
        match opinion {
            Opinion::None => {},
            Opinion::Disinformation => self.disinformation += count,
            Opinion::FactCheck => self.fact_check += count,
        }
    }

    /// Disinformation fraction, zero when nothing was seen
    pub fn disinformation_share(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.disinformation as f64 / self.total as f64
        }
    }
}

/// A member of the simulated population
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    id: AgentId,
    opinion: Opinion,
    status: Status,
    share_probability: f64,
    frequency: u32,
    resistance: bool,
    role: Role,
    attack: Option<AttackSchedule>,
    susceptibility: Susceptibility,
    engagement: Vec<Opinion>,
    next_opinion: Opinion,
    opinion_history: Vec<Opinion>,
    friends: Vec<AgentId>,
}

impl Agent {
    /// Susceptible agent with no opinion and no friends
    pub fn new(id: AgentId, share_probability: f64, susceptibility: Susceptibility) -> Self {
        Self {
            id,
            opinion: Opinion::None,
            status: Status::Susceptible,
            share_probability,
            frequency: attack::BASELINE_FREQUENCY,
            resistance: false,
            role: Role::Regular,
            attack: None,
            susceptibility,
            engagement: Vec::new(),
            next_opinion: Opinion::None,
            opinion_history: Vec::new(),
            friends: Vec::new(),
        }
    }

    /// Identifier
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Currently held opinion
    pub fn opinion(&self) -> Opinion {
        self.opinion
    }

    /// Current status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current share probability
    pub fn share_probability(&self) -> f64 {
        self.share_probability
    }

    /// Messages per share event (outside attack scripts)
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Whether opinion and status are locked
    pub fn is_resistant(&self) -> bool {
        self.resistance
    }

    /// Structural role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Dark originator
    pub fn is_dark(&self) -> bool {
        self.role == Role::Dark
    }

    /// Prebunking originator
    pub fn is_prebunk(&self) -> bool {
        self.role == Role::Prebunk
    }

    /// Attack schedule, present only on the dark originator
    pub fn attack(&self) -> Option<&AttackSchedule> {
        self.attack.as_ref()
    }

    /// Messages emitted during the last emit phase
    pub fn engagement(&self) -> &[Opinion] {
        &self.engagement
    }

    /// Opinion staged by the last perceive phase
    pub fn next_opinion(&self) -> Opinion {
        self.next_opinion
    }

    /// Opinions held at every past tick, oldest first
    pub fn opinion_history(&self) -> &[Opinion] {
        &self.opinion_history
    }

    /// Agents this agent listens to, in the order they were added
    pub fn friends(&self) -> &[AgentId] {
        &self.friends
    }

    /// Whether `other` is already a friend
    pub fn has_friend(&self, other: AgentId) -> bool {
        self.friends.contains(&other)
    }

    pub(crate) fn add_friend(&mut self, friend: AgentId) {
        debug_assert!(friend != self.id && !self.has_friend(friend));
        self.friends.push(friend);
    }

    /// Promote into an originator role.
    ///
    /// Originators share with probability 1 at baseline frequency and are
    /// locked from the start.
    pub fn promote(&mut self, originator: Originator) {
        let (opinion, status, role, attack) = match originator {
            Originator::Dark(schedule) => (
                Opinion::Disinformation,
                Status::UnresistantInfected,
                Role::Dark,
                Some(schedule),
            ),
            Originator::Light => (Opinion::FactCheck, Status::ActiveResistant, Role::Prebunk, None),
        };

        self.opinion = opinion;
        self.next_opinion = opinion;
        self.status = status;
        self.share_probability = 1.0;
        self.frequency = attack::BASELINE_FREQUENCY;
        self.resistance = true;
        self.role = role;
        self.attack = attack;
    }

    /// Emit phase.
    ///
    /// The dark originator takes its frequency from its attack schedule;
    /// everyone else, locked or not, uses its own frequency.
    pub fn emit<R: Rng + ?Sized>(&mut self, tick: usize, rng: &mut R) {
        let frequency = match &self.attack {
            Some(schedule) if self.is_dark() => schedule.frequency_at(tick),
            _ => self.frequency,
        };
        self.emit_with_frequency(frequency, rng);
    }

    fn emit_with_frequency<R: Rng + ?Sized>(&mut self, frequency: u32, rng: &mut R) {
        self.engagement.clear();
        if random::unit(rng) <= self.share_probability {
            self.engagement
                .extend(std::iter::repeat(self.opinion).take(frequency as usize));
        }
    }

    /// Take the engagement buffer, leaving it empty
    pub fn take_engagement(&mut self) -> Vec<Opinion> {
        std::mem::take(&mut self.engagement)
    }

    /// Perceive phase: stage the next opinion from last emit's exposure.
    ///
    /// Disinformation is checked first; when it converts the agent, the
    /// fact-check rolls are not made this tick.
    pub fn perceive<R: Rng + ?Sized>(&mut self, exposure: &Exposure, rng: &mut R) {
        self.next_opinion = self.opinion;
        if self.resistance {
            return;
        }

        if exposure.disinformation > 0
            && exposure.disinformation_share() > self.susceptibility.disinformation_threshold
        {
            self.next_opinion = Opinion::Disinformation;
            self.status = Status::Infected;
            self.resistance = true;
            return;
        }

        if exposure.fact_check > 0
            && random::unit(rng) < self.susceptibility.prebunk_probability
        {
            self.resistance = true;
            self.status = Status::Resistant;
            self.next_opinion = Opinion::None;

            if random::unit(rng) < self.susceptibility.immunization_probability {
                self.next_opinion = Opinion::FactCheck;
                self.status = Status::ActiveResistant;
            }
        }
    }

    /// Commit phase: log the held opinion, apply the staged one, and refresh
    /// the share probability of regular agents from `policy`.
    pub fn commit(&mut self, policy: &SharePolicy) {
        self.opinion_history.push(self.opinion);
        self.opinion = self.next_opinion;
        if self.role == Role::Regular {
            self.share_probability = policy.for_opinion(self.opinion);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::attack::{AttackKind, AttackSchedule};
    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0)
    }

    fn agent_with(susceptibility: Susceptibility) -> Agent {
        Agent::new(AgentId(0), 0.5, susceptibility)
    }

    fn exposure(none: usize, disinformation: usize, fact_check: usize) -> Exposure {
        let mut e = Exposure::default();
        e.add(Opinion::None, none);
        e.add(Opinion::Disinformation, disinformation);
        e.add(Opinion::FactCheck, fact_check);
        e
    }

    #[test]
    fn test_new_agent_defaults() {
        let agent = agent_with(Susceptibility::default());
        assert_eq!(agent.opinion(), Opinion::None);
        assert_eq!(agent.status(), Status::Susceptible);
        assert_eq!(agent.role(), Role::Regular);
        assert!(!agent.is_resistant());
        assert!(agent.friends().is_empty());
        assert!(agent.engagement().is_empty());
    }

    #[test]
    fn test_emit_always_when_probability_one() {
        let mut agent = Agent::new(AgentId(0), 1.0, Susceptibility::default());
        let mut rng = rng();
        for tick in 0..10 {
            agent.emit(tick, &mut rng);
            assert_eq!(agent.engagement(), &[Opinion::None]);
        }
    }

    #[test]
    fn test_emit_never_when_probability_zero() {
        let mut agent = Agent::new(AgentId(0), 0.0, Susceptibility::default());
        let mut rng = rng();
        for tick in 0..100 {
            agent.emit(tick, &mut rng);
            assert!(agent.engagement().is_empty());
        }
    }

    #[test]
    fn test_emit_clears_previous_engagement() {
        let mut agent = Agent::new(AgentId(0), 1.0, Susceptibility::default());
        let mut rng = rng();
        agent.emit(0, &mut rng);
        agent.share_probability = 0.0;
        agent.emit(1, &mut rng);
        assert!(agent.engagement().is_empty());
    }

    #[test]
    fn test_dark_emit_follows_schedule() {
        let mut agent = agent_with(Susceptibility::default());
        agent.promote(Originator::Dark(AttackSchedule::new(AttackKind::Burst, 5)));
        let mut rng = rng();

        agent.emit(4, &mut rng);
        assert_eq!(agent.engagement().len(), 1);
        agent.emit(5, &mut rng);
        assert_eq!(agent.engagement().len(), 50);
        assert!(agent.engagement().iter().all(|o| *o == Opinion::Disinformation));
        agent.emit(6, &mut rng);
        assert_eq!(agent.engagement().len(), 1);
        // The schedule never touches the stored frequency
        assert_eq!(agent.frequency(), 1);
    }

    #[test]
    fn test_promote_light() {
        let mut agent = agent_with(Susceptibility::default());
        agent.promote(Originator::Light);
        assert_eq!(agent.opinion(), Opinion::FactCheck);
        assert_eq!(agent.status(), Status::ActiveResistant);
        assert_eq!(agent.share_probability(), 1.0);
        assert!(agent.is_resistant());
        assert!(agent.is_prebunk());
        assert!(!agent.is_dark());
        assert!(agent.attack().is_none());
    }

    #[test]
    fn test_promote_dark() {
        let mut agent = agent_with(Susceptibility::default());
        agent.promote(Originator::Dark(AttackSchedule::default()));
        assert_eq!(agent.opinion(), Opinion::Disinformation);
        assert_eq!(agent.status(), Status::UnresistantInfected);
        assert_eq!(agent.share_probability(), 1.0);
        assert!(agent.is_resistant());
        assert!(agent.is_dark());
        assert!(!agent.is_prebunk());
    }

    #[test]
    fn test_perceive_infects_above_threshold() {
        let mut agent = agent_with(Susceptibility::default());
        agent.perceive(&exposure(1, 2, 0), &mut rng());
        assert_eq!(agent.status(), Status::Infected);
        assert_eq!(agent.next_opinion(), Opinion::Disinformation);
        assert!(agent.is_resistant());
        // Opinion changes only on commit
        assert_eq!(agent.opinion(), Opinion::None);
        agent.commit(&SharePolicy::default());
        assert_eq!(agent.opinion(), Opinion::Disinformation);
    }

    #[test]
    fn test_perceive_threshold_is_strict() {
        let mut agent = agent_with(Susceptibility::default());
        agent.perceive(&exposure(1, 1, 0), &mut rng());
        assert_eq!(agent.status(), Status::Susceptible);
        assert_eq!(agent.next_opinion(), Opinion::None);
        assert!(!agent.is_resistant());
    }

    #[test]
    fn test_disinformation_precedes_fact_check() {
        // 3 of 4 entries are disinformation; the fact-check entry must be ignored
        let mut agent = agent_with(Susceptibility {
            disinformation_threshold: 0.5,
            prebunk_probability: 1.0,
            immunization_probability: 1.0,
        });
        agent.perceive(&exposure(0, 3, 1), &mut rng());
        assert_eq!(agent.status(), Status::Infected);
        assert_eq!(agent.next_opinion(), Opinion::Disinformation);
    }

    #[test]
    fn test_fact_check_makes_resistant() {
        let mut agent = agent_with(Susceptibility {
            disinformation_threshold: 0.5,
            prebunk_probability: 1.0,
            immunization_probability: 0.0,
        });
        agent.perceive(&exposure(2, 1, 1), &mut rng());
        assert_eq!(agent.status(), Status::Resistant);
        assert_eq!(agent.next_opinion(), Opinion::None);
        assert!(agent.is_resistant());
    }

    #[test]
    fn test_fact_check_immunizes_active() {
        let mut agent = agent_with(Susceptibility {
            disinformation_threshold: 0.5,
            prebunk_probability: 1.0,
            immunization_probability: 1.0,
        });
        agent.perceive(&exposure(0, 0, 1), &mut rng());
        assert_eq!(agent.status(), Status::ActiveResistant);
        assert_eq!(agent.next_opinion(), Opinion::FactCheck);
    }

    #[test]
    fn test_fact_check_roll_can_fail() {
        let mut agent = agent_with(Susceptibility {
            disinformation_threshold: 0.5,
            prebunk_probability: 0.0,
            immunization_probability: 1.0,
        });
        agent.perceive(&exposure(0, 0, 5), &mut rng());
        assert_eq!(agent.status(), Status::Susceptible);
        assert!(!agent.is_resistant());
    }

    #[test]
    fn test_no_exposure_no_change() {
        let mut agent = agent_with(Susceptibility::default());
        agent.perceive(&Exposure::default(), &mut rng());
        assert_eq!(agent.status(), Status::Susceptible);
        assert_eq!(agent.next_opinion(), Opinion::None);
    }

    #[test]
    fn test_resistant_agent_is_locked() {
        let mut agent = agent_with(Susceptibility {
            disinformation_threshold: 0.0,
            prebunk_probability: 1.0,
            immunization_probability: 1.0,
        });
        let mut rng = rng();
        agent.perceive(&exposure(0, 0, 1), &mut rng);
        agent.commit(&SharePolicy::default());
        let (opinion, status) = (agent.opinion(), agent.status());

        for _ in 0..5 {
            agent.perceive(&exposure(0, 10, 0), &mut rng);
            agent.commit(&SharePolicy::default());
            assert_eq!(agent.opinion(), opinion);
            assert_eq!(agent.status(), status);
        }
    }

    #[test]
    fn test_commit_records_history() {
        let mut agent = agent_with(Susceptibility::default());
        let mut rng = rng();
        agent.perceive(&Exposure::default(), &mut rng);
        agent.commit(&SharePolicy::default());
        agent.perceive(&exposure(0, 1, 0), &mut rng);
        agent.commit(&SharePolicy::default());
        agent.perceive(&Exposure::default(), &mut rng);
        agent.commit(&SharePolicy::default());

        assert_eq!(
            agent.opinion_history(),
            &[Opinion::None, Opinion::None, Opinion::Disinformation]
        );
    }

    #[test]
    fn test_commit_updates_share_probability() {
        let policy = SharePolicy {
            none: 0.2,
            disinformation: 0.9,
            fact_check: 0.4,
        };
        let mut agent = agent_with(Susceptibility::default());
        agent.perceive(&exposure(0, 1, 0), &mut rng());
        agent.commit(&policy);
        assert_eq!(agent.share_probability(), 0.9);
    }

    #[test]
    fn test_commit_keeps_originator_share_probability() {
        let policy = SharePolicy::uniform(0.1);
        let mut dark = agent_with(Susceptibility::default());
        dark.promote(Originator::Dark(AttackSchedule::default()));
        dark.commit(&policy);
        assert_eq!(dark.share_probability(), 1.0);
        assert_eq!(dark.opinion(), Opinion::Disinformation);

        let mut light = agent_with(Susceptibility::default());
        light.promote(Originator::Light);
        light.commit(&policy);
        assert_eq!(light.share_probability(), 1.0);
        assert_eq!(light.opinion(), Opinion::FactCheck);
    }

    #[test]
    fn test_exposure_collect() {
        let a = [Opinion::Disinformation, Opinion::Disinformation];
        let b = [Opinion::FactCheck];
        let c: [Opinion; 0] = [];
        let d = [Opinion::None];
        let e = Exposure::collect([&a[..], &b[..], &c[..], &d[..]]);
        assert_eq!(e, exposure(1, 2, 1));
        assert_eq!(e.disinformation_share(), 0.5);
        assert_eq!(Exposure::default().disinformation_share(), 0.0);
    }

    #[test]
    fn test_opinion_codes() {
        for opinion in [Opinion::None, Opinion::Disinformation, Opinion::FactCheck] {
            assert_eq!(Opinion::try_from(opinion.code()).unwrap(), opinion);
        }
        assert!(matches!(Opinion::try_from(3), Err(SimError::InvalidOpinion(_))));
        assert_eq!("fact_check".parse::<Opinion>().unwrap(), Opinion::FactCheck);
        assert!("maybe".parse::<Opinion>().is_err());
    }

    #[test]
    fn test_status_codes() {
        for status in [
            Status::Susceptible,
            Status::Infected,
            Status::UnresistantInfected,
            Status::Resistant,
            Status::ActiveResistant,
        ] {
            assert_eq!(status.code().parse::<Status>().unwrap(), status);
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status.code())
            );
        }
        assert!(matches!("X".parse::<Status>(), Err(SimError::InvalidStatus(_))));
        assert!(Status::UnresistantInfected.is_infected());
        assert!(Status::ActiveResistant.is_resistant());
        assert!(!Status::Susceptible.is_infected());
    }
}

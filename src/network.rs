//! Population arena and preferential-attachment network construction.
//!
//! Agents live in one `Vec` and refer to each other by [`AgentId`] (the
//! index into that `Vec`). Friend edges point in the listening direction:
//! an edge `a -> b` means `a` reads `b`'s engagement.
//!
//! # Construction
//!
//! ```text
//! pool = [0, 1, .., n-1]
//! for round in 1..=k:
//!     for agent in population order:
//!         while agent.friends < round:
//!             pick = uniform(pool)
//!             skip if pick == agent or pick already a friend
//!             add edge agent -> pick
//!             push pick onto pool `reinforcement` more times
//! ```
//!
//! Afterwards the agent that occurs most often in the pool (lowest id on ties)
//! becomes the light originator, and the dark originator is drawn uniformly
//! from the agents whose pool count equals the `dark_quantile` quantile of all
//! counts.

use rand::Rng;

use crate::agent::attack::AttackSchedule;
use crate::agent::{Agent, AgentId, Exposure, Originator, Susceptibility};
use crate::config::{NetworkConfig, SimulationConfig};
use crate::error::{Result, SimError};

/// All agents of a run plus the originator assignment
#[derive(Debug, Clone)]
pub struct Population {
    agents: Vec<Agent>,
    occurrences: Vec<usize>,
    light: AgentId,
    dark: AgentId,
}

impl Population {
    /// Agents in population order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub(crate) fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Agent by id
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0)
    }

    /// Number of agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the population is empty (never true for a built population)
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Light (prebunking) originator
    pub fn light(&self) -> AgentId {
        self.light
    }

    /// Dark (disinformation) originator
    pub fn dark(&self) -> AgentId {
        self.dark
    }

    /// Final selection-pool count per agent, a proxy for popularity
    pub fn occurrences(&self) -> &[usize] {
        &self.occurrences
    }

    /// Total number of friend edges
    pub fn edge_count(&self) -> usize {
        self.agents.iter().map(|a| a.friends().len()).sum()
    }

    /// Directed edges `(listener, friend)` in population order
    pub fn edges(&self) -> impl Iterator<Item = (AgentId, AgentId)> + '_ {
        self.agents
            .iter()
            .flat_map(|a| a.friends().iter().map(move |f| (a.id(), *f)))
    }

    /// Current exposure of one agent: its friends' engagement buffers
    pub fn exposure_of(&self, agent: &Agent) -> Exposure {
        Exposure::collect(
            agent
                .friends()
                .iter()
                .filter_map(|f| self.agents.get(f.0))
                .map(Agent::engagement),
        )
    }

    /// Exposure of every agent, in population order
    pub fn exposures(&self) -> Vec<Exposure> {
        self.agents.iter().map(|a| self.exposure_of(a)).collect()
    }
}

/// Grows the friend graph and assigns originator roles
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    network: NetworkConfig,
    share_probability: f64,
    susceptibility: Susceptibility,
    attack: AttackSchedule,
}

impl NetworkBuilder {
    /// Builder with default agent behavior
    pub fn new(network: NetworkConfig) -> Self {
        let defaults = SimulationConfig::default();
        Self {
            network,
            share_probability: defaults.behavior.share.none,
            susceptibility: defaults.behavior.susceptibility(),
            attack: defaults.attack,
        }
    }

    /// Builder for a full run configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            network: config.network.clone(),
            share_probability: config.behavior.share.none,
            susceptibility: config.behavior.susceptibility(),
            attack: config.attack,
        }
    }

    /// Initial share probability of regular agents
    pub fn with_share_probability(mut self, p: f64) -> Self {
        self.share_probability = p;
        self
    }

    /// Thresholds given to every agent
    pub fn with_susceptibility(mut self, susceptibility: Susceptibility) -> Self {
        self.susceptibility = susceptibility;
        self
    }

    /// Schedule handed to the dark originator
    pub fn with_attack(mut self, attack: AttackSchedule) -> Self {
        self.attack = attack;
        self
    }

    /// Grow the network and promote both originators
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Population> {
        self.network.validate()?;
        let n = self.network.population;

        let mut agents: Vec<Agent> = (0..n)
            .map(|i| Agent::new(AgentId(i), self.share_probability, self.susceptibility))
            .collect();

        let mut pool: Vec<AgentId> = (0..n).map(AgentId).collect();
        let mut occurrences = vec![1_usize; n];

        for round in 1..=self.network.max_friends {
            for agent in &mut agents {
                while agent.friends().len() < round {
                    let pick = pool[rng.gen_range(0..pool.len())];
                    if pick == agent.id() || agent.has_friend(pick) {
                        continue;
                    }
                    agent.add_friend(pick);
                    pool.extend(std::iter::repeat(pick).take(self.network.reinforcement));
                    occurrences[pick.0] += self.network.reinforcement;
                }
            }
        }

        let light = most_popular(&occurrences)
            .ok_or_else(|| SimError::RoleAssignment("empty population".to_string()))?;
        let dark = self.choose_dark(&occurrences, light, rng)?;

        agents[light.0].promote(Originator::Light);
        agents[dark.0].promote(Originator::Dark(self.attack));

        tracing::info!(
            "Network built: {} agents, {} edges, light={}, dark={}",
            n,
            n * self.network.max_friends,
            light,
            dark
        );

        Ok(Population {
            agents,
            occurrences,
            light,
            dark,
        })
    }

    fn choose_dark<R: Rng + ?Sized>(
        &self,
        occurrences: &[usize],
        light: AgentId,
        rng: &mut R,
    ) -> Result<AgentId> {
        let target = nearest_quantile(occurrences, self.network.dark_quantile)
            .ok_or_else(|| SimError::RoleAssignment("empty population".to_string()))?;

        let mut candidates: Vec<AgentId> = occurrences
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == target)
            .map(|(i, _)| AgentId(i))
            .collect();

        if let Some(pos) = candidates.iter().position(|c| *c == light) {
            tracing::warn!(
                "Light originator {} sits at the dark quantile (count {}); excluding it from {} dark candidates",
                light,
                target,
                candidates.len()
            );
            candidates.remove(pos);
        }

        if candidates.is_empty() {
            return Err(SimError::RoleAssignment(format!(
                "quantile {} selects only the light originator {}",
                self.network.dark_quantile, light
            )));
        }

        Ok(candidates[rng.gen_range(0..candidates.len())])
    }
}

/// Index of the largest count, first one on ties
fn most_popular(occurrences: &[usize]) -> Option<AgentId> {
    let max = occurrences.iter().copied().max()?;
    occurrences.iter().position(|&c| c == max).map(AgentId)
}

/// Quantile using nearest-observation interpolation.
///
/// The virtual index `q * (n - 1)` into the ascending values is rounded to
/// the nearest integer, ties going to the even index.
pub fn nearest_quantile(values: &[usize], q: f64) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    Some(sorted[nearest_index(sorted.len(), q)])
}

/// Position in `len` ascending values that [`nearest_quantile`] reads
pub(crate) fn nearest_index(len: usize, q: f64) -> usize {
    let last = len.saturating_sub(1);
    let virtual_index = (q.clamp(0.0, 1.0) * last as f64).round_ties_even();
    (virtual_index as usize).min(last)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::agent::{Opinion, Role, Status};

    fn config(population: usize, max_friends: usize) -> NetworkConfig {
        NetworkConfig {
            population,
            max_friends,
            ..NetworkConfig::default()
        }
    }

    fn build(population: usize, max_friends: usize, seed: u64) -> Population {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        NetworkBuilder::new(config(population, max_friends))
            .build(&mut rng)
            .unwrap()
    }

    #[test]
    fn test_friend_lists_are_complete_and_simple() {
        for seed in 0..10 {
            let population = build(50, 5, seed);
            for agent in population.agents() {
                assert_eq!(agent.friends().len(), 5);
                assert!(!agent.has_friend(agent.id()));
                let unique: HashSet<_> = agent.friends().iter().collect();
                assert_eq!(unique.len(), 5);
            }
            assert_eq!(population.edge_count(), 250);
        }
    }

    #[test]
    fn test_dense_network_terminates() {
        let population = build(6, 5, 3);
        for agent in population.agents() {
            assert_eq!(agent.friends().len(), 5);
        }
    }

    #[test]
    fn test_occurrences_match_in_degree() {
        let population = build(40, 4, 11);
        let mut in_degree = vec![0_usize; population.len()];
        for (_, friend) in population.edges() {
            in_degree[friend.0] += 1;
        }
        let reinforcement = NetworkConfig::default().reinforcement;
        for (i, &count) in population.occurrences().iter().enumerate() {
            assert_eq!(count, 1 + reinforcement * in_degree[i]);
        }
    }

    #[test]
    fn test_originators_are_promoted() {
        for seed in 0..20 {
            let population = build(30, 3, seed);
            let light = population.get(population.light()).unwrap();
            let dark = population.get(population.dark()).unwrap();

            assert_ne!(population.light(), population.dark());
            assert_eq!(light.role(), Role::Prebunk);
            assert_eq!(light.status(), Status::ActiveResistant);
            assert_eq!(light.opinion(), Opinion::FactCheck);
            assert_eq!(dark.role(), Role::Dark);
            assert_eq!(dark.status(), Status::UnresistantInfected);
            assert_eq!(dark.opinion(), Opinion::Disinformation);

            let others = population
                .agents()
                .iter()
                .filter(|a| a.role() == Role::Regular)
                .count();
            assert_eq!(others, 28);
        }
    }

    #[test]
    fn test_light_is_most_popular() {
        let population = build(60, 5, 5);
        let counts = population.occurrences();
        let max = *counts.iter().max().unwrap();
        let light = population.light();
        assert_eq!(counts[light.0], max);
        assert!(counts[..light.0].iter().all(|&c| c < max));
    }

    #[test]
    fn test_dark_sits_at_quantile() {
        let population = build(60, 5, 8);
        let counts = population.occurrences();
        let expected = nearest_quantile(counts, 0.75).unwrap();
        assert_eq!(counts[population.dark().0], expected);
    }

    #[test]
    fn test_same_seed_same_network() {
        let a = build(40, 4, 21);
        let b = build(40, 4, 21);
        let edges_a: Vec<_> = a.edges().collect();
        let edges_b: Vec<_> = b.edges().collect();
        assert_eq!(edges_a, edges_b);
        assert_eq!(a.light(), b.light());
        assert_eq!(a.dark(), b.dark());
    }

    #[test]
    fn test_zero_friends() {
        let population = build(5, 0, 0);
        assert_eq!(population.edge_count(), 0);
        // All counts tie at 1: light is agent 0 and is excluded from the dark draw
        assert_eq!(population.light(), AgentId(0));
        assert_ne!(population.dark(), AgentId(0));
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(NetworkBuilder::new(config(1, 0)).build(&mut rng).is_err());
        assert!(NetworkBuilder::new(config(4, 4)).build(&mut rng).is_err());
    }

    #[test]
    fn test_role_collision_without_alternative() {
        // Agent 3 alone holds the maximum, and q=0.99 over 4 values selects index 3
        let builder = NetworkBuilder::new(NetworkConfig {
            population: 4,
            max_friends: 1,
            reinforcement: 5,
            dark_quantile: 0.99,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = builder.choose_dark(&[1, 1, 1, 6], AgentId(3), &mut rng).unwrap_err();
        assert!(matches!(err, SimError::RoleAssignment(_)));
    }

    #[test]
    fn test_role_collision_picks_other_candidate() {
        let builder = NetworkBuilder::new(NetworkConfig {
            dark_quantile: 0.99,
            ..config(4, 1)
        });
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..20 {
            let dark = builder.choose_dark(&[6, 1, 6, 1], AgentId(0), &mut rng).unwrap();
            assert_eq!(dark, AgentId(2));
        }
    }

    #[test]
    fn test_nearest_quantile() {
        assert_eq!(nearest_quantile(&[], 0.5), None);
        assert_eq!(nearest_quantile(&[7], 0.3), Some(7));
        assert_eq!(nearest_quantile(&[5, 1, 4, 2, 3], 0.5), Some(3));
        // 1.5 rounds to even index 2
        assert_eq!(nearest_quantile(&[1, 2, 3, 4], 0.5), Some(3));
        // 2.5 rounds to even index 2
        assert_eq!(nearest_quantile(&[1, 2, 3, 4, 5, 6], 0.5), Some(3));
        // 6.75 rounds to 7
        assert_eq!(nearest_quantile(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], 0.75), Some(7));
        assert_eq!(nearest_quantile(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], 0.7), Some(6));
    }

    #[test]
    fn test_nearest_index() {
        assert_eq!(nearest_index(0, 0.5), 0);
        assert_eq!(nearest_index(3, 0.75), 2);
        assert_eq!(nearest_index(4, 0.5), 2);
        assert_eq!(nearest_index(10, 0.75), 7);
    }

    #[test]
    fn test_most_popular_prefers_lowest_id() {
        assert_eq!(most_popular(&[1, 6, 3, 6]), Some(AgentId(1)));
        assert_eq!(most_popular(&[]), None);
    }
}

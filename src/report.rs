//! Simulation output value objects.
//!
//! Everything a reporter needs to plot or persist a run: per-tick aggregate
//! series, collapsed terminal counts, and node/edge snapshots of the network.
//! Nothing in here feeds back into the simulation.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId, Opinion, Status};
use crate::config::SimulationConfig;
use crate::network::Population;

/// Aggregates observed at the start of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    /// Susceptible agents
    pub susceptible: usize,
    /// Infected agents
    pub infected: usize,
    /// Dark originators
    pub unresistant_infected: usize,
    /// Resistant agents
    pub resistant: usize,
    /// Active resistant agents, light originator included
    pub active_resistant: usize,
    /// Emitted messages carrying no opinion
    pub volume_none: usize,
    /// Emitted disinformation messages
    pub volume_disinformation: usize,
    /// Emitted fact-check messages
    pub volume_fact_check: usize,
}

impl TickStats {
    /// Status counts only
    pub fn from_statuses<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut stats = Self::default();
        for agent in agents {
            stats.record_status(agent.status());
        }
        stats
    }

    /// Count one agent's status
    pub fn record_status(&mut self, status: Status) {
        match status {
            Status::Susceptible => self.susceptible += 1,
            Status::Infected => self.infected += 1,
            Status::UnresistantInfected => self.unresistant_infected += 1,
            Status::Resistant => self.resistant += 1,
            Status::ActiveResistant => self.active_resistant += 1,
        }
    }

    /// Count the messages of one engagement buffer by the opinion they carry
    pub fn record_volume(&mut self, engagement: &[Opinion]) {
        for opinion in engagement {
            match opinion {
                Opinion::None => self.volume_none += 1,
                Opinion::Disinformation => self.volume_disinformation += 1,
                Opinion::FactCheck => self.volume_fact_check += 1,
            }
        }
    }

    /// Sum of the five status counts
    pub fn population(&self) -> usize {
        self.susceptible
            + self.infected
            + self.unresistant_infected
            + self.resistant
            + self.active_resistant
    }

    /// Sum of the three volume counts
    pub fn volume(&self) -> usize {
        self.volume_none + self.volume_disinformation + self.volume_fact_check
    }

    /// Statuses collapsed into three buckets
    pub fn collapsed(&self) -> FinalCounts {
        FinalCounts {
            susceptible: self.susceptible,
            infected: self.infected + self.unresistant_infected,
            resistant: self.resistant + self.active_resistant,
        }
    }
}

/// Per-tick series, index `t` holding the snapshot taken at the start of tick `t`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSeries {
    /// Susceptible agents
    pub susceptible: Vec<usize>,
    /// Infected agents
    pub infected: Vec<usize>,
    /// Dark originators
    pub unresistant_infected: Vec<usize>,
    /// Resistant agents
    pub resistant: Vec<usize>,
    /// Active resistant agents
    pub active_resistant: Vec<usize>,
    /// Messages with no opinion
    pub volume_none: Vec<usize>,
    /// Disinformation messages
    pub volume_disinformation: Vec<usize>,
    /// Fact-check messages
    pub volume_fact_check: Vec<usize>,
}

impl TickSeries {
    /// Empty series with room for `ticks` entries
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            susceptible: Vec::with_capacity(ticks),
            infected: Vec::with_capacity(ticks),
            unresistant_infected: Vec::with_capacity(ticks),
            resistant: Vec::with_capacity(ticks),
            active_resistant: Vec::with_capacity(ticks),
            volume_none: Vec::with_capacity(ticks),
            volume_disinformation: Vec::with_capacity(ticks),
            volume_fact_check: Vec::with_capacity(ticks),
        }
    }

    /// Append one tick
    pub fn push(&mut self, stats: &TickStats) {
        self.susceptible.push(stats.susceptible);
        self.infected.push(stats.infected);
        self.unresistant_infected.push(stats.unresistant_infected);
        self.resistant.push(stats.resistant);
        self.active_resistant.push(stats.active_resistant);
        self.volume_none.push(stats.volume_none);
        self.volume_disinformation.push(stats.volume_disinformation);
        self.volume_fact_check.push(stats.volume_fact_check);
    }

    /// Number of recorded ticks
    pub fn len(&self) -> usize {
        self.susceptible.len()
    }

    /// Whether no tick was recorded
    pub fn is_empty(&self) -> bool {
        self.susceptible.is_empty()
    }

    /// Snapshot of tick `t`
    pub fn get(&self, t: usize) -> Option<TickStats> {
        Some(TickStats {
            susceptible: *self.susceptible.get(t)?,
            infected: *self.infected.get(t)?,
            unresistant_infected: *self.unresistant_infected.get(t)?,
            resistant: *self.resistant.get(t)?,
            active_resistant: *self.active_resistant.get(t)?,
            volume_none: *self.volume_none.get(t)?,
            volume_disinformation: *self.volume_disinformation.get(t)?,
            volume_fact_check: *self.volume_fact_check.get(t)?,
        })
    }

    /// Iterate snapshots in tick order
    pub fn iter(&self) -> impl Iterator<Item = TickStats> + '_ {
        (0..self.len()).filter_map(|t| self.get(t))
    }
}

/// Terminal counts with infected and resistant statuses merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalCounts {
    /// Susceptible agents
    pub susceptible: usize,
    /// Infected agents, dark originator included
    pub infected: usize,
    /// Resistant agents, light originator included
    pub resistant: usize,
}

impl FinalCounts {
    /// Count a population
    pub fn from_agents<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        TickStats::from_statuses(agents).collapsed()
    }

    /// Sum of the three buckets
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.resistant
    }
}

/// One node of a network snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Agent id
    pub id: AgentId,
    /// Held opinion
    pub opinion: Opinion,
    /// Status
    pub status: Status,
    /// Dark originator
    pub dark: bool,
    /// Prebunking originator
    pub prebunk: bool,
}

impl From<&Agent> for NodeRecord {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id(),
            opinion: agent.opinion(),
            status: agent.status(),
            dark: agent.is_dark(),
            prebunk: agent.is_prebunk(),
        }
    }
}

/// Directed friend edge, listener first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Listening agent
    pub source: AgentId,
    /// Agent listened to
    pub target: AgentId,
}

/// Node and edge lists of the network at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Nodes in population order
    pub nodes: Vec<NodeRecord>,
    /// Edges in population order
    pub edges: Vec<EdgeRecord>,
}

impl NetworkSnapshot {
    /// Capture the current state of a population
    pub fn capture(population: &Population) -> Self {
        Self {
            nodes: population.agents().iter().map(NodeRecord::from).collect(),
            edges: population
                .edges()
                .map(|(source, target)| EdgeRecord { source, target })
                .collect(),
        }
    }

    /// Snapshot as a petgraph graph; node index `i` is the `i`-th node record
    pub fn to_graph(&self) -> DiGraph<NodeRecord, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: HashMap<AgentId, NodeIndex> = self
            .nodes
            .iter()
            .map(|n| (n.id, graph.add_node(*n)))
            .collect();

        for edge in &self.edges {
            if let (Some(&s), Some(&t)) = (indices.get(&edge.source), indices.get(&edge.target)) {
                graph.add_edge(s, t, ());
            }
        }
        graph
    }

    /// Number of listeners of each node, in node order
    pub fn in_degrees(&self) -> Vec<usize> {
        let graph = self.to_graph();
        graph
            .node_indices()
            .map(|i| graph.neighbors_directed(i, Direction::Incoming).count())
            .collect()
    }

    /// Render as Graphviz DOT.
    ///
    /// Nodes are coloured by status and sized by total degree.
    pub fn to_dot(&self) -> String {
        let graph = self.to_graph();
        let mut dot = String::new();
        dot.push_str("digraph Network {\n");
        dot.push_str("  node [shape=circle style=filled fixedsize=true];\n\n");

        for index in graph.node_indices() {
            let node = &graph[index];
            let degree = graph.neighbors_undirected(index).count();
            dot.push_str(&format!(
                "  {} [label=\"{}\" fillcolor={} width={:.2}];\n",
                node.id.0,
                node.id.0,
                status_colour(node.status),
                0.3 + 0.05 * degree as f64
            ));
        }

        dot.push('\n');
        for edge in graph.raw_edges() {
            dot.push_str(&format!(
                "  {} -> {};\n",
                graph[edge.source()].id.0,
                graph[edge.target()].id.0
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

/// Plot colour of a status
pub fn status_colour(status: Status) -> &'static str {
    match status {
        Status::Susceptible => "grey",
        Status::Resistant => "lightgreen",
        Status::ActiveResistant => "darkgreen",
        Status::Infected => "pink",
        Status::UnresistantInfected => "darkred",
    }
}

/// Everything a finished run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Effective configuration
    pub config: SimulationConfig,
    /// Ticks executed
    pub ticks: usize,
    /// Per-tick aggregates
    pub series: TickSeries,
    /// Collapsed status counts after the last tick
    pub final_counts: FinalCounts,
    /// Network right after construction
    pub initial_network: NetworkSnapshot,
    /// Network after the last tick
    pub final_network: NetworkSnapshot,
}

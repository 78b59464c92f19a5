//! Prebunk simulation CLI binary.
//!
//! # Commands
//!
//! - `run` - Run one simulation and report the final counts
//! - `sweep` - Run a prebunk/immunization probability grid
//! - `config` - Print the effective configuration as TOML

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use prebunk::{AttackKind, Simulation, SimulationConfig, Sweep, VERSION};

#[derive(Parser)]
#[command(name = "prebunk")]
#[command(version = VERSION)]
#[command(about = "Disinformation and prebunking spread on a social network", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation
    Run {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Number of ticks
        #[arg(short, long)]
        ticks: Option<usize>,

        /// Number of agents
        #[arg(short, long)]
        population: Option<usize>,

        /// Friends per agent
        #[arg(long)]
        max_friends: Option<usize>,

        /// Attack kind (burst, escalating, decaying, default)
        #[arg(long)]
        attack: Option<AttackKind>,

        /// First tick of the attack
        #[arg(long)]
        attack_start: Option<usize>,

        /// Write the full JSON report here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the final network as Graphviz DOT here
        #[arg(long)]
        export_graph: Option<PathBuf>,

        /// Log every tick
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run a grid of prebunk and immunization probabilities
    Sweep {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prebunk probabilities, comma separated
        #[arg(long, value_delimiter = ',', default_value = "0,0.25,0.5,0.75,1")]
        prebunk: Vec<f64>,

        /// Immunization probabilities, comma separated
        #[arg(long, value_delimiter = ',', default_value = "0")]
        immunization: Vec<f64>,

        /// Runs per grid point
        #[arg(short, long, default_value = "10")]
        repetitions: usize,

        /// Write the grid as JSON here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Log every run
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            seed,
            ticks,
            population,
            max_friends,
            attack,
            attack_start,
            output,
            export_graph,
            verbose,
        } => {
            init_logging(verbose);
            let mut config = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(ticks) = ticks {
                config.ticks = ticks;
            }
            if let Some(population) = population {
                config.network.population = population;
            }
            if let Some(max_friends) = max_friends {
                config.network.max_friends = max_friends;
            }
            if let Some(kind) = attack {
                config.attack.kind = kind;
            }
            if let Some(start) = attack_start {
                config.attack.start = start;
            }
            cmd_run(config, output, export_graph)
        }

        Commands::Sweep {
            config,
            prebunk,
            immunization,
            repetitions,
            output,
            verbose,
        } => {
            init_logging(verbose);
            let config = load_config(config.as_deref())?;
            cmd_sweep(config, prebunk, immunization, repetitions, output)
        }

        Commands::Config { config } => {
            let config = load_config(config.as_deref())?;
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

fn cmd_run(
    config: SimulationConfig,
    output: Option<PathBuf>,
    export_graph: Option<PathBuf>,
) -> anyhow::Result<()> {
    let simulation = Simulation::new(config)?;
    let population = simulation.population();

    println!("{}", "=".repeat(60));
    println!(" PREBUNK SIMULATION");
    println!(
        " Agents: {} | Friends: {} | Ticks: {} | Attack: {} @ {}",
        population.len(),
        simulation.config().network.max_friends,
        simulation.config().ticks,
        simulation.config().attack.kind,
        simulation.config().attack.start
    );
    println!(
        " Light: {} | Dark: {} | Seed: {}",
        population.light(),
        population.dark(),
        simulation.config().seed
    );
    println!("{}", "=".repeat(60));

    let report = simulation.run();
    let counts = report.final_counts;

    println!("\nFINAL COUNTS:");
    println!("  Susceptible: {}", counts.susceptible);
    println!("  Infected:    {}", counts.infected);
    println!("  Resistant:   {}", counts.resistant);

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("\nReport written to: {}", path.display());
    }

    if let Some(path) = export_graph {
        std::fs::write(&path, report.final_network.to_dot())?;
        println!(
            "Graph written to: {} (view with: dot -Tpng {} -o graph.png)",
            path.display(),
            path.display()
        );
    }

    Ok(())
}

fn cmd_sweep(
    config: SimulationConfig,
    prebunk: Vec<f64>,
    immunization: Vec<f64>,
    repetitions: usize,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let points = Sweep::new(config)
        .with_prebunk(prebunk)
        .with_immunization(immunization)
        .with_repetitions(repetitions)
        .run()?;

    println!(
        "| {:>8} | {:>8} | {:>11} | {:>9} | {:>9} |",
        "P(r)", "P(v)", "Susceptible", "Infected", "Resistant"
    );
    println!("|{:-<10}|{:-<10}|{:-<13}|{:-<11}|{:-<11}|", "", "", "", "", "");
    for point in &points {
        println!(
            "| {:>8.2} | {:>8.2} | {:>11.1} | {:>9.1} | {:>9.1} |",
            point.prebunk_probability,
            point.immunization_probability,
            point.mean_susceptible(),
            point.mean_infected(),
            point.mean_resistant()
        );
    }

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&points)?)?;
        println!("\nSweep written to: {}", path.display());
    }

    Ok(())
}

// Helper functions

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SimulationConfig> {
    let config = match path {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    Ok(config.apply_env())
}

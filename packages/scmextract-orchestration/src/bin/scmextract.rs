//! scmextract CLI
//!
//! Extract structural causal models from simulator source code.
//!
//! # Usage
//!
//! ```bash
//! # Extract a graph from one file
//! scmextract extract model.py -m ast -v S -v I -v R -o graph.json
//!
//! # Run an experiment config
//! scmextract run configs/sir_basic.yaml
//!
//! # Benchmark every simulator/extractor pair
//! scmextract benchmark -m ast -o results/benchmark
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use scmextract_ir::features::causal_graph::to_dot;
use scmextract_ir::{CausalExtractor, CausalGraph, ExtractorOptions, VariableSet};
use scmextract_orchestration::benchmark::TerminalReporter;
use scmextract_orchestration::{
    load_config, run_experiment, save_outcome, BenchmarkRunner, Registries,
};

#[derive(Parser)]
#[command(name = "scmextract", version)]
#[command(about = "Extract Structural Causal Models from simulator code", long_about = None)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Debug logging
    #[arg(long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a causal graph from a Python source file
    Extract {
        source_file: PathBuf,

        /// Extraction method
        #[arg(short, long, default_value = "ast")]
        method: String,

        /// Variable of interest (repeatable)
        #[arg(short, long = "variables")]
        variables: Vec<String>,

        /// Output file; `.dot` writes Graphviz, anything else JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run an experiment from a YAML config file
    Run {
        config_file: PathBuf,

        /// Override the configured output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List available simulators
    ListSimulators,

    /// List available extraction methods
    ListExtractors,

    /// Evaluate every simulator/extractor pair
    Benchmark {
        /// Extraction methods (default: all)
        #[arg(short, long = "methods")]
        methods: Vec<String>,

        /// Simulators (default: all)
        #[arg(short, long = "simulators")]
        simulators: Vec<String>,

        #[arg(short, long, default_value = "results/benchmark")]
        output: PathBuf,
    },
}

fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let registries = Registries::builtin();

    match cli.command {
        Commands::Extract {
            source_file,
            method,
            variables,
            output,
        } => extract(&registries, &source_file, &method, variables, output.as_deref(), cli.quiet),
        Commands::Run {
            config_file,
            output_dir,
        } => run(&registries, &config_file, output_dir),
        Commands::ListSimulators => {
            println!("Available simulators:");
            for (name, description) in registries.simulators.describe() {
                println!("  {name}: {description}");
            }
            Ok(())
        }
        Commands::ListExtractors => {
            println!("Available extractors:");
            for (name, description) in registries.extractors.describe() {
                println!("  {name}: {description}");
            }
            Ok(())
        }
        Commands::Benchmark {
            methods,
            simulators,
            output,
        } => benchmark(&registries, methods, simulators, &output),
    }
}

fn extract(
    registries: &Registries,
    source_file: &Path,
    method: &str,
    variables: Vec<String>,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let extractor = registries
        .extractors
        .create(method, &ExtractorOptions::default())?;
    let variables: Option<VariableSet> =
        (!variables.is_empty()).then(|| variables.into_iter().collect());

    let graph = extractor
        .extract(source_file, variables.as_ref())
        .with_context(|| format!("extracting {}", source_file.display()))?;

    match output {
        Some(path) => {
            save_graph(&graph, path)?;
            if !quiet {
                println!("Saved to: {}", path.display());
            }
        }
        None if !quiet => {
            println!("\nExtracted Causal Graph:");
            println!(
                "  Variables: {}",
                graph.nodes().collect::<Vec<_>>().join(", ")
            );
            println!("  Edges ({}):", graph.num_edges());
            for edge in graph.edges() {
                println!("    {edge}");
            }
        }
        None => {}
    }
    Ok(())
}

fn save_graph(graph: &CausalGraph, path: &Path) -> Result<()> {
    let is_dot = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dot"));

    if is_dot {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("causal_graph");
        std::fs::write(path, to_dot(graph, title))?;
    } else {
        graph.save_json(path)?;
    }
    Ok(())
}

fn run(registries: &Registries, config_file: &Path, output_dir: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(config_file)
        .with_context(|| format!("loading {}", config_file.display()))?;
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }

    println!("Running experiment: {}", config.name);
    println!("  Simulator: {}", config.simulator);
    println!("  Extractor: {}", config.extractor);

    let outcome = run_experiment(&config, registries)?;
    let metrics = &outcome.metrics;

    println!("\nResults:");
    println!("  Precision: {:.3}", metrics.precision);
    println!("  Recall:    {:.3}", metrics.recall);
    println!("  F1 Score:  {:.3}", metrics.f1);
    println!("  SHD:       {}", metrics.shd);

    let saved = save_outcome(&outcome, &config.result_dir())?;
    println!("\nResults saved to: {}", saved.display());
    Ok(())
}

fn benchmark(
    registries: &Registries,
    methods: Vec<String>,
    simulators: Vec<String>,
    output: &Path,
) -> Result<()> {
    let summary = BenchmarkRunner::new(registries)
        .extractors(methods)
        .simulators(simulators)
        .run_and_save(output)?;

    TerminalReporter::print(&summary);
    println!("\nBenchmark complete. Results saved to: {}", output.display());

    if !summary.is_complete() {
        anyhow::bail!("{} benchmark pair(s) failed", summary.failures.len());
    }
    Ok(())
}

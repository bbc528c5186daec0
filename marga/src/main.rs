//! Marga CLI
//!
//! Plans risk-weighted paths for every target in a scenario file.
//!
//! Usage:
//!   marga scenarios/demo.yaml
//!   marga scenarios/demo.yaml --output report.yaml --svg plan.svg
//!
//! Enable per-weight diagnostics with:
//!   RUST_LOG=debug marga scenarios/demo.yaml

use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use marga::{MargaConfig, MissionPlanner, PlanOutcome, Scenario, SvgConfig, SvgRenderer};

/// Risk-weighted grid path planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario YAML file
    scenario: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = marga::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the plan report as YAML
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write an SVG rendering of the plan
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Plan targets in parallel
    #[arg(long)]
    parallel: bool,

    /// Override the path length budget
    #[arg(long)]
    length_budget: Option<f64>,
}

fn main() -> marga::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args.config)?;
    let scenario = Scenario::load(&args.scenario)?;
    info!(
        "Loaded scenario '{}' with {} targets",
        scenario.name,
        scenario.targets.len()
    );

    let mut planner_config = scenario.planner_config(&config.planner)?;
    if args.parallel {
        planner_config = planner_config.with_parallel(true);
    }
    if let Some(budget) = args.length_budget {
        planner_config = planner_config.with_length_budget(budget);
    }
    planner_config.validate()?;

    let field = scenario.build_field()?;
    let counts = field.count_by_class();
    info!(
        "Risk field {}x{}: {} clear, {} penalty, {} impassable",
        field.width(),
        field.height(),
        counts.clear,
        counts.penalty,
        counts.impassable
    );

    let planner = MissionPlanner::new(&field, scenario.origin, planner_config);
    let active = planner.config();
    info!(
        "Length budget {:.1}, risk weights {:.2}..={:.2} in {} steps",
        active.length_budget,
        active.risk_weight_min,
        active.risk_weight_max,
        active.risk_weight_steps
    );
    let report = planner.plan_all(&scenario.targets());

    println!("\n=== {} ===", scenario.name);
    for plan in &report.plans {
        match &plan.outcome {
            PlanOutcome::Planned(p) => println!(
                "{:<16} {:>3} waypoints  length {:>6.2}  risk {:>5.2}  score {:>6.3}  weight {:.2}",
                plan.name,
                p.waypoints.len(),
                p.length,
                p.risk,
                p.score,
                p.risk_weight
            ),
            PlanOutcome::Failed(f) => println!("{:<16} FAILED: {}", plan.name, f),
        }
    }
    let summary = report.summary();
    println!(
        "\n{} of {} targets planned",
        summary.planned,
        summary.total()
    );

    if let Some(ref path) = args.output {
        report.save(path)?;
        println!("Report saved to: {}", path.display());
    }

    if let Some(ref path) = args.svg {
        SvgRenderer::new(&field, &report, SvgConfig::default())
            .with_title(&scenario.name)
            .save(path)?;
        println!("Visualization saved to: {}", path.display());
    }

    Ok(())
}

fn load_config(path: &Path) -> marga::Result<MargaConfig> {
    if path.exists() {
        info!("Loading configuration from {}", path.display());
        MargaConfig::load(path)
    } else {
        warn!("Config not found at {}, using defaults", path.display());
        Ok(MargaConfig::default())
    }
}

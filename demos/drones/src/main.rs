//! drones — plan collision-free routes for a handful of drones through a
//! weighted 3-D airspace.
//!
//! Usage: `drones [CONFIG.toml]`.  Without an argument `drones.toml` in the
//! working directory is used if present, otherwise the built-in defaults
//! (101³ grid, 500 obstacles, three drones).

mod config;

use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use lp_output::{CsvRenderer, PathRenderer, RenderObserver, TextRenderer};
use lp_plan::{AgentOutcome, PlanReport, PlannerBuilder};
use lp_spatial::{AStarRouter, DijkstraRouter, Router};

use config::{DemoConfig, RouterKind};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drones=info".parse()?)
                .add_directive("lp_plan=info".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(arg) => {
            info!("loading configuration from {arg}");
            DemoConfig::load(Path::new(&arg)).with_context(|| format!("loading {arg}"))?
        }
        None if Path::new("drones.toml").exists() => {
            info!("loading configuration from drones.toml");
            DemoConfig::load(Path::new("drones.toml")).context("loading drones.toml")?
        }
        None => {
            info!("using default configuration");
            DemoConfig::default()
        }
    };

    println!("=== drones — lattice path planner ===");
    println!(
        "Grid: {0}×{0}×{0}  |  Obstacles: {1}  |  Agents: {2}  |  Seed: {3}  |  Router: {4:?}",
        config.planner.grid_size,
        config.planner.obstacle_count,
        config.planner.agents.len(),
        config.planner.seed,
        config.router,
    );
    println!();

    match config.router {
        RouterKind::Dijkstra => run(&config, DijkstraRouter),
        RouterKind::AStar    => run(&config, AStarRouter),
    }
}

fn run<R: Router>(config: &DemoConfig, router: R) -> Result<()> {
    // 1. Build the field.
    let t0 = Instant::now();
    let planner = PlannerBuilder::new(config.planner.clone(), router).build()?;
    println!(
        "Cost field: {} cells, {} weighted, {} blocked  ({:.3} s)",
        planner.field.cell_count(),
        planner.field.weighted_count(),
        planner.field.blocked_count(),
        t0.elapsed().as_secs_f64(),
    );

    // 2. Set up output.
    std::fs::create_dir_all(&config.output.dir)
        .with_context(|| format!("creating {}", config.output.dir.display()))?;
    let mut obs = RenderObserver::new(CsvRenderer::new(&config.output.dir)?);

    // 3. Plan.
    let t1 = Instant::now();
    let report = planner.run(&mut obs)?;
    let elapsed = t1.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "Planning complete in {:.3} s: {} scheduled, {} failed",
        elapsed.as_secs_f64(),
        report.success_count(),
        report.failure_count(),
    );
    println!("  {}/paths.csv", config.output.dir.display());

    #[cfg(feature = "json")]
    write_json(&config.output.dir, &report)?;

    println!();
    print_summary(&planner.requests, &report);

    if config.output.print_paths {
        println!();
        let paths: Vec<_> = report.scheduled().cloned().collect();
        let mut text = TextRenderer::new(io::stdout().lock());
        text.render(&paths)?;
        text.finish()?;
    }

    Ok(())
}

fn print_summary(requests: &[lp_core::AgentRequest], report: &PlanReport) {
    println!(
        "{:<6} {:<16} {:<16} {:>6} {:>10} {:>7}",
        "Agent", "Start", "Goal", "Steps", "Weight", "Delay"
    );
    println!("{}", "-".repeat(66));
    for (i, (req, outcome)) in requests.iter().zip(&report.outcomes).enumerate() {
        let start = req.start.to_string();
        let goal = req.goal.to_string();
        match outcome {
            AgentOutcome::Scheduled(sp) => println!(
                "{:<6} {:<16} {:<16} {:>6} {:>10.2} {:>7}",
                i,
                start,
                goal,
                sp.path().len(),
                sp.path().total_weight(),
                sp.total_delay(),
            ),
            AgentOutcome::Failed(e) => println!("{i:<6} {start:<16} {goal:<16} failed: {e}"),
        }
    }
}

#[cfg(feature = "json")]
fn write_json(dir: &Path, report: &PlanReport) -> Result<()> {
    let file = std::fs::File::create(dir.join("paths.json"))?;
    let mut json = lp_output::JsonRenderer::new(io::BufWriter::new(file));
    let paths: Vec<_> = report.scheduled().cloned().collect();
    json.render(&paths)?;
    json.finish()?;
    println!("  {}/paths.json", dir.display());
    Ok(())
}

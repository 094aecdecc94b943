use motionsim::{Scenario, ScenarioConfig};
use motionsim::bench_collision_scan;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Override the scenario's tick count
    #[arg(long)]
    ticks: Option<u64>,

    /// Log telemetry every this many ticks
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Run the collision-scan benchmark instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Open the 2D viewer (needs the `viz` feature)
    #[arg(long)]
    viz: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, report_every: u64) -> Result<()> {
    let report_every = report_every.max(1);

    for _ in 0..scenario.ticks {
        scenario.step()?;

        let tick = scenario.universe.time;
        if tick % report_every == 0 {
            info!(
                tick,
                momentum = %scenario.universe.total_momentum(),
                energy = scenario.universe.kinetic_energy(),
                "telemetry"
            );
        }
    }

    for (i, b) in scenario.universe.snapshot().iter().enumerate() {
        info!(body = i, position = %b.position, velocity = %b.velocity, "final state");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_collision_scan();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    if let Some(ticks) = args.ticks {
        scenario.ticks = ticks;
    }

    if args.viz {
        #[cfg(feature = "viz")]
        {
            motionsim::run_2d(scenario);
            return Ok(());
        }
        #[cfg(not(feature = "viz"))]
        anyhow::bail!("built without the `viz` feature; rebuild with --features viz");
    }

    run_headless(scenario, args.report_every)
}

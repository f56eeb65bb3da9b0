//! foil_vpp - performance prediction for a hydrofoil craft
//!
//! Loads a craft from YAML (or the built-in kite foil) and prints the
//! takeoff, easy ride and top speed answers.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use foilsim::systems::{drag_vs_speed, linspace};
use foilsim::utils::KMH_PER_MS;
use foilsim::{Craft, CraftConfig, FoilRegistry, SimError, Vpp, VppOutcome};

#[derive(Parser)]
#[command(name = "foil_vpp")]
#[command(about = "Predict takeoff, cruise and top speed of a hydrofoil", long_about = None)]
struct Args {
    /// Craft geometry file (YAML); the built-in kite foil when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Weight carried by the foils (N); overrides the config
    #[arg(long)]
    load: Option<f64>,

    /// Largest drag the drive can supply (N)
    #[arg(long, default_value = "250")]
    max_drag: f64,

    /// Lift required at top speed (N); defaults to the load
    #[arg(long)]
    min_lift: Option<f64>,

    /// Extra foil polar as NAME=FILE (columns: aoa, cl, cd, cm); repeatable
    #[arg(long, value_name = "NAME=FILE")]
    polar: Vec<String>,

    /// Also print total drag from 5 to 50 km/h at zero pitch
    #[arg(long)]
    sweep: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log search progress
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to install logger: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_registry(polars: &[String]) -> foilsim::Result<FoilRegistry> {
    let mut registry = FoilRegistry::with_builtins();
    for entry in polars {
        let (name, path) = entry.split_once('=').ok_or_else(|| {
            SimError::InvalidParameter(format!("expected NAME=FILE, got '{}'", entry))
        })?;
        let text = std::fs::read_to_string(path)?;
        let foil = registry.import_polar(name, &text)?;
        info!(foil = foil.name(), path, "imported polar");
    }
    Ok(registry)
}

fn run(args: &Args) -> foilsim::Result<()> {
    let config = match &args.config {
        Some(path) => CraftConfig::from_file(path)?,
        None => CraftConfig::default_kite_foil(),
    };
    let load = args.load.unwrap_or(config.load);
    let min_lift = args.min_lift.unwrap_or(load);
    info!(craft = %config.name, load, max_drag = args.max_drag, "solving");

    let registry = load_registry(&args.polar)?;
    let vpp = Vpp::new(config.vpp);

    let mut craft = Craft::from_config(&config, &registry);
    let takeoff = vpp.find_min_takeoff_v(&mut craft, load, args.max_drag);

    let mut craft = Craft::from_config(&config, &registry);
    let easy = vpp.easy_ride(&mut craft, load, args.max_drag);

    let mut craft = Craft::from_config(&config, &registry);
    let top = vpp.max_speed(&mut craft, load, min_lift, args.max_drag);

    let outcomes: [VppOutcome; 3] = [takeoff, easy, top];

    let sweep = if args.sweep {
        let speeds: Vec<f64> = linspace(5.0, 50.0, 46)
            .into_iter()
            .map(|kmh| kmh / KMH_PER_MS)
            .collect();
        let base = Craft::from_config(&config, &registry);
        let flow = base.context().flow;
        Some(drag_vs_speed(&base, &flow, 0.0, &speeds))
    } else {
        None
    };

    if args.json {
        let report = serde_json::json!({
            "craft": config.name,
            "load": load,
            "max_drag": args.max_drag,
            "outcomes": outcomes,
            "sweep": sweep,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} at {:.0} N, drag limit {:.0} N", config.name, load, args.max_drag);
    for outcome in &outcomes {
        println!("  {}", outcome);
    }
    if let Some(points) = sweep {
        println!();
        println!("{:>8} {:>10} {:>10}", "km/h", "lift N", "drag N");
        for point in points {
            println!(
                "{:>8.1} {:>10.1} {:>10.1}",
                point.x * KMH_PER_MS,
                point.lift,
                point.drag
            );
        }
    }
    Ok(())
}

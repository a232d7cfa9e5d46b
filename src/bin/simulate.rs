//! Headless Wheel Simulator Binary
//!
//! A CLI tool for running spins without the GUI: single runs for eyeballing
//! the physics, and a census mode for checking the winner distribution.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use dinnerwheel::application::{
    FixedImpulse, ManualScheduler, RandomImpulse, SpinHooks, SpinImpulse, Spinner,
};
use dinnerwheel::config::Config;
use dinnerwheel::domain::menu::Menu;

#[derive(Parser)]
#[command(author, version, about = "Headless Wheel Simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a handful of spins and print each outcome
    Run {
        /// Number of spins to run
        #[arg(short, long, default_value = "5")]
        spins: usize,

        /// Fixed initial velocity in degrees per frame (random when omitted)
        #[arg(short, long)]
        velocity: Option<f32>,
    },
    /// Run many spins and print the winner distribution
    Census {
        /// Number of spins to tally
        #[arg(short, long, default_value = "1000")]
        spins: usize,
    },
}

struct SpinOutcome {
    winner: String,
    frames: u64,
    crossings: u32,
    angle: f32,
}

/// Drives one spin to rest on a manual scheduler and collects what the
/// hooks reported.
fn run_spin(spinner: &mut Spinner, velocity: f32) -> Result<SpinOutcome> {
    let scheduler = ManualScheduler::default();
    let crossings = Rc::new(Cell::new(0u32));
    let settled: Rc<RefCell<Option<(f32, String)>>> = Rc::new(RefCell::new(None));

    let crossing_counter = Rc::clone(&crossings);
    let settle_slot = Rc::clone(&settled);
    let hooks = SpinHooks::new()
        .on_update(move |_| crossing_counter.set(crossing_counter.get() + 1))
        .on_spin_end(move |angle, choice| {
            *settle_slot.borrow_mut() = Some((angle, choice.label.clone()));
        });

    if !spinner.spin(velocity, hooks) {
        anyhow::bail!("Wheel is already spinning");
    }
    while spinner.is_spinning() {
        spinner.tick(&scheduler);
    }

    let (angle, winner) = settled
        .borrow_mut()
        .take()
        .context("Spin settled without reporting a winner")?;

    Ok(SpinOutcome {
        winner,
        frames: spinner.frames(),
        crossings: crossings.get(),
        angle,
    })
}

fn main() -> Result<()> {
    // Setup logging. WARN keeps the per-spin engine logs out of the tables.
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load config")?;
    let ring = config.to_wedge_ring()?;
    let tuning = config.to_spin_tuning();

    let menu = Menu::default_dishes();
    let mut spinner = Spinner::new(ring, tuning, menu.enabled_choices())?;

    match cli.command {
        Commands::Run { spins, velocity } => {
            let mut impulse: Box<dyn SpinImpulse> = match velocity {
                Some(deg) => Box::new(FixedImpulse(deg.to_radians())),
                None => Box::new(RandomImpulse {
                    base_deg: config.impulse_base_deg,
                    range_deg: config.impulse_range_deg,
                }),
            };

            println!("{}", "=".repeat(80));
            println!("🎡 DINNER WHEEL SIMULATOR");
            println!(
                "Wedges: {} | Dishes: {} | Decay: {} | Floor: {} rad/frame",
                ring.wedge_count(),
                menu.len(),
                tuning.decay,
                tuning.floor
            );
            println!("{}\n", "=".repeat(80));

            for i in 1..=spins {
                let outcome = run_spin(&mut spinner, impulse.draw_velocity())?;
                println!(
                    "Spin {:>3}: 🍽 {:<24} {:>4} frames, {:>3} crossings, rests at {:.3} rad",
                    i, outcome.winner, outcome.frames, outcome.crossings, outcome.angle
                );
            }

            println!("\n✅ Simulation complete!\n");
        }
        Commands::Census { spins } => {
            let mut impulse = RandomImpulse {
                base_deg: config.impulse_base_deg,
                range_deg: config.impulse_range_deg,
            };

            println!("{}", "=".repeat(80));
            println!("📊 WINNER CENSUS ({} spins)", spins);
            println!(
                "Wedges: {} | Dishes: {} | Impulse: {}..{} deg/frame",
                ring.wedge_count(),
                menu.len(),
                config.impulse_base_deg,
                config.impulse_base_deg + config.impulse_range_deg
            );
            println!("{}\n", "=".repeat(80));

            let mut tally: BTreeMap<String, u32> = BTreeMap::new();
            let mut total_frames = 0u64;

            for _ in 0..spins {
                let outcome = run_spin(&mut spinner, impulse.draw_velocity())?;
                *tally.entry(outcome.winner).or_insert(0) += 1;
                total_frames += outcome.frames;
            }

            let mut rows: Vec<(&String, &u32)> = tally.iter().collect();
            rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            println!("{:<26} {:>6} {:>8}", "Dish", "Wins", "Share");
            println!("{}", "-".repeat(44));
            for (label, count) in rows {
                println!(
                    "{:<26} {:>6} {:>7.1}%",
                    label,
                    count,
                    f64::from(*count) * 100.0 / spins as f64
                );
            }
            println!("{}", "-".repeat(44));
            println!(
                "Average spin length: {:.1} frames",
                total_frames as f64 / spins.max(1) as f64
            );

            println!("\n✅ Census complete!\n");
        }
    }

    Ok(())
}

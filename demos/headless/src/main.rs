//! headless — runs the physarum simulation without a window and writes
//! greyscale PGM frames.
//!
//! ```text
//! cargo run -p headless --release [-- path/to/config.json]
//! RUST_LOG=debug cargo run -p headless     # per-tick summaries
//! ```
//!
//! The optional JSON file may set any subset of `PhysarumConfig` fields;
//! missing fields keep their defaults.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use ph_core::PhysarumConfig;
use ph_sim::error::RenderError;
use ph_sim::{Driver, Frame, RenderControl, Renderer, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:   &str = "output/headless";
const RENDER_EVERY: u64  = 50;   // ticks between frames
const MAX_FRAMES:   usize = 20;

// ── PGM renderer ──────────────────────────────────────────────────────────────

/// Writes each frame as a binary PGM (`P5`) file and stops after a budget.
struct PgmWriter {
    dir:     PathBuf,
    written: usize,
    budget:  usize,
}

impl PgmWriter {
    fn new(dir: &Path, budget: usize) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        Ok(Self { dir: dir.to_path_buf(), written: 0, budget })
    }
}

impl Renderer for PgmWriter {
    fn render(&mut self, frame: &Frame<'_>) -> Result<RenderControl, RenderError> {
        let path = self.dir.join(format!("frame_{:05}.pgm", frame.tick.0));
        let mut out = BufWriter::new(File::create(&path)?);
        write!(out, "P5\n{} {}\n255\n", frame.width, frame.height)?;
        out.write_all(frame.pixels)?;
        out.flush()?;

        self.written += 1;
        info!(tick = %frame.tick, path = %path.display(), "frame written");
        if self.written >= self.budget {
            Ok(RenderControl::Stop)
        } else {
            Ok(RenderControl::Continue)
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<String>) -> Result<PhysarumConfig> {
    let Some(path) = path else {
        return Ok(PhysarumConfig::default());
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let config = load_config(std::env::args().nth(1))?;
    let max_ticks = config.total_ticks;
    println!("=== headless — physarum trail simulation ===");
    println!(
        "Field: {}x{}  |  Agents: {}  |  Model: {:?}  |  Seed: {}",
        config.width, config.height, config.population, config.tick_model, config.seed
    );

    let mut sim = SimBuilder::new(config).build()?;

    let renderer = PgmWriter::new(Path::new(OUTPUT_DIR), MAX_FRAMES)?;
    let mut driver = Driver::new(renderer).max_ticks(max_ticks).render_every(RENDER_EVERY);

    let t0 = Instant::now();
    let report = driver.run(&mut sim)?;
    let elapsed = t0.elapsed();

    let view = sim.snapshot();
    println!();
    println!("Stopped after {} ticks ({:?})", report.ticks, report.reason);
    println!("Frames written: {}  →  {OUTPUT_DIR}/", driver.renderer().written);
    println!("Trail mass: {:.4}  |  Peak cell: {:.4}", view.total_mass(), view.max_value());
    println!(
        "Wall time: {:.2?}  ({:.0} ticks/s)",
        elapsed,
        report.ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    Ok(())
}

//! End-to-end export walkthrough.
//!
//! Drives the session machine with a toy engine that fills grids at random,
//! then writes both artifacts for the best design it finds: the schematic
//! container to disk and the placement string to the clipboard sink (echoed
//! to stdout). The real search engine is an external component; the toy one
//! exists only to exercise the export pipeline.

use anyhow::{Context, Result};
use fission_opt::export::{schematic, state_list};
use fission_opt::{
    catalog, tally, GridSource, Optimizer, OptimizerSettings, Phase, Progress, ReactorSample,
    SampleSummary, Session, TileId,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

const SETTINGS: &str = r#"
size_x = 3
size_y = 3
size_z = 3
fuel_preset = "LEU235"
goal = 0
"#;

/// Toy engine: proposes random grids and keeps the one with the most coolers.
struct RandomFill {
    shape: [usize; 3],
    rng: StdRng,
    steps: u32,
    best: Option<RandomSample>,
    best_score: usize,
    changed: bool,
}

struct RandomSample {
    data: Vec<TileId>,
    shape: [usize; 3],
    score: usize,
}

impl GridSource for RandomSample {
    fn data(&self) -> &[TileId] {
        &self.data
    }
    fn shape(&self, axis: usize) -> usize {
        self.shape[axis]
    }
    fn stride(&self, axis: usize) -> usize {
        [self.shape[1] * self.shape[2], self.shape[2], 1][axis]
    }
}

impl ReactorSample for RandomSample {
    fn summary(&self) -> SampleSummary {
        SampleSummary {
            power: self.score as f64 * 100.0,
            ..SampleSummary::default()
        }
    }
}

impl RandomFill {
    fn new(settings: &OptimizerSettings) -> Self {
        RandomFill {
            shape: [
                settings.size_y as usize,
                settings.size_z as usize,
                settings.size_x as usize,
            ],
            rng: StdRng::seed_from_u64(0x5eed),
            steps: 0,
            best: None,
            best_score: 0,
            changed: false,
        }
    }
}

impl Optimizer for RandomFill {
    fn step(&mut self) {
        self.steps += 1;
        let volume: usize = self.shape.iter().product();
        let n = catalog().base_len() as u16;
        let data: Vec<TileId> = (0..volume)
            .map(|_| {
                if self.rng.gen_bool(0.4) {
                    TileId::AIR
                } else {
                    TileId(self.rng.gen_range(0..n * 2 + 2))
                }
            })
            .collect();
        let score = data
            .iter()
            .filter(|id| id.classify().is_active_variant() || (id.0) < n)
            .count();
        if self.best.is_none() || score > self.best_score {
            self.best_score = score;
            self.best = Some(RandomSample {
                data,
                shape: self.shape,
                score,
            });
            self.changed = true;
        }
    }

    fn progress(&self) -> Progress {
        Progress {
            episode: 1,
            iteration: self.steps,
            phase: Phase::Stage(0),
        }
    }

    fn best_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn best(&self) -> Option<&dyn ReactorSample> {
        self.best.as_ref().map(|sample| sample as &dyn ReactorSample)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let settings =
        OptimizerSettings::from_toml_str(SETTINGS).context("settings document rejected")?;
    println!(
        "Optimizing a {}x{}x{} core...",
        settings.size_x, settings.size_y, settings.size_z
    );

    let mut session = Session::new();
    session.run(|| RandomFill::new(&settings));

    let mut latest = None;
    for _ in 0..64 {
        if let Some((progress, best)) = session.step() {
            if let Some(best) = best {
                println!("{}: new best (power {})", progress, best.summary.power);
                latest = Some(best);
            }
        }
    }
    session.stop();

    let best = latest.expect("the toy engine always finds a design");

    let path = Path::new(schematic::DEFAULT_FILE_NAME);
    schematic::save(&best.snapshot, path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Saved {}", path.display());

    let placement = state_list::copy(&best.snapshot);
    println!("Placement string ({} chars):\n{}", placement.len(), placement);

    println!("Total number of blocks used");
    let counts = tally::tally(&best.snapshot);
    for (id, count) in tally::display_rows(&counts) {
        if id < 0 {
            println!("  Casing x {}", count);
        } else {
            let display = catalog().resolve_display(TileId(id as u16));
            let prefix = if display.is_active_variant { "Active " } else { "" };
            println!("  {}{} x {}", prefix, display.tooltip, count);
        }
    }
    Ok(())
}

use argh::FromArgs;
use std::path::PathBuf;

use posematch::{
    scene::{build_scene, SceneStyle},
    MatcherConfig, PoseMatcher, StrategyKind,
};
use posematch_io as pio;

#[derive(FromArgs)]
/// Locate a model pose set inside a space pose set and export the matching offsets
struct Args {
    /// path to the model poses
    #[argh(option, default = "PathBuf::from(\"model.json\")")]
    model: PathBuf,

    /// path to the space poses
    #[argh(option, default = "PathBuf::from(\"space.json\")")]
    space: PathBuf,

    /// path to write the accepted offsets to
    #[argh(option, short = 'o', default = "PathBuf::from(\"offsetExport.json\")")]
    output: PathBuf,

    /// optional JSON file with the matcher configuration
    #[argh(option)]
    config: Option<PathBuf>,

    /// per-component tolerance, overrides the configuration file
    #[argh(option, short = 't')]
    tolerance: Option<f64>,

    /// candidate strategy, `affine` or `decomposed`, overrides the configuration file
    #[argh(option, short = 's')]
    strategy: Option<StrategyKind>,

    /// index of the offset used for the scene summary
    #[argh(option, default = "0")]
    selected_offset: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => MatcherConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }

    let model = pio::load_pose_set(&args.model)?;
    println!("Model: #{} poses", model.len());

    let space = pio::load_pose_set(&args.space)?;
    println!("Space: #{} poses", space.len());

    let matcher = PoseMatcher::new(model, space, config)?;
    let report = matcher.run();

    println!(
        "Strategy: {} tolerance: {} candidates: {} valid offsets: {}",
        report.strategy,
        matcher.tolerance(),
        report.candidates.len(),
        report.offsets.len()
    );
    for (i, offset) in report.offsets.iter().enumerate() {
        let t = offset.translation();
        let q = offset.rotation_as_quaternion();
        println!(
            "  offset {}: translation [{:.6}, {:.6}, {:.6}] rotation [{:.6}, {:.6}, {:.6}, {:.6}]",
            i, t.x, t.y, t.z, q.x, q.y, q.z, q.w
        );
    }

    let written = pio::write_offsets_json(&report.offsets, &args.output)?;
    if written > 0 {
        println!("Wrote {} offsets to {}", written, args.output.display());
    }

    let layout = build_scene(
        matcher.model(),
        matcher.space(),
        &report.offsets,
        args.selected_offset,
        &SceneStyle::default(),
    );
    println!(
        "Scene: {} model, {} transformed, {} space primitives",
        layout.model.len(),
        layout.transformed.len(),
        layout.space.len()
    );

    Ok(())
}

//! Pathwright replay CLI
//!
//! Drives an editing session from a recorded list of input snapshots and
//! prints what the presentation layer would receive.
//!
//! # Usage
//!
//! ```bash
//! # One JSON tick output per line
//! pw-replay crates/pw-editor/demos/square.json
//!
//! # Final curve statistics only
//! pw-replay --summary session.json
//!
//! # Custom sampling / follower settings
//! pw-replay --config editor.json session.json
//! ```

use std::path::{Path, PathBuf};
use std::process;

use log::info;
use pw_core::error::Result;
use pw_curve::PathQuery;
use pw_editor::{
    parse_script, EditorConfig, EditorSession, InputSnapshot, MarkerRole, MarkerScene,
};

fn print_usage() {
    eprintln!(
        r#"Pathwright replay CLI

USAGE:
    pw-replay [--config <config.json>] [--summary] <script.json>

ARGS:
    <script.json>   JSON array of input snapshots, one per tick;
                    unknown keys are rejected

OPTIONS:
    --config        Load editor settings from a JSON file
    --summary       Print final curve statistics instead of per-tick output
    --help          Show this help message
"#
    );
}

struct Args {
    script: PathBuf,
    config: Option<PathBuf>,
    summary: bool,
}

fn parse_args() -> Args {
    let mut script = None;
    let mut config = None;
    let mut summary = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--summary" => summary = true,
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --config requires a path\n");
                    print_usage();
                    process::exit(1);
                }
            },
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => {
                eprintln!("Error: unexpected argument '{arg}'\n");
                print_usage();
                process::exit(1);
            }
        }
    }

    let Some(script) = script else {
        eprintln!("Error: Missing required argument <script.json>\n");
        print_usage();
        process::exit(1);
    };

    Args {
        script,
        config,
        summary,
    }
}

fn load_script(path: &Path) -> Result<Vec<InputSnapshot>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let script = load_script(&args.script)?;
    info!("Replaying {} ticks from {}", script.len(), args.script.display());

    let mut session = EditorSession::new(&config)?;
    let mut scene = MarkerScene::new();

    for input in &script {
        let output = session.tick(input);
        scene.apply_all(&output.commands);
        if !args.summary {
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    if args.summary {
        let curve = session.curve();
        println!("Ticks:           {}", script.len());
        println!("Anchors:         {}", curve.anchor_count());
        println!("Segments:        {}", curve.segment_count());
        println!("Samples:         {}", curve.samples().len());
        println!("Length:          {:.6}", curve.total_length());
        println!(
            "Markers:         {} anchor, {} handle, {} sample",
            scene.count(MarkerRole::Anchor),
            scene.count(MarkerRole::Handle),
            scene.count(MarkerRole::Sample)
        );
        println!(
            "Follower:        {:?} at {:.3}",
            session.follower().state(),
            session.follower().progress()
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = parse_args();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

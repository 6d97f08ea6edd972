//! Terminal front end for the carving engine

use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dungen::{generate, GeneratorKind, Snapshot};

/// Grow a maze step by step and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid side length
    #[arg(long, default_value_t = 50)]
    size: usize,

    /// Random seed, entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Carving rule: `classic` (no loops) or `modified` (loops allowed)
    #[arg(long, default_value_t = GeneratorKind::Classic)]
    variant: GeneratorKind,

    /// Redraw every intermediate step on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 20)]
    frame_length: u64,
}

fn draw(snapshot: &Snapshot) {
    print!("\x1B[2J\x1B[1;1H");
    print!("{}", snapshot);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut snapshots = generate(args.size, args.seed, args.variant)
        .with_context(|| format!("cannot generate a maze of size {}", args.size))?;

    let mut last = None;
    for snapshot in snapshots.by_ref() {
        let snapshot = snapshot.context("carving failed")?;
        if args.playback {
            draw(&snapshot);
            thread::sleep(Duration::from_millis(args.frame_length));
        }
        last = Some(snapshot);
    }

    if let Some(last) = last {
        if !args.playback {
            print!("{}", last);
        }
        eprintln!(
            "{} maze, {} steps, {} carves, {} passages",
            snapshots.kind(),
            snapshots.steps_taken(),
            snapshots.carved_steps(),
            last.passage_count()
        );
    }

    Ok(())
}

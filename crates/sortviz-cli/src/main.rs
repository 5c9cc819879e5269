//! `sortviz`: animate sorting algorithms in the terminal.

mod commands;
mod terminal;

use std::io::{self, BufReader, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sortviz_algos::{generate, Catalog};
use sortviz_core::{AlgorithmKind, ArrayShape, Value};
use sortviz_engine::{realtime, Controller, NullSink, Speed, VisualizerConfig};
use sortviz_render::TextCanvas;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{spawn_reader, HELP};
use crate::terminal::TerminalSink;

#[derive(Parser, Debug)]
#[command(name = "sortviz", version, about = "Step-by-step sorting visualizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate a sort, controlled by line commands on stdin.
    Play(PlayArgs),
    /// Print the action log of sorting the given values.
    Log {
        #[arg(long, short, default_value = "bubble")]
        algorithm: AlgorithmKind,
        #[arg(required = true)]
        values: Vec<Value>,
    },
    /// List the algorithms and their pseudocode.
    Algorithms,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[arg(long, short, default_value = "bubble")]
    algorithm: AlgorithmKind,
    /// Number of bars.
    #[arg(long, short = 'n', default_value_t = 60)]
    size: usize,
    /// random, reversed or nearly-sorted.
    #[arg(long, default_value = "random")]
    shape: ArrayShape,
    /// Milliseconds between actions.
    #[arg(long, conflicts_with = "speed")]
    delay_ms: Option<u64>,
    /// Speed level 0..=1000; higher is faster.
    #[arg(long)]
    speed: Option<u64>,
    /// Seed for array generation; defaults to the clock.
    #[arg(long)]
    seed: Option<u64>,
    /// Bar height in text rows.
    #[arg(long, default_value_t = 16)]
    rows: usize,
    /// Sort without delays or drawing and print the final metrics.
    #[arg(long)]
    headless: bool,
}

impl PlayArgs {
    fn config(&self) -> VisualizerConfig {
        let speed = match (self.delay_ms, self.speed) {
            (Some(ms), _) => Speed::DelayMs(ms),
            (None, Some(level)) => Speed::Level(level),
            (None, None) => Speed::default(),
        };
        VisualizerConfig {
            size: self.size,
            shape: self.shape,
            algorithm: self.algorithm,
            speed,
            seed: self.seed.unwrap_or_else(clock_seed),
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play(args) => play(&args),
        Command::Log { algorithm, values } => print_log(algorithm, &values, &mut io::stdout().lock()),
        Command::Algorithms => print_algorithms(&mut io::stdout().lock()),
    }
}

fn play(args: &PlayArgs) -> Result<()> {
    let config = args.config();
    info!(
        algorithm = %config.algorithm,
        size = config.size,
        shape = %config.shape,
        seed = config.seed,
        "starting session"
    );

    if args.headless {
        let controller = Controller::new(config, NullSink).context("invalid settings")?;
        let controller = realtime::run_headless(controller);
        let mut out = io::stdout().lock();
        writeln!(out, "{} {}", controller.config().algorithm, controller.metrics())?;
        writeln!(out, "{:?}", controller.values())?;
        return Ok(());
    }

    let sink = TerminalSink::new(io::stdout(), TextCanvas::new(args.rows)).clearing(true);
    let controller = Controller::new(config, sink).context("invalid settings")?;
    eprintln!("{HELP}");

    let (events, rx) = crossbeam_channel::unbounded();
    // The reader blocks on stdin; it is left behind when the driver returns.
    spawn_reader(BufReader::new(io::stdin()), events).context("spawning stdin reader")?;
    let controller = realtime::run(controller, rx);
    info!(state = %controller.state(), metrics = %controller.metrics(), "session ended");
    Ok(())
}

fn print_log(algorithm: AlgorithmKind, values: &[Value], out: &mut impl Write) -> Result<()> {
    let log = generate(algorithm, values);
    for (position, entry) in log.entries().iter().enumerate() {
        writeln!(out, "{position:>6}  {}", entry.action)?;
    }
    writeln!(out, "{}", log.totals())?;
    Ok(())
}

fn print_algorithms(out: &mut impl Write) -> Result<()> {
    for alg in Catalog::new().iter() {
        writeln!(out, "── {} ──", alg.name())?;
        writeln!(out, "{}", alg.pseudocode())?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_defaults() {
        let cli = Cli::try_parse_from(["sortviz", "play", "--seed", "9"]).unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let config = args.config();
        assert_eq!(config.size, 60);
        assert_eq!(config.algorithm, AlgorithmKind::Bubble);
        assert_eq!(config.shape, ArrayShape::Random);
        assert_eq!(config.speed, Speed::default());
        assert_eq!(config.seed, 9);
        assert!(!args.headless);
    }

    #[test]
    fn play_flags() {
        let cli = Cli::try_parse_from([
            "sortviz",
            "play",
            "-a",
            "quick",
            "-n",
            "25",
            "--shape",
            "reversed",
            "--speed",
            "800",
            "--headless",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let config = args.config();
        assert_eq!(config.algorithm, AlgorithmKind::Quick);
        assert_eq!(config.size, 25);
        assert_eq!(config.shape, ArrayShape::Reversed);
        assert_eq!(config.speed, Speed::Level(800));
        assert!(args.headless);
    }

    #[test]
    fn delay_and_speed_conflict() {
        let parsed =
            Cli::try_parse_from(["sortviz", "play", "--delay-ms", "10", "--speed", "900"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(Cli::try_parse_from(["sortviz", "log", "-a", "heap", "1", "2"]).is_err());
    }

    #[test]
    fn log_prints_actions_then_totals() {
        let mut out = Vec::new();
        print_log(AlgorithmKind::Bubble, &[2, 1], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("compare 0 1"));
        assert!(lines[1].contains("swap 0 1 [1, 2]"));
        assert_eq!(lines[4], "comparisons=1 swaps=1 writes=0");
    }

    #[test]
    fn algorithms_lists_every_name() {
        let mut out = Vec::new();
        print_algorithms(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for kind in AlgorithmKind::ALL {
            assert!(text.contains(&format!("── {kind} ──")));
        }
    }
}

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use castellan_core::Board;
use castellan_perft::{DepthResult, SuiteConfig, debug_perft, run_perft_tests, step_through};

#[derive(Parser, Debug)]
#[command(name = "castellan", about = "Legal move generation and perft for castellan")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf nodes at DEPTH and report time and speed
    Perft {
        #[arg(value_name = "DEPTH")]
        depth: u32,
        /// FEN string or "startpos"
        #[arg(long, default_value = "startpos")]
        fen: String,
    },
    /// Per-move node counts at DEPTH, cross-checked against perft
    Divide {
        #[arg(value_name = "DEPTH")]
        depth: u32,
        /// FEN string or "startpos"
        #[arg(long, default_value = "startpos")]
        fen: String,
    },
    /// Run every position of a suite file and write a results file
    Suite {
        /// Suite file, one FEN per line
        #[arg(long)]
        input: Option<PathBuf>,
        /// Results file, overwritten
        #[arg(long)]
        output: Option<PathBuf>,
        /// Count depths 1 through this
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Play and undo each legal move, pausing after every step
    Step {
        /// FEN string or "startpos"
        #[arg(long, default_value = "startpos")]
        fen: String,
    },
}

fn load_board(fen: &str) -> Result<Board> {
    if fen == "startpos" {
        return Ok(Board::starting_position());
    }
    fen.parse().with_context(|| format!("invalid FEN \"{fen}\""))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Perft { depth, fen } => {
            let mut board = load_board(&fen)?;
            let result = DepthResult::measure(&mut board, depth);
            println!("Nodes = {}", result.nodes);
            println!("Time = {}", result.micros());
            println!("Speed = {}", result.nodes_per_second());
        }
        Command::Divide { depth, fen } => {
            if depth == 0 {
                bail!("divide needs a depth of at least 1");
            }
            let mut board = load_board(&fen)?;
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            debug_perft(&mut board, depth, &mut out).context("divide failed")?;
            out.flush()?;
        }
        Command::Suite { input, output, depth } => {
            let defaults = SuiteConfig::default();
            let config = SuiteConfig {
                input: input.unwrap_or(defaults.input),
                output: output.unwrap_or(defaults.output),
                depth: depth.unwrap_or(defaults.depth),
            };
            let summary = run_perft_tests(&config)
                .with_context(|| format!("perft suite {} failed", config.input.display()))?;
            info!(output = %config.output.display(), "results written");
            println!(
                "{} positions, {} nodes in {} us ({} nodes/s)",
                summary.positions,
                summary.nodes,
                summary.elapsed.as_micros(),
                summary.nodes_per_second()
            );
        }
        Command::Step { fen } => {
            let mut board = load_board(&fen)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let stepped = step_through(&mut board, stdin.lock(), &mut stdout)?;
            info!(stepped, "step-through finished");
        }
    }

    Ok(())
}

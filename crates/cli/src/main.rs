//! MIPS cycle-accurate pipeline simulator CLI.
//!
//! This binary provides the two modes of the simulator:
//! 1. **Disassemble:** Decode every word of the program image, no simulation.
//! 2. **Run:** Simulate cycle by cycle and render the full trace (pipeline
//!    status, stalls, forwarding, latches, registers, memory, totals) plus
//!    the end-of-run summary.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{fs, process};

use mipsim_core::Config;
use mipsim_core::Simulator;
use mipsim_core::sim::loader;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    version,
    about = "Cycle-accurate 8-stage MIPS pipeline simulator",
    long_about = "Disassemble a program image or step it through the 8-stage pipeline \
(IF IS ID RF EX DF DS WB), tracing hazards, stalls, and forwarding per cycle.\n\n\
The input is a text file of '0'/'1' characters; every 32 bits form one word.\n\n\
Examples:\n  mipsim dis input.txt -o listing.txt\n  mipsim run input.txt -o trace.txt\n  \
mipsim run input.txt --trace 5:20"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disassemble the image without simulating.
    Dis {
        /// Program image ('0'/'1' text).
        input: PathBuf,

        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON memory-map overrides (text base, data base, memory size).
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Simulate until the halt instruction commits.
    Run {
        /// Program image ('0'/'1' text).
        input: PathBuf,

        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only render cycles M..=N, as M:N. 0:0 renders the summary only.
        #[arg(long, value_parser = parse_trace_range)]
        trace: Option<TraceRange>,

        /// JSON memory-map overrides (text base, data base, memory size).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// An inclusive cycle range selected with `--trace M:N`.
#[derive(Debug, Clone, Copy)]
struct TraceRange {
    start: u64,
    end: u64,
}

impl TraceRange {
    /// True when the cycle trace should include cycle `cycle`.
    fn includes(self, cycle: u64) -> bool {
        // 0:0 means "summary only".
        if self.start == 0 && self.end == 0 {
            return false;
        }
        self.start <= cycle && cycle <= self.end
    }
}

/// Parses `M:N` into a [`TraceRange`].
fn parse_trace_range(s: &str) -> Result<TraceRange, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected M:N, got '{s}'"))?;
    let start = start
        .parse()
        .map_err(|_| format!("'{start}' is not a non-negative integer"))?;
    let end = end
        .parse()
        .map_err(|_| format!("'{end}' is not a non-negative integer"))?;
    Ok(TraceRange { start, end })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Dis {
            input,
            output,
            config,
        } => cmd_dis(&input, output.as_deref(), config.as_deref()),
        Commands::Run {
            input,
            output,
            trace,
            config,
        } => cmd_run(&input, output.as_deref(), trace, config.as_deref()),
    }
}

/// Reads the program image text, or exits with an error.
fn read_input(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read '{}': {e}", path.display());
        process::exit(1);
    })
}

/// Loads memory-map overrides from a JSON file, or the defaults.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read config '{}': {e}", path.display());
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: bad config '{}': {e}", path.display());
        process::exit(1);
    })
}

/// Writes the rendered text to the output file, or stdout when omitted.
fn write_output(path: Option<&Path>, text: &str) {
    match path {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("[!] FATAL: could not write '{}': {e}", path.display());
                process::exit(1);
            }
        }
        None => print!("{text}"),
    }
}

/// Disassembly mode: decode every word, no simulation state involved.
fn cmd_dis(input: &Path, output: Option<&Path>, config: Option<&Path>) {
    let config = load_config(config);
    let image = loader::parse_image(&read_input(input), &config);
    write_output(output, &render::render_disassembly(&image));
}

/// Simulation mode: run to halt, rendering each in-range cycle.
fn cmd_run(
    input: &Path,
    output: Option<&Path>,
    trace: Option<TraceRange>,
    config: Option<&Path>,
) {
    let config = load_config(config);
    let program = match loader::load_program(&read_input(input), &config) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    };

    let mut sim = Simulator::from_program(program);
    let mut out = String::new();
    let result = sim.run(|snap| {
        let include = trace.is_none_or(|range| range.includes(snap.cycle));
        if include {
            render::render_cycle(&mut out, snap, config.data_base);
        }
    });

    match result {
        Ok(summary) => {
            render::render_summary(
                &mut out,
                &summary,
                &sim.cpu.regs.snapshot(),
                sim.cpu.mem.words(),
                config.data_base,
                &sim.cpu.stats,
            );
            write_output(output, &out);
        }
        Err(e) => {
            // Keep the partial trace: it shows the cycles leading up to the
            // fault. The fault itself goes to stderr with a failing exit.
            write_output(output, &out);
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

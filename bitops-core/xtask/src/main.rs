use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build, test and verification automation for bitops-core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the test suite with native or portable primitives
    Test {
        /// Build with the `portable` feature (SWAR / 32-bit decomposition)
        #[arg(long, conflicts_with = "all")]
        portable: bool,

        /// Run the suite once per primitive path
        #[arg(long)]
        all: bool,
    },
    /// Checks compilation for host and no_std targets, both primitive paths
    CheckAll,
    /// Runs the iai-callgrind instruction-count benchmarks
    Bench {
        /// Benchmark with the `portable` feature
        #[arg(long)]
        portable: bool,
    },
    /// Runs the Kani formal verification proofs
    Kani,
}

/// Bare-metal and wasm targets the crate must build for.
const NO_STD_TARGETS: [&str; 2] = ["armv7r-none-eabi", "wasm32-unknown-unknown"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::Test { portable, all } => {
            if all {
                run_tests(&sh, false)?;
                run_tests(&sh, true)?;
            } else {
                run_tests(&sh, portable)?;
            }
        }
        Commands::CheckAll => {
            check_all(&sh)?;
        }
        Commands::Bench { portable } => {
            run_bench(&sh, portable)?;
        }
        Commands::Kani => {
            run_kani(&sh)?;
        }
    }

    Ok(())
}

fn feature_args(portable: bool) -> Vec<&'static str> {
    if portable {
        vec!["--features", "portable"]
    } else {
        Vec::new()
    }
}

fn path_name(portable: bool) -> &'static str {
    if portable {
        "portable"
    } else {
        "native"
    }
}

fn run_tests(sh: &Shell, portable: bool) -> Result<()> {
    println!(">> Testing bitops-core ({} primitives)...", path_name(portable));
    let features = feature_args(portable);
    cmd!(sh, "cargo test -p bitops-core {features...}").run()?;
    Ok(())
}

fn run_bench(sh: &Shell, portable: bool) -> Result<()> {
    if cmd!(sh, "valgrind --version").read().is_err() {
        bail!("valgrind is required by iai-callgrind but was not found in PATH");
    }
    println!(">> Benchmarking bitops-core ({} primitives)...", path_name(portable));
    let features = feature_args(portable);
    cmd!(sh, "cargo bench -p bitops-core {features...}").run()?;
    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    for portable in [false, true] {
        let features = &feature_args(portable);
        println!("--- Checking host ({}) ---", path_name(portable));
        cmd!(sh, "cargo check -p bitops-core --all-targets {features...}").run()?;

        for target in NO_STD_TARGETS {
            println!("--- Checking {} ({}) ---", target, path_name(portable));
            ensure_target(sh, target)?;
            cmd!(
                sh,
                "cargo check -p bitops-core --lib --target {target} --release {features...}"
            )
            .run()?;
        }
    }

    println!(">> All targets checked successfully.");
    Ok(())
}

fn run_kani(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cargo kani --version").read().is_err() {
        bail!("'cargo kani' not found; install with `cargo install --locked kani-verifier && cargo kani setup`");
    }
    println!(">> Running Kani proofs...");
    cmd!(sh, "cargo kani --package bitops-core").run()?;
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}

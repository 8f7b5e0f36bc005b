use anyhow::Result;
use clap::{Parser, Subcommand};
use jtir::{sample, summarize, Config, Printer};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jtir")]
#[command(about = "Jittester IR: program trees with complexity accounting")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample program as Java-like source
    Print {
        /// Remove loops whose bodies cost nothing before printing
        #[arg(short, long)]
        flatten: bool,

        /// Iteration bound of the counted loop
        #[arg(short, long, value_name = "N")]
        iterations: Option<u64>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Report per-function and total complexity of the sample program
    Report {
        /// Iteration bound of the counted loop
        #[arg(short, long, value_name = "N")]
        iterations: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match &cli.command {
        Commands::Print {
            flatten,
            iterations,
            output,
        } => {
            print_sample(*flatten, *iterations, output.as_ref())?;
        }
        Commands::Report { iterations } => {
            report_sample(*iterations)?;
        }
    }

    Ok(())
}

fn load_config(iterations: Option<u64>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(iterations) = iterations {
        config.iteration_limit = iterations;
    }
    config.validate()?;
    Ok(config)
}

fn print_sample(flatten: bool, iterations: Option<u64>, output: Option<&PathBuf>) -> Result<()> {
    let config = load_config(iterations)?;
    let mut sample = sample::build(&config)?;

    if flatten {
        let removed = sample.program.flatten_idle_loops(sample.root, &sample.hierarchy)?;
        info!(removed, "flattened idle loops");
    }

    let mut source = Printer::new().print(&sample.program, sample.root);
    source.push('\n');
    match output {
        Some(path) => {
            fs::write(path, source)?;
            info!(path = %path.display(), "wrote program");
        }
        None => print!("{}", source),
    }

    Ok(())
}

fn report_sample(iterations: Option<u64>) -> Result<()> {
    let config = load_config(iterations)?;
    let sample = sample::build(&config)?;
    let summary = summarize(&sample.program, sample.root, &sample.hierarchy, &config);

    for function in &summary.functions {
        println!("{:<32} {}", function.name, function.complexity);
    }
    println!("total complexity: {}", summary.complexity);
    println!("depth: {}", summary.depth);
    println!(
        "within budget: {} (limit {}, max depth {})",
        summary.admitted, config.complexity_limit, config.max_depth
    );

    Ok(())
}

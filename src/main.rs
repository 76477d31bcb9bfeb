#![forbid(unsafe_code)]
//! lumencost command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use lumencost::commands::{
    execute_add, execute_compare, execute_init, execute_list, execute_remove, execute_site,
    AddOptions, CompareOptions, InitOptions, SiteOptions,
};
use lumencost::{Project, DEFAULT_PROJECT_FILE};

#[derive(Parser)]
#[command(name = "lumencost")]
#[command(about = "Lamp cost and suitability comparison calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project file path
    #[arg(short, long, global = true, default_value = DEFAULT_PROJECT_FILE)]
    project: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new comparison project
    Init {
        /// Force overwrite an existing project file
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,

        /// Number of lamps to install
        #[arg(long)]
        lamps: Option<u32>,

        /// Operating hours per day
        #[arg(long)]
        hours: Option<f64>,

        /// Required lumens per lamp
        #[arg(long)]
        lumens: Option<f64>,

        /// Energy cost per kWh
        #[arg(long)]
        energy_cost: Option<f64>,

        /// Currency symbol (display only)
        #[arg(long)]
        currency: Option<String>,

        /// Baseline vendor label savings are measured against
        #[arg(long)]
        baseline: Option<String>,
    },

    /// Add a lamp option (prompts for fields not given as flags)
    Add {
        /// Lamp name
        #[arg(long)]
        name: Option<String>,

        /// Manufacturer
        #[arg(long)]
        make: Option<String>,

        /// Model designation
        #[arg(long)]
        model: Option<String>,

        /// Rated wattage in W
        #[arg(long)]
        wattage: Option<f64>,

        /// Efficacy in lm/W
        #[arg(long)]
        efficacy: Option<f64>,

        /// Capital cost per lamp
        #[arg(long)]
        capital_cost: Option<f64>,
    },

    /// List the current lamp options
    List,

    /// Remove a lamp option by name
    Remove {
        /// Name of the lamp to remove
        name: String,
    },

    /// Show or update site requirements
    Site {
        /// Number of lamps to install
        #[arg(long)]
        lamps: Option<u32>,

        /// Operating hours per day
        #[arg(long)]
        hours: Option<f64>,

        /// Required lumens per lamp
        #[arg(long)]
        lumens: Option<f64>,

        /// Energy cost per kWh
        #[arg(long)]
        energy_cost: Option<f64>,

        /// Currency symbol (display only)
        #[arg(long)]
        currency: Option<String>,

        /// Baseline vendor label savings are measured against
        #[arg(long)]
        baseline: Option<String>,

        /// Remove the baseline vendor label
        #[arg(long, conflicts_with = "baseline")]
        clear_baseline: bool,
    },

    /// Run the comparison and render result tables
    Compare {
        /// Output the raw comparison as JSON
        #[arg(long)]
        json: bool,

        /// Also write a JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("lumencost=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lumencost=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // All commands except init need an existing project file
    if !matches!(cli.command, Commands::Init { .. }) && !cli.project.exists() {
        eprintln!(
            "{} No project file found at {}",
            style("✗").red(),
            cli.project.display()
        );
        eprintln!("  Run 'lumencost init' to create one");
        std::process::exit(1);
    }

    match cli.command {
        Commands::Init {
            force,
            yes,
            lamps,
            hours,
            lumens,
            energy_cost,
            currency,
            baseline,
        } => {
            let options = InitOptions {
                force,
                yes,
                lamps,
                hours,
                lumens,
                energy_cost,
                currency,
                baseline,
            };
            execute_init(options, &cli.project)?;
        }

        Commands::Add {
            name,
            make,
            model,
            wattage,
            efficacy,
            capital_cost,
        } => {
            let options = AddOptions {
                name,
                make,
                model,
                wattage,
                efficacy,
                capital_cost,
            };
            let mut project = Project::load(&cli.project)?;
            execute_add(options, &mut project, &cli.project)?;
        }

        Commands::List => {
            let project = Project::load(&cli.project)?;
            execute_list(&project)?;
        }

        Commands::Remove { name } => {
            let mut project = Project::load(&cli.project)?;
            execute_remove(&name, &mut project, &cli.project)?;
        }

        Commands::Site {
            lamps,
            hours,
            lumens,
            energy_cost,
            currency,
            baseline,
            clear_baseline,
        } => {
            let options = SiteOptions {
                lamps,
                hours,
                lumens,
                energy_cost,
                currency,
                baseline,
                clear_baseline,
            };
            let mut project = Project::load(&cli.project)?;
            execute_site(options, &mut project, &cli.project)?;
        }

        Commands::Compare { json, output } => {
            let options = CompareOptions { json, output };
            let project = Project::load(&cli.project)?;
            execute_compare(options, &project)?;
        }
    }

    Ok(())
}

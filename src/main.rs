use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::path::PathBuf;

use subnetplan::aggregate::{select_networks, summarize, summarize_exact, validate_contiguous};
use subnetplan::allocation::{allocate_vlsm, divide_range, AllocationPlan, CapacityRequest};
use subnetplan::config_loader;
use subnetplan::ip::{parse_address, size_for_hosts, Network};
use subnetplan::report::{self, DivisionReport, PlanReport, SizingReport, SummaryReport};

/// IPv4 subnet planning: VLSM allocation, equal division and summarization
#[derive(Parser, Debug)]
#[command(name = "subnetplan", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the block size and mask needed for each host count
    Size {
        /// Required hosts (each must be greater than 2)
        #[arg(required = true)]
        hosts: Vec<u64>,
    },

    /// Divide an inclusive address range into equal power-of-two blocks
    Divide {
        /// First address of the range
        #[arg(long, value_parser = parse_address)]
        start: Ipv4Addr,

        /// Last address of the range
        #[arg(long, value_parser = parse_address)]
        end: Ipv4Addr,

        /// Number of blocks wanted
        #[arg(short, long)]
        blocks: u32,
    },

    /// Allocate networks largest-first from a base address
    Vlsm {
        /// Plan file describing the base address and networks
        #[arg(short, long, conflicts_with_all = ["base", "networks"])]
        plan: Option<PathBuf>,

        /// Base address to allocate from
        #[arg(long, value_parser = parse_address, required_unless_present = "plan")]
        base: Option<Ipv4Addr>,

        /// Network to allocate as NAME=HOSTS (repeatable)
        #[arg(short = 'n', long = "network", value_parser = parse_request, required_unless_present = "plan")]
        networks: Vec<CapacityRequest>,

        /// One-based position in the largest-first order to start assigning from
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        start: Option<u32>,
    },

    /// Check that networks leave no gap and do not overlap
    Contiguous {
        /// Networks in CIDR notation
        #[arg(required = true)]
        networks: Vec<Network>,
    },

    /// Find the supernet covering a set of networks
    Summarize {
        /// Networks in CIDR notation
        #[arg(required_unless_present = "plan", conflicts_with = "plan")]
        networks: Vec<Network>,

        /// Allocate a plan file and summarize some of its networks
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// Networks to summarize by their largest-first number in the plan report, e.g. "1, 2" (default: all)
        #[arg(long, requires = "plan")]
        select: Option<String>,

        /// Reject supernets that cover addresses outside the networks
        #[arg(long)]
        exact: bool,
    },
}

/// Parse a `NAME=HOSTS` network request
fn parse_request(text: &str) -> std::result::Result<CapacityRequest, String> {
    let (name, hosts) = text
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=HOSTS, got '{}'", text))?;
    let hosts = hosts
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("host count '{}' is not a whole number", hosts))?;
    Ok(CapacityRequest::new(name.trim(), hosts))
}

/// Render a report in the requested format
fn render<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => report::to_json(value).wrap_err("Failed to serialize report to JSON"),
    }
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Size { hosts } => {
            let mut reports = Vec::with_capacity(hosts.len());
            for &required_hosts in hosts {
                let sizing = size_for_hosts(required_hosts)?;
                reports.push(SizingReport { required_hosts, sizing });
            }
            render(cli.format, &reports, |r| report::render_sizing_text(r))
        }

        Commands::Divide { start, end, blocks } => {
            let division = divide_range(*start, *end, *blocks)
                .wrap_err_with(|| format!("Failed to divide {} - {}", start, end))?;
            info!("Divided range into {} blocks of /{}", division.networks.len(), division.prefix_len);
            render(cli.format, &DivisionReport::from(&division), |_| {
                report::render_division_text(&division)
            })
        }

        Commands::Vlsm { plan, base, networks, start } => {
            let allocation = match (plan, base) {
                (Some(path), _) => {
                    let config = config_loader::load_plan(path)?;
                    let start_index = start.map_or_else(|| config.start_index(), |s| s as usize - 1);
                    allocate_vlsm(config.requests(), start_index, config.base()?)?
                }
                (None, Some(base)) => {
                    let start_index = start.map_or(0, |s| s as usize - 1);
                    allocate_vlsm(networks, start_index, *base)?
                }
                (None, None) => bail!("--base is required unless --plan is given"),
            };
            render_plan(cli.format, &allocation)
        }

        Commands::Contiguous { networks } => {
            validate_contiguous(networks)?;
            render(cli.format, networks, |n| report::render_contiguous_text(n))
        }

        Commands::Summarize { networks, plan, select, exact } => {
            let selected = match plan {
                Some(path) => {
                    let allocation = config_loader::allocate_from_file(path)?;
                    match select {
                        Some(text) => select_networks(&allocation, text)?,
                        None => allocation.networks(),
                    }
                }
                None => networks.clone(),
            };

            let supernet = if *exact {
                summarize_exact(&selected)?
            } else {
                summarize(&selected)?
            };

            let summary = SummaryReport {
                networks: selected,
                exact: *exact,
                supernet,
            };
            render(cli.format, &summary, |s| report::render_supernet_text(s))
        }
    }
}

fn render_plan(format: OutputFormat, plan: &AllocationPlan) -> Result<String> {
    render(format, &PlanReport::from(plan), |_| report::render_plan_text(plan))
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging, quiet by default so reports stay readable
    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}

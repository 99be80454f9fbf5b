//! Command Line Interface for the wheel simulator.
mod report;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wheel_lab_api::models::SimulationResponse;
use wheel_lab_api::{ApiServer, ServerConfig};
use wheel_lab_domain::{OptionCadence, ParameterBounds, SimulationParameters};
use wheel_lab_simulation::monte_carlo::MonteCarloRunner;

#[derive(Parser)]
#[command(name = "wheel-lab")]
#[command(about = "Monte Carlo comparison of buy & hold against the options wheel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Monte Carlo simulation and print summary statistics
    Simulate {
        #[command(flatten)]
        params: ParamArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Spread paths across all CPU cores
        #[arg(long)]
        parallel: bool,
    },
    /// Print the first simulated path and the wheel's trades on it
    SamplePath {
        #[command(flatten)]
        params: ParamArgs,

        /// Print one row every N trading days
        #[arg(long, default_value_t = 5)]
        every: usize,
    },
    /// Compare weekly, monthly and quarterly options on the same seed
    Cadences {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Start the HTTP API
    Serve {
        /// Host to bind (overrides WHEEL_LAB_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides WHEEL_LAB_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Ceiling on paths per request (overrides WHEEL_LAB_MAX_PATHS)
        #[arg(long)]
        max_paths: Option<usize>,
    },
}

/// Stock and wheel settings. Rates are fractions: 0.12 is 12%.
#[derive(Args, Debug, Clone)]
struct ParamArgs {
    /// Starting price of the underlying
    #[arg(long, default_value_t = 100.0)]
    start_price: f64,

    /// Annual drift
    #[arg(long, default_value_t = 0.12, allow_negative_numbers = true)]
    drift: f64,

    /// Annual volatility
    #[arg(long, default_value_t = 0.28)]
    volatility: f64,

    /// Multiplier applied to the volatility
    #[arg(long, default_value_t = 1.1)]
    vol_multiplier: f64,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long, default_value_t = 200)]
    paths: usize,

    /// Option cadence: weekly, monthly or quarterly
    #[arg(short, long, default_value_t = OptionCadence::Monthly)]
    cadence: OptionCadence,

    /// Trading days per option, overriding the cadence
    #[arg(long)]
    option_days: Option<u32>,

    /// Premium per sale as a fraction of the underlying
    #[arg(long, default_value_t = 0.02)]
    premium: f64,

    /// Strike distance from the price; negative is in the money
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    otm: f64,

    /// Base seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Reject out-of-range values instead of clamping them
    #[arg(long)]
    strict: bool,
}

impl ParamArgs {
    /// Builds run parameters, returning whether any value was clamped.
    fn resolve(&self) -> Result<(SimulationParameters, bool)> {
        let seed = self
            .seed
            .unwrap_or_else(|| u64::from(rand::random::<u32>()));

        let requested = SimulationParameters::new()
            .with_start_price(self.start_price)
            .with_drift(self.drift)
            .with_volatility(self.volatility)
            .with_volatility_multiplier(self.vol_multiplier)
            .with_path_count(self.paths)
            .with_cadence(self.cadence)
            .with_premium_percent(self.premium)
            .with_target_otm_percent(self.otm)
            .with_seed(seed);
        let requested = match self.option_days {
            Some(days) => requested.with_option_period_days(days),
            None => requested,
        };

        let bounds = ParameterBounds::default();
        if self.strict {
            bounds.validate(&requested)?;
            return Ok((requested, false));
        }

        let params = bounds.clamp(&requested);
        let clamped = params != requested;
        if clamped {
            warn!("some parameters were outside the accepted range and have been clamped");
        }
        Ok((params, clamped))
    }
}

fn print_parameters(params: &SimulationParameters) {
    println!(
        "{} paths · {} trading-day options · start ${:.2} · drift {} · vol {} × {:.2} · premium {} · OTM {} · seed {}",
        params.path_count,
        params.option_period_days,
        params.start_price,
        report::format_percent(params.annual_drift),
        report::format_percent(params.annual_volatility),
        params.volatility_multiplier,
        report::format_percent(params.premium_percent),
        report::format_percent(params.target_otm_percent),
        params.seed
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Simulate {
            params,
            json,
            parallel,
        } => {
            let (parameters, clamped) = params.resolve()?;
            let runner = MonteCarloRunner::new(parameters.clone());
            let summary = if *parallel {
                runner.run_parallel()
            } else {
                runner.run()
            };

            if *json {
                let response = SimulationResponse {
                    parameters,
                    clamped,
                    summary,
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            println!("\n📊 Buy & hold versus the wheel");
            println!("════════════════════════════════════");
            print_parameters(&parameters);
            report::summary_table(&summary).printstd();
            println!("\nAverage portfolio value");
            report::monthly_table(&summary).printstd();
        }
        Commands::SamplePath { params, every } => {
            let (parameters, _) = params.resolve()?;
            let outcome = MonteCarloRunner::new(parameters.clone()).simulate_path(0);

            println!("\n📈 Sample price path");
            println!("════════════════════════════════════");
            print_parameters(&parameters);
            report::sample_path_table(&outcome.price_path, *every).printstd();
            println!(
                "\nWheel trades: {}",
                report::trade_summary(&outcome.wheel.events, outcome.wheel.total_premium)
            );
            report::events_table(&outcome.wheel.events).printstd();
            println!(
                "Finish: buy & hold {} · wheel {}",
                report::format_currency(outcome.buy_hold_terminal()),
                report::format_currency(outcome.wheel_terminal())
            );
        }
        Commands::Cadences { params } => {
            let (parameters, _) = params.resolve()?;

            let results: Vec<_> = OptionCadence::ALL
                .iter()
                .map(|cadence| {
                    let run = parameters.clone().with_cadence(*cadence);
                    (*cadence, MonteCarloRunner::new(run).run_parallel())
                })
                .collect();

            println!("\n🔁 Option cadence comparison");
            println!("════════════════════════════════════");
            print_parameters(&parameters);
            report::cadence_table(&results).printstd();
        }
        Commands::Serve {
            host,
            port,
            max_paths,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config = config.with_host(host.clone());
            }
            if let Some(port) = port {
                config = config.with_port(*port);
            }
            if let Some(max_paths) = max_paths {
                config = config.with_max_paths(*max_paths);
            }

            let server = ApiServer::new(config);
            info!(address = %server.config().bind_address(), "starting API server");
            server.run().await?;
        }
    }

    Ok(())
}

use baseband_rs::config::SimulationConfig;
use baseband_rs::report::{self, transcript_block};
use baseband_rs::simulation::{OddCountPolicy, compare_schemes, run_manchester_demo};
use baseband_rs::ui::{print_banner, print_section};
use baseband_rs::utils::logging::init_logging;
use baseband_rs::utils::progress::{ProgressManager, templates};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Keeps the demo generator away from the sweep's per-point streams.
const DEMO_SEED_OFFSET: u64 = 1 << 48;

#[derive(Parser)]
#[command(author, version, about = "Baseband link simulator: Manchester demo and BPSK/QPSK BER sweeps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    seed: Option<u64>,

    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Random bits per trial at each SNR point
    #[arg(short, long, global = true)]
    bits: Option<usize>,

    #[arg(long, global = true)]
    trials: Option<usize>,

    #[arg(short, long, global = true)]
    workers: Option<usize>,

    #[arg(short, long, global = true)]
    message: Option<String>,

    /// Compare only the requested bits when QPSK rounds the count up
    #[arg(long, global = true)]
    compare_requested: bool,

    /// Print results without writing files
    #[arg(long, global = true)]
    no_save: bool,

    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Send the message through Manchester + AWGN at each demo SNR
    Demo,
    /// BER × SNR sweep for BPSK and QPSK
    Sweep,
    /// Demo followed by sweep (default)
    Run,
}

impl Cli {
    fn load_config(&self) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                SimulationConfig::from_json_file(path)?
            }
            None => SimulationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(bits) = self.bits {
            config.bit_count = bits;
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(message) = &self.message {
            config.message = message.clone();
        }
        if self.compare_requested {
            config.odd_count_policy = OddCountPolicy::CompareRequested;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    print_banner();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.load_config()?;
    let seed = config.resolve_seed();
    info!("Seed: {}", seed);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Demo => run_demo(&config, seed, !cli.no_save)?,
        Commands::Sweep => run_sweep(&config, seed, !cli.no_save)?,
        Commands::Run => {
            run_demo(&config, seed, !cli.no_save)?;
            run_sweep(&config, seed, !cli.no_save)?;
        }
    }

    info!("Exiting gracefully...");
    Ok(())
}

fn run_demo(
    config: &SimulationConfig,
    seed: u64,
    save: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    print_section("DEMO: Manchester + AWGN channel");

    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(DEMO_SEED_OFFSET));
    let mut runs = Vec::with_capacity(config.demo_snr_db.len());

    let progress_manager = ProgressManager::new();
    progress_manager.create_bar(
        "demo",
        config.demo_snr_db.len() as u64,
        templates::DEMO,
        "starting",
    )?;

    for &snr_db in &config.demo_snr_db {
        let run = run_manchester_demo(&config.message, snr_db, &mut rng)?;
        let _ = progress_manager.inc("demo", 1);
        let _ = progress_manager.set_message(
            "demo",
            &format!("{} dB: BER {:.3e}", snr_db, run.ber),
        );
        runs.push(run);
    }
    progress_manager.finish("demo", "done")?;

    for run in &runs {
        if run.recovered != run.message {
            warn!(
                "Message corrupted at {} dB ({} bit errors)",
                run.snr_db, run.errors.errors
            );
        }
        print!("{}", transcript_block(run));
    }

    if save {
        report::write_manchester_log(&config.output_dir, &config.message, &runs)?;
    }
    Ok(())
}

fn run_sweep(
    config: &SimulationConfig,
    seed: u64,
    save: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    print_section("BER × SNR: BPSK vs QPSK");

    let sweep_config = config.sweep_config();
    let progress_manager = ProgressManager::new();
    progress_manager.create_bar(
        "sweep",
        2 * sweep_config.snr_db.len() as u64,
        templates::SWEEP,
        "starting",
    )?;

    let table = compare_schemes(&sweep_config, seed, |scheme, point| {
        let _ = progress_manager.inc("sweep", 1);
        let _ = progress_manager.set_message(
            "sweep",
            &format!("{} {} dB: BER {:.3e}", scheme, point.snr_db, point.ber),
        );
    })?;
    progress_manager.finish_all();

    print!("{}", table.render());

    if save {
        report::write_ber_table(&config.output_dir, &table)?;
    }
    Ok(())
}

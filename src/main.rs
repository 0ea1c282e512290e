use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vidsweep::error::Result;
use vidsweep::{
    Config, PlayerChoice, ProcessLauncher, RandomPicker, ReviewSession, SeenStore, SessionReport,
    SetupWizard, StatePaths, TerminalPrompter,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Review unseen videos one at a time", long_about = None)]
struct Args {
    /// Directory holding config.toml and seen_videos.json
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Root folder to review (skips the folder prompt)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Player executable to open videos with
    #[arg(short, long, conflicts_with = "default_player")]
    player: Option<PathBuf>,

    /// Open videos with the system default player
    #[arg(long)]
    default_player: bool,

    /// Seed for the random picker
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> Result<SessionReport> {
    let paths = match &args.state_dir {
        Some(dir) => StatePaths::in_dir(dir),
        None => StatePaths::default_location(),
    };
    info!("Using state files: {:?}, {:?}", paths.config_file, paths.seen_file);

    let mut config = Config::load_or_default(&paths.config_file);
    let mut prompter = TerminalPrompter;

    let (player, root) = {
        let mut wizard = SetupWizard::new(&mut config, &paths.config_file, &mut prompter);

        let player = if args.default_player {
            wizard.set_player(&PlayerChoice::SystemDefault)?;
            PlayerChoice::SystemDefault
        } else if let Some(path) = args.player.clone() {
            let choice = PlayerChoice::Custom(path);
            wizard.set_player(&choice)?;
            choice
        } else {
            wizard.resolve_player()?
        };

        let root = match &args.root {
            Some(root) => wizard.set_root_folder(root)?,
            None => wizard.resolve_root_folder()?,
        };
        (player, root)
    };
    info!("Reviewing {:?} with {}", root, player);

    let store = SeenStore::new(paths.seen_file);
    let seen = store.load();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut picker = RandomPicker::new(rng);
    let mut launcher = ProcessLauncher::new();

    ReviewSession::new(root, player, &store, seen, &mut prompter, &mut launcher, &mut picker).run()
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match run(args) {
        Ok(report) => {
            info!(
                "Session finished: {} played, {} marked seen, {} deleted, {} skipped, {} launch failures, {} seen in total",
                report.played,
                report.marked_seen,
                report.deleted,
                report.skipped + report.dismissed,
                report.launch_failures,
                report.seen.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) if e.is_setup() => {
            error!("Setup cancelled: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Unhandled error: {}", e);
            ExitCode::FAILURE
        }
    }
}

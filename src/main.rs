use bginfo::background::{resolve_backdrop, Workspace};
use bginfo::config::{ensure_user_config_exists, load_config, Profile};
use bginfo::platform::{LocalSystem, WallpaperDesktop};
use bginfo::{run_cycle, run_loop, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bginfo")]
#[command(about = "Draw machine facts onto the desktop background", version)]
struct Cli {
    /// Config file to use instead of the default lookup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Header profile
    #[arg(short, long, value_enum)]
    profile: Option<Profile>,

    /// Seconds between updates
    #[arg(short, long)]
    interval: Option<u64>,

    /// Directory for the saved backdrop and the generated overlay
    #[arg(short, long)]
    work_dir: Option<PathBuf>,

    /// Run a single update and exit
    #[arg(long)]
    once: bool,

    /// Print the overlay lines and exit without touching the desktop
    #[arg(long)]
    print: bool,

    /// Write the default config file to the user config dir and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.init_config {
        let path = ensure_user_config_exists()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(profile) = cli.profile {
        config.general.profile = profile;
    }
    if let Some(secs) = cli.interval {
        config.general.interval_secs = Some(secs);
    }
    if let Some(dir) = cli.work_dir {
        config.general.work_dir = Some(dir.to_string_lossy().into_owned());
    }

    let probe = LocalSystem::new();
    let desktop = WallpaperDesktop::new();
    let workspace = Workspace::new(
        config.work_dir(),
        &config.overlay.backdrop_name,
        &config.overlay.output_name,
    );

    if cli.print {
        let ctx = Context::new(&probe, &desktop, workspace.clone(), workspace.backdrop, config)?;
        for line in ctx.current_lines()? {
            println!("{}", line);
        }
        return Ok(());
    }

    let interval = config.interval();
    let backdrop = resolve_backdrop(&desktop, &workspace, &config.gradient)?;
    let ctx = Context::new(&probe, &desktop, workspace, backdrop, config)?;
    ctx.preflight()?;

    log::info!(
        "Starting bginfo ({:?} profile, every {}s, backdrop {})",
        ctx.profile(),
        interval.as_secs(),
        ctx.backdrop.display()
    );

    if cli.once {
        let path = run_cycle(&ctx)?;
        log::info!("Background updated ({})", path.display());
        return Ok(());
    }

    run_loop(&ctx, interval, None);
    Ok(())
}

use card_scorer::core::{BoardConfig, HighlightPolicy};
use card_scorer::session::{Session, SessionOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keep score for a card game", long_about = None)]
struct Args {
    /// Comma-separated initials to start with, e.g. AB,CD
    #[arg(long, value_delimiter = ',')]
    players: Vec<String>,

    /// How ties at the highest or lowest total are highlighted
    #[arg(long, default_value_t = HighlightPolicy::Shared)]
    tie_policy: HighlightPolicy,

    /// Print the score sheet as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored totals
    #[arg(long)]
    no_color: bool,

    /// Terminal log level
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    log_level: log::LevelFilter,

    /// Also write debug logs to this file
    #[arg(long)]
    log_file: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level, args.log_file.as_deref())?;

    let config = BoardConfig::new().with_highlight_policy(args.tie_policy);
    let options = SessionOptions {
        json: args.json,
        plain: args.no_color,
    };
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut session = Session::new(config, options);
    let seeded = session.seed_players(args.players.iter().map(String::as_str));
    if seeded < args.players.len() {
        log::warn!("{} of {} starting players were skipped", args.players.len() - seeded, args.players.len());
    }
    session.run()
}

/// Terminal logging, plus a debug-level file log when requested.
fn init_logging(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(path) = file {
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

use std::io;
use std::path::PathBuf;

use clap::Parser;

use connect_four::config::AppConfig;
use connect_four::console::TermConsole;
use connect_four::controller::GameController;
use connect_four::game::Disc;
use connect_four::players::HumanPlayer;
use connect_four::ui::GameView;

/// Two-player console Connect Four
#[derive(Parser)]
#[command(name = "connect-four")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    let view = GameView::new(&config.display);
    let first = Box::new(HumanPlayer::new(Disc::Red, config.display.red_symbol));
    let second = Box::new(HumanPlayer::new(Disc::Yellow, config.display.yellow_symbol));

    let stdin = io::stdin();
    let mut console = TermConsole::new(stdin.lock(), io::stdout());

    let mut controller = GameController::new(view, first, second);
    controller.run(&mut console)?;
    Ok(())
}

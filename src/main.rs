mod app;
mod config;
mod slider;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::AppConfig;

/// Poll timeout between frames (~60 fps)
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "swipe-to-start")]
#[command(version)]
#[command(about = "Swipe the handle across the track to start")]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Send a desktop notification when the swipe completes
    #[arg(short, long)]
    notify: bool,

    /// Shimmer cycle length in milliseconds
    #[arg(long, value_name = "MS")]
    shimmer_ms: Option<u64>,

    /// Write the default config file and exit
    #[arg(long)]
    write_default_config: bool,

    /// Log file (default: <cache dir>/swipe-to-start/swipe-to-start.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; the terminal belongs to the UI, so logs go to a file
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer(args.log_file.clone())),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if args.write_default_config {
        return write_default_config(args.config);
    }

    let mut config = AppConfig::load_or_default(args.config.as_deref());
    if args.notify {
        config.notifications = true;
    }
    if let Some(ms) = args.shimmer_ms.filter(|&ms| ms > 0) {
        config.shimmer_ms = ms;
    }

    run_tui(&config).await
}

/// Append-mode log file, or a sink when no file can be opened
fn log_writer(path: Option<PathBuf>) -> BoxMakeWriter {
    let path = path.or_else(|| {
        dirs::cache_dir().map(|dir| dir.join("swipe-to-start").join("swipe-to-start.log"))
    });
    let Some(path) = path else {
        return BoxMakeWriter::new(io::sink);
    };

    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::sink),
    }
}

fn write_default_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => AppConfig::default_path()?,
    };
    AppConfig::default().save(&path)?;
    println!("{}", path.display());
    Ok(())
}

async fn run_tui(config: &AppConfig) -> Result<()> {
    tracing::info!("Starting swipe-to-start");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

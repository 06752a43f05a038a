//! A single-page personal site in the terminal.
//!
//! Run the binary to browse the site.  Pass a hash (`#skills`) to open at a
//! given section, `--print-config` to dump the effective configuration,
//! `--save-config` to write it to the config file.

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use section_nav::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use section_nav::config::AppConfig;
use section_nav::core::location::DEFAULT_HASH;
use section_nav::ui;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "A single-page site in your terminal")]
struct Cli {
    /// Section to open, as a hash (`#about` or `about`).
    #[arg(default_value = DEFAULT_HASH)]
    hash: String,

    /// Transition length in milliseconds (overrides the config file).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=10_000))]
    duration_ms: Option<u64>,

    /// Gesture throttle interval in milliseconds (defaults to the duration).
    #[arg(long)]
    throttle_ms: Option<u64>,

    /// Animation frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Don't draw the landing-page starfield.
    #[arg(long)]
    no_stars: bool,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded config.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(ms) = self.duration_ms {
            config.duration_ms = ms;
        }
        if let Some(ms) = self.throttle_ms {
            config.throttle_ms = Some(ms);
        }
        if self.no_stars {
            config.stars = false;
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never draw over the UI
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }
    if cli.save_config {
        let path = config.save().context("writing the config file")?;
        println!("{}", path.display());
        return Ok(());
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    // The UI owns stdout; logs stay on stderr.
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &cli, config).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cli: &Cli,
    config: AppConfig,
) -> Result<()> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);
    let mut state = AppState::new(config, area).context("building the section list")?;
    state.start_at(&cli.hash);

    let frame_interval = Duration::from_secs_f64(1.0 / f64::from(cli.fps));
    let mut events = spawn_event_reader(frame_interval);

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| ui::draw(frame, &state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k, Instant::now()),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m, Instant::now()),
            AppEvent::Resize(w, h) => state.resize(w, h),
            AppEvent::Frame(at) => handler::handle_frame(&mut state, at),
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_config() {
        let cli = Cli::try_parse_from(["section-nav", "#skills", "--duration-ms", "800", "--no-stars"])
            .unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(cli.hash, "#skills");
        assert_eq!(config.duration_ms, 800);
        assert!(!config.stars);
        assert_eq!(config.throttle_ms, None);
    }

    #[test]
    fn save_config_flag_parses() {
        let cli = Cli::try_parse_from(["section-nav", "--save-config"]).unwrap();
        assert!(cli.save_config && !cli.print_config);
        assert_eq!(cli.hash, DEFAULT_HASH);
    }

    #[test]
    fn zero_duration_rejected() {
        assert!(Cli::try_parse_from(["section-nav", "--duration-ms", "0"]).is_err());
    }
}

//! A terminal slideshow of community-detection results over an AI-generated
//! Studio-Ghibli-style art dataset.
//!
//! Run the binary from the directory holding the result images, or pass
//! that directory as the first argument.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::core::{assets::AssetPaths, content::APP_TITLE, deck::Deck, page::PageId};
use crate::ui::{layout::AppLayout, page_view::PageView, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Slideshow of AI art community-detection results")]
struct Cli {
    /// Directory holding the image assets (overrides the config file).
    assets: Option<PathBuf>,

    /// Page to open on.
    #[arg(long, value_enum, default_value_t = StartPage::Welcome)]
    page: StartPage,

    /// Animation frame interval in milliseconds.
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Start with the window chrome hidden.
    #[arg(long)]
    presentation: bool,

    /// Write log output to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the effective configuration file and exit.
    #[arg(long)]
    write_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartPage {
    Welcome,
    Menu,
    Users,
    Prompts,
    Styles,
}

impl From<StartPage> for PageId {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Welcome => PageId::Welcome,
            StartPage::Menu => PageId::Menu,
            StartPage::Users => PageId::UserEngagement,
            StartPage::Prompts => PageId::PromptSimilarity,
            StartPage::Styles => PageId::StyleEngagement,
        }
    }
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── drawing ───────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area(), state.presentation);

    if !state.presentation {
        let window = Block::default()
            .title(format!(" {APP_TITLE} "))
            .title_style(Theme::window_title_style())
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        frame.render_widget(window, layout.frame_area);
    }

    let active = state.deck.active();
    let view = &mut state.views[active.index()];
    state.hit_zones = PageView {
        page: state.deck.page(active),
        focused: view.focus,
    }
    .render_and_hit(layout.page_area, frame.buffer_mut(), &mut view.scroll);

    if !state.presentation {
        let status_text = match &state.status_message {
            Some(msg) => format!(" {msg}"),
            None => format!(" {} | {}", active.label(), state.config.status_bar_hint()),
        };
        let status = Paragraph::new(status_text).style(Theme::status_bar_style());
        frame.render_widget(status, layout.status_area);
    }
}

// ───────────────────────────────────────── main ─────────────

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(50));
    let mut animation = tokio::time::interval(state.config.frame_interval());
    animation.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| draw(frame, state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize => {}
                }
            }

            _ = animation.tick() => state.deck.advance_animations(),
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut config = config::AppConfig::load();
    if let Some(dir) = cli.assets {
        config.asset_dir = dir;
    }
    if let Some(ms) = cli.frame_ms {
        config.frame_interval_ms = ms.clamp(20, 2000);
    }

    if cli.write_config {
        let path = config.save()?;
        println!("{}", path.display());
        return Ok(());
    }

    // ── build every page up front ─────────────────────────────
    tracing::info!(assets = %config.asset_dir.display(), "loading slideshow");
    let mut deck = Deck::build(&AssetPaths::in_dir(&config.asset_dir), config.presentation_hint());
    deck.show(cli.page.into());
    let mut state = AppState::new(deck, config);
    state.presentation = cli.presentation;

    let mut terminal = setup_terminal()?;
    let outcome = run(&mut terminal, &mut state).await;
    let restored = restore_terminal();

    outcome?;
    restored.context("failed to restore the terminal")
}

// ───────────────────────────────────────── terminal ──────────

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let entered = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(APP_TITLE)
    )
    .and_then(|()| Terminal::new(CrosstermBackend::new(stdout())));

    match entered {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            if let Err(restore) = restore_terminal() {
                tracing::warn!(error = %restore, "terminal restore after failed setup");
            }
            Err(e).context("failed to set up the terminal")
        }
    }
}

/// Undo [`setup_terminal`].  Every step runs; the first failure is returned.
fn restore_terminal() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture, Show),
    ])
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

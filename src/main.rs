//! Terminal edition of the NUREPDH culture-of-peace report.
//!
//! Run the binary to read the report in an interactive, scrollable view.
//! Run with `--search <QUERY>` to print matching report entries and exit.

mod app;
mod config;
mod core;
mod shell;
mod ui;

use std::io::{self, stderr, Stderr};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Frame, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    link_runtime::{spawn_link_open, LinkOutcome},
    state::{ActiveView, AppState, SEARCH_LIMIT},
};
use crate::config::{AppConfig, ThemeMode};
use crate::core::report::{Report, SectionId};
use crate::core::search::{build_index, search_entries};
use crate::core::stack::LayoutMode;
use crate::shell::integration;
use crate::ui::{
    layout::AppLayout,
    modal::{ModalContent, ModalWidget},
    popup::{controls_offset, controls_visible_rows, ControlsPopup, SettingsPopup},
    report_view::{NavBar, ReportBody},
    search::SearchOverlay,
};

/// Event reader tick; also the settle animation frame interval.
const TICK_RATE: Duration = Duration::from_millis(50);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Read the NUREPDH culture-of-peace report in the terminal")]
struct Cli {
    /// Document card layout for this session (stack, grid or list).
    #[arg(long, value_name = "MODE")]
    layout: Option<LayoutMode>,

    /// Colour theme for this session (dark or light).
    #[arg(long, value_name = "THEME")]
    theme: Option<ThemeMode>,

    /// Open at a section anchor, e.g. `clima-2024`.
    #[arg(long, value_name = "ANCHOR")]
    section: Option<String>,

    /// Print search results for QUERY and exit.
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Record activated links without launching a browser.
    #[arg(long)]
    no_open: bool,

    /// Write logs to PATH instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // Never pollute stdout: it carries the exit payload.
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

/// `--search` mode: one line per result, `kind<TAB>title<TAB>#anchor`.
fn print_search(query: &str) {
    let report = Report::builtin();
    let index = build_index(&report);
    let results = search_entries(&index, query, SEARCH_LIMIT);
    if results.is_empty() {
        eprintln!("No results for “{}”", query.trim());
        return;
    }
    for result in results {
        println!("{}\t{}\t#{}", result.kind, result.title, result.target.anchor());
    }
}

// ───────────────────────────────────────── main ──────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    if let Some(query) = &cli.search {
        print_search(query);
        return Ok(());
    }

    let start_section = match cli.section.as_deref() {
        Some(anchor) => match SectionId::from_anchor(anchor) {
            Some(id) => Some(id),
            None => bail!("unknown section `{anchor}`"),
        },
        None => None,
    };

    // Session overrides are not written back to the config file.
    let mut config = AppConfig::load();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(layout) = cli.layout {
        config.default_layout = layout;
    }
    let mut state = AppState::new(config)?;
    state.links_disabled = cli.no_open;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    state.resize(size.width, size.height);
    if let Some(id) = start_section {
        state.reveal_section(id);
    }

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    result?;

    integration::print_exit_payload(&state.visited);
    Ok(())
}

async fn run(terminal: &mut Terminal<CrosstermBackend<Stderr>>, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(TICK_RATE);
    let (link_tx, mut link_rx) = mpsc::unbounded_channel::<LinkOutcome>();

    loop {
        terminal.draw(|frame| draw(frame, state))?;

        for url in state.pending_links.drain(..) {
            spawn_link_open(link_tx.clone(), url);
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Paste(text) => handler::handle_paste(state, &text),
                    AppEvent::Resize(w, h) => state.resize(w, h),
                    AppEvent::Tick => state.settle.tick(),
                }
            }

            Some(outcome) = link_rx.recv() => {
                state.link_finished(&outcome.url, outcome.opened);
            }

            else => break,
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

// ───────────────────────────────────────── drawing ───────────

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let screen = AppLayout::from_area(area);
    let theme = &state.theme;

    frame.render_widget(
        NavBar {
            theme,
            active: state.active_nav(),
        },
        screen.nav_area,
    );
    frame.render_widget(
        ReportBody {
            report: &state.report,
            layout: &state.layout,
            theme,
            scroll: state.scroll,
            expanded: &state.expanded,
            flipped: &state.flipped,
            focus: state.focus,
            cards: &state.cards,
            drag_dx: state.drag_dx(),
        },
        screen.body_area,
    );

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(format!(" {status_text}")).style(theme.status_bar_style()),
        screen.status_area,
    );

    match state.active_view {
        ActiveView::Report => {}
        ActiveView::Search => frame.render_widget(
            SearchOverlay {
                query: &state.search_query,
                results: &state.search_results,
                selected: (!state.search_results.is_empty()).then_some(state.search_selected),
                theme,
            },
            area,
        ),
        ActiveView::Image(index) => {
            let images = state.report.gallery_images();
            if let Some(&url) = images.get(index) {
                let content = ModalContent::Image {
                    url,
                    index,
                    total: images.len(),
                };
                frame.render_widget(ModalWidget { content, theme }, area);
            }
        }
        ActiveView::Video(index) => {
            if let Some(video) = state.report.videos.get(index) {
                frame.render_widget(
                    ModalWidget {
                        content: ModalContent::Video(video),
                        theme,
                    },
                    area,
                );
            }
        }
        ActiveView::Authors => frame.render_widget(
            ModalWidget {
                content: ModalContent::Authors(&state.report.authors),
                theme,
            },
            area,
        ),
        ActiveView::SettingsMenu => frame.render_widget(SettingsPopup { state }, area),
        ActiveView::ControlsSubmenu => {
            let visible = controls_visible_rows(area);
            frame.render_widget(
                ControlsPopup {
                    config: &state.config,
                    theme,
                    selected: state.controls_selected,
                    awaiting_rebind: state.awaiting_rebind,
                    offset: controls_offset(state.controls_selected, visible),
                },
                area,
            );
        }
    }
}

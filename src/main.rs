//! A link-in-bio landing page for your terminal.
//!
//! Run the binary to present the page interactively.
//! Run with `--export` to print the page data as JSON and exit.

mod analytics;
mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Terminal,
};

use crate::analytics::{sinks::JsonlSink, sinks::LogSink, ClickSink, Sinks};
use crate::app::{
    event::{schedule, spawn_event_reader, Effect},
    handler,
    state::{ActiveView, AppState},
};
use crate::config::Prefs;
use crate::core::model::{LinkPage, ProfilePatch};
use crate::core::transfer;
use crate::ui::{
    layout::AppLayout,
    links::{self, LinkListWidget},
    popup::{AlertPopup, SettingsPopup},
    profile::ProfileWidget,
    theme::Theme,
};

/// Startup loading effect length.
const LOADING_DURATION: Duration = Duration::from_millis(300);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Link-in-bio landing page for the terminal")]
struct Cli {
    /// Page data file (JSON).  Defaults to the built-in demo page.
    data: Option<PathBuf>,

    /// Override the profile name for this session.
    #[arg(long)]
    name: Option<String>,

    /// Override the profile bio for this session.
    #[arg(long)]
    bio: Option<String>,

    /// Start with the named theme (dark, light, ocean, sunset).
    #[arg(long)]
    theme: Option<String>,

    /// Print the page data as JSON and exit.
    #[arg(long)]
    export: bool,

    /// Disable entrance and click-feedback animations.
    #[arg(long)]
    no_animations: bool,

    /// Append tracked clicks to this JSONL file.
    #[arg(long)]
    click_log: Option<PathBuf>,
}

// ───────────────────────────────────────── effects ───────────

/// Apply a deferred completion to the state.
fn apply_effect(state: &mut AppState, effect: Effect) {
    match effect {
        Effect::LoadingDone => {
            state.loading = false;
            // The entrance cascade starts once the page is visible.
            state.reveal.restart();
        }
        Effect::PulseExpired { link_id } => {
            if let Some(card) = state.cards.iter_mut().find(|c| c.id == link_id) {
                card.pulsing = false;
            }
        }
        Effect::ScrollToCard { link_id } => {
            let inner = handler::links_inner(state);
            let viewport = (inner.height / links::CARD_HEIGHT).max(1) as usize;
            let visible = links::visible_indices(&state.cards);
            if let Some(position) = visible
                .iter()
                .position(|&i| state.cards[i].id == link_id)
            {
                state.list_state.scroll_to(position, viewport);
            }
        }
        Effect::ImportLoaded { result } => {
            let text = match result {
                Ok(text) => text,
                Err(err) => {
                    tracing::error!("import failed: {err}");
                    state.show_alert("Import failed", err.to_string());
                    return;
                }
            };
            match transfer::import_data(&mut state.page, &text) {
                Ok(()) => {
                    state.rerender_links();
                    state.status_message = Some("Import complete".into());
                }
                Err(err) => {
                    // The parse failed before any merge — the page is intact.
                    tracing::error!("import failed: {err}");
                    state.show_alert(
                        "Import failed",
                        format!("{err}. The page was left unchanged."),
                    );
                }
            }
        }
    }
}

// ───────────────────────────────────────── main ──────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── build the page model ──────────────────────────────────
    let mut page = LinkPage::default();
    if let Some(path) = &cli.data {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        transfer::import_data(&mut page, &text)
            .with_context(|| format!("could not parse {}", path.display()))?;
    }
    if cli.name.is_some() || cli.bio.is_some() {
        page.update_profile(ProfilePatch {
            name: cli.name.clone(),
            bio: cli.bio.clone(),
            ..ProfilePatch::default()
        });
    }
    if cli.no_animations {
        page.settings.animations_enabled = false;
    }

    // ── one-shot export mode ──────────────────────────────────
    if cli.export {
        println!("{}", transfer::export_data(&page));
        return Ok(());
    }

    // ── theme: compiled-in default, then saved slot, then CLI ─
    let prefs = Prefs::load();
    let mut theme = Theme::default();
    if let Some(saved) = prefs.theme {
        theme.set(saved);
    }
    if let Some(name) = &cli.theme {
        // Unknown names change nothing, same as everywhere else.
        theme.set_by_name(name);
    }

    // ── analytics sinks ───────────────────────────────────────
    let mut sink_list: Vec<Box<dyn ClickSink>> = vec![Box::new(LogSink)];
    if let Some(path) = cli.click_log {
        sink_list.push(Box::new(JsonlSink::new(path)));
    }
    let mut state = AppState::new(page, theme, prefs, Sinks::new(sink_list));

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(100));
    let (effect_tx, mut effect_rx) = tokio::sync::mpsc::unbounded_channel::<Effect>();
    schedule(&effect_tx, LOADING_DURATION, Effect::LoadingDone);

    // ── event loop ────────────────────────────────────────────
    loop {
        // Draw first so the UI stays responsive; animations advance on
        // the next tick.
        terminal.draw(|frame| {
            state.frame_area = frame.area();
            let layout = AppLayout::from_area(frame.area(), state.page.settings.show_footer);

            frame.render_widget(
                ProfileWidget::new(&state.page.profile, &state.theme),
                layout.profile_area,
            );

            let links_block = Block::default()
                .title(" links ")
                .title_style(state.theme.title_style())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(state.theme.border_style());

            if state.loading {
                let inner = links_block.inner(layout.links_area);
                frame.render_widget(links_block.clone(), layout.links_area);
                frame.render_widget(
                    Paragraph::new("⋯ loading")
                        .style(state.theme.loading_style())
                        .alignment(Alignment::Center),
                    inner,
                );
            } else {
                let widget = LinkListWidget::new(&state.cards, &state.theme, &state.reveal)
                    .block(links_block);
                frame.render_stateful_widget(widget, layout.links_area, &mut state.list_state);
            }

            if layout.footer_area.height > 0 {
                let stats = state.page.stats();
                let footer = format!(
                    "{} links · {} featured · {} categories",
                    stats.total_links,
                    stats.featured_links,
                    stats.categories.len()
                );
                frame.render_widget(
                    Paragraph::new(footer)
                        .style(state.theme.footer_style())
                        .alignment(Alignment::Center),
                    layout.footer_area,
                );
            }

            let status = if state.active_view == ActiveView::AddPrompt {
                Line::from(vec![
                    Span::raw(" add: "),
                    Span::styled(format!("{}▌", state.input), state.theme.input_style()),
                ])
            } else {
                Line::raw(
                    state
                        .status_message
                        .clone()
                        .unwrap_or_else(|| handler::STATUS_HINT.into()),
                )
            };
            frame.render_widget(
                Paragraph::new(status).style(state.theme.status_bar_style()),
                layout.status_area,
            );

            match state.active_view {
                ActiveView::SettingsMenu => {
                    frame.render_widget(
                        SettingsPopup {
                            state: &state,
                            selected: state.settings_selected,
                        },
                        frame.area(),
                    );
                }
                ActiveView::Alert => {
                    if let Some((title, message)) = &state.alert {
                        frame.render_widget(
                            AlertPopup {
                                theme: &state.theme,
                                title,
                                message,
                            },
                            frame.area(),
                        );
                    }
                }
                ActiveView::Page | ActiveView::AddPrompt => {}
            }
        })?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    app::event::AppEvent::Key(k) => handler::handle_key(&mut state, k, &effect_tx),
                    app::event::AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m, &effect_tx),
                    app::event::AppEvent::Resize(_, _) => {}
                    // Ticks exist so the reveal cascade and pulses repaint.
                    app::event::AppEvent::Tick => {}
                }
            }

            Some(effect) = effect_rx.recv() => {
                // Batch-drain whatever else is queued before redrawing.
                apply_effect(&mut state, effect);
                while let Ok(next) = effect_rx.try_recv() {
                    apply_effect(&mut state, next);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

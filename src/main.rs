//! Match gems runner (default binary).
//!
//! Interactive mode drives the board through the adapter and paints it with the
//! framebuffer renderer. `--headless <ticks>` runs drop ticks without a terminal
//! and prints the final snapshot as JSON.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use match_gems::adapter::{Adapter, AdapterConfig};
use match_gems::core::GameSession;
use match_gems::input::{handle_key_event, mouse_click, should_quit, Cursor};
use match_gems::term::{BoardView, FrameBuffer, GlyphCache, Overlay, TerminalRenderer, Viewport};
use match_gems::types::BoardAction;

fn main() -> Result<()> {
    env_logger::init();
    let config = AdapterConfig::from_env();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--headless") => {
            let ticks = args
                .next()
                .context("--headless needs a tick count")?
                .parse::<u64>()
                .context("tick count must be a non-negative integer")?;
            run_headless(&config, ticks)
        }
        Some(other) => bail!("unknown argument: {other} (usage: match-gems [--headless <ticks>])"),
        None => run_interactive(&config),
    }
}

fn run_headless(config: &AdapterConfig, ticks: u64) -> Result<()> {
    let mut session = GameSession::new(config.session_options())?;
    for _ in 0..ticks {
        session.drop_tick();
    }
    info!("headless run finished after {} ticks", session.ticks());
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}

fn run_interactive(config: &AdapterConfig) -> Result<()> {
    let adapter = Adapter::start(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = event_loop(&mut term, &adapter, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    adapter.shutdown()?;
    result
}

fn event_loop(
    term: &mut TerminalRenderer,
    adapter: &Adapter,
    config: &AdapterConfig,
) -> Result<()> {
    // Build every gem glyph up front so the first frames never miss the cache.
    let mut glyphs = GlyphCache::new();
    glyphs.preload();
    let mut view = BoardView::default().with_glyphs(glyphs);
    let mut cursor = Cursor::new(config.rows, config.cols);
    let mut fb = FrameBuffer::new(0, 0);
    let repaint = config.repaint_period();

    let mut frame: u32 = 0;
    let mut last_paint: Option<Instant> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if last_paint.map_or(true, |t| t.elapsed() >= repaint) {
            last_paint = Some(Instant::now());
            frame = frame.wrapping_add(1);
            let overlay = Overlay {
                cursor: Some(cursor.position()),
                frame,
            };
            view.render_into(&adapter.snapshot(), overlay, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = last_paint
            .and_then(|t| repaint.checked_sub(t.elapsed()))
            .unwrap_or(Duration::ZERO);
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if cursor.apply(action) {
                    continue;
                }
                // The cursor is clamped to the board, so an error here means the driver is gone.
                adapter.apply_action(action, cursor.position())?;
                if action == BoardAction::Reset {
                    term.invalidate();
                }
            }
            Event::Mouse(mouse) => {
                let Some((x, y)) = mouse_click(mouse) else {
                    continue;
                };
                if let Some(pos) = view.cell_at(&adapter.snapshot(), viewport, x, y) {
                    cursor.set(pos);
                    adapter.click(pos)?;
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

//! Input handling for the Vitrine TUI.
//!
//! While the gate is locked every key routes to the overlay; no input
//! reaches the page underneath. After unlock, keys drive the page
//! subsystems directly.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use vitrine_engine::App;

/// Drain the crossterm event queue without blocking the frame loop.
pub fn handle_events(app: &mut App) -> Result<()> {
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                handle_key(app, key);
            }
            Event::Paste(text) if app.gate().is_visible() => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    app.gate_mut().push_char(c);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.gate().is_visible() {
        handle_gate_key(app, key);
    } else {
        handle_page_key(app, key);
    }
}

fn handle_gate_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.gate_mut().submit_input();
        }
        KeyCode::Backspace => app.gate_mut().backspace(),
        KeyCode::Char(c) => app.gate_mut().push_char(c),
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('l') => app.cycle_language(),
        KeyCode::Char('n') => app.toggle_nav(),
        KeyCode::Char('c') => app.accept_cookies(),
        KeyCode::Esc => app.close_nav(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.jump_to_section(index, now);
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1.0),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1.0),
        KeyCode::PageDown => app.scroll_by(6.0),
        KeyCode::PageUp => app.scroll_by(-6.0),
        KeyCode::Home => app.scroll_by(-10_000.0),
        _ => {}
    }
}

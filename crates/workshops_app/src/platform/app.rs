//! Terminal event loop: translates key presses into core messages, runs
//! the core update function, hands effects to the engine, and re-renders
//! only when the state reports a change.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use workshops_core::{update, AppState, Msg};
use workshops_engine::FetchSettings;

use super::effects::EffectRunner;
use super::ui;

/// Whether key presses currently edit the filter or drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Filter,
}

enum KeyAction {
    Quit,
    Dispatch(Msg),
    Ignored,
}

pub fn run_app() -> io::Result<()> {
    app_logging::initialize(app_logging::LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), FetchSettings::default());

    enable_raw_mode()?;
    let mut out = io::stdout();
    out.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = AppState::new();
    let mut input_mode = InputMode::Normal;
    let mut filter_input = String::new();

    // Mount: kick off the fetch for page 1 right away.
    let (next, effects) = update(state, Msg::Started);
    state = next;
    runner.enqueue(effects);

    let mut quit = false;
    while !quit {
        // Drain everything queued (key-derived messages and engine
        // completions) before deciding whether to redraw.
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(state, msg);
            state = next;
            runner.enqueue(effects);
        }

        if state.consume_dirty() {
            let view = state.view();
            ui::render::draw(&mut terminal, &view, input_mode == InputMode::Filter)?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(key, &mut input_mode, &mut filter_input) {
                        KeyAction::Quit => quit = true,
                        KeyAction::Dispatch(msg) => {
                            let _ = msg_tx.send(msg);
                        }
                        KeyAction::Ignored => {}
                    }
                }
            }
        } else {
            // Idle tick; keeps the loop shape uniform and is a no-op in
            // the core.
            let _ = msg_tx.send(Msg::Tick);
        }
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn handle_key(key: KeyEvent, mode: &mut InputMode, filter_input: &mut String) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('n') | KeyCode::Right => KeyAction::Dispatch(Msg::NextClicked),
            KeyCode::Char('p') | KeyCode::Left => KeyAction::Dispatch(Msg::PreviousClicked),
            KeyCode::Char('/') => {
                *mode = InputMode::Filter;
                KeyAction::Ignored
            }
            KeyCode::Esc if !filter_input.is_empty() => {
                filter_input.clear();
                KeyAction::Dispatch(Msg::FilterChanged(String::new()))
            }
            _ => KeyAction::Ignored,
        },
        InputMode::Filter => match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                *mode = InputMode::Normal;
                KeyAction::Ignored
            }
            KeyCode::Backspace => {
                filter_input.pop();
                KeyAction::Dispatch(Msg::FilterChanged(filter_input.clone()))
            }
            KeyCode::Char(c) => {
                filter_input.push(c);
                KeyAction::Dispatch(Msg::FilterChanged(filter_input.clone()))
            }
            _ => KeyAction::Ignored,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn normal_mode_maps_navigation_keys() {
        let mut mode = InputMode::Normal;
        let mut filter = String::new();

        assert!(matches!(
            handle_key(press(KeyCode::Char('n')), &mut mode, &mut filter),
            KeyAction::Dispatch(Msg::NextClicked)
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Left), &mut mode, &mut filter),
            KeyAction::Dispatch(Msg::PreviousClicked)
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Char('q')), &mut mode, &mut filter),
            KeyAction::Quit
        ));
    }

    #[test]
    fn slash_enters_filter_mode_and_typing_updates_the_key() {
        let mut mode = InputMode::Normal;
        let mut filter = String::new();

        handle_key(press(KeyCode::Char('/')), &mut mode, &mut filter);
        assert_eq!(mode, InputMode::Filter);

        match handle_key(press(KeyCode::Char('r')), &mut mode, &mut filter) {
            KeyAction::Dispatch(Msg::FilterChanged(key)) => assert_eq!(key, "r"),
            _ => panic!("expected a filter update"),
        }
        match handle_key(press(KeyCode::Backspace), &mut mode, &mut filter) {
            KeyAction::Dispatch(Msg::FilterChanged(key)) => assert_eq!(key, ""),
            _ => panic!("expected a filter update"),
        }

        handle_key(press(KeyCode::Enter), &mut mode, &mut filter);
        assert_eq!(mode, InputMode::Normal);
    }

    #[test]
    fn escape_in_normal_mode_clears_a_non_empty_filter() {
        let mut mode = InputMode::Normal;
        let mut filter = "rust".to_string();

        match handle_key(press(KeyCode::Esc), &mut mode, &mut filter) {
            KeyAction::Dispatch(Msg::FilterChanged(key)) => assert_eq!(key, ""),
            _ => panic!("expected the filter to clear"),
        }
        assert!(filter.is_empty());
    }
}

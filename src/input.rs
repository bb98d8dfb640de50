use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Quit,
    TogglePause,
    SpeedUp,
    SpeedDown,
    ToggleTexture,
    Reseed,
    ToggleHud,
}

/// Drains pending key presses without blocking the frame.
pub(crate) fn poll_actions(max_frame_time: Duration) -> anyhow::Result<Vec<Action>> {
    let mut out = Vec::new();
    let timeout = std::cmp::min(Duration::from_millis(1), max_frame_time);

    while event::poll(timeout)? {
        if let Event::Key(k) = event::read()? {
            if k.kind != KeyEventKind::Press && k.kind != KeyEventKind::Repeat {
                continue;
            }
            let action = match k.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
                KeyCode::Char(' ') => Some(Action::TogglePause),
                KeyCode::Right => Some(Action::SpeedUp),
                KeyCode::Left => Some(Action::SpeedDown),
                KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::ToggleTexture),
                KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reseed),
                KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::ToggleHud),
                _ => None,
            };
            if let Some(a) = action {
                out.push(a);
                if out.len() >= 32 {
                    break;
                }
            }
        }
    }
    Ok(out)
}

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Everything drained from the terminal event queue in one poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Quit key pressed (q, Esc, Ctrl+C)
    pub quit: bool,
    /// Any key pressed, quit keys included
    pub key_pressed: bool,
    /// Mouse-button-down events seen
    pub mouse_downs: u32,
    /// Last known pointer cell as (column, row)
    pub pointer: Option<(u16, u16)>,
}

/// Polls the terminal and folds raw events into an [`InputFrame`]
#[derive(Debug, Default)]
pub struct InputManager {
    /// Survives across polls so a click without movement still has a position
    pointer: Option<(u16, u16)>,
    frame: InputFrame,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains every pending event. Waits up to `timeout` for the first one,
    /// so `Duration::ZERO` never blocks.
    pub fn poll_events(&mut self, timeout: Duration) -> color_eyre::Result<InputFrame> {
        self.begin_frame();

        let mut wait = timeout;
        while event::poll(wait)? {
            let event = event::read()?;
            self.handle_event(event);
            wait = Duration::ZERO;
        }

        Ok(self.frame)
    }

    fn begin_frame(&mut self) {
        self.frame = InputFrame {
            pointer: self.pointer,
            ..InputFrame::default()
        };
    }

    /// Folds one raw event into the current frame
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            // Resize events handled by the app querying the terminal size
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        self.frame.key_pressed = true;

        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.frame.quit = true;
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        match mouse_event.kind {
            MouseEventKind::Down(_) => {
                self.frame.mouse_downs += 1;
                self.set_pointer(mouse_event.column, mouse_event.row);
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Up(_) => {
                self.set_pointer(mouse_event.column, mouse_event.row);
            }
            _ => {}
        }
    }

    fn set_pointer(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        self.frame.pointer = self.pointer;
    }

    /// Result of the events handled since the last poll began
    pub fn frame(&self) -> InputFrame {
        self.frame
    }

    /// Starts a fresh frame without polling the terminal
    pub fn reset_frame(&mut self) {
        self.begin_frame();
    }
}

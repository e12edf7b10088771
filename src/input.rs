use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step `(dx, dy)` in grid coordinates; `y` grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Key signals the game distinguishes. Everything else collapses to `Other`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Parses a DOM-style key identifier such as `"ArrowLeft"`.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    /// Returns the movement direction for arrow keys.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowUp => Some(Direction::Up),
            Self::ArrowDown => Some(Direction::Down),
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowRight => Some(Direction::Right),
            Self::Other => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Self::ArrowUp,
            KeyCode::Down => Self::ArrowDown,
            KeyCode::Left => Self::ArrowLeft,
            KeyCode::Right => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// What a terminal key press means to the host loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TerminalInput {
    Key(Key),
    Restart,
    Quit,
}

/// Maps a crossterm key event; releases and repeats map to `None`.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> Option<TerminalInput> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let input = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            TerminalInput::Quit
        }
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => TerminalInput::Quit,
        KeyCode::Char('r' | 'R') => TerminalInput::Restart,
        code => TerminalInput::Key(Key::from(code)),
    };
    Some(input)
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

use std::io::{self, Write};

/// Mouse cursor shapes understood by the OSC 22 escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerShape {
    Default,
    Pointer,
}

impl PointerShape {
    fn name(self) -> &'static str {
        match self {
            PointerShape::Default => "default",
            PointerShape::Pointer => "pointer",
        }
    }
}

/// Switch the terminal's mouse cursor. Terminals without OSC 22 support
/// (Kitty, Foot, Xterm and Ghostty have it) ignore the sequence.
pub fn set_mouse_cursor(shape: PointerShape) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]22;{}\x1b\\", shape.name());
    let _ = stdout.flush();
}

//! Terminal mode switching around a play session.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

/// Terminal state to undo on the way out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub keyboard_enhanced: bool,
}

/// Switch to the alternate screen, hide the cursor and enter raw mode.
///
/// On error the terminal may be half configured; call [`leave`] regardless.
pub fn enter<W: Write>(out: &mut W, session: &mut Session) -> io::Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    terminal::enable_raw_mode()?;
    // Key-release reporting where the terminal supports it; others fall
    // back to the hold window.
    session.keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    Ok(())
}

/// Restore the terminal. Every step is attempted even if an earlier one fails.
pub fn leave<W: Write>(out: &mut W, session: Session) {
    if session.keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_enter_failure_leaves_session_untouched() {
        let mut session = Session::default();
        assert!(enter(&mut BrokenPipe, &mut session).is_err());
        assert!(!session.keyboard_enhanced);
        // Teardown on a dead writer must not panic.
        leave(&mut BrokenPipe, session);
    }

    #[test]
    fn test_leave_restores_cursor_and_main_screen() {
        let mut buf: Vec<u8> = Vec::new();
        leave(&mut buf, Session::default());
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\x1b[?25h"), "cursor shown: {text:?}");
        assert!(text.contains("\x1b[?1049l"), "alternate screen left: {text:?}");
    }
}

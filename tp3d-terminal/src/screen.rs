//! The terminal as an injected capability.
//!
//! The render loop talks to a [`Screen`] trait rather than to crossterm
//! directly, so the loop and its state machine are testable without a
//! TTY. [`TerminalScreen`] is the real implementation: raw mode plus the
//! alternate screen, restored on drop and on panic.

use std::io::{self, stdout, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

/// A decoded input event the render loop cares about.
///
/// Direction convention: Up/Left/PageUp step their axis by -5 degrees,
/// Down/Right/PageDown by +5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Quit,
}

/// Terminal capability consumed by the render loop: dimensions, grid and
/// status drawing, key polling with a bounded wait.
pub trait Screen {
    /// Current (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Draw pre-clipped grid rows starting at the top-left corner.
    fn draw_grid(&mut self, rows: &[String]) -> io::Result<()>;

    /// Draw the status line over the top row.
    fn draw_status(&mut self, line: &str) -> io::Result<()>;

    /// Flush queued drawing to the display.
    fn present(&mut self) -> io::Result<()>;

    /// Wait up to `timeout` for a key. `Ok(None)` means no input arrived,
    /// which is a normal per-frame outcome.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;
}

/// Map a crossterm event to a [`Key`], ignoring everything else.
fn decode(event: Event) -> Option<Key> {
    let Event::Key(KeyEvent { code, kind, .. }) = event else {
        return None;
    };
    if kind != KeyEventKind::Press {
        return None;
    }
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Char('q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

/// Tracks raw-mode state for the panic hook.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Guard that restores the terminal on drop, panic included.
struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
            let _ = disable_raw_mode();
        }
    }
}

/// Restore the terminal before the panic message prints, so a panic never
/// leaves the shell in raw mode on the alternate screen.
fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);
    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
            let _ = disable_raw_mode();
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
        }
        original_hook(panic_info);
    }));
}

/// The crossterm-backed screen: raw mode, alternate screen, hidden
/// cursor, queued drawing.
pub struct TerminalScreen {
    _guard: RawModeGuard,
}

impl TerminalScreen {
    pub fn new() -> io::Result<Self> {
        let guard = RawModeGuard::enter()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { _guard: guard })
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        // Raw mode itself is restored by the guard.
        let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
    }
}

impl Screen for TerminalScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn draw_grid(&mut self, rows: &[String]) -> io::Result<()> {
        let mut out = stdout();
        queue!(out, Clear(ClearType::All))?;
        for (y, row) in rows.iter().enumerate() {
            queue!(out, cursor::MoveTo(0, y as u16), Print(row))?;
        }
        Ok(())
    }

    fn draw_status(&mut self, line: &str) -> io::Result<()> {
        queue!(stdout(), cursor::MoveTo(0, 0), Print(line))
    }

    fn present(&mut self) -> io::Result<()> {
        stdout().flush()
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        // Non-key events (resize, release) are drained without cutting
        // the wait short.
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            if let Some(key) = decode(event::read()?) {
                return Ok(Some(key));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
        }
    }
}

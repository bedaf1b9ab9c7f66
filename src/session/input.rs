//! Console input: text blocks for the session and the API key prompt.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, IsTerminal, Write};

use crate::config::{CredentialSource, CredentialStatus};

/// Word that ends the program at any prompt.
pub const QUIT_WORD: &str = "quit";

/// One unit of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputBlock {
    /// Lines joined with single spaces.
    Text(String),
    /// The user typed the quit word.
    Quit,
    /// Input closed before any text arrived.
    Eof,
}

pub fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(QUIT_WORD)
}

/// Read lines until a blank line follows some content.
///
/// Blank lines before the first content line are skipped. End of input
/// after some content returns what was collected.
pub fn read_block<R: BufRead>(input: &mut R) -> io::Result<InputBlock> {
    let mut lines: Vec<String> = Vec::new();

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(if lines.is_empty() {
                InputBlock::Eof
            } else {
                InputBlock::Text(lines.join(" "))
            });
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if is_quit(line) {
            return Ok(InputBlock::Quit);
        }
        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            return Ok(InputBlock::Text(lines.join(" ")));
        }
        lines.push(line.to_string());
    }
}

/// Result of feeding one key to the masked prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    /// Keep reading; echo this many mask characters (negative erases).
    Continue(i8),
    Submit,
    Cancel,
}

fn apply_key(buffer: &mut String, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue(0);
    }

    match key.code {
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Esc => KeyOutcome::Cancel,
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Cancel
        }
        KeyCode::Backspace => {
            if buffer.pop().is_some() {
                KeyOutcome::Continue(-1)
            } else {
                KeyOutcome::Continue(0)
            }
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            KeyOutcome::Continue(1)
        }
        _ => KeyOutcome::Continue(0),
    }
}

/// Disables raw mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Read a line without echoing it. `Ok(None)` means the user cancelled.
fn read_masked(out: &mut impl Write) -> io::Result<Option<String>> {
    let _guard = RawModeGuard::enable()?;
    let mut buffer = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match apply_key(&mut buffer, key) {
            KeyOutcome::Submit => break,
            KeyOutcome::Cancel => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Ok(None);
            }
            KeyOutcome::Continue(1) => write!(out, "*")?,
            KeyOutcome::Continue(-1) => write!(out, "\u{8} \u{8}")?,
            KeyOutcome::Continue(_) => {}
        }
        out.flush()?;
    }

    write!(out, "\r\n")?;
    out.flush()?;
    Ok(Some(buffer))
}

/// Read a visible line from stdin. `Ok(None)` on end of input.
fn read_plain() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Asks for the API key on the terminal.
///
/// Input is masked when stdin is a terminal; if raw mode cannot be enabled
/// the prompt falls back to a plain line read.
pub struct PromptCredential {
    prompt: String,
}

impl PromptCredential {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    fn read_key(&self) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", self.prompt)?;
        stdout.flush()?;

        if io::stdin().is_terminal() {
            match read_masked(&mut stdout) {
                Ok(entry) => return Ok(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "Masked input unavailable, falling back to plain input");
                }
            }
        }

        read_plain()
    }
}

impl CredentialSource for PromptCredential {
    fn describe(&self) -> String {
        "interactive prompt".to_string()
    }

    fn resolve(&self) -> CredentialStatus {
        match self.read_key() {
            Ok(Some(entry)) if is_quit(&entry) => CredentialStatus::Cancelled,
            Ok(Some(entry)) => CredentialStatus::from_value(&entry, "entered API key"),
            Ok(None) => CredentialStatus::Cancelled,
            Err(e) => CredentialStatus::Unconfigured {
                reason: format!("failed to read API key: {}", e),
            },
        }
    }
}

/*
 * Line Editor
 *
 * Canonical line input for the shell: printable ASCII is collected and
 * echoed, backspace erases, Enter hands the finished line over. Non-blank
 * lines are kept in a small history.
 */

use heapless::{String, Vec};

use super::Terminal;
use crate::config::{MAX_HISTORY_ENTRIES, MAX_LINE_LENGTH};

/// One input line.
pub type Line = String<MAX_LINE_LENGTH>;

pub struct LineEditor {
    buffer: Line,
    history: Vec<Line, MAX_HISTORY_ENTRIES>,
}

impl LineEditor {
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            history: Vec::new(),
        }
    }

    /// Handle one input character, echoing to `term`.
    ///
    /// Returns the finished line when Enter is pressed.
    pub fn handle_char(&mut self, ch: char, term: &mut dyn Terminal) -> Option<Line> {
        match ch {
            '\n' | '\r' => {
                let _ = term.write_char('\n');
                let line = self.buffer.clone();

                if !line.trim().is_empty() {
                    if self.history.is_full() {
                        // Drop the oldest entry
                        self.history.remove(0);
                    }
                    let _ = self.history.push(line.clone());
                }

                self.buffer.clear();
                Some(line)
            }
            '\x08' | '\x7F' => {
                if self.buffer.pop().is_some() {
                    term.backspace();
                }
                None
            }
            ch if ch.is_ascii() && !ch.is_control() => {
                // One byte is always left unused, as the line had room for a terminator
                if self.buffer.len() < MAX_LINE_LENGTH - 1 {
                    let _ = self.buffer.push(ch);
                    let _ = term.write_char(ch);
                }
                None
            }
            _ => None,
        }
    }

    pub fn current_line(&self) -> &str {
        &self.buffer
    }

    /// Past lines, oldest first.
    pub fn history(&self) -> &[Line] {
        &self.history
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tests::RecordingTerminal;

    fn type_str(editor: &mut LineEditor, term: &mut RecordingTerminal, s: &str) -> Option<Line> {
        let mut done = None;
        for ch in s.chars() {
            if let Some(line) = editor.handle_char(ch, term) {
                done = Some(line);
            }
        }
        done
    }

    #[test]
    fn test_collects_and_echoes_a_line() {
        let mut editor = LineEditor::new();
        let mut term = RecordingTerminal::default();

        assert_eq!(type_str(&mut editor, &mut term, "sdir"), None);
        assert_eq!(editor.current_line(), "sdir");

        let line = type_str(&mut editor, &mut term, "\n").unwrap();
        assert_eq!(line.as_str(), "sdir");
        assert_eq!(term.output, "sdir\n");
        assert_eq!(editor.current_line(), "");
    }

    #[test]
    fn test_backspace_erases() {
        let mut editor = LineEditor::new();
        let mut term = RecordingTerminal::default();

        let line = type_str(&mut editor, &mut term, "\x08cdx\x08 ..\n").unwrap();
        assert_eq!(line.as_str(), "cd ..");
        assert_eq!(term.output, "cd ..\n");
    }

    #[test]
    fn test_ignores_control_and_non_ascii() {
        let mut editor = LineEditor::new();
        let mut term = RecordingTerminal::default();

        let line = type_str(&mut editor, &mut term, "a\tb\u{1b}é\r").unwrap();
        assert_eq!(line.as_str(), "ab");
    }

    #[test]
    fn test_line_length_is_capped() {
        let mut editor = LineEditor::new();
        let mut term = RecordingTerminal::default();

        let long = "x".repeat(MAX_LINE_LENGTH + 10) + "\n";
        let line = type_str(&mut editor, &mut term, &long).unwrap();
        assert_eq!(line.len(), MAX_LINE_LENGTH - 1);
    }

    #[test]
    fn test_history_keeps_recent_non_blank_lines() {
        let mut editor = LineEditor::new();
        let mut term = RecordingTerminal::default();

        type_str(&mut editor, &mut term, "   \n");
        assert!(editor.history().is_empty());

        for i in 0..MAX_HISTORY_ENTRIES + 2 {
            type_str(&mut editor, &mut term, &std::format!("echo {}\n", i));
        }

        let history = editor.history();
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(history[0].as_str(), "echo 2");
        assert_eq!(
            history[MAX_HISTORY_ENTRIES - 1].as_str(),
            std::format!("echo {}", MAX_HISTORY_ENTRIES + 1)
        );
    }
}

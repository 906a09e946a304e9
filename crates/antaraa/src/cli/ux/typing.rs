use antaraa_core::typing::TypingSink;
use console::Term;

/// Terminal edit that turns the previous frame into the next one.
#[derive(Debug, PartialEq, Eq)]
enum Update<'a> {
    /// The new frame extends what is on screen.
    Append(&'a str),
    /// Erase the trailing cursor glyph, then write the rest.
    ReplaceCursor(&'a str),
    /// Frames are unrelated, start a new line and print the frame.
    Redraw(&'a str),
}

fn plan_update<'a>(shown: &str, next: &'a str, cursor: &str) -> Update<'a> {
    if let Some(rest) = next.strip_prefix(shown) {
        return Update::Append(rest);
    }
    match shown.strip_suffix(cursor) {
        Some(base) if !cursor.is_empty() => match next.strip_prefix(base) {
            Some(rest) => Update::ReplaceCursor(rest),
            None => Update::Redraw(next),
        },
        _ => Update::Redraw(next),
    }
}

/// Types into the terminal in place, writing only what changed between frames.
pub struct TerminalSink<'a> {
    term: &'a Term,
    cursor: String,
    shown: String,
}

impl<'a> TerminalSink<'a> {
    pub fn new(term: &'a Term, cursor: &str) -> Self {
        Self {
            term,
            cursor: cursor.to_string(),
            shown: String::new(),
        }
    }
}

impl TypingSink for TerminalSink<'_> {
    fn render(&mut self, content: &str) -> std::io::Result<()> {
        match plan_update(&self.shown, content, &self.cursor) {
            Update::Append(rest) => self.term.write_str(rest)?,
            Update::ReplaceCursor(rest) => {
                self.term.clear_chars(self.cursor.chars().count())?;
                self.term.write_str(rest)?;
            }
            Update::Redraw(frame) => self.term.write_str(&format!("\n{frame}"))?,
        }
        self.shown = content.to_string();
        Ok(())
    }
}

//! Simulated typing of a reply.
//!
//! The reply is revealed one fragment at a time with a cursor glyph at the
//! end, pausing between fragments. Pauses race a [`CancellationToken`] so a
//! caller can skip ahead, the sink always ends up holding the full text.
use crate::completion::CancellationToken;
use crate::config::TypingConfig;
use std::iter::FusedIterator;
use std::time::Duration;

/// Destination of the typing effect. Every call replaces what was shown before.
pub trait TypingSink {
    fn render(&mut self, content: &str) -> std::io::Result<()>;
}

/// Splits text into alternating runs of whitespace and non-whitespace.
///
/// Concatenating the fragments yields the input unchanged.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    rest: &'a str,
}

pub fn fragments(text: &str) -> Fragments<'_> {
    Fragments { rest: text }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let in_whitespace = first.is_whitespace();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != in_whitespace)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (fragment, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(fragment)
    }
}

impl FusedIterator for Fragments<'_> {}

#[derive(Debug, Clone)]
pub struct TypingPresenter {
    delay: Duration,
    cursor: String,
}

impl TypingPresenter {
    pub fn new(delay: Duration, cursor: impl Into<String>) -> Self {
        Self {
            delay,
            cursor: cursor.into(),
        }
    }

    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Types `text` into `sink`. Returns `true` if the animation was cut short
    /// by `cancel_token`.
    pub async fn stream<S: TypingSink + ?Sized>(
        &self,
        text: &str,
        sink: &mut S,
        cancel_token: &CancellationToken,
    ) -> std::io::Result<bool> {
        let mut shown = String::with_capacity(text.len() + self.cursor.len());

        for fragment in fragments(text) {
            if cancel_token.is_cancelled() {
                break;
            }
            shown.push_str(fragment);
            sink.render(&format!("{shown}{}", self.cursor))?;

            tokio::select! {
                _ = tokio::time::sleep(self.delay) => {}
                _ = cancel_token.cancelled() => break,
            }
        }

        sink.render(text)?;
        Ok(cancel_token.is_cancelled())
    }
}

impl From<&TypingConfig> for TypingPresenter {
    fn from(config: &TypingConfig) -> Self {
        Self::new(config.delay(), config.cursor.clone())
    }
}

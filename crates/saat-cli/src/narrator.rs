use std::io::{self, Write};

use saat_core::model::moves::Move;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("failed to write narration: {0}")]
    Io(#[from] io::Error),
}

/// Renders a finished decision for the table. Runs after the selector returns.
pub trait Narrator {
    fn narrate(&mut self, mv: &Move) -> Result<(), NarrationError>;
}

/// Spoken form of a decision.
pub fn sentence(mv: &Move) -> String {
    match mv {
        Move::Play(card) => format!(
            "I will play {} of {}. Thank you",
            card.rank.value(),
            card.suite.name()
        ),
        Move::Pass => "Pass. No cards to play. Dhanyavadagalyu".to_string(),
    }
}

/// Writes the sentence as a line of text instead of synthesizing speech.
pub struct TextNarrator<W: Write> {
    out: W,
}

impl<W: Write> TextNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextNarrator<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Narrator for TextNarrator<W> {
    fn narrate(&mut self, mv: &Move) -> Result<(), NarrationError> {
        writeln!(self.out, "{}", sentence(mv))?;
        self.out.flush()?;
        Ok(())
    }
}

//! Interactive summarize loop.
//!
//! Reads a block of text, summarizes it, prints the result, and repeats until
//! the user quits or input ends. Request failures are shown and the loop
//! carries on; only console I/O errors end it early.

pub mod display;
mod input;

use std::io::{self, BufRead, Write};

use crate::inference::{Summarize, SummarizeError};
use crate::stats::CompressionStats;

pub use input::{is_quit, read_block, InputBlock, PromptCredential, QUIT_WORD};

/// What happened to one block of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Turn {
    Summarized {
        summary: String,
        stats: CompressionStats,
    },
    Failed(SummarizeError),
    Finished,
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until quit or end of input.
    pub async fn run<S: Summarize>(&mut self, summarizer: &S) -> io::Result<()> {
        display::write_instructions(&mut self.output)?;

        loop {
            writeln!(self.output)?;
            self.output.flush()?;

            match self.turn(summarizer).await? {
                Turn::Finished => return Ok(()),
                Turn::Summarized { .. } | Turn::Failed(_) => {
                    display::write_next_prompt(&mut self.output)?;
                }
            }
        }
    }

    /// Read one block and process it.
    pub async fn turn<S: Summarize>(&mut self, summarizer: &S) -> io::Result<Turn> {
        let text = match read_block(&mut self.input)? {
            InputBlock::Quit | InputBlock::Eof => {
                display::write_farewell(&mut self.output)?;
                self.output.flush()?;
                return Ok(Turn::Finished);
            }
            InputBlock::Text(text) => text,
        };

        if text.trim().is_empty() {
            let err = SummarizeError::EmptyInput;
            display::write_error(&mut self.output, &err)?;
            return Ok(Turn::Failed(err));
        }

        display::write_progress(&mut self.output)?;
        self.output.flush()?;

        match summarizer.summarize(&text).await {
            Ok(summary) => {
                let stats = CompressionStats::compute(&text, &summary);
                display::write_summary(&mut self.output, &summary)?;
                display::write_stats(&mut self.output, &stats)?;
                Ok(Turn::Summarized { summary, stats })
            }
            Err(err) => {
                display::write_error(&mut self.output, &err)?;
                Ok(Turn::Failed(err))
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

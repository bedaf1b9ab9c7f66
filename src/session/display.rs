//! Console output for the session.

use std::io::{self, Write};

use crate::inference::SummarizeError;
use crate::stats::{group_thousands, CompressionStats};

const WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(WIDTH)
}

fn light_rule() -> String {
    "-".repeat(WIDTH)
}

pub fn write_banner(out: &mut impl Write, model_id: &str) -> io::Result<()> {
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "BART Text Summarizer")?;
    writeln!(out, "Using {} model from Hugging Face", model_id)?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)
}

pub fn write_instructions(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Enter the text you want to summarize.")?;
    writeln!(out, "(Press Enter twice when done, or type 'quit' to exit)")?;
    writeln!(out, "{}", light_rule())
}

pub fn write_progress(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Summarizing...")?;
    writeln!(out, "{}", light_rule())
}

pub fn write_summary(out: &mut impl Write, summary: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "SUMMARY:")?;
    writeln!(out, "{}", summary)?;
    writeln!(out, "{}", light_rule())
}

pub fn write_error(out: &mut impl Write, err: &SummarizeError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "ERROR: {}", err)?;
    writeln!(out, "{}", light_rule())
}

pub fn write_stats(out: &mut impl Write, stats: &CompressionStats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "COMPRESSION STATISTICS")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "Original Characters:    {}", group_thousands(stats.original_chars))?;
    writeln!(out, "Summary Characters:     {}", group_thousands(stats.summary_chars))?;
    writeln!(out, "Compression Rate:       {:.1}%", stats.compression_rate)?;
    writeln!(
        out,
        "Summary is {:.1}% shorter than original",
        stats.compression_rate
    )?;
    writeln!(out, "{}", heavy_rule())
}

pub fn write_next_prompt(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Enter more text to summarize, or type 'quit' to exit:")
}

pub fn write_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Goodbye!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn stats_block_layout() {
        let stats = CompressionStats {
            original_chars: 1234,
            summary_chars: 210,
            compression_rate: 82.98,
        };
        let text = render(|out| write_stats(out, &stats));

        assert!(text.contains("COMPRESSION STATISTICS"));
        assert!(text.contains("Original Characters:    1,234\n"));
        assert!(text.contains("Summary Characters:     210\n"));
        assert!(text.contains("Compression Rate:       83.0%\n"));
        assert!(text.contains("Summary is 83.0% shorter than original\n"));
    }

    #[test]
    fn banner_names_model() {
        let text = render(|out| write_banner(out, "facebook/bart-large-cnn"));
        assert!(text.contains("Using facebook/bart-large-cnn model from Hugging Face"));
    }

    #[test]
    fn error_uses_classified_message() {
        let text = render(|out| write_error(out, &SummarizeError::Unauthorized));
        assert!(text.contains("ERROR: Unauthorized"));
        assert!(!text.contains("SUMMARY:"));
    }
}

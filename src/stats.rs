//! Compression statistics for a summary.

/// Character counts and reduction for one (original, summary) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub original_chars: usize,
    pub summary_chars: usize,
    /// Percentage reduction, `(1 - summary / original) * 100`.
    /// Zero when the original is empty.
    pub compression_rate: f64,
}

impl CompressionStats {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_chars = original.chars().count();
        let summary_chars = summary.chars().count();
        let compression_rate = if original_chars > 0 {
            (1.0 - summary_chars as f64 / original_chars as f64) * 100.0
        } else {
            0.0
        };

        Self {
            original_chars,
            summary_chars,
            compression_rate,
        }
    }
}

/// Format a count with `,` thousands separators.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

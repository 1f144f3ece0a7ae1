// Output formatting: terminal report and JSON export.

pub mod terminal;

use anyhow::Result;

use crate::analysis::AnalysisResult;

/// Render a fraction (0.0 to 1.0) as a fixed-width text bar, e.g. `[=====     ]`.
/// Out-of-range fractions are clamped.
pub fn render_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Serialize an analysis result as pretty-printed JSON.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

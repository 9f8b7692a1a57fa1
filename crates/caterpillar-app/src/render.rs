//! Render use cases over in-memory reports.

use caterpillar_types::ConversionReport;

/// The standalone HTML page.
pub fn render_html(report: &ConversionReport) -> String {
    caterpillar_render::render_full(report)
}

pub fn render_markdown(report: &ConversionReport) -> String {
    caterpillar_render::render_markdown(report)
}

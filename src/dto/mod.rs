pub mod chart;
pub mod render_summary;

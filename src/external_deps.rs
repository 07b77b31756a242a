pub use chrono::{DateTime, Local};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use plotters::coord::Shift;
pub use plotters::prelude::{
    ChartBuilder, Circle, Color, DrawingArea, DrawingBackend, FontStyle, FontTransform,
    IntoDrawingArea, IntoFont, PathElement, RGBAColor, RGBColor, Rectangle, SeriesLabelPosition,
    ShapeStyle, Text, TextStyle, BLACK, BLUE, WHITE,
};
pub use plotters::style::text_anchor::{HPos, Pos, VPos};

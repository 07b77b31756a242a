pub mod image_format;
pub mod render_target;

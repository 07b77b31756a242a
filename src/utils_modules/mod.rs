pub mod color_utils;
pub mod io_utils;
pub mod logger_utils;
pub mod plot_utils;

pub mod canvas_config;
pub mod output_config;
pub mod total_config;

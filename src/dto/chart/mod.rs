pub mod bar_panel;
pub mod figure;

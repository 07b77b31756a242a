pub mod chart_service;
pub mod summary_service;

pub mod hierarchical_network;
pub mod network_performance;
pub mod sensor_reading;
pub mod single_tier_network;
pub mod zone;

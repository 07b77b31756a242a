pub mod configs;
pub mod network;
pub mod topology;

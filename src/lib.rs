/*
Author      : Seunghwan Shin
Create date : 2025-11-00
Description : Chart rendering for the carbon trading CO2 sensor network

History     : 2025-11-00 Seunghwan Shin       # [v.1.0.0] first create
*/

pub mod common;
pub mod external_deps;
pub mod prelude;

pub mod controller;
pub mod dto;
pub mod enums;
pub mod env_configuration;
pub mod model;
pub mod service;
pub mod traits;
pub mod utils_modules;

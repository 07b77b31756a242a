pub mod service_traits;

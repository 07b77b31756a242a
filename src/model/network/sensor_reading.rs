use crate::common::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SensorReading {
    pub sensor_id: String,
    pub avg_co2: f64,
}

impl SensorReading {
    pub fn from_literal(sensor_id: &str, avg_co2: f64) -> Self {
        SensorReading::new(sensor_id.to_string(), avg_co2)
    }
}

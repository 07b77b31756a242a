use crate::common::*;

use crate::model::network::sensor_reading::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct Zone {
    pub name: String,
    pub sensors: Vec<SensorReading>,
    /* "#RRGGBB" */
    pub color: String,
}

impl Zone {
    #[doc = "존에 속한 센서들의 평균 CO2 값"]
    pub fn average_co2(&self) -> f64 {
        if self.sensors.is_empty() {
            return 0.0;
        }

        let total: f64 = self.sensors.iter().map(|s| s.avg_co2).sum();
        total / self.sensors.len() as f64
    }

    pub fn reading_at(&self, slot: usize) -> Option<f64> {
        self.sensors.get(slot).map(|s| s.avg_co2)
    }
}

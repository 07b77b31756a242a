use crate::common::*;

use crate::model::network::sensor_reading::*;

const SINGLE_TIER_CO2: [f64; 10] = [
    405.0, 475.0, 470.0, 568.0, 593.0, 629.0, 680.0, 734.0, 825.0, 838.0,
];

pub const SINGLE_TIER_BAR_COLOR: &str = "#87CEEB";

#[doc = "모든 센서가 게이트웨이로 직접 보고하는 단일 계층 네트워크의 샘플 데이터"]
#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SingleTierNetwork {
    pub sensors: Vec<SensorReading>,
}

impl SingleTierNetwork {
    pub fn sample() -> Self {
        let sensors: Vec<SensorReading> = SINGLE_TIER_CO2
            .iter()
            .enumerate()
            .map(|(idx, co2)| SensorReading::new(format!("S{}", idx + 1), *co2))
            .collect();

        Self { sensors }
    }

    pub fn sensor_ids(&self) -> Vec<String> {
        self.sensors.iter().map(|s| s.sensor_id.clone()).collect()
    }

    pub fn readings(&self) -> Vec<f64> {
        self.sensors.iter().map(|s| s.avg_co2).collect()
    }
}

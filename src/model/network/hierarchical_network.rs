use crate::common::*;

use crate::model::network::{network_performance::*, sensor_reading::*, zone::*};

const ZONE_TABLE: [(&str, [(&str, f64); 2], &str); 5] = [
    ("Zone 1", [("S1", 405.0), ("S2", 475.0)], "#FF6B6B"),
    ("Zone 2", [("S3", 470.0), ("S4", 568.0)], "#4ECDC4"),
    ("Zone 3", [("S5", 593.0), ("S6", 629.0)], "#45B7D1"),
    ("Zone 4", [("S7", 680.0), ("S8", 734.0)], "#95E1D3"),
    ("Zone 5", [("S9", 825.0), ("S10", 838.0)], "#F38181"),
];

const NETWORK_NOTES: [&str; 8] = [
    "10 CO2 Sensors (2 per zone)",
    "5 Local WiFi APs",
    "1 Main Gateway",
    "5 WiFi Networks",
    "1 CSMA Backbone",
    "Static Routing",
    "30s simulation",
    "100% Delivery",
];

#[doc = r#"
    센서 -> 존 -> 로컬 AP -> 메인 게이트웨이로 이어지는 계층형 네트워크의 샘플 데이터.

    존 데이터와 성능 카운터는 시뮬레이션 결과에서 옮겨 온 상수이며,
    차트에 필요한 값(존 평균, 존별 패킷 수 등)만 여기서 계산한다.
"#]
#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct HierarchicalNetwork {
    pub zones: Vec<Zone>,
    pub performance: NetworkPerformance,
}

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ZonedSensor {
    pub zone_name: String,
    pub zone_color: String,
    pub reading: SensorReading,
}

impl ZonedSensor {
    pub fn label(&self) -> String {
        format!("{} ({})", self.reading.sensor_id, self.zone_name)
    }
}

impl HierarchicalNetwork {
    pub fn sample() -> Self {
        let zones: Vec<Zone> = ZONE_TABLE
            .iter()
            .map(|(name, sensors, color)| {
                Zone::new(
                    name.to_string(),
                    sensors
                        .iter()
                        .map(|(id, co2)| SensorReading::from_literal(id, *co2))
                        .collect(),
                    color.to_string(),
                )
            })
            .collect();

        let performance: NetworkPerformance = NetworkPerformance::new(60, 60, 100.0, 5, 5, 6);

        Self { zones, performance }
    }

    pub fn zone_names(&self) -> Vec<String> {
        self.zones.iter().map(|z| z.name.clone()).collect()
    }

    pub fn zone_colors(&self) -> Vec<String> {
        self.zones.iter().map(|z| z.color.clone()).collect()
    }

    pub fn zone_averages(&self) -> Vec<f64> {
        self.zones.iter().map(Zone::average_co2).collect()
    }

    #[doc = "센서 슬롯(존 내 순번)별 값. 슬롯이 비어 있는 존은 0으로 채운다."]
    pub fn readings_in_slot(&self, slot: usize) -> Vec<f64> {
        self.zones
            .iter()
            .map(|z| z.reading_at(slot).unwrap_or(0.0))
            .collect()
    }

    pub fn sensors_per_zone(&self) -> usize {
        self.zones.iter().map(|z| z.sensors.len()).max().unwrap_or(0)
    }

    pub fn packets_per_zone(&self) -> Vec<u32> {
        self.zones
            .iter()
            .map(|z| z.sensors.len() as u32 * self.performance.readings_per_sensor)
            .collect()
    }

    pub fn all_sensors(&self) -> Vec<ZonedSensor> {
        self.zones
            .iter()
            .flat_map(|zone| {
                zone.sensors.iter().map(move |reading| {
                    ZonedSensor::new(zone.name.clone(), zone.color.clone(), reading.clone())
                })
            })
            .collect()
    }

    pub fn total_sensors(&self) -> usize {
        self.zones.iter().map(|z| z.sensors.len()).sum()
    }

    pub fn network_notes(&self) -> &'static [&'static str] {
        &NETWORK_NOTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_averages_follow_zone_order() {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        assert_eq!(
            network.zone_averages(),
            vec![440.0, 519.0, 611.0, 707.0, 831.5]
        );
    }

    #[test]
    fn sensor_numbering_is_contiguous_across_zones() {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        let ids: Vec<String> = network
            .all_sensors()
            .iter()
            .map(|s| s.reading().sensor_id().clone())
            .collect();
        let expected: Vec<String> = (1..=10).map(|n| format!("S{}", n)).collect();

        assert_eq!(ids, expected);
        assert_eq!(network.total_sensors(), 10);
        assert_eq!(network.sensors_per_zone(), 2);
    }

    #[test]
    fn every_zone_has_the_same_sensor_count() {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        assert!(network.zones().iter().all(|z| z.sensors().len() == 2));
    }

    #[test]
    fn packets_per_zone_add_up_to_packets_sent() {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        let packets: Vec<u32> = network.packets_per_zone();

        assert_eq!(packets, vec![12; 5]);
        assert_eq!(
            packets.iter().sum::<u32>(),
            *network.performance().packets_sent()
        );
    }

    #[test]
    fn slots_split_first_and_second_sensor() {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        assert_eq!(
            network.readings_in_slot(0),
            vec![405.0, 470.0, 593.0, 680.0, 825.0]
        );
        assert_eq!(
            network.readings_in_slot(1),
            vec![475.0, 568.0, 629.0, 734.0, 838.0]
        );
        assert_eq!(network.readings_in_slot(2), vec![0.0; 5]);
    }

    #[test]
    fn zoned_sensor_label_names_its_zone() {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        let last: ZonedSensor = network.all_sensors().pop().unwrap();
        assert_eq!(last.label(), "S10 (Zone 5)");
        assert_eq!(last.zone_color(), "#F38181");
    }

    #[test]
    fn performance_metrics_in_display_order() {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        let metrics = network.performance().metric_values();
        let labels: Vec<&str> = metrics.iter().map(|(label, _)| *label).collect();

        assert_eq!(
            labels,
            vec![
                "Packets Sent",
                "Packets Received",
                "Delivery Ratio (%)",
                "Active Zones",
                "Local APs"
            ]
        );
        assert_eq!(metrics[2].1, 100.0);
    }
}

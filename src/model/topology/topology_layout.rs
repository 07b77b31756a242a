use crate::common::*;

use crate::model::network::hierarchical_network::*;

pub const CANVAS_WIDTH: f64 = 120.0;
pub const CANVAS_HEIGHT: f64 = 80.0;

const GATEWAY_CENTER: (f64, f64) = (60.0, 70.0);
const GATEWAY_SIZE: (f64, f64) = (16.0, 8.0);

const BACKBONE_Y: f64 = 55.0;
const BACKBONE_X_RANGE: (f64, f64) = (10.0, 110.0);
const BACKBONE_LABEL_Y: f64 = 58.0;

const FIRST_ZONE_X: f64 = 15.0;
const ZONE_SPACING: f64 = 18.0;

const AP_Y: f64 = 45.0;
const AP_RADIUS: f64 = 3.0;

const SENSOR_Y: f64 = 25.0;
const SENSOR_RADIUS: f64 = 2.5;
const SENSOR_SPREAD: f64 = 4.0;
const READING_LABEL_DROP: f64 = 5.0;

const SUBNET_LABEL_Y: f64 = 35.0;
const ZONE_LABEL_Y: f64 = 15.0;

/* gap between the backbone line and the uplink ends */
const BACKBONE_GAP: f64 = 2.0;

const INFO_ANCHOR: (f64, f64) = (2.0, 78.0);

pub type Point = (f64, f64);

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct GatewayNode {
    pub center: Point,
    pub lower_left: Point,
    pub upper_right: Point,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct SensorNode {
    pub center: Point,
    pub radius: f64,
    pub label: String,
    pub reading_label: String,
    pub reading_anchor: Point,
    pub color: String,
    /* dashed WiFi link to the zone's AP */
    pub wifi_link: Segment,
}

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ZoneNode {
    pub zone_name: String,
    pub zone_color: String,
    pub ap_center: Point,
    pub ap_radius: f64,
    pub ap_label: String,
    pub uplink: Segment,
    pub sensors: Vec<SensorNode>,
    pub zone_label_anchor: Point,
    pub subnet_label: String,
    pub subnet_label_anchor: Point,
}

#[doc = r#"
    계층형 네트워크 구성도의 도형 좌표를 계산한 결과.

    좌표계는 120 x 80 단위의 평면이며, 그리기 백엔드와 무관하게 순수 데이터로만 구성된다.
    그리는 쪽은 이 값을 그대로 사용하고 별도의 좌표 계산을 하지 않는다.
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct TopologyLayout {
    pub gateway: GatewayNode,
    pub gateway_uplink: Segment,
    pub backbone: Segment,
    pub backbone_label: String,
    pub backbone_label_anchor: Point,
    pub zones: Vec<ZoneNode>,
    pub info_lines: Vec<String>,
    pub info_anchor: Point,
}

pub fn zone_center_x(zone_idx: usize) -> f64 {
    FIRST_ZONE_X + ZONE_SPACING * zone_idx as f64
}

pub fn zone_subnet(zone_idx: usize) -> String {
    format!("10.1.{}.0/24", zone_idx + 1)
}

impl TopologyLayout {
    pub fn from_network(network: &HierarchicalNetwork) -> Self {
        let (gw_x, gw_y) = GATEWAY_CENTER;
        let (gw_w, gw_h) = GATEWAY_SIZE;

        let gateway: GatewayNode = GatewayNode {
            center: GATEWAY_CENTER,
            lower_left: (gw_x - gw_w / 2.0, gw_y - gw_h / 2.0),
            upper_right: (gw_x + gw_w / 2.0, gw_y + gw_h / 2.0),
            label: "Main Gateway".to_string(),
        };

        let gateway_uplink: Segment =
            Segment::new((gw_x, gw_y - gw_h / 2.0), (gw_x, BACKBONE_Y + BACKBONE_GAP));

        let backbone: Segment = Segment::new(
            (BACKBONE_X_RANGE.0, BACKBONE_Y),
            (BACKBONE_X_RANGE.1, BACKBONE_Y),
        );

        let mut sensor_number: usize = 0;
        let mut zones: Vec<ZoneNode> = Vec::with_capacity(network.zones().len());

        for (zone_idx, zone) in network.zones().iter().enumerate() {
            let zone_x: f64 = zone_center_x(zone_idx);
            let sensor_count: usize = zone.sensors().len();

            let sensors: Vec<SensorNode> = zone
                .sensors()
                .iter()
                .enumerate()
                .map(|(slot, reading)| {
                    sensor_number += 1;
                    let sensor_x: f64 = zone_x + sensor_offset(slot, sensor_count);

                    SensorNode {
                        center: (sensor_x, SENSOR_Y),
                        radius: SENSOR_RADIUS,
                        label: format!("S{}", sensor_number),
                        reading_label: format!("{:.0}", reading.avg_co2()),
                        reading_anchor: (sensor_x, SENSOR_Y - READING_LABEL_DROP),
                        color: zone.color().clone(),
                        wifi_link: Segment::new(
                            (sensor_x, SENSOR_Y + SENSOR_RADIUS),
                            (zone_x, AP_Y - AP_RADIUS),
                        ),
                    }
                })
                .collect();

            zones.push(ZoneNode {
                zone_name: zone.name().clone(),
                zone_color: zone.color().clone(),
                ap_center: (zone_x, AP_Y),
                ap_radius: AP_RADIUS,
                ap_label: format!("AP{}", zone_idx + 1),
                uplink: Segment::new((zone_x, AP_Y + AP_RADIUS), (zone_x, BACKBONE_Y - BACKBONE_GAP)),
                sensors,
                zone_label_anchor: (zone_x, ZONE_LABEL_Y),
                subnet_label: zone_subnet(zone_idx),
                subnet_label_anchor: (zone_x, SUBNET_LABEL_Y),
            });
        }

        Self {
            gateway,
            gateway_uplink,
            backbone,
            backbone_label: "CSMA Backbone (10.2.1.0/24)".to_string(),
            backbone_label_anchor: (GATEWAY_CENTER.0, BACKBONE_LABEL_Y),
            zones,
            info_lines: network
                .network_notes()
                .iter()
                .map(|note| note.to_string())
                .collect(),
            info_anchor: INFO_ANCHOR,
        }
    }

    pub fn ap_count(&self) -> usize {
        self.zones.len()
    }

    pub fn sensor_count(&self) -> usize {
        self.zones.iter().map(|z| z.sensors.len()).sum()
    }
}

#[doc = "존 중심으로부터 센서의 x 오프셋. 두 개일 때 -4, +4 로 좌우 대칭 배치된다."]
fn sensor_offset(slot: usize, sensor_count: usize) -> f64 {
    if sensor_count <= 1 {
        return 0.0;
    }
    let span: f64 = SENSOR_SPREAD * 2.0;
    let step: f64 = span / (sensor_count - 1) as f64;
    -SENSOR_SPREAD + step * slot as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TopologyLayout {
        TopologyLayout::from_network(&HierarchicalNetwork::sample())
    }

    #[test]
    fn zones_are_spread_along_the_backbone() {
        let xs: Vec<f64> = layout().zones().iter().map(|z| z.ap_center().0).collect();
        assert_eq!(xs, vec![15.0, 33.0, 51.0, 69.0, 87.0]);
    }

    #[test]
    fn gateway_box_is_centered_above_backbone() {
        let layout: TopologyLayout = layout();
        assert_eq!(layout.gateway().lower_left(), &(52.0, 66.0));
        assert_eq!(layout.gateway().upper_right(), &(68.0, 74.0));
        assert_eq!(
            layout.gateway_uplink(),
            &Segment::new((60.0, 66.0), (60.0, 57.0))
        );
        assert_eq!(
            layout.backbone(),
            &Segment::new((10.0, 55.0), (110.0, 55.0))
        );
    }

    #[test]
    fn sensors_sit_either_side_of_their_ap() {
        let layout: TopologyLayout = layout();
        let zone: &ZoneNode = &layout.zones()[2];
        let centers: Vec<Point> = zone.sensors().iter().map(|s| *s.center()).collect();

        assert_eq!(centers, vec![(47.0, 25.0), (55.0, 25.0)]);
        assert_eq!(zone.ap_label(), "AP3");
        assert_eq!(zone.uplink(), &Segment::new((51.0, 48.0), (51.0, 53.0)));
        assert_eq!(
            zone.sensors()[0].wifi_link(),
            &Segment::new((47.0, 27.5), (51.0, 42.0))
        );
    }

    #[test]
    fn sensor_labels_number_globally() {
        let labels: Vec<String> = layout()
            .zones()
            .iter()
            .flat_map(|z| z.sensors().iter().map(|s| s.label().clone()))
            .collect();
        let expected: Vec<String> = (1..=10).map(|n| format!("S{}", n)).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn labels_carry_readings_and_subnets() {
        let layout: TopologyLayout = layout();
        let zone: &ZoneNode = &layout.zones()[4];

        assert_eq!(zone.subnet_label(), "10.1.5.0/24");
        assert_eq!(zone.sensors()[1].reading_label(), "838");
        assert_eq!(zone.sensors()[1].reading_anchor(), &(91.0, 20.0));
        assert_eq!(zone.zone_label_anchor(), &(87.0, 15.0));
        assert_eq!(zone.sensors()[1].color(), "#F38181");
    }

    #[test]
    fn counts_match_the_network() {
        let layout: TopologyLayout = layout();
        assert_eq!(layout.ap_count(), 5);
        assert_eq!(layout.sensor_count(), 10);
        assert_eq!(layout.info_lines().len(), 8);
    }

    #[test]
    fn sensor_offsets_stay_symmetric() {
        assert_eq!(sensor_offset(0, 1), 0.0);
        assert_eq!(sensor_offset(0, 2), -4.0);
        assert_eq!(sensor_offset(1, 2), 4.0);
        assert_eq!(sensor_offset(1, 3), 0.0);
    }
}

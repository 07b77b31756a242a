use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct NetworkPerformance {
    pub packets_sent: u32,
    pub packets_received: u32,
    /* percent */
    pub delivery_ratio: f64,
    pub num_zones: u32,
    pub num_aps: u32,
    pub readings_per_sensor: u32,
}

impl NetworkPerformance {
    #[doc = "Performance panel values in display order"]
    pub fn metric_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Packets Sent", self.packets_sent as f64),
            ("Packets Received", self.packets_received as f64),
            ("Delivery Ratio (%)", self.delivery_ratio),
            ("Active Zones", self.num_zones as f64),
            ("Local APs", self.num_aps as f64),
        ]
    }
}

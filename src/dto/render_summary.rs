use crate::common::*;

use crate::model::network::{hierarchical_network::*, single_tier_network::*};

#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct RenderSummary {
    pub chart: String,
    pub output_path: PathBuf,
    pub generated_at: String,
    pub total_sensors: usize,
    pub zones: Option<u32>,
    pub local_aps: Option<u32>,
    pub packets_sent: Option<u32>,
    pub packets_received: Option<u32>,
    pub delivery_ratio: Option<f64>,
}

impl RenderSummary {
    pub fn for_single_tier(
        network: &SingleTierNetwork,
        output_path: &Path,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            chart: "single-tier".to_string(),
            output_path: output_path.to_path_buf(),
            generated_at: generated_at.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            total_sensors: network.sensors().len(),
            zones: None,
            local_aps: None,
            packets_sent: None,
            packets_received: None,
            delivery_ratio: None,
        }
    }

    pub fn for_hierarchical(
        network: &HierarchicalNetwork,
        output_path: &Path,
        generated_at: DateTime<Local>,
    ) -> Self {
        let performance = network.performance();

        Self {
            chart: "hierarchical".to_string(),
            output_path: output_path.to_path_buf(),
            generated_at: generated_at.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            total_sensors: network.total_sensors(),
            zones: Some(*performance.num_zones()),
            local_aps: Some(*performance.num_aps()),
            packets_sent: Some(*performance.packets_sent()),
            packets_received: Some(*performance.packets_received()),
            delivery_ratio: Some(*performance.delivery_ratio()),
        }
    }

    #[doc = "콘솔에 출력할 확인 메시지 목록"]
    pub fn console_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = vec![format!(
            "✓ {} visualization saved as: {}",
            self.display_name(),
            self.display_path().display()
        )];

        if self.zones.is_none() {
            return lines;
        }

        lines.push(format!("✓ Total sensors: {}", self.total_sensors));

        if let Some(zones) = self.zones {
            lines.push(format!("✓ Zones: {}", zones));
        }
        if let Some(local_aps) = self.local_aps {
            lines.push(format!("✓ Local APs: {}", local_aps));
        }
        if let Some(packets_sent) = self.packets_sent {
            lines.push(format!("✓ Packets sent: {}", packets_sent));
        }
        if let Some(packets_received) = self.packets_received {
            lines.push(format!("✓ Packets received: {}", packets_received));
        }
        if let Some(delivery_ratio) = self.delivery_ratio {
            lines.push(format!("✓ Delivery ratio: {:.1}%", delivery_ratio));
        }

        lines
    }

    #[doc = "이미지 파일과 같은 위치에 저장되는 요약 JSON 경로"]
    pub fn summary_path(&self) -> PathBuf {
        let stem: String = self
            .output_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.chart.clone());

        self.output_path
            .with_file_name(format!("{}_summary.json", stem))
    }

    #[doc = "현재 디렉토리에 저장된 경우 파일 이름만, 아니면 경로 전체"]
    fn display_path(&self) -> &Path {
        self.output_path
            .strip_prefix(".")
            .unwrap_or(self.output_path.as_path())
    }

    fn display_name(&self) -> &'static str {
        match self.chart.as_str() {
            "single-tier" => "Single-tier",
            _ => "Hierarchical network",
        }
    }
}

use crate::common::*;

use crate::enums::image_format::*;
use crate::model::network::{hierarchical_network::*, single_tier_network::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the single-tier bar chart (one bar per sensor) and save it as an image file
        # Arguments
        * `network` - Single-tier sample network
        * `output_path` - Path where the chart image will be saved
        * `format` - Image backend to use
        * `dimensions` - Canvas size in pixels
    "]
    async fn generate_single_tier_chart(
        &self,
        network: &SingleTierNetwork,
        output_path: &Path,
        format: ImageFormat,
        dimensions: (u32, u32),
    ) -> anyhow::Result<()>;

    #[doc = "
        Render the six-panel hierarchical dashboard, including the topology diagram
        # Arguments
        * `network` - Hierarchical sample network
        * `output_path` - Path where the dashboard image will be saved
        * `format` - Image backend to use
        * `dimensions` - Canvas size in pixels
    "]
    async fn generate_hierarchical_dashboard(
        &self,
        network: &HierarchicalNetwork,
        output_path: &Path,
        format: ImageFormat,
        dimensions: (u32, u32),
    ) -> anyhow::Result<()>;
}

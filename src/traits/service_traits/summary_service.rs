use crate::common::*;

use crate::dto::render_summary::*;

#[async_trait]
pub trait SummaryService: Send + Sync {
    async fn report_render(&self, summary: &RenderSummary) -> anyhow::Result<()>;
}

use crate::common::*;
use crate::traits::service_traits::summary_service::*;

use crate::dto::render_summary::*;
use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct SummaryServiceImpl {
    write_summary: bool,
}

#[async_trait]
impl SummaryService for SummaryServiceImpl {
    #[doc = "렌더링 결과를 콘솔에 출력하고, 설정된 경우 요약 JSON 파일을 이미지 옆에 저장한다."]
    async fn report_render(&self, summary: &RenderSummary) -> anyhow::Result<()> {
        for line in summary.console_lines() {
            println!("{}", line);
        }

        info!(
            "[SummaryServiceImpl->report_render] {} chart written to {:?}",
            summary.chart(),
            summary.output_path()
        );

        if !self.write_summary {
            return Ok(());
        }

        let summary_path: PathBuf = summary.summary_path();
        write_json_to_file(&summary_path, summary)
            .await
            .context("[SummaryServiceImpl->report_render] failed to write the summary file")?;

        info!("Render summary saved as: {:?}", summary_path);

        Ok(())
    }
}

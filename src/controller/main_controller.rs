use crate::common::*;

use crate::dto::render_summary::*;
use crate::enums::{image_format::*, render_target::*};
use crate::model::{
    configs::{canvas_config::*, total_config::*},
    network::{hierarchical_network::*, single_tier_network::*},
};
use crate::traits::service_traits::{chart_service::*, summary_service::*};

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct RenderOptions {
    output_dir: PathBuf,
    format: ImageFormat,
}

impl RenderOptions {
    #[doc = "설정 파일 값 위에 CLI 인자를 덮어쓴 최종 렌더링 옵션"]
    pub fn resolve(
        config: &TotalConfig,
        output_dir: Option<PathBuf>,
        format: Option<ImageFormat>,
    ) -> Self {
        RenderOptions::new(
            output_dir.unwrap_or_else(|| config.output().output_dir().clone()),
            format.unwrap_or(*config.output().format()),
        )
    }
}

#[derive(Debug, new)]
pub struct MainController<C: ChartService, S: SummaryService> {
    chart_service: C,
    summary_service: S,
}

impl<C: ChartService, S: SummaryService> MainController<C, S> {
    #[doc = r#"
        요청된 대상 차트를 순서대로 그리고, 각 결과를 요약 출력하는 함수.

        1. `All`이면 단일 계층 -> 계층형 순서로 두 개를 모두 그린다
        2. 각 차트는 설정의 파일명/크기와 옵션의 출력 디렉토리/포맷으로 저장
        3. 저장 후 요약 서비스로 결과를 알린다

        # Returns
        * `anyhow::Result<Vec<PathBuf>>` - 생성된 이미지 경로 목록
    "#]
    pub async fn main_task(
        &self,
        target: RenderTarget,
        config: &TotalConfig,
        options: &RenderOptions,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let mut outputs: Vec<PathBuf> = Vec::new();

        for render in target.expand() {
            let output_path: PathBuf = match render {
                RenderTarget::SingleTier => {
                    self.render_single_tier(config.single_tier(), options)
                        .await?
                }
                RenderTarget::Hierarchical => {
                    self.render_hierarchical(config.hierarchical(), options)
                        .await?
                }
                RenderTarget::All => continue,
            };

            outputs.push(output_path);
        }

        Ok(outputs)
    }

    #[doc = "단일 계층 네트워크 차트 생성"]
    async fn render_single_tier(
        &self,
        canvas: &CanvasConfig,
        options: &RenderOptions,
    ) -> anyhow::Result<PathBuf> {
        let network: SingleTierNetwork = SingleTierNetwork::sample();
        let output_path: PathBuf = canvas.output_path(options.output_dir(), *options.format());

        self.chart_service
            .generate_single_tier_chart(
                &network,
                &output_path,
                *options.format(),
                canvas.dimensions(),
            )
            .await
            .map_err(|e| {
                error!(
                    "[ERROR][MainController->render_single_tier] Failed to render chart: {:?}",
                    e
                );
                e
            })?;

        let summary: RenderSummary =
            RenderSummary::for_single_tier(&network, &output_path, Local::now());
        self.summary_service.report_render(&summary).await?;

        Ok(output_path)
    }

    #[doc = "계층형 네트워크 대시보드 생성"]
    async fn render_hierarchical(
        &self,
        canvas: &CanvasConfig,
        options: &RenderOptions,
    ) -> anyhow::Result<PathBuf> {
        let network: HierarchicalNetwork = HierarchicalNetwork::sample();
        let output_path: PathBuf = canvas.output_path(options.output_dir(), *options.format());

        self.chart_service
            .generate_hierarchical_dashboard(
                &network,
                &output_path,
                *options.format(),
                canvas.dimensions(),
            )
            .await
            .map_err(|e| {
                error!(
                    "[ERROR][MainController->render_hierarchical] Failed to render dashboard: {:?}",
                    e
                );
                e
            })?;

        let summary: RenderSummary =
            RenderSummary::for_hierarchical(&network, &output_path, Local::now());
        self.summary_service.report_render(&summary).await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingChartService {
        calls: Arc<Mutex<Vec<(String, PathBuf, ImageFormat, (u32, u32))>>>,
        fail: bool,
    }

    #[async_trait]
    impl ChartService for RecordingChartService {
        async fn generate_single_tier_chart(
            &self,
            network: &SingleTierNetwork,
            output_path: &Path,
            format: ImageFormat,
            dimensions: (u32, u32),
        ) -> anyhow::Result<()> {
            if self.fail {
                return Err(anyhow!("no backend"));
            }
            assert_eq!(network.sensors().len(), 10);
            self.calls.lock().unwrap().push((
                "single-tier".to_string(),
                output_path.to_path_buf(),
                format,
                dimensions,
            ));
            Ok(())
        }

        async fn generate_hierarchical_dashboard(
            &self,
            network: &HierarchicalNetwork,
            output_path: &Path,
            format: ImageFormat,
            dimensions: (u32, u32),
        ) -> anyhow::Result<()> {
            assert_eq!(network.zones().len(), 5);
            self.calls.lock().unwrap().push((
                "hierarchical".to_string(),
                output_path.to_path_buf(),
                format,
                dimensions,
            ));
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct RecordingSummaryService {
        charts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl SummaryService for RecordingSummaryService {
        async fn report_render(&self, summary: &RenderSummary) -> anyhow::Result<()> {
            self.charts.lock().unwrap().push(summary.chart().clone());
            Ok(())
        }
    }

    fn options(format: ImageFormat) -> RenderOptions {
        RenderOptions::new(PathBuf::from("out"), format)
    }

    #[tokio::test]
    async fn all_renders_single_tier_then_hierarchical() {
        let charts: RecordingChartService = RecordingChartService::default();
        let summaries: RecordingSummaryService = RecordingSummaryService::default();
        let controller = MainController::new(charts.clone(), summaries.clone());

        let outputs: Vec<PathBuf> = controller
            .main_task(RenderTarget::All, &TotalConfig::default(), &options(ImageFormat::Png))
            .await
            .unwrap();

        assert_eq!(
            outputs,
            vec![
                PathBuf::from("out/carbon_trading_visualization.png"),
                PathBuf::from("out/hierarchical_carbon_visualization.png"),
            ]
        );

        let calls = charts.calls.lock().unwrap();
        assert_eq!(calls[0].0, "single-tier");
        assert_eq!(calls[0].3, (1200, 600));
        assert_eq!(calls[1].0, "hierarchical");
        assert_eq!(calls[1].3, (1800, 1200));
        assert_eq!(
            *summaries.charts.lock().unwrap(),
            vec!["single-tier".to_string(), "hierarchical".to_string()]
        );
    }

    #[tokio::test]
    async fn single_target_uses_requested_format() {
        let charts: RecordingChartService = RecordingChartService::default();
        let controller = MainController::new(charts.clone(), RecordingSummaryService::default());

        let outputs: Vec<PathBuf> = controller
            .main_task(
                RenderTarget::Hierarchical,
                &TotalConfig::default(),
                &options(ImageFormat::Svg),
            )
            .await
            .unwrap();

        assert_eq!(
            outputs,
            vec![PathBuf::from("out/hierarchical_carbon_visualization.svg")]
        );
        assert_eq!(charts.calls.lock().unwrap()[0].2, ImageFormat::Svg);
    }

    #[tokio::test]
    async fn render_failure_stops_before_summary() {
        let charts: RecordingChartService = RecordingChartService {
            fail: true,
            ..Default::default()
        };
        let summaries: RecordingSummaryService = RecordingSummaryService::default();
        let controller = MainController::new(charts, summaries.clone());

        let result = controller
            .main_task(RenderTarget::All, &TotalConfig::default(), &options(ImageFormat::Png))
            .await;

        assert!(result.is_err());
        assert!(summaries.charts.lock().unwrap().is_empty());
    }

    #[test]
    fn cli_overrides_take_precedence_over_config() {
        let config: TotalConfig = TotalConfig::default();

        let defaults: RenderOptions = RenderOptions::resolve(&config, None, None);
        assert_eq!(defaults.output_dir(), &PathBuf::from("."));
        assert_eq!(*defaults.format(), ImageFormat::Png);

        let overridden: RenderOptions =
            RenderOptions::resolve(&config, Some(PathBuf::from("charts")), Some(ImageFormat::Svg));
        assert_eq!(overridden.output_dir(), &PathBuf::from("charts"));
        assert_eq!(*overridden.format(), ImageFormat::Svg);
    }
}

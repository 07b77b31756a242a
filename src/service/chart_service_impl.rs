use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::{BitMapBackend, SVGBackend};

use crate::dto::chart::{bar_panel::*, figure::*};
use crate::enums::image_format::*;
use crate::model::network::{hierarchical_network::*, single_tier_network::*};
use crate::model::topology::topology_layout::*;
use crate::utils_modules::{color_utils::*, io_utils::*, plot_utils::*};

const NORMAL_CO2_PPM: f64 = 400.0;
const NORMAL_CO2_LABEL: &str = "Normal (400 ppm)";
const CO2_AXIS: &str = "Average CO2 (ppm)";

/* combined width of one zone's bar group in the grouped panel */
const GROUP_WIDTH: f64 = 0.7;

const PERFORMANCE_COLORS: [&str; 5] = ["#FFB347", "#77DD77", "#84C1FF", "#DDA0DD", "#F0E68C"];

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "단일 계층 네트워크: 센서별 평균 CO2 막대 차트"]
    pub fn single_tier_panel(network: &SingleTierNetwork) -> anyhow::Result<BarPanel> {
        let readings: Vec<f64> = network.readings();
        let colors: Vec<RGBColor> = vec![parse_hex_color(SINGLE_TIER_BAR_COLOR)?; readings.len()];

        Ok(BarPanel::new(
            "Single-Tier CO2 Sensor Network - Average CO2 per Sensor",
            CO2_AXIS,
            network.sensor_ids(),
        )
        .with_x_desc("Sensor ID")
        .with_series(BarSeries::new(None, readings, colors, 1.0, 1))
        .with_value_labels(0, 10.0)
        .with_reference_line(NORMAL_CO2_PPM, Some(NORMAL_CO2_LABEL), 2))
    }

    #[doc = r#"
        계층형 대시보드의 막대 패널 다섯 개를 그리드 순서대로 만든다.

        1. 존/센서별 CO2 (그룹 막대)
        2. 존 평균 CO2
        3. 네트워크 성능 지표
        4. 센서 개별 CO2
        5. 존별 패킷 수
    "#]
    pub fn dashboard_panels(network: &HierarchicalNetwork) -> anyhow::Result<Vec<BarPanel>> {
        let zone_names: Vec<String> = network.zone_names();
        let zone_colors: Vec<RGBColor> = parse_hex_colors(&network.zone_colors())?;

        /* 1 */
        let slots: usize = network.sensors_per_zone().max(1);
        let mut by_zone: BarPanel =
            BarPanel::new("CO2 Levels by Zone and Sensor", CO2_AXIS, zone_names.clone())
                .with_x_desc("Zone")
                .with_bar_width(GROUP_WIDTH / slots as f64)
                .with_reference_line(NORMAL_CO2_PPM, None, 2);

        for slot in 0..slots {
            let opacity: f64 = (0.8 - 0.2 * slot as f64).max(0.3);
            by_zone = by_zone.with_series(BarSeries::new(
                Some(format!("Sensor {}", slot + 1)),
                network.readings_in_slot(slot),
                zone_colors.clone(),
                opacity,
                1,
            ));
        }

        /* 2 */
        let zone_average: BarPanel = BarPanel::new(
            "Zone-Level Average CO2 Emissions",
            CO2_AXIS,
            zone_names.clone(),
        )
        .with_x_desc("Zone")
        .with_series(BarSeries::new(
            None,
            network.zone_averages(),
            zone_colors.clone(),
            0.7,
            2,
        ))
        .with_value_labels(1, 15.0);

        /* 3 */
        let metrics: Vec<(&str, f64)> = network.performance().metric_values();
        let metric_colors: Vec<RGBColor> = PERFORMANCE_COLORS
            .iter()
            .map(|hex| parse_hex_color(hex))
            .collect::<anyhow::Result<Vec<RGBColor>>>()?;

        let performance: BarPanel = BarPanel::new(
            "Hierarchical Network Performance",
            "Count / Percentage",
            metrics.iter().map(|(label, _)| label.to_string()).collect(),
        )
        .with_series(BarSeries::new(
            None,
            metrics.iter().map(|(_, value)| *value).collect(),
            metric_colors,
            0.7,
            2,
        ))
        .with_value_labels(0, 1.5);

        /* 4 */
        let sensors: Vec<ZonedSensor> = network.all_sensors();
        let sensor_colors: Vec<RGBColor> = sensors
            .iter()
            .map(|s| parse_hex_color(s.zone_color()))
            .collect::<anyhow::Result<Vec<RGBColor>>>()?;

        let individual: BarPanel = BarPanel::new(
            "Individual Sensor CO2 Readings",
            CO2_AXIS,
            sensors.iter().map(ZonedSensor::label).collect(),
        )
        .with_x_desc("Sensor (Zone)")
        .with_series(BarSeries::new(
            None,
            sensors.iter().map(|s| *s.reading().avg_co2()).collect(),
            sensor_colors,
            0.7,
            1,
        ))
        .with_reference_line(NORMAL_CO2_PPM, None, 1)
        .with_rotated_labels();

        /* 5 */
        let packets: BarPanel = BarPanel::new("Data Collection by Zone", "Packets Transmitted", zone_names)
            .with_x_desc("Zone")
            .with_series(BarSeries::new(
                None,
                network
                    .packets_per_zone()
                    .into_iter()
                    .map(f64::from)
                    .collect(),
                zone_colors,
                0.7,
                2,
            ))
            .with_value_labels(0, 0.3);

        Ok(vec![by_zone, zone_average, performance, individual, packets])
    }

    pub fn dashboard_figure(network: &HierarchicalNetwork) -> anyhow::Result<Figure> {
        Ok(Figure::Dashboard {
            title: "Hierarchical Carbon Trading Network - Simulation Results".to_string(),
            panels: Self::dashboard_panels(network)?,
            topology: TopologyLayout::from_network(network),
        })
    }

    #[doc = "그림을 별도 blocking 스레드에서 그려 파일로 저장한다."]
    async fn render(
        &self,
        figure: Figure,
        output_path: &Path,
        format: ImageFormat,
        dimensions: (u32, u32),
    ) -> anyhow::Result<()> {
        /* Create parent directory if it doesn't exist */
        ensure_parent_dir(output_path).await?;

        let output_path_buf: PathBuf = output_path.to_path_buf();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                render_figure(&figure, &output_path_buf, format, dimensions)
            });

        let drawing_result: Result<(), anyhow::Error> = handle
            .await
            .context("[ChartServiceImpl->render] blocking task join failed (panic/cancelled)")?;

        drawing_result.context("[ChartServiceImpl->render] drawing/present failed")?;

        Ok(())
    }
}

fn render_figure(
    figure: &Figure,
    output_path: &Path,
    format: ImageFormat,
    dimensions: (u32, u32),
) -> anyhow::Result<()> {
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(output_path, dimensions).into_drawing_area();
            draw_figure(&root, figure)?;
            root.present()?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(output_path, dimensions).into_drawing_area();
            draw_figure(&root, figure)?;
            root.present()?;
        }
    }

    Ok(())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    match figure {
        Figure::SingleTier(panel) => draw_bar_panel(root, panel),
        Figure::Dashboard {
            title,
            panels,
            topology,
        } => {
            let body = root.titled(title, caption_font(28.0))?;
            let cells = body.split_evenly(DASHBOARD_GRID);

            if cells.len() != panels.len() + 1 {
                return Err(anyhow!(
                    "[draw_figure] {} grid cells for {} panels",
                    cells.len(),
                    figure.panel_count()
                ));
            }

            for (cell, panel) in cells.iter().zip(panels) {
                draw_bar_panel(cell, panel)?;
            }

            match cells.last() {
                Some(cell) => draw_topology(cell, topology),
                None => Err(anyhow!("[draw_figure] dashboard grid is empty")),
            }
        }
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_single_tier_chart(
        &self,
        network: &SingleTierNetwork,
        output_path: &Path,
        format: ImageFormat,
        dimensions: (u32, u32),
    ) -> anyhow::Result<()> {
        let figure: Figure = Figure::SingleTier(Self::single_tier_panel(network)?);

        self.render(figure, output_path, format, dimensions)
            .await
            .context("[ChartServiceImpl->generate_single_tier_chart]")?;

        info!("Single-tier chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn generate_hierarchical_dashboard(
        &self,
        network: &HierarchicalNetwork,
        output_path: &Path,
        format: ImageFormat,
        dimensions: (u32, u32),
    ) -> anyhow::Result<()> {
        let figure: Figure = Self::dashboard_figure(network)?;

        self.render(figure, output_path, format, dimensions)
            .await
            .context("[ChartServiceImpl->generate_hierarchical_dashboard]")?;

        info!("Hierarchical dashboard generated successfully: {:?}", output_path);

        Ok(())
    }
}

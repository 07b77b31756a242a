use crate::common::*;

use plotters::coord::{cartesian::Cartesian2d, types::RangedCoordf64};
use plotters::element::DashedPathElement;
use plotters::prelude::{ChartContext, DynElement, IntoDynElement};

use crate::dto::chart::bar_panel::*;
use crate::model::topology::topology_layout::*;
use crate::utils_modules::color_utils::*;

pub type F64Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/* backend pixel coordinate */
pub type PixelCoord = (i32, i32);

const FONT_FAMILY: &str = "sans-serif";

/* dash pattern in pixels: (dash, gap) */
const REFERENCE_DASH: (u32, u32) = (10, 6);
const WIFI_DASH: (u32, u32) = (6, 4);

/* gap between the x axis and the first character of a rotated category label */
const ROTATED_LABEL_GAP: i32 = 6;

const INFO_LINE_HEIGHT: f64 = 2.6;

pub fn font_style(size: f64, style: FontStyle, color: &RGBColor, pos: Pos) -> TextStyle<'static> {
    (FONT_FAMILY, size)
        .into_font()
        .style(style)
        .color(color)
        .pos(pos)
}

pub fn caption_font(size: f64) -> TextStyle<'static> {
    font_style(size, FontStyle::Bold, &BLACK, Pos::new(HPos::Left, VPos::Top))
}

fn centered() -> Pos {
    Pos::new(HPos::Center, VPos::Center)
}

#[doc = "범례 항목 옆에 그려지는 기호 종류"]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendMark {
    Block(RGBColor),
    Line(RGBColor),
    Dashed(RGBAColor),
}

fn legend_glyph<DB: DrawingBackend>(
    mark: LegendMark,
    (x, y): PixelCoord,
) -> DynElement<'static, DB, PixelCoord> {
    match mark {
        LegendMark::Block(color) => {
            Rectangle::new([(x, y - 5), (x + 14, y + 5)], color.filled()).into_dyn()
        }
        LegendMark::Line(color) => {
            PathElement::new(vec![(x, y), (x + 14, y)], color.stroke_width(3)).into_dyn()
        }
        LegendMark::Dashed(color) => {
            DashedPathElement::new(vec![(x, y), (x + 16, y)], 4, 2, color.stroke_width(2)).into_dyn()
        }
    }
}

#[doc = "구성도 범례: 게이트웨이, AP, 센서, 유선 백본, 무선 링크 순서"]
pub fn topology_legend(layout: &TopologyLayout) -> Vec<(String, LegendMark)> {
    vec![
        ("Main Gateway".to_string(), LegendMark::Block(DARK_GREEN)),
        (
            format!("Local APs ({})", layout.ap_count()),
            LegendMark::Block(ORANGE),
        ),
        (
            format!("Sensors ({})", layout.sensor_count()),
            LegendMark::Block(GRAY),
        ),
        ("CSMA (Ethernet)".to_string(), LegendMark::Line(BLUE)),
        (
            "WiFi 802.11b".to_string(),
            LegendMark::Dashed(NORMAL_GREEN.mix(0.5)),
        ),
    ]
}

#[doc = "x 좌표(카테고리 인덱스)에 해당하는 카테고리 이름. 정수 위치가 아니면 빈 문자열."]
pub fn category_label(categories: &[String], x: f64) -> String {
    let idx: f64 = x.round();

    if (x - idx).abs() > 1e-6 || idx < 0.0 || idx as usize >= categories.len() {
        return String::new();
    }

    categories[idx as usize].clone()
}

fn draw_dashed_path<'a, DB: DrawingBackend + 'a>(
    chart: &mut F64Chart<'a, DB>,
    points: Vec<Point>,
    dash: (u32, u32),
    style: ShapeStyle,
    legend: Option<&str>,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let drawn = chart.draw_series(std::iter::once(DashedPathElement::new(
        points, dash.0, dash.1, style,
    )))?;

    if let Some(label) = legend {
        drawn
            .label(label)
            .legend(move |coord| legend_glyph::<DB>(LegendMark::Dashed(style.color), coord));
    }

    Ok(())
}

#[doc = r#"
    회전된 카테고리 라벨의 텍스트 스타일.

    글자의 시작점(왼쪽, 세로 가운데)을 기준점으로 잡아서 90도 회전시키면
    라벨이 기준점에서 아래로 늘어진다.
"#]
pub fn rotated_label_style(size: f64) -> TextStyle<'static> {
    font_style(size, FontStyle::Normal, &BLACK, Pos::new(HPos::Left, VPos::Center))
        .transform(FontTransform::Rotate90)
}

#[doc = "x 축 위의 픽셀 좌표를 영역 기준 좌표로 바꾸고, 축 아래로 간격만큼 내린 라벨 기준점"]
pub fn rotated_label_anchor(axis_point: PixelCoord, area_base: PixelCoord) -> PixelCoord {
    (
        axis_point.0 - area_base.0,
        axis_point.1 - area_base.1 + ROTATED_LABEL_GAP,
    )
}

/* mesh labels are always anchored at their center, so rotated labels are drawn here */
fn draw_rotated_category_labels<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &F64Chart<'_, DB>,
    categories: &[String],
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let style: TextStyle = rotated_label_style(11.0);
    let base: PixelCoord = area.get_base_pixel();

    for (idx, name) in categories.iter().enumerate() {
        let axis_point: PixelCoord = chart.backend_coord(&(idx as f64, 0.0));
        area.draw_text(name, &style, rotated_label_anchor(axis_point, base))?;
    }

    Ok(())
}

#[doc = r#"
    막대 패널 하나를 주어진 영역에 그리는 함수.

    1. 패널 검증 후 x: 카테고리 인덱스, y: 0 ~ y_max 좌표계를 만든다
    2. 시리즈별로 막대(채우기 + 테두리)를 그리고, 이름이 있으면 범례에 등록
    3. 값 라벨, 점선 기준선, 범례 순으로 그린다
"#]
pub fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &BarPanel,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    panel.validate()?;

    let (x_min, x_max) = panel.x_range();
    let y_max: f64 = panel.y_max();

    let x_label_area: u32 = if *panel.rotate_category_labels() { 110 } else { 45 };

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title(), caption_font(18.0))
        .margin(12)
        .x_label_area_size(x_label_area)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    let rotated: bool = *panel.rotate_category_labels();
    let categories: Vec<String> = panel.categories().clone();
    let category_formatter = move |x: &f64| -> String {
        if rotated {
            String::new()
        } else {
            category_label(&categories, *x)
        }
    };
    let value_formatter = |y: &f64| -> String { format!("{:.0}", y) };

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(panel.categories().len() + 1)
            .x_label_formatter(&category_formatter)
            .x_label_style((FONT_FAMILY, 13.0).into_font())
            .y_label_formatter(&value_formatter)
            .y_desc(panel.y_desc().as_str())
            .axis_desc_style(font_style(14.0, FontStyle::Bold, &BLACK, centered()))
            .bold_line_style(BLACK.mix(0.15).stroke_width(1))
            .light_line_style(WHITE.stroke_width(1));

        if let Some(x_desc) = panel.x_desc() {
            mesh.x_desc(x_desc.as_str());
        }

        mesh.draw()?;
    }

    if rotated {
        draw_rotated_category_labels(area, &chart, panel.categories())?;
    }

    let mut has_legend: bool = false;

    for (series_idx, series) in panel.series().iter().enumerate() {
        let fills: Vec<Rectangle<(f64, f64)>> = series
            .values()
            .iter()
            .zip(series.colors())
            .enumerate()
            .map(|(idx, (value, color))| {
                let (left, right) = panel.bar_span(idx, series_idx);
                Rectangle::new(
                    [(left, 0.0), (right, *value)],
                    color.mix(*series.opacity()).filled(),
                )
            })
            .collect();

        let drawn = chart.draw_series(fills)?;

        if let Some(name) = series.name() {
            let legend_color: RGBAColor = series
                .colors()
                .first()
                .copied()
                .unwrap_or(GRAY)
                .mix(*series.opacity());

            drawn.label(name.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 14, y + 5)], legend_color.filled())
            });
            has_legend = true;
        }

        if *series.edge_width() > 0 {
            chart.draw_series(series.values().iter().enumerate().map(|(idx, value)| {
                let (left, right) = panel.bar_span(idx, series_idx);
                Rectangle::new(
                    [(left, 0.0), (right, *value)],
                    BLACK.stroke_width(*series.edge_width()),
                )
            }))?;
        }

        if let Some(labels) = panel.value_labels() {
            let label_style: TextStyle = font_style(
                12.0,
                FontStyle::Bold,
                &BLACK,
                Pos::new(HPos::Center, VPos::Bottom),
            );

            chart.draw_series(series.values().iter().enumerate().map(|(idx, value)| {
                let (left, right) = panel.bar_span(idx, series_idx);
                Text::new(
                    labels.format(*value),
                    ((left + right) / 2.0, *value + labels.offset()),
                    label_style.clone(),
                )
            }))?;
        }
    }

    if let Some(line) = panel.reference_line() {
        draw_dashed_path(
            &mut chart,
            vec![(x_min, *line.y()), (x_max, *line.y())],
            REFERENCE_DASH,
            NORMAL_GREEN.mix(0.6).stroke_width(*line.stroke_width()),
            line.label().as_deref(),
        )?;

        has_legend |= line.label().is_some();
    }

    if has_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8).filled())
            .border_style(BLACK.stroke_width(1))
            .label_font((FONT_FAMILY, 12.0).into_font())
            .draw()?;
    }

    Ok(())
}

fn draw_label_box<DB: DrawingBackend>(
    chart: &mut F64Chart<'_, DB>,
    anchor: Point,
    half_size: (f64, f64),
    fill: RGBAColor,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let (x, y) = anchor;
    let (half_w, half_h) = half_size;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(x - half_w, y - half_h), (x + half_w, y + half_h)],
        fill.filled(),
    )))?;

    Ok(())
}

#[doc = r#"
    계층형 네트워크 구성도를 그리는 함수.

    좌표는 모두 `TopologyLayout`에서 계산된 값을 사용한다. 원의 반지름만
    데이터 단위를 픽셀로 환산한다 (plotters의 Circle 반지름은 픽셀 단위).
"#]
pub fn draw_topology<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &TopologyLayout,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption("Hierarchical Network Architecture", caption_font(18.0))
        .margin(12)
        .build_cartesian_2d(0f64..CANVAS_WIDTH, 0f64..CANVAS_HEIGHT)?;

    let (plot_width, _) = chart.plotting_area().dim_in_pixel();
    let px_per_unit: f64 = plot_width as f64 / CANVAS_WIDTH;
    let radius_px = |radius: f64| -> i32 { (radius * px_per_unit).round().max(1.0) as i32 };

    let white_bold = |size: f64| font_style(size, FontStyle::Bold, &WHITE, centered());

    /* CSMA backbone */
    let backbone: &Segment = layout.backbone();
    chart.draw_series(std::iter::once(PathElement::new(
        vec![*backbone.from(), *backbone.to()],
        BLUE.mix(0.5).stroke_width(4),
    )))?;

    draw_label_box(
        &mut chart,
        *layout.backbone_label_anchor(),
        (17.0, 1.6),
        LIGHT_BLUE.mix(0.5),
    )?;
    chart.draw_series(std::iter::once(Text::new(
        layout.backbone_label().clone(),
        *layout.backbone_label_anchor(),
        font_style(10.0, FontStyle::Italic, &BLACK, centered()),
    )))?;

    /* main gateway */
    let gateway: &GatewayNode = layout.gateway();
    chart.draw_series(std::iter::once(Rectangle::new(
        [*gateway.lower_left(), *gateway.upper_right()],
        DARK_GREEN.mix(0.8).filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [*gateway.lower_left(), *gateway.upper_right()],
        BLACK.stroke_width(3),
    )))?;

    let gateway_words: Vec<&str> = gateway.label().split_whitespace().collect();
    let first_line_y: f64 = gateway.center().1 + (gateway_words.len() as f64 - 1.0) * 1.5;
    chart.draw_series(gateway_words.iter().enumerate().map(|(idx, word)| {
        Text::new(
            word.to_string(),
            (gateway.center().0, first_line_y - idx as f64 * 3.0),
            white_bold(11.0),
        )
    }))?;

    let uplink: &Segment = layout.gateway_uplink();
    chart.draw_series(std::iter::once(PathElement::new(
        vec![*uplink.from(), *uplink.to()],
        BLUE.mix(0.7).stroke_width(3),
    )))?;

    /* zones: AP uplinks, WiFi links, APs, sensors */
    chart.draw_series(layout.zones().iter().map(|zone| {
        PathElement::new(
            vec![*zone.uplink().from(), *zone.uplink().to()],
            BLUE.mix(0.7).stroke_width(2),
        )
    }))?;

    let wifi_style: ShapeStyle = NORMAL_GREEN.mix(0.5).stroke_width(2);
    for sensor in layout.zones().iter().flat_map(|z| z.sensors().iter()) {
        let link: &Segment = sensor.wifi_link();
        draw_dashed_path(
            &mut chart,
            vec![*link.from(), *link.to()],
            WIFI_DASH,
            wifi_style,
            None,
        )?;
    }

    chart.draw_series(layout.zones().iter().map(|zone| {
        Circle::new(
            *zone.ap_center(),
            radius_px(*zone.ap_radius()),
            ORANGE.mix(0.8).filled(),
        )
    }))?;
    chart.draw_series(layout.zones().iter().map(|zone| {
        Circle::new(
            *zone.ap_center(),
            radius_px(*zone.ap_radius()),
            BLACK.stroke_width(2),
        )
    }))?;

    let sensors: Vec<(&SensorNode, RGBColor)> = layout
        .zones()
        .iter()
        .flat_map(|z| z.sensors().iter())
        .map(|sensor| -> anyhow::Result<(&SensorNode, RGBColor)> {
            Ok((sensor, parse_hex_color(sensor.color())?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    chart.draw_series(sensors.iter().map(|(sensor, color)| {
        Circle::new(
            *sensor.center(),
            radius_px(*sensor.radius()),
            color.mix(0.7).filled(),
        )
    }))?;
    chart.draw_series(sensors.iter().map(|(sensor, _)| {
        Circle::new(
            *sensor.center(),
            radius_px(*sensor.radius()),
            BLACK.stroke_width(1),
        )
    }))?;

    /* labels */
    chart.draw_series(
        layout
            .zones()
            .iter()
            .map(|zone| Text::new(zone.ap_label().clone(), *zone.ap_center(), white_bold(9.0))),
    )?;
    chart.draw_series(
        sensors
            .iter()
            .map(|(sensor, _)| Text::new(sensor.label().clone(), *sensor.center(), white_bold(9.0))),
    )?;

    for (sensor, _) in &sensors {
        draw_label_box(&mut chart, *sensor.reading_anchor(), (2.4, 1.3), WHITE.mix(0.7))?;
    }
    chart.draw_series(sensors.iter().map(|(sensor, _)| {
        Text::new(
            sensor.reading_label().clone(),
            *sensor.reading_anchor(),
            font_style(8.0, FontStyle::Italic, &BLACK, centered()),
        )
    }))?;

    for zone in layout.zones() {
        let zone_color: RGBColor = parse_hex_color(zone.zone_color())?;
        draw_label_box(&mut chart, *zone.zone_label_anchor(), (7.0, 1.8), zone_color.mix(0.3))?;
    }
    chart.draw_series(layout.zones().iter().map(|zone| {
        Text::new(
            zone.zone_name().clone(),
            *zone.zone_label_anchor(),
            font_style(10.0, FontStyle::Bold, &BLACK, centered()),
        )
    }))?;
    chart.draw_series(layout.zones().iter().map(|zone| {
        Text::new(
            zone.subnet_label().clone(),
            *zone.subnet_label_anchor(),
            font_style(8.0, FontStyle::Italic, &NORMAL_GREEN, centered()),
        )
    }))?;

    /* network configuration box, anchored at its top-left corner */
    let (info_x, info_y) = *layout.info_anchor();
    let info_lines: Vec<String> = std::iter::once("Network Configuration:".to_string())
        .chain(layout.info_lines().iter().map(|line| format!("- {}", line)))
        .collect();
    let info_bottom: f64 = info_y - INFO_LINE_HEIGHT * info_lines.len() as f64;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(info_x - 1.0, info_bottom - 0.6), (info_x + 28.0, info_y + 0.8)],
        WHEAT.mix(0.4).filled(),
    )))?;
    chart.draw_series(info_lines.into_iter().enumerate().map(|(idx, line)| {
        Text::new(
            line,
            (info_x, info_y - INFO_LINE_HEIGHT * idx as f64),
            font_style(8.5, FontStyle::Normal, &BLACK, Pos::new(HPos::Left, VPos::Top)),
        )
    }))?;

    /* legend entries are empty series, registered in display order */
    for (name, mark) in topology_legend(layout) {
        chart
            .draw_series(std::iter::empty::<PathElement<Point>>())?
            .label(name)
            .legend(move |coord| legend_glyph::<DB>(mark, coord));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .label_font((FONT_FAMILY, 10.0).into_font())
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::hierarchical_network::*;
    use plotters::prelude::SVGBackend;

    #[test]
    fn rotated_labels_hang_below_the_axis() {
        let style: TextStyle = rotated_label_style(11.0);

        assert!(matches!(style.pos.h_pos, HPos::Left));
        assert!(matches!(style.pos.v_pos, VPos::Center));
        assert!(matches!(style.font.get_transform(), FontTransform::Rotate90));

        /* axis point (140, 520) in a panel whose area starts at (100, 400) */
        assert_eq!(
            rotated_label_anchor((140, 520), (100, 400)),
            (40, 120 + ROTATED_LABEL_GAP)
        );
    }

    #[test]
    fn topology_legend_lists_nodes_before_links() {
        let layout: TopologyLayout = TopologyLayout::from_network(&HierarchicalNetwork::sample());
        let names: Vec<String> = topology_legend(&layout)
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(
            names,
            vec![
                "Main Gateway",
                "Local APs (5)",
                "Sensors (10)",
                "CSMA (Ethernet)",
                "WiFi 802.11b",
            ]
        );
    }

    #[test]
    fn dashed_line_is_drawn_as_separate_strokes() {
        let mut svg: String = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (400, 100)).into_drawing_area();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0f64..10f64, 0f64..10f64)
                .unwrap();

            draw_dashed_path(
                &mut chart,
                vec![(0.0, 5.0), (10.0, 5.0)],
                REFERENCE_DASH,
                NORMAL_GREEN.stroke_width(2),
                None,
            )
            .unwrap();
            root.present().unwrap();
        }

        /* 400 px at 10 px dash + 6 px gap */
        let strokes: usize = svg.matches("<polyline").count();
        assert!(strokes >= 20, "expected a dashed line, got {} strokes", strokes);
    }

    #[test]
    fn category_labels_only_at_integer_positions() {
        let categories: Vec<String> = vec!["Zone 1".to_string(), "Zone 2".to_string()];

        assert_eq!(category_label(&categories, 0.0), "Zone 1");
        assert_eq!(category_label(&categories, 1.0000000001), "Zone 2");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, -1.0), "");
        assert_eq!(category_label(&categories, 2.0), "");
    }
}

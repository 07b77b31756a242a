use crate::common::*;

pub const DEFAULT_BAR_WIDTH: f64 = 0.8;
pub const Y_HEADROOM: f64 = 1.15;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct BarSeries {
    pub name: Option<String>,
    pub values: Vec<f64>,
    /* one per bar */
    pub colors: Vec<RGBColor>,
    pub opacity: f64,
    pub edge_width: u32,
}

#[derive(Debug, Clone, Copy, Getters, new)]
#[getset(get = "pub")]
pub struct ValueLabels {
    pub precision: usize,
    /* vertical offset in data units */
    pub offset: f64,
}

impl ValueLabels {
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ReferenceLine {
    pub y: f64,
    pub label: Option<String>,
    pub stroke_width: u32,
}

#[doc = r#"
    막대 차트 한 칸(패널)을 그리기 위한 정보.

    x축은 카테고리 인덱스(0, 1, 2, ...)를 중심으로 하는 실수 좌표이며,
    여러 시리즈가 있으면 카테고리 중심을 기준으로 나란히 배치된다.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct BarPanel {
    pub title: String,
    pub x_desc: Option<String>,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub bar_width: f64,
    pub value_labels: Option<ValueLabels>,
    pub reference_line: Option<ReferenceLine>,
    pub rotate_category_labels: bool,
}

impl BarPanel {
    pub fn new(title: &str, y_desc: &str, categories: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            x_desc: None,
            y_desc: y_desc.to_string(),
            categories,
            series: Vec::new(),
            bar_width: DEFAULT_BAR_WIDTH,
            value_labels: None,
            reference_line: None,
            rotate_category_labels: false,
        }
    }

    pub fn with_x_desc(mut self, x_desc: &str) -> Self {
        self.x_desc = Some(x_desc.to_string());
        self
    }

    pub fn with_series(mut self, series: BarSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn with_value_labels(mut self, precision: usize, offset: f64) -> Self {
        self.value_labels = Some(ValueLabels::new(precision, offset));
        self
    }

    pub fn with_reference_line(mut self, y: f64, label: Option<&str>, stroke_width: u32) -> Self {
        self.reference_line = Some(ReferenceLine::new(y, label.map(str::to_string), stroke_width));
        self
    }

    pub fn with_rotated_labels(mut self) -> Self {
        self.rotate_category_labels = true;
        self
    }

    #[doc = "시리즈 개수와 막대 폭으로부터 구한, 카테고리 중심 기준 시리즈별 x 오프셋"]
    pub fn series_offsets(&self) -> Vec<f64> {
        let count: usize = self.series.len();
        let center: f64 = (count as f64 - 1.0) / 2.0;

        (0..count)
            .map(|k| (k as f64 - center) * self.bar_width)
            .collect()
    }

    #[doc = "막대 하나의 [왼쪽, 오른쪽] x 구간"]
    pub fn bar_span(&self, category_idx: usize, series_idx: usize) -> (f64, f64) {
        let offset: f64 = self.series_offsets().get(series_idx).copied().unwrap_or(0.0);
        let center: f64 = category_idx as f64 + offset;
        (center - self.bar_width / 2.0, center + self.bar_width / 2.0)
    }

    pub fn x_range(&self) -> (f64, f64) {
        (-0.5, self.categories.len() as f64 - 0.5)
    }

    #[doc = "y축 상한: 가장 큰 값(기준선 포함)에 여유 비율을 곱한 값"]
    pub fn y_max(&self) -> f64 {
        let data_max: f64 = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .chain(self.reference_line.iter().map(|r| r.y))
            .fold(0.0, f64::max);

        if data_max <= 0.0 {
            1.0
        } else {
            data_max * Y_HEADROOM
        }
    }

    #[doc = "카테고리 수와 시리즈 값/색상 개수가 맞는지 검증"]
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.categories.is_empty() {
            return Err(anyhow!(
                "[BarPanel->validate] '{}' has no categories",
                self.title
            ));
        }

        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(anyhow!(
                    "[BarPanel->validate] '{}': {} values for {} categories",
                    self.title,
                    series.values.len(),
                    self.categories.len()
                ));
            }
            if series.colors.len() != series.values.len() {
                return Err(anyhow!(
                    "[BarPanel->validate] '{}': {} colors for {} bars",
                    self.title,
                    series.colors.len(),
                    series.values.len()
                ));
            }
        }

        Ok(())
    }
}

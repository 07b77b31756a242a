use crate::common::*;

use crate::enums::image_format::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct CanvasConfig {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl CanvasConfig {
    pub fn single_tier_default() -> Self {
        Self {
            file_name: "carbon_trading_visualization.png".to_string(),
            width: 1200,
            height: 600,
        }
    }

    pub fn hierarchical_default() -> Self {
        Self {
            file_name: "hierarchical_carbon_visualization.png".to_string(),
            width: 1800,
            height: 1200,
        }
    }

    #[doc = "출력 디렉토리와 이미지 포맷을 반영한 최종 파일 경로"]
    pub fn output_path(&self, output_dir: &Path, format: ImageFormat) -> PathBuf {
        output_dir
            .join(&self.file_name)
            .with_extension(format.extension())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[doc = r#"
    설정 파일의 `[single_tier]`, `[hierarchical]` 섹션.

    섹션에 적힌 필드만 덮어쓰고, 나머지는 차트별 기본값(`CanvasConfig`)을 유지한다.
"#]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CanvasSection {
    pub file_name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CanvasSection {
    pub fn apply_to(self, base: CanvasConfig) -> CanvasConfig {
        CanvasConfig {
            file_name: self.file_name.unwrap_or(base.file_name),
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_takes_extension_from_format() {
        let canvas: CanvasConfig = CanvasConfig::single_tier_default();
        assert_eq!(
            canvas.output_path(Path::new("out"), ImageFormat::Png),
            PathBuf::from("out/carbon_trading_visualization.png")
        );
        assert_eq!(
            canvas.output_path(Path::new("out"), ImageFormat::Svg),
            PathBuf::from("out/carbon_trading_visualization.svg")
        );
    }

    #[test]
    fn file_name_without_extension_gets_one() {
        let canvas: CanvasConfig = CanvasConfig {
            file_name: "dashboard".to_string(),
            width: 10,
            height: 10,
        };
        assert_eq!(
            canvas.output_path(Path::new("."), ImageFormat::Svg),
            PathBuf::from("./dashboard.svg")
        );
    }

    #[test]
    fn section_overrides_only_the_fields_it_names() {
        let section: CanvasSection = CanvasSection {
            width: Some(800),
            ..CanvasSection::default()
        };
        let canvas: CanvasConfig = section.apply_to(CanvasConfig::hierarchical_default());

        assert_eq!(canvas.dimensions(), (800, 1200));
        assert_eq!(canvas.file_name(), "hierarchical_carbon_visualization.png");
    }
}

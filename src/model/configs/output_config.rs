use crate::common::*;

use crate::enums::image_format::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub format: ImageFormat,
    pub write_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: ImageFormat::Png,
            write_summary: false,
        }
    }
}

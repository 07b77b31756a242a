use crate::common::*;

use crate::model::configs::{canvas_config::*, output_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_chart_config);

#[doc = "Function to initialize chart configuration information instances"]
pub fn initialize_chart_config() -> TotalConfig {
    info!("initialize_chart_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(from = "ChartConfigFile")]
pub struct TotalConfig {
    pub output: OutputConfig,
    pub single_tier: CanvasConfig,
    pub hierarchical: CanvasConfig,
}

/* on-disk shape: every section and every field is optional */
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChartConfigFile {
    output: OutputConfig,
    single_tier: CanvasSection,
    hierarchical: CanvasSection,
}

impl From<ChartConfigFile> for TotalConfig {
    fn from(file: ChartConfigFile) -> Self {
        Self {
            output: file.output,
            single_tier: file
                .single_tier
                .apply_to(CanvasConfig::single_tier_default()),
            hierarchical: file
                .hierarchical
                .apply_to(CanvasConfig::hierarchical_default()),
        }
    }
}

impl Default for TotalConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            single_tier: CanvasConfig::single_tier_default(),
            hierarchical: CanvasConfig::hierarchical_default(),
        }
    }
}

#[doc = "전체 차트 설정 정보"]
pub fn get_total_config_info() -> &'static TotalConfig {
    &TOTAL_CONFIG
}

impl TotalConfig {
    fn new() -> Self {
        let config_path: &str = match CHART_CONFIG_PATH.as_deref() {
            Some(path) => path,
            None => {
                info!("CHART_CONFIG_PATH is not set. Using the default chart configuration.");
                return TotalConfig::default();
            }
        };

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str =
                    "Failed to convert the data from CHART_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }

    pub fn from_toml_str(toml_content: &str) -> anyhow::Result<Self> {
        toml::from_str::<TotalConfig>(toml_content)
            .context("[TotalConfig->from_toml_str] invalid chart configuration")
    }
}

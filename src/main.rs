/*
Author      : Seunghwan Shin
Create date : 2025-11-00
Description : Renders the single-tier chart and the hierarchical dashboard
              for the carbon trading CO2 sensor network

History     : 2025-11-00 Seunghwan Shin       # [v.1.0.0] first create
*/

use carbon_viz::common::*;

use carbon_viz::controller::main_controller::*;
use carbon_viz::enums::{image_format::*, render_target::*};
use carbon_viz::model::configs::total_config::*;
use carbon_viz::service::{chart_service_impl::*, summary_service_impl::*};
use carbon_viz::utils_modules::logger_utils::*;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "carbon-viz", version, about = "Carbon trading network chart renderer")]
struct Cli {
    /// Which chart to render
    #[arg(value_enum, default_value_t = RenderTarget::All)]
    target: RenderTarget,

    /// Directory the images are written to (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Image format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<ImageFormat>,
}

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger("carbon_viz");

    let cli: Cli = Cli::parse();

    info!("Carbon chart rendering start! target: {:?}", cli.target);

    let config: &TotalConfig = get_total_config_info();
    let options: RenderOptions = RenderOptions::resolve(config, cli.output_dir, cli.format);

    /* 의존 주입 */
    let summary_service: SummaryServiceImpl = SummaryServiceImpl::new(*config.output().write_summary());
    let main_controller: MainController<ChartServiceImpl, SummaryServiceImpl> =
        MainController::new(ChartServiceImpl::new(), summary_service);

    match main_controller.main_task(cli.target, config, &options).await {
        Ok(outputs) => info!("Rendered {} chart(s): {:?}", outputs.len(), outputs),
        Err(e) => {
            error!("{:?}", e);
            panic!("{:?}", e)
        }
    }
}

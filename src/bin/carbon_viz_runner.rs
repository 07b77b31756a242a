/*
Author      : Seunghwan Shin
Create date : 2025-11-00
Description : Runs the single-tier renderer from the project root

History     : 2025-11-00 Seunghwan Shin       # [v.1.0.0] first create
*/

use carbon_viz::common::*;

use carbon_viz::env_configuration::env_config::*;
use carbon_viz::utils_modules::logger_utils::*;

use std::process::{Command, ExitStatus};

const RENDERER_NAME: &str = "carbon-viz";
const RENDERER_TARGET: &str = "single-tier";

#[doc = "runner 실행 파일과 같은 디렉토리에 있는 렌더러 실행 파일 경로"]
fn renderer_beside(current_exe: &Path) -> PathBuf {
    current_exe.with_file_name(format!("{}{}", RENDERER_NAME, env::consts::EXE_SUFFIX))
}

#[doc = r#"
    프로젝트 루트로 이동한 뒤 단일 계층 렌더러를 하위 프로세스로 실행하는 함수.

    # Arguments
    * `project_root` - 작업 디렉토리로 사용할 경로
    * `renderer` - 실행할 렌더러 경로

    # Returns
    * anyhow::Result<()> - 렌더러가 0이 아닌 코드로 끝나면 에러
"#]
fn run(project_root: &Path, renderer: &Path) -> anyhow::Result<()> {
    env::set_current_dir(project_root).with_context(|| {
        format!("[runner] failed to change directory to {:?}", project_root)
    })?;

    info!("Running {:?} {} in {:?}", renderer, RENDERER_TARGET, project_root);

    let status: ExitStatus = Command::new(renderer)
        .arg(RENDERER_TARGET)
        .status()
        .with_context(|| format!("[runner] failed to start {:?}", renderer))?;

    if !status.success() {
        return Err(anyhow!(
            "[runner] single-tier renderer exited with {}",
            status
        ));
    }

    Ok(())
}

fn locate_and_run() -> anyhow::Result<()> {
    let project_root: PathBuf = resolve_project_root(CARBON_VIZ_ROOT.as_deref());
    let current_exe: PathBuf =
        env::current_exe().context("[runner] failed to locate the current executable")?;

    run(&project_root, &renderer_beside(&current_exe))
}

fn main() {
    dotenv().ok();
    /* the log directory is relative to wherever the runner was started */
    let _logger: LoggerHandle = set_global_logger("carbon_viz_runner");

    if let Err(e) = locate_and_run() {
        error!("{:?}", e);
        std::process::exit(1);
    }
}

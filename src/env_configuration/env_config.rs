use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 설정되지 않았거나 빈 값이면 `None`을 반환하는 함수.

    이 애플리케이션의 환경변수는 모두 선택 사항이다. 값이 없으면 기본 설정으로 동작한다.

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `Option<String>` - 환경변수 값
"#]
fn get_env_or_none(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}

#[doc = r#"
    차트 설정 파일(TOML)의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `CHART_CONFIG_PATH` 환경변수가 없으면 `TotalConfig`의 기본값을 사용한다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.
"#]
pub static CHART_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_or_none("CHART_CONFIG_PATH"));

#[doc = r#"
    runner가 작업 디렉토리로 사용할 프로젝트 루트 경로.

    `CARBON_VIZ_ROOT` 환경변수가 있으면 그 값을, 없으면 크레이트 매니페스트 디렉토리를 사용한다.
"#]
pub static CARBON_VIZ_ROOT: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_or_none("CARBON_VIZ_ROOT"));

#[doc = "프로젝트 루트 경로를 결정하는 함수"]
pub fn resolve_project_root(root_override: Option<&str>) -> PathBuf {
    match root_override {
        Some(root) => PathBuf::from(root),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        assert_eq!(
            resolve_project_root(Some("/srv/carbon")),
            PathBuf::from("/srv/carbon")
        );
    }

    #[test]
    fn manifest_dir_is_the_fallback_root() {
        let root: PathBuf = resolve_project_root(None);
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn blank_variables_are_treated_as_missing() {
        env::set_var("CARBON_VIZ_TEST_BLANK", "  ");
        assert_eq!(get_env_or_none("CARBON_VIZ_TEST_BLANK"), None);
        env::set_var("CARBON_VIZ_TEST_SET", "value");
        assert_eq!(
            get_env_or_none("CARBON_VIZ_TEST_SET").as_deref(),
            Some("value")
        );
        assert_eq!(get_env_or_none("CARBON_VIZ_TEST_UNSET_KEY"), None);
    }
}

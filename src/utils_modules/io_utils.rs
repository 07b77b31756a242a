use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 적절한 오류 반환

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "출력 파일의 상위 디렉토리가 없으면 생성해주는 함수"]
pub async fn ensure_parent_dir(output_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!(
                    "[ensure_parent_dir] failed to create directory {:?}",
                    parent
                )
            })?;
        }
    }

    Ok(())
}

#[doc = r#"
    구조체를 보기 좋은 JSON 문자열로 직렬화하여 파일에 기록하는 함수.

    # Arguments
    * `file_path`    - 기록할 파일 경로 (상위 디렉토리는 자동 생성)
    * `input_struct` - JSON으로 변환할 구조체의 참조
"#]
pub async fn write_json_to_file<T: Serialize>(
    file_path: &Path,
    input_struct: &T,
) -> anyhow::Result<()> {
    let json_content: String = serde_json::to_string_pretty(input_struct).map_err(|err| {
        anyhow!(
            "[Error][write_json_to_file()] Failed to serialize struct to JSON: {}",
            err
        )
    })?;

    ensure_parent_dir(file_path).await?;
    tokio::fs::write(file_path, json_content)
        .await
        .with_context(|| format!("[write_json_to_file] failed to write {:?}", file_path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn reads_toml_into_struct() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("sample.toml");
        std::fs::write(&path, "name = \"zone\"\ncount = 5\n").unwrap();

        let sample: Sample = read_toml_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "zone".to_string(),
                count: 5
            }
        );
    }

    #[test]
    fn missing_toml_file_is_an_error() {
        let result: anyhow::Result<Sample> = read_toml_from_file("/nonexistent/sample.toml");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn json_is_written_into_new_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("nested/out/sample.json");
        let sample: Sample = Sample {
            name: "gateway".to_string(),
            count: 1,
        };

        write_json_to_file(&path, &sample).await.unwrap();

        let written: Sample = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, sample);
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_directory() {
        ensure_parent_dir(Path::new("chart.png")).await.unwrap();
    }
}

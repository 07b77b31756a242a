use crate::common::*;

const LOG_DIRECTORY: &str = "logs";
const KEEP_LOG_FILES: usize = 10;

#[doc = "로그 한 줄의 출력 형식: [시각] [레벨] T[스레드] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정하는 함수.

    1. 로그 레벨은 `RUST_LOG` 환경변수를 따르고, 없으면 info
    2. `logs/` 디렉토리에 `basename` 이름으로 기록, 하루 단위로 파일 교체
    3. info 이상은 표준출력에도 함께 출력

    반환된 핸들은 프로그램 종료 시점까지 유지해야 버퍼가 정상적으로 비워진다.
"#]
pub fn set_global_logger(basename: &str) -> LoggerHandle {
    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(LOG_DIRECTORY)
                        .basename(basename),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(KEEP_LOG_FILES),
                )
                .format_for_files(custom_format)
                .format_for_stdout(custom_format)
                .duplicate_to_stdout(Duplicate::Info)
                .start()
        })
        .unwrap_or_else(|e| {
            let err_msg: &str = "[set_global_logger] Logger initialization failed.";
            eprintln!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        })
}

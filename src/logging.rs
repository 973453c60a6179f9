use tracing_subscriber::EnvFilter;

/// tracing 구독자를 설치한다. `RUST_LOG`가 있으면 그 값을 우선한다.
///
/// verbosity 0 = warn, 1 = info, 2 이상 = debug
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // 테스트 등에서 이미 설치된 경우 무시
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use wind_storage_toolbox::{
    app, config, i18n, logging,
    ui_cli::{Cli, Command},
};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // init-config 는 깨진 설정 파일도 덮어쓸 수 있어야 한다
    let loaded = if matches!(cli.command, Command::InitConfig) {
        Ok(config::Config::default())
    } else {
        config::load_or_default(&cli.config)
    };
    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = i18n::Translator::new(&i18n::resolve_language(cli.lang.as_deref(), "auto"));
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), &cfg.language);
    let tr = i18n::Translator::new_with_pack(&lang, Path::new("locales"));

    match app::run(&cfg, &cli.config, cli.command, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

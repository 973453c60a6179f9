use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const DENSITY_RESULT: &str = "density.result";
    pub const DENSITY_METHOD: &str = "density.method";
    pub const COEFFICIENT_RESULT: &str = "coefficient.result";
    pub const POWER_TURBINE: &str = "power.turbine";
    pub const POWER_DENSITY: &str = "power.density";
    pub const POWER_RESULT: &str = "power.result";
    pub const SIMPLE_POWER_RESULT: &str = "simple_power.result";

    pub const REPORT_ROWS: &str = "report.rows";
    pub const REPORT_WITH_EFFICIENCY: &str = "report.with_efficiency";
    pub const REPORT_NULLED: &str = "report.nulled";
    pub const REPORT_MEDIAN: &str = "report.median";
    pub const REPORT_WRITTEN: &str = "report.written";

    pub const CONFIG_WRITTEN: &str = "config.written";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// `locales/<code>.toml` 언어팩이 있으면 내장 문자열 위에 덮어쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: &Path) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: load_overrides(pack_dir, lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 없으면 키를 그대로 반환한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let built_in: Option<&'a str> = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: `[section] key = "value"`.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    let value: toml::Value = toml::from_str(&content).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    walk("", &value, &mut map);
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        DENSITY_RESULT => "공기밀도",
        DENSITY_METHOD => "계산 방식",
        COEFFICIENT_RESULT => "성능계수 Cp",
        POWER_TURBINE => "터빈",
        POWER_DENSITY => "적용 공기밀도",
        POWER_RESULT => "터빈 출력",
        SIMPLE_POWER_RESULT => "터빈 출력(고정 효율)",
        REPORT_ROWS => "처리 행 수",
        REPORT_WITH_EFFICIENCY => "효율 산출 행 수",
        REPORT_NULLED => "분모 0으로 비운 행 수",
        REPORT_MEDIAN => "기준(중앙값) 터빈 출력",
        REPORT_WRITTEN => "결과 파일",
        CONFIG_WRITTEN => "기본 설정을 저장했습니다",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        DENSITY_RESULT => "Air density",
        DENSITY_METHOD => "Method",
        COEFFICIENT_RESULT => "Coefficient of performance",
        POWER_TURBINE => "Turbine",
        POWER_DENSITY => "Air density used",
        POWER_RESULT => "Turbine power",
        SIMPLE_POWER_RESULT => "Turbine power (fixed efficiency)",
        REPORT_ROWS => "Rows processed",
        REPORT_WITH_EFFICIENCY => "Rows with efficiency",
        REPORT_NULLED => "Rows left empty (zero power gap)",
        REPORT_MEDIAN => "Median reference turbine power",
        REPORT_WRITTEN => "Output file",
        CONFIG_WRITTEN => "Default configuration written",
        _ => return None,
    };
    Some(s)
}

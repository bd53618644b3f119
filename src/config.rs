//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 저장 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("설정 디렉토리 생성 실패: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("직렬화 실패: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("설정 파일 저장 실패: {0}")]
    Write(#[source] std::io::Error),
}

/// Sori 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SoriConfig {
    /// 사용할 음운 체계 파일 (없으면 기본 예제)
    #[serde(default)]
    pub phonology_path: Option<PathBuf>,
    /// 토큰/규칙 적용 후 기호 열도 출력
    #[serde(default)]
    pub show_tokens: bool,
    /// 규칙별 중간 결과 출력
    #[serde(default)]
    pub show_trace: bool,
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/sori/config.json 또는 ~/.config/sori/config.json
pub fn config_path() -> PathBuf {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

/// XDG 경로는 절대 경로면 충분 (디렉토리는 저장 시 생성)
fn config_path_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let base = xdg_config_home
        .filter(|p| p.is_absolute())
        .or_else(|| {
            home.filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("sori").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> SoriConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> SoriConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({:?}): {}", path, e);
            SoriConfig::default()
        }),
        Err(_) => SoriConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &SoriConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 설정 파일 저장
pub fn save_config_to(config: &SoriConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::CreateDir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(ConfigError::Write)?;
    Ok(())
}

//! 음운 체계 로드/저장/검증 에러

use std::path::PathBuf;

/// 음운 체계 파일 처리 및 검증 에러
#[derive(Debug, thiserror::Error)]
pub enum PhonologyError {
    /// 파일 읽기/쓰기 실패
    #[error("파일 입출력 오류 ({path:?})")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 파싱/직렬화 실패
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),

    /// 필수 필드가 비어 있는 음소
    #[error("{index}번째 음소의 {field} 필드가 비어 있습니다")]
    EmptyField { index: usize, field: &'static str },
}

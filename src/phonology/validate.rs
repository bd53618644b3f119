//! 음운 체계 검증
//!
//! - `validate`: 저장 전 필수 필드 검사 (실패 시 에러)
//! - `warnings`: 변환을 막지는 않지만 알려줄 만한 문제 목록

use std::collections::HashSet;
use std::fmt;

use super::error::PhonologyError;
use super::model::Phonology;

/// 변환을 막지 않는 진단 메시지
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhonologyWarning {
    /// 같은 표기가 두 번 이상 선언됨 (마지막 선언 사용)
    DuplicateOrth { orth: String },
    /// find/replace 길이 불일치 (규칙 무시)
    ArityMismatch {
        rule: usize,
        find: usize,
        replace: usize,
    },
    /// find 가 비어 있어 절대 적용되지 않는 규칙
    EmptyFind { rule: usize },
}

impl fmt::Display for PhonologyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhonologyWarning::DuplicateOrth { orth } => {
                write!(f, "중복된 음소 표기 '{}' (마지막 선언 사용)", orth)
            }
            PhonologyWarning::ArityMismatch {
                rule,
                find,
                replace,
            } => write!(
                f,
                "규칙 #{}: find {}개, replace {}개 (규칙 무시됨)",
                rule + 1,
                find,
                replace
            ),
            PhonologyWarning::EmptyFind { rule } => {
                write!(f, "규칙 #{}: find 가 비어 있습니다", rule + 1)
            }
        }
    }
}

impl Phonology {
    /// 모든 음소에 orth/ipa 가 있는지 검사
    pub fn validate(&self) -> Result<(), PhonologyError> {
        for (index, phoneme) in self.phonemes.iter().enumerate() {
            if phoneme.orth.is_empty() {
                return Err(PhonologyError::EmptyField {
                    index,
                    field: "orth",
                });
            }
            if phoneme.ipa.is_empty() {
                return Err(PhonologyError::EmptyField {
                    index,
                    field: "ipa",
                });
            }
        }
        Ok(())
    }

    /// 경고 목록 (음소 -> 규칙 순)
    pub fn warnings(&self) -> Vec<PhonologyWarning> {
        let mut warnings = Vec::new();

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for phoneme in &self.phonemes {
            let orth = phoneme.orth.as_str();
            if !seen.insert(orth) && reported.insert(orth) {
                warnings.push(PhonologyWarning::DuplicateOrth {
                    orth: orth.to_string(),
                });
            }
        }

        for (rule, change) in self.sound_changes.iter().enumerate() {
            if change.find.iter().all(String::is_empty) {
                warnings.push(PhonologyWarning::EmptyFind { rule });
            } else if !change.is_well_formed() {
                warnings.push(PhonologyWarning::ArityMismatch {
                    rule,
                    find: change.find.len(),
                    replace: change.replace.len(),
                });
            }
        }

        warnings
    }
}

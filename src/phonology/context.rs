//! 음운 규칙의 환경(context) 패턴
//!
//! 규칙의 `preceding` / `following` 필드는 작은 DSL 문자열입니다:
//!
//! - `""`      : 와일드카드 (경계 포함 모든 환경)
//! - `"V"`     : 임의의 모음
//! - `"C"`     : 임의의 자음
//! - `"#"`     : 단어 경계 (시작/끝)
//! - `"i,e"`   : 쉼표로 구분된 후보 중 하나
//! - `"!t,d"`  : 선두 `!` 는 전체 부정
//!
//! 파싱은 실패하지 않습니다. 알 수 없는 토큰은 리터럴 음소로 취급됩니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 부정 표시
pub const NEGATION_MARKER: char = '!';

/// 후보 구분자
pub const ALTERNATIVE_SEPARATOR: char = ',';

/// 환경 패턴의 후보 하나
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContextToken {
    /// `V` - 모음 클래스
    Vowel,
    /// `C` - 자음 클래스
    Consonant,
    /// `#` - 단어 경계
    Boundary,
    /// 리터럴 음소 기호
    Literal(String),
}

impl ContextToken {
    fn parse(s: &str) -> Self {
        match s {
            "V" => ContextToken::Vowel,
            "C" => ContextToken::Consonant,
            "#" => ContextToken::Boundary,
            other => ContextToken::Literal(other.to_string()),
        }
    }

    /// DSL 표기 그대로 반환
    pub fn as_str(&self) -> &str {
        match self {
            ContextToken::Vowel => "V",
            ContextToken::Consonant => "C",
            ContextToken::Boundary => "#",
            ContextToken::Literal(s) => s,
        }
    }
}

/// 파싱된 환경 패턴
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ContextPattern {
    /// 빈 패턴: 항상 일치
    #[default]
    Any,
    /// 후보 목록 (negated 이면 결과 반전)
    Set {
        negated: bool,
        alternatives: Vec<ContextToken>,
    },
}

impl ContextPattern {
    /// DSL 문자열 파싱
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return ContextPattern::Any;
        }

        let (negated, body) = match s.strip_prefix(NEGATION_MARKER) {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let alternatives = body
            .split(ALTERNATIVE_SEPARATOR)
            .map(ContextToken::parse)
            .collect();

        ContextPattern::Set {
            negated,
            alternatives,
        }
    }

    /// 와일드카드 여부
    pub fn is_any(&self) -> bool {
        matches!(self, ContextPattern::Any)
    }
}

impl fmt::Display for ContextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextPattern::Any => Ok(()),
            ContextPattern::Set {
                negated,
                alternatives,
            } => {
                if *negated {
                    write!(f, "{}", NEGATION_MARKER)?;
                }
                for (i, token) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", ALTERNATIVE_SEPARATOR)?;
                    }
                    f.write_str(token.as_str())?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ContextPattern {
    fn from(s: &str) -> Self {
        ContextPattern::parse(s)
    }
}

impl From<String> for ContextPattern {
    fn from(s: String) -> Self {
        ContextPattern::parse(&s)
    }
}

/// `null` 문맥은 빈 문자열과 같음
impl From<Option<String>> for ContextPattern {
    fn from(s: Option<String>) -> Self {
        s.map(ContextPattern::from).unwrap_or_default()
    }
}

impl From<ContextPattern> for String {
    fn from(pattern: ContextPattern) -> Self {
        pattern.to_string()
    }
}

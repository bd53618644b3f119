//! 음운 체계 데이터 모델
//!
//! 직렬화 형식은 편집기/저장소가 주고받는 JSON 과 동일합니다:
//!
//! ```json
//! {
//!   "phonemes": [ { "orth": "sh", "ipa": "ʃ", "type": "consonant" } ],
//!   "soundChanges": [
//!     { "find": "t,d", "replace": "ts,dz", "preceding": "",
//!       "following": "i,e", "description": "{t,d} -> {ts,dz} / _{i,e}" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::context::ContextPattern;
use super::error::PhonologyError;

/// 음소 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeClass {
    Consonant,
    Vowel,
}

impl fmt::Display for PhonemeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhonemeClass::Consonant => f.write_str("consonant"),
            PhonemeClass::Vowel => f.write_str("vowel"),
        }
    }
}

/// 음소 하나: 표기(orth) -> IPA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    /// 철자 표기 (한 글자 이상)
    pub orth: String,
    /// IPA 표기
    pub ipa: String,
    /// 자음/모음
    #[serde(rename = "type")]
    pub class: PhonemeClass,
}

impl Phoneme {
    pub fn new(orth: impl Into<String>, ipa: impl Into<String>, class: PhonemeClass) -> Self {
        Self {
            orth: orth.into(),
            ipa: ipa.into(),
            class,
        }
    }

    pub fn consonant(orth: impl Into<String>, ipa: impl Into<String>) -> Self {
        Self::new(orth, ipa, PhonemeClass::Consonant)
    }

    pub fn vowel(orth: impl Into<String>, ipa: impl Into<String>) -> Self {
        Self::new(orth, ipa, PhonemeClass::Vowel)
    }

    /// 음소표 표시용 라벨: 표기와 IPA 가 다르면 `sh → ʃ`
    pub fn chart_label(&self) -> String {
        if self.orth == self.ipa {
            self.orth.clone()
        } else {
            format!("{} → {}", self.orth, self.ipa)
        }
    }
}

/// 음운 변화 규칙
///
/// `find[k]` 가 환경 조건을 만족하면 `replace[k]` 로 바뀝니다 (위치 대응).
/// `find` 와 `replace` 의 길이가 다르면 규칙 전체가 무시됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundChangeRule {
    /// 편집기 표시용 번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(with = "symbol_list")]
    pub find: Vec<String>,
    #[serde(with = "symbol_list")]
    pub replace: Vec<String>,
    #[serde(default)]
    pub preceding: ContextPattern,
    #[serde(default)]
    pub following: ContextPattern,
    #[serde(default)]
    pub description: String,
}

impl SoundChangeRule {
    /// 쉼표 구분 문자열로 규칙 생성 (환경은 와일드카드)
    pub fn new(find: &str, replace: &str) -> Self {
        Self {
            id: None,
            find: symbol_list::split(find),
            replace: symbol_list::split(replace),
            preceding: ContextPattern::Any,
            following: ContextPattern::Any,
            description: String::new(),
        }
    }

    /// 앞 환경 설정
    pub fn with_preceding(mut self, pattern: &str) -> Self {
        self.preceding = ContextPattern::parse(pattern);
        self
    }

    /// 뒤 환경 설정
    pub fn with_following(mut self, pattern: &str) -> Self {
        self.following = ContextPattern::parse(pattern);
        self
    }

    /// 설명 설정
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 번호 설정
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// find/replace 길이가 같아야 적용 가능
    pub fn is_well_formed(&self) -> bool {
        self.find.len() == self.replace.len()
    }

    /// `cur` 가 find 에 있으면 대응하는 replace 반환 (중복 시 첫 번째)
    pub fn replacement_for(&self, cur: &str) -> Option<&str> {
        let k = self.find.iter().position(|f| f == cur)?;
        self.replace.get(k).map(String::as_str)
    }
}

/// 음운 체계 전체: 음소 목록 + 순서 있는 규칙 목록
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonology {
    /// 선언 순서 유지 (토큰화는 내부에서 길이순 정렬)
    pub phonemes: Vec<Phoneme>,
    /// 순서대로 적용
    #[serde(rename = "soundChanges", default)]
    pub sound_changes: Vec<SoundChangeRule>,
}

/// 음소표: 선언 순서를 유지한 자음/모음 분류
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeChart<'a> {
    pub consonants: Vec<&'a Phoneme>,
    pub vowels: Vec<&'a Phoneme>,
}

impl Phonology {
    pub fn new(phonemes: Vec<Phoneme>, sound_changes: Vec<SoundChangeRule>) -> Self {
        Self {
            phonemes,
            sound_changes,
        }
    }

    /// JSON 문자열에서 로드
    ///
    /// 음운 체계 객체 그대로이거나, 편집기 내보내기 파일처럼
    /// `{ "dictionary": ..., "phonology": {...}, ... }` 로 감싼 형태 모두 허용
    pub fn from_json(json_str: &str) -> Result<Self, PhonologyError> {
        let mut value: serde_json::Value = serde_json::from_str(json_str)?;
        if value.get("phonemes").is_none() {
            let inner = value.get_mut("phonology").map(serde_json::Value::take);
            if let Some(inner) = inner {
                value = inner;
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// JSON 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PhonologyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PhonologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let phonology = Self::from_json(&content)?;
        log::debug!(
            "음운 체계 로드: {:?} (음소 {}개, 규칙 {}개)",
            path,
            phonology.phonemes.len(),
            phonology.sound_changes.len()
        );
        Ok(phonology)
    }

    /// 보기 좋게 들여쓴 JSON
    pub fn to_json_pretty(&self) -> Result<String, PhonologyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON 파일로 저장 (상위 디렉토리 자동 생성)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PhonologyError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| PhonologyError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(io_err)?;
        Ok(())
    }

    /// 자음/모음 음소표
    pub fn chart(&self) -> PhonemeChart<'_> {
        let (vowels, consonants): (Vec<&Phoneme>, Vec<&Phoneme>) = self
            .phonemes
            .iter()
            .partition(|p| p.class == PhonemeClass::Vowel);
        PhonemeChart { consonants, vowels }
    }
}

/// `"a,b,c"` <-> `["a", "b", "c"]`
mod symbol_list {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::phonology::context::ALTERNATIVE_SEPARATOR;

    pub fn split(s: &str) -> Vec<String> {
        s.split(ALTERNATIVE_SEPARATOR).map(str::to_string).collect()
    }

    pub fn serialize<S: Serializer>(symbols: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        let sep = ALTERNATIVE_SEPARATOR.to_string();
        serializer.serialize_str(&symbols.join(sep.as_str()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(split(&s))
    }
}

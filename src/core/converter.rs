//! 철자 -> IPA 통합 변환기
//!
//! 토큰화 -> 규칙 적용 -> IPA 렌더링 순서로만 진행합니다.

use std::fmt;

use crate::core::inventory::Inventory;
use crate::core::ipa::to_ipa_with;
use crate::core::rule_engine::{apply_rules_with, run_pass, PassOutcome};
use crate::core::tokenizer::tokenize_with;
use crate::phonology::Phonology;

/// 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    /// 토큰화 직후 기호 열
    pub tokens: Vec<String>,
    /// 규칙 적용 후 기호 열
    pub phonemes: Vec<String>,
    /// IPA
    pub ipa: String,
}

impl Transcription {
    /// `/ipa/` 형태 (빈 결과는 빈 문자열)
    pub fn ipa_slashed(&self) -> String {
        if self.ipa.is_empty() {
            String::new()
        } else {
            format!("/{}/", self.ipa)
        }
    }
}

/// 규칙 하나의 적용 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStep {
    /// 규칙 위치 (0부터)
    pub index: usize,
    pub description: String,
    pub outcome: PassOutcome,
    /// 이 패스 후 기호 열 전체
    pub output: Vec<String>,
}

impl fmt::Display for RuleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ", self.index + 1)?;
        match self.outcome {
            PassOutcome::Applied { changes } => write!(f, "[{}]", changes)?,
            PassOutcome::Skipped => f.write_str("[skip]")?,
        }
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        write!(f, ": {}", self.output.join(" "))
    }
}

/// 단계별 변환 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub tokens: Vec<String>,
    pub steps: Vec<RuleStep>,
    pub ipa: String,
}

impl Trace {
    /// 최종 기호 열 (규칙이 없으면 토큰 그대로)
    pub fn phonemes(&self) -> &[String] {
        self.steps
            .last()
            .map(|step| step.output.as_slice())
            .unwrap_or(self.tokens.as_slice())
    }
}

/// 단어 하나를 IPA 로 변환
///
/// # Examples
/// ```
/// use sori::phonology::{Phoneme, Phonology, SoundChangeRule};
/// use sori::transcribe;
///
/// let phonology = Phonology::new(
///     vec![
///         Phoneme::consonant("t", "t"),
///         Phoneme::consonant("ts", "ts"),
///         Phoneme::vowel("i", "i"),
///     ],
///     vec![SoundChangeRule::new("t", "ts").with_following("i")],
/// );
///
/// let result = transcribe("ti", &phonology);
/// assert_eq!(result.tokens, vec!["t", "i"]);
/// assert_eq!(result.phonemes, vec!["ts", "i"]);
/// assert_eq!(result.ipa, "tsi");
/// ```
pub fn transcribe(word: &str, phonology: &Phonology) -> Transcription {
    let inventory = Inventory::new(&phonology.phonemes);

    let tokens = tokenize_with(word, &inventory);
    let phonemes = apply_rules_with(&tokens, &phonology.sound_changes, &inventory);
    let ipa = to_ipa_with(&phonemes, &inventory);

    Transcription {
        tokens,
        phonemes,
        ipa,
    }
}

/// 규칙별 중간 결과를 모두 기록하며 변환
pub fn trace(word: &str, phonology: &Phonology) -> Trace {
    let inventory = Inventory::new(&phonology.phonemes);
    let tokens = tokenize_with(word, &inventory);

    let mut steps: Vec<RuleStep> = Vec::with_capacity(phonology.sound_changes.len());
    for (index, rule) in phonology.sound_changes.iter().enumerate() {
        let input = steps.last().map(|s| s.output.as_slice()).unwrap_or(tokens.as_slice());
        let (output, outcome) = run_pass(index, input, rule, &inventory);
        steps.push(RuleStep {
            index,
            description: rule.description.clone(),
            outcome,
            output,
        });
    }

    let ipa = {
        let last = steps.last().map(|s| s.output.as_slice()).unwrap_or(tokens.as_slice());
        to_ipa_with(last, &inventory)
    };

    Trace { tokens, steps, ipa }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::{Phoneme, SoundChangeRule};

    fn ts_phonology() -> Phonology {
        Phonology::new(
            vec![
                Phoneme::consonant("t", "t"),
                Phoneme::consonant("ts", "ts"),
                Phoneme::vowel("i", "i"),
            ],
            vec![SoundChangeRule::new("t", "ts").with_following("i")],
        )
    }

    #[test]
    fn test_basic_transcription() {
        let result = transcribe("ti", &ts_phonology());
        assert_eq!(result.tokens, vec!["t", "i"]);
        assert_eq!(result.phonemes, vec!["ts", "i"]);
        assert_eq!(result.ipa, "tsi");
        assert_eq!(result.ipa_slashed(), "/tsi/");
    }

    #[test]
    fn test_empty_string() {
        let result = transcribe("", &ts_phonology());
        assert!(result.tokens.is_empty());
        assert!(result.phonemes.is_empty());
        assert_eq!(result.ipa, "");
        assert_eq!(result.ipa_slashed(), "");
    }

    #[test]
    fn test_unknown_passthrough() {
        let result = transcribe("tix", &ts_phonology());
        assert_eq!(result.ipa, "tsi?x?");
    }

    #[test]
    fn test_trace_matches_transcription() {
        let phonology = Phonology::sample();
        for word in ["thia", "kirua", "tati", "sjia", "aiteda"] {
            let t = trace(word, &phonology);
            let r = transcribe(word, &phonology);
            assert_eq!(t.tokens, r.tokens);
            assert_eq!(t.phonemes(), r.phonemes.as_slice());
            assert_eq!(t.ipa, r.ipa);
            assert_eq!(t.steps.len(), phonology.sound_changes.len());
        }
    }

    #[test]
    fn test_trace_records_skip() {
        let t = trace("ta", &Phonology::sample());
        assert_eq!(t.steps[6].outcome, PassOutcome::Skipped);
        assert_eq!(t.steps[6].output, t.steps[5].output);
    }

    #[test]
    fn test_trace_without_rules() {
        let phonology = Phonology::new(vec![Phoneme::vowel("a", "a")], vec![]);
        let t = trace("aa", &phonology);
        assert!(t.steps.is_empty());
        assert_eq!(t.phonemes(), t.tokens.as_slice());
        assert_eq!(t.ipa, "aa");
    }

    #[test]
    fn test_rule_step_display() {
        let t = trace("ti", &ts_phonology());
        assert_eq!(t.steps[0].to_string(), "#1 [1]: ts i");
    }
}

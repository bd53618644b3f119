//! 음소 목록에서 파생되는 조회 테이블
//!
//! 호출마다 새로 만들며 전역 캐시를 두지 않습니다.

use std::collections::HashMap;

use crate::phonology::{Phoneme, PhonemeClass};

/// 토큰화 후보 + 표기별 음소 테이블
#[derive(Debug, Clone)]
pub struct Inventory<'a> {
    /// 표기 길이(문자 수) 내림차순, 같은 길이는 선언 순서
    candidates: Vec<&'a str>,
    /// 표기 -> 음소 (중복 표기는 마지막 선언)
    table: HashMap<&'a str, &'a Phoneme>,
}

impl<'a> Inventory<'a> {
    pub fn new(phonemes: &'a [Phoneme]) -> Self {
        let mut candidates: Vec<&str> = phonemes
            .iter()
            .map(|p| p.orth.as_str())
            // 빈 표기는 입력을 소비하지 않으므로 후보에서 제외
            .filter(|orth| !orth.is_empty())
            .collect();
        // sort_by_key 는 안정 정렬
        candidates.sort_by_key(|orth| std::cmp::Reverse(orth.chars().count()));

        let table = phonemes.iter().map(|p| (p.orth.as_str(), p)).collect();

        Self { candidates, table }
    }

    /// 긴 표기부터 나열된 토큰화 후보
    pub fn candidates(&self) -> &[&'a str] {
        &self.candidates
    }

    pub fn get(&self, symbol: &str) -> Option<&'a Phoneme> {
        self.table.get(symbol).copied()
    }

    pub fn class_of(&self, symbol: &str) -> Option<PhonemeClass> {
        self.get(symbol).map(|p| p.class)
    }

    pub fn ipa_of(&self, symbol: &str) -> Option<&'a str> {
        self.get(symbol).map(|p| p.ipa.as_str())
    }

    pub fn is_vowel(&self, symbol: &str) -> bool {
        self.class_of(symbol) == Some(PhonemeClass::Vowel)
    }

    pub fn is_consonant(&self, symbol: &str) -> bool {
        self.class_of(symbol) == Some(PhonemeClass::Consonant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_longest_first_stable() {
        let phonemes = vec![
            Phoneme::consonant("s", "s"),
            Phoneme::consonant("sh", "ʃ"),
            Phoneme::vowel("a", "a"),
            Phoneme::consonant("tsh", "tʃʰ"),
            Phoneme::consonant("th", "θ"),
        ];
        let inventory = Inventory::new(&phonemes);
        assert_eq!(inventory.candidates(), &["tsh", "sh", "th", "s", "a"]);
    }

    #[test]
    fn test_candidate_length_counts_chars() {
        // "ï" 는 2바이트지만 한 글자
        let phonemes = vec![Phoneme::vowel("ï", "ɨ"), Phoneme::vowel("ai", "aɪ")];
        let inventory = Inventory::new(&phonemes);
        assert_eq!(inventory.candidates(), &["ai", "ï"]);
    }

    #[test]
    fn test_empty_orth_skipped() {
        let phonemes = vec![Phoneme::vowel("", "ə"), Phoneme::vowel("a", "a")];
        let inventory = Inventory::new(&phonemes);
        assert_eq!(inventory.candidates(), &["a"]);
    }

    #[test]
    fn test_last_declaration_wins() {
        let phonemes = vec![Phoneme::consonant("x", "x"), Phoneme::vowel("x", "χ")];
        let inventory = Inventory::new(&phonemes);
        assert_eq!(inventory.ipa_of("x"), Some("χ"));
        assert!(inventory.is_vowel("x"));
        assert!(!inventory.is_consonant("x"));
    }

    #[test]
    fn test_unknown_symbol() {
        let phonemes = vec![Phoneme::vowel("a", "a")];
        let inventory = Inventory::new(&phonemes);
        assert_eq!(inventory.class_of("q"), None);
        assert!(!inventory.is_vowel("q"));
        assert!(!inventory.is_consonant("q"));
    }
}

//! 철자 문자열 -> 음소 기호 열 (최장 일치 우선)

use crate::core::inventory::Inventory;
use crate::phonology::Phoneme;

/// 단어를 음소 기호 열로 분할
///
/// 소문자로 바꾼 뒤 각 위치에서 가장 긴 표기부터 시도합니다.
/// 일치하는 표기가 없으면 그 한 글자를 그대로 기호로 내보냅니다.
pub fn tokenize(word: &str, phonemes: &[Phoneme]) -> Vec<String> {
    tokenize_with(word, &Inventory::new(phonemes))
}

pub(crate) fn tokenize_with(word: &str, inventory: &Inventory<'_>) -> Vec<String> {
    let lower = word.to_lowercase();
    let mut tokens = Vec::new();
    let mut rest = lower.as_str();

    while let Some(c) = rest.chars().next() {
        match inventory
            .candidates()
            .iter()
            .find(|orth| rest.starts_with(**orth))
        {
            Some(orth) => {
                tokens.push(orth.to_string());
                rest = &rest[orth.len()..];
            }
            None => {
                // 매핑 없는 문자는 그대로 유지
                tokens.push(c.to_string());
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    tokens
}

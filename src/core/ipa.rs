//! 음소 기호 열 -> IPA 문자열

use crate::core::inventory::Inventory;
use crate::phonology::Phoneme;

/// 음소 목록에 없는 기호를 감싸는 표시
pub const UNKNOWN_MARKER: char = '?';

/// 기호 열을 IPA 로 이어 붙임
/// 목록에 없는 기호는 `?x?` 형태로 표시 (생략하지 않음)
pub fn to_ipa(symbols: &[String], phonemes: &[Phoneme]) -> String {
    to_ipa_with(symbols, &Inventory::new(phonemes))
}

pub(crate) fn to_ipa_with(symbols: &[String], inventory: &Inventory<'_>) -> String {
    let mut output = String::new();
    for symbol in symbols {
        match inventory.ipa_of(symbol) {
            Some(ipa) => output.push_str(ipa),
            None => {
                output.push(UNKNOWN_MARKER);
                output.push_str(symbol);
                output.push(UNKNOWN_MARKER);
            }
        }
    }
    output
}

/// 음소 목록에 없는 기호가 섞여 있는지 확인
pub fn has_unknown(symbols: &[String], phonemes: &[Phoneme]) -> bool {
    let inventory = Inventory::new(phonemes);
    symbols.iter().any(|s| inventory.get(s).is_none())
}

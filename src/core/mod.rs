//! 변환 엔진: 토큰화 -> 음운 규칙 -> IPA
//!
//! 모든 함수는 입력을 빌려 읽기만 하고 새 결과를 만들어 반환합니다.
//! 전역 상태가 없으므로 서로 다른 음운 체계로 동시에 호출해도 됩니다.

pub mod converter;
pub mod inventory;
pub mod ipa;
pub mod rule_engine;
pub mod tokenizer;

pub use converter::{trace, transcribe, RuleStep, Trace, Transcription};
pub use inventory::Inventory;
pub use ipa::{has_unknown, to_ipa, UNKNOWN_MARKER};
pub use rule_engine::{apply_rule, apply_rules, match_context, Neighbor, PassOutcome};
pub use tokenizer::tokenize;

//! 음운 변화 규칙 적용기
//!
//! 규칙은 선언 순서대로 하나씩, 각각 기호 열 전체를 한 번 훑는 패스로 적용됩니다.
//! 한 패스 안에서 환경 판정은 항상 그 패스 시작 시점의 기호 열을 기준으로 합니다.
//! 패스마다 새 기호 열을 만들므로 중간 결과를 그대로 보존할 수 있습니다.

use crate::core::inventory::Inventory;
use crate::phonology::{ContextPattern, ContextToken, Phonology, SoundChangeRule};

/// 현재 위치의 앞/뒤 이웃
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor<'s> {
    /// 단어 시작 앞 또는 끝 뒤
    Boundary,
    /// 실제 기호
    Symbol(&'s str),
}

impl<'s> Neighbor<'s> {
    fn before(symbols: &'s [String], i: usize) -> Self {
        match i.checked_sub(1).and_then(|j| symbols.get(j)) {
            Some(s) => Neighbor::Symbol(s),
            None => Neighbor::Boundary,
        }
    }

    fn after(symbols: &'s [String], i: usize) -> Self {
        match symbols.get(i + 1) {
            Some(s) => Neighbor::Symbol(s),
            None => Neighbor::Boundary,
        }
    }
}

/// 한 패스의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// 규칙이 적용됨 (바뀐 위치 수, 0 일 수 있음)
    Applied { changes: usize },
    /// find/replace 길이 불일치로 무시됨
    Skipped,
}

/// 이웃이 환경 패턴을 만족하는지 판정
///
/// - 빈 패턴은 항상 참
/// - `V` / `C` 는 음소 목록의 분류로 판정, 경계는 어느 쪽도 아님
/// - `#` 는 경계에만 일치
/// - 그 밖의 후보는 기호와 문자열이 정확히 같을 때 일치
pub fn match_context(
    neighbor: Neighbor<'_>,
    pattern: &ContextPattern,
    inventory: &Inventory<'_>,
) -> bool {
    let (negated, alternatives) = match pattern {
        ContextPattern::Any => return true,
        ContextPattern::Set {
            negated,
            alternatives,
        } => (*negated, alternatives),
    };

    let matched = alternatives
        .iter()
        .any(|token| match (token, neighbor) {
            (ContextToken::Boundary, Neighbor::Boundary) => true,
            (_, Neighbor::Boundary) => false,
            (ContextToken::Vowel, Neighbor::Symbol(s)) => inventory.is_vowel(s),
            (ContextToken::Consonant, Neighbor::Symbol(s)) => inventory.is_consonant(s),
            (ContextToken::Boundary, Neighbor::Symbol(_)) => false,
            (ContextToken::Literal(lit), Neighbor::Symbol(s)) => lit == s,
        });

    matched != negated
}

/// 규칙 목록 전체를 순서대로 적용
pub fn apply_rules(symbols: &[String], phonology: &Phonology) -> Vec<String> {
    let inventory = Inventory::new(&phonology.phonemes);
    apply_rules_with(symbols, &phonology.sound_changes, &inventory)
}

pub(crate) fn apply_rules_with(
    symbols: &[String],
    rules: &[SoundChangeRule],
    inventory: &Inventory<'_>,
) -> Vec<String> {
    let mut current = symbols.to_vec();
    for (index, rule) in rules.iter().enumerate() {
        let (next, _) = run_pass(index, &current, rule, inventory);
        current = next;
    }
    current
}

/// 규칙 하나를 기호 열 전체에 한 번 적용
pub fn apply_rule(
    symbols: &[String],
    rule: &SoundChangeRule,
    phonology: &Phonology,
) -> (Vec<String>, PassOutcome) {
    let inventory = Inventory::new(&phonology.phonemes);
    run_pass(0, symbols, rule, &inventory)
}

pub(crate) fn run_pass(
    index: usize,
    symbols: &[String],
    rule: &SoundChangeRule,
    inventory: &Inventory<'_>,
) -> (Vec<String>, PassOutcome) {
    if !rule.is_well_formed() {
        log::debug!(
            "규칙 #{} 무시: find {}개, replace {}개",
            index + 1,
            rule.find.len(),
            rule.replace.len()
        );
        return (symbols.to_vec(), PassOutcome::Skipped);
    }

    let mut changes = 0;
    let output: Vec<String> = symbols
        .iter()
        .enumerate()
        .map(|(i, cur)| {
            let Some(replacement) = rule.replacement_for(cur) else {
                return cur.clone();
            };
            let prev = Neighbor::before(symbols, i);
            let next = Neighbor::after(symbols, i);
            if match_context(prev, &rule.preceding, inventory)
                && match_context(next, &rule.following, inventory)
            {
                if replacement != cur {
                    changes += 1;
                }
                replacement.to_string()
            } else {
                cur.clone()
            }
        })
        .collect();

    log::trace!(
        "규칙 #{} ({}): {:?} -> {:?}",
        index + 1,
        rule.description,
        symbols,
        output
    );

    (output, PassOutcome::Applied { changes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::Phoneme;

    fn symbols(s: &[&str]) -> Vec<String> {
        s.iter().map(|x| x.to_string()).collect()
    }

    fn phonology(rules: Vec<SoundChangeRule>) -> Phonology {
        Phonology::new(
            vec![
                Phoneme::consonant("t", "t"),
                Phoneme::consonant("d", "d"),
                Phoneme::consonant("s", "s"),
                Phoneme::consonant("ts", "ts"),
                Phoneme::consonant("dz", "dz"),
                Phoneme::vowel("a", "a"),
                Phoneme::vowel("i", "i"),
                Phoneme::vowel("ə", "ə"),
            ],
            rules,
        )
    }

    #[test]
    fn test_match_context_classes() {
        let p = phonology(vec![]);
        let inv = Inventory::new(&p.phonemes);
        let v = ContextPattern::parse("V");
        let c = ContextPattern::parse("C");
        assert!(match_context(Neighbor::Symbol("a"), &v, &inv));
        assert!(!match_context(Neighbor::Symbol("t"), &v, &inv));
        assert!(match_context(Neighbor::Symbol("t"), &c, &inv));
        // 경계는 V/C 어느 쪽도 아님
        assert!(!match_context(Neighbor::Boundary, &v, &inv));
        assert!(!match_context(Neighbor::Boundary, &c, &inv));
        // 목록에 없는 기호도 V/C 아님
        assert!(!match_context(Neighbor::Symbol("x"), &v, &inv));
        assert!(!match_context(Neighbor::Symbol("x"), &c, &inv));
    }

    #[test]
    fn test_match_context_boundary() {
        let p = phonology(vec![]);
        let inv = Inventory::new(&p.phonemes);
        let hash = ContextPattern::parse("#");
        assert!(match_context(Neighbor::Boundary, &hash, &inv));
        assert!(!match_context(Neighbor::Symbol("t"), &hash, &inv));
        // 입력에 있던 '#' 문자는 경계가 아님
        assert!(!match_context(Neighbor::Symbol("#"), &hash, &inv));
    }

    #[test]
    fn test_match_context_wildcard() {
        let p = phonology(vec![]);
        let inv = Inventory::new(&p.phonemes);
        for pattern in ["", "!"] {
            let pattern = ContextPattern::parse(pattern);
            assert!(match_context(Neighbor::Boundary, &pattern, &inv));
            assert!(match_context(Neighbor::Symbol("t"), &pattern, &inv));
        }
    }

    #[test]
    fn test_match_context_negation() {
        let p = phonology(vec![]);
        let inv = Inventory::new(&p.phonemes);
        let pattern = ContextPattern::parse("!t,d");
        assert!(!match_context(Neighbor::Symbol("t"), &pattern, &inv));
        assert!(!match_context(Neighbor::Symbol("d"), &pattern, &inv));
        assert!(match_context(Neighbor::Symbol("s"), &pattern, &inv));
        assert!(match_context(Neighbor::Boundary, &pattern, &inv));
    }

    #[test]
    fn test_match_context_negated_class() {
        let p = phonology(vec![]);
        let inv = Inventory::new(&p.phonemes);
        let pattern = ContextPattern::parse("!V");
        assert!(match_context(Neighbor::Boundary, &pattern, &inv));
        assert!(match_context(Neighbor::Symbol("t"), &pattern, &inv));
        assert!(!match_context(Neighbor::Symbol("i"), &pattern, &inv));
    }

    #[test]
    fn test_basic_rule() {
        let p = phonology(vec![SoundChangeRule::new("t", "ts").with_following("i")]);
        assert_eq!(
            apply_rules(&symbols(&["t", "i", "t", "a"]), &p),
            symbols(&["ts", "i", "t", "a"])
        );
    }

    #[test]
    fn test_positional_replacement() {
        let p = phonology(vec![SoundChangeRule::new("t,d", "ts,dz").with_following("i")]);
        assert_eq!(
            apply_rules(&symbols(&["d", "i", "t", "i"]), &p),
            symbols(&["dz", "i", "ts", "i"])
        );
    }

    #[test]
    fn test_degenerate_rule_skipped() {
        let p = phonology(vec![SoundChangeRule::new("a,i", "ə")]);
        let input = symbols(&["t", "a", "t", "i"]);
        assert_eq!(apply_rules(&input, &p), input);

        let (output, outcome) = apply_rule(&input, &p.sound_changes[0], &p);
        assert_eq!(output, input);
        assert_eq!(outcome, PassOutcome::Skipped);
    }

    #[test]
    fn test_neighbors_from_pass_input() {
        // t -> d / _t : 연쇄 적용되지 않고 원래 이웃 기준으로 판정
        let p = phonology(vec![SoundChangeRule::new("t", "d").with_following("t")]);
        assert_eq!(
            apply_rules(&symbols(&["t", "t", "t"]), &p),
            symbols(&["d", "d", "t"])
        );

        // a -> i / t_ : 바뀐 이웃("d")이 아닌 원래 이웃("t")을 봄
        let p = phonology(vec![SoundChangeRule::new("t,a", "d,i").with_preceding("#,t")]);
        assert_eq!(
            apply_rules(&symbols(&["t", "a"]), &p),
            symbols(&["d", "i"])
        );
    }

    #[test]
    fn test_boundary_preceding() {
        let p = phonology(vec![SoundChangeRule::new("a", "ə").with_preceding("#")]);
        assert_eq!(
            apply_rules(&symbols(&["a", "t", "a"]), &p),
            symbols(&["ə", "t", "a"])
        );
    }

    #[test]
    fn test_boundary_following() {
        let p = phonology(vec![SoundChangeRule::new("a", "ə").with_following("#")]);
        assert_eq!(
            apply_rules(&symbols(&["a", "t", "a"]), &p),
            symbols(&["a", "t", "ə"])
        );
    }

    #[test]
    fn test_single_symbol_word_sees_two_boundaries() {
        let p = phonology(vec![SoundChangeRule::new("a", "ə")
            .with_preceding("#")
            .with_following("#")]);
        assert_eq!(apply_rules(&symbols(&["a"]), &p), symbols(&["ə"]));
    }

    #[test]
    fn test_intervocalic() {
        let p = phonology(vec![SoundChangeRule::new("t", "d")
            .with_preceding("V")
            .with_following("V")]);
        assert_eq!(
            apply_rules(&symbols(&["t", "a", "t", "a", "t"]), &p),
            symbols(&["t", "a", "d", "a", "t"])
        );
    }

    #[test]
    fn test_change_count() {
        let p = phonology(vec![]);
        let inv = Inventory::new(&p.phonemes);
        let rule = SoundChangeRule::new("t,a", "ts,a");
        let (_, outcome) = run_pass(0, &symbols(&["t", "a", "t"]), &rule, &inv);
        // a -> a 는 변화로 세지 않음
        assert_eq!(outcome, PassOutcome::Applied { changes: 2 });
    }

    #[test]
    fn test_empty_sequence() {
        let p = phonology(vec![SoundChangeRule::new("t", "ts")]);
        assert!(apply_rules(&[], &p).is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let p = phonology(vec![SoundChangeRule::new("t", "ts")]);
        let input = symbols(&["t", "a"]);
        let output = apply_rules(&input, &p);
        assert_eq!(input, symbols(&["t", "a"]));
        assert_eq!(output, symbols(&["ts", "a"]));
    }
}

//! 기본 제공 음운 체계 (예제 인공어)

use super::model::{Phoneme, PhonemeClass, Phonology, SoundChangeRule};

use PhonemeClass::{Consonant, Vowel};

/// (표기, IPA, 분류)
const SAMPLE_PHONEMES: &[(&str, &str, PhonemeClass)] = &[
    // 자음
    ("p", "p", Consonant),
    ("t", "t", Consonant),
    ("k", "k", Consonant),
    ("b", "b", Consonant),
    ("d", "d", Consonant),
    ("g", "g", Consonant),
    ("m", "m", Consonant),
    ("n", "n", Consonant),
    ("f", "f", Consonant),
    ("v", "v", Consonant),
    ("s", "s", Consonant),
    ("z", "z", Consonant),
    ("sh", "ʃ", Consonant),
    ("zh", "ʒ", Consonant),
    ("x", "x", Consonant),
    ("h", "h", Consonant),
    ("ts", "ts", Consonant),
    ("ch", "tʃ", Consonant),
    ("j", "dʒ", Consonant),
    ("l", "l", Consonant),
    ("r", "r", Consonant),
    ("y", "j", Consonant),
    ("w", "w", Consonant),
    ("dz", "dz", Consonant),
    ("q", "q", Consonant),
    ("th", "θ", Consonant),
    ("dh", "ð", Consonant),
    ("sj", "ɕ", Consonant),
    ("zj", "ʑ", Consonant),
    // 모음
    ("a", "a", Vowel),
    ("e", "e", Vowel),
    ("i", "i", Vowel),
    ("o", "o", Vowel),
    ("u", "u", Vowel),
    ("ï", "ɨ", Vowel),
    ("ä", "ɑ", Vowel),
    ("ö", "ɔ", Vowel),
    ("ë", "ɛ", Vowel),
    ("ü", "ə", Vowel),
    ("ai", "aɪ", Vowel),
    ("ao", "aɔ", Vowel),
    ("ei", "eɪ", Vowel),
    ("au", "aʊ", Vowel),
    ("ia", "iɑ", Vowel),
];

/// (find, replace, preceding, following, description)
const SAMPLE_RULES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "th,dh,k,g",
        "ch,j,sh,zh",
        "",
        "i,a",
        "{thi,dhi,ki,gi} -> {ch,j,sh,zh} / _a",
    ),
    ("r", "t", "", "i,u", "r -> t / _{i,u}"),
    ("t,d", "ts,dz", "", "i,e,ï", "{t,d} -> {ts,dz} / _{i,e,ï}"),
    (
        "p,t,k,b,d",
        "f,s,x,v,dh",
        "V",
        "V",
        "{p,t,k,b,d} -> {f,s,x,v,dh} / V_V",
    ),
    (
        "s,z,t",
        "sj,zj,ch",
        "!t,d",
        "i,e,ë,ei,ia",
        "{s,z,t} -> {sj,zj,ch} / !{t,d}_V",
    ),
    ("ia", "a", "sj,zj", "", "{sjia, zjia} -> {sja, zja}"),
    // replace 가 하나뿐이라 find 와 길이가 달라 적용되지 않음
    (
        "ai,ie,uo,ia,au,ao,ei,a,e,i,o,u,ä,ë,ï,ö",
        "ə",
        "#",
        "",
        "V/ə/_#",
    ),
];

impl Phonology {
    /// 기본 예제 음운 체계 (자음 29, 모음 15, 규칙 7)
    pub fn sample() -> Self {
        let phonemes = SAMPLE_PHONEMES
            .iter()
            .map(|&(orth, ipa, class)| Phoneme::new(orth, ipa, class))
            .collect();

        let sound_changes = SAMPLE_RULES
            .iter()
            .zip(1u32..)
            .map(|(&(find, replace, preceding, following, description), id)| {
                SoundChangeRule::new(find, replace)
                    .with_preceding(preceding)
                    .with_following(following)
                    .with_description(description)
                    .with_id(id)
            })
            .collect();

        Self::new(phonemes, sound_changes)
    }
}

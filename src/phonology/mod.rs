//! 음운 체계 정의
//!
//! 음소 목록(표기 -> IPA, 자음/모음)과 순서 있는 음운 변화 규칙 목록을
//! 표현합니다. 변환 엔진(`core`)은 이 구조를 입력으로만 받으며 수정하지 않습니다.
//!
//! # 사용 예시
//!
//! ```
//! use sori::phonology::{Phoneme, Phonology, SoundChangeRule};
//!
//! let phonology = Phonology::new(
//!     vec![
//!         Phoneme::consonant("t", "t"),
//!         Phoneme::consonant("ts", "ts"),
//!         Phoneme::vowel("i", "i"),
//!     ],
//!     vec![SoundChangeRule::new("t", "ts").with_following("i")],
//! );
//! assert!(phonology.validate().is_ok());
//! assert!(phonology.warnings().is_empty());
//! ```

mod context;
mod error;
mod model;
mod sample;
mod validate;

// 공개 인터페이스
pub use context::{ContextPattern, ContextToken, ALTERNATIVE_SEPARATOR, NEGATION_MARKER};
pub use error::PhonologyError;
pub use model::{Phoneme, PhonemeChart, PhonemeClass, Phonology, SoundChangeRule};
pub use validate::PhonologyWarning;

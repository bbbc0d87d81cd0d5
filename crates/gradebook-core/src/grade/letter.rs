use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::letter;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum LetterGrade {
    #[default]
    F = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
}

impl LetterGrade {
    pub fn from_average(average: f64) -> Self {
        if average >= letter::A {
            Self::A
        } else if average >= letter::B {
            Self::B
        } else if average >= letter::C {
            Self::C
        } else if average >= letter::D {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

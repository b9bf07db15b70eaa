//! The eco-rating scale.
//!
//! One shared numeric weight table backs both the catalog's rating sort and
//! the cart's averaged rating, so the two can never drift apart.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Letter-graded sustainability rating, `A` best through `F` worst.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcoRating {
    A,
    B,
    C,
    D,
    F,
}

impl EcoRating {
    /// All ratings, best first.
    pub const ALL: [EcoRating; 5] = [
        EcoRating::A,
        EcoRating::B,
        EcoRating::C,
        EcoRating::D,
        EcoRating::F,
    ];

    /// Numeric weight used for sorting and averaging: A=5, B=4, C=3, D=2, F=1.
    pub fn weight(self) -> u32 {
        match self {
            EcoRating::A => 5,
            EcoRating::B => 4,
            EcoRating::C => 3,
            EcoRating::D => 2,
            EcoRating::F => 1,
        }
    }

    /// Bucket a weighted mean back to a letter grade.
    ///
    /// Thresholds: >=4.5 A, >=3.5 B, >=2.5 C, >=1.5 D, else F.
    pub fn from_weighted_mean(mean: f64) -> Self {
        if mean >= 4.5 {
            EcoRating::A
        } else if mean >= 3.5 {
            EcoRating::B
        } else if mean >= 2.5 {
            EcoRating::C
        } else if mean >= 1.5 {
            EcoRating::D
        } else {
            EcoRating::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EcoRating::A => "A",
            EcoRating::B => "B",
            EcoRating::C => "C",
            EcoRating::D => "D",
            EcoRating::F => "F",
        }
    }
}

impl core::fmt::Display for EcoRating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EcoRating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(EcoRating::A),
            "B" => Ok(EcoRating::B),
            "C" => Ok(EcoRating::C),
            "D" => Ok(EcoRating::D),
            "F" => Ok(EcoRating::F),
            other => Err(DomainError::validation(format!(
                "unknown eco rating: {other:?}"
            ))),
        }
    }
}

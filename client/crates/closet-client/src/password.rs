//! Password strength scoring used by the signup and reset forms.

use std::fmt;

/// Lowest score a new password may have.
pub const MIN_ACCEPTABLE_SCORE: u8 = 3;
const MIN_LENGTH: usize = 8;

/// Password length in UTF-16 code units, the unit the mobile forms count in.
/// Characters outside the Basic Multilingual Plane count twice.
pub fn length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// One point each for: 8+ characters, an uppercase letter, a digit, a symbol.
pub fn score(password: &str) -> u8 {
    let criteria = [
        length(password) >= MIN_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    criteria.iter().filter(|met| **met).count() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn of(password: &str) -> Self {
        Self::from_score(score(password))
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::Empty,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Fair,
            3 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn is_acceptable(&self) -> bool {
        *self >= StrengthLevel::from_score(MIN_ACCEPTABLE_SCORE)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Empty => "",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

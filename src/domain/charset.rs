use serde::Serialize;

/// Character classes the password generator draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    LowerCase,
    UpperCase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in alphabet concatenation order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::LowerCase,
        CharacterClass::UpperCase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::LowerCase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::UpperCase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Symbols => "!@#$%^&*()_+-=[]{}|;':\",./<>?",
        }
    }
}

/// Concatenate the alphabets of the given classes
pub fn combined_alphabet(classes: &[CharacterClass]) -> String {
    classes.iter().map(|class| class.alphabet()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_alphabet_has_every_class() {
        let alphabet = combined_alphabet(&CharacterClass::ALL);
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 29);
        assert!(alphabet.starts_with("abc"));
        assert!(alphabet.ends_with("<>?"));
    }

    #[test]
    fn alphabets_do_not_overlap() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                assert!(!a.alphabet().chars().any(|c| b.alphabet().contains(c)));
            }
        }
    }
}

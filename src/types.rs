//! Shared value types: character classes, generation options and strength results.

use std::fmt;

/// A fixed alphabet a password may draw characters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The alphabet backing this class.
    pub const fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digit => "0123456789",
            CharacterClass::Symbol => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }
}

/// Options for a single generation call.
///
/// The class set is kept as flags so the pool is always assembled in the
/// same order, whatever order the caller toggled the classes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl GenerationOptions {
    /// Options with no class selected. Generating from these fails until a
    /// class is added.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    /// Options with every class selected.
    pub fn all(length: usize) -> Self {
        CharacterClass::ALL
            .into_iter()
            .fold(Self::new(length), Self::with)
    }

    /// Builder-style toggle that selects `class`.
    pub fn with(mut self, class: CharacterClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn set(&mut self, class: CharacterClass, selected: bool) {
        match class {
            CharacterClass::Uppercase => self.uppercase = selected,
            CharacterClass::Lowercase => self.lowercase = selected,
            CharacterClass::Digit => self.digits = selected,
            CharacterClass::Symbol => self.symbols = selected,
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    /// Selected classes in pool order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    pub fn has_any_class(&self) -> bool {
        self.classes().next().is_some()
    }

    /// Concatenation of the selected alphabets. Characters shared between
    /// classes are not de-duplicated.
    pub fn pool(&self) -> Vec<char> {
        self.classes()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

/// Qualitative strength level, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a raw score to its level. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => StrengthLevel::VeryStrong,
            70..=84 => StrengthLevel::Strong,
            50..=69 => StrengthLevel::Medium,
            _ => StrengthLevel::Weak,
        }
    }

    pub fn style_tag(self) -> StyleTag {
        match self {
            StrengthLevel::Weak => StyleTag::Danger,
            StrengthLevel::Medium => StyleTag::Caution,
            StrengthLevel::Strong => StyleTag::Info,
            StrengthLevel::VeryStrong => StyleTag::Success,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque presentation accent for a strength level. The UI layer decides
/// what each tag looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Danger,
    Caution,
    Info,
    Success,
}

/// Result of scoring a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub style_tag: StyleTag,
}

impl StrengthResult {
    /// Builds a result from a raw score, capped at 100.
    pub fn from_score(score: u8) -> Self {
        let score = score.min(100);
        let level = StrengthLevel::from_score(score);
        Self {
            score,
            level,
            style_tag: level.style_tag(),
        }
    }

    pub fn is_strong_or_better(&self) -> bool {
        self.level >= StrengthLevel::Strong
    }
}

impl fmt::Display for StrengthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strength: {} ({}/100)", self.level, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_order_is_fixed() {
        let opts = GenerationOptions::new(8)
            .with(CharacterClass::Symbol)
            .with(CharacterClass::Uppercase);
        let pool: String = opts.pool().into_iter().collect();
        assert_eq!(
            pool,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+-=[]{}|;:,.<>?"
        );
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(GenerationOptions::all(12).pool().len(), 26 + 26 + 10 + 26);
        assert!(GenerationOptions::new(12).pool().is_empty());
        assert!(!GenerationOptions::new(12).has_any_class());
    }

    #[test]
    fn test_set_and_unset_class() {
        let mut opts = GenerationOptions::all(10);
        opts.set(CharacterClass::Digit, false);
        assert!(!opts.contains(CharacterClass::Digit));
        assert_eq!(opts.classes().count(), 3);
    }

    #[test]
    fn test_level_thresholds_are_inclusive() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(49), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(50), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(69), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(70), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(84), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(85), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_each_level_has_its_own_tag() {
        let tags: std::collections::HashSet<StyleTag> = [
            StrengthLevel::Weak,
            StrengthLevel::Medium,
            StrengthLevel::Strong,
            StrengthLevel::VeryStrong,
        ]
        .into_iter()
        .map(StrengthLevel::style_tag)
        .collect();
        assert_eq!(tags.len(), 4);
    }

    #[test]
    fn test_result_display() {
        let result = StrengthResult::from_score(90);
        assert_eq!(result.to_string(), "Strength: Very strong (90/100)");
        assert!(result.is_strong_or_better());
        assert!(!StrengthResult::from_score(69).is_strong_or_better());
    }
}

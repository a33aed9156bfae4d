//! Inline annotation of finished feature fragments.
//!
//! Ability scores and saving throws are wrapped in `<mark>` elements so the
//! site can style them, then typography is flattened to ASCII and quotes
//! are escaped for embedding in a SQL string literal.

use regex::Regex;
use std::sync::LazyLock;

/// An ability score and its three-letter abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ability {
    /// Canonical capitalized name (e.g., "Strength").
    pub name: &'static str,
    /// Abbreviation used in stat blocks (e.g., "Str").
    pub abbreviation: &'static str,
}

impl Ability {
    /// Lowercase class token used in the markup (e.g., "strength").
    #[must_use]
    pub fn class_token(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A saving throw and the ability it is keyed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Save {
    /// Display name (e.g., "Will").
    pub name: &'static str,
    /// Ability whose class token styles this save.
    pub ability: Ability,
}

pub const STRENGTH: Ability = Ability {
    name: "Strength",
    abbreviation: "Str",
};
pub const DEXTERITY: Ability = Ability {
    name: "Dexterity",
    abbreviation: "Dex",
};
pub const CONSTITUTION: Ability = Ability {
    name: "Constitution",
    abbreviation: "Con",
};
pub const INTELLIGENCE: Ability = Ability {
    name: "Intelligence",
    abbreviation: "Int",
};
pub const WISDOM: Ability = Ability {
    name: "Wisdom",
    abbreviation: "Wis",
};
pub const CHARISMA: Ability = Ability {
    name: "Charisma",
    abbreviation: "Cha",
};

/// The six ability scores, in marking order.
pub const ABILITIES: [Ability; 6] = [
    STRENGTH,
    DEXTERITY,
    CONSTITUTION,
    INTELLIGENCE,
    WISDOM,
    CHARISMA,
];

/// The three saving throws, in marking order.
pub const SAVES: [Save; 3] = [
    Save {
        name: "Fortitude",
        ability: CONSTITUTION,
    },
    Save {
        name: "Reflex",
        ability: DEXTERITY,
    },
    Save {
        name: "Will",
        ability: WISDOM,
    },
];

/// A compiled substitution: space-bounded pattern and its replacement.
struct Marker {
    pattern: Regex,
    replacement: String,
}

/// Build the `<mark>` replacement, padded with spaces on both sides.
fn mark(class_token: &str, text: &str) -> String {
    format!(r#" <mark class="{class_token}">{text}</mark> "#)
}

#[allow(clippy::expect_used)] // Patterns are built from fixed alphabetic words
static ABILITY_MARKERS: LazyLock<Vec<Marker>> = LazyLock::new(|| {
    ABILITIES
        .iter()
        .map(|ability| Marker {
            pattern: Regex::new(&format!(
                "(?i) {} | {} ",
                ability.name, ability.abbreviation
            ))
            .expect("valid regex"),
            replacement: mark(&ability.class_token(), ability.name),
        })
        .collect()
});

#[allow(clippy::expect_used)] // Patterns are built from fixed alphabetic words
static SAVE_MARKERS: LazyLock<Vec<Marker>> = LazyLock::new(|| {
    SAVES
        .iter()
        .map(|save| Marker {
            pattern: Regex::new(&format!("(?i) {} ", save.name)).expect("valid regex"),
            replacement: mark(&save.ability.class_token(), save.name),
        })
        .collect()
});

fn apply_markers(text: &str, markers: &[Marker]) -> String {
    markers.iter().fold(text.to_string(), |acc, marker| {
        marker
            .pattern
            .replace_all(&acc, marker.replacement.as_str())
            .into_owned()
    })
}

/// Wrap space-bounded ability names and abbreviations in `<mark>`.
///
/// Matching is case-insensitive; the visible text is always the canonical
/// name. A term needs a space on both sides, so one at the very start or
/// end of the text, or touching a tag, is left alone.
///
/// # Examples
/// ```
/// use classfeatures::annotate::mark_abilities;
///
/// assert_eq!(
///     mark_abilities("add your STR bonus"),
///     r#"add your <mark class="strength">Strength</mark> bonus"#
/// );
/// ```
pub fn mark_abilities(text: &str) -> String {
    apply_markers(text, &ABILITY_MARKERS)
}

/// Wrap space-bounded saving throw names in `<mark>`.
///
/// The class token is the keyed ability's, the visible text the save's.
pub fn mark_saves(text: &str) -> String {
    apply_markers(text, &SAVE_MARKERS)
}

/// Flatten typographic dashes and quotes, then backslash-escape quotes.
pub fn escape_quotes(text: &str) -> String {
    text.replace('\u{2013}', "-")
        .replace('\u{2019}', "'")
        .replace('\u{201D}', "\"")
        .replace('\u{201C}', "\"")
        .replace('\'', r"\'")
        .replace('"', r#"\""#)
}

/// Finalize one fragment: abilities, then saves, then dashes and quotes.
///
/// The order matters: each marking pass re-inserts spaces around what it
/// wrapped, which the following passes see.
pub fn finalize_fragment(raw: &str) -> String {
    let text = mark_abilities(raw);
    let text = mark_saves(&text);
    escape_quotes(&text)
}

/// Finalize a fragment and append it to the output sequence.
pub fn flush_fragment(raw: &str, fragments: &mut Vec<String>) {
    fragments.push(finalize_fragment(raw));
}

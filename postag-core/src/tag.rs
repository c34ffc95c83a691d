//! # Turkish POS tag inventory
//!
//! The tag set combines the coarse universal categories (Noun, Verb, Adj, ...)
//! with the case-marked noun variants the enhanced rule table can produce
//! (`Noun_Dat`, `Noun_Abl`, ...). Labels use the same wire spelling that
//! persisted model metadata carries, so `label()`/`from_label()` round-trip
//! against it.

use serde::{Deserialize, Serialize};

/// A part-of-speech tag assigned to a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Plain noun, no case information.
    Noun,
    /// Noun in the nominative (yalın hali).
    NounNom,
    /// Noun in the accusative (belirtme hali, -ı/-i/-u/-ü).
    NounAcc,
    /// Noun in the dative (yönelme hali, -a/-e).
    NounDat,
    /// Noun in the genitive (tamlayan hali, -ın/-in).
    NounGen,
    /// Noun in the locative (bulunma hali, -da/-de).
    NounLoc,
    /// Noun in the ablative (çıkma hali, -dan/-den).
    NounAbl,
    Verb,
    Adj,
    Adv,
    Pron,
    Det,
    Conj,
    /// Postposition (edat) — Turkish uses postpositions where English uses prepositions.
    Postp,
    Num,
    Punc,
    /// Interjection (ünlem).
    Intj,
    /// No tag could be determined.
    Unknown,
}

impl PosTag {
    /// Wire label for this tag (ex: `"Noun_Dat"`, `"Verb"`).
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Noun => "Noun",
            PosTag::NounNom => "Noun_Nom",
            PosTag::NounAcc => "Noun_Acc",
            PosTag::NounDat => "Noun_Dat",
            PosTag::NounGen => "Noun_Gen",
            PosTag::NounLoc => "Noun_Loc",
            PosTag::NounAbl => "Noun_Abl",
            PosTag::Verb => "Verb",
            PosTag::Adj => "Adj",
            PosTag::Adv => "Adv",
            PosTag::Pron => "Pron",
            PosTag::Det => "Det",
            PosTag::Conj => "Conj",
            PosTag::Postp => "Postp",
            PosTag::Num => "Num",
            PosTag::Punc => "Punc",
            PosTag::Intj => "Intj",
            PosTag::Unknown => "Unknown",
        }
    }

    /// Parses a tag from its wire label.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|tag| tag.label() == s)
    }

    /// Total number of tags in the inventory.
    pub const COUNT: usize = 18;

    /// All tags in a fixed order (for iteration and UI listings).
    pub fn all() -> [PosTag; Self::COUNT] {
        [
            PosTag::Noun,
            PosTag::NounNom,
            PosTag::NounAcc,
            PosTag::NounDat,
            PosTag::NounGen,
            PosTag::NounLoc,
            PosTag::NounAbl,
            PosTag::Verb,
            PosTag::Adj,
            PosTag::Adv,
            PosTag::Pron,
            PosTag::Det,
            PosTag::Conj,
            PosTag::Postp,
            PosTag::Num,
            PosTag::Punc,
            PosTag::Intj,
            PosTag::Unknown,
        ]
    }

    /// Human-readable explanation (Turkish grammar term + English gloss),
    /// used by the demo CLI and the web model catalog.
    pub fn description(&self) -> &'static str {
        match self {
            PosTag::Noun => "İsim (Noun)",
            PosTag::NounNom => "İsim - Yalın Hali (Nominative)",
            PosTag::NounAcc => "İsim - Belirtme Hali (Accusative)",
            PosTag::NounDat => "İsim - Yönelme Hali (Dative)",
            PosTag::NounGen => "İsim - Tamlayan Hali (Genitive)",
            PosTag::NounLoc => "İsim - Bulunma Hali (Locative)",
            PosTag::NounAbl => "İsim - Çıkma Hali (Ablative)",
            PosTag::Verb => "Fiil (Verb)",
            PosTag::Adj => "Sıfat (Adjective)",
            PosTag::Adv => "Zarf (Adverb)",
            PosTag::Pron => "Zamir (Pronoun)",
            PosTag::Det => "Belirteç (Determiner)",
            PosTag::Conj => "Bağlaç (Conjunction)",
            PosTag::Postp => "Edat (Postposition)",
            PosTag::Num => "Sayı (Number)",
            PosTag::Punc => "Noktalama (Punctuation)",
            PosTag::Intj => "Ünlem (Interjection)",
            PosTag::Unknown => "Bilinmeyen (Unknown)",
        }
    }

    /// The coarse category label, with case-marked noun variants collapsed
    /// to `"Noun"`. Used for coverage analysis against the base inventory.
    pub fn base_label(&self) -> &'static str {
        match self {
            PosTag::NounNom
            | PosTag::NounAcc
            | PosTag::NounDat
            | PosTag::NounGen
            | PosTag::NounLoc
            | PosTag::NounAbl => "Noun",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for tag in PosTag::all() {
            assert_eq!(PosTag::from_label(tag.label()), Some(tag));
        }
        assert_eq!(PosTag::from_label("Noun_Dat"), Some(PosTag::NounDat));
        assert_eq!(PosTag::from_label("B-PER"), None);
    }

    #[test]
    fn all_labels_unique() {
        let mut labels: Vec<&str> = PosTag::all().iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), PosTag::COUNT);
    }

    #[test]
    fn case_variants_collapse_to_noun() {
        assert_eq!(PosTag::NounAbl.base_label(), "Noun");
        assert_eq!(PosTag::Verb.base_label(), "Verb");
    }
}

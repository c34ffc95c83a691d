//! # Rule-based tagging
//!
//! Deterministic, stateless classification of single words by an ordered
//! rule list. The order of the rules *is* the grammar: a word ending in both
//! a case suffix and appearing in a closed-class list resolves to whichever
//! rule comes first, so the list is data, not control flow, and precedence
//! can be asserted in tests.
//!
//! Two tables are built:
//!
//! - [`RuleTable::basic`] — the universal fallback used whenever a model
//!   backend is unavailable or fails mid-sentence. Punctuation, a few
//!   closed-class lists, infinitive and adjectival suffixes, default `Noun`.
//! - [`RuleTable::enhanced`] — the richer table used by the fine-tuned
//!   backend in simulation mode. Adds postpositions, determiners, numbers,
//!   the full verb tense suffixes and the nominal case suffixes, and
//!   defaults to the nominative-marked `Noun_Nom`.

use regex::Regex;

use crate::tag::PosTag;

/// How a single rule decides whether it applies to a (lowercased) word.
enum Pattern {
    /// The word is exactly one of these forms.
    OneOf(&'static [&'static str]),
    /// The word ends with one of these suffixes.
    SuffixOf(&'static [&'static str]),
    /// The word matches a compiled regex (numeric literals, percentages).
    Matches(Regex),
}

/// One entry of the ordered rule list.
pub struct Rule {
    /// Stable identifier, surfaced in tests and debug output.
    pub name: &'static str,
    pattern: Pattern,
    /// Tag assigned when the pattern matches.
    pub tag: PosTag,
}

impl Rule {
    fn matches(&self, lower: &str) -> bool {
        match &self.pattern {
            Pattern::OneOf(words) => words.contains(&lower),
            Pattern::SuffixOf(suffixes) => suffixes.iter().any(|s| lower.ends_with(s)),
            Pattern::Matches(re) => re.is_match(lower),
        }
    }
}

/// An ordered list of rules plus a default tag. First match wins.
pub struct RuleTable {
    rules: Vec<Rule>,
    default_tag: PosTag,
}

const PUNCTUATION: &[&str] = &[".", ",", "!", "?", ";", ":", "(", ")", "\"", "'", "-"];

const PRONOUNS: &[&str] = &["ben", "sen", "o", "biz", "siz", "onlar", "bu", "şu"];

const PRONOUNS_ENHANCED: &[&str] = &[
    "ben", "sen", "o", "biz", "siz", "onlar", "bu", "şu", "bunu", "şunu", "onu", "bana", "sana",
    "ona", "kim", "kime", "ne", "neden", "nereye", "nerede", "nereden", "kendisi",
];

const CONJUNCTIONS: &[&str] = &["ve", "ile", "ama", "fakat", "çünkü"];

const CONJUNCTIONS_ENHANCED: &[&str] =
    &["ve", "ile", "ama", "fakat", "çünkü", "veya", "ancak", "ki", "eğer"];

const ADVERBS: &[&str] = &["çok", "az", "daha", "en", "şimdi", "sonra"];

const ADVERBS_ENHANCED: &[&str] = &[
    "çok", "az", "daha", "en", "şimdi", "sonra", "bugün", "dün", "yarın", "zaten", "hemen",
    "belki", "önce",
];

const POSTPOSITIONS: &[&str] =
    &["göre", "kadar", "gibi", "için", "karşı", "doğru", "beri", "itibaren", "olarak"];

const DETERMINERS: &[&str] = &["bir", "her", "bazı", "hangi", "hiçbir", "birkaç", "tüm", "bütün"];

const NUMBER_WORDS: &[&str] = &[
    "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz", "on", "yirmi", "yüz", "bin",
    "milyon",
];

const INTERJECTIONS: &[&str] = &["ah", "oh", "vay", "eyvah", "aman", "hey", "merhaba"];

// Verb morphology, longest variants listed so person/number endings still hit.
const SUFFIX_CONTINUOUS: &[&str] = &[
    "yorum", "yorsun", "yoruz", "yorsunuz", "yorlar", "yordum", "yordun", "yorduk", "yordu",
    "yor",
];
const SUFFIX_PAST: &[&str] = &[
    "dılar", "diler", "dular", "düler", "tılar", "tiler", "tular", "tüler", "dım", "dim", "dum",
    "düm", "dık", "dik", "duk", "dük", "tık", "tik", "tuk", "tük", "dı", "di", "du", "dü", "tı",
    "ti", "tu", "tü",
];
const SUFFIX_FUTURE: &[&str] = &[
    "acağım", "eceğim", "acaksın", "eceksin", "acağız", "eceğiz", "acaklar", "ecekler", "acak",
    "ecek",
];
const SUFFIX_REPORTED_PAST: &[&str] = &[
    "mıştır", "miştir", "muştur", "müştür", "mışlar", "mişler", "mışım", "mişim", "mış", "miş",
    "muş", "müş",
];
const SUFFIX_CONDITIONAL: &[&str] = &["saydı", "seydi", "saydık", "seydik", "sak", "sek"];
const SUFFIX_INFINITIVE: &[&str] = &["maktadır", "mektedir", "mayı", "meyi", "mak", "mek"];

// Nominal case morphology (enhanced table only).
const SUFFIX_ABLATIVE: &[&str] = &["dan", "den", "tan", "ten"];
const SUFFIX_DATIVE_Y: &[&str] = &["ya", "ye"];
const SUFFIX_ACCUSATIVE_Y: &[&str] = &["yı", "yi", "yu", "yü"];
const SUFFIX_GENITIVE: &[&str] = &["nın", "nin", "nun", "nün", "ın", "in", "un", "ün"];
const SUFFIX_LOCATIVE: &[&str] = &["nda", "nde", "da", "de", "ta", "te"];
// Bare single-vowel case endings come after the adjectival suffixes so that
// -lı/-li (which also end in a bare vowel) stay reachable.
const SUFFIX_DATIVE_BARE: &[&str] = &["a", "e"];
const SUFFIX_ACCUSATIVE_BARE: &[&str] = &["ı", "i", "u", "ü"];

const SUFFIX_ADJECTIVE: &[&str] = &["lı", "li", "lu", "lü", "sız", "siz", "su", "sü"];
const SUFFIX_ADJECTIVE_ENHANCED: &[&str] =
    &["lı", "li", "lu", "lü", "sız", "siz", "suz", "süz", "sal", "sel"];

const COMMON_NOUNS: &[&str] = &[
    "ev", "okul", "kitap", "su", "yol", "gün", "adam", "kadın", "çocuk", "anne", "baba", "dünya",
    "hava", "top",
];

fn numeric_pattern() -> Regex {
    // "123", "3.14", "%95", "2020'de" — anything that opens with a digit
    // (optionally percent-prefixed) is treated as numeric.
    Regex::new(r"^%?[0-9]").expect("static regex")
}

impl RuleTable {
    /// The fallback table. Mirrors the minimal rule set every backend can
    /// degrade to: no case morphology, default tag `Noun`.
    pub fn basic() -> Self {
        Self {
            rules: vec![
                Rule { name: "punctuation", pattern: Pattern::OneOf(PUNCTUATION), tag: PosTag::Punc },
                Rule { name: "pronoun", pattern: Pattern::OneOf(PRONOUNS), tag: PosTag::Pron },
                Rule { name: "conjunction", pattern: Pattern::OneOf(CONJUNCTIONS), tag: PosTag::Conj },
                Rule { name: "adverb", pattern: Pattern::OneOf(ADVERBS), tag: PosTag::Adv },
                Rule { name: "infinitive", pattern: Pattern::SuffixOf(SUFFIX_INFINITIVE), tag: PosTag::Verb },
                Rule { name: "adjective_suffix", pattern: Pattern::SuffixOf(SUFFIX_ADJECTIVE), tag: PosTag::Adj },
            ],
            default_tag: PosTag::Noun,
        }
    }

    /// The enhanced table used by the fine-tuned backend's simulation mode.
    /// Extends the closed-class lists, adds verb tense and nominal case
    /// morphology, and defaults to the nominative-marked noun tag.
    pub fn enhanced() -> Self {
        Self {
            rules: vec![
                Rule { name: "punctuation", pattern: Pattern::OneOf(PUNCTUATION), tag: PosTag::Punc },
                Rule { name: "pronoun", pattern: Pattern::OneOf(PRONOUNS_ENHANCED), tag: PosTag::Pron },
                Rule { name: "conjunction", pattern: Pattern::OneOf(CONJUNCTIONS_ENHANCED), tag: PosTag::Conj },
                Rule { name: "adverb", pattern: Pattern::OneOf(ADVERBS_ENHANCED), tag: PosTag::Adv },
                Rule { name: "postposition", pattern: Pattern::OneOf(POSTPOSITIONS), tag: PosTag::Postp },
                Rule { name: "determiner", pattern: Pattern::OneOf(DETERMINERS), tag: PosTag::Det },
                Rule { name: "interjection", pattern: Pattern::OneOf(INTERJECTIONS), tag: PosTag::Intj },
                Rule { name: "number_word", pattern: Pattern::OneOf(NUMBER_WORDS), tag: PosTag::Num },
                Rule { name: "numeric", pattern: Pattern::Matches(numeric_pattern()), tag: PosTag::Num },
                Rule { name: "verb_continuous", pattern: Pattern::SuffixOf(SUFFIX_CONTINUOUS), tag: PosTag::Verb },
                Rule { name: "verb_past", pattern: Pattern::SuffixOf(SUFFIX_PAST), tag: PosTag::Verb },
                Rule { name: "verb_future", pattern: Pattern::SuffixOf(SUFFIX_FUTURE), tag: PosTag::Verb },
                Rule { name: "verb_reported_past", pattern: Pattern::SuffixOf(SUFFIX_REPORTED_PAST), tag: PosTag::Verb },
                Rule { name: "verb_conditional", pattern: Pattern::SuffixOf(SUFFIX_CONDITIONAL), tag: PosTag::Verb },
                Rule { name: "verb_infinitive", pattern: Pattern::SuffixOf(SUFFIX_INFINITIVE), tag: PosTag::Verb },
                Rule { name: "case_ablative", pattern: Pattern::SuffixOf(SUFFIX_ABLATIVE), tag: PosTag::NounAbl },
                Rule { name: "case_dative", pattern: Pattern::SuffixOf(SUFFIX_DATIVE_Y), tag: PosTag::NounDat },
                Rule { name: "case_accusative", pattern: Pattern::SuffixOf(SUFFIX_ACCUSATIVE_Y), tag: PosTag::NounAcc },
                Rule { name: "case_genitive", pattern: Pattern::SuffixOf(SUFFIX_GENITIVE), tag: PosTag::NounGen },
                Rule { name: "case_locative", pattern: Pattern::SuffixOf(SUFFIX_LOCATIVE), tag: PosTag::NounLoc },
                Rule { name: "adjective_suffix", pattern: Pattern::SuffixOf(SUFFIX_ADJECTIVE_ENHANCED), tag: PosTag::Adj },
                Rule { name: "common_noun", pattern: Pattern::OneOf(COMMON_NOUNS), tag: PosTag::Noun },
                Rule { name: "case_dative_bare", pattern: Pattern::SuffixOf(SUFFIX_DATIVE_BARE), tag: PosTag::NounDat },
                Rule { name: "case_accusative_bare", pattern: Pattern::SuffixOf(SUFFIX_ACCUSATIVE_BARE), tag: PosTag::NounAcc },
            ],
            default_tag: PosTag::NounNom,
        }
    }

    /// Tags a single word. Pure: same word (case-insensitively) always maps
    /// to the same tag.
    pub fn tag_word(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.tag)
            .unwrap_or(self.default_tag)
    }

    /// Like [`tag_word`](Self::tag_word) but also reports which rule fired
    /// (`None` means the default tag applied).
    pub fn explain_word(&self, word: &str) -> (PosTag, Option<&'static str>) {
        let lower = word.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&lower) {
                return (rule.tag, Some(rule.name));
            }
        }
        (self.default_tag, None)
    }
}

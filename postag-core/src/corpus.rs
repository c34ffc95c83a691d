//! # Turkish demo corpus
//!
//! Test sentences grouped by scenario, used by the evaluation harness, the
//! CLI demos and the web interface's example list. Expected tags (where
//! present) are targets for the enhanced tag inventory; models are scored
//! against them by position, so partial credit is expected and normal.

/// One demo sentence with its scenario label and, optionally, the expected
/// tag per whitespace word.
pub struct DemoSentence {
    pub text: &'static str,
    pub scenario: &'static str,
    pub expected: Option<&'static [&'static str]>,
}

/// The full demo corpus.
pub fn demo_sentences() -> Vec<DemoSentence> {
    vec![
        // Simple structures
        DemoSentence {
            text: "Merhaba dünya !",
            scenario: "simple",
            expected: None,
        },
        DemoSentence {
            text: "Ali koştu .",
            scenario: "simple",
            expected: None,
        },
        DemoSentence {
            text: "Ali okula gitti .",
            scenario: "simple",
            expected: Some(&["Noun_Nom", "Noun_Dat", "Verb", "Punc"]),
        },
        DemoSentence {
            text: "Bu kitap güzel .",
            scenario: "simple",
            expected: Some(&["Pron", "Noun", "Adj", "Punc"]),
        },
        // Complex structures
        DemoSentence {
            text: "Bunu başından beri biliyordum zaten .",
            scenario: "complex",
            expected: Some(&["Pron", "Noun_Abl", "Postp", "Verb", "Adv", "Punc"]),
        },
        DemoSentence {
            text: "Çocuklar bahçede top oynuyorlar .",
            scenario: "complex",
            expected: Some(&["Noun", "Noun_Loc", "Noun", "Verb", "Punc"]),
        },
        DemoSentence {
            text: "Türkiye çok güzel bir ülkedir .",
            scenario: "complex",
            expected: None,
        },
        DemoSentence {
            text: "Bu projeyi başarıyla tamamladık .",
            scenario: "complex",
            expected: None,
        },
        // Case morphology
        DemoSentence {
            text: "Öğretmen öğrenciye kitabı verdi .",
            scenario: "morphology",
            expected: Some(&["Noun_Nom", "Noun_Dat", "Noun_Acc", "Verb", "Punc"]),
        },
        DemoSentence {
            text: "Çocuk oyuncağını çantasından çıkardı .",
            scenario: "morphology",
            expected: Some(&["Noun_Nom", "Noun_Acc", "Noun_Abl", "Verb", "Punc"]),
        },
        DemoSentence {
            text: "Ailemin evinde mutlu günler geçirdik .",
            scenario: "morphology",
            expected: Some(&["Noun_Gen", "Noun_Loc", "Adj", "Noun", "Verb", "Punc"]),
        },
        // Long sentences
        DemoSentence {
            text: "Geçen hafta arkadaşımla birlikte sinemaya gidip çok güzel bir film izledik .",
            scenario: "long",
            expected: None,
        },
        DemoSentence {
            text: "Profesörümüz bugün derste yeni bir konuyu anlattı ve ödev verdi .",
            scenario: "long",
            expected: None,
        },
        // Technical / academic
        DemoSentence {
            text: "Bu araştırmada makine öğrenmesi algoritmaları kullanıldı .",
            scenario: "technical",
            expected: None,
        },
        DemoSentence {
            text: "Doğal dil işleme teknikleri Türkçe metinler için geliştirildi .",
            scenario: "technical",
            expected: None,
        },
        // Questions and exclamations
        DemoSentence {
            text: "Sen neredesin ?",
            scenario: "question",
            expected: None,
        },
        DemoSentence {
            text: "Nereye gidiyorsun ?",
            scenario: "question",
            expected: Some(&["Pron", "Verb", "Punc"]),
        },
        DemoSentence {
            text: "Ne kadar güzel bir gün !",
            scenario: "question",
            expected: Some(&["Pron", "Postp", "Adj", "Det", "Noun", "Punc"]),
        },
        // Edge cases
        DemoSentence {
            text: "123 sayısı çok büyük .",
            scenario: "edge",
            expected: None,
        },
        DemoSentence {
            text: "COVID-19 pandemisi 2020'de başladı .",
            scenario: "edge",
            expected: Some(&["Noun_Nom", "Noun_Acc", "Num", "Verb", "Punc"]),
        },
        DemoSentence {
            text: "E-posta adresi geçerli değil .",
            scenario: "edge",
            expected: None,
        },
    ]
}

/// The coarse tag inventory models are expected to cover. Case-marked noun
/// tags collapse to `"Noun"` before coverage is computed.
pub const EXPECTED_TAG_INVENTORY: &[&str] = &[
    "Noun", "Verb", "Adj", "Adv", "Pron", "Conj", "Postp", "Det", "Num", "Punc", "Intj",
    "Unknown",
];

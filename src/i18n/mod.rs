//! # I18n Module
//!
//! Static translation table for the twelve supported languages with an
//! English fallback, plus the per-language cuisine hint used in recipe prompts.

pub mod handlers;
pub mod routes;
pub mod translations;


use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub use routes::i18n_routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Bn,
    Ja,
    De,
    It,
    Pt,
    Ko,
    Zh,
    Hi,
    Ar,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::Bn,
        Language::Ja,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ko,
        Language::Zh,
        Language::Hi,
        Language::Ar,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Bn => "bn",
            Language::Ja => "ja",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ko => "ko",
            Language::Zh => "zh",
            Language::Hi => "hi",
            Language::Ar => "ar",
        }
    }

    /// Sentence appended to recipe prompts steering the cuisine selection
    pub fn cuisine_context(&self) -> &'static str {
        match self {
            Language::En => "Focus on globally popular cuisines.",
            Language::Es => "Enfócate en cocinas populares en el mundo de habla hispana.",
            Language::Fr => "Concentrez-vous sur les cuisines populaires dans le monde francophone.",
            Language::Bn => "বিশ্বব্যাপী জনপ্রিয় রান্নাগুলিতে মনোযোগ দিন।",
            Language::Ja => "世界的に人気のある料理に焦点を当ててください。",
            Language::De => "Konzentrieren Sie sich auf weltweit beliebte Küchen.",
            Language::It => "Concentrati sulle cucine popolari a livello globale.",
            Language::Pt => "Concentre-se em culinárias globalmente populares.",
            Language::Ko => "전 세계적으로 인기 있는 요리에 집중하세요.",
            Language::Zh => "专注于全球流行的美食。",
            Language::Hi => "विश्व स्तर पर लोकप्रिय व्यंजनों पर ध्यान केंद्रित करें।",
            Language::Ar => "ركز على المطابخ ذات الشعبية العالمية.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("unsupported language: {}", s))
    }
}

type Table = HashMap<Language, HashMap<&'static str, &'static str>>;

fn table() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(|| {
        Language::ALL
            .into_iter()
            .map(|lang| {
                let entries = translations::entries(lang).iter().copied().collect();
                (lang, entries)
            })
            .collect()
    })
}

/// Looks up `key` for `language`, then English, then returns the key itself
pub fn t(language: Language, key: &str) -> String {
    let table = table();
    table
        .get(&language)
        .and_then(|entries| entries.get(key))
        .or_else(|| table.get(&Language::En).and_then(|entries| entries.get(key)))
        .map(|text| text.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// [`t`] with `{name}` placeholders replaced
pub fn t_with(language: Language, key: &str, args: &[(&str, String)]) -> String {
    args.iter().fold(t(language, key), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

/// Full table for `language` with English filling the gaps
pub fn resolved_table(language: Language) -> HashMap<&'static str, &'static str> {
    let table = table();
    let mut merged = table.get(&Language::En).cloned().unwrap_or_default();
    if let Some(entries) = table.get(&language) {
        merged.extend(entries.iter().map(|(k, v)| (*k, *v)));
    }
    merged
}

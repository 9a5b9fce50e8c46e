//! Built-in category vocabularies for the artists and tracks tables.

use serde::{Deserialize, Serialize};

/// Named category vocabularies usable from a pipeline file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPreset {
    /// `M` / `F`, with English and Italian spellings as synonyms.
    Gender,
    /// Lyrics language codes observed in the tracks table.
    Language,
    /// The twenty Italian regions.
    ItalianRegion,
}

const GENDERS: &[&str] = &["M", "F"];

const GENDER_SYNONYMS: &[(&str, &str)] = &[
    ("male", "M"),
    ("man", "M"),
    ("maschio", "M"),
    ("uomo", "M"),
    ("female", "F"),
    ("woman", "F"),
    ("femmina", "F"),
    ("donna", "F"),
];

const LANGUAGES: &[&str] = &[
    "aa", "bg", "ca", "chr", "co", "cs", "cy", "da", "de", "en", "eo", "es", "et", "eu", "fr",
    "gl", "ia", "it", "la", "lt", "mt", "nl", "no", "pl", "pt", "qu", "rm", "ro", "ru", "rw",
    "sco", "sq", "sr", "sw", "war",
];

const LANGUAGE_SYNONYMS: &[(&str, &str)] = &[
    ("english", "en"),
    ("inglese", "en"),
    ("italian", "it"),
    ("italiano", "it"),
    ("spanish", "es"),
    ("spagnolo", "es"),
    ("french", "fr"),
    ("francese", "fr"),
    ("german", "de"),
    ("tedesco", "de"),
];

const ITALIAN_REGIONS: &[&str] = &[
    "Abruzzo",
    "Basilicata",
    "Calabria",
    "Campania",
    "Emilia-Romagna",
    "Friuli-Venezia-Giulia",
    "Lazio",
    "Liguria",
    "Lombardia",
    "Marche",
    "Molise",
    "Piemonte",
    "Puglia",
    "Sardegna",
    "Sicilia",
    "Toscana",
    "Trentino Alto Adige",
    "Umbria",
    "Valle d'Aosta",
    "Veneto",
];

const REGION_SYNONYMS: &[(&str, &str)] = &[
    ("Emilia Romagna", "Emilia-Romagna"),
    ("Friuli Venezia Giulia", "Friuli-Venezia-Giulia"),
    ("Friuli-Venezia Giulia", "Friuli-Venezia-Giulia"),
    ("Trentino-Alto Adige", "Trentino Alto Adige"),
    ("Trentino-Alto Adige/Südtirol", "Trentino Alto Adige"),
    ("Valle d’Aosta", "Valle d'Aosta"),
    ("Aosta Valley", "Valle d'Aosta"),
    ("Lombardy", "Lombardia"),
    ("Piedmont", "Piemonte"),
    ("Tuscany", "Toscana"),
    ("Apulia", "Puglia"),
    ("Sardinia", "Sardegna"),
    ("Sicily", "Sicilia"),
];

impl CategoryPreset {
    pub const ALL: [CategoryPreset; 3] = [Self::Gender, Self::Language, Self::ItalianRegion];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Language => "language",
            Self::ItalianRegion => "italian_region",
        }
    }

    /// Canonical categories.
    pub fn allowed(&self) -> &'static [&'static str] {
        match self {
            Self::Gender => GENDERS,
            Self::Language => LANGUAGES,
            Self::ItalianRegion => ITALIAN_REGIONS,
        }
    }

    /// `(raw, canonical)` pairs; raw spellings match case-insensitively by default.
    pub fn synonyms(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Gender => GENDER_SYNONYMS,
            Self::Language => LANGUAGE_SYNONYMS,
            Self::ItalianRegion => REGION_SYNONYMS,
        }
    }
}

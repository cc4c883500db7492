use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Language for localized strings in responses, such as achievement names and descriptions.
///
/// Sent as the `l` query parameter. See
/// <https://partner.steamgames.com/doc/store/localization/languages> for the list of codes.
#[derive(Default, Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Language {
    /// Arabic.
    Arabic,
    /// Bulgarian.
    Bulgarian,
    /// Chinese Simplified.
    ChineseSimplified,
    /// Chinese Traditional.
    ChineseTraditional,
    /// Czech.
    Czech,
    /// Danish.
    Danish,
    /// Dutch.
    Dutch,
    #[default]
    /// English.
    English,
    /// Finnish.
    Finnish,
    /// French.
    French,
    /// German.
    German,
    /// Greek.
    Greek,
    /// Hungarian.
    Hungarian,
    /// Italian.
    Italian,
    /// Japanese.
    Japanese,
    /// Korean.
    Korean,
    /// Norwegian.
    Norwegian,
    /// Polish.
    Polish,
    /// Portuguese.
    Portuguese,
    /// Portuguese Brazil.
    PortugueseBrazil,
    /// Romanian.
    Romanian,
    /// Russian.
    Russian,
    /// Spanish Spain.
    SpanishSpain,
    /// Spanish Latin America.
    SpanishLatinAmerica,
    /// Swedish.
    Swedish,
    /// Thai.
    Thai,
    /// Turkish.
    Turkish,
    /// Ukrainian.
    Ukrainian,
    /// Vietnamese.
    Vietnamese,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 29] = [
        Self::Arabic,
        Self::Bulgarian,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::Czech,
        Self::Danish,
        Self::Dutch,
        Self::English,
        Self::Finnish,
        Self::French,
        Self::German,
        Self::Greek,
        Self::Hungarian,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Norwegian,
        Self::Polish,
        Self::Portuguese,
        Self::PortugueseBrazil,
        Self::Romanian,
        Self::Russian,
        Self::SpanishSpain,
        Self::SpanishLatinAmerica,
        Self::Swedish,
        Self::Thai,
        Self::Turkish,
        Self::Ukrainian,
        Self::Vietnamese,
    ];

    /// The code sent with requests, e.g. `en`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Bulgarian => "bg",
            Self::ChineseSimplified => "zh-CN",
            Self::ChineseTraditional => "zh-TW",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::German => "de",
            Self::Greek => "el",
            Self::Hungarian => "hu",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::Portuguese => "pt",
            Self::PortugueseBrazil => "pt-BR",
            Self::Romanian => "ro",
            Self::Russian => "ru",
            Self::SpanishSpain => "es",
            Self::SpanishLatinAmerica => "es-419",
            Self::Swedish => "sv",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Ukrainian => "uk",
            Self::Vietnamese => "vn",
        }
    }

    /// The name Steam uses for this language internally, e.g. `english`. Also accepted by
    /// most endpoints in place of the code.
    pub fn steam_name(&self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::Bulgarian => "bulgarian",
            Self::ChineseSimplified => "schinese",
            Self::ChineseTraditional => "tchinese",
            Self::Czech => "czech",
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::English => "english",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::German => "german",
            Self::Greek => "greek",
            Self::Hungarian => "hungarian",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "koreana",
            Self::Norwegian => "norwegian",
            Self::Polish => "polish",
            Self::Portuguese => "portuguese",
            Self::PortugueseBrazil => "brazilian",
            Self::Romanian => "romanian",
            Self::Russian => "russian",
            Self::SpanishSpain => "spanish",
            Self::SpanishLatinAmerica => "latam",
            Self::Swedish => "swedish",
            Self::Thai => "thai",
            Self::Turkish => "turkish",
            Self::Ukrainian => "ukrainian",
            Self::Vietnamese => "vietnamese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The string is neither a language code nor a Steam language name.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Unknown language: {}", .0)]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| {
                language.code().eq_ignore_ascii_case(s) ||
                language.steam_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownLanguage(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english_code() {
        assert_eq!(Language::default().to_string(), "en");
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("pt-BR".parse::<Language>(), Ok(Language::PortugueseBrazil));
        assert_eq!("koreana".parse::<Language>(), Ok(Language::Korean));
        assert_eq!("klingon".parse::<Language>(), Err(UnknownLanguage("klingon".into())));
    }
}

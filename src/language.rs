use crate::enum_values;

enum_values! {
    /// Languages the search endpoints can be localized to.
    pub enum Language {
        English = "en"
        Spanish = "es"
        Portuguese = "pt"
        Indonesian = "id"
        French = "fr"
        Arabic = "ar"
        Turkish = "tr"
        Thai = "th"
        Vietnamese = "vi"
        German = "de"
        Italian = "it"
        Japanese = "ja"
        ChineseSimplified = "zh-CN"
        ChineseTraditional = "zh-TW"
        Russian = "ru"
        Korean = "ko"
        Polish = "pl"
        Dutch = "nl"
        Romanian = "ro"
        Hungarian = "hu"
        Swedish = "sv"
        Czech = "cs"
        Hindi = "hi"
        Bengali = "bn"
        Danish = "da"
        Farsi = "fa"
        Filipino = "tl"
        Finnish = "fi"
        /// Giphy still uses the deprecated `iw` code for hebrew.
        Hebrew = "iw"
        Malay = "ms"
        Norwegian = "no"
        Ukrainian = "uk"
    }
}

impl Language {
    pub fn to_human_readable(&self) -> String {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Portuguese => "Portuguese",
            Language::Indonesian => "Indonesian",
            Language::French => "French",
            Language::Arabic => "Arabic",
            Language::Turkish => "Turkish",
            Language::Thai => "Thai",
            Language::Vietnamese => "Vietnamese",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::ChineseTraditional => "Chinese (Traditional)",
            Language::Russian => "Russian",
            Language::Korean => "Korean",
            Language::Polish => "Polish",
            Language::Dutch => "Dutch",
            Language::Romanian => "Romanian",
            Language::Hungarian => "Hungarian",
            Language::Swedish => "Swedish",
            Language::Czech => "Czech",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Danish => "Danish",
            Language::Farsi => "Farsi",
            Language::Filipino => "Filipino",
            Language::Finnish => "Finnish",
            Language::Hebrew => "Hebrew",
            Language::Malay => "Malay",
            Language::Norwegian => "Norwegian",
            Language::Ukrainian => "Ukrainian",
            Language::Custom(custom) => custom.as_str(),
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn wire_values_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from(language.to_string()), language);
        }
    }

    #[test]
    fn unknown_code_is_custom() {
        assert_eq!(Language::from("eo"), Language::Custom("eo".to_string()));
        assert_eq!(Language::from("zh-TW"), Language::ChineseTraditional);
    }
}

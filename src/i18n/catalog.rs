//! Built-in language catalog.
//!
//! Rows are in display order; "Automatic" must stay first.

use super::language::LanguageDescriptor;

const fn lang(
    api_key: &'static str,
    display_name: &'static str,
    iso_code: &'static str,
) -> LanguageDescriptor {
    LanguageDescriptor::new(api_key, display_name, Some(iso_code))
}

/// Api key of the source-language auto-detection entry.
pub const AUTOMATIC_API_KEY: &str = "Automatic";

/// The "Automatic" entry; always the first catalog row.
pub(crate) static AUTOMATIC: LanguageDescriptor =
    LanguageDescriptor::new(AUTOMATIC_API_KEY, "Automatic", Some("auto"));

/// Every language offered as a translation source or target.
pub(crate) static LANGUAGES: &[LanguageDescriptor] = &[
    lang(AUTOMATIC_API_KEY, "Automatic", "auto"),
    lang("om", "(Afan)/Oromoor/Oriya", "om"),
    lang("ab", "Abkhazian", "ab"),
    lang("aa", "Afar", "aa"),
    lang("af", "Afrikaans", "af"),
    lang("ak", "Akan", "ak"),
    lang("sq", "Albanian", "sq"),
    lang("am", "Amharic", "am"),
    lang("ar", "Arabic", "ar"),
    lang("an", "Aragonese", "an"),
    lang("hy", "Armenian", "hy"),
    lang("as", "Assamese", "as"),
    lang("av", "Avaric", "av"),
    lang("ae", "Avestan", "ae"),
    lang("ay", "Aymara", "ay"),
    lang("az", "Azeri", "az"),
    lang("bm", "Bambara", "bm"),
    lang("ba", "Bashkir", "ba"),
    lang("eu", "Basque", "eu"),
    lang("be", "Belarusian", "be"),
    lang("bn", "Bengali", "bn"),
    lang("dz", "Bhutani", "dz"),
    lang("bh", "Bihari", "bh"),
    lang("bi", "Bislama", "bi"),
    lang("bs", "Bosnian", "bs"),
    lang("br", "Breton", "br"),
    lang("bg", "Bulgarian", "bg"),
    lang("my", "Burmese", "my"),
    lang("km", "Cambodian", "km"),
    lang("yue", "Cantonese", "yue"),
    lang("ca", "Catalan", "ca"),
    lang("ch", "Chamorro", "ch"),
    lang("ce", "Chechen", "ce"),
    lang("ny", "Chichewa", "ny"),
    lang("zh", "Chinese", "zh"),
    lang("zh_cn", "Chinese (Simplified)", "zh-CN"),
    lang("zh_tw", "Chinese (Traditional)", "zh-TW"),
    lang("cu", "Church Slavonic", "cu"),
    lang("cv", "Chuvash", "cv"),
    lang("kw", "Cornish", "kw"),
    lang("co", "Corsican", "co"),
    lang("cr", "Cree", "cr"),
    lang("hr", "Croatian", "hr"),
    lang("hr_ba", "Croatian (Bosnia and Herzegovina)", "hr-BA"),
    lang("hr_hr", "Croatian (Croatia)", "hr-HR"),
    lang("cs", "Czech", "cs"),
    lang("da", "Danish", "da"),
    lang("div", "Divehi", "dv"),
    lang("dv", "Divehi", "dv"),
    lang("nl", "Dutch", "nl"),
    lang("nl_be", "Dutch (Belgium)", "nl-BE"),
    lang("nl_nl", "Dutch (Netherlands)", "nl-NL"),
    lang("elvish", "Elvish (Sindarin)", "elv"),
    lang("emoji", "Emoji Speak", "emj"),
    lang("en", "English", "en"),
    lang("eo", "Esperanto", "eo"),
    lang("et", "Estonian", "et"),
    lang("ee", "Ewe", "ee"),
    lang("fo", "Faroese", "fo"),
    lang("fa", "Farsi", "fa"),
    lang("fj", "Fiji", "fj"),
    lang("fi", "Finnish", "fi"),
    lang("fr", "French", "fr"),
    lang("fy", "Frisian", "fy"),
    lang("ff", "Fulah", "ff"),
    lang("mk", "FYRO Macedonian", "mk"),
    lang("gd", "Gaelic", "gd"),
    lang("gl", "Galician", "gl"),
    lang("lg", "Ganda", "lg"),
    lang("ka", "Georgian", "ka"),
    lang("de", "German", "de"),
    lang("de_at", "German (Austria)", "de-AT"),
    lang("de_de", "German (Germany)", "de-DE"),
    lang("de_li", "German (Liechtenstein)", "de-LI"),
    lang("de_lu", "German (Luxembourg)", "de-LU"),
    lang("de_ch", "German (Switzerland)", "de-CH"),
    lang("el", "Greek", "el"),
    lang("kl", "Greenlandic", "kl"),
    lang("gn", "Guarani", "gn"),
    lang("gu", "Gujarati", "gu"),
    lang("ht", "Haitian", "ht"),
    lang("ha", "Hausa", "ha"),
    lang("he", "Hebrew", "he"),
    lang("iw", "Hebrew", "iw"),
    lang("hz", "Herero", "hz"),
    lang("hi", "Hindi", "hi"),
    lang("ho", "Hiri Motu", "ho"),
    lang("hu", "Hungarian", "hu"),
    lang("is", "Icelandic", "is"),
    lang("io", "Ido", "io"),
    lang("ig", "Igbo", "ig"),
    lang("id", "Indonesian", "id"),
    lang("in", "Indonesian", "in"),
    lang("ia", "Interlingua", "ia"),
    lang("ie", "Interlingue", "ie"),
    lang("iu", "Inuktitut", "iu"),
    lang("ik", "Inupiak", "ik"),
    lang("ga", "Irish", "ga"),
    lang("it", "Italian", "it"),
    lang("it_it", "Italian (Italy)", "it-IT"),
    lang("it_ch", "Italian (Switzerland)", "it-CH"),
    lang("ja", "Japanese", "ja"),
    lang("jv", "Javanese", "jv"),
    lang("jw", "Javanese", "jw"),
    lang("kn", "Kannada", "kn"),
    lang("kr", "Kanuri", "kr"),
    lang("ks", "Kashmiri", "ks"),
    lang("kk", "Kazakh", "kk"),
    lang("ki", "Kikuyu", "ki"),
    lang("rw", "Kinyarwanda", "rw"),
    lang("ky", "Kirghiz", "ky"),
    lang("rn", "Kirundi", "rn"),
    lang("klingon", "Klingon", "tlh"),
    lang("kv", "Komi", "kv"),
    lang("kg", "Kongo", "kg"),
    lang("kok", "Konkani", "kok"),
    lang("ko", "Korean", "ko"),
    lang("kj", "Kuanyama", "kj"),
    lang("ku", "Kurdish", "ku"),
    lang("kz", "Kyrgyz", "ky"),
    lang("lo", "Laothian", "lo"),
    lang("la", "Latin", "la"),
    lang("lv", "Latvian", "lv"),
    lang("li", "Limburgan", "li"),
    lang("ln", "Lingala", "ln"),
    lang("lt", "Lithuanian", "lt"),
    lang("lu", "Luba_Katanga", "lu"),
    lang("lb", "Luxembourgish", "lb"),
    lang("mg", "Malagasy", "mg"),
    lang("ms", "Malay", "ms"),
    lang("ms_bn", "Malay (Brunei Darussalam)", "ms-BN"),
    lang("ms_my", "Malay (Malaysia)", "ms-MY"),
    lang("ml", "Malayalam", "ml"),
    lang("mt", "Maltese", "mt"),
    lang("gv", "Manx", "gv"),
    lang("mi", "Maori", "mi"),
    lang("mr", "Marathi", "mr"),
    lang("mh", "Marshallese", "mh"),
    lang("middle_english", "Middle English", "en-GB"),
    lang("mo", "Moldavian", "mo"),
    lang("mn", "Mongolian", "mn"),
    lang("na", "Nauru", "na"),
    lang("nv", "Navajo", "nv"),
    lang("ng", "Ndonga", "ng"),
    lang("ne", "Nepali (India)", "ne"),
    lang("nd", "North Ndebele", "nd"),
    lang("ns", "Northern Sotho", "ns"),
    lang("no", "Norwegian", "no"),
    lang("nb", "Norwegian (Bokmal)", "nb"),
    lang("nn", "Norwegian (Nynorsk)", "nn"),
    lang("oc", "Occitan", "oc"),
    lang("oj", "Ojibwa", "oj"),
    lang("or", "Oriya", "or"),
    lang("os", "Ossetian", "os"),
    lang("pi", "Pali", "pi"),
    lang("ps", "Pashto/Pushto", "ps"),
    lang("pirate", "Pirate Speak", "prt"),
    lang("pl", "Polish", "pl"),
    lang("pt", "Portuguese", "pt"),
    lang("pt_br", "Portuguese (Brazil)", "pt-BR"),
    lang("pt_pt", "Portuguese (Portugal)", "pt-PT"),
    lang("pa", "Punjabi", "pa"),
    lang("qu", "Quechua", "qu"),
    lang("qu_bo", "Quechua (Bolivia)", "qu-BO"),
    lang("qu_ec", "Quechua (Ecuador)", "qu-EC"),
    lang("qu_pe", "Quechua (Peru)", "qu-PE"),
    lang("rm", "Rhaeto_Romanic", "rm"),
    lang("ro", "Romanian", "ro"),
    lang("ru", "Russian", "ru"),
    lang("se", "Sami", "se"),
    lang("se_fi", "Sami (Finland)", "se-FI"),
    lang("se_no", "Sami (Norway)", "se-NO"),
    lang("se_se", "Sami (Sweden)", "se-SE"),
    lang("sm", "Samoan", "sm"),
    lang("sg", "Sangro", "sg"),
    lang("sa", "Sanskrit", "sa"),
    lang("sc", "Sardinian", "sc"),
    lang("sr", "Serbian", "sr"),
    lang("sr_ba", "Serbian (Bosnia and Herzegovina)", "sr-BA"),
    lang("sr_sp", "Serbian (Serbia and Montenegro)", "sr-SP"),
    lang("sh", "Serbo_Croatian", "sh"),
    lang("st", "Sesotho", "st"),
    lang("sn", "Shona", "sn"),
    lang("ii", "Sichuan Yi", "ii"),
    lang("sd", "Sindhi", "sd"),
    lang("si", "Singhalese", "si"),
    lang("ss", "Siswati", "ss"),
    lang("sk", "Slovak", "sk"),
    lang("ls", "Slovenian", "sl"),
    lang("sl", "Slovenian", "sl"),
    lang("so", "Somali", "so"),
    lang("sb", "Sorbian", "sb"),
    lang("nr", "South Ndebele", "nr"),
    lang("es", "Spanish", "es"),
    lang("su", "Sundanese", "su"),
    lang("sx", "Sutu", "sx"),
    lang("sw", "Swahili", "sw"),
    lang("sv", "Swedish", "sv"),
    lang("sv_fi", "Swedish (Finland)", "sv-FI"),
    lang("sv_se", "Swedish (Sweden)", "sv-SE"),
    lang("syr", "Syriac", "syr"),
    lang("tl", "Tagalog", "tl"),
    lang("ty", "Tahitian", "ty"),
    lang("tg", "Tajik", "tg"),
    lang("ta", "Tamil", "ta"),
    lang("tt", "Tatar", "tt"),
    lang("te", "Telugu", "te"),
    lang("th", "Thai", "th"),
    lang("bo", "Tibetan", "bo"),
    lang("ti", "Tigrinya", "ti"),
    lang("to", "Tonga", "to"),
    lang("ts", "Tsonga", "ts"),
    lang("tn", "Tswana", "tn"),
    lang("tr", "Turkish", "tr"),
    lang("tk", "Turkmen", "tk"),
    lang("tw", "Twi", "tw"),
    lang("ug", "Uighur", "ug"),
    lang("uk", "Ukrainian", "uk"),
    lang("ur", "Urdu", "ur"),
    lang("uz", "Uzbek", "uz"),
    lang("ve", "Venda", "ve"),
    lang("vi", "Vietnamese", "vi"),
    lang("vo", "Volapuk", "vo"),
    lang("wa", "Walloon", "wa"),
    lang("cy", "Welsh", "cy"),
    lang("wo", "Wolof", "wo"),
    lang("xh", "Xhosa", "xh"),
    lang("ji", "Yiddish", "yi"),
    lang("yi", "Yiddish", "yi"),
    lang("yo", "Yoruba", "yo"),
    lang("za", "Zhuang", "za"),
    lang("zu", "Zulu", "zu"),
];

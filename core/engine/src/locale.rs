//! Recognition-locale lookup.
//!
//! Speech-recognition backends want a region-qualified locale (`hi-IN`),
//! while the rest of the pipeline works with bare language tags (`hi`).
//! The mapping is static domain data; unknown tags fall back to `en-US`.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_RECOGNITION_LOCALE: &str = "en-US";

static RECOGNITION_LOCALES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("af", "af-ZA"),
        ("sq", "sq-AL"),
        ("am", "am-ET"),
        ("ar", "ar-SA"),
        ("hy", "hy-AM"),
        ("az", "az-AZ"),
        ("eu", "eu-ES"),
        ("be", "be-BY"),
        ("bn", "bn-IN"),
        ("bs", "bs-BA"),
        ("bg", "bg-BG"),
        ("ca", "ca-ES"),
        ("ceb", "ceb-PH"),
        ("ny", "ny-MW"),
        ("zh-cn", "zh-CN"),
        ("zh-tw", "zh-TW"),
        ("co", "co-FR"),
        ("hr", "hr-HR"),
        ("cs", "cs-CZ"),
        ("da", "da-DK"),
        ("nl", "nl-NL"),
        ("en", "en-US"),
        ("eo", "eo"),
        ("et", "et-EE"),
        ("tl", "fil-PH"),
        ("fi", "fi-FI"),
        ("fr", "fr-FR"),
        ("fy", "fy-NL"),
        ("gl", "gl-ES"),
        ("ka", "ka-GE"),
        ("de", "de-DE"),
        ("el", "el-GR"),
        ("gu", "gu-IN"),
        ("ht", "ht-HT"),
        ("ha", "ha-NG"),
        ("haw", "haw-US"),
        ("he", "he-IL"),
        ("hi", "hi-IN"),
        ("hmn", "hmn"),
        ("hu", "hu-HU"),
        ("is", "is-IS"),
        ("ig", "ig-NG"),
        ("id", "id-ID"),
        ("ga", "ga-IE"),
        ("it", "it-IT"),
        ("ja", "ja-JP"),
        ("jw", "jv-ID"),
        ("kn", "kn-IN"),
        ("kk", "kk-KZ"),
        ("km", "km-KH"),
        ("ko", "ko-KR"),
        ("ku", "ku-TR"),
        ("ky", "ky-KG"),
        ("lo", "lo-LA"),
        ("la", "la"),
        ("lv", "lv-LV"),
        ("lt", "lt-LT"),
        ("lb", "lb-LU"),
        ("mk", "mk-MK"),
        ("mg", "mg-MG"),
        ("ms", "ms-MY"),
        ("ml", "ml-IN"),
        ("mt", "mt-MT"),
        ("mi", "mi-NZ"),
        ("mr", "mr-IN"),
        ("mn", "mn-MN"),
        ("my", "my-MM"),
        ("ne", "ne-NP"),
        ("no", "nb-NO"),
        ("or", "or-IN"),
        ("ps", "ps-AF"),
        ("fa", "fa-IR"),
        ("pl", "pl-PL"),
        ("pt", "pt-PT"),
        ("pa", "pa-Guru-IN"),
        ("ro", "ro-RO"),
        ("ru", "ru-RU"),
        ("sm", "sm-WS"),
        ("gd", "gd-GB"),
        ("sr", "sr-RS"),
        ("st", "st-LS"),
        ("sn", "sn-ZW"),
        ("sd", "sd-IN"),
        ("si", "si-LK"),
        ("sk", "sk-SK"),
        ("sl", "sl-SI"),
        ("so", "so-SO"),
        ("es", "es-ES"),
        ("su", "su-ID"),
        ("sw", "sw-KE"),
        ("sv", "sv-SE"),
        ("tg", "tg-TJ"),
        ("ta", "ta-IN"),
        ("te", "te-IN"),
        ("th", "th-TH"),
        ("tr", "tr-TR"),
        ("uk", "uk-UA"),
        ("ur", "ur-PK"),
        ("ug", "ug-CN"),
        ("uz", "uz-UZ"),
        ("vi", "vi-VN"),
        ("cy", "cy-GB"),
        ("xh", "xh-ZA"),
        ("yi", "yi"),
        ("yo", "yo-NG"),
        ("zu", "zu-ZA"),
    ])
});

/// Locale code the recognition backend expects for a short language tag.
///
/// Lookup is case-insensitive. Unknown tags resolve to
/// [`DEFAULT_RECOGNITION_LOCALE`] rather than failing.
pub fn recognition_locale(tag: &str) -> &'static str {
    RECOGNITION_LOCALES
        .get(tag.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_RECOGNITION_LOCALE)
}

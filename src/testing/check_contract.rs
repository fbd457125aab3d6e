use crate::{config::Config, scan::check};

/// Assert that a policy satisfies the universal palindrome contracts.
///
/// Every `Config` must pass it, whatever its flags and alphabet:
/// 1. `absent_input_follows_null_okay` → `None` resolves to `null_okay`
/// 2. `empty_input_is_palindrome` → `""` is true with either blank flag
/// 3. `single_character_is_palindrome` → any one-character text is true
/// 4. `reversal_is_symmetric` → `check(t) == check(reverse(t))`
/// 5. `mirrored_text_is_palindrome` → `t + reverse(t)` is always true
/// 6. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_check_contract {
    ($config:expr) => {{
        let config: &$crate::config::Config = &$config;
        $crate::testing::check_contract::absent_input_follows_null_okay(config);
        $crate::testing::check_contract::empty_input_is_palindrome(config);
        $crate::testing::check_contract::single_character_is_palindrome(config);
        $crate::testing::check_contract::reversal_is_symmetric(config);
        $crate::testing::check_contract::mirrored_text_is_palindrome(config);
        $crate::testing::check_contract::no_panic_on_mixed_scripts(config);
    }};
}

pub const SAMPLES: &[&str] = &[
    "racecar",
    "Tacocat",
    "hello",
    "A man, a plan, a canal -- Panama",
    "r a d   a r",
    "Osó",
    "ab",
    " ,. a .,. ",
    "f\n\r\toof",
    "Łapał",
    "日本日",
    "e\u{0301}a\u{0301}e",
    "\u{3000}x\u{00A0}",
];

pub fn absent_input_follows_null_okay(config: &Config) {
    assert_eq!(check(None, config), config.null_okay);
}

pub fn empty_input_is_palindrome(config: &Config) {
    for blank_ok in [true, false] {
        let cfg = config.clone().with_blank_string_okay(blank_ok);
        assert!(check(Some(""), &cfg), "empty input rejected (blank_string_okay = {blank_ok})");
    }
}

pub fn single_character_is_palindrome(config: &Config) {
    for c in ['a', 'Z', ' ', ',', 'é', '\u{0301}', '世', '\u{3000}'] {
        let text = c.to_string();
        assert!(check(Some(text.as_str()), config), "single character {c:?} rejected");
    }
}

pub fn reversal_is_symmetric(config: &Config) {
    for &text in SAMPLES {
        let reversed: String = text.chars().rev().collect();
        assert_eq!(
            check(Some(text), config),
            check(Some(reversed.as_str()), config),
            "reversal changed the verdict for {text:?}"
        );
    }
}

pub fn mirrored_text_is_palindrome(config: &Config) {
    for &text in SAMPLES {
        let mirrored: String = text.chars().chain(text.chars().rev()).collect();
        assert!(check(Some(mirrored.as_str()), config), "mirrored {text:?} rejected");
    }
}

pub fn no_panic_on_mixed_scripts(config: &Config) {
    let _ = check(
        Some("Hello 世界 русский Türkçe العربية 简体中文 한국어 🇹🇷 e\u{0301}"),
        config,
    );
}

//! Built-in product attribute dictionary.
//!
//! Each attribute maps to the substrings that signal a mention of it. A
//! keyword may trigger more than one attribute ("fast" is both delivery and
//! performance).

use std::sync::LazyLock;

/// Default attribute keys with their trigger keywords.
pub static DEFAULT_ATTRIBUTES: LazyLock<Vec<(&'static str, &'static [&'static str])>> =
    LazyLock::new(|| {
        vec![
            (
                "quality",
                &[
                    "quality",
                    "build",
                    "construction",
                    "material",
                    "durable",
                    "sturdy",
                    "solid",
                    "cheap",
                    "flimsy",
                    "poor",
                ][..],
            ),
            (
                "price",
                &[
                    "price",
                    "cost",
                    "expensive",
                    "cheap",
                    "value",
                    "money",
                    "affordable",
                    "overpriced",
                    "budget",
                    "costly",
                ][..],
            ),
            (
                "delivery",
                &[
                    "delivery",
                    "shipping",
                    "package",
                    "arrived",
                    "fast",
                    "slow",
                    "damaged",
                    "packaging",
                    "courier",
                ][..],
            ),
            (
                "performance",
                &[
                    "performance",
                    "speed",
                    "fast",
                    "slow",
                    "efficient",
                    "lag",
                    "smooth",
                    "responsive",
                    "quick",
                ][..],
            ),
            (
                "design",
                &[
                    "design",
                    "look",
                    "appearance",
                    "color",
                    "style",
                    "beautiful",
                    "ugly",
                    "attractive",
                    "aesthetic",
                ][..],
            ),
            (
                "battery",
                &[
                    "battery", "charge", "power", "drain", "last", "life", "backup", "charging",
                ][..],
            ),
            (
                "camera",
                &[
                    "camera", "photo", "picture", "video", "image", "blur", "clear", "focus",
                    "lens",
                ][..],
            ),
            (
                "display",
                &[
                    "display",
                    "screen",
                    "bright",
                    "dim",
                    "resolution",
                    "clear",
                    "crisp",
                    "sharp",
                    "color",
                ][..],
            ),
            (
                "size",
                &[
                    "size", "big", "small", "compact", "large", "fit", "portable", "heavy",
                    "light",
                ][..],
            ),
            (
                "service",
                &[
                    "service", "support", "help", "response", "staff", "rude", "helpful",
                    "customer", "care",
                ][..],
            ),
        ]
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_attribute_has_keywords() {
        assert_eq!(DEFAULT_ATTRIBUTES.len(), 10);
        for (key, keywords) in DEFAULT_ATTRIBUTES.iter() {
            assert!(!keywords.is_empty(), "{key} has no keywords");
            assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
        }
    }
}

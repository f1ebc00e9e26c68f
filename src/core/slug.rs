//! Display label → filesystem-safe slug → candidate image path.

use crate::domain::ports::AssetStore;
use serde::Serialize;

const QUOTES: [char; 7] = ['"', '\'', '`', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Lower-case, hyphen-delimited slug of `label`.
///
/// Quotes and parentheses are dropped without substitution, then anything
/// other than ASCII letters, digits, whitespace and `-` is dropped. Whitespace
/// runs become a single hyphen. A label made only of stripped characters
/// yields an empty slug.
pub fn slugify(label: &str) -> String {
    let kept: String = label
        .to_lowercase()
        .chars()
        .filter(|c| !QUOTES.contains(c) && *c != '(' && *c != ')')
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Asset families and their directory templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Logo,
    Song,
    Organization,
    Book,
}

impl AssetKind {
    fn root(self) -> &'static str {
        match self {
            AssetKind::Logo => "works",
            AssetKind::Song => "music",
            AssetKind::Organization => "organizations",
            AssetKind::Book => "books",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            AssetKind::Logo | AssetKind::Organization => "logo.png",
            AssetKind::Song | AssetKind::Book => "cover.png",
        }
    }

    /// `<root>/<slug>/<file>`, relative to the public directory.
    pub fn path_for(self, label: &str) -> String {
        format!("{}/{}/{}", self.root(), slugify(label), self.file_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Pending,
    Loaded,
    Failed,
}

/// An image slot on a page: where the asset should be and whether it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub kind: AssetKind,
    pub alt: String,
    pub path: String,
    pub status: ImageStatus,
    pub placeholder: bool,
}

impl ImageRef {
    pub fn pending(kind: AssetKind, label: &str) -> Self {
        let alt = match kind {
            AssetKind::Logo | AssetKind::Organization => format!("{} logo", label),
            AssetKind::Song | AssetKind::Book => format!("{} cover", label),
        };
        Self {
            kind,
            alt,
            path: kind.path_for(label),
            status: ImageStatus::Pending,
            placeholder: true,
        }
    }

    /// Settle the slot. Only `Loaded` ever hides the placeholder.
    pub fn settle(&mut self, found: bool) {
        self.status = if found {
            ImageStatus::Loaded
        } else {
            ImageStatus::Failed
        };
        self.placeholder = self.shows_placeholder();
    }

    pub fn shows_placeholder(&self) -> bool {
        self.status != ImageStatus::Loaded
    }
}

/// Look up the slot's asset once. Lookup errors and empty slugs degrade to `Failed`.
pub async fn resolve_image<S: AssetStore>(store: &S, kind: AssetKind, label: &str) -> ImageRef {
    let mut image = ImageRef::pending(kind, label);
    if slugify(label).is_empty() {
        tracing::debug!("Label {:?} has an empty slug, showing placeholder", label);
        image.settle(false);
        return image;
    }
    let found = match store.exists(&image.path).await {
        Ok(found) => found,
        Err(e) => {
            tracing::debug!("Asset lookup for {} failed: {}", image.path, e);
            false
        }
    };
    if !found {
        tracing::debug!("No asset at {}, showing placeholder", image.path);
    }
    image.settle(found);
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{Result, SiteError};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_slugify_known_labels() {
        assert_eq!(slugify("Margaret"), "margaret");
        assert_eq!(
            slugify("Harvard Asian American Dance Troupe"),
            "harvard-asian-american-dance-troupe"
        );
        assert_eq!(slugify("Jun Lu (Performing) Arts"), "jun-lu-performing-arts");
        assert_eq!(slugify("Toronto 2014"), "toronto-2014");
    }

    #[test]
    fn test_slugify_strips_quotes_and_punctuation() {
        assert_eq!(slugify("The AI Regulator's Toolbox"), "the-ai-regulators-toolbox");
        assert_eq!(slugify("\u{201C}Quoted\u{201D} Title"), "quoted-title");
        assert_eq!(
            slugify("Towards Monosemanticity: Decomposing Language Models"),
            "towards-monosemanticity-decomposing-language-models"
        );
        assert_eq!(slugify("Food runs!"), "food-runs");
        assert_eq!(slugify("snake_case"), "snakecase");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  Abaka    AI  "), "abaka-ai");
        assert_eq!(slugify("tab\tand\nnewline"), "tab-and-newline");
        assert_eq!(slugify("Puzzle-solving"), "puzzle-solving");
    }

    #[test]
    fn test_slugify_only_stripped_chars_is_empty() {
        assert_eq!(slugify("\"()'!"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(AssetKind::Book.path_for("?!"), "books//cover.png");
    }

    #[test]
    fn test_slug_alphabet_holds_for_assorted_labels() {
        let labels = [
            "Stanford Robinson Lab",
            "Code.org’s   platform (beta)",
            "“Deep Learning” • ECAI",
            "Café  Naïve   Ünïcode",
            "a \t\n b",
            "ML / AI",
        ];
        for label in labels {
            let slug = slugify(label);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected char in {:?}",
                slug
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", slug);
        }
        assert_eq!(slugify("ML / AI"), "ml-ai");
        assert_eq!(slugify("a \t\n b"), "a-b");
    }

    #[test]
    fn test_asset_paths() {
        assert_eq!(AssetKind::Logo.path_for("Abaka AI"), "works/abaka-ai/logo.png");
        assert_eq!(AssetKind::Song.path_for("Margaret"), "music/margaret/cover.png");
        assert_eq!(
            AssetKind::Organization.path_for("Jun Lu Performing Arts"),
            "organizations/jun-lu-performing-arts/logo.png"
        );
        assert_eq!(
            AssetKind::Book.path_for("Cities and Ambition"),
            "books/cities-and-ambition/cover.png"
        );
    }

    struct FixedStore {
        present: HashSet<String>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl AssetStore for FixedStore {
        async fn exists(&self, path: &str) -> Result<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SiteError::ConfigError {
                    message: "store offline".to_string(),
                });
            }
            Ok(self.present.contains(path))
        }
    }

    fn store(paths: &[&str], fail: bool) -> FixedStore {
        FixedStore {
            present: paths.iter().map(|p| p.to_string()).collect(),
            calls: AtomicUsize::new(0),
            fail,
        }
    }

    #[test]
    fn test_pending_shows_placeholder() {
        let image = ImageRef::pending(AssetKind::Song, "Margaret");
        assert_eq!(image.status, ImageStatus::Pending);
        assert!(image.shows_placeholder());
        assert_eq!(image.alt, "Margaret cover");
    }

    #[test]
    fn test_resolve_found_asset() {
        let store = store(&["music/margaret/cover.png"], false);
        let image = tokio_test::block_on(resolve_image(&store, AssetKind::Song, "Margaret"));
        assert_eq!(image.status, ImageStatus::Loaded);
        assert!(!image.placeholder);
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_missing_asset_falls_back_once() {
        let store = store(&[], false);
        let image = tokio_test::block_on(resolve_image(&store, AssetKind::Logo, "Bleu"));
        assert_eq!(image.status, ImageStatus::Failed);
        assert!(image.placeholder);
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_slug_skips_store_lookup() {
        let store = store(&["books//cover.png", "books/cover.png"], false);
        let image = tokio_test::block_on(resolve_image(&store, AssetKind::Book, "?!"));
        assert_eq!(image.status, ImageStatus::Failed);
        assert!(image.placeholder);
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_resolve_store_error_is_not_surfaced() {
        let store = store(&["works/bleu/logo.png"], true);
        let image = tokio_test::block_on(resolve_image(&store, AssetKind::Logo, "Bleu"));
        assert_eq!(image.status, ImageStatus::Failed);
        assert!(image.shows_placeholder());
    }
}

//! Typed gallery records and the closed category taxonomy.

use serde::{Deserialize, Serialize};

/// Sentinel filter value meaning "every category". Never a record category.
pub const ALL: &str = "all";

/// Category values recognized when neither settings nor the page declare any.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["ux-ui", "web-dev", "graphic", "other"];

/// Opaque handle to a rendered gallery item (its position in document order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

/// One image attached to a gallery item (shown by the lightbox carousel).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Alternative text of the image.
    #[serde(default)]
    pub alt: String,
    /// Caption text (figcaption or `data-caption`), empty when absent.
    #[serde(default)]
    pub caption: String,
}

/// Immutable view of one gallery item, produced once by the record extractor.
///
/// The lowercase search haystack is assembled at construction so matching never
/// re-reads the individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    id: ItemId,
    category: String,
    tags: Vec<String>,
    title: String,
    description: String,
    media: Vec<MediaItem>,
    #[serde(skip)]
    haystack: String,
}

impl ProjectRecord {
    /// What: Build a record from raw item attributes.
    ///
    /// Inputs:
    /// - `id`: Handle of the rendered item
    /// - `category`: Raw category attribute (trimmed and lowercased here)
    /// - `tags`: Raw tags attribute, comma and/or space separated (may be empty)
    /// - `title`, `description`: Display text; absent fields are passed as ""
    ///
    /// Output:
    /// - Record with normalized category and tag set and a precomputed haystack.
    ///
    /// Details:
    /// - The haystack keeps the tags attribute as written (trimmed, lowercased),
    ///   so a search for `"figma, research"` matches `data-tags="Figma, Research"`.
    ///   [`ProjectRecord::tags`] is the parsed set used for display.
    #[must_use]
    pub fn new(id: ItemId, category: &str, tags: &str, title: &str, description: &str) -> Self {
        let category = category.trim().to_lowercase();
        let raw_tags = tags.trim().to_lowercase();
        let tags = parse_tags(tags);
        let title = title.trim().to_string();
        let description = description.trim().to_string();
        let haystack = format!(
            "{} {} {} {}",
            title.to_lowercase(),
            description.to_lowercase(),
            raw_tags,
            category
        );
        Self {
            id,
            category,
            tags,
            title,
            description,
            media: Vec::new(),
            haystack,
        }
    }

    /// Attach the item's media list.
    #[must_use]
    pub fn with_media(mut self, media: Vec<MediaItem>) -> Self {
        self.media = media;
        self
    }

    /// Handle of the rendered item.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Normalized category value (lowercase).
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Lowercase tag set in first-seen order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Title as written on the page.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description as written on the page.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Images attached to the item.
    #[must_use]
    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    /// Lowercase "title description tags category" text used by the matcher.
    #[must_use]
    pub fn haystack(&self) -> &str {
        &self.haystack
    }
}

/// What: Split a raw tags attribute into a lowercase tag set.
///
/// Inputs:
/// - `raw`: Attribute text such as `"Figma, Branding  print"`
///
/// Output:
/// - Distinct lowercase tags in first-seen order; empty input yields no tags.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// The closed set of category values a filter may select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl Taxonomy {
    /// What: Build a taxonomy from category values.
    ///
    /// Inputs:
    /// - `values`: Category values in button order
    ///
    /// Output:
    /// - Taxonomy with trimmed lowercase values; empties, duplicates and the
    ///   `"all"` sentinel are dropped.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<String> = Vec::new();
        for v in values {
            let v = v.as_ref().trim().to_lowercase();
            if v.is_empty() || v == ALL || categories.contains(&v) {
                continue;
            }
            categories.push(v);
        }
        Self { categories }
    }

    /// Real category values, excluding the `"all"` sentinel.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether `value` is a real category of this taxonomy.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.categories.iter().any(|c| c == value)
    }

    /// Whether `value` may be selected as the category filter.
    #[must_use]
    pub fn is_selectable(&self, value: &str) -> bool {
        value == ALL || self.contains(value)
    }

    /// Filter button values in display order: `"all"` first, then each category.
    pub fn buttons(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ALL).chain(self.categories.iter().map(String::as_str))
    }

    /// Whether the taxonomy holds no real categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// What: Human-readable label for a category value.
///
/// Inputs:
/// - `value`: Category value or the `"all"` sentinel
///
/// Output:
/// - Label from the fixed lookup table, or `value` itself when not listed.
#[must_use]
pub fn category_label(value: &str) -> &str {
    match value {
        ALL => "All",
        "ux-ui" => "UX/UI",
        "web-dev" => "Web Dev",
        "graphic" => "Graphic",
        "other" => "Other",
        _ => value,
    }
}

//! Record extractor: scans the rendered work page (or a JSON manifest) once and
//! produces typed records. Downstream code never reads markup again.

use std::fmt;

use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;

use super::record::{ItemId, MediaItem, ProjectRecord};

/// Selector of one gallery item.
pub const ITEM_SELECTOR: &str = ".project-card";

/// Page structure the gallery cannot run without: `(name, selector)`.
pub const REQUIRED_CONTAINERS: [(&str, &str); 6] = [
    ("search input", "#project-search"),
    ("gallery grid", ".projects-grid"),
    ("no-results message", ".no-results"),
    ("results count", ".results-count"),
    ("active filters container", ".active-filters"),
    ("active filters list", ".active-filters-tags"),
];

/// What: Reasons the gallery refuses to initialize from a page.
///
/// Inputs: Produced by [`extract_html`] and [`extract_manifest`].
///
/// Output: Implements `Display`/`Error` for propagation and logging.
///
/// Details:
/// - Every variant means "fail closed": no records are handed out.
#[derive(Debug)]
pub enum ExtractError {
    /// The page holds no gallery items.
    NoItems,
    /// A required container is absent.
    MissingContainer {
        /// Human-readable container name.
        name: &'static str,
        /// CSS selector that found nothing.
        selector: &'static str,
    },
    /// A built-in selector failed to parse.
    Selector(&'static str),
    /// The JSON manifest is malformed.
    Manifest(serde_json::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoItems => write!(f, "page contains no gallery items ({ITEM_SELECTOR})"),
            Self::MissingContainer { name, selector } => {
                write!(f, "page is missing the {name} ({selector})")
            }
            Self::Selector(css) => write!(f, "invalid selector {css:?}"),
            Self::Manifest(err) => write!(f, "invalid project manifest: {err}"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Manifest(err) => Some(err),
            Self::NoItems | Self::MissingContainer { .. } | Self::Selector(_) => None,
        }
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        Self::Manifest(err)
    }
}

/// Optional page controls discovered next to the gallery.
///
/// The default describes a source without page markup (a manifest): every
/// control is available and every category gets a badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControls {
    /// `data-filter` values of the filter buttons, in page order.
    pub filter_buttons: Vec<String>,
    /// `data-count` values of the count badge slots; `None` when the source
    /// has no markup to declare them.
    pub badge_slots: Option<Vec<String>>,
    /// A clear-search control exists.
    pub has_search_clear: bool,
    /// A reset-filters control exists (inside the no-results message).
    pub has_reset: bool,
    /// A clear-all-filters control exists (next to the chips).
    pub has_clear_all: bool,
}

impl Default for PageControls {
    fn default() -> Self {
        Self {
            filter_buttons: Vec::new(),
            badge_slots: None,
            has_search_clear: true,
            has_reset: true,
            has_clear_all: true,
        }
    }
}

impl PageControls {
    /// Whether the category button for `value` carries a count badge.
    #[must_use]
    pub fn shows_badge(&self, value: &str) -> bool {
        self.badge_slots
            .as_ref()
            .is_none_or(|slots| slots.iter().any(|s| s == value))
    }
}

/// Output of one extraction pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Document title, when present.
    pub title: Option<String>,
    /// Records in document order.
    pub records: Vec<ProjectRecord>,
    /// Optional controls found on the page.
    pub controls: PageControls,
}

/// Parse a built-in selector, tagging failures with the CSS text.
fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::Selector(css))
}

/// Text content of an element with whitespace runs collapsed.
fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `css` matches at least one element.
fn exists(document: &Html, css: &'static str) -> Result<bool, ExtractError> {
    let sel = selector(css)?;
    Ok(document.select(&sel).next().is_some())
}

/// `figcaption` text of the `figure` directly wrapping `img`, if any.
fn figure_caption(img: ElementRef<'_>, figcaption_sel: &Selector) -> Option<String> {
    let figure = img
        .parent()
        .and_then(ElementRef::wrap)
        .filter(|p| p.value().name() == "figure")?;
    figure
        .select(figcaption_sel)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
}

/// What: Extract gallery records from a rendered work page.
///
/// Inputs:
/// - `html`: Full HTML document
///
/// Output:
/// - `Ok(ExtractedPage)` with one record per `.project-card`.
/// - `Err(ExtractError)` when there are no items or a required container is missing.
///
/// Details:
/// - Missing `data-tags`, title or description become empty strings.
/// - Images inside a card become its media; the caption comes from
///   `data-caption`, then the `title` attribute, then a wrapping
///   `<figure>`'s `figcaption`.
pub fn extract_html(html: &str) -> Result<ExtractedPage, ExtractError> {
    let document = Html::parse_document(html);
    let item_sel = selector(ITEM_SELECTOR)?;
    let cards: Vec<ElementRef<'_>> = document.select(&item_sel).collect();
    if cards.is_empty() {
        return Err(ExtractError::NoItems);
    }
    for (name, css) in REQUIRED_CONTAINERS {
        if !exists(&document, css)? {
            return Err(ExtractError::MissingContainer {
                name,
                selector: css,
            });
        }
    }

    let title_sel = selector(".project-title")?;
    let desc_sel = selector(".project-description")?;
    let img_sel = selector("img")?;
    let figcaption_sel = selector("figcaption")?;
    let records = cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let el = card.value();
            let title = card.select(&title_sel).next().map(text_of).unwrap_or_default();
            let description = card.select(&desc_sel).next().map(text_of).unwrap_or_default();
            let media = card
                .select(&img_sel)
                .map(|img| {
                    let v = img.value();
                    let caption = v
                        .attr("data-caption")
                        .or_else(|| v.attr("title"))
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty())
                        .or_else(|| figure_caption(img, &figcaption_sel))
                        .unwrap_or_default();
                    MediaItem {
                        alt: v.attr("alt").unwrap_or_default().trim().to_string(),
                        caption,
                    }
                })
                .collect();
            ProjectRecord::new(
                ItemId(idx),
                el.attr("data-category").unwrap_or_default(),
                el.attr("data-tags").unwrap_or_default(),
                &title,
                &description,
            )
            .with_media(media)
        })
        .collect();

    let button_sel = selector(".filter-btn")?;
    let badge_sel = selector(".filter-count")?;
    let doc_title_sel = selector("title")?;
    let controls = PageControls {
        filter_buttons: document
            .select(&button_sel)
            .filter_map(|b| b.value().attr("data-filter"))
            .map(|v| v.trim().to_lowercase())
            .collect(),
        badge_slots: Some(
            document
                .select(&badge_sel)
                .filter_map(|b| b.value().attr("data-count"))
                .map(|v| v.trim().to_lowercase())
                .collect(),
        ),
        has_search_clear: exists(&document, ".search-clear")?,
        has_reset: exists(&document, ".reset-filters-btn")?,
        has_clear_all: exists(&document, ".clear-all-filters")?,
    };
    let title = document
        .select(&doc_title_sel)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty());

    Ok(ExtractedPage {
        title,
        records,
        controls,
    })
}

/// Tags in a manifest may be written as one string or as a list.
#[derive(Deserialize, Default)]
#[serde(untagged)]
enum ManifestTags {
    /// Field absent.
    #[default]
    None,
    /// `"figma, mobile"`.
    Text(String),
    /// `["figma", "mobile"]`.
    List(Vec<String>),
}

impl ManifestTags {
    /// Tags as a single comma-separated string.
    fn joined(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Text(s) => s.clone(),
            Self::List(v) => v.join(", "),
        }
    }
}

/// One project in a JSON manifest.
#[derive(Deserialize)]
struct ManifestEntry {
    /// Category value.
    #[serde(default)]
    category: String,
    /// Tag list in either form.
    #[serde(default)]
    tags: ManifestTags,
    /// Card title.
    #[serde(default)]
    title: String,
    /// Card description.
    #[serde(default)]
    description: String,
    /// Images shown in the lightbox carousel.
    #[serde(default)]
    media: Vec<MediaItem>,
}

/// Manifest root: a bare project list or a titled document.
#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    /// `[ {...}, ... ]`
    Bare(Vec<ManifestEntry>),
    /// `{ "title": ..., "projects": [...] }`
    Titled {
        /// Page title.
        #[serde(default)]
        title: Option<String>,
        /// Projects in display order.
        projects: Vec<ManifestEntry>,
    },
}

/// What: Extract gallery records from a JSON project manifest.
///
/// Inputs:
/// - `json`: Either an array of projects or `{ "title": ..., "projects": [...] }`
///
/// Output:
/// - `Ok(ExtractedPage)` with default (all available) controls; `Err` when malformed or empty.
pub fn extract_manifest(json: &str) -> Result<ExtractedPage, ExtractError> {
    let (title, entries) = match serde_json::from_str::<Manifest>(json)? {
        Manifest::Bare(entries) => (None, entries),
        Manifest::Titled { title, projects } => (title, projects),
    };
    if entries.is_empty() {
        return Err(ExtractError::NoItems);
    }
    let records = entries
        .into_iter()
        .enumerate()
        .map(|(idx, e)| {
            ProjectRecord::new(
                ItemId(idx),
                &e.category,
                &e.tags.joined(),
                &e.title,
                &e.description,
            )
            .with_media(e.media)
        })
        .collect();
    Ok(ExtractedPage {
        title,
        records,
        controls: PageControls::default(),
    })
}

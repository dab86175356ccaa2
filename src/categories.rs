//! Rolling-news categories and their Sina `lid` ids.
//!
//! Every category has one canonical (English) label and one id. The Chinese
//! labels used by the site itself are accepted as aliases on input.

use crate::error::{CrawlerError, Result};
use itertools::Itertools;

/// A rolling-news category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Domestic,
    International,
    Society,
    Sports,
    Entertainment,
    Military,
    Technology,
    Finance,
    Stocks,
    UsStocks,
    DomesticInternational,
    DomesticSociety,
    InternationalSociety,
    DomesticInternationalSociety,
}

impl Category {
    /// The category used when none (or an unrecognised one) is requested.
    pub const DEFAULT: Category = Category::All;

    pub const ALL: [Category; 15] = [
        Category::All,
        Category::Domestic,
        Category::International,
        Category::Society,
        Category::Sports,
        Category::Entertainment,
        Category::Military,
        Category::Technology,
        Category::Finance,
        Category::Stocks,
        Category::UsStocks,
        Category::DomesticInternational,
        Category::DomesticSociety,
        Category::InternationalSociety,
        Category::DomesticInternationalSociety,
    ];

    /// The API's internal category id (`lid`).
    pub fn id(self) -> u32 {
        match self {
            Category::All => 2509,
            Category::Domestic => 2510,
            Category::International => 2511,
            Category::Society => 2669,
            Category::Sports => 2512,
            Category::Entertainment => 2513,
            Category::Military => 2514,
            Category::Technology => 2515,
            Category::Finance => 2516,
            Category::Stocks => 2517,
            Category::UsStocks => 2518,
            Category::DomesticInternational => 2968,
            Category::DomesticSociety => 2970,
            Category::InternationalSociety => 2972,
            Category::DomesticInternationalSociety => 2974,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Domestic => "Domestic",
            Category::International => "International",
            Category::Society => "Society",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Military => "Military",
            Category::Technology => "Technology",
            Category::Finance => "Finance",
            Category::Stocks => "Stocks",
            Category::UsStocks => "UsStocks",
            Category::DomesticInternational => "DomesticInternational",
            Category::DomesticSociety => "DomesticSociety",
            Category::InternationalSociety => "InternationalSociety",
            Category::DomesticInternationalSociety => "DomesticInternationalSociety",
        }
    }

    /// The label the site itself uses.
    pub fn zh_label(self) -> &'static str {
        match self {
            Category::All => "全部",
            Category::Domestic => "国内",
            Category::International => "国际",
            Category::Society => "社会",
            Category::Sports => "体育",
            Category::Entertainment => "娱乐",
            Category::Military => "军事",
            Category::Technology => "科技",
            Category::Finance => "财经",
            Category::Stocks => "股市",
            Category::UsStocks => "美股",
            Category::DomesticInternational => "国内_国际",
            Category::DomesticSociety => "国内_社会",
            Category::InternationalSociety => "国际_社会",
            Category::DomesticInternationalSociety => "国内国际社会",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == label || c.zh_label() == label)
    }

    pub fn from_id(id: u32) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Comma-separated canonical labels, used in error messages.
    pub fn allowed_labels() -> String {
        Category::ALL.iter().map(|c| c.label()).join(", ")
    }
}

/// Look a label up, falling back to the default category for `None` or an
/// unknown label. Never fails.
pub fn lookup_or_default(label: Option<&str>) -> Category {
    let id = label
        .and_then(Category::from_label)
        .unwrap_or(Category::DEFAULT)
        .id();
    // Normalise through the id so every id maps back to its one canonical label.
    Category::from_id(id).unwrap_or(Category::DEFAULT)
}

/// Validate an explicitly supplied label against the allow-list.
pub fn validate(label: &str) -> Result<()> {
    match Category::from_label(label) {
        Some(_) => Ok(()),
        None => Err(CrawlerError::InvalidCategory {
            label: label.to_string(),
            allowed: Category::allowed_labels(),
        }),
    }
}

/// Resolve a caller-supplied category to `(id, canonical_label)`.
///
/// An omitted label resolves to the default category. An explicit label must
/// be one of the known labels, otherwise this returns
/// [`CrawlerError::InvalidCategory`].
pub fn resolve(label: Option<&str>) -> Result<(u32, &'static str)> {
    if let Some(label) = label {
        validate(label)?;
    }
    let category = lookup_or_default(label);
    Ok((category.id(), category.label()))
}

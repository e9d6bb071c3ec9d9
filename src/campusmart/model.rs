use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_CONDITION: &str = "Good";

/// Opaque listing identifier.
///
/// Freshly minted ids are UUID v7 in simple form: a millisecond timestamp prefix
/// followed by random bits. Ids loaded from storage are kept verbatim, whatever
/// their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ListingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Notes,
    Books,
    Services,
    Electronics,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Notes,
        Category::Books,
        Category::Services,
        Category::Electronics,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Notes => "notes",
            Category::Books => "books",
            Category::Services => "services",
            Category::Electronics => "electronics",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: {})",
                    s.trim(),
                    Category::ALL.map(|c| c.as_str()).join(", ")
                )
            })
    }
}

/// A single marketplace offer.
///
/// Field names serialize in camelCase and empty optional fields as `""`, matching
/// the on-disk layout of the listing blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub category: Category,
    pub price: u64,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default)]
    pub description: String,
    pub seller: String,
    pub email: String,
    #[serde(default, with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub image: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

fn default_condition() -> String {
    DEFAULT_CONDITION.to_string()
}

impl Listing {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// Current time truncated to the millisecond precision that survives storage.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.filter(|v| !v.is_empty()))
    }
}

/// Category selection of a view: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Title,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::Title => "title",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortMode::Newest),
            "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            "title" => Ok(SortMode::Title),
            other => Err(format!(
                "unknown sort '{}' (expected newest, price-asc, price-desc or title)",
                other
            )),
        }
    }
}

/// Transient view selection. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
}

impl FilterState {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// The query as it is matched: trimmed and lowercased.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Listing {
        Listing {
            id: ListingId::from("abc123"),
            title: "Calculus Textbook".to_string(),
            category: Category::Books,
            price: 1200,
            condition: "Good".to_string(),
            description: String::new(),
            seller: "Rohit".to_string(),
            email: "rohit@college.edu".to_string(),
            phone: None,
            image: Some("https://example.com/a.jpg".to_string()),
            created_at: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_and_empty_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000_123i64);
        assert_eq!(json["phone"], "");
        assert_eq!(json["category"], "books");
        assert_eq!(json["image"], "https://example.com/a.jpg");
    }

    #[test]
    fn parses_stored_record_with_blank_optionals() {
        let raw = r#"{"id":"k2x9","title":"Notes","category":"notes","price":0,
            "condition":"Like New","description":"","seller":"Ananya",
            "email":"a@college.edu","phone":"","image":"","createdAt":1700000000000}"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.phone, None);
        assert_eq!(listing.image, None);
        assert!(listing.is_free());
    }

    #[test]
    fn missing_condition_defaults_to_good() {
        let raw = r#"{"id":"x","title":"T","category":"other","price":5,
            "seller":"S","email":"e@x","createdAt":1}"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.condition, DEFAULT_CONDITION);
        assert_eq!(listing.description, "");
    }

    #[test]
    fn rejects_out_of_set_category_and_negative_price() {
        let bad_category = r#"{"id":"x","title":"T","category":"furniture","price":5,
            "seller":"S","email":"e@x","createdAt":1}"#;
        assert!(serde_json::from_str::<Listing>(bad_category).is_err());

        let bad_price = r#"{"id":"x","title":"T","category":"other","price":-5,
            "seller":"S","email":"e@x","createdAt":1}"#;
        assert!(serde_json::from_str::<Listing>(bad_price).is_err());
    }

    #[test]
    fn category_parsing_is_case_insensitive() {
        assert_eq!("Books".parse::<Category>().unwrap(), Category::Books);
        assert_eq!(" services ".parse::<Category>().unwrap(), Category::Services);
        assert!("furniture".parse::<Category>().is_err());
    }

    #[test]
    fn category_filter_parses_all() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "notes".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Notes)
        );
        assert!(CategoryFilter::All.admits(Category::Other));
        assert!(!CategoryFilter::Only(Category::Notes).admits(Category::Books));
    }

    #[test]
    fn sort_mode_round_trips_through_strings() {
        for mode in [
            SortMode::Newest,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::Title,
        ] {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
        assert!("cheapest".parse::<SortMode>().is_err());
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = ListingId::generate();
        let b = ListingId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn query_is_normalized_for_matching() {
        assert_eq!(FilterState::default().with_query("   ").normalized_query(), "");
        assert_eq!(
            FilterState::default().with_query("  PhYsics ").normalized_query(),
            "physics"
        );
    }
}

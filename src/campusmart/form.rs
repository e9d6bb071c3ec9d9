//! # Form Adapter
//!
//! Turns raw, untrusted form input into a [`Listing`]. All fields arrive as text,
//! the way a UI collects them:
//!
//! - Every field is trimmed. Blank optional fields become absent.
//! - `price` is parsed as a number, rounded to the nearest integer and clamped at 0.
//!   Blank or non-numeric input counts as 0 (a free listing).
//! - `condition` defaults to "Good", `category` to `other`. Category text outside
//!   the fixed set is rejected.
//! - `title`, `seller` and `email` are required.
//!
//! A rejected form never produces a record, so nothing invalid reaches the store.

use crate::model::{now_millis, Category, Listing, ListingId, DEFAULT_CONDITION};
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Seller,
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Title => f.write_str("title"),
            RequiredField::Seller => f.write_str("seller"),
            RequiredField::Email => f.write_str("email"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(RequiredField),

    #[error("{0}")]
    UnknownCategory(String),
}

/// Raw form input, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    /// Present when editing an existing listing.
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    pub price: String,
    pub condition: String,
    pub description: String,
    pub seller: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

impl ListingForm {
    /// Prefills a form from a stored listing, as an edit dialog would.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            id: Some(listing.id.to_string()),
            title: listing.title.clone(),
            category: listing.category.to_string(),
            price: listing.price.to_string(),
            condition: listing.condition.clone(),
            description: listing.description.clone(),
            seller: listing.seller.clone(),
            email: listing.email.clone(),
            phone: listing.phone.clone().unwrap_or_default(),
            image: listing.image.clone().unwrap_or_default(),
        }
    }

    /// The supplied id, if any. Blank counts as none.
    pub fn supplied_id(&self) -> Option<ListingId> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ListingId::from)
    }

    /// Validates and normalizes into a listing stamped with the current time.
    pub fn into_listing(self) -> Result<Listing, ValidationError> {
        self.into_listing_at(now_millis())
    }

    /// Like [`ListingForm::into_listing`], with an explicit creation time.
    ///
    /// The store ignores `created_at` on the edit path and keeps the original.
    pub fn into_listing_at(self, created_at: DateTime<Utc>) -> Result<Listing, ValidationError> {
        let title = required(&self.title, RequiredField::Title)?;
        let seller = required(&self.seller, RequiredField::Seller)?;
        let email = required(&self.email, RequiredField::Email)?;

        let category = match self.category.trim() {
            "" => Category::Other,
            text => text
                .parse::<Category>()
                .map_err(ValidationError::UnknownCategory)?,
        };

        let condition = match self.condition.trim() {
            "" => DEFAULT_CONDITION.to_string(),
            text => text.to_string(),
        };

        Ok(Listing {
            id: self.supplied_id().unwrap_or_else(ListingId::generate),
            title,
            category,
            price: coerce_price(&self.price),
            condition,
            description: self.description.trim().to_string(),
            seller,
            email,
            phone: optional(&self.phone),
            image: optional(&self.image),
            created_at,
        })
    }
}

/// Field-by-field changes to an existing listing. `None` keeps the current value;
/// `Some("")` clears an optional field (and fails validation for a required one).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub seller: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

impl ListingPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlays the patch on a (usually prefilled) form.
    pub fn apply_to(self, form: &mut ListingForm) {
        let fields = [
            (self.title, &mut form.title),
            (self.category, &mut form.category),
            (self.price, &mut form.price),
            (self.condition, &mut form.condition),
            (self.description, &mut form.description),
            (self.seller, &mut form.seller),
            (self.email, &mut form.email),
            (self.phone, &mut form.phone),
            (self.image, &mut form.image),
        ];
        for (change, slot) in fields {
            if let Some(value) = change {
                *slot = value;
            }
        }
    }
}

/// The required-field rule every stored listing obeys, wherever it came from.
pub fn check_required(listing: &Listing) -> Result<(), ValidationError> {
    let missing = [
        (RequiredField::Title, &listing.title),
        (RequiredField::Seller, &listing.seller),
        (RequiredField::Email, &listing.email),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty());

    match missing {
        Some((field, _)) => Err(ValidationError::MissingField(field)),
        None => Ok(()),
    }
}

fn required(value: &str, field: RequiredField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Rounds to the nearest integer and clamps at zero. Anything unparseable is 0.
pub fn coerce_price(raw: &str) -> u64 {
    match raw.trim().parse::<f64>() {
        // `as` saturates, so huge values clamp to u64::MAX.
        Ok(n) if n.is_finite() => n.round().max(0.0) as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ListingForm {
        ListingForm {
            title: "  Desk Lamp ".into(),
            category: "electronics".into(),
            price: "249.6".into(),
            condition: "".into(),
            description: " Warm light ".into(),
            seller: " Meera ".into(),
            email: " meera@college.edu ".into(),
            phone: "   ".into(),
            image: "".into(),
            ..Default::default()
        }
    }

    #[test]
    fn normalizes_valid_input() {
        let listing = valid_form().into_listing().unwrap();
        assert_eq!(listing.title, "Desk Lamp");
        assert_eq!(listing.category, Category::Electronics);
        assert_eq!(listing.price, 250);
        assert_eq!(listing.condition, "Good");
        assert_eq!(listing.description, "Warm light");
        assert_eq!(listing.seller, "Meera");
        assert_eq!(listing.email, "meera@college.edu");
        assert_eq!(listing.phone, None);
        assert_eq!(listing.image, None);
    }

    #[test]
    fn price_coercion() {
        assert_eq!(coerce_price(""), 0);
        assert_eq!(coerce_price("abc"), 0);
        assert_eq!(coerce_price("-40"), 0);
        assert_eq!(coerce_price("-0.4"), 0);
        assert_eq!(coerce_price("2.5"), 3);
        assert_eq!(coerce_price("2.4"), 2);
        assert_eq!(coerce_price(" 1200 "), 1200);
        assert_eq!(coerce_price("NaN"), 0);
        assert_eq!(coerce_price("inf"), 0);
        assert_eq!(coerce_price("1e30"), u64::MAX);
    }

    #[test]
    fn rejects_blank_required_fields_in_order() {
        let mut form = valid_form();
        form.title = "   ".into();
        form.email = "".into();
        assert_eq!(
            form.into_listing(),
            Err(ValidationError::MissingField(RequiredField::Title))
        );

        let mut form = valid_form();
        form.seller = "".into();
        assert_eq!(
            form.into_listing(),
            Err(ValidationError::MissingField(RequiredField::Seller))
        );

        let mut form = valid_form();
        form.email = "\t".into();
        assert_eq!(
            form.into_listing(),
            Err(ValidationError::MissingField(RequiredField::Email))
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut form = valid_form();
        form.category = "furniture".into();
        assert!(matches!(
            form.into_listing(),
            Err(ValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn blank_category_defaults_to_other() {
        let mut form = valid_form();
        form.category = " ".into();
        assert_eq!(form.into_listing().unwrap().category, Category::Other);
    }

    #[test]
    fn new_id_only_when_none_supplied() {
        let fresh = valid_form().into_listing().unwrap();
        assert_eq!(fresh.id.as_str().len(), 32);

        let mut form = valid_form();
        form.id = Some(" abc123 ".into());
        assert_eq!(form.into_listing().unwrap().id, ListingId::from("abc123"));

        let mut form = valid_form();
        form.id = Some("".into());
        assert_eq!(form.supplied_id(), None);
    }

    #[test]
    fn patch_overrides_only_given_fields() {
        let original = valid_form().into_listing().unwrap();
        let mut form = ListingForm::from_listing(&original);
        ListingPatch {
            price: Some("0".into()),
            phone: Some("12345".into()),
            ..Default::default()
        }
        .apply_to(&mut form);

        let edited = form.into_listing_at(original.created_at).unwrap();
        assert_eq!(edited.price, 0);
        assert_eq!(edited.phone.as_deref(), Some("12345"));
        assert_eq!(edited.title, original.title);
        assert_eq!(edited.id, original.id);
    }

    #[test]
    fn check_required_reports_first_blank_field() {
        let mut listing = valid_form().into_listing().unwrap();
        assert_eq!(check_required(&listing), Ok(()));

        listing.seller = " ".into();
        listing.email = String::new();
        assert_eq!(
            check_required(&listing),
            Err(ValidationError::MissingField(RequiredField::Seller))
        );
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ListingPatch::default().is_empty());
        assert!(!ListingPatch {
            title: Some("x".into()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn prefilled_form_round_trips_a_listing() {
        let original = valid_form().into_listing().unwrap();
        let rebuilt = ListingForm::from_listing(&original)
            .into_listing_at(original.created_at)
            .unwrap();
        assert_eq!(rebuilt, original);
    }
}

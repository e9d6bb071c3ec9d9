//! Terminal output for command results.
//!
//! Every `render_*` function returns a `String` so it can be tested without a
//! terminal; the `print_*` wrappers write to stdout.

use campusmart::api::{CmdMessage, ContactCard, MessageLevel};
use campusmart::config::{MarketConfig, CONFIG_KEYS};
use campusmart::format::format_price;
use campusmart::index::DisplayListing;
use chrono::{DateTime, Utc};
use colored::*;
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 60;
const TIME_WIDTH: usize = 16;
const PRICE_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 13;
const FREE_MARKER: &str = "★";

/// Usable line width: the terminal's, capped at `LINE_WIDTH`.
pub fn line_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
        .clamp(MIN_LINE_WIDTH, LINE_WIDTH)
}

pub fn render_listing_list(listings: &[DisplayListing], currency: &str, width: usize) -> String {
    let mut output = String::new();

    for dl in listings {
        let idx_str = format!("{:>3}. ", dl.index);
        let marker = if dl.listing.is_free() {
            format!("{} ", FREE_MARKER)
        } else {
            "  ".to_string()
        };
        let category = format!("{:<width$}", dl.listing.category, width = CATEGORY_WIDTH);
        let price = format!(
            "{:>width$}",
            format_price(dl.listing.price, currency),
            width = PRICE_WIDTH
        );
        let time_ago = format_time_ago(dl.listing.created_at);

        let fixed_width =
            idx_str.width() + marker.width() + CATEGORY_WIDTH + PRICE_WIDTH + TIME_WIDTH + 2;
        let available = width.saturating_sub(fixed_width);
        let title = truncate_to_width(&dl.listing.title, available);
        let padding = available.saturating_sub(title.width());

        let price_colored = if dl.listing.is_free() {
            price.green()
        } else {
            price.normal()
        };

        output.push_str(&format!(
            "{}{}{}{} {}{} {}\n",
            idx_str.yellow(),
            marker.green(),
            title,
            " ".repeat(padding),
            category.cyan(),
            price_colored,
            time_ago.dimmed()
        ));
    }

    output
}

pub fn render_listing_details(listings: &[DisplayListing], currency: &str) -> String {
    let mut output = String::new();

    for (i, dl) in listings.iter().enumerate() {
        if i > 0 {
            output.push_str("\n================================\n\n");
        }
        let listing = &dl.listing;
        output.push_str(&format!(
            "{} {}\n",
            format!("{}.", dl.index).yellow(),
            listing.title.bold()
        ));
        output.push_str("--------------------------------\n");
        output.push_str(&field("Price", &format_price(listing.price, currency)));
        output.push_str(&field("Category", listing.category.as_str()));
        output.push_str(&field("Condition", &listing.condition));
        output.push_str(&field("Seller", &listing.seller));
        output.push_str(&field("Email", &listing.email));
        if let Some(phone) = &listing.phone {
            output.push_str(&field("Phone", phone));
        }
        if let Some(image) = &listing.image {
            output.push_str(&field("Image", image));
        }
        output.push_str(&field("Posted", format_time_ago(listing.created_at).trim()));
        output.push_str(&field("Id", listing.id.as_str()));
        if !listing.description.is_empty() {
            output.push('\n');
            output.push_str(&listing.description);
            output.push('\n');
        }
    }

    output
}

fn field(label: &str, value: &str) -> String {
    format!("{:<10} {}\n", format!("{}:", label).dimmed(), value)
}

pub fn render_contact(card: &ContactCard) -> String {
    let mut output = String::new();
    output.push_str(&field("Seller", &card.seller));
    output.push_str(&field("Email", &card.email));
    if let Some(phone) = &card.phone {
        output.push_str(&field("Phone", phone));
    }
    output
}

pub fn render_config(config: &MarketConfig) -> String {
    CONFIG_KEYS
        .iter()
        .map(|key| {
            format!(
                "{} = {}\n",
                key,
                config.get(key).unwrap_or_default()
            )
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusmart::index::index_listings;
    use campusmart::model::now_millis;
    use campusmart::samples::sample_listings;

    fn samples() -> Vec<DisplayListing> {
        index_listings(&sample_listings(now_millis()))
    }

    #[test]
    fn test_list_has_one_line_per_listing() {
        let output = render_listing_list(&samples(), "₹", LINE_WIDTH);
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("1. "));
        assert!(output.contains("Free"));
        assert!(output.contains("₹1,200"));
        assert!(output.contains("hours ago") || output.contains("hour ago"));
    }

    #[test]
    fn test_list_of_nothing_is_empty() {
        assert_eq!(render_listing_list(&[], "₹", LINE_WIDTH), "");
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let mut listings = samples();
        listings[0].listing.title = "x".repeat(300);
        let output = render_listing_list(&listings, "₹", MIN_LINE_WIDTH);
        assert!(output.contains('…'));
        assert!(!output.contains(&"x".repeat(300)));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_details_show_optional_fields_only_when_present() {
        let listings = samples();
        let notes = render_listing_details(&listings[0..1], "₹");
        assert!(notes.contains("ananya@college.edu"));
        assert!(!notes.contains("Phone"));

        let book = render_listing_details(&listings[1..2], "₹");
        assert!(book.contains("9876543210"));
        assert!(book.contains("Slightly highlighted"));
    }

    #[test]
    fn test_render_config_lists_every_key() {
        let output = render_config(&MarketConfig::default());
        assert!(output.contains("storage-key = cmp_listings_v1"));
        assert!(output.contains("default-sort = newest"));
        assert_eq!(output.lines().count(), CONFIG_KEYS.len());
    }

    #[test]
    fn test_render_messages_one_per_line() {
        let output = render_messages(&[CmdMessage::info("a"), CmdMessage::warning("b")]);
        assert_eq!(output.lines().count(), 2);
    }
}

//! Demonstration listings used to onboard an empty marketplace.

use crate::model::{Category, Listing, ListingId};
use chrono::{DateTime, Duration, Utc};

/// Builds the demonstration set with fresh ids, timestamped relative to `now`.
///
/// Order is the order they are stored in: the notes (two hours old), the textbook
/// (a day old), then the tutoring offer (thirty minutes old).
pub fn sample_listings(now: DateTime<Utc>) -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId::generate(),
            title: "Data Structures Notes - CS 201".to_string(),
            category: Category::Notes,
            price: 0,
            condition: "Like New".to_string(),
            description: "Concise notes covering arrays, linked lists, stacks, queues, trees, and graphs. Includes solved examples.".to_string(),
            seller: "Ananya".to_string(),
            email: "ananya@college.edu".to_string(),
            phone: None,
            image: Some("https://images.unsplash.com/photo-1517849845537-4d257902454a?q=80&w=1200&auto=format&fit=crop".to_string()),
            created_at: now - Duration::hours(2),
        },
        Listing {
            id: ListingId::generate(),
            title: "Calculus Textbook (Thomas, 14th Ed.)".to_string(),
            category: Category::Books,
            price: 1200,
            condition: "Good".to_string(),
            description: "Slightly highlighted. Great for first-year engineering math.".to_string(),
            seller: "Rohit".to_string(),
            email: "rohit@college.edu".to_string(),
            phone: Some("9876543210".to_string()),
            image: Some("https://images.unsplash.com/photo-1513475382585-d06e58bcb0ea?q=80&w=1200&auto=format&fit=crop".to_string()),
            created_at: now - Duration::hours(24),
        },
        Listing {
            id: ListingId::generate(),
            title: "Physics Tutoring (Mechanics)".to_string(),
            category: Category::Services,
            price: 300,
            condition: "Like New".to_string(),
            description: "1-hour sessions, evenings and weekends. Focus on problem-solving and past papers.".to_string(),
            seller: "Sneha".to_string(),
            email: "sneha@college.edu".to_string(),
            phone: None,
            image: Some("https://images.unsplash.com/photo-1516321497487-e288fb19713f?q=80&w=1200&auto=format&fit=crop".to_string()),
            created_at: now - Duration::minutes(30),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn samples_have_unique_ids() {
        let samples = sample_listings(Utc::now());
        let ids: HashSet<_> = samples.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), samples.len());
    }

    #[test]
    fn samples_are_timestamped_relative_to_now() {
        let now = Utc::now();
        let samples = sample_listings(now);
        assert_eq!(samples[0].created_at, now - Duration::hours(2));
        assert_eq!(samples[1].created_at, now - Duration::hours(24));
        assert_eq!(samples[2].created_at, now - Duration::minutes(30));
    }
}

use campusmart::form::{ListingForm, ListingPatch};
use campusmart::model::{CategoryFilter, SortMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "campusmart", bin_name = "campusmart", version)]
#[command(about = "Buy, sell and swap with your campus from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding listings and config (defaults to $CAMPUSMART_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse listings
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Case-insensitive search in title, description and seller
        #[arg(short, long)]
        query: Option<String>,

        /// Only this category (notes, books, services, electronics, other or all)
        #[arg(short, long)]
        category: Option<CategoryFilter>,

        /// Sort order (newest, price-asc, price-desc, title)
        #[arg(short, long)]
        sort: Option<SortMode>,
    },

    /// Show full details of one or more listings
    #[command(alias = "v", display_order = 2)]
    View {
        /// Listing indexes or ids (e.g. 1 3 0192f3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Post a new listing
    #[command(alias = "n", display_order = 3)]
    New {
        #[command(flatten)]
        fields: ListingArgs,
    },

    /// Change fields of a listing; anything not given is kept
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Listing index or id
        selector: String,

        #[command(flatten)]
        fields: ListingArgs,
    },

    /// Delete one or more listings
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Listing indexes or ids (e.g. 1 3 0192f3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Replace all listings with a set of samples
    #[command(display_order = 6)]
    Seed,

    /// Show how to reach a seller
    #[command(alias = "c", display_order = 7)]
    Contact {
        /// Listing index or id
        selector: String,

        /// Also copy "seller | email | phone" to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (storage-key, currency, default-sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Listing fields as command-line flags.
#[derive(Args, Debug, Default, Clone)]
pub struct ListingArgs {
    #[arg(short, long)]
    pub title: Option<String>,

    /// notes, books, services, electronics or other
    #[arg(short, long)]
    pub category: Option<String>,

    /// Price in whole units; 0 means free
    #[arg(short, long)]
    pub price: Option<String>,

    /// e.g. "Like New" (defaults to "Good")
    #[arg(long)]
    pub condition: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub seller: Option<String>,

    #[arg(short, long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl ListingArgs {
    /// Missing flags become empty fields, which validation then judges.
    pub fn into_form(self) -> ListingForm {
        ListingForm {
            id: None,
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            condition: self.condition.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            seller: self.seller.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        }
    }

    pub fn into_patch(self) -> ListingPatch {
        ListingPatch {
            title: self.title,
            category: self.category,
            price: self.price,
            condition: self.condition,
            description: self.description,
            seller: self.seller,
            email: self.email,
            phone: self.phone,
            image: self.image,
        }
    }
}

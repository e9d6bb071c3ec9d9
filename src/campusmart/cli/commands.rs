use super::render::{
    line_width, print_messages, render_config, render_contact, render_listing_details,
    render_listing_list,
};
use super::setup::{Cli, Commands, ListingArgs};
use campusmart::api::{configure, CmdMessage, ConfigAction, EditInput, MarketApi};
use campusmart::clipboard::copy_to_clipboard;
use campusmart::config::MarketConfig;
use campusmart::error::{MarketError, Result};
use campusmart::model::{CategoryFilter, FilterState, SortMode};
use campusmart::store::fs_backend::FsBackend;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "CAMPUSMART_HOME";

struct AppContext {
    api: MarketApi<FsBackend>,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let mut ctx = init_context(data_dir);

    match cli.command {
        Some(Commands::List {
            query,
            category,
            sort,
        }) => handle_list(&ctx, query, category, sort),
        Some(Commands::View { selectors }) => handle_view(&ctx, selectors),
        Some(Commands::New { fields }) => handle_new(&mut ctx, fields),
        Some(Commands::Edit { selector, fields }) => handle_edit(&mut ctx, selector, fields),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Contact { selector, copy }) => handle_contact(&ctx, selector, copy),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None, None),
    }
}

/// Logs go to stderr so they never mix with listing output. `RUST_LOG` wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "campusmart=debug"
    } else {
        "campusmart=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--data-dir`, then `$CAMPUSMART_HOME`, then the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "campusmart", "campusmart")
        .map(|proj| proj.data_dir().to_path_buf())
        .ok_or_else(|| {
            MarketError::Config(format!(
                "Could not determine a data directory; set {} or pass --data-dir",
                HOME_ENV
            ))
        })
}

fn init_context(data_dir: PathBuf) -> AppContext {
    let config = match MarketConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable config, using defaults");
            MarketConfig::default()
        }
    };
    let api = MarketApi::open(FsBackend::new(data_dir.clone()), config);
    AppContext { api, data_dir }
}

fn handle_list(
    ctx: &AppContext,
    query: Option<String>,
    category: Option<CategoryFilter>,
    sort: Option<SortMode>,
) -> Result<()> {
    let filters = FilterState::default()
        .with_query(query.unwrap_or_default())
        .with_category(category.unwrap_or_default())
        .with_sort(sort.unwrap_or(ctx.api.config().default_sort));

    let result = ctx.api.view(&filters)?;
    print!(
        "{}",
        render_listing_list(
            &result.listed_listings,
            &ctx.api.config().currency_symbol,
            line_width()
        )
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.details(&selectors)?;
    print!(
        "{}",
        render_listing_details(&result.listed_listings, &ctx.api.config().currency_symbol)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext, fields: ListingArgs) -> Result<()> {
    let result = ctx.api.create(fields.into_form())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: String, fields: ListingArgs) -> Result<()> {
    let patch = fields.into_patch();
    if patch.is_empty() {
        print_messages(&[CmdMessage::info(
            "Nothing to change; pass at least one field flag (see --help)",
        )]);
        return Ok(());
    }
    let result = ctx.api.edit(&selector, EditInput::Patch(patch))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.remove(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed_samples()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_contact(ctx: &AppContext, selector: String, copy: bool) -> Result<()> {
    let result = ctx.api.contact(&selector)?;
    if let Some(card) = &result.contact {
        print!("{}", render_contact(card));
        if copy {
            match copy_to_clipboard(&card.clipboard_line) {
                Ok(()) => print_messages(&[CmdMessage::success("Contact copied to clipboard")]),
                Err(e) => {
                    tracing::debug!(error = %e, "clipboard copy failed");
                    print_messages(&[CmdMessage::warning(format!(
                        "Could not copy to clipboard: {}",
                        card.clipboard_line
                    ))]);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = configure(&ctx.data_dir, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

//! # CLI Layer
//!
//! One client of the MakerStack library. This is the only code that knows
//! about the terminal: it parses arguments, builds the [`AppContext`],
//! dispatches to [`SiteApi`] and renders the returned `CmdResult`.
//!
//! - `run()`: dispatch, called by `main.rs`
//! - `init_context()`: config directory, config file, catalog
//! - `handle_*()`: one per subcommand

use super::logging;
use super::render::{
    print_messages, render_config, render_detail, render_header, render_hits, render_reading,
    render_sections, render_topics, LINE_WIDTH,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use makerstack::api::{CmdMessage, ConfigAction, SiteApi};
use makerstack::commands::list::ListOptions;
use makerstack::commands::read::ReadOptions;
use makerstack::commands::search::to_hits;
use makerstack::commands::subscribe::failure_messages;
use makerstack::config::{SiteConfig, CONFIG_DIR_ENV};
use makerstack::error::{MakerError, Result};
use makerstack::filter::ContentQuery;
use makerstack::model::{ContentItem, SearchField};
use makerstack::navigation::{Layout, Navigator, Section};
use makerstack::session::SearchSession;
use makerstack::store::SiteCatalog;
use makerstack::subscription::{SimulatedGateway, Subscriber};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

struct AppContext {
    api: SiteApi<SiteCatalog>,
    config: SiteConfig,
    navigator: Navigator,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    tracing::debug!(command = ?cli.command, "dispatch");

    match cli.command {
        Some(Commands::List {
            section,
            category,
            layout,
        }) => handle_list(&mut ctx, section, category, layout),
        Some(Commands::Search {
            query,
            fields,
            category,
            section,
        }) => handle_search(&mut ctx, query, fields, category, section),
        Some(Commands::View { id, toc }) => handle_view(&mut ctx, &id, toc),
        Some(Commands::Read { id, offset, height }) => handle_read(&mut ctx, &id, offset, height),
        Some(Commands::Browse) => handle_browse(&mut ctx).await,
        Some(Commands::Subscribe { email }) => handle_subscribe(&mut ctx, &email).await,
        Some(Commands::SignIn { email, password }) => handle_sign_in(&mut ctx, &email, &password),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Sections) => handle_sections(&mut ctx),
        Some(Commands::Topics) => handle_topics(&mut ctx),
        None => handle_list(&mut ctx, None, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = match SiteConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, dir = %config_dir.display(), "ignoring unreadable config");
            SiteConfig::default()
        }
    };

    let catalog = SiteCatalog::open(cli.catalog.clone());
    let navigator = Navigator::new(config.site_options());

    Ok(AppContext {
        api: SiteApi::new(catalog, config_dir),
        config,
        navigator,
    })
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "makerstack", "makerstack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MakerError::Config("Could not determine config dir".to_string()))
}

/// (rows, columns), falling back to a fixed width when not on a terminal.
fn terminal_size() -> (usize, usize) {
    Term::stdout()
        .size_checked()
        .map(|(rows, cols)| (rows as usize, cols as usize))
        .unwrap_or((24, LINE_WIDTH))
}

fn handle_list(
    ctx: &mut AppContext,
    section: Option<Section>,
    category: Option<String>,
    layout: Option<Layout>,
) -> Result<()> {
    let options = ListOptions { section, category };
    let result = ctx.api.list(&options)?;

    let (_, width) = terminal_size();
    let layout = layout.unwrap_or(ctx.navigator.options().layout);
    print!("{}", render_header(ctx.navigator.options(), None));
    println!();
    print!("{}", render_hits(&to_hits(result.listed_items, ""), layout, width));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    ctx: &mut AppContext,
    query: String,
    fields: Vec<SearchField>,
    category: Option<String>,
    section: Option<Section>,
) -> Result<()> {
    let mut content_query = ContentQuery::text(query).with_fields(fields);
    if let Some(category) = category {
        content_query = content_query.with_category(category);
    }
    if let Some(section) = section {
        content_query = content_query.with_kind(section.kind());
    }

    let result = ctx.api.search(&content_query)?;
    let (_, width) = terminal_size();
    print!(
        "{}",
        render_hits(&result.hits, ctx.navigator.options().layout, width)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: &str, toc: bool) -> Result<()> {
    let result = ctx.api.view(&mut ctx.navigator, id)?;
    if let Some(detail) = &result.detail {
        let (_, width) = terminal_size();
        print!("{}", render_detail(detail, toc, width.min(ctx.config.reading_width)));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_read(
    ctx: &mut AppContext,
    id: &str,
    offset: usize,
    height: Option<usize>,
) -> Result<()> {
    let (rows, cols) = terminal_size();
    let options = ReadOptions {
        offset,
        // Leave room for the progress bar and footer.
        height: height.unwrap_or_else(|| rows.saturating_sub(6).max(5)),
        width: cols.min(ctx.config.reading_width),
    };

    let result = ctx.api.read(id, &options)?;
    if let Some(window) = &result.reading {
        print!("{}", render_reading(window));
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let items = ctx.api.items()?;
    let layout = ctx.navigator.options().layout;
    let (_, width) = terminal_size();

    let mut session = SearchSession::new(items, ContentQuery::default(), ctx.config.search_debounce());
    let mut state = session.subscribe();
    let mut shown = session.recomputations();

    print!("{}", render_header(ctx.navigator.options(), None));
    println!();
    print!("{}", render_hits(&to_hits(session.state().last_computed_results, ""), layout, width));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_browse_line(ctx, &mut session, line.trim(), layout, width)? {
                    return Ok(());
                }
            }
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                // Mark seen even when only the query moved, or changed() fires again.
                let current = state.borrow_and_update().clone();
                if session.recomputations() != shown {
                    shown = session.recomputations();
                    print_browse_results(&current.query, current.last_computed_results, layout, width);
                }
            }
        }
    }

    // Input ended: let the last keystroke land before exiting.
    session.settle().await;
    if session.recomputations() != shown {
        let current = session.state();
        print_browse_results(&current.query, current.last_computed_results, layout, width);
    }
    Ok(())
}

/// Returns false when the user asked to quit.
fn handle_browse_line(
    ctx: &mut AppContext,
    session: &mut SearchSession,
    line: &str,
    layout: Layout,
    width: usize,
) -> Result<bool> {
    match line {
        ":quit" | ":q" => return Ok(false),
        ":back" => {
            if ctx.navigator.back() {
                let current = session.state();
                print_browse_results(&current.query, current.last_computed_results, layout, width);
            }
        }
        ":clear" => {
            session.clear();
            let current = session.state();
            print_browse_results("", current.last_computed_results, layout, width);
        }
        "" => session.flush(),
        _ => {
            if let Some(id) = line.strip_prefix(":open ") {
                let result = ctx.api.view(&mut ctx.navigator, id.trim())?;
                if let Some(detail) = &result.detail {
                    print!("{}", render_detail(detail, true, width.min(ctx.config.reading_width)));
                }
                print_messages(&result.messages);
            } else if line.starts_with(':') {
                print_messages(&[CmdMessage::warning(format!(
                    "Unknown command: {} (try :open ID, :back, :clear, :quit)",
                    line
                ))]);
            } else {
                session.set_query(line);
            }
        }
    }
    Ok(true)
}

fn print_browse_results(
    query: &str,
    items: Vec<ContentItem>,
    layout: Layout,
    width: usize,
) {
    println!();
    if query.is_empty() {
        println!("── all content ({}) ──", items.len());
    } else {
        println!("── results for '{}' ({}) ──", query, items.len());
    }
    if items.is_empty() {
        print_messages(&[CmdMessage::info("No content found.")]);
        return;
    }
    print!("{}", render_hits(&to_hits(items, query), layout, width));
}

async fn handle_subscribe(ctx: &mut AppContext, email: &str) -> Result<()> {
    let gateway = SimulatedGateway::new(ctx.config.subscribe_delay());
    let mut subscriber = Subscriber::new(gateway, ctx.config.submit_policy());

    match ctx
        .api
        .subscribe(&mut subscriber, &ctx.config.brand, email)
        .await
    {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e @ MakerError::Submission(_)) => {
            print_messages(&failure_messages(&subscriber.attempt()));
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn handle_sign_in(ctx: &mut AppContext, email: &str, password: &str) -> Result<()> {
    let result = ctx.api.sign_in(email, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_sections(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sections()?;
    print!("{}", render_header(ctx.navigator.options(), None));
    println!();
    print!("{}", render_sections(&result.sections, None));
    Ok(())
}

fn handle_topics(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.topics()?;
    print!("{}", render_topics(&result.topics, None));
    Ok(())
}

use clap::{ArgAction, Parser, Subcommand};
use makerstack::model::SearchField;
use makerstack::navigation::{Layout, Section};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "makerstack", bin_name = "makerstack", version)]
#[command(about = "Articles, playbooks and tools for indie makers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (JSON array of items) to use instead of the built-in content
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show content cards
    #[command(alias = "ls")]
    List {
        /// Only one section (featured, articles, playbooks, tools)
        #[arg(short, long)]
        section: Option<Section>,

        /// Only one topic, exactly as `makerstack topics` prints it ("All" shows every topic)
        #[arg(short, long)]
        category: Option<String>,

        /// Card layout, overriding the configured one
        #[arg(short, long)]
        layout: Option<Layout>,
    },

    /// Search content and highlight matches
    #[command(alias = "find")]
    Search {
        query: String,

        /// Field to search (title, description, category, author, body); repeatable
        #[arg(short, long = "field")]
        fields: Vec<SearchField>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        section: Option<Section>,
    },

    /// Open the detail view of an item
    #[command(alias = "open")]
    View {
        id: String,

        /// Print the table of contents
        #[arg(long)]
        toc: bool,
    },

    /// Read an item with a progress bar
    Read {
        id: String,

        /// First line to show
        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        /// Lines to show (defaults to the terminal height)
        #[arg(long)]
        height: Option<usize>,
    },

    /// Interactive search: each stdin line is a query (:open ID, :back, :clear, :quit)
    Browse,

    /// Subscribe to the newsletter
    Subscribe { email: String },

    /// Sign in (demo only)
    #[command(alias = "login")]
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Show or set site configuration
    Config {
        key: Option<String>,
        value: Option<String>,
    },

    /// Show the navigation menu
    Sections,

    /// List the topics accepted by --category
    #[command(alias = "categories")]
    Topics,
}

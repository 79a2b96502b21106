//! # API Facade
//!
//! [`SiteApi`] is the single entry point for every site operation, whatever
//! the client. It dispatches to `commands/*.rs`, returns `Result<CmdResult>`
//! and never touches stdout, stderr or the process exit code.
//!
//! `SiteApi<S: ContentStore>` is generic over where content comes from:
//! the built-in catalog and in-memory fixtures in tests, a JSON file in
//! production setups.
//!
//! Stateful pieces (the [`Navigator`], a [`Subscriber`]) are owned by the
//! client and passed in, so one API value can serve several views.

use crate::commands;
use crate::commands::list::ListOptions;
use crate::commands::read::ReadOptions;
use crate::error::Result;
use crate::filter::ContentQuery;
use crate::model::ContentItem;
use crate::navigation::Navigator;
use crate::store::ContentStore;
use crate::subscription::{Subscriber, SubscriptionGateway};
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct SiteApi<S: ContentStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: ContentStore> SiteApi<S> {
    pub fn new(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            config_dir: config_dir.into(),
        }
    }

    /// The whole catalog, for clients that filter on their own (search sessions).
    pub fn items(&self) -> Result<Vec<ContentItem>> {
        self.store.list_items()
    }

    pub fn list(&self, options: &ListOptions) -> Result<CmdResult> {
        commands::list::run(&self.store, options)
    }

    pub fn search(&self, query: &ContentQuery) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn view(&self, navigator: &mut Navigator, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, navigator, id)
    }

    pub fn read(&self, id: &str, options: &ReadOptions) -> Result<CmdResult> {
        commands::read::run(&self.store, id, options)
    }

    pub fn sections(&self) -> Result<CmdResult> {
        commands::sections::run(&self.store)
    }

    pub fn topics(&self) -> Result<CmdResult> {
        commands::topics::run(&self.store)
    }

    pub async fn subscribe<G: SubscriptionGateway>(
        &self,
        subscriber: &mut Subscriber<G>,
        brand: &str,
        email: &str,
    ) -> Result<CmdResult> {
        commands::subscribe::run(subscriber, brand, email).await
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<CmdResult> {
        commands::sign_in::run(email, password)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

//! # MakerStack Architecture
//!
//! MakerStack is a content site for indie makers: articles, playbooks and
//! tools presented as a card grid with search, a detail/reading view and a
//! newsletter signup. This crate is the site's **logic**, independent of any
//! UI. The bundled terminal client is one consumer of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, owns terminal I/O      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over ContentStore     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Returns CmdResult: data plus user-facing messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core units and storage                                     │
//! │  - filter, highlight, progress, email, document, navigation │
//! │  - session + debounce, subscription (tokio)                 │
//! │  - store/: catalog backends                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core Units
//!
//! The pure units are total: filtering, highlighting and progress never
//! fail, whatever the input. The only fallible operation with side effects
//! is the newsletter subscription ([`subscription`]), which is async and
//! retried once.
//!
//! ## Time and Resources
//!
//! The debounce timer and the subscription request run on tokio. Every
//! observer is scoped: dropping a [`progress::ProgressSubscription`] or a
//! search-state receiver unsubscribes it, and dropping a
//! [`debounce::Debouncer`] aborts its pending work.

pub mod api;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod document;
pub mod email;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod model;
pub mod navigation;
pub mod progress;
pub mod session;
pub mod store;
pub mod subscription;

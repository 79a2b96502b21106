pub mod commands;
mod logging;
mod render;
mod setup;
mod styles;

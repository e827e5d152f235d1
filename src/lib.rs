pub mod banner;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod events;
pub mod model;
pub mod post;
pub mod prompts;
pub mod search;
pub mod server;
pub mod spinner;

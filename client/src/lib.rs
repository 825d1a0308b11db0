//! Terminal Connect 4 against a remote engine.
//! The engine is only reached over HTTP; this crate owns the board state,
//! the input loop and the rendering.
pub mod app;
pub mod config;
pub mod events;
pub mod logging;
pub mod remote;
pub mod runtime;
pub mod ui;

pub use app::{App, Effect, Intent};
pub use config::{Config, ConfigError};
pub use events::AppEvent;
pub use remote::{FetchError, RemoteEngine, RemoteMove, RemotePlayer, Ticket};

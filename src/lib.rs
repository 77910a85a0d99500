// Library root
// -----------
// The binary (`main.rs`) only hands control to `cli::run`.
//
// Module responsibilities:
// - `api`: the HTTP client and the per-kind endpoint bindings.
// - `content`: content kinds and the `Content` capability.
// - `commands`: the operations behind each CLI subcommand.
// - `config`, `logging`, `output`, `ui`: configuration, tracing setup,
//   result encoding and terminal feedback.
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod output;
pub mod ui;

pub use api::{Client, ClientConfig};
pub use content::{AnyContent, Content, ContentKind};
pub use error::{ApiError, ApiResult, ConfigError, InvalidKindError};
pub use tokio_util::sync::CancellationToken;

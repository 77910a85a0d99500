use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::require_concrete;
use crate::api::Client;
use crate::content::ContentKind;
use crate::ui;

/// Returns `false` when the user declined the confirmation prompt.
pub async fn run_remove(
    client: &Client,
    cancel: &CancellationToken,
    kind: ContentKind,
    name: &str,
    force: bool,
) -> Result<bool> {
    let kind = require_concrete(kind)?;

    if !force && !ui::confirm(&format!("Remove {} {}? This cannot be undone", kind, name))? {
        return Ok(false);
    }

    client
        .delete_content(cancel, kind, name)
        .await
        .with_context(|| format!("cannot remove {} {}", kind, name))?;
    info!(%kind, name, "removed content");
    Ok(true)
}

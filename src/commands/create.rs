use std::io::Write;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::require_concrete;
use crate::api::Client;
use crate::content::{Content, ContentKind};
use crate::output::{self, OutputFormat};
use crate::ui;

pub async fn run_create(
    client: &Client,
    cancel: &CancellationToken,
    kind: ContentKind,
    name: &str,
    sample: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let kind = require_concrete(kind)?;

    let spinner = ui::spinner(&format!("Creating {} {}...", kind, name));
    let result = client.create_content(cancel, kind, name, sample).await;
    spinner.finish_and_clear();

    let content = result.with_context(|| format!("cannot create {} {}", kind, name))?;
    info!(kind = %content.kind(), name = content.name(), url = content.page_url(), "created content");
    output::encode(out, format, &content)
}

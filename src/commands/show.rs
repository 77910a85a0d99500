use std::io::Write;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use super::require_concrete;
use crate::api::Client;
use crate::content::ContentKind;
use crate::output::{self, OutputFormat};

pub async fn run_show(
    client: &Client,
    cancel: &CancellationToken,
    kind: ContentKind,
    name: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let kind = require_concrete(kind)?;
    let content = client
        .get_content(cancel, kind, name)
        .await
        .with_context(|| format!("cannot get {} {}", kind, name))?;
    output::encode(out, format, &content)
}

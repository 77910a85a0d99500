use std::io::Write;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::api::{Challenge, Client, Course, Tutorial};
use crate::content::ContentKind;
use crate::output::{self, OutputFormat};
use crate::ui;

/// Authored content grouped by kind. Kinds that were not requested stay
/// as empty sequences.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoredContent {
    pub challenges: Vec<Challenge>,
    pub tutorials: Vec<Tutorial>,
    pub courses: Vec<Course>,
}

/// Fetch authored content in a fixed order (challenges, tutorials,
/// courses). The first failing fetch aborts the whole listing.
pub async fn list_authored_content(
    client: &Client,
    cancel: &CancellationToken,
    kind: ContentKind,
) -> Result<AuthoredContent> {
    if kind == ContentKind::SkillPath {
        bail!("listing supports challenge, tutorial and course kinds only, got {kind:?}");
    }

    let mut authored = AuthoredContent::default();

    if kind.includes(ContentKind::Challenge) {
        authored.challenges = client
            .list_authored_challenges(cancel)
            .await
            .context("cannot list authored challenges")?;
    }

    if kind.includes(ContentKind::Tutorial) {
        authored.tutorials = client
            .list_authored_tutorials(cancel)
            .await
            .context("cannot list authored tutorials")?;
    }

    if kind.includes(ContentKind::Course) {
        authored.courses = client
            .list_authored_courses(cancel)
            .await
            .context("cannot list authored courses")?;
    }

    info!(
        challenges = authored.challenges.len(),
        tutorials = authored.tutorials.len(),
        courses = authored.courses.len(),
        "listed authored content"
    );
    Ok(authored)
}

pub async fn run_list(
    client: &Client,
    cancel: &CancellationToken,
    kind: ContentKind,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let spinner = ui::spinner("Listing authored content...");
    let result = list_authored_content(client, cancel, kind).await;
    spinner.finish_and_clear();

    output::encode(out, format, &result?)
}

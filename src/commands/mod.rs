// Content commands. Each `run_*` function takes an already configured
// client, the invocation's cancellation token and an output stream.

mod create;
mod list;
mod remove;
mod show;

pub use create::run_create;
pub use list::{list_authored_content, run_list, AuthoredContent};
pub use remove::run_remove;
pub use show::run_show;

use anyhow::{bail, Result};

use crate::content::ContentKind;

fn require_concrete(kind: ContentKind) -> Result<ContentKind> {
    if kind.is_all() {
        bail!("a content kind is required: one of challenge, tutorial, course, skill-path");
    }
    Ok(kind)
}

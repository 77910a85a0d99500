use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{to_json_body, Client};
use crate::content::{Content, ContentKind};
use crate::error::ApiResult;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPath {
    pub created_at: String,
    pub updated_at: String,

    pub name: String,
    pub title: String,

    pub page_url: String,
}

impl Content for SkillPath {
    fn kind(&self) -> ContentKind {
        ContentKind::SkillPath
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }
}

/// Skill path creation payload. `sample` provisions the new skill path
/// from the service's sample template.
#[derive(Serialize, Debug, Clone)]
pub struct CreateSkillPathRequest {
    pub name: String,
    pub sample: bool,
}

impl Client {
    pub async fn create_skill_path(
        &self,
        cancel: &CancellationToken,
        req: &CreateSkillPathRequest,
    ) -> ApiResult<SkillPath> {
        let body = to_json_body(req)?;
        self.post_into(cancel, "/skill-paths", None, None, body).await
    }

    pub async fn get_skill_path(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> ApiResult<SkillPath> {
        self.get_into(cancel, &format!("/skill-paths/{}", name), None, None)
            .await
    }

    pub async fn list_skill_paths(&self, cancel: &CancellationToken) -> ApiResult<Vec<SkillPath>> {
        self.get_into(cancel, "/skill-paths", None, None).await
    }

    pub async fn list_authored_skill_paths(
        &self,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<SkillPath>> {
        self.get_into(cancel, "/skill-paths/authored", None, None)
            .await
    }

    pub async fn delete_skill_path(&self, cancel: &CancellationToken, name: &str) -> ApiResult<()> {
        self.delete(cancel, &format!("/skill-paths/{}", name), None, None)
            .await?;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{to_json_body, Client};
use crate::content::{Content, ContentKind};
use crate::error::ApiResult;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Tutorial {
    pub created_at: String,
    pub updated_at: String,

    pub name: String,
    pub title: String,
    pub description: String,

    pub categories: Vec<String>,
    pub tags: Vec<String>,

    pub page_url: String,
}

impl Content for Tutorial {
    fn kind(&self) -> ContentKind {
        ContentKind::Tutorial
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateTutorialRequest {
    pub name: String,
    pub sample: bool,
}

impl Client {
    pub async fn create_tutorial(
        &self,
        cancel: &CancellationToken,
        req: &CreateTutorialRequest,
    ) -> ApiResult<Tutorial> {
        let body = to_json_body(req)?;
        self.post_into(cancel, "/tutorials", None, None, body).await
    }

    pub async fn get_tutorial(&self, cancel: &CancellationToken, name: &str) -> ApiResult<Tutorial> {
        self.get_into(cancel, &format!("/tutorials/{}", name), None, None)
            .await
    }

    pub async fn list_tutorials(&self, cancel: &CancellationToken) -> ApiResult<Vec<Tutorial>> {
        self.get_into(cancel, "/tutorials", None, None).await
    }

    pub async fn list_authored_tutorials(
        &self,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Tutorial>> {
        self.get_into(cancel, "/tutorials/authored", None, None)
            .await
    }

    pub async fn delete_tutorial(&self, cancel: &CancellationToken, name: &str) -> ApiResult<()> {
        self.delete(cancel, &format!("/tutorials/{}", name), None, None)
            .await?;
        Ok(())
    }
}

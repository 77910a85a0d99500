use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{to_json_body, Client};
use crate::content::{Content, ContentKind};
use crate::error::ApiResult;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Challenge {
    pub created_at: String,
    pub updated_at: String,

    pub name: String,
    pub title: String,
    pub description: String,

    pub categories: Vec<String>,
    pub tags: Vec<String>,

    pub page_url: String,
}

impl Content for Challenge {
    fn kind(&self) -> ContentKind {
        ContentKind::Challenge
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateChallengeRequest {
    pub name: String,
    pub sample: bool,
}

impl Client {
    pub async fn create_challenge(
        &self,
        cancel: &CancellationToken,
        req: &CreateChallengeRequest,
    ) -> ApiResult<Challenge> {
        let body = to_json_body(req)?;
        self.post_into(cancel, "/challenges", None, None, body).await
    }

    pub async fn get_challenge(&self, cancel: &CancellationToken, name: &str) -> ApiResult<Challenge> {
        self.get_into(cancel, &format!("/challenges/{}", name), None, None)
            .await
    }

    pub async fn list_challenges(&self, cancel: &CancellationToken) -> ApiResult<Vec<Challenge>> {
        self.get_into(cancel, "/challenges", None, None).await
    }

    pub async fn list_authored_challenges(
        &self,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Challenge>> {
        self.get_into(cancel, "/challenges/authored", None, None)
            .await
    }

    pub async fn delete_challenge(&self, cancel: &CancellationToken, name: &str) -> ApiResult<()> {
        self.delete(cancel, &format!("/challenges/{}", name), None, None)
            .await?;
        Ok(())
    }
}

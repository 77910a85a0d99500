use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{to_json_body, Client};
use crate::content::{Content, ContentKind};
use crate::error::ApiResult;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub created_at: String,
    pub updated_at: String,

    pub name: String,
    pub title: String,
    pub description: String,

    pub categories: Vec<String>,
    pub tags: Vec<String>,

    /// Course modules in the order they are presented.
    pub modules: Vec<CourseModule>,

    pub page_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CourseModule {
    pub name: String,
    pub title: String,
}

impl Content for Course {
    fn kind(&self) -> ContentKind {
        ContentKind::Course
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateCourseRequest {
    pub name: String,
    pub sample: bool,
}

impl Client {
    pub async fn create_course(
        &self,
        cancel: &CancellationToken,
        req: &CreateCourseRequest,
    ) -> ApiResult<Course> {
        let body = to_json_body(req)?;
        self.post_into(cancel, "/courses", None, None, body).await
    }

    pub async fn get_course(&self, cancel: &CancellationToken, name: &str) -> ApiResult<Course> {
        self.get_into(cancel, &format!("/courses/{}", name), None, None)
            .await
    }

    pub async fn list_courses(&self, cancel: &CancellationToken) -> ApiResult<Vec<Course>> {
        self.get_into(cancel, "/courses", None, None).await
    }

    pub async fn list_authored_courses(&self, cancel: &CancellationToken) -> ApiResult<Vec<Course>> {
        self.get_into(cancel, "/courses/authored", None, None).await
    }

    pub async fn delete_course(&self, cancel: &CancellationToken, name: &str) -> ApiResult<()> {
        self.delete(cancel, &format!("/courses/{}", name), None, None)
            .await?;
        Ok(())
    }
}

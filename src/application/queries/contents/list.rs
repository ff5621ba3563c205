use super::ContentQueryService;
use crate::application::{dto::ContentDto, error::ApplicationResult};

impl ContentQueryService {
    pub async fn list_contents(&self) -> ApplicationResult<Vec<ContentDto>> {
        let contents = self.read_repo.list().await?;
        Ok(contents.into_iter().map(Into::into).collect())
    }
}

use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::ContentId,
};

pub struct GetContentByIdQuery {
    pub id: i64,
}

impl ContentQueryService {
    pub async fn get_content_by_id(&self, query: GetContentByIdQuery) -> ApplicationResult<ContentDto> {
        let not_found = || ApplicationError::not_found("content not found");
        let id = ContentId::new(query.id).map_err(|_| not_found())?;
        let content = self.read_repo.find_by_id(id).await?.ok_or_else(not_found)?;
        Ok(content.into())
    }
}

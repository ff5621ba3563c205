use super::ChapterQueryService;
use crate::application::{
    dto::ChapterDto,
    error::{ApplicationError, ApplicationResult},
};

impl ChapterQueryService {
    /// Every article in the database as a chapter.
    pub async fn list_chapters(&self) -> ApplicationResult<Vec<ChapterDto>> {
        let articles = self.article_repo.list().await?;
        let contents = self.content_repo.list().await?;
        Ok(Self::chapters_of(articles, contents))
    }

    /// Same as [`Self::list_chapters`] but an empty database is reported as not found.
    pub async fn all_chapters(&self) -> ApplicationResult<Vec<ChapterDto>> {
        let chapters = self.list_chapters().await?;
        if chapters.is_empty() {
            return Err(ApplicationError::not_found("no chapters available"));
        }
        Ok(chapters)
    }
}

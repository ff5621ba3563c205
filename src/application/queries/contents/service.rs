use std::sync::Arc;

use crate::domain::content::ContentReadRepository;

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
}

impl ContentQueryService {
    pub fn new(read_repo: Arc<dyn ContentReadRepository>) -> Self {
        Self { read_repo }
    }
}

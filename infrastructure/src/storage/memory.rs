//! In-memory advocate repository.

use advocates_application::{AdvocateRepository, RepositoryError};
use advocates_domain::Advocate;
use async_trait::async_trait;

/// Serves a fixed roster from memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdvocateRepository {
    advocates: Vec<Advocate>,
}

impl InMemoryAdvocateRepository {
    pub fn new(advocates: Vec<Advocate>) -> Self {
        Self { advocates }
    }

    pub fn len(&self) -> usize {
        self.advocates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advocates.is_empty()
    }
}

#[async_trait]
impl AdvocateRepository for InMemoryAdvocateRepository {
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<Vec<Advocate>, RepositoryError> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .advocates
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.advocates.len() as u64)
    }
}

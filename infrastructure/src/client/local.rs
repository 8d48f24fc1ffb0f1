//! In-process directory gateway.

use advocates_application::{
    AdvocateRepository, DirectoryGateway, GatewayError, ListAdvocatesUseCase,
};
use advocates_domain::{Advocate, Page, PageRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Serves pages straight from a repository, skipping HTTP.
///
/// Failures surface as a 500 with the same message the API would send.
pub struct LocalDirectoryGateway<R: AdvocateRepository + 'static> {
    list: ListAdvocatesUseCase<R>,
}

impl<R: AdvocateRepository + 'static> LocalDirectoryGateway<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            list: ListAdvocatesUseCase::new(repository),
        }
    }
}

#[async_trait]
impl<R: AdvocateRepository + 'static> DirectoryGateway for LocalDirectoryGateway<R> {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<Advocate>, GatewayError> {
        self.list
            .execute(request)
            .await
            .map_err(|e| GatewayError::Server {
                status: 500,
                message: e.user_message().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryAdvocateRepository, builtin_roster};
    use advocates_application::RepositoryError;

    #[tokio::test]
    async fn test_serves_builtin_roster() {
        let roster = builtin_roster().unwrap();
        let total = roster.len() as u64;
        let gateway = LocalDirectoryGateway::new(Arc::new(InMemoryAdvocateRepository::new(roster)));

        let page = gateway
            .fetch_page(PageRequest::new(1, 5).unwrap())
            .await
            .unwrap();

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.pagination.total, total);
        assert_eq!(page.data[0].id, Some(1));
    }

    struct BrokenRepository;

    #[async_trait]
    impl AdvocateRepository for BrokenRepository {
        async fn fetch_page(&self, _: u64, _: u64) -> Result<Vec<Advocate>, RepositoryError> {
            Err(RepositoryError::Unavailable("down".into()))
        }

        async fn count(&self) -> Result<u64, RepositoryError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_failure_maps_to_server_error() {
        let gateway = LocalDirectoryGateway::new(Arc::new(BrokenRepository));
        let err = gateway.fetch_page(PageRequest::default()).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Server { status: 500, ref message } if message == "Failed to fetch advocates"
        ));
    }
}

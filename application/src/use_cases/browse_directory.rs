//! Browse Directory use case
//!
//! Client-side view of the directory: the page currently loaded from the
//! gateway, the search term typed by the user, and the rows of that page
//! which match it. Searching never issues a request; it only narrows the
//! rows already on screen. Changing page does.
//!
//! The state lives in [`BrowseSession`] so that interactive frontends can
//! run fetches on a background task and apply the results when they
//! arrive. [`BrowseDirectoryUseCase::load_page`] is the synchronous-looking
//! path for one-shot callers.

use crate::config::BrowseParams;
use crate::ports::directory_gateway::{DirectoryGateway, GatewayError};
use crate::use_cases::list_advocates::FETCH_FAILED_MESSAGE;
use advocates_domain::{
    Advocate, DomainError, Page, PageRequest, PaginationMetadata, SearchTerm, filter_advocates,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Identifies one in-flight fetch so that late responses can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    request: PageRequest,
}

impl LoadTicket {
    pub fn request(&self) -> PageRequest {
        self.request
    }
}

/// State of one browsing session
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    page: Option<Page<Advocate>>,
    search: SearchTerm,
    visible: Vec<Advocate>,
    current_page: u64,
    error: Option<String>,
    latest_seq: u64,
    loading: bool,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Self::default()
        }
    }

    // -- Loading --

    /// Mark a fetch of `request` as started and return its ticket.
    ///
    /// Only the most recently issued ticket will be applied.
    pub fn begin_load(&mut self, request: PageRequest) -> LoadTicket {
        self.latest_seq += 1;
        self.loading = true;
        LoadTicket {
            seq: self.latest_seq,
            request,
        }
    }

    /// Apply the outcome of a fetch. Returns `false` when the ticket is stale.
    ///
    /// On success the page replaces the current one and the current search is
    /// re-applied to it. On failure the previous page stays on screen and the
    /// generic error message is recorded.
    pub fn apply(
        &mut self,
        ticket: LoadTicket,
        result: Result<Page<Advocate>, GatewayError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            debug!(
                page = ticket.request.page(),
                "Discarding stale page response"
            );
            return false;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.current_page = ticket.request.page();
                self.error = None;
                self.page = Some(page);
                self.refilter();
            }
            Err(e) => {
                warn!("Error fetching advocates: {}", e);
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    // -- Search --

    /// Replace the search term and re-filter the loaded page.
    pub fn set_search(&mut self, term: impl Into<SearchTerm>) {
        self.search = term.into();
        self.refilter();
    }

    /// Clear the search and show the whole page again.
    pub fn reset_search(&mut self) {
        self.search = SearchTerm::default();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = match &self.page {
            Some(page) => filter_advocates(&page.data, &self.search),
            None => Vec::new(),
        };
    }

    // -- Navigation targets --

    /// Page number for the "Next" control, if enabled
    pub fn next_page(&self) -> Option<u64> {
        self.pagination()
            .filter(|p| p.has_next_page)
            .map(|_| self.current_page + 1)
    }

    /// Page number for the "Previous" control, if enabled
    pub fn previous_page(&self) -> Option<u64> {
        self.pagination()
            .filter(|p| p.has_previous_page)
            .map(|_| self.current_page - 1)
    }

    /// Last page number, if the roster is not empty
    pub fn last_page(&self) -> Option<u64> {
        self.pagination()
            .map(|p| p.total_pages)
            .filter(|&n| n > 0)
    }

    // -- Accessors --

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    /// Rows of the loaded page that match the search
    pub fn visible(&self) -> &[Advocate] {
        &self.visible
    }

    pub fn pagination(&self) -> Option<&PaginationMetadata> {
        self.page.as_ref().map(|p| &p.pagination)
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// "Showing N of M advocates", once a page has been loaded
    pub fn summary(&self) -> Option<String> {
        self.pagination().map(|p| {
            format!("Showing {} of {} advocates", self.visible.len(), p.total)
        })
    }
}

/// Use case for paging through the directory from a client
pub struct BrowseDirectoryUseCase<G: DirectoryGateway + 'static> {
    gateway: Arc<G>,
    params: BrowseParams,
}

impl<G: DirectoryGateway + 'static> Clone for BrowseDirectoryUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            params: self.params,
        }
    }
}

impl<G: DirectoryGateway + 'static> BrowseDirectoryUseCase<G> {
    pub fn new(gateway: Arc<G>, params: BrowseParams) -> Self {
        Self { gateway, params }
    }

    pub fn params(&self) -> &BrowseParams {
        &self.params
    }

    /// Request for `page` at the configured page size
    pub fn request_for(&self, page: u64) -> Result<PageRequest, DomainError> {
        self.params.request(page)
    }

    /// Fetch a page without touching any session state
    pub async fn fetch(&self, request: PageRequest) -> Result<Page<Advocate>, GatewayError> {
        self.gateway.fetch_page(request).await
    }

    /// Fetch `page` and apply it to `session`.
    ///
    /// Gateway failures are recorded on the session (see
    /// [`BrowseSession::error`]); only an invalid page number is an `Err`.
    pub async fn load_page(
        &self,
        session: &mut BrowseSession,
        page: u64,
    ) -> Result<(), DomainError> {
        let request = self.request_for(page)?;
        let ticket = session.begin_load(request);
        let result = self.fetch(request).await;
        session.apply(ticket, result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FakeGateway {
        roster: Vec<Advocate>,
        fail: AtomicBool,
    }

    impl FakeGateway {
        fn new() -> Self {
            let mut roster = vec![
                Advocate::new("John", "Doe", "New York", "JD")
                    .with_specialties(["Criminal Defense"])
                    .with_years_of_experience(5),
                Advocate::new("Jane", "Smith", "Los Angeles", "MBA")
                    .with_specialties(["Tax Law"])
                    .with_years_of_experience(10),
                Advocate::new("Sarah", "Williams", "Houston", "Family Law")
                    .with_years_of_experience(7),
            ];
            for i in 0..4 {
                roster.push(
                    Advocate::new(format!("Extra{i}"), "Person", "Denver", "MSW")
                        .with_years_of_experience(2),
                );
            }
            Self {
                roster,
                fail: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl DirectoryGateway for FakeGateway {
        async fn fetch_page(
            &self,
            request: PageRequest,
        ) -> Result<Page<Advocate>, GatewayError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(GatewayError::Connection("refused".into()));
            }
            let data = self
                .roster
                .iter()
                .skip(request.offset() as usize)
                .take(request.limit() as usize)
                .cloned()
                .collect();
            Ok(Page::new(
                data,
                PaginationMetadata::for_request(&request, self.roster.len() as u64),
            ))
        }
    }

    fn use_case() -> (Arc<FakeGateway>, BrowseDirectoryUseCase<FakeGateway>) {
        let gateway = Arc::new(FakeGateway::new());
        let params = BrowseParams::default().with_page_size(3);
        (
            Arc::clone(&gateway),
            BrowseDirectoryUseCase::new(gateway, params),
        )
    }

    #[tokio::test]
    async fn test_load_first_page() {
        let (_, browse) = use_case();
        let mut session = BrowseSession::new();
        browse.load_page(&mut session, 1).await.unwrap();

        assert_eq!(session.visible().len(), 3);
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.next_page(), Some(2));
        assert_eq!(session.previous_page(), None);
        assert_eq!(session.last_page(), Some(3));
        assert_eq!(
            session.summary().as_deref(),
            Some("Showing 3 of 7 advocates")
        );
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_search_filters_only_loaded_page() {
        let (_, browse) = use_case();
        let mut session = BrowseSession::new();
        browse.load_page(&mut session, 1).await.unwrap();

        session.set_search("LAW");
        let names: Vec<_> = session.visible().iter().map(|a| a.first_name.as_str()).collect();
        assert_eq!(names, vec!["Jane", "Sarah"]);
        assert_eq!(
            session.summary().as_deref(),
            Some("Showing 2 of 7 advocates")
        );

        // "Denver" rows live on later pages and are not searched.
        session.set_search("denver");
        assert!(session.visible().is_empty());
    }

    #[tokio::test]
    async fn test_search_survives_page_change() {
        let (_, browse) = use_case();
        let mut session = BrowseSession::new();
        browse.load_page(&mut session, 1).await.unwrap();
        session.set_search("denver");

        browse.load_page(&mut session, 2).await.unwrap();
        assert_eq!(session.search().as_str(), "denver");
        assert_eq!(session.visible().len(), 3);
        assert_eq!(session.previous_page(), Some(1));
    }

    #[tokio::test]
    async fn test_reset_search_restores_page() {
        let (_, browse) = use_case();
        let mut session = BrowseSession::new();
        browse.load_page(&mut session, 1).await.unwrap();
        session.set_search("xyz");
        assert!(session.visible().is_empty());

        session.reset_search();
        assert!(session.search().is_empty());
        assert_eq!(session.visible().len(), 3);
    }

    #[tokio::test]
    async fn test_last_page_has_no_next() {
        let (_, browse) = use_case();
        let mut session = BrowseSession::new();
        browse.load_page(&mut session, 3).await.unwrap();

        assert_eq!(session.visible().len(), 1);
        assert_eq!(session.next_page(), None);
        assert_eq!(session.previous_page(), Some(2));
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_page() {
        let (gateway, browse) = use_case();
        let mut session = BrowseSession::new();
        browse.load_page(&mut session, 1).await.unwrap();

        gateway.fail.store(true, Ordering::SeqCst);
        browse.load_page(&mut session, 2).await.unwrap();

        assert_eq!(session.error(), Some("Failed to fetch advocates"));
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.visible().len(), 3);

        gateway.fail.store(false, Ordering::SeqCst);
        browse.load_page(&mut session, 2).await.unwrap();
        assert_eq!(session.error(), None);
        assert_eq!(session.current_page(), 2);
    }

    #[tokio::test]
    async fn test_invalid_page_is_rejected() {
        let (_, browse) = use_case();
        let mut session = BrowseSession::new();
        let err = browse.load_page(&mut session, 0).await.unwrap_err();
        assert_eq!(err, DomainError::InvalidPage(0));
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let (_, browse) = use_case();
        let mut session = BrowseSession::new();

        let first = session.begin_load(browse.request_for(1).unwrap());
        let second = session.begin_load(browse.request_for(2).unwrap());

        let second_page = browse.fetch(second.request()).await;
        assert!(session.apply(second, second_page));

        let first_page = browse.fetch(first.request()).await;
        assert!(!session.apply(first, first_page));

        assert_eq!(session.current_page(), 2);
    }

    #[test]
    fn test_empty_session() {
        let session = BrowseSession::new();
        assert!(session.visible().is_empty());
        assert_eq!(session.summary(), None);
        assert_eq!(session.next_page(), None);
        assert_eq!(session.last_page(), None);
        assert_eq!(session.current_page(), 1);
    }
}

//! TUI application — main select! loop
//!
//! Architecture:
//! ```text
//! BrowseApp (select! loop)               fetch task (tokio::spawn, one per request)
//!   ├─ crossterm EventStream               └─ use_case.fetch(request)
//!   ├─ fetch_rx (FetchEvent)  <──────────────── fetch_tx
//!   └─ debounce deadline (sleep_until)
//! ```
//!
//! Late responses are discarded by the session's load tickets, so a slow
//! page never overwrites one requested after it.

use super::event::FetchEvent;
use super::mode::{KeyAction, KeyHandler};
use super::state::TuiState;
use super::widgets::{
    BrowseLayout, PaginationWidget, SearchWidget, StatusBarWidget, TableWidget,
};
use advocates_application::{BrowseDirectoryUseCase, DirectoryGateway};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Interactive directory browser
pub struct BrowseApp<G: DirectoryGateway + 'static> {
    use_case: BrowseDirectoryUseCase<G>,
    fetch_tx: mpsc::UnboundedSender<FetchEvent>,
    fetch_rx: mpsc::UnboundedReceiver<FetchEvent>,
}

impl<G: DirectoryGateway + 'static> BrowseApp<G> {
    pub fn new(use_case: BrowseDirectoryUseCase<G>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            use_case,
            fetch_tx,
            fetch_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let debounce = self.use_case.params().debounce;

        info!(
            page_size = self.use_case.params().page_size,
            debounce_ms = debounce.as_millis() as u64,
            "Starting directory browser"
        );
        self.request_page(&mut state, 1);

        loop {
            terminal.draw(|frame| Self::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            let deadline = state.search_deadline;
            tokio::select! {
                // Terminal events (keyboard, resize)
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        let action = KeyHandler::handle(key, state.search_input.is_empty());
                        self.handle_action(&mut state, action);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                // Page responses from fetch tasks
                Some(event) = self.fetch_rx.recv() => {
                    state.session.apply(event.ticket, event.result);
                }

                // Quiet period after typing has elapsed
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(tokio::time::Instant::now)),
                    if deadline.is_some() =>
                {
                    debug!(term = %state.search_input, "Applying search");
                    state.apply_search();
                }
            }
        }

        info!("Directory browser closed");
        Ok(())
    }

    /// Apply a key action to the state, starting fetches as needed
    fn handle_action(&self, state: &mut TuiState, action: KeyAction) {
        let debounce = self.use_case.params().debounce;
        match action {
            KeyAction::InsertChar(c) => state.insert_char(c, debounce),
            KeyAction::DeleteChar => state.delete_char(debounce),
            KeyAction::ResetSearch => state.reset_search(),
            KeyAction::PreviousPage => {
                if let Some(page) = state.session.previous_page() {
                    self.request_page(state, page);
                }
            }
            KeyAction::NextPage => {
                if let Some(page) = state.session.next_page() {
                    self.request_page(state, page);
                }
            }
            KeyAction::FirstPage => {
                if state.session.current_page() != 1 {
                    self.request_page(state, 1);
                }
            }
            KeyAction::LastPage => {
                let current = state.session.current_page();
                if let Some(last) = state.session.last_page().filter(|&n| n != current) {
                    self.request_page(state, last);
                }
            }
            KeyAction::Quit => state.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Start fetching `page` on a background task
    fn request_page(&self, state: &mut TuiState, page: u64) {
        let request = match self.use_case.request_for(page) {
            Ok(request) => request,
            Err(e) => {
                warn!("Not requesting page {}: {}", page, e);
                return;
            }
        };

        let ticket = state.session.begin_load(request);
        let use_case = self.use_case.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = use_case.fetch(ticket.request()).await;
            // Receiver gone means the browser has exited
            let _ = tx.send(FetchEvent { ticket, result });
        });
    }

    /// Render all widgets
    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = BrowseLayout::compute(frame.area());

        frame.render_widget(SearchWidget::new(state), layout.search);
        frame.render_widget(TableWidget::new(state), layout.table);
        frame.render_widget(PaginationWidget::new(state), layout.pagination);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
    }
}

//! Application state and event loop

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::catalog::{Cid, CidProvider};
use crate::debounce::Debouncer;
use crate::error::FetchError;
use crate::reveal::RevealState;
use crate::search::filter_records;
use crate::tui::input::SearchInput;
use crate::tui::list::ListCursor;
use crate::tui::sidebar::View;
use crate::tui::ui;

/// Quiet period before a typed term is applied to the filter
const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Messages from background fetch threads
pub enum BgMessage {
    FetchComplete(u64, Vec<Cid>),
    FetchFailed(u64, FetchError),
}

/// Mutually exclusive presentation states of the catalog view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Failed(FetchError),
    Ready,
}

/// Main application state
pub struct App {
    pub records: Vec<Cid>,
    /// Positions into `records` that match the applied term, in catalog order
    pub filtered_indices: Vec<usize>,

    pub search: SearchInput,
    pub list: ListCursor,
    pub reveal: RevealState,
    pub view: View,
    pub fetch: FetchState,

    /// Debounced term currently applied to the filter
    pub term: String,

    pub should_quit: bool,

    debouncer: Debouncer<String>,
    provider: Arc<dyn CidProvider>,
    fetch_generation: u64,
    bg_sender: Sender<BgMessage>,
    bg_receiver: Receiver<BgMessage>,
}

impl App {
    pub fn new(provider: Arc<dyn CidProvider>) -> Self {
        let (bg_sender, bg_receiver) = channel();
        Self {
            records: Vec::new(),
            filtered_indices: Vec::new(),
            search: SearchInput::default(),
            list: ListCursor::default(),
            reveal: RevealState::new(),
            view: View::default(),
            fetch: FetchState::Loading,
            term: String::new(),
            should_quit: false,
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            provider,
            fetch_generation: 0,
            bg_sender,
            bg_receiver,
        }
    }

    /// Main event loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
    ) -> crate::Result<()> {
        self.start_fetch();

        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind != KeyEventKind::Release {
                        self.handle_key(key);
                    }
                }
            }

            self.poll_debounce(Instant::now());

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                last_tick = Instant::now();
            }

            if self.should_quit {
                self.debouncer.cancel();
                return Ok(());
            }
        }
    }

    /// Kick off a catalog fetch on a background thread
    fn start_fetch(&mut self) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.fetch = FetchState::Loading;

        log::info!(target: "TUI", "catalog fetch started (generation {})", generation);

        let provider = Arc::clone(&self.provider);
        let tx = self.bg_sender.clone();
        thread::spawn(move || {
            let msg = match provider.list_all() {
                Ok(records) => BgMessage::FetchComplete(generation, records),
                Err(e) => BgMessage::FetchFailed(generation, e),
            };
            let _ = tx.send(msg);
        });
    }

    /// Drain pending background messages
    fn process_messages(&mut self) {
        let mut messages = Vec::new();
        while let Ok(msg) = self.bg_receiver.try_recv() {
            messages.push(msg);
        }
        for msg in messages {
            self.apply_message(msg);
        }
    }

    fn apply_message(&mut self, msg: BgMessage) {
        match msg {
            BgMessage::FetchComplete(generation, records) => {
                if generation != self.fetch_generation {
                    log::debug!(target: "TUI", "discarding stale fetch result (generation {})", generation);
                    return;
                }
                log::info!(target: "TUI", "catalog loaded: {} records", records.len());
                self.records = records;
                self.fetch = FetchState::Ready;
                self.reveal.reset();
                self.refresh_filter();
            }
            BgMessage::FetchFailed(generation, err) => {
                if generation != self.fetch_generation {
                    log::debug!(target: "TUI", "discarding stale fetch error (generation {})", generation);
                    return;
                }
                log::warn!(target: "TUI", "catalog fetch failed: {}", err);
                self.records.clear();
                self.filtered_indices.clear();
                self.list.reset(0);
                self.fetch = FetchState::Failed(err);
            }
        }
    }

    /// Release the debounced term once its quiet period has passed
    fn poll_debounce(&mut self, now: Instant) {
        if let Some(term) = self.debouncer.take_ready(now) {
            if term != self.term {
                self.apply_term(term);
            }
        }
    }

    fn apply_term(&mut self, term: String) {
        log::debug!(target: "TUI", "search term applied: {:?}", term);
        self.term = term;
        self.reveal.reset();
        self.refresh_filter();
    }

    // Recompute the filtered view and put the cursor back on top
    fn refresh_filter(&mut self) {
        self.filtered_indices = filter_records(&self.records, &self.term);
        let visible = self.reveal.visible_len(self.filtered_indices.len());
        self.list.reset(visible);
    }

    fn reveal_more(&mut self) {
        let filtered_len = self.filtered_indices.len();
        if self.reveal.can_reveal(filtered_len) {
            self.reveal.reveal_more(filtered_len);
            log::debug!(
                target: "TUI",
                "revealed more rows ({} of {} visible)",
                self.reveal.visible_len(filtered_len),
                filtered_len
            );
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global shortcuts work in every state
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.handle_escape();
                return;
            }
            KeyCode::F(2) => {
                self.view = View::Cids;
                return;
            }
            KeyCode::F(3) => {
                self.view = View::Procedimentos;
                return;
            }
            KeyCode::F(5) => {
                if !matches!(self.fetch, FetchState::Loading) {
                    self.start_fetch();
                }
                return;
            }
            _ => {}
        }

        if self.view != View::Cids {
            return;
        }

        match self.fetch {
            FetchState::Loading => {}
            FetchState::Failed(_) => {
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
                    self.start_fetch();
                }
            }
            FetchState::Ready => {
                if self.search.focused {
                    self.handle_search_key(key);
                } else {
                    self.handle_list_key(key);
                }
            }
        }
    }

    // Esc ladder: clear the query, then unfocus the search box, then quit
    fn handle_escape(&mut self) {
        let searching = matches!(self.fetch, FetchState::Ready)
            && self.view == View::Cids
            && self.search.focused;
        if searching {
            if self.search.clear() {
                self.debouncer.queue(String::new(), Instant::now());
            } else {
                self.search.focused = false;
            }
        } else {
            self.should_quit = true;
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {
                if self.search.handle_key(&key) {
                    self.debouncer.queue(self.search.query.clone(), Instant::now());
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let visible = self.reveal.visible_len(self.filtered_indices.len());
        match key.code {
            KeyCode::Up => self.list.select_prev(),
            KeyCode::Down => self.list.select_next(visible),
            KeyCode::PageUp => self.list.page_up(),
            KeyCode::PageDown => self.list.page_down(visible),
            KeyCode::Home => self.list.select_first(),
            KeyCode::End => self.list.select_last(visible),
            KeyCode::Char(' ') | KeyCode::Char('m') => self.reveal_more(),
            KeyCode::Tab | KeyCode::Char('/') => self.search.focused = true,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Any other printable char jumps back into the search box
                self.search.focused = true;
                self.search.insert(c);
                self.debouncer.queue(self.search.query.clone(), Instant::now());
            }
            _ => {}
        }
    }
}

use crate::api::EmployeeApi;
use crate::config::AppConfig;
use crate::coordinator::{ResponseOutcome, SearchCoordinator, SearchRequest};
use crate::employee::Employee;
use crate::error::SearchError;
use crate::tui::list::CardListState;
use crate::tui::search::SearchInput;
use crate::tui::ui;
use crate::EmpDirError;
use chrono::Locale;
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Messages from background tasks
pub enum BgMessage {
    SearchComplete {
        seq: u64,
        result: Result<Vec<Employee>, SearchError>,
    },
}

pub struct App {
    pub coordinator: SearchCoordinator,

    // Sub-states
    pub search: SearchInput,
    pub list: CardListState,

    pub locale: Locale,
    pub should_quit: bool,

    api: EmployeeApi,
    runtime: tokio::runtime::Runtime,
    bg_sender: Sender<BgMessage>,
    bg_receiver: Receiver<BgMessage>,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> crate::Result<Self> {
        let api = EmployeeApi::new(&config.base_url)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("empdir-http")
            .enable_all()
            .build()
            .map_err(EmpDirError::Runtime)?;
        let (bg_sender, bg_receiver) = unbounded();

        Ok(Self {
            coordinator: SearchCoordinator::new(config.debounce),
            search: SearchInput::default(),
            list: CardListState::default(),
            locale: config.locale,
            should_quit: false,
            api,
            runtime,
            bg_sender,
            bg_receiver,
            tick_rate: config.tick_rate,
        })
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        tracing::info!(base_url = self.api.base_url(), "directory search started");

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            // Wake up for the debounce deadline even when no key arrives
            let now = Instant::now();
            let timeout = self
                .coordinator
                .next_deadline()
                .map(|d| d.saturating_duration_since(now).min(self.tick_rate))
                .unwrap_or(self.tick_rate);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, Instant::now());
                    }
                }
            }

            self.tick(Instant::now());

            if self.should_quit {
                tracing::info!("directory search exiting");
                return Ok(());
            }
        }
    }

    /// Drain finished searches and fire the debounce timer if it is due
    pub fn tick(&mut self, now: Instant) {
        self.process_messages();
        if let Some(request) = self.coordinator.poll(now) {
            self.dispatch(request);
        }
    }

    fn dispatch(&self, request: SearchRequest) {
        let api = self.api.clone();
        let tx = self.bg_sender.clone();
        self.runtime.spawn(async move {
            let result = api.search(&request.query).await;
            let _ = tx.send(BgMessage::SearchComplete {
                seq: request.seq,
                result,
            });
        });
    }

    pub fn process_messages(&mut self) {
        while let Ok(msg) = self.bg_receiver.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Wait up to `timeout` for one background message and handle it
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.bg_receiver.recv_timeout(timeout) {
            Ok(msg) => {
                self.handle_message(msg);
                true
            }
            Err(_) => false,
        }
    }

    fn handle_message(&mut self, msg: BgMessage) {
        match msg {
            BgMessage::SearchComplete { seq, result } => {
                if let ResponseOutcome::Applied(count) =
                    self.coordinator.apply_response(seq, result)
                {
                    self.list.reset(count);
                }
            }
        }
    }

    fn set_query(&mut self, text: String, now: Instant) {
        self.coordinator.set_search_text(text, now);
        if self.coordinator.results().is_empty() {
            self.list.reset(0);
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.coordinator.search_text().is_empty() {
                    self.search.cursor_pos = 0;
                    self.set_query(String::new(), now);
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key, now);
        } else {
            self.handle_list_key(key, now);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {
                let current = self.coordinator.search_text().to_string();
                if let Some(next) = self.search.handle_key(&current, key) {
                    self.set_query(next, now);
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.list.move_by(1),
            KeyCode::PageUp => self.list.page(false),
            KeyCode::PageDown => self.list.page(true),
            KeyCode::Home => self.list.select_first(),
            KeyCode::End => self.list.select_last(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                let mut next = self.coordinator.search_text().to_string();
                next.push(c);
                self.search.cursor_pos = next.len();
                self.set_query(next, now);
            }

            _ => {}
        }
    }
}

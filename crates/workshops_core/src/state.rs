use crate::view_model::{filter_workshops, AppViewModel, DisplayState, WorkshopCardView};

/// Identifies a single issued fetch. Monotonically increasing; only the
/// completion carrying the most recently issued id may commit.
pub type RequestId = u64;

/// One workshop record as loaded from the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workshop {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub start_date: String,
    pub end_date: String,
}

/// Authoritative load state for the current page. Exactly one variant is
/// active; every fetch attempt ends in `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Workshop>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    page: u32,
    load: LoadState,
    filter_key: String,
    current_request: Option<RequestId>,
    next_request: RequestId,
    /// Item count of the most recently loaded page. Starts at zero, so
    /// "next" is inert until a non-empty page has actually been observed.
    last_loaded_len: usize,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: 1,
            load: LoadState::Idle,
            filter_key: String::new(),
            current_request: None,
            next_request: 1,
            last_loaded_len: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn filter_key(&self) -> &str {
        &self.filter_key
    }

    /// Derives the renderable view model. The filtered list is recomputed
    /// here on every call and never stored.
    pub fn view(&self) -> AppViewModel {
        let (display, page_indicator) = match &self.load {
            // The mount fetch begins immediately, so Idle renders as loading.
            LoadState::Idle | LoadState::Loading => (DisplayState::Loading, None),
            LoadState::Failed(message) => (DisplayState::Error(message.clone()), None),
            LoadState::Loaded(items) if items.is_empty() => (DisplayState::EndOfData, None),
            LoadState::Loaded(items) => {
                let cards: Vec<WorkshopCardView> = filter_workshops(items, &self.filter_key)
                    .into_iter()
                    .map(WorkshopCardView::from_workshop)
                    .collect();
                let indicator = if cards.is_empty() { None } else { Some(self.page) };
                (DisplayState::Cards(cards), indicator)
            }
        };

        AppViewModel {
            page: self.page,
            filter_key: self.filter_key.clone(),
            display,
            page_indicator,
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call and clears
    /// the flag, so the platform layer can coalesce renders.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub(crate) fn set_filter_key(&mut self, key: String) {
        if self.filter_key != key {
            self.filter_key = key;
            self.dirty = true;
        }
    }

    /// Whether "next" may advance: only once the most recently loaded page
    /// is known to be non-empty. An empty page is the end-of-data signal.
    pub(crate) fn next_allowed(&self) -> bool {
        self.last_loaded_len > 0
    }

    /// Enters `Loading` for the current page and issues a fresh request id,
    /// superseding any fetch still in flight.
    pub(crate) fn begin_fetch(&mut self) -> RequestId {
        let request_id = self.next_request;
        self.next_request += 1;
        self.current_request = Some(request_id);
        self.load = LoadState::Loading;
        self.dirty = true;
        request_id
    }

    /// A completion may commit only if it carries the most recently issued
    /// request id; anything else is stale and must be discarded.
    pub(crate) fn accepts_completion(&self, request_id: RequestId) -> bool {
        self.current_request == Some(request_id)
    }

    pub(crate) fn apply_page(&mut self, items: Vec<Workshop>) {
        self.last_loaded_len = items.len();
        self.load = LoadState::Loaded(items);
        self.current_request = None;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.load = LoadState::Failed(message);
        self.current_request = None;
        self.dirty = true;
    }
}

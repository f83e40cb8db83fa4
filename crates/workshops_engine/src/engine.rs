use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::fetch::{FetchSettings, ReqwestFetcher, WorkshopFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    FetchPage { request_id: RequestId, page: u32 },
}

/// Handle to the background fetch worker. Commands go in over one channel,
/// completion events come back over another; each fetch runs as its own
/// task, so completions may arrive out of order. Telling stale completions
/// apart is the state machine's job, via the echoed request id.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_page(&self, request_id: RequestId, page: u32) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchPage { request_id, page });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn WorkshopFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { request_id, page } => {
            let result = fetcher.fetch_page(page).await;
            match &result {
                Ok(records) => {
                    log::debug!("page {page} fetched: {} records", records.len());
                }
                Err(err) => log::warn!("page {page} fetch failed: {err}"),
            }
            let _ = event_tx.send(EngineEvent::PageFetched { request_id, result });
        }
    }
}

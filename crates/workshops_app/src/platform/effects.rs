//! Bridges the pure core to the engine: executes fetch effects and pumps
//! completion events back into the message channel.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use workshops_core::{Effect, Msg, Workshop};
use workshops_engine::{EngineEvent, EngineHandle, FetchSettings, WorkshopRecord};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: FetchSettings) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request_id, page } => {
                    log::info!("FetchPage request_id={request_id} page={page}");
                    self.engine.fetch_page(request_id, page);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::PageFetched { request_id, result } => {
                        let result = match result {
                            Ok(records) => {
                                Ok(records.into_iter().map(map_record).collect::<Vec<_>>())
                            }
                            Err(err) => {
                                log::warn!("fetch {request_id} failed: {err}");
                                Err(err.to_string())
                            }
                        };
                        if msg_tx.send(Msg::PageFetched { request_id, result }).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_record(record: WorkshopRecord) -> Workshop {
    Workshop {
        id: record.id,
        name: record.name,
        image_url: record.image_url,
        start_date: record.start_date,
        end_date: record.end_date,
    }
}

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use assistant_core::{Effect, ExtractFailure, Msg};
use assistant_engine::{ClientSettings, EngineEvent, EngineHandle, ExtractError, FailureKind};
use assistant_logging::{assistant_info, assistant_warn};

use super::persistence;

pub struct EffectRunner {
    engine: EngineHandle,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        settings: ClientSettings,
        state_dir: PathBuf,
    ) -> Result<Self, ExtractError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine, state_dir };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestExtraction { request_id, text } => {
                    assistant_info!(
                        "RequestExtraction request_id={} text_len={}",
                        request_id,
                        text.len()
                    );
                    self.engine.submit(request_id, text);
                }
                Effect::PersistTheme { theme } => {
                    persistence::save_theme_preference(&self.state_dir, theme);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let EngineEvent::ExtractionCompleted { request_id, result } = event;
                let msg = match result {
                    Ok(keywords) => Msg::ExtractionSucceeded {
                        request_id,
                        keywords,
                    },
                    Err(err) => {
                        assistant_warn!("extraction {} failed: {}", request_id, err);
                        Msg::ExtractionFailed {
                            request_id,
                            failure: map_failure(err.kind),
                        }
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_failure(kind: FailureKind) -> ExtractFailure {
    match kind {
        FailureKind::Network => ExtractFailure::Network,
        FailureKind::Timeout => ExtractFailure::Timeout,
        FailureKind::HttpStatus(code) => ExtractFailure::HttpStatus(code),
        FailureKind::MalformedResponse => ExtractFailure::MalformedResponse,
    }
}

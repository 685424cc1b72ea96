use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use assistant_logging::assistant_error;

use crate::extract::{ClientSettings, HttpKeywordExtractor, KeywordExtractor};
use crate::{EngineEvent, ExtractError, RequestId};

enum EngineCommand {
    Submit { request_id: RequestId, text: String },
}

/// Handle to the background extraction runtime.
///
/// Commands are executed on a dedicated thread owning a tokio runtime;
/// completions arrive on the event channel in whatever order the service
/// answers. Nothing here cancels an in-flight request; staleness is the
/// state machine's concern.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ExtractError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let extractor = Arc::new(HttpKeywordExtractor::new(settings)?);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    assistant_error!("failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let extractor = extractor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(extractor.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit(&self, request_id: RequestId, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            request_id,
            text: text.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    extractor: &dyn KeywordExtractor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { request_id, text } => {
            let result = extractor.extract(request_id, &text).await;
            let _ = event_tx.send(EngineEvent::ExtractionCompleted { request_id, result });
        }
    }
}

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Context;
use assistant_core::{update, AppState, Msg};
use assistant_engine::ClientSettings;
use assistant_logging::assistant_info;

use super::effects::EffectRunner;
use super::ui;
use super::{logging, persistence};

/// Poll interval for the message queue while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let settings = client_settings();
    let state_dir = persistence::state_dir();
    let stored_theme = persistence::load_theme_preference(&state_dir);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), settings, state_dir)
        .context("starting extraction engine")?;

    // The theme must resolve before anything themed renders; deliver it
    // as the first message so the mount happens on the first dispatch.
    msg_tx
        .send(Msg::ThemeResolved(stored_theme))
        .context("queueing theme resolution")?;

    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_thread(msg_tx, quit.clone());

    ui::render::print_help();

    let mut state = AppState::new();
    loop {
        if quit.load(Ordering::Relaxed) {
            break;
        }
        let msg = match msg_rx.recv_timeout(POLL_INTERVAL) {
            Ok(msg) => msg,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            ui::render::render(&state.view());
        }
    }

    assistant_info!("shutting down");
    Ok(())
}

fn client_settings() -> ClientSettings {
    let mut settings = ClientSettings::default();
    if let Ok(base_url) = std::env::var("ASSISTANT_ENDPOINT") {
        if !base_url.trim().is_empty() {
            settings.base_url = base_url;
        }
    }
    settings
}

/// Turns terminal lines into core messages. A plain line edits the query
/// and submits it; `:theme` toggles the preference; `:quit` exits.
fn spawn_input_thread(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if line == ui::constants::QUIT_COMMAND {
                break;
            }
            if line == ui::constants::THEME_COMMAND {
                if msg_tx.send(Msg::ThemeToggled).is_err() {
                    break;
                }
                continue;
            }
            // Everything else is query text, carried verbatim.
            let sent = msg_tx
                .send(Msg::QueryEdited(line))
                .and_then(|_| msg_tx.send(Msg::SubmitClicked));
            if sent.is_err() {
                break;
            }
        }
        quit.store(true, Ordering::Relaxed);
    });
}

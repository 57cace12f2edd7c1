use std::sync::{Arc, Mutex};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use events::{custom::AppEvent, generator::EventGenerator};
use log::debug;
use ratatui::{prelude::Backend, Terminal};
use state::App;
use worker::{AppMessage, Worker};

use crate::ui::draw_ui;

pub mod events;
pub mod model;
pub mod nav;
pub mod page;
pub mod state;
pub mod worker;

// Tick rate in milliseconds; the hero typewriter and the scroll animation
// both advance on ticks, so this is effectively the frame interval.
const TICK_RATE_MS: u16 = 50;

pub async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: Arc<Mutex<App>>) -> Result<()> {
    let mut events = EventGenerator::new(TICK_RATE_MS);
    let ui_app = app.clone();
    let worker_app = app.clone();

    let (tx_worker, rx_worker) = tokio::sync::mpsc::channel::<AppMessage>(100);

    log::info!("Spawning worker");
    tokio::spawn(async move { Worker::new(worker_app, rx_worker).run().await });

    loop {
        terminal.draw(|f| {
            debug!("Drawing UI");
            draw_ui(f, &ui_app);
        })?;

        if let Some(event) = events.next().await {
            // Models handle the event first and emit side-effect messages
            let (fall_through_event, messages) = {
                let mut app = app.lock().unwrap();
                app.update(&event)
            };

            for message in messages {
                if let Err(e) = tx_worker.send(message).await {
                    log::error!("Failed to send message to worker: {e}");
                }
            }

            let Some(event) = fall_through_event else {
                continue;
            };

            // Then handle the generic exit keys
            if let AppEvent::Key(KeyEvent {
                code, modifiers, ..
            }) = event
            {
                if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                    return Ok(());
                }
                if code == KeyCode::Char('q') {
                    return Ok(());
                }
            }
        }
    }
}

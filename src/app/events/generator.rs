use std::time::{Duration, Instant};

use tokio::sync::mpsc::{channel, Receiver, Sender};

use crossterm::event;

use super::custom::AppEvent;

pub struct EventGenerator {
    pub _tick_rate: Duration,
    pub rx_event: Receiver<AppEvent>,
    pub _tx_event: Sender<AppEvent>,
}

impl EventGenerator {
    pub fn new(tick_rate: u16) -> Self {
        let (tx_event, rx_event) = channel::<AppEvent>(500);

        let tick_rate = Duration::from_millis(u64::from(tick_rate));
        let tx_event_thread = tx_event.clone();

        tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));
                if let Ok(true) = event::poll(timeout) {
                    if let Ok(ev) = event::read() {
                        if let Some(app_event) = AppEvent::from_crossterm(ev) {
                            let _ = tx_event_thread.send(app_event).await;
                        }
                    }
                }
                if last_tick.elapsed() > tick_rate {
                    let _ = tx_event_thread.send(AppEvent::Tick).await;
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            _tick_rate: tick_rate,
            rx_event,
            _tx_event: tx_event,
        }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx_event.recv().await
    }
}

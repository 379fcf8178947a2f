use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::interval;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Frame pacing: one `TickFrame` per period until the receiver goes away.
pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    tokio::spawn(async move {
        let mut ticker = interval(frame_period(fps));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

#[must_use]
pub fn frame_period(fps: u8) -> Duration {
    Duration::from_millis(1000_u64 / u64::from(fps.max(15)))
}

//! Background link opening so a slow browser launch never stalls the UI.

use tokio::sync::mpsc;

use crate::shell::integration;

#[derive(Debug)]
pub struct LinkOutcome {
    pub url: String,
    pub opened: bool,
}

pub fn spawn_link_open(tx: mpsc::UnboundedSender<LinkOutcome>, url: String) {
    std::thread::spawn(move || {
        let opened = integration::open_in_browser(&url);
        let _ = tx.send(LinkOutcome { url, opened });
    });
}

//! Tagsmith GUI
//!
//! # What this program is
//! A small desktop app (built with `iced`) that opens one `.mp3`, shows its
//! artist/title/genre/album in a form, lets you pick and crop a new front cover,
//! and writes everything back into the file's ID3 tag.
//!
//! # How it flows
//! Message happens -> update changes state -> view redraws.
//! Tag reads/writes and image decoding run on a background thread and come back
//! as messages, so the window never freezes on disk I/O.
//!
//! Logging goes through `tracing`; set `RUST_LOG` (default `tagsmith=info`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagsmith=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tagsmith::run()
}

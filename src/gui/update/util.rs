//! gui/update/util.rs
use std::path::PathBuf;

use iced::futures::channel::oneshot;

/// Run a blocking function on a background thread and await the result.
///
/// This is intentionally tiny: it avoids repeating the oneshot + thread boilerplate
/// for every "do work off-thread, then send Message::Finished(Result<...>)" case.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> T + Send + 'static) -> T
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<T>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .expect("background worker dropped without returning")
}

/// Native "open file" dialog. `None` = cancelled.
pub(crate) async fn pick_file(title: &'static str, filter: (&'static str, &'static [&'static str])) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter.0, filter.1)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Tagsmith')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - small UI helpers ('util')

pub(crate) mod state;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

use state::Tagsmith;
use update::update;
use view::view;

/// Open the editor window and run until it is closed.
pub fn run() -> iced::Result {
    iced::application(Tagsmith::default, update, view)
        .title("Tagsmith")
        .window_size((960.0, 640.0))
        .run()
}

pub mod cli;
pub mod contact;
pub mod content;
pub mod logging;
pub mod model;
pub mod state;
pub mod toast;
pub mod tui;
pub mod ui;

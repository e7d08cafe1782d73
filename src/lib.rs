//! Library entry for folio: the gallery filtering engine, its page
//! collaborators, and the terminal front end, exposed for the binary and
//! integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod gallery;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
pub mod widgets;

//! sc-mini-player - a mini-player front-end kept in sync with an embedded
//! audio widget.
//!
//! The crate is organized the same way as the application that runs it:
//!
//! - `model`: tracks, surfaces, tabs, marquee math and the page document
//! - `widget`: the embedded widget adapter and its simulated implementation
//! - `controller`: the playback synchronization controller
//! - `view`: terminal rendering of the page document
//! - `config` / `logging`: ambient setup used by the binary

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Args, PlayerConfig};
pub use controller::{PageTabs, PlaybackController, TabNavigator, UiAction};
pub use model::{Document, Page, PageEvent, Surface, Tab, Track};
pub use widget::{SimulatedWidget, SimulatedWidgetFactory, Widget, WidgetEvent, WidgetFactory};

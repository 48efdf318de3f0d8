//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, prompt input
//!   and command execution against the [`Inventory`]
//! - **[`menu`]**: the numbered commands and the fields each one prompts for
//! - **[`panes`]**: stateless render functions for each visible pane (menu,
//!   output, prompt, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an [`Inventory`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Inventory`]: crate::inventory::Inventory
//! [`App::run`]: app::App::run

pub mod app;
pub mod menu;
pub mod panes;
pub mod theme;

pub use app::App;

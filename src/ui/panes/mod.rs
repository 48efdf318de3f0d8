//! TUI pane rendering modules
//!
//! Each pane is a stateless render function; scroll state lives in
//! [`crate::ui::App`] and is passed in by reference.
//!
//! - [`menu`]: the numbered command list with the current selection
//! - [`output`]: everything the commands have printed
//! - [`prompt`]: the line the user is typing into
//! - [`status`]: status message, container counts and keybindings

pub mod menu;
pub mod output;
pub mod prompt;
pub mod status;

pub use menu::render_menu_pane;
pub use output::render_output_pane;
pub use prompt::render_prompt;
pub use status::{render_status_bar, InventoryStats};

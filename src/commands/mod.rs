//! CLI command implementations.
//!
//! Each command is in its own submodule; presentation helpers (rounding,
//! colour styling, tables) live in [`output`].

pub mod add;
pub mod compare;
pub mod init;
pub mod list;
pub mod output;
pub mod remove;
pub mod site;

pub use add::{execute_add, AddOptions};
pub use compare::{execute_compare, CompareOptions};
pub use init::{execute_init, InitOptions};
pub use list::execute_list;
pub use remove::execute_remove;
pub use site::{execute_site, SiteOptions};

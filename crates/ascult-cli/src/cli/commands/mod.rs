//! CLI command handlers, one file per subcommand.

mod add;
mod classify;
mod list;
mod remove;
mod show;

pub use add::run_add;
pub use classify::run_classify;
pub use list::run_list;
pub use remove::run_remove;
pub use show::run_show;

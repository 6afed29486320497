mod check;
mod info;
mod layout;
mod rel_path;

pub use check::cmd_check;
pub use info::cmd_info;
pub use layout::cmd_layout;
pub use rel_path::cmd_rel_path;

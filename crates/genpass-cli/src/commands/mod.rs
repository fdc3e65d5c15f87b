mod derive;
mod init;
mod misc;
mod saved;

pub use derive::handle_derive;
pub use init::handle_init;
pub use misc::handle_completions;
pub use saved::{handle_forget, handle_list, handle_show};

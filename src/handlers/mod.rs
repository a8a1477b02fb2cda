mod short_link;

pub use short_link::{redirect_handler, shorten_handler};

pub mod avatar_menu;
pub mod header;
pub mod header_note;
pub mod logo;
pub mod search;
pub mod trans;

pub use avatar_menu::AvatarMenu;
pub use header::{MainHeader, use_header_height};
pub use header_note::HeaderNote;
pub use logo::Logo;
pub use search::Search;
pub use trans::Trans;

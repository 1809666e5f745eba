pub mod footer;
pub mod guild_icon;
pub mod layout;
pub mod navbar;
pub mod page;

pub use footer::Footer;
pub use guild_icon::GuildIcon;
pub use layout::Layout;
pub use navbar::Navbar;
pub use page::{EmptyState, Page, Spinner};

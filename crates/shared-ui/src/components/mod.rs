// Layout
pub mod bottom_nav;
pub mod page_header;
pub mod sidebar;

// Content
pub mod avatar;
pub mod badge;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod progress;
pub mod stat_card;

// Controls
pub mod button;
pub mod form;
pub mod tabs;

pub use avatar::*;
pub use badge::*;
pub use bottom_nav::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use form::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
pub use stat_card::*;
pub use tabs::*;

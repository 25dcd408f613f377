pub mod menu;
pub mod settings;
pub mod sidebar;

pub use menu::{MenuEntry, MenuModel};
pub use settings::ShellSettings;
pub use sidebar::{SidebarLayout, SidebarState};

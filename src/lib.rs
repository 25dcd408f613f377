//! Shell crate root: re-exports and module wiring.
//!
//! This crate provides a configurable desktop application shell built on
//! egui/eframe: a frameless window with a collapsible sidebar, tab-style
//! navigation, a remote logo with a local cache, and a profile picture
//! picker with circular crop.
//!
//! The implementation is split into cohesive modules:
//! - `app`: the eframe wrapper and the `run_shell` entry point
//! - `assets`: asset-root discovery and icon file-name derivation
//! - `avatar`: circular profile-picture cropping
//! - `config`: shell configuration (window, sidebar, status panel, logo, fonts)
//! - `data`: models (menu, sidebar state, persisted settings)
//! - `icons`: SVG rasterization and the per-size texture cache
//! - `logo`: cache-first logo acquisition
//! - `theme`: color palette applied to egui visuals

mod panels;

pub mod app;
pub mod assets;
pub mod avatar;
pub mod config;
pub mod data;
pub mod icons;
pub mod logo;
pub mod theme;

// Public re-exports for a compact external API
pub use app::{run_shell, ShellApp};
pub use config::{
    BadgeStyle, FontFile, LogoConfig, ProfileStyle, ShellConfig, SidebarStyle, StatusPanelStyle,
    WindowSize, WindowStyle,
};
pub use data::{MenuEntry, MenuModel, ShellSettings, SidebarLayout, SidebarState};
pub use logo::{resolve_logo, LogoResolution};
pub use theme::ShellTheme;

//! Example: Security-suite shell window
//!
//! What it demonstrates
//! - Configuring [`ShellConfig`] for a full-size window (80% of the primary
//!   display when the `screen-info` feature is enabled).
//! - The default six-entry menu with SVG icons and active-state variants.
//! - The remote logo with its local cache and the profile picture picker.
//!
//! How to run
//! ```bash
//! cargo run --example security_shell
//! ```
//! A frameless window opens with the sidebar expanded; the caret next to the
//! username collapses it to the icon-only rail.

use appshell::{run_shell, ShellConfig, WindowSize};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut cfg = ShellConfig::default();
    cfg.app_name = "rhynecsecurity".into();
    cfg.window.title = "rhynecsecurity".into();
    cfg.window.size = WindowSize::ScreenFraction(0.8);
    cfg.window.app_icon = Some("icons/security.svg".into());

    run_shell(cfg)
}

//! Example: Compact shell window
//!
//! What it demonstrates
//! - The same shell component reconfigured for a smaller chrome: a fixed
//!   900x600 window, a 36 px profile picture, a taller collapsed status
//!   panel, a wider collapsed plan badge, and a faster collapse animation.
//!
//! How to run
//! ```bash
//! cargo run --example compact_shell
//! ```

use appshell::{run_shell, ShellConfig, WindowSize};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut cfg = ShellConfig::default();
    cfg.app_name = "rhyneclite".into();
    cfg.window.title = "rhyneclite".into();
    cfg.window.size = WindowSize::Fixed([900.0, 600.0]);
    cfg.window.app_icon = Some("icons/security.svg".into());
    cfg.profile.picture_diameter = 36.0;
    cfg.status_panel.collapsed_height = 50.0;
    cfg.status_panel.badge.collapsed_size = [40.0, 20.0];
    cfg.sidebar.animation_secs = 0.3;

    run_shell(cfg)
}

//! Main application module for the shell.
//!
//! Split into focused sub-modules:
//!
//! | Sub-module    | Responsibility |
//! | ------------- | -------------- |
//! | [`shell_app`] | Standalone [`ShellApp`] (eframe) wrapper: models, textures, per-frame update |
//! | [`run`]       | Top-level [`run_shell()`] entry point, window sizing, fonts, and icon loading |

mod run;
mod shell_app;

pub use run::run_shell;
pub use shell_app::ShellApp;

pub(crate) use shell_app::LogoDisplay;

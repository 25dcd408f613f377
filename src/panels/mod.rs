pub(crate) mod content_ui;
pub(crate) mod sidebar_ui;

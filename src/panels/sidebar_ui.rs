//! Sidebar rendering.
//!
//! Everything here is a pure read of the models plus direct mutation of
//! them in response to clicks; per-frame visibility and geometry come from
//! [`SidebarLayout`], so there is no imperative show/hide or re-parenting.
//! Top to bottom: logo row, menu entries, then (anchored to the bottom
//! edge) the status panel, a divider, and the profile section.

use eframe::egui;

use crate::app::{LogoDisplay, ShellApp};
use crate::config::BadgeStyle;
use crate::data::{SidebarLayout, SidebarState};
use crate::theme::ShellTheme;

pub(crate) fn show(ctx: &egui::Context, app: &mut ShellApp) {
    let layout = SidebarLayout::compute(app.sidebar, &app.cfg.sidebar, &app.cfg.status_panel);
    let width = ctx.animate_value_with_time(
        egui::Id::new("sidebar_width"),
        layout.width,
        app.cfg.sidebar.animation_secs,
    );
    let theme = app.cfg.theme.clone();

    egui::SidePanel::left("shell_sidebar")
        .resizable(false)
        .exact_width(width)
        .frame(egui::Frame::NONE.fill(theme.sidebar_bg).inner_margin(egui::Margin {
            left: 10,
            right: 8,
            top: 25,
            bottom: 15,
        }))
        .show(ctx, |ui| {
            // Any press-and-drag on sidebar background moves the frameless
            // window. Registered before the widgets so they win hit-testing.
            let drag = ui.interact(
                ui.max_rect(),
                ui.id().with("sidebar_drag"),
                egui::Sense::click_and_drag(),
            );
            if drag.drag_started() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            ui.spacing_mut().item_spacing.y = 9.0;

            header_row(ui, app, &layout, &theme);
            ui.add_space(12.0);
            menu_entries(ui, app, &layout, &theme);

            // Bottom-anchored block; in bottom-up order the first child is
            // the lowest.
            let cross = if layout.show_labels {
                egui::Align::Min
            } else {
                egui::Align::Center
            };
            ui.with_layout(egui::Layout::bottom_up(cross), |ui| {
                profile_section(ui, app, &layout, &theme);
                ui.add_space(1.0);
                divider(ui, theme.divider);
                ui.add_space(8.0);
                status_panel(ui, app, &layout, &theme);
            });
        });
}

// ─────────────────────────────────────────────────────────────────────────────
// Header: logo + app name
// ─────────────────────────────────────────────────────────────────────────────

fn header_row(ui: &mut egui::Ui, app: &mut ShellApp, layout: &SidebarLayout, theme: &ShellTheme) {
    ui.horizontal(|ui| {
        let logo_resp = logo_widget(ui, app, theme);
        if logo_resp.clicked() {
            if let Some(url) = app.cfg.logo.homepage.clone() {
                if let Err(e) = open::that(&url) {
                    log::warn!("failed to open {}: {}", url, e);
                }
            }
        }
        if layout.show_labels {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(&app.cfg.app_name)
                    .size(app.cfg.sidebar.app_name_font_size)
                    .strong()
                    .color(theme.menu_text_active),
            );
        }
    });
}

/// The logo control: remote image once available, a lettered square while
/// unavailable, nothing while still loading. Clickable in every state.
fn logo_widget(ui: &mut egui::Ui, app: &ShellApp, theme: &ShellTheme) -> egui::Response {
    let size = app.cfg.sidebar.logo_size;
    let (rect, resp) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    let resp = resp.on_hover_cursor(egui::CursorIcon::PointingHand);

    match &app.logo {
        LogoDisplay::Image(tex) => {
            // Preserve the decoded aspect ratio inside the square slot.
            let tex_size = tex.size_vec2();
            let scale = (rect.width() / tex_size.x).min(rect.height() / tex_size.y);
            let draw = egui::Rect::from_center_size(rect.center(), tex_size * scale);
            egui::Image::new(tex).paint_at(ui, draw);
        }
        LogoDisplay::Fallback => {
            let letter = app
                .cfg
                .app_name
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?');
            let painter = ui.painter();
            painter.rect_filled(
                rect.shrink(2.0),
                egui::CornerRadius::same(8),
                theme.fallback_logo_bg,
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                letter,
                egui::FontId::proportional(size * 0.5),
                theme.fallback_logo_fg,
            );
        }
        LogoDisplay::Pending(_) => {}
    }
    resp
}

// ─────────────────────────────────────────────────────────────────────────────
// Menu entries
// ─────────────────────────────────────────────────────────────────────────────

fn menu_entries(ui: &mut egui::Ui, app: &mut ShellApp, layout: &SidebarLayout, theme: &ShellTheme) {
    for i in 0..app.menu.entries().len() {
        let (label, icon_rel, icon_size, is_active) = {
            let entry = &app.menu.entries()[i];
            (
                entry.label.clone(),
                entry.current_icon_file(),
                entry.icon_size.unwrap_or(app.cfg.sidebar.menu_icon_size),
                entry.active,
            )
        };
        if menu_row(ui, app, &label, &icon_rel, icon_size, is_active, layout, theme) {
            app.menu.activate(&label);
        }
    }
}

/// One menu row: rounded icon container plus (when expanded) the label.
/// Returns `true` when either part was clicked.
#[allow(clippy::too_many_arguments)]
fn menu_row(
    ui: &mut egui::Ui,
    app: &mut ShellApp,
    label: &str,
    icon_rel: &str,
    icon_size: f32,
    is_active: bool,
    layout: &SidebarLayout,
    theme: &ShellTheme,
) -> bool {
    ui.horizontal(|ui| {
        let container = app.cfg.sidebar.icon_container_size;
        let (rect, resp) =
            ui.allocate_exact_size(egui::vec2(container, container), egui::Sense::click());
        let resp = resp.on_hover_cursor(egui::CursorIcon::PointingHand);
        let bg = if resp.hovered() {
            theme.icon_container_hover_bg
        } else {
            theme.icon_container_bg
        };
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(7), bg);
        if let Some(tex) = app.icons.texture(ui.ctx(), &app.resolver, icon_rel, icon_size) {
            let draw = egui::Rect::from_center_size(rect.center(), egui::vec2(icon_size, icon_size));
            egui::Image::new(&tex).paint_at(ui, draw);
        }

        let mut clicked = resp.clicked();
        if layout.show_labels {
            ui.add_space(10.0);
            let color = if is_active {
                theme.menu_text_active
            } else {
                theme.menu_text
            };
            let mut text = egui::RichText::new(label)
                .size(app.cfg.sidebar.menu_font_size)
                .color(color);
            if is_active {
                text = text.strong();
            }
            let label_resp = ui
                .add(egui::Label::new(text).sense(egui::Sense::click()))
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            clicked |= label_resp.clicked();
        }
        clicked
    })
    .inner
}

// ─────────────────────────────────────────────────────────────────────────────
// Status panel
// ─────────────────────────────────────────────────────────────────────────────

fn status_panel(ui: &mut egui::Ui, app: &ShellApp, layout: &SidebarLayout, theme: &ShellTheme) {
    let style = &app.cfg.status_panel;
    let width = ui.available_width();
    ui.allocate_ui_with_layout(
        egui::vec2(width, layout.panel_height),
        egui::Layout::top_down(egui::Align::Min),
        |ui| {
            egui::Frame::NONE
                .fill(theme.panel_bg)
                .corner_radius(egui::CornerRadius::same(style.corner_radius))
                .inner_margin(egui::Margin {
                    left: 8,
                    right: 8,
                    top: 5,
                    bottom: 6,
                })
                .show(ui, |ui| {
                    ui.set_min_width(width - 16.0);
                    ui.set_min_height(layout.panel_height - 11.0);
                    ui.spacing_mut().item_spacing.y = 1.0;

                    if layout.show_panel_dots {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            dots_button(ui, theme);
                        });
                    }

                    let cross = if layout.show_labels {
                        egui::Align::Min
                    } else {
                        egui::Align::Center
                    };
                    ui.with_layout(egui::Layout::top_down(cross), |ui| {
                        badge(ui, &style.badge, layout.badge_size, theme);
                        if layout.show_email {
                            ui.label(
                                egui::RichText::new(&style.email)
                                    .size(style.email_font_size)
                                    .color(theme.email_text),
                            );
                        }
                    });
                });
        },
    );
}

/// Plan badge: rounded outline with centered text, scaled with the layout.
fn badge(ui: &mut egui::Ui, style: &BadgeStyle, size: [f32; 2], theme: &ShellTheme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size[0], size[1]), egui::Sense::hover());
    let painter = ui.painter();
    let radius = style.corner_radius.min((size[1] / 2.0) as u8);
    painter.rect_stroke(
        rect.shrink(1.0),
        egui::CornerRadius::same(radius),
        egui::Stroke::new(1.5, theme.badge_ink),
        egui::StrokeKind::Inside,
    );
    let font_size = style.font_size * (size[1] / style.expanded_size[1].max(1.0));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        &style.label,
        egui::FontId::proportional(font_size),
        theme.badge_ink,
    );
}

fn dots_button(ui: &mut egui::Ui, theme: &ShellTheme) -> egui::Response {
    let dots = egui::RichText::new(egui_phosphor::regular::DOTS_THREE_VERTICAL)
        .size(16.0)
        .color(theme.chrome_icon);
    ui.add(egui::Button::new(dots).frame(false).small())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn divider(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 1.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::ZERO, color);
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile section
// ─────────────────────────────────────────────────────────────────────────────

/// Expanded: picture, username, dots and the collapse toggle in one row.
/// Collapsed: the toggle sits directly above the picture in the narrow
/// column; in the enclosing bottom-up layout the picture is added first.
fn profile_section(
    ui: &mut egui::Ui,
    app: &mut ShellApp,
    layout: &SidebarLayout,
    theme: &ShellTheme,
) {
    if layout.show_labels {
        ui.horizontal(|ui| {
            profile_picture(ui, app, theme);
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(&app.cfg.profile.username)
                    .size(app.cfg.profile.username_font_size)
                    .strong()
                    .color(theme.menu_text_active),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if collapse_toggle(ui, app.sidebar, theme).clicked() {
                    app.sidebar.toggle();
                }
                dots_button(ui, theme);
            });
        });
    } else {
        profile_picture(ui, app, theme);
        ui.add_space(10.0);
        if collapse_toggle(ui, app.sidebar, theme).clicked() {
            app.sidebar.toggle();
        }
    }
}

/// Circular picture control with the menu-dots affordance overlaid; clicking
/// it opens the image picker.
fn profile_picture(ui: &mut egui::Ui, app: &mut ShellApp, theme: &ShellTheme) {
    let diameter = app.cfg.profile.picture_diameter;
    let (rect, resp) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::click());
    let resp = resp.on_hover_cursor(egui::CursorIcon::PointingHand);

    if let Some(tex) = &app.avatar {
        egui::Image::new(tex).paint_at(ui, rect);
    } else {
        ui.painter().circle_filled(
            rect.center(),
            diameter / 2.0 - 1.0,
            theme.profile_placeholder_bg,
        );
    }
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        egui_phosphor::regular::DOTS_THREE_VERTICAL,
        egui::FontId::proportional(18.0),
        theme.chrome_icon,
    );

    if resp.clicked() {
        pick_profile_picture(ui.ctx(), app);
    }
}

/// Modal image picker. Cancel leaves settings and display untouched.
fn pick_profile_picture(ctx: &egui::Context, app: &mut ShellApp) {
    let mut dialog =
        rfd::FileDialog::new().add_filter("Images", &["png", "jpg", "jpeg", "bmp"]);
    if let Some(dir) = dirs::picture_dir() {
        dialog = dialog.set_directory(dir);
    }
    let Some(path) = dialog.pick_file() else {
        return;
    };
    app.set_profile_picture(ctx, &path);
}

/// Caret pointing in the direction of the next transition.
fn collapse_toggle(ui: &mut egui::Ui, state: SidebarState, theme: &ShellTheme) -> egui::Response {
    let glyph = if state.is_collapsed() {
        egui_phosphor::regular::CARET_RIGHT
    } else {
        egui_phosphor::regular::CARET_LEFT
    };
    let text = egui::RichText::new(glyph).size(18.0).color(theme.chrome_icon);
    ui.add(egui::Button::new(text).frame(false).small())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

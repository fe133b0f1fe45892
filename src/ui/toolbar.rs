use egui::{menu, RichText, Ui};

use gantt_view::model::ViewMode;

use crate::app::GanttApp;
use crate::ui::theme;

const LOCALES: [(&str, &str); 4] = [
    ("en-US", "English (US)"),
    ("en-GB", "English (UK)"),
    ("fr-FR", "Français"),
    ("de-DE", "Deutsch"),
];

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut GanttApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui
                .button(format!("{}  New Project", egui_phosphor::regular::FILE))
                .clicked()
            {
                app.new_project();
                ui.close_menu();
            }
            if ui
                .button(format!("{}  Open...", egui_phosphor::regular::FOLDER_OPEN))
                .clicked()
            {
                app.open_project();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .button(format!(
                    "{}  Save          Ctrl+S",
                    egui_phosphor::regular::FLOPPY_DISK
                ))
                .clicked()
            {
                app.save_project();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_project_as();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            ui.label(RichText::new("Granularity").small().weak());
            for mode in ViewMode::ALL {
                if ui
                    .radio_value(&mut app.view_mode, mode, mode.label())
                    .clicked()
                {
                    ui.close_menu();
                }
            }
            ui.separator();
            ui.label(RichText::new("Locale").small().weak());
            for (tag, label) in LOCALES {
                if ui
                    .radio_value(&mut app.locale, tag.to_string(), label)
                    .clicked()
                {
                    ui.close_menu();
                }
            }
            ui.separator();
            ui.checkbox(&mut app.rtl, "Right-to-left layout");
            ui.separator();
            if ui
                .button(format!(
                    "{}  Scroll to Today",
                    egui_phosphor::regular::CALENDAR
                ))
                .clicked()
            {
                app.scroll_to_today = true;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("  About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });
    });
}

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use egui::Vec2;

use gantt_view::layout::scroll::{panel_margins, ScrollSynchronizer};
use gantt_view::model::{Project, Task, TaskKind, ViewMode};

use crate::io;
use crate::ui;

/// Main application state.
pub struct GanttApp {
    pub project: Project,
    pub view_mode: ViewMode,
    pub locale: String,
    pub rtl: bool,
    pub selected: Option<String>,
    pub file_path: Option<PathBuf>,
    pub status_message: String,

    // Dialog state
    pub show_add_task: bool,
    pub show_about: bool,
    pub new_task_name: String,
    pub new_task_start: NaiveDate,
    pub new_task_end: NaiveDate,
    pub new_task_progress: f32,
    pub new_task_dependency: Option<String>,
    pub new_task_is_milestone: bool,

    // Scroll synchronization: one authoritative offset per axis plus the
    // surfaces' last observed native offsets.
    pub h_scroll: ScrollSynchronizer,
    pub v_scroll: ScrollSynchronizer,
    pub chart_native: Vec2,
    pub list_native: f32,
    pub scroll_to_today: bool,
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icons as a font fallback so they render inline.
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let today = Local::now().date_naive();
        Self {
            project: Self::sample_project(),
            view_mode: ViewMode::Day,
            locale: "en-US".to_string(),
            rtl: false,
            selected: None,
            file_path: None,
            status_message: "Ready".to_string(),
            show_add_task: false,
            show_about: false,
            new_task_name: String::new(),
            new_task_start: today,
            new_task_end: today + chrono::Duration::days(7),
            new_task_progress: 0.0,
            new_task_dependency: None,
            new_task_is_milestone: false,
            h_scroll: ScrollSynchronizer::new(),
            v_scroll: ScrollSynchronizer::new(),
            chart_native: Vec2::ZERO,
            list_native: 0.0,
            scroll_to_today: false,
        }
    }

    /// Generate a sample project for demonstration.
    fn sample_project() -> Project {
        let today = Local::now().date_naive();
        let at = |day: u32, hour: u32, minute: u32| -> NaiveDateTime {
            NaiveDate::from_ymd_opt(today.year(), today.month(), day)
                .unwrap_or(today)
                .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
        };

        let mut project_bar = Task::new("ProjectSample", "Some Project", at(1, 0, 0), at(15, 0, 0));
        project_bar.kind = TaskKind::Project;
        project_bar.progress = 25.0;
        project_bar.display_order = Some(1);

        let mut tasks = vec![project_bar];
        let entries: [(&str, &str, (u32, u32, u32), (u32, u32, u32), f32, &[&str]); 8] = [
            ("Task 0", "Idea", (1, 0, 0), (2, 12, 28), 45.0, &[]),
            ("Task 1", "Research", (2, 0, 0), (4, 0, 0), 25.0, &["Task 0"]),
            ("Task 2", "Discussion with team", (4, 0, 0), (8, 0, 0), 10.0, &["Task 1"]),
            ("Task 3", "Developing", (8, 0, 0), (9, 0, 0), 2.0, &["Task 2"]),
            ("Task 4", "Review", (8, 0, 0), (10, 0, 0), 70.0, &["Task 2"]),
            ("Task 5", "Bug Fixing", (10, 0, 0), (12, 0, 0), 30.0, &["Task 3", "Task 4"]),
            ("Task 7", "Post-Release Testing", (16, 0, 0), (17, 0, 0), 0.0, &["Task 6"]),
            ("Task 9", "Party Time", (18, 0, 0), (19, 0, 0), 0.0, &[]),
        ];
        for (order, (id, name, s, e, progress, deps)) in entries.into_iter().enumerate() {
            let mut task = Task::new(id, name, at(s.0, s.1, s.2), at(e.0, e.1, e.2))
                .with_dependencies(deps);
            task.progress = progress;
            task.project = Some("ProjectSample".to_string());
            task.display_order = Some(order as u32 + 2);
            tasks.push(task);
        }
        // The release milestone sits between development and the follow-ups.
        let mut release = Task::new_milestone("Task 6", "Release", at(15, 0, 0));
        release.dependencies = vec!["Task 5".to_string()];
        release.project = Some("ProjectSample".to_string());
        release.display_order = Some(8);
        tasks.push(release);

        // Party Time is present but not interactive.
        if let Some(party) = tasks.iter_mut().find(|t| t.id == "Task 9") {
            party.is_disabled = true;
            party.project = None;
            party.display_order = Some(10);
        }
        if let Some(testing) = tasks.iter_mut().find(|t| t.id == "Task 7") {
            testing.display_order = Some(9);
        }

        let mut project = Project::new("Sample Project");
        project.tasks = tasks;
        project.sort_by_display_order();
        project
    }

    // ── File operations ─────────────────────────────────────────────────────

    pub fn new_project(&mut self) {
        self.project = Project::default();
        self.file_path = None;
        self.selected = None;
        self.status_message = "New project created".to_string();
    }

    pub fn open_project(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Gantt Project", &["gantt.json", "json"])
            .pick_file()
        {
            match io::load_project(&path) {
                Ok(mut project) => {
                    project.sort_by_display_order();
                    self.project = project;
                    self.file_path = Some(path);
                    self.selected = None;
                    self.status_message = "Project loaded".to_string();
                }
                Err(e) => {
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_project(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.project.touch();
            match io::save_project(&self.project, &path) {
                Ok(()) => self.status_message = "Project saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        } else {
            self.save_project_as();
        }
    }

    pub fn save_project_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Gantt Project", &["gantt.json", "json"])
            .set_file_name(format!("{}.gantt.json", self.project.name))
            .save_file()
        {
            self.file_path = Some(path.clone());
            self.project.touch();
            match io::save_project(&self.project, &path) {
                Ok(()) => self.status_message = "Project saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        }
    }

    // ── Task operations ─────────────────────────────────────────────────────

    pub fn create_task_from_dialog(&mut self) {
        let name = if self.new_task_name.is_empty() {
            "New Task".to_string()
        } else {
            self.new_task_name.clone()
        };
        let start = self.new_task_start.and_time(NaiveTime::MIN);
        let end = self.new_task_end.max(self.new_task_start).and_time(NaiveTime::MIN);

        let id = uuid::Uuid::new_v4().to_string();
        let mut task = if self.new_task_is_milestone {
            Task::new_milestone(id, name, start)
        } else {
            Task::new(id, name, start, end)
        };
        task.progress = self.new_task_progress;
        if let Some(dep) = self.new_task_dependency.clone() {
            task.dependencies.push(dep);
        }

        self.project.tasks.push(task);
        self.project.touch();
        self.reset_dialog_fields();
        self.status_message = "Task added".to_string();
    }

    pub fn delete_task(&mut self, id: &str) {
        self.project.tasks.retain(|t| t.id != id);
        // Links pointing at the removed task go stale; the layout core
        // omits their arrows.
        self.project.touch();
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.status_message = "Task deleted".to_string();
    }

    fn reset_dialog_fields(&mut self) {
        let today = Local::now().date_naive();
        self.new_task_name = String::new();
        self.new_task_start = today;
        self.new_task_end = today + chrono::Duration::days(7);
        self.new_task_progress = 0.0;
        self.new_task_dependency = None;
        self.new_task_is_milestone = false;
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S)) {
            self.save_project();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.project.tasks.len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(" · ")
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(self.view_mode.label())
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // The frozen task-list panel sits on whichever side the margin swap
        // assigns it: left of the timeline in LTR, right of it in RTL.
        let (left_margin, _) = panel_margins(ui::theme::SIDE_PANEL_WIDTH, self.rtl);
        let panel_frame = egui::Frame::default()
            .fill(ui::theme::BG_PANEL)
            .inner_margin(egui::Margin::same(6.0))
            .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE));
        let side_panel = if left_margin > 0.0 {
            egui::SidePanel::left("task_panel")
        } else {
            egui::SidePanel::right("task_panel")
        };

        let mut list_action = ui::task_list::TaskListAction::None;
        side_panel
            .exact_width(ui::theme::SIDE_PANEL_WIDTH)
            .resizable(false)
            .frame(panel_frame)
            .show(ctx, |ui| {
                list_action = ui::task_list::show_task_list(
                    &self.project.tasks,
                    self.selected.as_deref(),
                    50.0,
                    50.0,
                    &mut self.v_scroll,
                    &mut self.list_native,
                    ui,
                );
            });

        match list_action {
            ui::task_list::TaskListAction::Select(id) => self.selected = Some(id),
            ui::task_list::TaskListAction::Delete(id) => self.delete_task(&id),
            ui::task_list::TaskListAction::Add => self.show_add_task = true,
            ui::task_list::TaskListAction::None => {}
        }

        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        let scroll_to_today = std::mem::take(&mut self.scroll_to_today);
        let mut chart_action = ui::chart::ChartAction::default();
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            chart_action = ui::chart::show_chart(
                ui::chart::ChartPanel {
                    tasks: &self.project.tasks,
                    view_mode: self.view_mode,
                    locale: &self.locale,
                    rtl: self.rtl,
                    selected: self.selected.as_deref(),
                    scroll_to_today,
                },
                &mut self.h_scroll,
                &mut self.v_scroll,
                &mut self.chart_native,
                ui,
            );
        });
        if let Some(id) = chart_action.select {
            self.selected = Some(id);
        } else if chart_action.clear_selection {
            self.selected = None;
        }

        if self.show_add_task {
            ui::dialogs::show_add_task_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

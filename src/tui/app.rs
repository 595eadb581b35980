//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the session; the ledger lives exactly as long as the TUI does.

use chrono::{Local, NaiveDate};
use tracing::error;

use crate::config::paths::MoonlightPaths;
use crate::config::settings::Settings;
use crate::models::{Gender, Major};
use crate::reports::AnalysisReport;
use crate::session::Session;

use super::dialogs::transaction::TransactionFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Records,
    Analysis,
}

impl FocusedPanel {
    pub fn next(self) -> Self {
        match self {
            Self::Sidebar => Self::Records,
            Self::Records => Self::Analysis,
            Self::Analysis => Self::Sidebar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Sidebar => Self::Analysis,
            Self::Records => Self::Sidebar,
            Self::Analysis => Self::Records,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddRecord,
    Help,
}

/// Rows of the profile editor in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Gender,
    Age,
    Major,
    Budgeting,
    Records,
    GenerateReport,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        Self::Gender,
        Self::Age,
        Self::Major,
        Self::Budgeting,
        Self::Records,
        Self::GenerateReport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gender => "性别",
            Self::Age => "年龄",
            Self::Major => "专业",
            Self::Budgeting => "是否理财",
            Self::Records => "是否记账",
            Self::GenerateReport => "生成月光分析报告",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

/// Tabs of the analysis panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisTab {
    #[default]
    Trend,
    Category,
    Prediction,
}

impl AnalysisTab {
    pub const ALL: [AnalysisTab; 3] = [Self::Trend, Self::Category, Self::Prediction];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Trend => "趋势分析",
            Self::Category => "类别分析",
            Self::Prediction => "月光预测",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

/// Step through a fixed option list, wrapping at both ends
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    all[next]
}

/// Main application state
pub struct App<'a> {
    /// Ledger and profile for this run
    pub session: Session,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a MoonlightPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row of the profile editor
    pub profile_field: ProfileField,

    /// Last generated report; cleared when the profile changes
    pub report: Option<AnalysisReport>,

    /// Active analysis tab
    pub analysis_tab: AnalysisTab,

    /// Selected row in the records table
    pub selected_record_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Toasts shown over the main panel
    pub notifications: NotificationQueue,

    /// Record entry form state
    pub transaction_form: TransactionFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty ledger
    pub fn new(settings: &'a Settings, paths: &'a MoonlightPaths) -> Self {
        Self {
            session: Session::new(settings.default_profile),
            settings,
            paths,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            profile_field: ProfileField::default(),
            report: None,
            analysis_tab: AnalysisTab::default(),
            selected_record_index: 0,
            status_message: None,
            notifications: NotificationQueue::new(),
            transaction_form: TransactionFormState::new(today()),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddRecord {
            self.transaction_form = TransactionFormState::new(today());
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn next_panel(&mut self) {
        self.focused_panel = self.focused_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.focused_panel = self.focused_panel.prev();
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => self.profile_field = self.profile_field.prev(),
            FocusedPanel::Records => {
                self.selected_record_index = self.selected_record_index.saturating_sub(1);
            }
            FocusedPanel::Analysis => {}
        }
    }

    /// Move selection down in the focused panel
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => self.profile_field = self.profile_field.next(),
            FocusedPanel::Records => {
                let max = self.session.ledger().len();
                if self.selected_record_index + 1 < max {
                    self.selected_record_index += 1;
                }
            }
            FocusedPanel::Analysis => {}
        }
    }

    /// Change the selected profile row; activates the report button
    pub fn adjust_profile(&mut self, forward: bool) {
        let field = self.profile_field;
        if field == ProfileField::GenerateReport {
            self.generate_report();
            return;
        }

        let profile = self.session.profile_mut();
        match field {
            ProfileField::Gender => profile.gender = cycle(&Gender::ALL, profile.gender, forward),
            ProfileField::Age => {
                let age = if forward {
                    profile.age.saturating_add(1)
                } else {
                    profile.age.saturating_sub(1)
                };
                profile.set_age(age);
            }
            ProfileField::Major => profile.major = cycle(&Major::ALL, profile.major, forward),
            ProfileField::Budgeting => profile.uses_budgeting_tool = !profile.uses_budgeting_tool,
            ProfileField::Records => profile.keeps_records = !profile.keeps_records,
            ProfileField::GenerateReport => {}
        }
        self.report = None;
    }

    /// Generate the analysis report for the current profile
    pub fn generate_report(&mut self) {
        self.report = Some(self.session.analysis_report());
        self.set_status("报告已生成");
    }

    /// Write the CSV export into the configured export directory
    pub fn export(&mut self, exported_on: NaiveDate) {
        if self.session.ledger().is_empty() {
            self.notify(Notification::warning("暂无消费记录可导出"));
            return;
        }

        let dir = self.settings.export_dir();
        let result = self
            .session
            .export_artifact(exported_on)
            .and_then(|artifact| artifact.write_to_dir(&dir));

        match result {
            Ok(path) => {
                self.set_status(format!("已导出: {}", path.display()));
                self.notify(Notification::success(format!("已导出到 {}", path.display())));
            }
            Err(err) => {
                error!(error = %err, dir = %dir.display(), "export failed");
                self.notify(Notification::error(format!("导出失败: {}", err)));
            }
        }
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

//! Record entry dialog
//!
//! Modal form for adding a spending record: date, amount, category,
//! payment method and an optional note. The ledger decides whether the
//! amount is acceptable; the form only checks that the text parses.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, Money, PaymentMethod, Transaction};
use crate::session::RECORD_ADDED_MESSAGE;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::Notification;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Date,
    Amount,
    Category,
    Payment,
    Note,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Payment,
            Self::Payment => Self::Note,
            Self::Note => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Note,
            Self::Amount => Self::Date,
            Self::Category => Self::Amount,
            Self::Payment => Self::Category,
            Self::Note => Self::Payment,
        }
    }

    fn is_selector(self) -> bool {
        matches!(self, Self::Category | Self::Payment)
    }
}

/// State for the record form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub date_input: TextInput,
    pub amount_input: TextInput,
    pub category: Category,
    pub payment_method: PaymentMethod,
    pub note_input: TextInput,
    /// Error message to display
    pub error_message: Option<String>,
}

impl TransactionFormState {
    /// A blank form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self {
            focused_field: TransactionField::Date,
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format(DATE_FORMAT).to_string()),
            amount_input: TextInput::new().placeholder("0.00"),
            category: Category::default(),
            payment_method: PaymentMethod::default(),
            note_input: TextInput::new().placeholder("可选"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == TransactionField::Date;
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
        self.note_input.focused = self.focused_field == TransactionField::Note;
    }

    /// The focused text input, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Note => Some(&mut self.note_input),
            TransactionField::Category | TransactionField::Payment => None,
        }
    }

    /// Step the focused selector through its options
    pub fn cycle_selection(&mut self, forward: bool) {
        match self.focused_field {
            TransactionField::Category => {
                let all = Category::ALL;
                let i = self.category.index();
                self.category = all[step(i, all.len(), forward)];
            }
            TransactionField::Payment => {
                let all = PaymentMethod::ALL;
                let i = self.payment_method.index();
                self.payment_method = all[step(i, all.len(), forward)];
            }
            _ => {}
        }
    }

    /// Build a record from the form
    ///
    /// An empty amount reads as zero so that the ledger reports it the same
    /// way as any other non-positive amount.
    pub fn build_transaction(&self) -> Result<Transaction, String> {
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), DATE_FORMAT)
            .map_err(|_| "日期格式错误，请使用 YYYY-MM-DD".to_string())?;

        let amount_text = self.amount_input.value().trim();
        let amount = if amount_text.is_empty() {
            Money::zero()
        } else {
            Money::parse(amount_text).map_err(|_| "金额格式错误".to_string())?
        };

        Ok(
            Transaction::new(date, amount, self.category, self.payment_method)
                .with_note(self.note_input.value()),
        )
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// Render the record dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, frame.area());
    let form = &app.transaction_form;

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" 添加消费记录 ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Payment
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(form.date_input.line("    日期")), chunks[0]);
    frame.render_widget(Paragraph::new(form.amount_input.line("    金额")), chunks[1]);
    frame.render_widget(
        Paragraph::new(selector_line(
            "    类别",
            form.category.label(),
            form.focused_field == TransactionField::Category,
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(selector_line(
            "支付方式",
            form.payment_method.label(),
            form.focused_field == TransactionField::Payment,
        )),
        chunks[3],
    );
    frame.render_widget(Paragraph::new(form.note_input.line("    备注")), chunks[4]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" 下一项  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" 选择  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" 添加记录  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" 取消"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn selector_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let arrow_style = Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray });

    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled("◀ ", arrow_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶", arrow_style),
    ])
}

/// Handle key input for the record dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }

        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            return true;
        }

        KeyCode::Down => {
            form.next_field();
            return true;
        }

        KeyCode::Enter => {
            if let Err(e) = save_record(app) {
                app.transaction_form.set_error(e);
            }
            return true;
        }

        KeyCode::Left | KeyCode::Right if form.focused_field.is_selector() => {
            form.clear_error();
            form.cycle_selection(key.code == KeyCode::Right);
            return true;
        }

        KeyCode::Char(' ') if form.focused_field.is_selector() => {
            form.cycle_selection(true);
            return true;
        }

        _ => {}
    }

    let Some(input) = form.focused_input() else {
        return false;
    };

    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => input.insert(c),
        _ => return false,
    }
    form.clear_error();
    true
}

/// Submit the form to the session
fn save_record(app: &mut App) -> Result<(), String> {
    let record = app.transaction_form.build_transaction()?;

    app.session.submit(record).map_err(|e| e.form_message())?;

    app.close_dialog();
    app.selected_record_index = 0;
    app.set_status(RECORD_ADDED_MESSAGE);
    app.notify(Notification::success(RECORD_ADDED_MESSAGE));

    Ok(())
}

use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use shelter_core::{
    login_form::{self, LoginForm},
    validation::Field,
};
use tui_input::{backend::crossterm::EventHandler, Input};
use unicode_width::UnicodeWidthStr;

/// Frames for the spinner on the sign in button
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

form_fields!(Focus, Email, Password, SignIn, Register);

/// The login screen: two text inputs and two buttons. Values live in the
/// inputs while editing; every change is forwarded to the `LoginForm`.
#[derive(Debug)]
pub struct LoginScreen {
    /// Which widget has focus
    focus: Focus,

    /// Who are you?
    email: Input,

    /// What's your password? (Will be masked)
    password: Input,

    /// Current spinner frame
    spinner: usize,
}

impl LoginScreen {
    pub fn render(&self, frame: &mut Frame<'_>, body_area: Rect, form: &LoginForm) {
        let popup_vert = Layout::vertical([Constraint::Length(17)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let rows = Layout::vertical(Constraint::from_lengths([1, 1, 3, 1, 3, 1, 3, 1, 3]));
        let [title_area, _, email_area, email_error_area, password_area, password_error_area, sign_in_area, divider_area, register_area] =
            rows.areas(popup_area);

        frame.render_widget(
            Paragraph::new("Welcome to the Shelter Market")
                .bold()
                .centered(),
            title_area,
        );

        self.render_input(frame, email_area, Focus::Email, "Email", &self.email);
        Self::render_error(frame, email_error_area, form, Field::Email);

        self.render_input(frame, password_area, Focus::Password, "Password", &self.password);
        Self::render_error(frame, password_error_area, form, Field::Password);

        let sign_in = if form.is_loading() {
            format!("{} Sign In", SPINNER[self.spinner % SPINNER.len()])
        } else {
            "○ Sign In".to_string()
        };
        self.render_button(frame, sign_in_area, Focus::SignIn, &sign_in, !form.is_loading());

        frame.render_widget(
            Paragraph::new("─── OR REGISTER ───")
                .fg(Color::DarkGray)
                .centered(),
            divider_area,
        );

        self.render_button(frame, register_area, Focus::Register, "Register", true);
    }

    #[expect(clippy::cast_possible_truncation)]
    fn render_input(&self, frame: &mut Frame<'_>, area: Rect, field: Focus, title: &str, input: &Input) {
        let width = area.width.saturating_sub(2 + 1); // -2 for the border, -1 for the cursor

        let scroll = input.visual_scroll(width as usize);

        let shown = if field == Focus::Password {
            mask(input.value())
        } else {
            input.value().to_string()
        };

        let widget = Paragraph::new(shown).scroll((0, scroll as u16)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(self.border_style(field)),
        );

        frame.render_widget(widget, area);

        if self.focus == field {
            frame.set_cursor_position((
                area.x
                    + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                    + 1, // just past the end of the text
                area.y + 1, // +1 row for the border/title
            ));
        }
    }

    fn render_error(frame: &mut Frame<'_>, area: Rect, form: &LoginForm, field: Field) {
        if let Some(err) = form.error(field) {
            frame.render_widget(Paragraph::new(err.to_string()).fg(Color::Red), area);
        }
    }

    fn render_button(&self, frame: &mut Frame<'_>, area: Rect, field: Focus, label: &str, enabled: bool) {
        let text_style = if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new(label)
            .centered()
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style(field)),
            );

        frame.render_widget(button, area);
    }

    fn border_style(&self, field: Focus) -> Style {
        if self.focus == field {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    /// Handle a key press, returning whatever the login form should hear
    /// about it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<login_form::Action> {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter => match self.focus {
                Focus::Register => Some(login_form::Action::GoToRegister),
                Focus::Email | Focus::Password | Focus::SignIn => {
                    Some(login_form::Action::Submit)
                }
            },
            _ => {
                let event = Event::Key(key);

                match self.focus {
                    Focus::Email => Self::edit(&mut self.email, &event)
                        .map(login_form::Action::SetEmail),
                    Focus::Password => Self::edit(&mut self.password, &event)
                        .map(login_form::Action::SetPassword),
                    Focus::SignIn | Focus::Register => None,
                }
            }
        }
    }

    /// Apply a key to an input, returning the new value if it changed.
    fn edit(input: &mut Input, event: &Event) -> Option<String> {
        input
            .handle_event(event)
            .filter(|changed| changed.value)
            .map(|_| input.value().to_string())
    }

    /// Advance the spinner one frame
    pub fn tick(&mut self) {
        self.spinner = self.spinner.wrapping_add(1);
    }
}

/// One `*` per display column, so the cursor (which `tui-input` places by
/// display width) lines up with the end of the mask.
fn mask(value: &str) -> String {
    "*".repeat(value.width())
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            focus: Focus::first(),
            email: Input::new(String::new()),
            password: Input::new(String::new()),
            spinner: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) -> Vec<login_form::Action> {
        text.chars()
            .filter_map(|c| screen.handle_key(key(KeyCode::Char(c))))
            .collect()
    }

    #[test]
    fn mask_matches_cursor_width() {
        let mut screen = LoginScreen::default();
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "a界b");

        assert_eq!(mask(screen.password.value()), "****");
        assert_eq!(screen.password.visual_cursor(), 4);
    }

    #[test]
    fn focus_starts_on_email() {
        assert_eq!(LoginScreen::default().focus, Focus::Email);
    }

    #[test]
    fn tab_cycles_through_everything() {
        let mut screen = LoginScreen::default();
        let mut seen = vec![screen.focus];

        for _ in 0..4 {
            screen.handle_key(key(KeyCode::Tab));
            seen.push(screen.focus);
        }

        assert_eq!(
            seen,
            vec![
                Focus::Email,
                Focus::Password,
                Focus::SignIn,
                Focus::Register,
                Focus::Email
            ]
        );
    }

    #[test]
    fn back_tab_wraps_around() {
        let mut screen = LoginScreen::default();

        screen.handle_key(key(KeyCode::BackTab));

        assert_eq!(screen.focus, Focus::Register);
    }

    #[test]
    fn typing_in_email_forwards_the_value() {
        let mut screen = LoginScreen::default();

        let actions = type_text(&mut screen, "ab");

        assert_eq!(
            actions,
            vec![
                login_form::Action::SetEmail("a".to_string()),
                login_form::Action::SetEmail("ab".to_string()),
            ]
        );
    }

    #[test]
    fn typing_in_password_forwards_the_value() {
        let mut screen = LoginScreen::default();
        screen.handle_key(key(KeyCode::Tab));

        let actions = type_text(&mut screen, "pw");

        assert_eq!(
            actions.last(),
            Some(&login_form::Action::SetPassword("pw".to_string()))
        );
    }

    #[test]
    fn moving_the_cursor_does_not_touch_the_form() {
        let mut screen = LoginScreen::default();

        assert_eq!(screen.handle_key(key(KeyCode::Left)), None);
    }

    #[test]
    fn typing_on_buttons_does_nothing() {
        let mut screen = LoginScreen::default();
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));

        assert_eq!(type_text(&mut screen, "x"), vec![]);
    }

    #[test]
    fn enter_submits_from_fields_and_sign_in() {
        let mut screen = LoginScreen::default();

        for _ in 0..3 {
            assert_eq!(
                screen.handle_key(key(KeyCode::Enter)),
                Some(login_form::Action::Submit)
            );
            screen.handle_key(key(KeyCode::Tab));
        }
    }

    #[test]
    fn enter_on_register_goes_to_register() {
        let mut screen = LoginScreen::default();
        screen.handle_key(key(KeyCode::BackTab));

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            Some(login_form::Action::GoToRegister)
        );
    }
}

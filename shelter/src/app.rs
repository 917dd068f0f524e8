/// Things that can happen to this app
mod action;
pub use action::Action;

/// Side effects, and how to run them
mod effect;
pub use effect::{Effect, EffectContext};

/// The login form itself
mod login_screen;
use login_screen::LoginScreen;

/// Where you end up after the login form
mod screens;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::Paragraph, Frame};
use shelter_core::{login_form, toast::Variant, LoginForm, Route, Toast};
use std::process::ExitCode;

/// The "functional core" of the app.
pub struct App {
    /// Which screen we're on
    route: Route,

    /// Field values, errors, and loading state
    form: LoginForm,

    /// Widgets for editing the form
    login_screen: LoginScreen,

    /// The latest toast (visible at the bottom of the screen)
    toast: Option<Toast>,

    /// The latest problem. Whichever of this and `toast` arrived last is
    /// the one shown; the other is cleared.
    status_line: Option<String>,

    /// Should toasts also go to the desktop?
    desktop_notifications: bool,

    /// Set once we want to exit, after final effects
    exiting: Option<ExitCode>,
}

impl App {
    /// Create a new instance of the app
    pub fn new(desktop_notifications: bool) -> Self {
        Self {
            route: Route::default(),
            form: LoginForm::new(),
            login_screen: LoginScreen::default(),
            toast: None,
            status_line: None,
            desktop_notifications,
            exiting: None,
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        match self.route {
            Route::Login => self.login_screen.render(frame, body_area, &self.form),
            Route::Dashboard => screens::render_dashboard(frame, body_area),
            Route::Register => screens::render_register(frame, body_area),
        }

        let status = match (&self.toast, &self.status_line) {
            (Some(toast), _) => toast_line(toast),
            (None, Some(problem)) => Line::from(problem.as_str()).fg(Color::Yellow),
            (None, None) => Line::from(hint(self.route)).fg(Color::DarkGray),
        };

        frame.render_widget(Paragraph::new(status), status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => self.handle_key(key),
            Action::Form(form_action) => {
                let form_effects = self.form.handle(form_action);
                self.apply(form_effects)
            }
            Action::Tick => {
                if self.form.is_loading() {
                    self.login_screen.tick();
                }

                vec![]
            }
            Action::Problem(problem) => {
                self.toast = None;
                self.status_line = Some(problem);

                vec![]
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.exiting = Some(ExitCode::SUCCESS);
            return vec![];
        }

        match self.route {
            Route::Login => match self.login_screen.handle_key(key) {
                Some(form_action) => {
                    let form_effects = self.form.handle(form_action);
                    self.apply(form_effects)
                }
                None => vec![],
            },
            Route::Dashboard | Route::Register => {
                match key.code {
                    KeyCode::Char('q') => self.exiting = Some(ExitCode::SUCCESS),
                    KeyCode::Esc if self.route == Route::Register => self.navigate(Route::Login),
                    _ => {}
                }

                vec![]
            }
        }
    }

    /// Carry out what the login form asked for. Navigation and toasts happen
    /// right here; anything that needs I/O becomes an `Effect`.
    fn apply(&mut self, form_effects: Vec<login_form::Effect>) -> Vec<Effect> {
        let mut effects = Vec::new();

        for form_effect in form_effects {
            match form_effect {
                login_form::Effect::LogIn(credentials) => {
                    effects.push(Effect::LogIn(credentials));
                }
                login_form::Effect::Notify(toast) => {
                    if self.desktop_notifications {
                        effects.push(Effect::DesktopNotify(toast.clone()));
                    }
                    self.status_line = None;
                    self.toast = Some(toast);
                }
                login_form::Effect::Navigate(route) => self.navigate(route),
            }
        }

        effects
    }

    fn navigate(&mut self, route: Route) {
        tracing::info!(from = %self.route, to = %route, "navigating");
        self.route = route;
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        self.exiting
    }
}

fn toast_line(toast: &Toast) -> Line<'_> {
    let color = match toast.variant {
        Variant::Success => Color::Green,
        Variant::Destructive => Color::Red,
    };

    let mut spans = vec![Span::from(toast.title.as_str()).bold()];
    if let Some(description) = &toast.description {
        spans.push(Span::from(": "));
        spans.push(Span::from(description.as_str()));
    }

    Line::from(spans).fg(color)
}

fn hint(route: Route) -> &'static str {
    match route {
        Route::Login => "tab: next field · enter: submit · ctrl-c: quit",
        Route::Dashboard => "q: quit",
        Route::Register => "esc: back to login · q: quit",
    }
}

use crate::validation::{self, Field, FieldError, ValidationErrors};
use crate::{Credentials, FormValues, Route, Toast};

/// Shown when the server accepts the credentials.
pub const WELCOME_TITLE: &str = "Welcome back!";

/// Shown, along with the error text, when logging in doesn't work out.
pub const FAILURE_TITLE: &str = "Login failed";

/// Where the form is in the submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Waiting for the user.
    #[default]
    Idle,

    /// A login request is in flight.
    Submitting,
}

/// Things that can happen to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The email field changed
    SetEmail(String),

    /// The password field changed
    SetPassword(String),

    /// The user wants to log in with what's in the fields
    Submit,

    /// The user wants to make an account instead
    GoToRegister,

    /// The server accepted our credentials
    LoginSucceeded,

    /// Logging in didn't work; the message is shown to the user
    LoginFailed(String),
}

/// Things the form needs done on its behalf. Side effects!
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send these credentials to the server. The result should come back as
    /// either `Action::LoginSucceeded` or `Action::LoginFailed`.
    LogIn(Credentials),

    /// Let the user know how things went
    Notify(Toast),

    /// Send the user somewhere else in the app
    Navigate(Route),
}

/// The login form: field values, inline errors, and the loading flag.
#[derive(Debug, Default)]
pub struct LoginForm {
    values: FormValues,

    /// Shown next to each field. Only populated once the user has tried to
    /// submit at least once.
    errors: ValidationErrors,

    /// Once set, every edit re-validates.
    submitted: bool,

    state: SubmissionState,
}

impl LoginForm {
    /// Create a new, empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an `Action`, updating the form and producing some side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::SetEmail(email) => {
                self.values.email = email;
                self.revalidate();

                vec![]
            }
            Action::SetPassword(password) => {
                self.values.password = Some(password);
                self.revalidate();

                vec![]
            }
            Action::Submit => self.submit(),
            Action::GoToRegister => vec![self.navigate_to_register()],
            Action::LoginSucceeded => {
                if self.state != SubmissionState::Submitting {
                    tracing::debug!("login succeeded without a submit in flight");
                }
                self.state = SubmissionState::Idle;
                tracing::info!("logged in");

                vec![
                    Effect::Notify(Toast::success(WELCOME_TITLE)),
                    Effect::Navigate(Route::Dashboard),
                ]
            }
            Action::LoginFailed(message) => {
                self.state = SubmissionState::Idle;
                tracing::info!(%message, "login failed");

                vec![Effect::Notify(Toast::destructive(FAILURE_TITLE, message))]
            }
        }
    }

    /// Validate the current values and, if they pass, start logging in.
    fn submit(&mut self) -> Vec<Effect> {
        if self.is_loading() {
            tracing::debug!("ignoring submit while a login is in flight");
            return vec![];
        }

        self.submitted = true;

        match validation::validate(&self.values) {
            Ok(credentials) => {
                self.errors = ValidationErrors::default();
                self.state = SubmissionState::Submitting;
                tracing::info!(email = %credentials.email, "submitting login");

                vec![Effect::LogIn(credentials)]
            }
            Err(errors) => {
                tracing::debug!(?errors, "login form has errors");
                self.errors = errors;

                vec![]
            }
        }
    }

    /// Going to the register page needs no validation and no network.
    #[expect(clippy::unused_self)]
    fn navigate_to_register(&self) -> Effect {
        Effect::Navigate(Route::Register)
    }

    fn revalidate(&mut self) {
        if self.submitted {
            self.errors = validation::validate(&self.values)
                .err()
                .unwrap_or_default();
        }
    }

    /// Should the submit button show a spinner (and refuse clicks)?
    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Where the form is in the submit lifecycle
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The values currently in the fields
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The inline error for a field, if there is one
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }
}

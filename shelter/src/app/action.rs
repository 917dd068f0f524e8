use crossterm::event::KeyEvent;
use shelter_core::login_form;

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// Something the login form needs to hear about, e.g. the result of a
    /// login request
    Form(login_form::Action),

    /// Enough time passed to advance the spinner
    Tick,

    /// Something bad happened; display it to the user
    Problem(String),
}

//! Common code for Shelter Market clients: the login form and the calls it
//! makes to the server.

/// Submitting credentials to the auth server.
pub mod auth;

/// What the user typed, and what we send once it checks out.
pub mod credentials;
pub use credentials::{Credentials, FormValues};

/// The login form's "functional core."
pub mod login_form;
pub use login_form::LoginForm;

/// Places the app can send the user.
pub mod route;
pub use route::Route;

/// Short-lived feedback for the user.
pub mod toast;
pub use toast::Toast;

/// Field-level checks performed before submitting.
pub mod validation;

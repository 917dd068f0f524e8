use super::Action;
use crate::config::Config;
use notify_rust::Notification;
use shelter_core::{auth, login_form, Credentials, Toast};

/// Connections to external services that effects use. We keep these around
/// to share connections across the app as a whole.
#[derive(Debug, Default)]
pub struct EffectContext {
    /// an HTTP client with reqwest
    http: reqwest::Client,
}

impl EffectContext {
    /// Get a new `EffectContext`
    pub fn new() -> Self {
        Self::default()
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Send credentials to the auth server
    LogIn(Credentials),

    /// Mirror a toast to the desktop notification daemon
    DesktopNotify(Toast),
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the next
    /// `Action` the application needs to handle
    pub async fn run(self, conn: &EffectContext, config: &Config) -> Option<Action> {
        match self.run_inner(conn, config).await {
            Ok(action) => action,
            Err(problem) => {
                tracing::error!(?problem, "problem running effect");
                Some(Action::Problem(problem.to_string()))
            }
        }
    }

    /// The actual implementation of `run`, but with a `Result` wrapper to make
    /// it more ergonomic to write.
    async fn run_inner(
        self,
        conn: &EffectContext,
        config: &Config,
    ) -> Result<Option<Action>, Problem> {
        match self {
            Self::LogIn(credentials) => {
                tracing::info!(server = %config.server, "logging in");

                let client = auth::Client::new(config.server.clone());

                // Every login failure goes back to the form, which is the
                // only place that knows how to reset the loading state.
                let next = match client.login(&conn.http, &credentials).await {
                    Ok(()) => login_form::Action::LoginSucceeded,
                    Err(err) => {
                        tracing::error!(?err, "could not log in");
                        login_form::Action::LoginFailed(err.to_string())
                    }
                };

                Ok(Some(Action::Form(next)))
            }

            Self::DesktopNotify(toast) => {
                tracing::debug!(title = %toast.title, "sending desktop notification");

                let mut notification = Notification::new();
                notification.summary(&toast.title);
                if let Some(description) = &toast.description {
                    notification.body(description);
                }

                notification
                    .show()
                    .map_err(|err| Problem::Notification(err.to_string()))?;

                Ok(None)
            }
        }
    }
}

/// Problems that can happen while running an `Effect`.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    /// The desktop notification daemon wasn't reachable or refused us.
    #[error("Could not show notification: {0}")]
    Notification(String),
}

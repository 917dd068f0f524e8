//! Drives the login form against a fake auth server, running effects the way
//! a real shell would.

use shelter_core::auth::Client;
use shelter_core::login_form::{Action, Effect};
use shelter_core::toast::Variant;
use shelter_core::{LoginForm, Route, Toast};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// What a shell observes while the form runs.
#[derive(Debug, Default)]
struct Recorded {
    toasts: Vec<Toast>,
    navigations: Vec<Route>,
    loading: Vec<bool>,
    requests: usize,
}

async fn submit(form: &mut LoginForm, client: &Client, email: &str, password: &str) -> Recorded {
    let http = reqwest::Client::new();
    let mut recorded = Recorded::default();

    form.handle(Action::SetEmail(email.to_string()));
    form.handle(Action::SetPassword(password.to_string()));

    recorded.loading.push(form.is_loading());
    let mut pending = form.handle(Action::Submit);
    recorded.loading.push(form.is_loading());

    while let Some(effect) = pending.pop() {
        match effect {
            Effect::LogIn(creds) => {
                recorded.requests += 1;
                let next = match client.login(&http, &creds).await {
                    Ok(()) => Action::LoginSucceeded,
                    Err(err) => Action::LoginFailed(err.to_string()),
                };
                let mut more = form.handle(next);
                recorded.loading.push(form.is_loading());
                more.reverse();
                pending.extend(more);
            }
            Effect::Notify(toast) => recorded.toasts.push(toast),
            Effect::Navigate(route) => recorded.navigations.push(route),
        }
    }

    recorded
}

#[tokio::test]
async fn welcome_back_then_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = LoginForm::new();
    let recorded = submit(&mut form, &Client::new(server.uri()), "user@example.com", "secret").await;

    assert_eq!(recorded.loading, vec![false, true, false]);
    assert_eq!(recorded.requests, 1);
    assert_eq!(
        recorded.toasts,
        vec![Toast {
            title: "Welcome back!".to_string(),
            description: None,
            variant: Variant::Success,
        }]
    );
    assert_eq!(recorded.navigations, vec![Route::Dashboard]);
}

#[tokio::test]
async fn unauthorized_shows_failure_and_does_not_navigate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = LoginForm::new();
    let recorded = submit(&mut form, &Client::new(server.uri()), "user@example.com", "wrong").await;

    assert_eq!(recorded.loading, vec![false, true, false]);
    assert_eq!(recorded.toasts.len(), 1);
    assert_eq!(recorded.toasts[0].title, "Login failed");
    assert_eq!(recorded.toasts[0].description.as_deref(), Some("Failed to login"));
    assert_eq!(recorded.toasts[0].variant, Variant::Destructive);
    assert_eq!(recorded.navigations, vec![]);
}

#[tokio::test]
async fn connection_refused_shows_the_error_text() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = Client::new(format!("http://{addr}"));

    let expected = client
        .login(
            &reqwest::Client::new(),
            &shelter_core::Credentials {
                email: "user@example.com".to_string(),
                password: "secret".to_string(),
            },
        )
        .await
        .unwrap_err()
        .to_string();

    let mut form = LoginForm::new();
    let recorded = submit(&mut form, &client, "user@example.com", "secret").await;

    assert_eq!(recorded.loading, vec![false, true, false]);
    assert_eq!(recorded.toasts.len(), 1);
    assert_eq!(recorded.toasts[0].title, "Login failed");
    assert_eq!(recorded.toasts[0].description.as_deref(), Some(expected.as_str()));
    assert_eq!(recorded.navigations, vec![]);
}

#[tokio::test]
async fn invalid_email_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = LoginForm::new();
    let recorded = submit(&mut form, &Client::new(server.uri()), "not-an-email", "secret").await;

    assert_eq!(recorded.loading, vec![false, false]);
    assert_eq!(recorded.requests, 0);
    assert!(recorded.toasts.is_empty());
    assert!(recorded.navigations.is_empty());
}

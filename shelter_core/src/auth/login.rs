use crate::Credentials;

/// The request to log into the server.
pub type Req = Credentials;

/// Where the login endpoint lives.
pub const PATH: &str = "/auth/login";

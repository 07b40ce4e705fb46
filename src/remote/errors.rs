use std::fmt;

/// The server rejected the session token (HTTP 401 on an authorized call).
#[derive(Debug)]
pub struct Unauthorized {
    label: String,
}

impl Unauthorized {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

impl fmt::Display for Unauthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: unauthorized (token invalid/expired)", self.label)
    }
}

impl std::error::Error for Unauthorized {}

/// Non-2xx response carrying a server-provided `msg`.
#[derive(Debug)]
pub struct ServerMessage {
    pub status: u16,
    pub msg: String,
}

impl ServerMessage {
    pub fn new(status: u16, msg: String) -> Self {
        Self { status, msg }
    }
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server responded {}: {}", self.status, self.msg)
    }
}

impl std::error::Error for ServerMessage {}

pub fn is_unauthorized(err: &anyhow::Error) -> bool {
    err.downcast_ref::<Unauthorized>().is_some()
}

pub fn server_message(err: &anyhow::Error) -> Option<&str> {
    err.downcast_ref::<ServerMessage>().map(|m| m.msg.as_str())
}

#[cfg(test)]
#[path = "../tests/remote/errors_tests.rs"]
mod tests;

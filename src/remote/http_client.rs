use super::*;

/// Retries transport failures of idempotent requests.
pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                tracing::debug!(label, attempt = i + 1, error = %err, "request failed");
                last = Some(err);
                if i + 1 < ATTEMPTS {
                    std::thread::sleep(std::time::Duration::from_millis(100 * (1 << i)));
                }
            }
        }
    }
    Err(last
        .unwrap_or_else(|| anyhow::anyhow!("unknown error"))
        .context(label.to_string()))
}

impl RemoteClient {
    /// Status check for calls made with the session token. 401 means the
    /// token is dead and surfaces as `Unauthorized`.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Unauthorized::new(label).into());
        }
        self.ensure_success(resp, label)
    }

    /// Status check without the session-expiry interpretation; login answers
    /// bad credentials with 401 too.
    pub(super) fn ensure_success(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body: Option<ErrorBody> = resp.json().ok();
        match body.and_then(|b| b.msg) {
            Some(msg) => Err(ServerMessage::new(status.as_u16(), msg))
                .with_context(|| format!("{} status", label)),
            None => anyhow::bail!("{} status: {}", label, status),
        }
    }

    pub(super) fn auth(&self) -> Result<String> {
        // No token at all is handled like a rejected one.
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Unauthorized::new("no session token"))?;
        Ok(format!("Bearer {}", token))
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

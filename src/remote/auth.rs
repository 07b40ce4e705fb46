use super::*;

impl RemoteClient {
    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.credentials("/login", "login", email, password)
    }

    pub fn signup(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.credentials("/signup", "signup", email, password)
    }

    fn credentials(
        &self,
        path: &str,
        label: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse> {
        let resp = self
            .client
            .post(self.url(path))
            .json(&CredentialsRequest { email, password })
            .send()
            .context(label.to_string())?;
        let out: AuthResponse = self
            .ensure_success(resp, label)?
            .json()
            .with_context(|| format!("parse {} response", label))?;
        Ok(out)
    }
}

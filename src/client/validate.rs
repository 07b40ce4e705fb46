use std::collections::BTreeMap;

/// Per-field validation messages, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, msg: &str) {
        self.0.insert(field, msg.to_string());
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors.into_result()
}

pub fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(), FieldErrors> {
    let mut errors = match validate_login(email, password) {
        Ok(()) => FieldErrors::default(),
        Err(e) => e,
    };
    if confirm.is_empty() {
        errors.insert("confirm_password", "Please confirm your password");
    }
    // Mismatch wins over the missing-confirmation message.
    if password != confirm {
        errors.insert("confirm_password", "Passwords do not match");
    }
    errors.into_result()
}

pub fn validate_document_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("File name is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/client/validate_tests.rs"]
mod tests;

//! Form validation predicates for the auth screens.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Passwords must be longer than four characters.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Loose structural email check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Whether the login form may be submitted.
pub fn can_submit_login(email: &str, password: &str) -> bool {
    is_valid_email(email) && is_valid_password(password)
}

/// Sign-up form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignUpIssue {
    #[error("Informe seu nome.")]
    MissingName,
    #[error("Informe um e-mail válido.")]
    InvalidEmail,
    #[error("A senha deve ter pelo menos 5 caracteres.")]
    ShortPassword,
    #[error("As senhas não conferem.")]
    PasswordMismatch,
}

/// First problem with the form, in field order.
///
/// # Errors
///
/// Returns the first [`SignUpIssue`] found.
pub fn validate_signup(form: &SignUpForm) -> Result<(), SignUpIssue> {
    if form.name.trim().is_empty() {
        return Err(SignUpIssue::MissingName);
    }
    if !is_valid_email(&form.email) {
        return Err(SignUpIssue::InvalidEmail);
    }
    if !is_valid_password(&form.password) {
        return Err(SignUpIssue::ShortPassword);
    }
    if form.password != form.confirmation {
        return Err(SignUpIssue::PasswordMismatch);
    }
    Ok(())
}

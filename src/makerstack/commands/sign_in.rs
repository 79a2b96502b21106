use crate::commands::{CmdMessage, CmdResult};
use crate::email::validate_email;
use crate::error::{MakerError, Result};

pub const DEMO_NOTICE: &str = "Sign-in is a demo: no account was checked and no session was started.";

/// Validates the form and acknowledges it. There is no account backend.
pub fn run(email: &str, password: &str) -> Result<CmdResult> {
    validate_email(email)?;
    if password.is_empty() {
        return Err(MakerError::Api("Password is required".to_string()));
    }

    tracing::info!("dummy sign-in accepted");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(DEMO_NOTICE));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_sign_in_is_informational() {
        let result = run("you@example.com", "hunter2").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, DEMO_NOTICE);
    }

    #[test]
    fn test_sign_in_requires_fields() {
        assert!(matches!(
            run("", "pw"),
            Err(MakerError::Validation(ValidationError::Required))
        ));
        assert!(matches!(
            run("you@", "pw"),
            Err(MakerError::Validation(ValidationError::Malformed))
        ));
        assert!(matches!(run("you@example.com", ""), Err(MakerError::Api(_))));
    }
}

use crate::config::smtp_config::SmtpConfig;

/// Outbound mail handle built from the SMTP settings. Delivery is not wired yet.
#[derive(Debug, Clone)]
pub struct Mailer {
    smtp: SmtpConfig,
}

impl Mailer {
    pub fn new(smtp: SmtpConfig) -> Self {
        Self { smtp }
    }

    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.smtp.host, self.smtp.port)
    }

    pub fn sender(&self) -> &str {
        &self.smtp.sender
    }

    pub fn has_credentials(&self) -> bool {
        !self.smtp.username.is_empty() && !self.smtp.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp(username: &str, password: &str) -> SmtpConfig {
        SmtpConfig {
            host: "smtp.mailtrap.io".to_string(),
            port: 2525,
            username: username.to_string(),
            password: password.to_string(),
            sender: "Movies API <no-reply@movies.local>".to_string(),
        }
    }

    #[test]
    fn should_expose_endpoint_and_sender() {
        let mailer = Mailer::new(smtp("", ""));

        assert_eq!(mailer.endpoint(), "smtp.mailtrap.io:2525");
        assert_eq!(mailer.sender(), "Movies API <no-reply@movies.local>");
        assert!(!mailer.has_credentials());
    }

    #[test]
    fn should_require_both_username_and_password() {
        assert!(!Mailer::new(smtp("movies", "")).has_credentials());
        assert!(Mailer::new(smtp("movies", "hunter2")).has_credentials());
    }
}

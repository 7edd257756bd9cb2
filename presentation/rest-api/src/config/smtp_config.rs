use std::fmt;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SmtpArgs {
    /// SMTP host
    #[arg(
        id = "smtp_host",
        long = "smtp-host",
        env = "MOVIES_SMTP_HOST",
        default_value = "smtp.mailtrap.io"
    )]
    pub host: String,

    /// SMTP port
    #[arg(
        id = "smtp_port",
        long = "smtp-port",
        env = "MOVIES_SMTP_PORT",
        default_value_t = 2525
    )]
    pub port: u16,

    /// SMTP username
    #[arg(
        id = "smtp_username",
        long = "smtp-username",
        env = "MOVIES_SMTP_USERNAME",
        default_value = ""
    )]
    pub username: String,

    /// SMTP password
    #[arg(
        id = "smtp_password",
        long = "smtp-password",
        env = "MOVIES_SMTP_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// SMTP sender
    #[arg(
        id = "smtp_sender",
        long = "smtp-sender",
        env = "MOVIES_SMTP_SENDER",
        default_value = "Movies API <no-reply@movies.local>"
    )]
    pub sender: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("sender", &self.sender)
            .finish()
    }
}

impl From<SmtpArgs> for SmtpConfig {
    fn from(args: SmtpArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            username: args.username,
            password: args.password,
            sender: args.sender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_redact_password_in_debug_output() {
        let config = SmtpConfig {
            host: "smtp.mailtrap.io".to_string(),
            port: 2525,
            username: "movies".to_string(),
            password: "hunter2".to_string(),
            sender: "Movies API <no-reply@movies.local>".to_string(),
        };

        let debug = format!("{config:?}");

        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}

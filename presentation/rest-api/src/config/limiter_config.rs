use clap::{ArgAction, Args};

#[derive(Args, Debug, Clone)]
pub struct LimiterArgs {
    /// Rate limiter maximum requests per second
    #[arg(long = "limiter-rps", env = "MOVIES_LIMITER_RPS", default_value_t = 2.0)]
    pub rps: f64,

    /// Rate limiter maximum burst
    #[arg(long = "limiter-burst", env = "MOVIES_LIMITER_BURST", default_value_t = 4)]
    pub burst: i32,

    /// Enable rate limiter
    #[arg(
        long = "limiter-enabled",
        env = "MOVIES_LIMITER_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimiterConfig {
    pub rps: f64,
    pub burst: i32,
    pub enabled: bool,
}

impl From<LimiterArgs> for LimiterConfig {
    fn from(args: LimiterArgs) -> Self {
        Self {
            rps: args.rps,
            burst: args.burst,
            enabled: args.enabled,
        }
    }
}

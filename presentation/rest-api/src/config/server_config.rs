use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// API server port
    #[arg(long, env = "MOVIES_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Environment (development|staging|production)
    #[arg(long, env = "MOVIES_ENV", default_value = "development")]
    pub env: String,
}

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub env: String,
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            port: args.port,
            env: args.env,
        }
    }
}

impl ServerConfig {
    /// Listen on every interface
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

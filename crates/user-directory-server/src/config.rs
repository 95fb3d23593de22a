use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use user_directory_lib::{StoreError, UserStore};

use crate::logging::LogFormat;
use crate::ServerError;

pub const DEFAULT_PORT: u16 = 4999;

/// Command line and environment configuration for the service.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "user-directory", about = "GraphQL user directory service")]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener on.
    #[arg(long, default_value = "0.0.0.0", env = "USER_DIRECTORY_HOST")]
    pub host: String,

    /// TCP port to listen on.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "USER_DIRECTORY_PORT")]
    pub port: u16,

    /// JSON file with the user records to serve. The built-in fixture is
    /// used when this is not set.
    #[arg(long, env = "USER_DIRECTORY_USERS")]
    pub users: Option<PathBuf>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "USER_DIRECTORY_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Print the GraphQL schema and exit.
    #[arg(long)]
    pub print_schema: bool,
}
impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn load_store(&self) -> Result<UserStore, StoreError> {
        match &self.users {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading users from seed file");
                UserStore::from_json_file(path)
            },
            None => Ok(UserStore::seeded()),
        }
    }
}

use std::env;

/// Node connection parameters, all sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_user: String,
    pub rpc_password: String,
    pub rpc_host: String,
    pub rpc_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let rpc_user = env::var("RPC_USER").map_err(|_| "RPC_USER is required")?;

        let rpc_password =
            env::var("RPC_PASSWORD").map_err(|_| "RPC_PASSWORD is required")?;

        let rpc_host = env::var("RPC_HOST").map_err(|_| "RPC_HOST is required")?;

        let rpc_port = env::var("RPC_PORT")
            .map_err(|_| "RPC_PORT is required")?
            .parse::<u16>()
            .map_err(|_| "RPC_PORT must be a valid port number")?;

        Ok(Self {
            rpc_user,
            rpc_password,
            rpc_host,
            rpc_port,
        })
    }

    /// Base URL of the node's JSON-RPC endpoint.
    pub fn rpc_url(&self) -> String {
        format!("http://{}:{}", self.rpc_host, self.rpc_port)
    }
}

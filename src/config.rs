#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

const DEFAULT_PORT: u16 = 3000;

impl Config {
    /// Read configuration from the environment. `PORT` overrides the
    /// default listen port; an unparsable value falls back with a warning
    /// rather than refusing to start.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(p) => p,
                Err(_) => {
                    eprintln!("Invalid PORT value {raw:?}, using {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        Self {
            server: ServerConfig { port },
        }
    }
}

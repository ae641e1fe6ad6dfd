use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "alumni-portal.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";
const ENV_NAME_PUBLIC_BASE_URL: &str = "PUBLIC_BASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub admin: Option<Admin>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            self.auth.jwt_secret = Some(secret);
        }
        if let Ok(base_url) = env::var(ENV_NAME_PUBLIC_BASE_URL) {
            self.webserver.public_base_url = base_url;
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub allowed_origins: Vec<String>,
    /// Prefix of all avatar URLs
    pub public_base_url: String,
}

pub struct Auth {
    pub jwt_secret: Option<String>,
    pub token_valid_for: time::Duration,
}

/// Administrator account that is created on startup.
pub struct Admin {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
            admin,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            allowed_origins,
            public_base_url,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            allowed_origins,
            public_base_url,
        };

        let raw::Auth {
            jwt_secret,
            token_valid_for,
        } = auth.unwrap_or_default();
        let token_valid_for = time::Duration::try_from(token_valid_for)?;
        if token_valid_for.is_zero() {
            return Err(anyhow!("Tokens must be valid for a positive duration"));
        }
        let auth = Auth {
            jwt_secret: jwt_secret.filter(|s| !s.is_empty()),
            token_valid_for,
        };

        let admin = admin
            .map(|raw::Admin { name, email, password }| Admin {
                name,
                email,
                password,
            });

        Ok(Self {
            db,
            webserver,
            auth,
            admin,
        })
    }
}

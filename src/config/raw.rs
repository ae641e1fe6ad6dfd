use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

pub(super) const DEFAULT_CONFIG_FILE: &str = include_str!("alumni-portal.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub admin: Option<Admin>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    pub public_base_url: String,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    pub jwt_secret: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub token_valid_for: Duration,
}

impl Default for Auth {
    fn default() -> Self {
        Config::default().auth.expect("Auth configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Admin {
    pub name: String,
    pub email: String,
    pub password: String,
}

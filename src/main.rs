use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use alumni_application::prelude as flows;
use alumni_core::{avatar::AvatarUrls, usecases};
use alumni_entities::user::{Profile, Role};

mod config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(version, about = "REST backend of the alumni portal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from other origins
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file)?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = alumni_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    alumni_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    if let Some(admin) = cfg.admin {
        let config::Admin {
            name,
            email,
            password,
        } = admin;
        let new_admin = usecases::NewUser {
            name,
            email,
            password,
            role: Role::Admin,
            profile: Profile::default(),
        };
        flows::ensure_admin_exists(&connections, new_admin)?;
    }

    let config::WebServer {
        enable_cors,
        allowed_origins,
        public_base_url,
    } = cfg.webserver;
    let web_cfg = alumni_webserver::Cfg {
        avatar_urls: AvatarUrls::new(public_base_url),
        allowed_origins,
    };
    let config::Auth {
        jwt_secret,
        token_valid_for,
    } = cfg.auth;
    let auth_cfg = alumni_webserver::AuthCfg {
        jwt_secret,
        token_valid_for,
    };
    alumni_webserver::run(connections, enable_cors, web_cfg, auth_cfg, VERSION).await;
    Ok(())
}

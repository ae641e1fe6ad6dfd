use rocket::{config::Config as RocketCfg, Rocket, Route};
use time::Duration;

use crate::core::avatar::AvatarUrls;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub avatar_urls: AvatarUrls,
    /// Empty to allow all origins
    pub allowed_origins: Vec<String>,
}

pub struct AuthCfg {
    /// A random secret is used if missing
    pub jwt_secret: Option<String>,
    pub token_valid_for: Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    auth: AuthCfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        auth,
        version,
    } = options;
    let AuthCfg {
        jwt_secret,
        token_valid_for,
    } = auth;

    let jwt_state = jwt::JwtState::new(jwt_secret.as_deref(), token_valid_for);

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

fn cors_options(allowed_origins: &[String]) -> rocket_cors::CorsOptions {
    let allowed_origins = if allowed_origins.is_empty() {
        rocket_cors::AllowedOrigins::all()
    } else {
        rocket_cors::AllowedOrigins::some_exact(allowed_origins)
    };
    rocket_cors::CorsOptions {
        allowed_origins,
        ..Default::default()
    }
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    auth: AuthCfg,
    version: &'static str,
) {
    let cors = if enable_cors {
        match cors_options(&cfg.allowed_origins).to_cors() {
            Ok(cors) => Some(cors),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        None
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        auth,
        version,
    };
    let instance = rocket_instance(options, db);
    let server_task = match cors {
        Some(cors) => instance.attach(cors).launch(),
        None => instance.launch(),
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}

use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};
use time::Duration;

use crate::{
    core::avatar::AvatarUrls,
    web::{sqlite, AuthCfg, Cfg},
};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub const BASE_URL: &str = "https://alumni.example.org/uploads/";

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use crate::core::{prelude::*, usecases};
}

fn default_cfg() -> Cfg {
    Cfg {
        avatar_urls: AvatarUrls::new(prelude::BASE_URL),
        allowed_origins: vec![],
    }
}

fn rocket_test_instance(
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let connections = alumni_db_sqlite::Connections::init(":memory:", 1).unwrap();
    alumni_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        cfg: default_cfg(),
        auth: AuthCfg {
            jwt_secret: Some("not-so-secret".into()),
            token_valid_for: Duration::hours(1),
        },
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone());
    (rocket, db)
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, sqlite::Connections) {
    let (rocket, db) = rocket_test_instance(mounts, RocketCfg::debug_default());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

#[test]
fn mount_api_routes_without_collisions() {
    let (client, _db) = rocket_test_setup(super::mounts());
    let res = client.get("/api/check").dispatch();
    assert_eq!(res.status(), prelude::Status::Ok);
}

#[test]
fn allow_configured_origins() {
    let cors = super::cors_options(&["https://alumni.example.org".to_string()]);
    assert!(cors.to_cors().is_ok());
    assert!(super::cors_options(&[]).to_cors().is_ok());
}

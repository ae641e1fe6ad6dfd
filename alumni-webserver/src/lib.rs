#[macro_use]
extern crate log;

use alumni_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::{AuthCfg, Cfg};

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    auth: AuthCfg,
    version: &'static str,
) {
    web::run(connections.into(), enable_cors, cfg, auth, version).await;
}

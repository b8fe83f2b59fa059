#[cfg(feature = "demo")]
mod demo_mock_server;
mod error;
mod expiry;
mod job;
mod member;
mod notification;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::web::server::build_server;
use log::error;

#[launch]
async fn rocket() -> _ {
    env_logger::init();

    #[cfg(feature = "demo")]
    demo_mock_server::init_demo().await;

    match build_server() {
        Ok(server) => server,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    }
}

pub mod common;
pub mod health;
pub mod location;
pub mod status;
pub mod vehicles;
pub mod zones;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(common::json_config())
        .service(health::health)
        .service(status::status)
        .service(location::submit_location)
        .service(vehicles::get_vehicle)
        .service(vehicles::list_vehicles)
        .service(zones::list_zones);
}

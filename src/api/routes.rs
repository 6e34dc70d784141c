use actix_web::web;

use crate::api::handlers::navigate_hoover;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/hoover").service(navigate_hoover));
}

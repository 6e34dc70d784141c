use utoipa::OpenApi;

use crate::models::request::{ErrorResponse, HooverRequest, HooverResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Robotic Hoover API",
        description = "Simulates a robotic hoover driving across a rectangular room, cleaning the dirt patches it passes over and reporting its final position.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(crate::api::handlers::navigate_hoover),
    components(schemas(HooverRequest, HooverResponse, ErrorResponse)),
    tags(
        (name = "hoover", description = "Hoover navigation — drive the hoover through the room and count cleaned patches"),
    )
)]
pub struct ApiDoc;

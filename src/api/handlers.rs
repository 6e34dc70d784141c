use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    logic::{navigator::navigate, validator::validate},
    models::request::{ErrorResponse, HooverRequest, HooverResponse},
};

/// POST /hoover/navigate
/// Runs one hoover simulation over the supplied room and returns the final
/// position together with the number of patches cleaned.
#[utoipa::path(
    post,
    path = "/hoover/navigate",
    tag = "hoover",
    request_body = HooverRequest,
    responses(
        (status = 200, description = "Hoover navigation completed successfully", body = HooverResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
)]
#[post("/navigate")]
pub async fn navigate_hoover(body: web::Json<HooverRequest>) -> impl Responder {
    let request = body.into_inner();

    if request.patches.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation Failed",
            "Patches list cannot be empty.",
        ));
    }

    match validate(&request) {
        Ok(valid) => {
            let outcome = navigate(valid.room, valid.start, &valid.patches, &valid.instructions);
            log::info!(
                "ran {} instructions, cleaned {} of {} patches, finished at ({}, {})",
                valid.instructions.len(),
                outcome.cleaned,
                valid.patches.len(),
                outcome.final_position.x,
                outcome.final_position.y,
            );
            HttpResponse::Ok().json(HooverResponse {
                coords: vec![outcome.final_position.x, outcome.final_position.y],
                patches: outcome.cleaned,
            })
        }
        Err(e) => {
            log::info!("rejected navigation request: {e}");
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(e.label(), e.to_string()))
        }
    }
}

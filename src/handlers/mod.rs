pub mod hotels;

use actix_web::{web, HttpResponse};

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

/// Route table, shared by the server binary and the integration tests.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/find", web::get().to(hotels::find_hotels))
        .service(
            web::scope("/hotel")
                .route("", web::get().to(hotels::list_hotels))
                .route("", web::post().to(hotels::create_hotel))
                .route("/{id}", web::get().to(hotels::get_hotel_by_id))
                .route("/{id}", web::put().to(hotels::update_hotel))
                .route("/{id}", web::delete().to(hotels::delete_hotel)),
        );
}

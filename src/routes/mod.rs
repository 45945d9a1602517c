pub mod entry;
pub mod facts;
pub mod home;
pub mod listings;

use actix_web::{web, HttpResponse};

use crate::views::Views;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::name_form))
        .route("/", web::post().to(home::submit_name))
        .service(home::all_names)
        .route("/entry_page", web::get().to(entry::entry_form))
        .route("/entry_page", web::post().to(entry::submit_entry))
        .service(facts::facts_form)
        .service(facts::fun_facts)
        .service(listings::all_companies)
        .service(listings::all_stocks)
        .service(listings::all_industries);
}

/// Toute route non matchée tombe ici (default_service)
pub async fn not_found(views: web::Data<Views>) -> HttpResponse {
    views.not_found()
}

// Pages de listing : toutes les lignes, sans filtre ni pagination

use actix_web::{get, web, HttpResponse};
use minijinja::context;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::config::AppConfig;
use crate::models::{company, industry, stock};
use crate::utils::flash;
use crate::utils::flash::NoticeQuery;
use crate::views::Views;

#[get("/all_companies")]
pub async fn all_companies(
    db: web::Data<DatabaseConnection>,
    views: web::Data<Views>,
    config: web::Data<AppConfig>,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    // le redirect "doublon" de /entry_page atterrit ici avec sa notice
    let notice = flash::verify(&query, &config.secret_key);

    match company::Entity::find().all(db.get_ref()).await {
        Ok(companies) => views.render(
            "all_companies.html",
            context! { companies => companies, notice => notice },
        ),
        Err(e) => {
            tracing::error!("failed to list companies: {e}");
            views.internal_error()
        }
    }
}

#[get("/all_stocks")]
pub async fn all_stocks(db: web::Data<DatabaseConnection>, views: web::Data<Views>) -> HttpResponse {
    match stock::Entity::find().all(db.get_ref()).await {
        Ok(stocks) => views.render("all_stocks.html", context! { stocks => stocks }),
        Err(e) => {
            tracing::error!("failed to list stocks: {e}");
            views.internal_error()
        }
    }
}

#[get("/all_industries")]
pub async fn all_industries(
    db: web::Data<DatabaseConnection>,
    views: web::Data<Views>,
) -> HttpResponse {
    match industry::Entity::find().all(db.get_ref()).await {
        Ok(industries) => views.render("all_industries.html", context! { industries => industries }),
        Err(e) => {
            tracing::error!("failed to list industries: {e}");
            views.internal_error()
        }
    }
}

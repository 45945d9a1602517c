use actix_web::http::header;
use actix_web::{web, HttpResponse};
use minijinja::context;
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::config::AppConfig;
use crate::models::forms::{self, EntryForm};
use crate::services::entry_service::{EntryError, EntryOutcome, EntryService};
use crate::services::price_service::PriceLookup;
use crate::utils::flash;
use crate::utils::flash::NoticeQuery;
use crate::views::Views;

const CREATED_NOTICE: &str = "Company was successfully added to the database";
const DUPLICATE_NOTICE: &str = "This company already exists in the database";

/// GET /entry_page : formulaire de saisie, avec notice signée éventuelle
pub async fn entry_form(
    views: web::Data<Views>,
    config: web::Data<AppConfig>,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let notice = flash::verify(&query, &config.secret_key);
    views.render(
        "entry.html",
        context! { errors => Vec::<String>::new(), notice => notice },
    )
}

/// POST /entry_page : validation, puis algorithme d'entrée (EntryService)
pub async fn submit_entry(
    db: web::Data<DatabaseConnection>,
    prices: web::Data<dyn PriceLookup>,
    views: web::Data<Views>,
    config: web::Data<AppConfig>,
    form: web::Form<EntryForm>,
) -> HttpResponse {
    if let Err(errors) = form.validate() {
        return views.render(
            "entry.html",
            context! {
                errors => forms::error_messages(&errors),
                name => form.name,
                symbol => form.symbol,
                industry => form.industry,
            },
        );
    }

    let outcome = EntryService::record_company(
        db.get_ref(),
        prices.get_ref(),
        &form.name,
        &form.symbol,
        &form.industry,
    )
    .await;

    match outcome {
        Ok(EntryOutcome::Created) => {
            redirect_with_notice("/entry_page", CREATED_NOTICE, &config.secret_key)
        }
        Ok(EntryOutcome::Duplicate) => {
            redirect_with_notice("/all_companies", DUPLICATE_NOTICE, &config.secret_key)
        }
        // Lookup externe en échec : rien n'a été écrit, on ré-affiche le formulaire
        Err(EntryError::Price(e)) => {
            tracing::warn!("price lookup failed for {}: {e}", form.symbol);
            views.render(
                "entry.html",
                context! {
                    errors => vec![format!("Could not fetch a price for {}.", form.symbol)],
                    name => form.name,
                    symbol => form.symbol,
                    industry => form.industry,
                },
            )
        }
        Err(EntryError::Db(e)) => {
            tracing::error!("entry failed: {e}");
            views.internal_error()
        }
    }
}

fn redirect_with_notice(path: &str, message: &str, secret: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((
            header::LOCATION,
            format!("{path}?{}", flash::to_query(message, secret)),
        ))
        .finish()
}

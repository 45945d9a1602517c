use actix_web::{get, web, HttpResponse};
use minijinja::context;

use crate::models::forms::FactsQuery;
use crate::views::Views;

/// GET /facts_form : page statique, le formulaire poste en GET vers /fun_facts
#[get("/facts_form")]
pub async fn facts_form(views: web::Data<Views>) -> HttpResponse {
    views.render("facts_form.html", context! {})
}

/// GET /fun_facts : reprend ceo/hq/launch dans la page.
/// Entrée non fiable : l'échappement vient du moteur de templates.
#[get("/fun_facts")]
pub async fn fun_facts(views: web::Data<Views>, query: web::Query<FactsQuery>) -> HttpResponse {
    views.render(
        "fun_facts.html",
        context! {
            ceo => query.ceo.as_deref().unwrap_or(""),
            hq => query.hq.as_deref().unwrap_or(""),
            launch => query.launch.as_deref().unwrap_or(""),
        },
    )
}

use actix_web::http::header;
use actix_web::{get, web, HttpResponse};
use minijinja::context;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use validator::Validate;

use crate::models::forms::{self, NameForm};
use crate::models::name;
use crate::views::Views;

/// GET / : formulaire de saisie du nom
pub async fn name_form(views: web::Data<Views>) -> HttpResponse {
    views.render(
        "home.html",
        context! { errors => Vec::<String>::new() },
    )
}

/// POST / : enregistre le nom puis redirige vers /names.
/// Une validation en échec ré-affiche le formulaire, sans écriture.
pub async fn submit_name(
    db: web::Data<DatabaseConnection>,
    views: web::Data<Views>,
    form: web::Form<NameForm>,
) -> HttpResponse {
    if let Err(errors) = form.validate() {
        return views.render(
            "home.html",
            context! { errors => forms::error_messages(&errors) },
        );
    }

    let new_name = name::ActiveModel {
        name: Set(form.name.clone()),
        ..Default::default()
    };

    match new_name.insert(db.get_ref()).await {
        Ok(_) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/names"))
            .finish(),
        Err(e) => {
            tracing::error!("failed to insert name: {e}");
            views.internal_error()
        }
    }
}

#[get("/names")]
pub async fn all_names(db: web::Data<DatabaseConnection>, views: web::Data<Views>) -> HttpResponse {
    match name::Entity::find().all(db.get_ref()).await {
        Ok(names) => views.render("names.html", context! { names => names }),
        Err(e) => {
            tracing::error!("failed to list names: {e}");
            views.internal_error()
        }
    }
}

// Rendu HTML via MiniJinja
//
// Les templates sont embarqués dans le binaire. L'extension .html active
// l'auto-escape du moteur : tout ce qui vient de l'utilisateur (dont les
// paramètres de fun_facts) ressort échappé.

use actix_web::HttpResponse;
use minijinja::{Environment, Error};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("names.html", include_str!("../templates/names.html")),
    ("entry.html", include_str!("../templates/entry.html")),
    ("facts_form.html", include_str!("../templates/facts_form.html")),
    ("fun_facts.html", include_str!("../templates/fun_facts.html")),
    (
        "all_companies.html",
        include_str!("../templates/all_companies.html"),
    ),
    (
        "all_stocks.html",
        include_str!("../templates/all_stocks.html"),
    ),
    (
        "all_industries.html",
        include_str!("../templates/all_industries.html"),
    ),
    ("404.html", include_str!("../templates/404.html")),
];

#[derive(Clone)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: minijinja::Value) -> HttpResponse {
        match self.env.get_template(name).and_then(|t| t.render(ctx)) {
            Ok(body) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                tracing::error!("template {name} failed to render: {e}");
                self.internal_error()
            }
        }
    }

    pub fn not_found(&self) -> HttpResponse {
        match self
            .env
            .get_template("404.html")
            .and_then(|t| t.render(minijinja::context! {}))
        {
            Ok(body) => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(_) => HttpResponse::NotFound().body("Not found"),
        }
    }

    // page 500 générique : tout DbErr ou erreur de template finit ici
    pub fn internal_error(&self) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body("<h1>Something went wrong</h1>")
    }
}

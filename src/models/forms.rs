// DTOs des formulaires HTML, validés avant tout effet de bord

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Deserialize, Validate)]
pub struct NameForm {
    #[validate(length(min = 1, message = "Please enter your name."))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EntryForm {
    #[validate(length(min = 1, message = "What is the name of the company?"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "What is the stock symbol of the company?"),
        custom(function = single_token)
    )]
    pub symbol: String,
    #[validate(length(min = 1, message = "What industry is the company in?"))]
    pub industry: String,
}

// Page fun_facts : les trois paramètres sont repris tels quels dans la page
// (échappés par le moteur de templates), aucune validation
#[derive(Debug, Deserialize)]
pub struct FactsQuery {
    pub ceo: Option<String>,
    pub hq: Option<String>,
    pub launch: Option<String>,
}

/// Un symbole boursier est un token unique, sans espace interne
fn single_token(symbol: &str) -> Result<(), ValidationError> {
    if symbol.split_whitespace().count() != 1 {
        let mut error = ValidationError::new("symbol_whitespace");
        error.message = Some("Invalid stock symbol. There should be no spaces.".into());
        return Err(error);
    }
    Ok(())
}

/// Aplatit les erreurs de validation en messages affichables dans le template
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}."))
            })
        })
        .collect()
}

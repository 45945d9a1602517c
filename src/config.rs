// Configuration applicative
//
// Les valeurs par défaut reproduisent la configuration figée d'origine ;
// chaque clé reste surchargeable par l'environnement (.env chargé dans main).

use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Clé secrète servant à signer les notices transportées dans les redirects
    pub secret_key: String,
    /// Base de l'API de lookup du prix (GET <base>/stock/<symbol>/price)
    pub price_api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/company_tracker".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            secret_key: env::var("SECRET_KEY").unwrap_or_else(|_| {
                eprintln!("⚠️  WARNING: SECRET_KEY not found in .env, using default (INSECURE)");
                "hardtoguessstring".to_string()
            }),
            price_api_base: env::var("PRICE_API_BASE")
                .unwrap_or_else(|_| "https://api.iextrading.com/1.0".to_string()),
        }
    }
}

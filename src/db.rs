// connexion BD + création du schéma

use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::models::{company, industry, name, stock};

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Crée les tables et index au démarrage s'ils n'existent pas.
/// Les index uniques (symbol, industry, triple des companies) ferment les
/// fenêtres de course lookup-then-insert de la version d'origine.
pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // companies en dernier : ses foreign keys pointent vers stocks et industries
    let mut names = schema.create_table_from_entity(name::Entity);
    db.execute(backend.build(names.if_not_exists())).await?;

    let mut stocks = schema.create_table_from_entity(stock::Entity);
    db.execute(backend.build(stocks.if_not_exists())).await?;

    let mut industries = schema.create_table_from_entity(industry::Entity);
    db.execute(backend.build(industries.if_not_exists())).await?;

    let mut companies = schema.create_table_from_entity(company::Entity);
    db.execute(backend.build(companies.if_not_exists())).await?;

    let entry_triple = Index::create()
        .name("idx_companies_name_symbol_industry")
        .table(company::Entity)
        .col(company::Column::Name)
        .col(company::Column::Symbol)
        .col(company::Column::Industry)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&entry_triple)).await?;

    Ok(())
}

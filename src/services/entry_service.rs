use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;
use thiserror::Error;

use crate::models::{company, industry, stock};
use crate::services::price_service::{PriceError, PriceLookup};

#[derive(Debug, Error)]
pub enum EntryError {
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error(transparent)]
    Price(#[from] PriceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Created,
    Duplicate,
}

pub struct EntryService;

impl EntryService {
    /// Enregistre un triple (name, symbol, industry) validé.
    ///
    /// Le prix n'est demandé au lookup externe que si le symbole est inconnu,
    /// et toujours hors transaction. Toutes les écritures (stock, industry,
    /// tally, company) se font ensuite dans une seule transaction : le tally
    /// n'est incrémenté que si la company est réellement insérée.
    pub async fn record_company(
        db: &DatabaseConnection,
        prices: &dyn PriceLookup,
        name: &str,
        symbol: &str,
        industry_name: &str,
    ) -> Result<EntryOutcome, EntryError> {
        let known_stock = stock::Entity::find()
            .filter(stock::Column::Symbol.eq(symbol))
            .one(db)
            .await?;

        let fetched_price = match &known_stock {
            Some(_) => 0.0,
            None => prices.price(symbol).await?,
        };

        let txn = db.begin().await?;

        let stock_row = match known_stock {
            Some(stock_row) => stock_row,
            None => Self::find_or_create_stock(&txn, symbol, fetched_price).await?,
        };
        let industry_row = Self::find_or_create_industry(&txn, industry_name).await?;

        let existing = company::Entity::find()
            .filter(company::Column::Name.eq(name))
            .filter(company::Column::Symbol.eq(symbol))
            .filter(company::Column::Industry.eq(industry_name))
            .one(&txn)
            .await?;

        if existing.is_some() {
            txn.commit().await?;
            return Ok(EntryOutcome::Duplicate);
        }

        // Incrément atomique, dans la même transaction que l'insert
        industry::Entity::update_many()
            .col_expr(
                industry::Column::Count,
                Expr::col(industry::Column::Count).add(1),
            )
            .filter(industry::Column::Id.eq(industry_row.id))
            .exec(&txn)
            .await?;

        company::ActiveModel {
            name: Set(name.to_string()),
            symbol: Set(symbol.to_string()),
            stock_id: Set(stock_row.id),
            industry: Set(industry_name.to_string()),
            industry_id: Set(industry_row.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(EntryOutcome::Created)
    }

    /// Upsert du stock : ON CONFLICT (symbol) DO NOTHING puis relecture,
    /// pour qu'une soumission concurrente ne produise jamais deux lignes
    async fn find_or_create_stock<C: ConnectionTrait>(
        conn: &C,
        symbol: &str,
        price: f64,
    ) -> Result<stock::Model, DbErr> {
        if let Some(found) = stock::Entity::find()
            .filter(stock::Column::Symbol.eq(symbol))
            .one(conn)
            .await?
        {
            return Ok(found);
        }

        let insert = stock::Entity::insert(stock::ActiveModel {
            symbol: Set(symbol.to_string()),
            price: Set(price),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(stock::Column::Symbol)
                .do_nothing()
                .to_owned(),
        )
        .exec(conn)
        .await;

        match insert {
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }

        stock::Entity::find()
            .filter(stock::Column::Symbol.eq(symbol))
            .one(conn)
            .await?
            .ok_or_else(|| DbErr::Custom(format!("stock missing after upsert: {symbol}")))
    }

    /// Même schéma que pour le stock ; l'industrie démarre à count = 0,
    /// l'incrément n'arrive qu'avec l'insert de la company
    async fn find_or_create_industry<C: ConnectionTrait>(
        conn: &C,
        industry_name: &str,
    ) -> Result<industry::Model, DbErr> {
        if let Some(found) = industry::Entity::find()
            .filter(industry::Column::Industry.eq(industry_name))
            .one(conn)
            .await?
        {
            return Ok(found);
        }

        let insert = industry::Entity::insert(industry::ActiveModel {
            industry: Set(industry_name.to_string()),
            count: Set(0),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(industry::Column::Industry)
                .do_nothing()
                .to_owned(),
        )
        .exec(conn)
        .await;

        match insert {
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }

        industry::Entity::find()
            .filter(industry::Column::Industry.eq(industry_name))
            .one(conn)
            .await?
            .ok_or_else(|| DbErr::Custom(format!("industry missing after upsert: {industry_name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::price_service::stubs::{FailingLookup, FixedPrice};
    use sea_orm::{ConnectOptions, Database};

    async fn test_db() -> DatabaseConnection {
        // une seule connexion, sinon chaque connexion du pool
        // aurait sa propre base :memory:
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let db = Database::connect(options).await.unwrap();
        db::setup_schema(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_new_symbol_creates_stock_with_looked_up_price() {
        let db = test_db().await;

        let outcome = EntryService::record_company(&db, &FixedPrice(42.5), "Apple", "AAPL", "Tech")
            .await
            .unwrap();
        assert_eq!(outcome, EntryOutcome::Created);

        let stocks = stock::Entity::find().all(&db).await.unwrap();
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].symbol, "AAPL");
        assert_eq!(stocks[0].price, 42.5);
    }

    #[tokio::test]
    async fn test_known_symbol_keeps_original_price() {
        let db = test_db().await;

        EntryService::record_company(&db, &FixedPrice(10.0), "Apple", "AAPL", "Tech")
            .await
            .unwrap();
        // lookup en échec : il ne doit pas être consulté pour un symbole connu
        EntryService::record_company(&db, &FailingLookup, "Apple Store", "AAPL", "Retail")
            .await
            .unwrap();

        let stocks = stock::Entity::find().all(&db).await.unwrap();
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].price, 10.0);
    }

    #[tokio::test]
    async fn test_duplicate_triple_inserts_single_company() {
        let db = test_db().await;

        let first = EntryService::record_company(&db, &FixedPrice(5.0), "Apple", "AAPL", "Tech")
            .await
            .unwrap();
        let second = EntryService::record_company(&db, &FixedPrice(5.0), "Apple", "AAPL", "Tech")
            .await
            .unwrap();

        assert_eq!(first, EntryOutcome::Created);
        assert_eq!(second, EntryOutcome::Duplicate);

        let companies = company::Entity::find().all(&db).await.unwrap();
        assert_eq!(companies.len(), 1);

        // le tally ne bouge pas sur un doublon
        let industries = industry::Entity::find().all(&db).await.unwrap();
        assert_eq!(industries.len(), 1);
        assert_eq!(industries[0].count, 1);
    }

    #[tokio::test]
    async fn test_same_industry_tallies_both_companies() {
        let db = test_db().await;

        EntryService::record_company(&db, &FixedPrice(5.0), "Apple", "AAPL", "Tech")
            .await
            .unwrap();
        EntryService::record_company(&db, &FixedPrice(7.0), "Microsoft", "MSFT", "Tech")
            .await
            .unwrap();

        let industries = industry::Entity::find().all(&db).await.unwrap();
        assert_eq!(industries.len(), 1);
        assert_eq!(industries[0].industry, "Tech");
        assert_eq!(industries[0].count, 2);
    }

    #[tokio::test]
    async fn test_failed_lookup_leaves_database_untouched() {
        let db = test_db().await;

        let result =
            EntryService::record_company(&db, &FailingLookup, "Apple", "AAPL", "Tech").await;
        assert!(matches!(result, Err(EntryError::Price(_))));

        assert!(stock::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(industry::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(company::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_company_references_stock_and_industry() {
        let db = test_db().await;

        EntryService::record_company(&db, &FixedPrice(5.0), "Apple", "AAPL", "Tech")
            .await
            .unwrap();

        let company_row = company::Entity::find().one(&db).await.unwrap().unwrap();
        let stock_row = stock::Entity::find_by_id(company_row.stock_id)
            .one(&db)
            .await
            .unwrap();
        let industry_row = industry::Entity::find_by_id(company_row.industry_id)
            .one(&db)
            .await
            .unwrap();

        assert!(stock_row.is_some());
        assert_eq!(industry_row.unwrap().industry, "Tech");
    }
}

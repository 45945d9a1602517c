// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table avec SeaORM.
//
// Liste des modules:
//   - name : Noms saisis sur la page d'accueil
//   - stock : Symboles boursiers avec prix (lookup externe à la création)
//   - industry : Industries avec leur tally de companies
//   - company : Companies, triple (name, symbol, industry) unique
//   - forms : DTOs des formulaires HTML avec validation
//
// Points d'attention:
//   - Tous les modèles utilisent SeaORM (pas de SQL brut)
//   - Le schéma est créé au démarrage si absent (voir src/db.rs)
//   - Les relations entre tables sont définies dans chaque modèle
//
// ============================================================================

pub mod company;
pub mod forms;
pub mod industry;
pub mod name;
pub mod stock;

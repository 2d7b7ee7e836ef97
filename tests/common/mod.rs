use product_catalog::db::{DbPool, establish_connection_pool, run_migrations};
use product_catalog::domain::product::{NewProduct, Product};
use product_catalog::repository::{DieselRepository, ProductWriter};
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory.
///
/// The directory and database file are removed when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url).expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

/// Inserts the two products used throughout the listing scenarios.
#[allow(dead_code)]
pub fn seed_catalog(repo: &DieselRepository) -> (Product, Product) {
    let pantalon = repo
        .create_product(&NewProduct::new(
            "Pantalon bonito",
            "Nuevo pantalon 2021 verano",
        ))
        .expect("insert pantalon");
    let vaqueiro = repo
        .create_product(&NewProduct::new(
            "Vaqueiro curto",
            "Vaqueiro classico verano",
        ))
        .expect("insert vaqueiro");
    (pantalon, vaqueiro)
}

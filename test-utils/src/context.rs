use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Connection string for a private, per-context SQLite database.
const IN_MEMORY_SQLITE: &str = "sqlite::memory:";

/// A connected in-memory SQLite database with the tables a test asked for.
///
/// Produced by [`TestBuilder::build`](crate::builder::TestBuilder::build). The database
/// lives as long as the context, so keep the context in scope for the whole test.
pub struct TestContext {
    db: DatabaseConnection,
}

impl TestContext {
    /// Opens a fresh in-memory database with no tables.
    pub(crate) async fn connect() -> Result<Self, TestError> {
        let db = Database::connect(IN_MEMORY_SQLITE).await?;

        Ok(Self { db })
    }

    /// Runs the CREATE TABLE statements in order.
    pub(crate) async fn create_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Borrows the connection for repository, service and factory calls.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

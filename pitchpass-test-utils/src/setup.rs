use std::{path::PathBuf, sync::Arc};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
    /// Per-test directory uploads are written to, removed when the setup is dropped
    pub upload_root: PathBuf,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.state.db.clone(), self.state.upload_root.clone()))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        let upload_root = std::env::temp_dir().join(format!(
            "pitchpass-test-{:016x}",
            rand::random::<u64>()
        ));

        Ok(TestSetup {
            state: TestAppState { db, upload_root },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Drop for TestSetup {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.state.upload_root);
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every table, parents before the tables referencing them
#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::PitchpassUser),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::Video),
                schema.create_table_from_entity(entity::prelude::UploadSlot),
                schema.create_table_from_entity(entity::prelude::ComplianceDocument),
                schema.create_table_from_entity(entity::prelude::EmbassyVerification),
                schema.create_table_from_entity(entity::prelude::ScoutingInquiry),
                schema.create_table_from_entity(entity::prelude::ScoutingMessage),
                schema.create_table_from_entity(entity::prelude::TokenAccount),
                schema.create_table_from_entity(entity::prelude::TokenTransaction),
                schema.create_table_from_entity(entity::prelude::FederationLetter),
                schema.create_table_from_entity(entity::prelude::FederationPayment),
                schema.create_table_from_entity(entity::prelude::FeeSchedule),
                schema.create_table_from_entity(entity::prelude::AuditLog),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

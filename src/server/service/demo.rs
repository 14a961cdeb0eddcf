//! Demo data for `DEMO_MODE`.
//!
//! Seeds one account per role, all sharing [`DEMO_PASSWORD`], along with the sample finance
//! records shown on the admin pages. Seeding is idempotent: existing usernames and a non-empty fee
//! schedule are left alone.

use chrono::{NaiveDate, Utc};
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{role::Role, token::TokenPackage},
    server::{
        data::{admin::FinanceRepository, user::UserRepository},
        error::Error,
        service::token,
        util::password::hash_password,
    },
};

pub const DEMO_PASSWORD: &str = "pitchpass";

/// Roles given a starter token package on creation
const FUNDED_ROLES: [Role; 3] = [Role::Team, Role::Scout, Role::Agent];

/// (action code, description, amount in cents, currency, effective from)
const FEES: &[(&str, &str, i64, &str, (i32, u32, u32))] = &[
    ("compliance_report", "Compliance report generation", 2500, "EUR", (2026, 1, 1)),
    ("embassy_verification", "Embassy verification filing", 7500, "EUR", (2026, 1, 1)),
    ("federation_letter", "Federation clearance letter", 5000, "EUR", (2026, 1, 1)),
];

/// (federation, description, amount in cents, currency)
const PAYMENTS: &[(&str, &str, i64, &str)] = &[
    ("Ghana Football Association", "Clearance letters Q1", 15000, "EUR"),
    ("Fédération Sénégalaise de Football", "Registration fees", 42000, "EUR"),
];

pub struct DemoSeeder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemoSeeder<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds demo accounts and finance records, returning the number of accounts created
    pub async fn seed(&self) -> Result<usize, Error> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let mut created = 0;

        for role in Role::ALL {
            if users.find_by_username(role.as_str()).await?.is_some() {
                continue;
            }

            let user = users
                .create(
                    role.as_str(),
                    role.label(),
                    &hash_password(DEMO_PASSWORD)?,
                    role,
                )
                .await?;

            if FUNDED_ROLES.contains(&role) {
                token::credit(&txn, user.id, TokenPackage::Starter).await?;
            }

            created += 1;
        }

        let finance = FinanceRepository::new(&txn);
        if finance.count_fees().await? == 0 {
            for (code, description, amount, currency, (y, m, d)) in FEES {
                let effective_from = NaiveDate::from_ymd_opt(*y, *m, *d)
                    .ok_or_else(|| Error::InternalError(format!("invalid fee date for {}", code)))?;

                finance
                    .create_fee(code, description, *amount, currency, effective_from)
                    .await?;
            }

            let paid_at = Utc::now().naive_utc();
            for (federation, description, amount, currency) in PAYMENTS {
                finance
                    .create_payment(federation, description, *amount, currency, paid_at)
                    .await?;
            }
        }

        txn.commit().await?;

        tracing::info!("Seeded {} demo accounts", created);

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    mod seed {
        use pitchpass_test_utils::prelude::*;

        use crate::server::service::{
            admin::AdminService, auth::AuthService, demo::DemoSeeder, token::TokenService,
        };

        /// Expect one account per role and no duplicates on a second run
        #[tokio::test]
        async fn seeds_once() -> Result<(), TestError> {
            let test = test_setup_with_all_tables!()?;
            let seeder = DemoSeeder::new(&test.state.db);

            assert_eq!(seeder.seed().await.unwrap(), 6);
            assert_eq!(seeder.seed().await.unwrap(), 0);

            let fees = AdminService::new(&test.state.db).fees().await.unwrap();
            assert_eq!(fees.len(), 3);

            Ok(())
        }

        /// Expect demo accounts to sign in with the shared password
        #[tokio::test]
        async fn accounts_can_sign_in() -> Result<(), TestError> {
            let test = test_setup_with_all_tables!()?;
            DemoSeeder::new(&test.state.db).seed().await.unwrap();

            let scout = AuthService::new(&test.state.db)
                .login("scout", "pitchpass")
                .await
                .unwrap();
            let balance = TokenService::new(&test.state.db)
                .balance(scout.id)
                .await
                .unwrap();
            assert_eq!(balance.balance, 50);

            let embassy = AuthService::new(&test.state.db)
                .login("embassy", "pitchpass")
                .await
                .unwrap();
            let balance = TokenService::new(&test.state.db)
                .balance(embassy.id)
                .await
                .unwrap();
            assert_eq!(balance.balance, 0);

            Ok(())
        }
    }
}

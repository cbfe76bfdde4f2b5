//! Shared fixtures for the service tests.
//!
//! Every test gets its own in-memory database; fixtures insert through
//! the repositories so tests exercise the same write paths the seed
//! binary uses.

use chrono::Utc;

use hose_core::{Hose, PurchaseOption, Question, UsageLog, User, UserRole};
use hose_db::{generate_id, Database, DbConfig};

/// Creates a fresh in-memory database with migrations applied.
pub(crate) async fn test_db() -> Database {
    Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database")
}

/// Inserts a user and returns its id.
pub(crate) async fn seed_user(db: &Database, email: &str, role: UserRole) -> String {
    let now = Utc::now();
    let user = User {
        id: generate_id(),
        email: email.to_string(),
        password: "hash".to_string(),
        role,
        created_at: now,
        updated_at: now,
        last_login: None,
    };
    db.users().insert(&user).await.expect("seed user");
    user.id
}

/// Inserts a hose and returns its id.
pub(crate) async fn seed_hose(db: &Database, length: f64, diameter: f64) -> String {
    let now = Utc::now();
    let hose = Hose {
        id: generate_id(),
        length,
        diameter,
        created_at: now,
        updated_at: now,
    };
    db.hoses().insert(&hose, &[]).await.expect("seed hose");
    hose.id
}

/// Inserts a purchase option for a hose and returns its id.
pub(crate) async fn seed_purchase_option(
    db: &Database,
    hose_id: &str,
    platform: &str,
    available: bool,
) -> String {
    let option = PurchaseOption {
        id: generate_id(),
        hose_id: hose_id.to_string(),
        platform: platform.to_string(),
        price: 19.99,
        currency: "USD".to_string(),
        available,
        link: format!("https://{}.example/{}", platform.to_lowercase(), hose_id),
    };
    db.purchase_options()
        .insert(&option)
        .await
        .expect("seed purchase option");
    option.id
}

/// Inserts a usage log with the given information payload, returns its id.
pub(crate) async fn seed_usage_log(db: &Database, information: &str) -> String {
    let log = UsageLog {
        id: generate_id(),
        hose_id: None,
        user_id: None,
        information: information.to_string(),
        created_at: Utc::now(),
    };
    db.usage_logs().insert(&log).await.expect("seed usage log");
    log.id
}

/// Inserts a question for a user and returns its id.
pub(crate) async fn seed_question(db: &Database, user_id: &str, content: &str) -> String {
    let now = Utc::now();
    let question = Question {
        id: generate_id(),
        user_id: user_id.to_string(),
        content: content.to_string(),
        created_at: now,
        updated_at: now,
    };
    db.questions().insert(&question).await.expect("seed question");
    question.id
}

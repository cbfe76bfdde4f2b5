//! # Seed Data Generator
//!
//! Populates the database with development data for the hose catalog.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p hose-db --bin seed
//!
//! # Generate a custom number of hoses
//! cargo run -p hose-db --bin seed -- --count 50
//!
//! # Specify database path
//! cargo run -p hose-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! ## Generated Data
//! - Three users (one administrator, one standard user, one guest)
//! - Hoses across the common garden sizes, each with feature rows
//! - Purchase options on two platforms per hose
//! - A measurement and a compatibility entry per hose
//! - Usage logs carrying care-tip JSON payloads
//! - A couple of questions with answers

use chrono::Utc;
use std::env;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use hose_core::{
    Answer, CareTip, Hose, HoseCompatibility, HoseMeasurement, PurchaseOption, Question, UsageLog,
    User, UserRole,
};
use hose_db::{Database, DbConfig};

/// (length meters, diameter cm, features) for the seeded hoses.
const HOSE_SPECS: &[(f64, f64, &[&str])] = &[
    (15.0, 1.9, &["kink-resistant", "UV-stabilized"]),
    (25.0, 1.9, &["kink-resistant"]),
    (30.0, 2.5, &["expandable", "brass fittings"]),
    (10.0, 1.3, &["lightweight"]),
    (50.0, 2.5, &["commercial-grade", "brass fittings"]),
    (20.0, 1.6, &["drinking-water-safe"]),
];

/// External platforms purchase options are seeded against.
const PLATFORMS: &[(&str, &str)] = &[
    ("GardenMart", "https://gardenmart.example/hoses"),
    ("HoseDepot", "https://hosedepot.example/catalog"),
];

/// Attachments used for seeded compatibility entries.
const ATTACHMENTS: &[&str] = &["spray nozzle", "sprinkler head", "quick-connect coupler"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = HOSE_SPECS.len();
    let mut db_path = String::from("./catalog_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(HOSE_SPECS.len());
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Hose Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of hoses to generate (default: 6)");
                println!("  -d, --db <PATH>    Database file path (default: ./catalog_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Hose Catalog Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!("Hoses:    {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing data
    let existing = db.hoses().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} hoses", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let now = Utc::now();

    // Users
    let admin = make_user("admin@hosecatalog.example", UserRole::Administrator);
    let standard = make_user("gardener@hosecatalog.example", UserRole::StandardUser);
    let guest = make_user("visitor@hosecatalog.example", UserRole::Guest);

    for user in [&admin, &standard, &guest] {
        db.users().insert(user).await?;
    }
    println!("✓ Seeded 3 users");

    // Hoses with features, purchase options, measurements, compatibilities
    let mut hose_ids = Vec::new();
    for seed in 0..count {
        let (length, diameter, features) = HOSE_SPECS[seed % HOSE_SPECS.len()];

        let hose = Hose {
            id: Uuid::new_v4().to_string(),
            length,
            diameter,
            created_at: now,
            updated_at: now,
        };
        let features: Vec<String> = features.iter().map(|f| f.to_string()).collect();
        db.hoses().insert(&hose, &features).await?;

        for (platform, link) in PLATFORMS {
            let option = PurchaseOption {
                id: Uuid::new_v4().to_string(),
                hose_id: hose.id.clone(),
                platform: platform.to_string(),
                // Deterministic price spread per platform
                price: 12.99 + (seed as f64) * 3.5,
                currency: "USD".to_string(),
                available: seed % 3 != 2,
                link: format!("{}/{}", link, hose.id),
            };
            db.purchase_options().insert(&option).await?;
        }

        let measurement = HoseMeasurement {
            id: Uuid::new_v4().to_string(),
            hose_id: hose.id.clone(),
            user_id: standard.id.clone(),
            length,
            diameter,
            measured_at: now,
        };
        db.measurements().insert(&measurement).await?;

        let entry = HoseCompatibility {
            id: Uuid::new_v4().to_string(),
            hose_id: hose.id.clone(),
            user_id: admin.id.clone(),
            compatible: seed % 4 != 3,
            attachment: ATTACHMENTS[seed % ATTACHMENTS.len()].to_string(),
            checked_at: now,
        };
        db.compatibilities().insert(&entry).await?;

        hose_ids.push(hose.id);
    }
    println!("✓ Seeded {} hoses with options and records", hose_ids.len());

    // Usage logs carrying care-tip JSON, plus care-tip detail rows
    for (seed, hose_id) in hose_ids.iter().enumerate() {
        let information = serde_json::json!({
            "title": "Winter storage",
            "description": "Drain the hose fully before temperatures drop.",
            "practices": ["Drain after use", "Store coiled", "Keep out of direct sun"],
        });
        let log = UsageLog {
            id: Uuid::new_v4().to_string(),
            hose_id: Some(hose_id.clone()),
            user_id: Some(standard.id.clone()),
            information: information.to_string(),
            created_at: now,
        };
        db.usage_logs().insert(&log).await?;

        let tip = CareTip {
            id: Uuid::new_v4().to_string(),
            hose_id: hose_id.clone(),
            title: Some("Routine care".to_string()),
            description: "Rinse fittings monthly and check washers for wear.".to_string(),
            additional_tips: vec!["Replace washers yearly".to_string()],
            applicable_products: vec![format!("hose-{seed}")],
            created_at: now,
            updated_at: now,
        };
        db.care_tips().insert(&tip).await?;
    }
    println!("✓ Seeded usage logs and care tips");

    // Questions and answers
    let question = Question {
        id: Uuid::new_v4().to_string(),
        user_id: standard.id.clone(),
        content: "Which diameter fits a standard spray nozzle?".to_string(),
        created_at: now,
        updated_at: now,
    };
    db.questions().insert(&question).await?;

    let answer = Answer {
        id: Uuid::new_v4().to_string(),
        question_id: question.id.clone(),
        user_id: admin.id.clone(),
        content: "Any 1.9 cm hose takes the standard coupler.".to_string(),
        created_at: now,
    };
    db.questions().insert_answer(&answer).await?;
    println!("✓ Seeded questions and answers");

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds a user fixture with a placeholder password hash.
fn make_user(email: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        // Not a real hash; development fixture only
        password: format!("$argon2id$seed${}", email.len()),
        role,
        created_at: now,
        updated_at: now,
        last_login: None,
    }
}

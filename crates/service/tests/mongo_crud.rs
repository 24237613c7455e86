//! CRUD against a real MongoDB instance. Skipped unless `MONGODB_URL` is
//! set, so the default test run needs no database.

use chrono::{TimeZone, Utc};

use models::{BioDataInput, ProgramInput};
use service::mongo::{MongoBioDataRepository, MongoProgramRepository};
use service::{db, BioDataRepository, ProgramRepository, ServiceError};

async fn test_db(suffix: &str) -> anyhow::Result<Option<mongodb::Database>> {
    let Ok(url) = std::env::var("MONGODB_URL") else {
        eprintln!("MONGODB_URL missing; skipping mongo tests");
        return Ok(None);
    };
    // One database per test so parallel runs cannot drop each other's data
    let cfg = configs::DatabaseConfig {
        url,
        database: format!("biodata_test_{}_{suffix}", std::process::id()),
        connect_timeout_secs: 5,
        max_pool_size: 4,
    };
    let db = db::connect(&cfg).await?;
    db::ensure_indexes(&db).await?;
    Ok(Some(db))
}

fn input(name: &str, program: &str) -> BioDataInput {
    BioDataInput {
        name: name.to_string(),
        phone_number: "555-1111".to_string(),
        program: program.to_string(),
        date: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn biodata_crud_against_mongo() -> anyhow::Result<()> {
    let Some(db) = test_db("crud").await? else { return Ok(()) };
    let repo = MongoBioDataRepository::new(&db);

    let created = repo.insert(input("Ada", "Choir")).await?;
    let fetched = repo.get(&created.id).await?.expect("record should exist");
    assert_eq!(fetched, created);

    let by_program = repo.list_by_program("Choir").await?;
    assert!(by_program.iter().any(|r| r.id == created.id));
    assert!(repo.list_by_program("choir").await?.iter().all(|r| r.id != created.id));

    // Inclusive lower bound: 2024-01-05 includes the record, 2024-02-01 does not
    let early = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    assert!(repo.list_since(early).await?.iter().any(|r| r.id == created.id));
    assert!(repo.list_since(late).await?.iter().all(|r| r.id != created.id));

    assert!(repo.replace(&created.id, input("Ada L.", "Ushering")).await?);
    let updated = repo.get(&created.id).await?.expect("record should exist");
    assert_eq!(updated.name, "Ada L.");
    assert_eq!(updated.program, "Ushering");

    assert!(repo.delete(&created.id).await?);
    assert!(repo.get(&created.id).await?.is_none());

    db.drop(None).await?;
    Ok(())
}

#[tokio::test]
async fn duplicate_program_hits_unique_index() -> anyhow::Result<()> {
    let Some(db) = test_db("programs").await? else { return Ok(()) };
    let repo = MongoProgramRepository::new(&db);

    let suffix = bson::oid::ObjectId::new().to_hex();
    let name = format!("Choir-{suffix}");
    let first = repo.insert(ProgramInput { name: name.clone() }).await?;
    let second = repo.insert(ProgramInput { name: name.clone() }).await;
    assert!(matches!(second, Err(ServiceError::Conflict(_))));

    assert!(repo.delete(&first.id).await?);
    assert!(!repo.delete(&first.id).await?);

    db.drop(None).await?;
    Ok(())
}

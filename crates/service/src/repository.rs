use async_trait::async_trait;
use chrono::{DateTime, Utc};

use models::{BioData, BioDataInput, Program, ProgramInput};

use crate::errors::ServiceError;

/// Store abstraction for the `biodata` collection. Ids are opaque strings
/// assigned by the store; the handle is injected so tests can swap in
/// [`mock::MockBioDataRepository`].
#[async_trait]
pub trait BioDataRepository: Send + Sync {
    async fn insert(&self, input: BioDataInput) -> Result<BioData, ServiceError>;
    /// All records in the store's natural order.
    async fn list(&self) -> Result<Vec<BioData>, ServiceError>;
    /// Exact, case-sensitive match on `program`; empty result is not an error.
    async fn list_by_program(&self, program: &str) -> Result<Vec<BioData>, ServiceError>;
    /// Records with `date >= since` (inclusive lower bound, unbounded above).
    async fn list_since(&self, since: DateTime<Utc>) -> Result<Vec<BioData>, ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<BioData>, ServiceError>;
    /// Full replace of all four fields; returns false when the id is unknown.
    async fn replace(&self, id: &str, input: BioDataInput) -> Result<bool, ServiceError>;
    /// Returns false when the id is unknown.
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}

/// Store abstraction for the `programs` collection. No update operation
/// exists for programs.
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Fails with [`ServiceError::Conflict`] when the name is already taken.
    async fn insert(&self, input: ProgramInput) -> Result<Program, ServiceError>;
    async fn list(&self) -> Result<Vec<Program>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}

/// In-memory repositories for tests and doc examples. Insertion order stands
/// in for the store's natural order; the program-name conflict mirrors the
/// unique index.
pub mod mock {
    use std::sync::Mutex;

    use uuid::Uuid;

    use super::*;

    #[derive(Default)]
    pub struct MockBioDataRepository {
        records: Mutex<Vec<BioData>>,
    }

    #[async_trait]
    impl BioDataRepository for MockBioDataRepository {
        async fn insert(&self, input: BioDataInput) -> Result<BioData, ServiceError> {
            let record = BioData {
                id: Uuid::new_v4().to_string(),
                name: input.name,
                phone_number: input.phone_number,
                program: input.program,
                date: input.date,
            };
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn list(&self) -> Result<Vec<BioData>, ServiceError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn list_by_program(&self, program: &str) -> Result<Vec<BioData>, ServiceError> {
            let records = self.records.lock().unwrap();
            Ok(records.iter().filter(|r| r.program == program).cloned().collect())
        }

        async fn list_since(&self, since: DateTime<Utc>) -> Result<Vec<BioData>, ServiceError> {
            let records = self.records.lock().unwrap();
            Ok(records.iter().filter(|r| r.date >= since).cloned().collect())
        }

        async fn get(&self, id: &str) -> Result<Option<BioData>, ServiceError> {
            let records = self.records.lock().unwrap();
            Ok(records.iter().find(|r| r.id == id).cloned())
        }

        async fn replace(&self, id: &str, input: BioDataInput) -> Result<bool, ServiceError> {
            let mut records = self.records.lock().unwrap();
            match records.iter_mut().find(|r| r.id == id) {
                Some(existing) => {
                    existing.name = input.name;
                    existing.phone_number = input.phone_number;
                    existing.program = input.program;
                    existing.date = input.date;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != id);
            Ok(records.len() < before)
        }
    }

    #[derive(Default)]
    pub struct MockProgramRepository {
        programs: Mutex<Vec<Program>>,
    }

    #[async_trait]
    impl ProgramRepository for MockProgramRepository {
        async fn insert(&self, input: ProgramInput) -> Result<Program, ServiceError> {
            let mut programs = self.programs.lock().unwrap();
            if programs.iter().any(|p| p.name == input.name) {
                return Err(ServiceError::Conflict(
                    "Program with the same name already exists".to_string(),
                ));
            }
            let program = Program { id: Uuid::new_v4().to_string(), name: input.name };
            programs.push(program.clone());
            Ok(program)
        }

        async fn list(&self) -> Result<Vec<Program>, ServiceError> {
            Ok(self.programs.lock().unwrap().clone())
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            let mut programs = self.programs.lock().unwrap();
            let before = programs.len();
            programs.retain(|p| p.id != id);
            Ok(programs.len() < before)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::mock::{MockBioDataRepository, MockProgramRepository};
    use super::*;

    fn input(name: &str, program: &str, date: DateTime<Utc>) -> BioDataInput {
        BioDataInput {
            name: name.to_string(),
            phone_number: "555-0000".to_string(),
            program: program.to_string(),
            date,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn biodata_crud_round_trip() {
        let repo = MockBioDataRepository::default();

        let created = repo.insert(input("Ada", "Choir", day(2024, 3, 1))).await.unwrap();
        let fetched = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let replaced = repo
            .replace(&created.id, input("Ada L.", "Ushering", day(2024, 4, 1)))
            .await
            .unwrap();
        assert!(replaced);
        let fetched = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Ada L.");
        assert_eq!(fetched.program, "Ushering");

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(repo.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_errors() {
        let repo = MockBioDataRepository::default();
        assert!(repo.get("missing").await.unwrap().is_none());
        assert!(!repo.replace("missing", input("x", "y", day(2024, 1, 1))).await.unwrap());
        assert!(!repo.delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn program_filter_is_exact_and_case_sensitive() {
        let repo = MockBioDataRepository::default();
        repo.insert(input("Ada", "Choir", day(2024, 3, 1))).await.unwrap();
        repo.insert(input("Grace", "choir", day(2024, 3, 2))).await.unwrap();
        repo.insert(input("Alan", "Ushering", day(2024, 3, 3))).await.unwrap();

        let hits = repo.list_by_program("Choir").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ada");

        assert!(repo.list_by_program("Band").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn date_filter_is_inclusive_lower_bound() {
        let repo = MockBioDataRepository::default();
        repo.insert(input("Ada", "Choir", day(2024, 1, 10))).await.unwrap();

        assert_eq!(repo.list_since(day(2024, 1, 5)).await.unwrap().len(), 1);
        assert_eq!(repo.list_since(day(2024, 1, 10)).await.unwrap().len(), 1);
        assert!(repo.list_since(day(2024, 2, 1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_program_name_conflicts() {
        let repo = MockProgramRepository::default();
        repo.insert(ProgramInput { name: "Choir".into() }).await.unwrap();
        let err = repo.insert(ProgramInput { name: "Choir".into() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn program_delete_by_unknown_id_is_false() {
        let repo = MockProgramRepository::default();
        let p = repo.insert(ProgramInput { name: "Choir".into() }).await.unwrap();
        assert!(!repo.delete("missing").await.unwrap());
        assert!(repo.delete(&p.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}

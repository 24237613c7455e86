//! MongoDB-backed repositories. Documents hold exactly the wire fields plus
//! the driver-assigned `_id`; program-name uniqueness comes from the unique
//! index built by [`crate::db::ensure_indexes`], not from a read-then-insert
//! check.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use models::{BioData, BioDataInput, Program, ProgramInput};

use crate::errors::ServiceError;
use crate::repository::{BioDataRepository, ProgramRepository};

pub const BIODATA_COLLECTION: &str = "biodata";
pub const PROGRAMS_COLLECTION: &str = "programs";

fn store_err(e: MongoError) -> ServiceError {
    ServiceError::Store(e.to_string())
}

fn parse_oid(id: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(id).map_err(|_| ServiceError::Validation(format!("invalid id: {id}")))
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000
    )
}

#[derive(Debug, Serialize, Deserialize)]
struct BioDataDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    #[serde(rename = "phoneNumber")]
    phone_number: String,
    program: String,
    date: bson::DateTime,
}

impl BioDataDoc {
    fn from_input(input: BioDataInput) -> Self {
        Self {
            id: None,
            name: input.name,
            phone_number: input.phone_number,
            program: input.program,
            date: bson::DateTime::from_chrono(input.date),
        }
    }

    fn into_domain(self) -> Result<BioData, ServiceError> {
        let id = self
            .id
            .ok_or_else(|| ServiceError::Store("document missing _id".to_string()))?;
        Ok(BioData {
            id: id.to_hex(),
            name: self.name,
            phone_number: self.phone_number,
            program: self.program,
            date: self.date.to_chrono(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProgramDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
}

impl ProgramDoc {
    fn into_domain(self) -> Result<Program, ServiceError> {
        let id = self
            .id
            .ok_or_else(|| ServiceError::Store("document missing _id".to_string()))?;
        Ok(Program { id: id.to_hex(), name: self.name })
    }
}

pub struct MongoBioDataRepository {
    collection: Collection<BioDataDoc>,
}

impl MongoBioDataRepository {
    pub fn new(db: &Database) -> Self {
        Self { collection: db.collection(BIODATA_COLLECTION) }
    }

    async fn find_docs(
        &self,
        filter: Option<bson::Document>,
    ) -> Result<Vec<BioData>, ServiceError> {
        let cursor = self.collection.find(filter, None).await.map_err(store_err)?;
        let docs: Vec<BioDataDoc> = cursor.try_collect().await.map_err(store_err)?;
        docs.into_iter().map(BioDataDoc::into_domain).collect()
    }
}

#[async_trait]
impl BioDataRepository for MongoBioDataRepository {
    async fn insert(&self, input: BioDataInput) -> Result<BioData, ServiceError> {
        let doc = BioDataDoc::from_input(input);
        let res = self.collection.insert_one(&doc, None).await.map_err(store_err)?;
        let id = res
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ServiceError::Store("insert did not return an ObjectId".to_string()))?;
        BioDataDoc { id: Some(id), ..doc }.into_domain()
    }

    async fn list(&self) -> Result<Vec<BioData>, ServiceError> {
        self.find_docs(None).await
    }

    async fn list_by_program(&self, program: &str) -> Result<Vec<BioData>, ServiceError> {
        self.find_docs(Some(doc! { "program": program })).await
    }

    async fn list_since(&self, since: DateTime<Utc>) -> Result<Vec<BioData>, ServiceError> {
        let bound = bson::DateTime::from_chrono(since);
        self.find_docs(Some(doc! { "date": { "$gte": bound } })).await
    }

    async fn get(&self, id: &str) -> Result<Option<BioData>, ServiceError> {
        let oid = parse_oid(id)?;
        let found = self
            .collection
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_err)?;
        found.map(BioDataDoc::into_domain).transpose()
    }

    async fn replace(&self, id: &str, input: BioDataInput) -> Result<bool, ServiceError> {
        let oid = parse_oid(id)?;
        // Replacement carries no _id, so the stored one is kept
        let replacement = BioDataDoc::from_input(input);
        let res = self
            .collection
            .replace_one(doc! { "_id": oid }, &replacement, None)
            .await
            .map_err(store_err)?;
        Ok(res.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let oid = parse_oid(id)?;
        let res = self
            .collection
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_err)?;
        Ok(res.deleted_count > 0)
    }
}

pub struct MongoProgramRepository {
    collection: Collection<ProgramDoc>,
}

impl MongoProgramRepository {
    pub fn new(db: &Database) -> Self {
        Self { collection: db.collection(PROGRAMS_COLLECTION) }
    }
}

#[async_trait]
impl ProgramRepository for MongoProgramRepository {
    async fn insert(&self, input: ProgramInput) -> Result<Program, ServiceError> {
        let doc = ProgramDoc { id: None, name: input.name };
        match self.collection.insert_one(&doc, None).await {
            Ok(res) => {
                let id = res.inserted_id.as_object_id().ok_or_else(|| {
                    ServiceError::Store("insert did not return an ObjectId".to_string())
                })?;
                Ok(Program { id: id.to_hex(), name: doc.name })
            }
            Err(e) if is_duplicate_key(&e) => Err(ServiceError::Conflict(
                "Program with the same name already exists".to_string(),
            )),
            Err(e) => Err(store_err(e)),
        }
    }

    async fn list(&self) -> Result<Vec<Program>, ServiceError> {
        let cursor = self.collection.find(None, None).await.map_err(store_err)?;
        let docs: Vec<ProgramDoc> = cursor.try_collect().await.map_err(store_err)?;
        docs.into_iter().map(ProgramDoc::into_domain).collect()
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let oid = parse_oid(id)?;
        let res = self
            .collection
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_err)?;
        Ok(res.deleted_count > 0)
    }
}

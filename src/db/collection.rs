//! MongoDB 드라이버 기반 [`UserCollection`] 구현

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use mongodb::{
    bson::Document,
    options::ReturnDocument,
    Collection,
};
use crate::core::errors::BoxError;
use crate::repositories::users::collection::{DocumentStream, UserCollection};

fn boxed(e: mongodb::error::Error) -> BoxError {
    Box::new(e)
}

/// `mongodb::Collection<Document>` 어댑터
#[derive(Clone)]
pub struct MongoUserCollection {
    collection: Collection<Document>,
}

impl MongoUserCollection {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    pub fn name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl UserCollection for MongoUserCollection {
    async fn insert_one(&self, document: Document) -> Result<(), BoxError> {
        self.collection
            .insert_one(document)
            .await
            .map(|_| ())
            .map_err(boxed)
    }

    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, BoxError> {
        self.collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(boxed)
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, BoxError> {
        self.collection
            .delete_one(filter)
            .await
            .map(|result| result.deleted_count)
            .map_err(boxed)
    }

    async fn find(&self, filter: Document) -> Result<DocumentStream, BoxError> {
        let cursor = self.collection.find(filter).await.map_err(boxed)?;

        Ok(cursor.map_err(boxed).boxed())
    }
}

//! 테스트용 메모리 기반 [`UserCollection`] 구현
//!
//! 최상위 필드 동등 비교 필터와 `$set` 갱신만 지원합니다.

use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use mongodb::bson::Document;
use crate::core::errors::BoxError;
use super::collection::{DocumentStream, UserCollection};

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserCollection {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryUserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 검증을 거치지 않은 원시 문서로 채웁니다.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    fn matches(document: &Document, filter: &Document) -> bool {
        filter
            .iter()
            .all(|(key, expected)| document.get(key) == Some(expected))
    }
}

#[async_trait]
impl UserCollection for InMemoryUserCollection {
    async fn insert_one(&self, document: Document) -> Result<(), BoxError> {
        let mut documents = self.documents.write().unwrap();

        if let Some(id) = document.get("_id") {
            if documents.iter().any(|existing| existing.get("_id") == Some(id)) {
                return Err(format!("E11000 duplicate key error: _id {}", id).into());
            }
        }

        documents.push(document);
        Ok(())
    }

    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, BoxError> {
        let changes = update.get_document("$set")?.clone();
        let mut documents = self.documents.write().unwrap();

        let Some(target) = documents
            .iter_mut()
            .find(|document| Self::matches(document, &filter))
        else {
            return Ok(None);
        };

        for (key, value) in changes {
            target.insert(key, value);
        }

        Ok(Some(target.clone()))
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, BoxError> {
        let mut documents = self.documents.write().unwrap();

        match documents
            .iter()
            .position(|document| Self::matches(document, &filter))
        {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find(&self, filter: Document) -> Result<DocumentStream, BoxError> {
        let matched: Vec<Result<Document, BoxError>> = self
            .documents
            .read()
            .unwrap()
            .iter()
            .filter(|document| Self::matches(document, &filter))
            .cloned()
            .map(Ok)
            .collect();

        Ok(stream::iter(matched).boxed())
    }
}

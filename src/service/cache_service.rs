//! Cache Service
//!
//! Translates RPC messages into CacheStore calls and store outcomes into the
//! service's error taxonomy.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::{
    DeleteRequest, DeleteResponse, GetRequest, GetResponse, PutRequest, PutResponse,
};

/// Adapter between remote calls and a shared [`CacheStore`].
///
/// Holds no state besides the store handle. Clones share the same store, so
/// one instance can be handed to every concurrent call.
#[derive(Debug, Clone)]
pub struct CacheService {
    store: Arc<CacheStore>,
}

impl CacheService {
    /// Creates a service backed by `store`.
    pub fn new(store: Arc<CacheStore>) -> Self {
        Self { store }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    /// Get call: returns the key and its payload, or `NotFound`.
    pub fn get(&self, req: GetRequest) -> Result<GetResponse> {
        debug!(key = %req.key, "looking up key");

        match self.store.get(&req.key) {
            Ok(value) => {
                debug!(key = %req.key, size = value.len(), "found key");
                Ok(GetResponse::new(req.key, value))
            }
            Err(err) => {
                debug!(key = %req.key, "key not found");
                Err(err)
            }
        }
    }

    /// Put call: populates an absent key, or fails with `AlreadyExists`.
    pub fn put(&self, req: PutRequest) -> Result<PutResponse> {
        info!(key = %req.key, size = req.value.len(), "writing value at key");

        let key = self.store.put(req.key, req.value).map_err(|err| {
            debug!(error = %err, "put rejected");
            err
        })?;

        Ok(PutResponse::new(key))
    }

    /// Delete call: removes a present key, or fails with `NotFound`.
    pub fn delete(&self, req: DeleteRequest) -> Result<DeleteResponse> {
        info!(key = %req.key, "removing key");

        let key = self.store.delete(&req.key).map_err(|err| {
            debug!(error = %err, "delete rejected");
            err
        })?;

        Ok(DeleteResponse::new(key))
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new(Arc::new(CacheStore::new()))
    }
}

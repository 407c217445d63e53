//! # Database connection module
//!
//! `DocumentStore` is the seam the lookup sequence runs against. `MongoStore`
//! is the real implementation: one `mongodb::Client` owned for the lifetime of
//! a single lookup and released by `close`.

use {
    crate::{errors::LookupError, models::LookupTarget},
    mongodb::{
        Client,
        bson::{Document, doc},
        error::Result as MongoResult,
        options::ClientOptions,
    },
    tracing::{debug, info, warn},
};

/// A handle that can answer one find-one query and then be released.
///
/// `close` consumes the handle so nothing can query it afterwards.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn find_one(
        &self,
        target: &LookupTarget,
        filter: Document,
    ) -> MongoResult<Option<Document>>;

    async fn close(self) -> MongoResult<()>;
}

/// MongoDB connection handle.
pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Parses the connection string, builds the client and pings the deployment.
    ///
    /// The driver connects lazily, so the ping is what surfaces bad hosts or
    /// credentials before any query runs. If the ping fails the client is shut
    /// down before the error is returned.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - a `mongodb://` or `mongodb+srv://` URI
    ///
    /// # Returns
    ///
    /// A connected store, or `LookupError::Connect` for a malformed string,
    /// a failed SRV lookup, or an unreachable/unauthorised deployment.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// let store = MongoStore::connect("mongodb://localhost:27017").await?;
    /// store.close().await?;
    /// ```
    pub async fn connect(connection_string: &str) -> Result<Self, LookupError> {
        let client_options = ClientOptions::parse(connection_string)
            .await
            .map_err(LookupError::Connect)?;
        let hosts = client_options.hosts.len();
        let client = Client::with_options(client_options).map_err(LookupError::Connect)?;

        if let Err(e) = client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
        {
            warn!(error = %e, "ping failed, releasing client");
            shutdown(client).await;
            return Err(LookupError::Connect(e));
        }

        info!(hosts, "connected to MongoDB deployment");

        Ok(Self { client })
    }
}

async fn shutdown(client: Client) {
    client.shutdown().await;
    info!("connection closed");
}

impl DocumentStore for MongoStore {
    async fn find_one(
        &self,
        target: &LookupTarget,
        filter: Document,
    ) -> MongoResult<Option<Document>> {
        debug!(namespace = %target, ?filter, "running find_one");

        self.client
            .database(&target.database)
            .collection::<Document>(&target.collection)
            .find_one(filter)
            .await
    }

    async fn close(self) -> MongoResult<()> {
        shutdown(self.client).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_empty_host() {
        let result = MongoStore::connect("mongodb://").await;
        assert!(matches!(result, Err(LookupError::Connect(_))));
    }

    #[tokio::test]
    async fn test_connect_unreachable_host_fails_fast() {
        let result =
            MongoStore::connect("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300").await;

        match result {
            Err(LookupError::Connect(e)) => assert!(!e.to_string().is_empty()),
            Err(other) => panic!("Expected Connect error, got {other:?}"),
            Ok(_) => panic!("Expected Connect error, got a store"),
        }
    }
}

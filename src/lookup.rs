//! # Lookup sequence
//!
//! connect → select → find_one → print → close. The handle is released after
//! the query and print settle, whatever their outcome.

use {
    crate::{
        db::DocumentStore,
        errors::LookupError,
        models::LookupRequest,
        output,
    },
    mongodb::bson::Document,
    std::{future::Future, io::Write},
    tracing::{info, warn},
};

/// Acquires a store and runs the lookup against it.
///
/// A failed connect returns immediately; no query is attempted and there is
/// no handle to release (the connector cleans up after itself).
///
/// # Returns
///
/// The matching document, `None` when nothing matched, or the first error
/// from connecting, querying, writing, or closing.
///
/// # Example
///
/// ```rust,no_run
/// let mut stdout = std::io::stdout().lock();
/// let request = LookupRequest::default();
/// lookup::execute(MongoStore::connect(uri), &request, &mut stdout).await?;
/// ```
pub async fn execute<S, C, W>(
    connect: C,
    request: &LookupRequest,
    out: &mut W,
) -> Result<Option<Document>, LookupError>
where
    S: DocumentStore,
    C: Future<Output = Result<S, LookupError>>,
    W: Write,
{
    let store = connect.await?;
    run(store, request, out).await
}

/// Runs one find-one against `store`, writes the result to `out`, and closes
/// the store exactly once.
///
/// Close runs after the query and the write settle, whether they succeeded
/// or not. When both the lookup and the close fail, the error is
/// `LookupError::Cleanup` carrying both.
///
/// # Returns
///
/// The matching document or `None`; absence is printed as `null` and is not
/// an error.
pub async fn run<S, W>(
    store: S,
    request: &LookupRequest,
    out: &mut W,
) -> Result<Option<Document>, LookupError>
where
    S: DocumentStore,
    W: Write,
{
    let outcome = async {
        let document = store
            .find_one(&request.target, request.filter.to_document())
            .await
            .map_err(LookupError::Query)?;

        info!(
            namespace = %request.target,
            field = %request.filter.field,
            found = document.is_some(),
            "find_one settled"
        );

        output::write_result(out, document.as_ref(), request.format)?;
        Ok::<_, LookupError>(document)
    }
    .await;

    match (outcome, store.close().await) {
        (outcome, Ok(())) => outcome,
        (Ok(_), Err(close)) => Err(LookupError::Close(close)),
        (Err(primary), Err(close)) => {
            warn!(error = %close, "close failed after lookup error");
            Err(primary.with_close_failure(close))
        }
    }
}

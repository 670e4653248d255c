//! Access to the remote recipe catalog.
//!
//! The state store only sees the [`DataSource`] trait; [`HttpDataSource`]
//! is the production implementation. Responses are handed over as raw
//! JSON and converted by the recipe formatter.

mod client;
mod error;

use std::future::Future;

use serde_json::Value;

use crate::recipe::NewRecipePayload;

pub use client::HttpDataSource;
pub use error::ApiError;

/// Fetches raw catalog payloads.
///
/// Implementations settle each call exactly once; a timeout is reported
/// as [`ApiError::Timeout`].
pub trait DataSource {
    /// `GET {endpoint}/{id}`
    fn get_recipe(&self, id: &str) -> impl Future<Output = Result<Value, ApiError>>;

    /// `GET {endpoint}?search={query}`
    fn search(&self, query: &str) -> impl Future<Output = Result<Value, ApiError>>;

    /// `POST {endpoint}` with a JSON body.
    fn create_recipe(
        &self,
        payload: &NewRecipePayload,
    ) -> impl Future<Output = Result<Value, ApiError>>;
}

use serde::Deserialize;

use super::Category;

/// The decoded payload of a category listing.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryCollectionResponse {
    /// Categories in server order
    pub(crate) categories: Vec<Category>,
}

impl CategoryCollectionResponse {
    /// Creates a new `CategoryCollectionResponse` with the given categories.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Retrieves the categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Consumes the response and returns the categories.
    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }
}

/// A response as handed over by the transport, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The status code
    pub(crate) status: u16,

    /// A one-line description of the raw exchange, for diagnostics
    pub(crate) metadata: String,

    /// The body, if any
    pub(crate) body: Option<String>,
}

impl RawResponse {
    /// Creates a new `RawResponse`.
    pub fn new(status: u16, metadata: &str, body: Option<String>) -> Self {
        Self {
            status,
            metadata: metadata.to_string(),
            body,
        }
    }

    /// Creates a `RawResponse` with a JSON body for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(status: u16, body: serde_json::Value) -> Self {
        Self::new(status, "HTTP/1.1 dummy", Some(body.to_string()))
    }

    /// Retrieves the status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns whether the status code is in the success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Retrieves the raw exchange description.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Retrieves the body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

//! Response envelope shared by every operation.

use reqwest::header::HeaderMap;

/// Raw facts about one HTTP exchange.
///
/// Kept next to every typed result and inside every post-response error, so the
/// status, headers and body text stay inspectable whatever the outcome.
#[derive(Debug, Clone, Default)]
pub struct ResponseData {
    pub status: u16,
    pub headers: HeaderMap,
    /// Body as text (lossy UTF-8).
    pub body: String,
    /// `false` when the status was non-2xx or the body could not be decoded.
    pub success: bool,
}

impl ResponseData {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Value of the `X-Global-Transaction-Id` header, useful when reporting issues
    /// to the service operator.
    pub fn transaction_id(&self) -> Option<&str> {
        self.header("x-global-transaction-id")
    }
}

/// A decoded result together with the [`ResponseData`] it came from.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub result: T,
    pub data: ResponseData,
}

impl<T> DetailedResponse<T> {
    pub fn status(&self) -> u16 {
        self.data.status
    }

    pub fn into_result(self) -> T {
        self.result
    }

    pub fn into_parts(self) -> (T, ResponseData) {
        (self.result, self.data)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            result: f(self.result),
            data: self.data,
        }
    }
}

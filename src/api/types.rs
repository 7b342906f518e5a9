//! HTTP request/response types
//!
//! Defines the framework-independent HTTP types used in the API layer.

// =============================================================================
// HttpRequest
// =============================================================================

/// Framework-independent HTTP request
///
/// A simple struct that holds the request body.
///
/// # Examples
///
/// ```
/// use order_taking::api::HttpRequest;
///
/// let request = HttpRequest::new(r#"{"orderId": "ORD1"}"#.to_string());
/// assert!(request.body().contains("orderId"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    body: String,
}

impl HttpRequest {
    /// Creates a new `HttpRequest`
    #[must_use]
    pub const fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the request body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

// =============================================================================
// HttpResponse
// =============================================================================

/// Framework-independent HTTP response
///
/// A struct that holds a status code and response body.
///
/// # Examples
///
/// ```
/// use order_taking::api::HttpResponse;
///
/// let response = HttpResponse::ok(r#"{"success": true}"#.to_string());
/// assert_eq!(response.status_code(), 200);
/// assert!(response.is_success());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    status_code: u16,
    body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`
    #[must_use]
    pub const fn new(status_code: u16, body: String) -> Self {
        Self { status_code, body }
    }

    /// Creates a 200 OK response
    #[must_use]
    pub const fn ok(body: String) -> Self {
        Self::new(200, body)
    }

    /// Creates a 400 Bad Request response
    #[must_use]
    pub const fn bad_request(body: String) -> Self {
        Self::new(400, body)
    }

    /// Creates a 500 Internal Server Error response
    #[must_use]
    pub const fn internal_server_error(body: String) -> Self {
        Self::new(500, body)
    }

    /// Creates a 502 Bad Gateway response
    ///
    /// Used when a remote collaborator the workflow depends on fails.
    #[must_use]
    pub const fn bad_gateway(body: String) -> Self {
        Self::new(502, body)
    }

    /// Returns the HTTP status code
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the response body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns the body
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }

    /// Returns whether the response is a success (2xx)
    ///
    /// # Examples
    ///
    /// ```
    /// use order_taking::api::HttpResponse;
    ///
    /// assert!(HttpResponse::ok("OK".to_string()).is_success());
    /// assert!(!HttpResponse::bad_request("Error".to_string()).is_success());
    /// ```
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

// =============================================================================
// Tests
// =============================================================================

pub mod enrichment;
pub mod news;
pub mod place;
pub mod wiki;

use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client with a custom User-Agent so that public APIs don't
/// reject the request. Building the client once avoids the cost of TLS and
/// connection pool setup for every call.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("nyc-pinboard/0.1 (+https://github.com/example/nyc-pinboard)")
        .build()
        .expect("failed to build reqwest client")
});

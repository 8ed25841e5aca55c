//! Translation client.
//!
//! Two seams: [`NmtClient`] is the raw backend call, and
//! [`FallbackTranslator`] is the policy layer the pipeline uses; it never
//! fails, returning the untranslated input when the backend does.

mod fallback;
mod remote;
mod stub;
mod types;

pub use fallback::FallbackTranslator;
pub use remote::NmtHttpClient;
pub use stub::NmtStub;
pub use types::{NmtClient, NmtTranslateRequest, NmtTranslateResponse};

mod client;
mod error;
mod rank;
mod session;
mod throttle;
mod transport;
mod types;

pub use client::JishoClient;
pub use error::LookupError;
pub use rank::rank_exact_first;
pub use session::{LookupSession, NOT_FOUND_MESSAGE, Submission};
pub use throttle::{RequestThrottle, ThrottleRejection};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use types::{JapaneseForm, RemoteWord, Sense, SenseLink};

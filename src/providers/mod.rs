pub mod descriptor;
pub mod fixture;
pub mod http;
pub mod traits;

pub use descriptor::{FormDescriptor, QuestionDescriptor};
pub use fixture::FixtureProvider;
pub use http::HttpFormsProvider;
pub use traits::FormsProvider;

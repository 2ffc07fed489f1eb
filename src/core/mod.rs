pub mod fetch_proxy;
pub mod modules;

pub use crate::domain::model::HttpResponse;
pub use crate::domain::ports::HttpClient;
pub use crate::utils::error::Result;
pub use fetch_proxy::FetchProxy;
pub use modules::{ModuleDef, ModuleRegistry};

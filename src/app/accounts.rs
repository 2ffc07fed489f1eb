// Accounts feature module.

use crate::core::FetchProxy;

pub const NAME: &str = "app.accounts";

pub const REQUIRES: &[&str] = &[];

/// Name the account service is registered under on the root module.
pub const SERVICE: &str = "accountSvc";

/// Account service: forwards API routes to the injected HTTP client.
pub type AccountService<C> = FetchProxy<C>;

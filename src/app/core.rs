// Cross-application pieces are aggregated here.

pub const NAME: &str = "app.core";

/// Third-party module the core pulls in.
pub const ROUTER: &str = "ngRoute";

pub const REQUIRES: &[&str] = &[ROUTER];

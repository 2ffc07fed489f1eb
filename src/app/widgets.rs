// Application-specific components.

pub const NAME: &str = "app.widgets";

pub const REQUIRES: &[&str] = &[];

//! Application module declarations and the composition root.
//!
//! `app` aggregates `app.core`, `app.widgets` and `app.accounts`. The
//! feature modules are groupings only; the one service with behaviour is the
//! account service registered on the root.

pub mod accounts;
pub mod core;
pub mod widgets;

use crate::core::{HttpClient, ModuleRegistry};
use crate::utils::error::Result;
use accounts::AccountService;
use std::sync::Arc;

pub const NAME: &str = "app";

pub const REQUIRES: &[&str] = &[self::core::NAME, widgets::NAME, accounts::NAME];

pub fn declare_modules(registry: &mut ModuleRegistry) -> Result<()> {
    registry.external(self::core::ROUTER);
    registry.declare(self::core::NAME, self::core::REQUIRES)?;
    registry.declare(widgets::NAME, widgets::REQUIRES)?;
    registry.declare(accounts::NAME, accounts::REQUIRES)?;
    registry.declare(NAME, REQUIRES)?;
    registry.register_service(NAME, accounts::SERVICE)?;
    Ok(())
}

pub struct App<C: HttpClient> {
    registry: ModuleRegistry,
    load_order: Vec<String>,
    accounts: AccountService<C>,
}

impl<C: HttpClient> App<C> {
    /// Declares every module, checks the root resolves, and wires the
    /// services to `client`.
    pub fn bootstrap(client: Arc<C>) -> Result<Self> {
        let mut registry = ModuleRegistry::new();
        declare_modules(&mut registry)?;

        let load_order = registry.load_order(NAME)?;
        tracing::info!("Bootstrapped {} with modules: {}", NAME, load_order.join(", "));

        Ok(Self {
            registry,
            load_order,
            accounts: AccountService::new(client),
        })
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn load_order(&self) -> &[String] {
        &self.load_order
    }

    pub fn accounts(&self) -> &AccountService<C> {
        &self.accounts
    }
}

use crate::utils::error::{AppError, Result};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDef {
    pub name: String,
    pub requires: Vec<String>,
    pub services: Vec<String>,
}

/// Named groupings of the application and the services attached to them.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, ModuleDef>,
    externals: BTreeSet<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`, replacing any earlier declaration with the same name.
    pub fn declare(&mut self, name: &str, requires: &[&str]) -> Result<&mut ModuleDef> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidModuleName {
                name: name.to_string(),
            });
        }

        let def = ModuleDef {
            name: name.to_string(),
            requires: requires.iter().map(|r| r.to_string()).collect(),
            services: Vec::new(),
        };

        match self.modules.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                tracing::warn!(module = name, "module redeclared, previous definition replaced");
                slot.insert(def);
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => {
                tracing::debug!(module = name, ?requires, "module declared");
                Ok(slot.insert(def))
            }
        }
    }

    /// Marks a module provided outside this application (e.g. `ngRoute`).
    pub fn external(&mut self, name: &str) {
        self.externals.insert(name.to_string());
    }

    pub fn module(&self, name: &str) -> Result<&ModuleDef> {
        self.modules
            .get(name)
            .ok_or_else(|| AppError::UnknownModule {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name) || self.externals.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn register_service(&mut self, module: &str, service: &str) -> Result<()> {
        let def = self
            .modules
            .get_mut(module)
            .ok_or_else(|| AppError::ModuleNotFound {
                name: module.to_string(),
                required_by: format!("service {}", service),
            })?;

        if def.services.iter().any(|s| s == service) {
            return Err(AppError::DuplicateService {
                module: module.to_string(),
                service: service.to_string(),
            });
        }

        def.services.push(service.to_string());
        tracing::debug!(module, service, "service registered");
        Ok(())
    }

    /// Dependency-first order of everything reachable from `root`, root last.
    pub fn load_order(&self, root: &str) -> Result<Vec<String>> {
        if !self.contains(root) {
            return Err(AppError::ModuleNotFound {
                name: root.to_string(),
                required_by: "bootstrap".to_string(),
            });
        }

        let mut order = Vec::new();
        let mut visited = HashSet::new();
        self.visit(root, &mut visited, &mut order)?;
        Ok(order)
    }

    fn visit<'a>(
        &'a self,
        name: &'a str,
        visited: &mut HashSet<&'a str>,
        order: &mut Vec<String>,
    ) -> Result<()> {
        // Marked before descending so a cycle terminates.
        if !visited.insert(name) {
            return Ok(());
        }

        if let Some(def) = self.modules.get(name) {
            for dep in &def.requires {
                if !self.contains(dep) {
                    return Err(AppError::ModuleNotFound {
                        name: dep.clone(),
                        required_by: name.to_string(),
                    });
                }
                self.visit(dep, visited, order)?;
            }
        }

        order.push(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut registry = ModuleRegistry::new();
        registry.declare("app.widgets", &[]).unwrap();

        let def = registry.module("app.widgets").unwrap();
        assert_eq!(def.name, "app.widgets");
        assert!(def.requires.is_empty());
        assert!(registry.contains("app.widgets"));
        match registry.module("app.nope") {
            Err(err @ AppError::UnknownModule { .. }) => {
                assert_eq!(err.to_string(), "Module 'app.nope' is not declared");
            }
            other => panic!("expected UnknownModule, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut registry = ModuleRegistry::new();
        assert!(matches!(
            registry.declare("  ", &[]),
            Err(AppError::InvalidModuleName { .. })
        ));
    }

    #[test]
    fn test_redeclare_replaces_definition() {
        let mut registry = ModuleRegistry::new();
        registry.declare("app", &["a"]).unwrap();
        registry.register_service("app", "svc").unwrap();
        registry.declare("app", &[]).unwrap();

        let def = registry.module("app").unwrap();
        assert!(def.requires.is_empty());
        assert!(def.services.is_empty());
    }

    #[test]
    fn test_register_service() {
        let mut registry = ModuleRegistry::new();
        registry.declare("app", &[]).unwrap();
        registry.register_service("app", "accountSvc").unwrap();

        assert_eq!(registry.module("app").unwrap().services, vec!["accountSvc"]);
        assert!(matches!(
            registry.register_service("app", "accountSvc"),
            Err(AppError::DuplicateService { .. })
        ));
        assert!(matches!(
            registry.register_service("missing", "accountSvc"),
            Err(AppError::ModuleNotFound { .. })
        ));
    }

    #[test]
    fn test_load_order_dependencies_first() {
        let mut registry = ModuleRegistry::new();
        registry.external("ngRoute");
        registry.declare("core", &["ngRoute"]).unwrap();
        registry.declare("widgets", &[]).unwrap();
        registry.declare("root", &["core", "widgets", "core"]).unwrap();

        let order = registry.load_order("root").unwrap();
        assert_eq!(order, vec!["ngRoute", "core", "widgets", "root"]);
    }

    #[test]
    fn test_load_order_missing_dependency() {
        let mut registry = ModuleRegistry::new();
        registry.declare("root", &["ghost"]).unwrap();

        match registry.load_order("root") {
            Err(AppError::ModuleNotFound { name, required_by }) => {
                assert_eq!(name, "ghost");
                assert_eq!(required_by, "root");
            }
            other => panic!("expected ModuleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_order_cycle_terminates() {
        let mut registry = ModuleRegistry::new();
        registry.declare("a", &["b"]).unwrap();
        registry.declare("b", &["a"]).unwrap();

        let order = registry.load_order("a").unwrap();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn test_load_order_unknown_root() {
        let registry = ModuleRegistry::new();
        assert!(registry.load_order("app").is_err());
    }
}

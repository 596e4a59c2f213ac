//! Route descriptors and the dashboard's route table.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::RouteError;

/// Name of the login route. Exactly one descriptor in a table carries it.
pub const LOGIN: &str = "login";

/// Name of the route authenticated users land on.
pub const DASHBOARD: &str = "dashboard";

/// A navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RouteDescriptor {
    /// Unique route name.
    pub name: &'static str,
    /// Browser path.
    pub path: &'static str,
    /// Whether a valid session is needed to enter.
    pub requires_auth: bool,
}

impl RouteDescriptor {
    /// Register a route that anyone may visit.
    #[must_use]
    pub const fn public(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            requires_auth: false,
        }
    }

    /// Register a route that needs a valid session.
    #[must_use]
    pub const fn protected(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            requires_auth: true,
        }
    }

    /// Whether this is the login route.
    #[must_use]
    pub fn is_login(&self) -> bool {
        self.name == LOGIN
    }
}

const DASHBOARD_ROUTES: [RouteDescriptor; 15] = [
    RouteDescriptor::public(LOGIN, "/"),
    RouteDescriptor::protected(DASHBOARD, "/admin/dashboard"),
    RouteDescriptor::protected("users", "/admin/users"),
    RouteDescriptor::protected("roles", "/admin/roles"),
    RouteDescriptor::protected("suppliers", "/admin/suppliers"),
    RouteDescriptor::protected("expenses", "/admin/expenses"),
    RouteDescriptor::protected("inputs", "/admin/inputs"),
    RouteDescriptor::protected("services", "/admin/services"),
    RouteDescriptor::protected("customers", "/admin/customers"),
    RouteDescriptor::protected("stocks", "/admin/stocks"),
    RouteDescriptor::protected("stock-movements", "/admin/stock-movements"),
    RouteDescriptor::protected("bills-to-pays", "/admin/bills-to-pays"),
    RouteDescriptor::protected("cash-flows", "/admin/cash-flows"),
    RouteDescriptor::protected("orders", "/admin/orders"),
    RouteDescriptor::protected("reports", "/admin/reports"),
];

/// Ordered, immutable set of registered routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    login: usize,
    dashboard: usize,
}

impl RouteTable {
    /// Validate and freeze a set of descriptors.
    ///
    /// # Errors
    /// Returns [`RouteError`] on duplicate names or paths, or when the
    /// `login` or `dashboard` route is missing.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();
        for route in &routes {
            if !names.insert(route.name) {
                return Err(RouteError::DuplicateName(route.name.to_string()));
            }
            if !paths.insert(route.path) {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
        }

        let position = |name: &'static str| {
            routes
                .iter()
                .position(|route| route.name == name)
                .ok_or(RouteError::Missing(name))
        };
        let login = position(LOGIN)?;
        let dashboard = position(DASHBOARD)?;

        Ok(Self {
            routes,
            login,
            dashboard,
        })
    }

    /// The stock table of the back-office dashboard.
    #[must_use]
    pub fn dashboard() -> Self {
        Self {
            routes: DASHBOARD_ROUTES.to_vec(),
            login: 0,
            dashboard: 1,
        }
    }

    /// Look a route up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Look a route up by name, failing on unknown names.
    ///
    /// # Errors
    /// Returns [`RouteError::Unknown`] when no route has that name.
    pub fn require(&self, name: &str) -> Result<&RouteDescriptor, RouteError> {
        self.get(name)
            .ok_or_else(|| RouteError::Unknown(name.to_string()))
    }

    /// Look a route up by browser path.
    #[must_use]
    pub fn by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// The login route.
    #[must_use]
    pub fn login(&self) -> &RouteDescriptor {
        &self.routes[self.login]
    }

    /// The dashboard route.
    #[must_use]
    pub fn dashboard_route(&self) -> &RouteDescriptor {
        &self.routes[self.dashboard]
    }

    /// Iterate routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty. Never true for a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_table_passes_validation() {
        let table = RouteTable::new(DASHBOARD_ROUTES.to_vec()).unwrap();
        assert_eq!(table, RouteTable::dashboard());
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn only_login_is_public() {
        let table = RouteTable::dashboard();
        let public: Vec<_> = table
            .iter()
            .filter(|route| !route.requires_auth)
            .map(|route| route.name)
            .collect();
        assert_eq!(public, vec![LOGIN]);
    }

    #[test]
    fn lookups_by_name_and_path() {
        let table = RouteTable::dashboard();
        assert_eq!(table.login().path, "/");
        assert_eq!(table.dashboard_route().path, "/admin/dashboard");
        assert_eq!(table.get("cash-flows").unwrap().path, "/admin/cash-flows");
        assert_eq!(table.by_path("/admin/orders").unwrap().name, "orders");
        assert!(table.get("nope").is_none());
        assert_eq!(
            table.require("nope").unwrap_err(),
            RouteError::Unknown("nope".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = RouteTable::new(vec![
            RouteDescriptor::public(LOGIN, "/"),
            RouteDescriptor::protected(DASHBOARD, "/a"),
            RouteDescriptor::protected(DASHBOARD, "/b"),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicateName(DASHBOARD.to_string()));
    }

    #[test]
    fn rejects_duplicate_paths() {
        let err = RouteTable::new(vec![
            RouteDescriptor::public(LOGIN, "/"),
            RouteDescriptor::protected(DASHBOARD, "/"),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/".to_string()));
    }

    #[test]
    fn requires_login_and_dashboard() {
        let err = RouteTable::new(vec![RouteDescriptor::protected(DASHBOARD, "/d")]).unwrap_err();
        assert_eq!(err, RouteError::Missing(LOGIN));

        let err = RouteTable::new(vec![RouteDescriptor::public(LOGIN, "/")]).unwrap_err();
        assert_eq!(err, RouteError::Missing(DASHBOARD));
    }

    #[test]
    fn public_registration_defaults_to_no_auth() {
        let route = RouteDescriptor::public("about", "/about");
        assert!(!route.requires_auth);
        assert!(!route.is_login());
        assert!(RouteDescriptor::public(LOGIN, "/").is_login());
    }
}

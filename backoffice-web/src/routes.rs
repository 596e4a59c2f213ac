use crate::components::guarded_route::GuardedRoute;
use shared::{RouteDescriptor, RouteTable};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Browser paths of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/users")]
    Users,
    #[at("/admin/roles")]
    Roles,
    #[at("/admin/suppliers")]
    Suppliers,
    #[at("/admin/expenses")]
    Expenses,
    #[at("/admin/inputs")]
    Inputs,
    #[at("/admin/services")]
    Services,
    #[at("/admin/customers")]
    Customers,
    #[at("/admin/stocks")]
    Stocks,
    #[at("/admin/stock-movements")]
    StockMovements,
    #[at("/admin/bills-to-pays")]
    BillsToPays,
    #[at("/admin/cash-flows")]
    CashFlows,
    #[at("/admin/orders")]
    Orders,
    #[at("/admin/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Name the route is registered under, `None` for the fallback.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Login => shared::routes::LOGIN,
            Self::Dashboard => shared::routes::DASHBOARD,
            Self::Users => "users",
            Self::Roles => "roles",
            Self::Suppliers => "suppliers",
            Self::Expenses => "expenses",
            Self::Inputs => "inputs",
            Self::Services => "services",
            Self::Customers => "customers",
            Self::Stocks => "stocks",
            Self::StockMovements => "stock-movements",
            Self::BillsToPays => "bills-to-pays",
            Self::CashFlows => "cash-flows",
            Self::Orders => "orders",
            Self::Reports => "reports",
            Self::NotFound => return None,
        })
    }

    /// Heading shown for the section.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Users => "Usuários",
            Self::Roles => "Perfis",
            Self::Suppliers => "Fornecedores",
            Self::Expenses => "Despesas",
            Self::Inputs => "Insumos",
            Self::Services => "Serviços",
            Self::Customers => "Clientes",
            Self::Stocks => "Estoque",
            Self::StockMovements => "Movimentações de Estoque",
            Self::BillsToPays => "Contas a Pagar",
            Self::CashFlows => "Fluxo de Caixa",
            Self::Orders => "Pedidos",
            Self::Reports => "Relatórios",
            Self::NotFound => "Página não encontrada",
        }
    }

    /// Descriptor the guard evaluates for this route.
    pub fn descriptor(self, routes: &RouteTable) -> Option<RouteDescriptor> {
        self.name().and_then(|name| routes.get(name)).copied()
    }

    /// Route registered under `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|route| route.name() == Some(name))
    }

    /// Sections listed in the sidebar.
    pub fn sections() -> impl Iterator<Item = Self> {
        Self::iter().filter(|route| !matches!(route, Self::Login | Self::NotFound))
    }
}

pub fn switch(route: MainRoute) -> Html {
    log(&format!("Navigating to {route:?}"));
    match route {
        MainRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
        route => html! { <GuardedRoute {route} /> },
    }
}

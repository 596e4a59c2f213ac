use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crate::config::FrontendConfig;
use crate::routes::{MainRoute, switch};
use crate::storage::BrowserStorage;
use shared::{
    ApiClient, AppState, NavigationGuard, RemoteTokenValidator, RouteDescriptor, RouteTable,
};
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yew_router::prelude::*;

/// Session state and navigation guard shared by every component.
#[derive(Debug)]
pub struct Session {
    pub state: Arc<AppState>,
    pub api: ApiClient,
    pub guard: NavigationGuard<RemoteTokenValidator>,
    last_route: Cell<Option<RouteDescriptor>>,
}

impl Session {
    /// Open the session stored in the browser.
    pub fn start(config: &FrontendConfig) -> Self {
        let state = Arc::new(AppState::new(Arc::new(BrowserStorage)));
        let api = ApiClient::from_config(&config.client());
        let validator = RemoteTokenValidator::new(api.clone());
        let guard = NavigationGuard::new(
            Arc::clone(&state),
            validator,
            Arc::new(RouteTable::dashboard()),
        );
        Self {
            state,
            api,
            guard,
            last_route: Cell::new(None),
        }
    }

    /// Route the user currently sits on, `None` before the first navigation
    /// completes.
    pub fn last_route(&self) -> Option<RouteDescriptor> {
        self.last_route.get()
    }

    /// Record where the last navigation ended up.
    pub fn arrived(&self, route: RouteDescriptor) {
        self.last_route.set(Some(route));
    }
}

/// Context handle compared by identity.
#[derive(Debug, Clone)]
pub struct SessionContext(pub Rc<Session>);

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |()| Session::start(&FrontendConfig::new()));
    let context = SessionContext(session);

    html! {
        <ContextProvider<SessionContext> {context}>
            <BrowserRouter>
                <Switch<MainRoute> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}

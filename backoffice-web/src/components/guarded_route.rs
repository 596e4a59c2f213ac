//! Runs every route through the navigation guard before rendering it.

use std::task::Poll;

use crate::app::SessionContext;
use crate::components::Loading;
use crate::containers::layout::Layout;
use crate::pages::{LoginPage, SectionPage};
use crate::routes::MainRoute;
use shared::{Disposition, NavigationRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// What a guarded route shows for a given session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The guard is waiting on the remote token check.
    Busy,
    /// Not decided yet and nothing in flight.
    Pending,
    /// Render the route itself.
    Page(MainRoute),
    /// Leave for another route.
    Redirect(MainRoute),
}

/// Pick the view for `route`. The loading flag wins over any decision; a
/// decision taken for another route is ignored.
pub fn view_for(
    loading: bool,
    decision: Option<(MainRoute, Disposition)>,
    route: MainRoute,
) -> View {
    if loading {
        return View::Busy;
    }
    match decision {
        Some((decided, disposition)) if decided == route => match disposition {
            Disposition::Continue => View::Page(route),
            Disposition::RedirectLogin => View::Redirect(MainRoute::Login),
            Disposition::RedirectDashboard => View::Redirect(MainRoute::Dashboard),
        },
        _ => View::Pending,
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub route: MainRoute,
}

#[function_component(GuardedRoute)]
pub fn guarded_route(props: &GuardedRouteProps) -> Html {
    let session = use_context::<SessionContext>().map(|SessionContext(session)| session);
    let decision = use_state(|| None::<(MainRoute, Disposition)>);
    let redraw = use_force_update();

    {
        let decision = decision.clone();
        let session = session.clone();
        use_effect_with(props.route, move |route| {
            let route = *route;
            let to = session
                .as_ref()
                .and_then(|session| route.descriptor(session.guard.routes()));
            match (session, to) {
                (Some(session), Some(to)) => spawn_local(async move {
                    let request = NavigationRequest::new(to, session.last_route());
                    let mut navigation = Box::pin(session.guard.navigate(request));
                    // The first poll raises the loading flag when a remote
                    // check starts; redraw so the indicator shows meanwhile.
                    let decided = match futures::poll!(navigation.as_mut()) {
                        Poll::Ready(decided) => decided,
                        Poll::Pending => {
                            redraw.force_update();
                            navigation.await
                        }
                    };
                    if let Some(disposition) = decided {
                        if disposition == Disposition::Continue {
                            session.arrived(to);
                        }
                        decision.set(Some((route, disposition)));
                    }
                }),
                _ => decision.set(Some((route, Disposition::RedirectLogin))),
            }
            || ()
        });
    }

    let Some(session) = session else {
        return html! { <p class="text-error">{"Sessão indisponível"}</p> };
    };

    match view_for(session.state.loading.get(), *decision, props.route) {
        View::Busy => html! { <Loading /> },
        View::Pending => html! {},
        View::Page(MainRoute::Login) => html! { <LoginPage /> },
        View::Page(route) => html! {
            <Layout current={route}>
                <SectionPage title={route.title()} />
            </Layout>
        },
        View::Redirect(to) => html! { <Redirect<MainRoute> {to} /> },
    }
}

use crate::app::SessionContext;
use crate::routes::MainRoute;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current: MainRoute,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let session = use_context::<SessionContext>().map(|SessionContext(session)| session);
    let navigator = use_navigator();
    let redraw = use_force_update();

    let expanded = session
        .as_ref()
        .is_some_and(|session| session.state.sidebar.get());
    let user_name = session
        .as_ref()
        .and_then(|session| session.state.user.get())
        .map(|user| user.name);

    let on_toggle = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = &session {
                session.state.sidebar.toggle();
                redraw.force_update();
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = &session {
                if let Err(err) = session.state.logout() {
                    log(&format!("Logout left stale session data: {err}"));
                }
            }
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        })
    };

    html! {
        <div class={classes!("min-h-screen", "bg-base-100", "drawer", expanded.then_some("drawer-open"))}>
            <aside class="drawer-side">
                <ul class="menu p-4 w-64 bg-base-200 min-h-full">
                    { for MainRoute::sections().map(|route| html! {
                        <li>
                            <Link<MainRoute>
                                to={route}
                                classes={classes!((route == props.current).then_some("active"))}
                            >
                                { route.title() }
                            </Link<MainRoute>>
                        </li>
                    }) }
                </ul>
            </aside>
            <div class="drawer-content flex flex-col">
                <header class="navbar bg-base-200 border-b border-base-300">
                    <button class="btn btn-ghost btn-square" aria-label="Alternar menu" onclick={on_toggle}>
                        {"☰"}
                    </button>
                    <h1 class="flex-1 text-xl font-semibold px-2">{ props.current.title() }</h1>
                    if let Some(name) = user_name {
                        <span class="px-2">{ name }</span>
                    }
                    <button class="btn btn-outline btn-sm" onclick={on_logout}>{"Sair"}</button>
                </header>
                <main class="flex-grow p-4">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}

use crate::app::SessionContext;
use crate::routes::MainRoute;
use shared::ApiError;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

/// Message shown when the token cannot be turned into a session.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 401, .. } => "Token inválido ou expirado".to_string(),
        ApiError::Status { status, .. } => format!("Falha no login: {status}"),
        ApiError::Decode { .. } => "Resposta inesperada do servidor".to_string(),
        ApiError::Transport { .. } => "Não foi possível conectar ao servidor".to_string(),
    }
}

/// Signs in with an access token issued by the API.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_context::<SessionContext>().map(|SessionContext(session)| session);
    let token = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let token_handle = token.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(session) = session.clone() else {
                error_handle.set(Some("Sessão indisponível".to_string()));
                return;
            };
            let token_value = token_handle.trim().to_string();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match session.api.authenticated_user(&token_value).await {
                    Ok(profile) => {
                        let stored = session
                            .state
                            .token
                            .set(token_value)
                            .and_then(|()| session.state.user.set(profile));
                        match stored {
                            Ok(()) => {
                                if let Some(ref nav) = navigator_handle {
                                    nav.push(&MainRoute::Dashboard);
                                }
                            }
                            Err(err) => error_ref.set(Some(format!("Falha ao salvar a sessão: {err}"))),
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(login_error_message(&err)));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_token_change = {
        let token = token.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                token.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = token.trim().is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Entrar"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="token">
                            <span class="label-text">{"Token de acesso"}</span>
                        </label>
                        <input
                            id="token"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*token).clone()}
                            oninput={on_token_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Entrando..." } else { "Entrar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> ApiError {
        ApiError::Status {
            url: "http://localhost:8000/api/auth/user".to_string(),
            status,
            message: None,
        }
    }

    #[test]
    fn rejected_token_reads_as_invalid() {
        assert_eq!(login_error_message(&status(401)), "Token inválido ou expirado");
        assert_eq!(login_error_message(&status(500)), "Falha no login: 500");
    }

    #[test]
    fn server_message_does_not_change_the_text() {
        let err = ApiError::Status {
            url: "http://localhost:8000/api/auth/user".to_string(),
            status: 401,
            message: Some("Unauthenticated.".to_string()),
        };
        assert_eq!(login_error_message(&err), "Token inválido ou expirado");
    }
}

use shared::endpoints::LOGIN_PAGE;
use shared::format::welcome;
use shared::session::SessionCheck;
use shared::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::utils::navigate;
use crate::api;

/// Username display and logout button. Mounting it runs the session guard:
/// any failure to identify the user sends the browser to the login page.
#[function_component(SessionControls)]
pub fn session_controls() -> Html {
    let user = use_state(|| None::<User>);

    {
        let user = user.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let outcome = api::fetch_user().await.inspect_err(|e| {
                    log::warn!("Session check failed: {}", e);
                });
                let check = SessionCheck::from_outcome(outcome);

                match check.redirect_target() {
                    Some(target) => navigate(target),
                    None => user.set(check.user().cloned()),
                }
            });
        });
    }

    let handle_logout = Callback::from(|_: MouseEvent| {
        spawn_local(async {
            match api::logout().await {
                Ok(()) => navigate(LOGIN_PAGE),
                Err(e) => log::error!("Error logging out: {}", e),
            }
        });
    });

    html! {
        <div class="user-info">
            <span id="username" class="user-name">
                { (*user).as_ref().map(|u| welcome(&u.username)).unwrap_or_default() }
            </span>
            <button
                id="logoutBtn"
                class="logout-button"
                onclick={handle_logout}
                title="Logout"
            >
                <i class="fa-solid fa-sign-out-alt"></i>
                {" Logout"}
            </button>
        </div>
    }
}

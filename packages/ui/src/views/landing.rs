use dioxus::prelude::*;
use store::{tokens, DemoSession, PageState, SessionBackend};

use crate::{use_site_config, Hero, Navbar};

/// Landing page root. Owns the page state and hands values and callbacks to
/// the navbar and hero.
#[component]
pub fn LandingPage() -> Element {
    let config = use_site_config();
    let mut state = use_signal(PageState::new);
    let session = use_hook(|| DemoSession::new(config.demo_user.clone().into()));
    let token_css = use_hook(tokens::stylesheet);

    let page = state();
    let root_class = format!("landing {}", page.theme().root_class());

    let on_sign_in = {
        let session = session.clone();
        move |_: ()| {
            let session = session.clone();
            spawn(async move {
                match session.sign_in().await {
                    Ok(user) => {
                        tracing::info!("Signed in as {}", user.id);
                        state.write().sign_in(user);
                    }
                    Err(e) => tracing::error!("Sign in failed: {}", e),
                }
            });
        }
    };

    // The state is cleared before the backend call so no frame can show a
    // stale dropdown.
    let on_sign_out = move |_: ()| {
        state.write().sign_out();
        let session = session.clone();
        spawn(async move {
            if let Err(e) = session.sign_out().await {
                tracing::error!("Sign out failed: {}", e);
            } else {
                tracing::info!("Signed out");
            }
        });
    };

    rsx! {
        document::Style { "{token_css}" }

        main {
            class: "{root_class}",
            Navbar {
                dark_mode: page.dark_mode,
                user: page.user.clone(),
                user_menu_open: page.user_menu_open(),
                brand: config.brand.clone(),
                on_toggle_dark_mode: move |_| {
                    state.write().toggle_dark_mode();
                    tracing::debug!("Dark mode: {}", state.peek().dark_mode);
                },
                on_toggle_user_menu: move |_| state.write().toggle_user_menu(),
                on_close_user_menu: move |_| state.write().close_user_menu(),
                on_sign_in,
                on_sign_out,
            }
            Hero { dark_mode: page.dark_mode, copy: config.hero.clone() }
        }
    }
}

use dioxus::prelude::*;
use store::{Avatar, BrandConfig, SessionView, Theme, UserRecord};

use crate::icons::{FaMoon, FaRightFromBracket, FaSun, FaUser};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed page header: logo, theme toggle and session controls.
///
/// Holds no state of its own. Theme, session record and dropdown flag come in
/// as props; every click is forwarded to the owner through a callback.
#[component]
pub fn Navbar(
    dark_mode: bool,
    user: Option<UserRecord>,
    user_menu_open: bool,
    brand: BrandConfig,
    on_toggle_dark_mode: EventHandler<()>,
    on_toggle_user_menu: EventHandler<()>,
    on_close_user_menu: EventHandler<()>,
    on_sign_in: EventHandler<()>,
    on_sign_out: EventHandler<()>,
    #[props(default)] class: String,
) -> Element {
    let theme = Theme::from(dark_mode);
    let nav_class = format!(
        "navbar {} {class}",
        theme.pick("navbar--dark", "navbar--light")
    );
    let glow_ocean = theme.pick(
        "navbar-glow navbar-glow--left glow-ocean-dark",
        "navbar-glow navbar-glow--left glow-ocean-light",
    );
    let glow_coral = theme.pick(
        "navbar-glow navbar-glow--right glow-coral-dark",
        "navbar-glow navbar-glow--right glow-coral-light",
    );

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        // Keeps page content clear of the fixed header.
        div { class: "navbar-spacer" }

        nav {
            class: "{nav_class}",

            div {
                class: "navbar-ambient",
                div { class: "noise navbar-noise" }
                div { class: "{glow_ocean}" }
                div { class: "{glow_coral}" }
            }

            div {
                class: "navbar-content",
                a {
                    class: "navbar-logo",
                    href: "{brand.home_href}",
                    span { class: "navbar-logo-text text-gradient animate-gradient-shift", "{brand.name}" }
                    div { class: "navbar-logo-underline bg-gradient-primary" }
                }

                div {
                    class: "navbar-actions",
                    ThemeToggle { dark_mode, on_toggle: on_toggle_dark_mode }

                    {match SessionView::new(user.as_ref(), user_menu_open) {
                        SessionView::SignedIn { user, menu_open } => rsx! {
                            UserMenu {
                                user: user.clone(),
                                open: menu_open,
                                dark_mode,
                                on_toggle: on_toggle_user_menu,
                                on_close: on_close_user_menu,
                                on_sign_out,
                            }
                        },
                        SessionView::SignedOut => rsx! {
                            button {
                                class: "sign-in-button bg-gradient-primary animate-gradient-shift",
                                onclick: move |_| on_sign_in.call(()),
                                "Sign In"
                            }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
fn ThemeToggle(dark_mode: bool, on_toggle: EventHandler<()>) -> Element {
    let theme = Theme::from(dark_mode);
    let class = theme.pick("icon-button icon-button--dark", "icon-button icon-button--light");

    rsx! {
        button {
            class: "{class}",
            aria_label: theme.toggle_label(),
            onclick: move |_| on_toggle.call(()),
            if theme.is_dark() {
                Icon { icon: FaSun, width: 20, height: 20 }
            } else {
                Icon { icon: FaMoon, width: 20, height: 20 }
            }
        }
    }
}

/// Avatar button with the session dropdown.
///
/// While open, a transparent backdrop covers the page; clicking anywhere
/// outside the dropdown lands on it and closes the menu.
#[component]
fn UserMenu(
    user: UserRecord,
    open: bool,
    dark_mode: bool,
    on_toggle: EventHandler<()>,
    on_close: EventHandler<()>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let theme = Theme::from(dark_mode);
    let button_class = theme.pick(
        "user-button user-button--dark",
        "user-button user-button--light",
    );
    let dropdown_class = theme.pick(
        "user-dropdown user-dropdown--dark",
        "user-dropdown user-dropdown--light",
    );
    let item_class = theme.pick(
        "user-dropdown-item user-dropdown-item--dark",
        "user-dropdown-item user-dropdown-item--light",
    );

    rsx! {
        div {
            class: "user-menu",
            button {
                class: "{button_class}",
                aria_haspopup: "menu",
                aria_expanded: "{open}",
                onclick: move |_| on_toggle.call(()),
                div {
                    class: "avatar",
                    div { class: "avatar-glow bg-gradient-primary animate-glow-pulse" }
                    div {
                        class: "avatar-frame",
                        {match user.avatar() {
                            Avatar::Image { src, alt } => rsx! {
                                img { class: "avatar-image", src: "{src}", alt: "{alt}" }
                            },
                            Avatar::Glyph => rsx! {
                                div {
                                    class: "avatar-fallback bg-gradient-primary animate-gradient-shift",
                                    Icon { icon: FaUser, width: 18, height: 18 }
                                }
                            },
                        }}
                    }
                }
                span { class: "user-name", "{user.name}" }
            }

            if open {
                div {
                    class: "user-menu-backdrop",
                    onclick: move |_| on_close.call(()),
                }
                div {
                    class: "{dropdown_class}",
                    role: "menu",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    button {
                        class: "{item_class}",
                        role: "menuitem",
                        onclick: move |_| on_sign_out.call(()),
                        Icon { icon: FaRightFromBracket, width: 20, height: 20 }
                        span { "Sign Out" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct Harness {
        user: Option<UserRecord>,
        open: bool,
    }

    fn harness(props: Harness) -> Element {
        rsx! {
            Navbar {
                dark_mode: false,
                user: props.user,
                user_menu_open: props.open,
                brand: BrandConfig::default(),
                on_toggle_dark_mode: move |_| {},
                on_toggle_user_menu: move |_| {},
                on_close_user_menu: move |_| {},
                on_sign_in: move |_| {},
                on_sign_out: move |_| {},
            }
        }
    }

    fn render(user: Option<UserRecord>, open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(harness, Harness { user, open });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn john() -> UserRecord {
        UserRecord::new("1", "John Doe", "john@example.com")
    }

    #[test]
    fn test_signed_out_renders_only_sign_in() {
        for open in [false, true] {
            let html = render(None, open);
            assert!(html.contains("Sign In"));
            assert!(!html.contains("aria-haspopup"));
            assert!(!html.contains("user-menu-backdrop"));
            assert!(!html.contains("Sign Out"));
        }
    }

    #[test]
    fn test_signed_in_closed_menu() {
        let html = render(Some(john()), false);
        assert!(html.contains("John Doe"));
        assert!(html.contains("avatar-fallback"));
        assert!(!html.contains("Sign In"));
        assert!(!html.contains("Sign Out"));
        assert!(!html.contains("user-menu-backdrop"));
    }

    #[test]
    fn test_signed_in_open_menu_has_backdrop_and_sign_out() {
        let html = render(Some(john().with_image("https://example.com/john.png")), true);
        assert!(html.contains("Sign Out"));
        assert!(html.contains("user-menu-backdrop"));
        assert!(html.contains("https://example.com/john.png"));
        assert!(!html.contains("avatar-fallback"));
    }

    fn rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let start = css
            .find(&format!("\n{selector} {{"))
            .unwrap_or_else(|| panic!("missing rule {selector}"));
        let end = start + css[start..].find('}').unwrap();
        &css[start..end]
    }

    #[test]
    fn test_backdrop_spans_viewport() {
        let css = include_str!("../assets/styling/navbar.css");
        assert!(rule(css, ".user-menu-backdrop").contains("position: fixed"));
        // Ancestors of the backdrop must not become its containing block.
        for ancestor in [".navbar", ".navbar-content", ".navbar-actions", ".user-menu"] {
            let body = rule(css, ancestor);
            for property in ["backdrop-filter", "filter:", "transform", "perspective", "contain"] {
                assert!(
                    !body.contains(property),
                    "{ancestor} declares {property}"
                );
            }
        }
    }
}

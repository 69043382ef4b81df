use dioxus::prelude::*;
use store::{HeroCopy, Stat, StatIcon, Theme, HERO_STATS};

use crate::icons::{FaArrowRight, FaBolt, FaCamera, FaCube, FaPlay};
use crate::Icon;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Landing hero: badge, heading, description, two calls to action and the
/// statistic cards, over three ambient background blobs.
#[component]
pub fn Hero(#[props(default)] dark_mode: bool, copy: HeroCopy) -> Element {
    let theme = Theme::from(dark_mode);
    let section_class = theme.pick("hero hero--dark dark", "hero hero--light");
    let badge_class = theme.pick(
        "hero-badge surface-dark border-ambient-dark text-coral-light",
        "hero-badge surface-light border-ambient-base text-coral-dark",
    );
    let heading_class = theme.pick(
        "hero-heading text-ambient-light",
        "hero-heading text-ambient-deeper",
    );
    let description_class = theme.pick(
        "hero-description text-ambient-base",
        "hero-description text-ambient-dark",
    );
    let secondary_class = theme.pick(
        "cta cta--secondary surface-dark border-ambient-dark text-ambient-light",
        "cta cta--secondary surface-light border-ambient-base text-ambient-deeper",
    );

    rsx! {
        document::Stylesheet { href: HERO_CSS }

        section {
            class: "{section_class}",

            div {
                class: "hero-background",
                div { class: "noise hero-noise" }
                div { class: theme.pick("blob blob--primary bg-ocean-light", "blob blob--primary bg-coral-light") }
                div { class: theme.pick("blob blob--secondary bg-twilight-light", "blob blob--secondary bg-sunrise-light") }
                div { class: theme.pick("blob blob--accent bg-cool-light", "blob blob--accent bg-warm-light") }
                div { class: "hero-mesh bg-gradient-mesh" }
            }

            div {
                class: "hero-content",
                div {
                    class: "hero-inner",

                    div {
                        class: "{badge_class} fade-up",
                        span { "{copy.badge}" }
                    }

                    h1 {
                        class: "{heading_class} fade-up",
                        style: "animation-delay: 0.1s",
                        "{copy.heading} "
                        span { class: "hero-highlight text-gradient animate-gradient-shift", "{copy.highlight}" }
                    }

                    p {
                        class: "{description_class} fade-up",
                        style: "animation-delay: 0.2s",
                        "{copy.description}"
                    }

                    div {
                        class: "hero-ctas fade-up",
                        style: "animation-delay: 0.3s",
                        button {
                            class: "cta cta--primary bg-gradient-primary animate-gradient-shift",
                            span {
                                class: "cta-label",
                                "{copy.primary_cta}"
                                span { class: "cta-arrow", Icon { icon: FaArrowRight, width: 20, height: 20 } }
                            }
                        }
                        button {
                            class: "{secondary_class}",
                            span {
                                class: "cta-label",
                                Icon { icon: FaPlay, width: 20, height: 20 }
                                "{copy.secondary_cta}"
                            }
                        }
                    }

                    div {
                        class: "hero-stats",
                        for (index, stat) in HERO_STATS.iter().enumerate() {
                            StatCard { key: "{stat.id}", stat: *stat, index, dark_mode }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(stat: Stat, index: usize, dark_mode: bool) -> Element {
    let theme = Theme::from(dark_mode);
    let card_class = theme.pick(
        "stat-card surface-dark border-ambient-dark",
        "stat-card surface-light border-ambient-base",
    );
    let icon_class = theme.pick(
        "stat-icon bg-coral-dark text-coral-light",
        "stat-icon bg-coral-light text-coral-dark",
    );
    let value_class = theme.pick("stat-value text-coral-light", "stat-value text-coral-dark");
    let label_class = theme.pick(
        "stat-label text-ambient-base",
        "stat-label text-ambient-dark",
    );
    let delay = Stat::entrance_delay(index);

    rsx! {
        div {
            class: "{card_class} fade-up",
            style: "animation-delay: {delay}s",
            div {
                class: "stat-body",
                div {
                    class: "{icon_class}",
                    {stat_icon(stat.icon)}
                }
                div {
                    h3 { class: "{value_class}", "{stat.value}" }
                    p { class: "{label_class}", "{stat.label}" }
                }
            }
        }
    }
}

fn stat_icon(icon: StatIcon) -> Element {
    match icon {
        StatIcon::Cube => rsx! { Icon { icon: FaCube, width: 28, height: 28 } },
        StatIcon::Bolt => rsx! { Icon { icon: FaBolt, width: 28, height: 28 } },
        StatIcon::Camera => rsx! { Icon { icon: FaCamera, width: 28, height: 28 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct Harness {
        dark_mode: bool,
    }

    fn harness(props: Harness) -> Element {
        rsx! {
            Hero { dark_mode: props.dark_mode, copy: HeroCopy::default() }
        }
    }

    fn render(dark_mode: bool) -> String {
        let mut dom = VirtualDom::new_with_props(harness, Harness { dark_mode });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_stats_render_in_order_in_both_themes() {
        for dark_mode in [false, true] {
            let html = render(dark_mode);
            let mut last = 0;
            for needle in [
                "1M+",
                "Objects Detected",
                "30ms",
                "Processing Speed",
                "98.5%",
                "Accuracy Rate",
            ] {
                let at = html[last..]
                    .find(needle)
                    .unwrap_or_else(|| panic!("{needle} missing or out of order"));
                last += at + needle.len();
            }
        }
    }

    #[test]
    fn test_entrance_animation_keeps_hover_transforms() {
        let css = include_str!("../assets/styling/landing.css");
        let start = css.find("\n.fade-up {").unwrap();
        let end = start + css[start..].find('}').unwrap();
        let fade_up = &css[start..end];
        assert!(fade_up.contains("backwards"));
        assert!(!fade_up.contains("forwards"));
    }
}

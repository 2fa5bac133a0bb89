use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::config;
use crate::navigation::Section;
use crate::theme::{Themed, BRAND_BADGE, BRAND_GRADIENT_TEXT};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarStyle {
    pub bar: &'static str,
    pub link: &'static str,
    pub toggle: &'static str,
    pub menu_button: &'static str,
    pub panel: &'static str,
}

pub static STYLE: Themed<NavbarStyle> = Themed::new(
    NavbarStyle {
        bar: "bg-gray-900/95 border-gray-700",
        link: "text-gray-300",
        toggle: "bg-gray-800 text-yellow-500",
        menu_button: "bg-gray-800 text-white",
        panel: "bg-gray-800",
    },
    NavbarStyle {
        bar: "bg-white/95 border-gray-100",
        link: "text-gray-700",
        toggle: "bg-gray-100 text-gray-700",
        menu_button: "bg-gray-100 text-gray-700",
        panel: "bg-gray-50",
    },
);

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub dark_mode: bool,
    pub toggle_dark_mode: Callback<()>,
    pub is_menu_open: bool,
    pub set_is_menu_open: Callback<bool>,
    pub scroll_to_section: Callback<String>,
}

fn section_links(scroll_to_section: &Callback<String>, class: &Classes) -> Html {
    Section::ALL
        .iter()
        .map(|section| {
            html! {
                <button
                    key={section.id()}
                    onclick={section.link::<MouseEvent>(scroll_to_section)}
                    class={class.clone()}
                >
                    { section.label() }
                </button>
            }
        })
        .collect()
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps {
        dark_mode,
        toggle_dark_mode,
        is_menu_open,
        set_is_menu_open,
        scroll_to_section,
    } = props;
    let style = STYLE.pick(*dark_mode);

    let on_toggle_theme = toggle_dark_mode.reform(|_: MouseEvent| ());
    let on_toggle_menu = {
        let is_menu_open = *is_menu_open;
        set_is_menu_open.reform(move |_: MouseEvent| !is_menu_open)
    };

    let theme_glyph = if *dark_mode { Glyph::Sun } else { Glyph::Moon };
    let menu_glyph = if *is_menu_open { Glyph::X } else { Glyph::Menu };
    let theme_label = if *dark_mode { "Switch to light mode" } else { "Switch to dark mode" };

    html! {
        <nav class={classes!(
            "fixed", "w-full", "z-50", "transition-all", "duration-300",
            "border-b", "backdrop-blur-lg", style.bar
        )}>
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <div class={BRAND_BADGE}>
                        <Icon glyph={Glyph::Heart} class="h-6 w-6 text-white" />
                    </div>
                    <span class={classes!("text-xl", "font-bold", BRAND_GRADIENT_TEXT)}>
                        { config::BRAND_SHORT }
                    </span>
                </div>

                <div class="hidden md:flex items-center space-x-8" data-menu="desktop">
                    { section_links(
                        scroll_to_section,
                        &classes!("font-bold", "hover:text-blue-600", "transition-colors", style.link),
                    ) }
                    <button
                        onclick={on_toggle_theme.clone()}
                        aria-label={theme_label}
                        class={classes!("p-2", "rounded-lg", "transition-all", "hover:scale-110", style.toggle)}
                    >
                        <Icon glyph={theme_glyph} class="h-5 w-5" />
                    </button>
                </div>

                <div class="flex items-center space-x-4 md:hidden">
                    <button
                        onclick={on_toggle_theme}
                        aria-label={theme_label}
                        class={classes!("p-2", "rounded-lg", style.toggle)}
                    >
                        <Icon glyph={theme_glyph} class="h-5 w-5" />
                    </button>
                    <button
                        onclick={on_toggle_menu}
                        aria-label="Toggle menu"
                        aria-expanded={is_menu_open.to_string()}
                        class={classes!("p-2", "rounded-lg", style.menu_button)}
                    >
                        <Icon glyph={menu_glyph} class="h-6 w-6" />
                    </button>
                </div>
            </div>

            if *is_menu_open {
                <div class={classes!("md:hidden", "mt-4", "p-4", "rounded-xl", style.panel)} data-menu="mobile">
                    { section_links(
                        scroll_to_section,
                        &classes!(
                            "font-bold", "block", "w-full", "text-left", "py-2",
                            "hover:text-blue-600", "transition-colors", style.link
                        ),
                    ) }
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{positions, render};
    use std::cell::RefCell;
    use std::rc::Rc;

    const MOBILE_PANEL: &str = r#"data-menu="mobile""#;

    fn props(dark_mode: bool, is_menu_open: bool, scroll_to_section: Callback<String>) -> NavbarProps {
        NavbarProps {
            dark_mode,
            toggle_dark_mode: Callback::noop(),
            is_menu_open,
            set_is_menu_open: Callback::noop(),
            scroll_to_section,
        }
    }

    fn label_tags() -> Vec<String> {
        Section::ALL.iter().map(|s| format!(">{}</button>", s.label())).collect()
    }

    #[tokio::test]
    async fn closed_menu_leaves_no_mobile_panel() {
        let html = render::<Navbar>(props(false, false, Callback::noop())).await;

        assert!(!html.contains(MOBILE_PANEL));
        for tag in label_tags() {
            assert_eq!(html.matches(tag.as_str()).count(), 1, "{tag} in {html}");
        }
    }

    #[tokio::test]
    async fn open_menu_repeats_links_in_order() {
        let html = render::<Navbar>(props(false, true, Callback::noop())).await;

        let panel_start = html.find(MOBILE_PANEL).expect("mobile panel rendered");
        let tags = label_tags();
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();

        let desktop = positions(&html[..panel_start], &tags);
        let mobile = positions(&html[panel_start..], &tags);
        assert!(desktop.windows(2).all(|w| w[0] < w[1]), "desktop order in {html}");
        assert!(mobile.windows(2).all(|w| w[0] < w[1]), "mobile order in {html}");
        assert_eq!(html.matches(">Home</button>").count(), 2);
    }

    #[tokio::test]
    async fn bar_colours_follow_dark_mode() {
        let dark = render::<Navbar>(props(true, false, Callback::noop())).await;
        let light = render::<Navbar>(props(false, false, Callback::noop())).await;

        assert!(dark.contains("bg-gray-900/95 border-gray-700"));
        assert!(!dark.contains("bg-white/95"));
        assert!(light.contains("bg-white/95 border-gray-100"));
        assert!(!light.contains("bg-gray-900/95"));
        assert!(dark.contains(r#"data-glyph="sun""#));
        assert!(light.contains(r#"data-glyph="moon""#));
    }

    #[test]
    fn link_reports_lowercase_id_once() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let scroll_to_section = {
            let calls = calls.clone();
            Callback::from(move |id: String| calls.borrow_mut().push(id))
        };

        for section in Section::ALL {
            section.link::<()>(&scroll_to_section).emit(());
        }

        assert_eq!(*calls.borrow(), ["home", "about", "services", "contact"]);
    }
}

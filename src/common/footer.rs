use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::animation::{Variants, Viewport};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::Motion;
use crate::config;
use crate::theme::{Themed, BRAND_BADGE};

const FADE_UP: Variants = Variants::fade_up(20.0, 0.6).staggered(0.2);

/// The footer stays dark in both themes; only its shade and border change.
pub static STYLE: Themed<&str> = Themed::new("bg-gray-900 border-gray-800", "bg-gray-800 border-gray-200");

pub fn copyright_line(year: i32) -> String {
    format!(
        "© {} Anjem Medicare Solutions. All rights reserved. | Licensed Healthcare Provider",
        year
    )
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub dark_mode: bool,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();
    let viewport = Viewport::once(0.2);

    html! {
        <footer
            class={classes!("py-12", "px-6", "border-t", *STYLE.pick(props.dark_mode))}
            aria-label="Footer"
        >
            <div class="container mx-auto">
                <div class="text-center">
                    <Motion
                        variants={FADE_UP}
                        custom={0}
                        viewport={viewport}
                        class="flex items-center justify-center space-x-3 mb-6"
                    >
                        <div class={BRAND_BADGE} aria-hidden="true">
                            <Icon glyph={Glyph::Heart} class="h-6 w-6 text-white" />
                        </div>
                        <span class="text-2xl font-bold text-white">{ config::BRAND_NAME }</span>
                    </Motion>

                    <Motion
                        tag="p"
                        variants={FADE_UP}
                        custom={1}
                        viewport={viewport}
                        class="text-gray-400 mb-8 max-w-2xl mx-auto"
                    >
                        { "Providing compassionate, professional home healthcare services across Nairobi and surrounding areas. Your health, our priority." }
                    </Motion>

                    <Motion
                        variants={FADE_UP}
                        custom={2}
                        viewport={viewport}
                        class="flex justify-center space-x-6 mb-8"
                    >
                        <a
                            href={config::tel_href(config::PHONE_PRIMARY)}
                            class="text-gray-400 hover:text-white transition-colors"
                            aria-label="Call Anjem Medicare Solutions"
                        >
                            <Icon glyph={Glyph::Phone} class="h-6 w-6" />
                        </a>
                        <a
                            href={config::mailto_href(config::EMAIL)}
                            class="text-gray-400 hover:text-white transition-colors"
                            aria-label="Email Anjem Medicare Solutions"
                        >
                            <Icon glyph={Glyph::Mail} class="h-6 w-6" />
                        </a>
                    </Motion>

                    <Motion
                        variants={FADE_UP}
                        custom={3}
                        viewport={viewport}
                        class="border-t border-gray-700 pt-8"
                    >
                        <p class="text-gray-500 text-sm">{ copyright_line(year) }</p>
                    </Motion>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn copyright_uses_given_year() {
        let line = copyright_line(2025);
        assert!(line.starts_with("© 2025 Anjem Medicare Solutions."));
        assert!(line.ends_with("Licensed Healthcare Provider"));
    }

    #[tokio::test]
    async fn rendered_footer_shows_current_year_and_links() {
        let html = render::<Footer>(FooterProps { dark_mode: true }).await;

        assert!(html.contains(&format!("© {} Anjem Medicare Solutions.", Local::now().year())));
        assert!(html.contains(r#"href="tel:+254703919412""#));
        assert!(html.contains(r#"href="mailto:anjemmedicaresolutions@gmail.com""#));
    }

    #[tokio::test]
    async fn footer_shade_follows_dark_mode() {
        let dark = render::<Footer>(FooterProps { dark_mode: true }).await;
        let light = render::<Footer>(FooterProps { dark_mode: false }).await;

        assert!(dark.contains("py-12 px-6 border-t bg-gray-900 border-gray-800"));
        assert!(light.contains("py-12 px-6 border-t bg-gray-800 border-gray-200"));
    }

    #[test]
    fn fade_up_staggers_by_a_fifth_of_a_second() {
        assert!((FADE_UP.transition_for(3).delay - 0.6).abs() < 1e-9);
    }
}

use yew::prelude::*;

use crate::animation::{Ease, Variants, Viewport};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::Motion;
use crate::navigation::Section;
use crate::theme::{Themed, BRAND_GRADIENT_TEXT, TEXT};

const INTRO_VARIANTS: Variants = Variants::fade_up(30.0, 0.8).staggered(0.15).eased(Some(Ease::EaseInOut));
const STAT_VARIANTS: Variants = Variants::fade_up(20.0, 0.6).delayed(0.6).staggered(0.15);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub section: &'static str,
    pub pill: &'static str,
    pub secondary_button: &'static str,
    pub stat: &'static str,
}

pub static STYLE: Themed<HeroStyle> = Themed::new(
    HeroStyle {
        section: "bg-gradient-to-br from-gray-900 via-gray-900 to-blue-950",
        pill: "bg-blue-900/50 text-blue-300 border-blue-700",
        secondary_button: "border-gray-600 text-gray-200 hover:bg-gray-800",
        stat: "bg-gray-800/80 border-gray-700",
    },
    HeroStyle {
        section: "bg-gradient-to-br from-blue-50 via-white to-purple-50",
        pill: "bg-blue-100 text-blue-800 border-blue-200",
        secondary_button: "border-gray-300 text-gray-700 hover:bg-gray-100",
        stat: "bg-white/80 border-gray-100",
    },
);

struct Stat {
    glyph: Glyph,
    value: &'static str,
    caption: &'static str,
}

static STATS: [Stat; 3] = [
    Stat { glyph: Glyph::Clock, value: "24/7", caption: "Emergency support" },
    Stat { glyph: Glyph::Users, value: "Certified", caption: "Healthcare providers" },
    Stat { glyph: Glyph::Home, value: "Nairobi", caption: "And surrounding areas" },
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub dark_mode: bool,
    pub scroll_to_section: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let style = STYLE.pick(props.dark_mode);
    let text = TEXT.pick(props.dark_mode);
    let viewport = Viewport::default();

    let stats = STATS.iter().enumerate().map(|(i, stat)| {
        html! {
            <Motion
                key={stat.value}
                variants={STAT_VARIANTS}
                custom={i as u32}
                viewport={viewport}
                class={classes!("p-5", "rounded-2xl", "border", "backdrop-blur", style.stat)}
            >
                <Icon glyph={stat.glyph} class="h-6 w-6 text-blue-600 mb-3" />
                <p class={classes!("text-2xl", "font-bold", text.heading)}>{ stat.value }</p>
                <p class={classes!("text-sm", text.body)}>{ stat.caption }</p>
            </Motion>
        }
    });

    html! {
        <section
            id="home"
            aria-labelledby="home-title"
            class={classes!("pt-32", "pb-20", "px-6", "min-h-screen", "flex", "items-center", style.section)}
        >
            <div class="container mx-auto text-center">
                <Motion variants={INTRO_VARIANTS} custom={0} viewport={viewport} class="mb-6">
                    <span class={classes!("inline-flex", "items-center", "px-4", "py-2", "rounded-full", "border", "text-sm", "font-medium", style.pill)}>
                        <Icon glyph={Glyph::Stethoscope} class="h-4 w-4 mr-2" />
                        { "Professional home healthcare" }
                    </span>
                </Motion>

                <Motion
                    tag="h1"
                    id="home-title"
                    variants={INTRO_VARIANTS}
                    custom={1}
                    viewport={viewport}
                    class={classes!("text-5xl", "lg:text-6xl", "font-bold", "mb-6", text.heading)}
                >
                    { "Quality Care in the " }
                    <span class={BRAND_GRADIENT_TEXT}>{ "Comfort of Home" }</span>
                </Motion>

                <Motion
                    tag="p"
                    variants={INTRO_VARIANTS}
                    custom={2}
                    viewport={viewport}
                    class={classes!("text-xl", "max-w-3xl", "mx-auto", "mb-10", text.body)}
                >
                    { "Compassionate, professional home healthcare across Nairobi and surrounding areas, delivered with dignity and respect." }
                </Motion>

                <Motion
                    variants={INTRO_VARIANTS}
                    custom={3}
                    viewport={viewport}
                    class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16"
                >
                    <button
                        onclick={Section::Contact.link::<MouseEvent>(&props.scroll_to_section)}
                        class="inline-flex items-center px-8 py-4 rounded-xl font-semibold text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:scale-105 transition-all shadow-lg"
                    >
                        { "Book a Visit" }
                        <Icon glyph={Glyph::ArrowRight} class="h-5 w-5 ml-2" />
                    </button>
                    <button
                        onclick={Section::Services.link::<MouseEvent>(&props.scroll_to_section)}
                        class={classes!("px-8", "py-4", "rounded-xl", "font-semibold", "border", "transition-colors", style.secondary_button)}
                    >
                        { "Our Services" }
                    </button>
                </Motion>

                <div class="grid sm:grid-cols-3 gap-6 max-w-4xl mx-auto">
                    { for stats }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_follow_the_intro() {
        assert!((STAT_VARIANTS.transition_for(0).delay - 0.6).abs() < 1e-9);
        assert!((STAT_VARIANTS.transition_for(2).delay - 0.9).abs() < 1e-9);
    }

    #[test]
    fn themes_differ_only_in_colour() {
        assert!(STYLE.pick(true).section.contains("gray-900"));
        assert!(STYLE.pick(false).section.contains("blue-50"));
    }
}

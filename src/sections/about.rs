use yew::prelude::*;

use crate::animation::{Variants, Viewport};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::Motion;
use crate::theme::{Themed, BRAND_GRADIENT_TEXT, TEXT};

const TEXT_VARIANTS: Variants = Variants::fade_up(40.0, 0.6);
const CARD_VARIANTS: Variants = Variants::fade_up(40.0, 0.6).staggered(0.2);

pub static SECTION: Themed<&str> = Themed::new("bg-gray-900", "bg-white");

struct FeatureCard {
    glyph: Glyph,
    glyph_class: &'static str,
    title: &'static str,
    description: &'static str,
    classes: Themed<&'static str>,
}

static FEATURES: [FeatureCard; 2] = [
    FeatureCard {
        glyph: Glyph::Users,
        glyph_class: "text-blue-600",
        title: "Licensed Professionals",
        description: "Certified healthcare providers with years of experience",
        classes: Themed::new("bg-gray-800 border-gray-700", "bg-blue-50 border-blue-100"),
    },
    FeatureCard {
        glyph: Glyph::Clock,
        glyph_class: "text-purple-600",
        title: "24/7 Availability",
        description: "Round-the-clock support when you need it most",
        classes: Themed::new("bg-gray-800 border-gray-700", "bg-purple-50 border-purple-100"),
    },
];

struct ValueCard {
    glyph: Glyph,
    glyph_class: Themed<&'static str>,
    title: &'static str,
    classes: Themed<&'static str>,
    /// Vertical nudge that staggers the grid.
    offset: &'static str,
}

static VALUES: [ValueCard; 4] = [
    ValueCard {
        glyph: Glyph::Heart,
        glyph_class: Themed::new("text-blue-300", "text-blue-600"),
        title: "Compassionate Care",
        classes: Themed::new(
            "bg-gradient-to-br from-blue-900 to-purple-900 border-blue-700",
            "bg-gradient-to-br from-blue-100 to-purple-100 border-blue-200",
        ),
        offset: "",
    },
    ValueCard {
        glyph: Glyph::Shield,
        glyph_class: Themed::new("text-green-300", "text-green-600"),
        title: "Safety First",
        classes: Themed::new(
            "bg-gradient-to-br from-green-900 to-teal-900 border-green-700",
            "bg-gradient-to-br from-green-100 to-teal-100 border-green-200",
        ),
        offset: "mt-8",
    },
    ValueCard {
        glyph: Glyph::Users,
        glyph_class: Themed::new("text-purple-300", "text-purple-600"),
        title: "Family Focused",
        classes: Themed::new(
            "bg-gradient-to-br from-purple-900 to-pink-900 border-purple-700",
            "bg-gradient-to-br from-purple-100 to-pink-100 border-purple-200",
        ),
        offset: "-mt-4",
    },
    ValueCard {
        glyph: Glyph::Star,
        glyph_class: Themed::new("text-orange-300", "text-orange-600"),
        title: "Quality Assured",
        classes: Themed::new(
            "bg-gradient-to-br from-orange-900 to-red-900 border-orange-700",
            "bg-gradient-to-br from-orange-100 to-red-100 border-orange-200",
        ),
        offset: "mt-4",
    },
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub dark_mode: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let dark_mode = props.dark_mode;
    let text = TEXT.pick(dark_mode);
    let cards_viewport = Viewport::once(0.2);

    let features = FEATURES.iter().enumerate().map(|(i, card)| {
        html! {
            <Motion
                key={card.title}
                variants={CARD_VARIANTS}
                custom={i as u32}
                viewport={cards_viewport}
                class={classes!("p-6", "rounded-xl", "border", *card.classes.pick(dark_mode))}
            >
                <Icon glyph={card.glyph} class={classes!("h-8", "w-8", "mb-4", card.glyph_class)} />
                <h3 class={classes!("font-semibold", "mb-2", text.heading)}>{ card.title }</h3>
                <p class={classes!("text-sm", text.body)}>{ card.description }</p>
            </Motion>
        }
    });

    let values = VALUES.iter().enumerate().map(|(i, card)| {
        html! {
            <Motion
                key={card.title}
                variants={CARD_VARIANTS}
                custom={i as u32}
                viewport={cards_viewport}
                class={classes!("p-6", "rounded-2xl", "border", *card.classes.pick(dark_mode), card.offset)}
            >
                <Icon
                    glyph={card.glyph}
                    class={classes!("h-8", "w-8", "mb-4", *card.glyph_class.pick(dark_mode))}
                />
                <h4 class={classes!("font-semibold", text.heading)}>{ card.title }</h4>
            </Motion>
        }
    });

    html! {
        <section
            id="about"
            aria-labelledby="about-title"
            class={classes!("py-20", "px-6", *SECTION.pick(dark_mode))}
        >
            <div class="container mx-auto">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <Motion variants={TEXT_VARIANTS} viewport={Viewport::once(0.3)} class="space-y-6">
                            <h2 id="about-title" class={classes!("text-4xl", "lg:text-5xl", "font-bold", text.heading)}>
                                { "Why Choose " }
                                <span class={BRAND_GRADIENT_TEXT}>{ "Anjem Medicare?" }</span>
                            </h2>
                            <p class={classes!("text-xl", "leading-relaxed", text.body)}>
                                { "We believe that quality healthcare should be accessible in the comfort of your own home. Our dedicated team of professionals provides personalized care with compassion, dignity, and respect." }
                            </p>
                        </Motion>

                        <div class="grid sm:grid-cols-2 gap-6">
                            { for features }
                        </div>
                    </div>

                    <div class="relative">
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                            { for values }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn cards_stagger_by_point_two_seconds() {
        for i in 0..VALUES.len() as u32 {
            let delay = CARD_VARIANTS.transition_for(i).delay;
            assert!((delay - f64::from(i) * 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn value_grid_alternates_offsets() {
        let offsets: Vec<&str> = VALUES.iter().map(|c| c.offset).collect();
        assert_eq!(offsets, ["", "mt-8", "-mt-4", "mt-4"]);
    }

    #[test]
    fn feature_cards_share_dark_surface() {
        for card in FEATURES.iter() {
            assert_eq!(*card.classes.pick(true), "bg-gray-800 border-gray-700");
        }
        assert_eq!(*SECTION.pick(false), "bg-white");
    }

    #[tokio::test]
    async fn section_background_follows_dark_mode() {
        let dark = render::<About>(AboutProps { dark_mode: true }).await;
        let light = render::<About>(AboutProps { dark_mode: false }).await;

        assert!(dark.contains(r#"class="py-20 px-6 bg-gray-900""#));
        assert!(light.contains(r#"class="py-20 px-6 bg-white""#));
        assert!(!light.contains("bg-gray-800 border-gray-700"));
    }

    #[tokio::test]
    async fn cards_render_hidden_before_observed() {
        let html = render::<About>(AboutProps { dark_mode: false }).await;
        assert!(html.contains("opacity: 0; transform: translateY(40px);"));
        assert!(!html.contains("opacity: 1;"));
    }
}

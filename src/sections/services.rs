use yew::prelude::*;

use crate::animation::{Variants, Viewport};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::Motion;
use crate::theme::{Themed, BRAND_GRADIENT_TEXT, TEXT};

const HEADING_VARIANTS: Variants = Variants::fade_up(40.0, 0.6);
const CARD_VARIANTS: Variants = Variants::fade_up(40.0, 0.6).staggered(0.15);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServicesStyle {
    pub section: &'static str,
    pub card: &'static str,
}

pub static STYLE: Themed<ServicesStyle> = Themed::new(
    ServicesStyle { section: "bg-gray-800", card: "bg-gray-900 border-gray-700" },
    ServicesStyle { section: "bg-gray-50", card: "bg-white border-gray-100" },
);

struct Service {
    glyph: Glyph,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

static SERVICES: [Service; 4] = [
    Service {
        glyph: Glyph::Stethoscope,
        title: "Home Healthcare",
        description: "Professional care delivered in the comfort of your own home.",
        gradient: "from-blue-500 to-cyan-500",
    },
    Service {
        glyph: Glyph::Users,
        title: "Certified Professionals",
        description: "Care from certified healthcare providers with years of experience.",
        gradient: "from-purple-500 to-pink-500",
    },
    Service {
        glyph: Glyph::Heart,
        title: "Family-Focused Care",
        description: "Personalized care shaped around each patient and their family.",
        gradient: "from-green-500 to-teal-500",
    },
    Service {
        glyph: Glyph::Clock,
        title: "Emergency Support",
        description: "Round-the-clock support, available 24/7 when you need it most.",
        gradient: "from-orange-500 to-red-500",
    },
];

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub dark_mode: bool,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let style = STYLE.pick(props.dark_mode);
    let text = TEXT.pick(props.dark_mode);
    let viewport = Viewport::default();

    let cards = SERVICES.iter().enumerate().map(|(i, service)| {
        html! {
            <Motion
                key={service.title}
                variants={CARD_VARIANTS}
                custom={i as u32}
                viewport={viewport}
                class={classes!("p-8", "rounded-2xl", "border", "shadow-lg", "transition-all", "hover:-translate-y-1", style.card)}
            >
                <div class={classes!(
                    "w-14", "h-14", "rounded-xl", "bg-gradient-to-r", service.gradient,
                    "flex", "items-center", "justify-center", "mb-6"
                )}>
                    <Icon glyph={service.glyph} class="h-7 w-7 text-white" />
                </div>
                <h3 class={classes!("text-xl", "font-semibold", "mb-3", text.heading)}>{ service.title }</h3>
                <p class={classes!("leading-relaxed", text.body)}>{ service.description }</p>
            </Motion>
        }
    });

    html! {
        <section
            id="services"
            aria-labelledby="services-title"
            class={classes!("py-20", "px-6", style.section)}
        >
            <div class="container mx-auto">
                <Motion variants={HEADING_VARIANTS} viewport={viewport} class="text-center mb-16">
                    <h2 id="services-title" class={classes!("text-4xl", "lg:text-5xl", "font-bold", "mb-6", text.heading)}>
                        { "Our " }
                        <span class={BRAND_GRADIENT_TEXT}>{ "Services" }</span>
                    </h2>
                    <p class={classes!("text-xl", "max-w-3xl", "mx-auto", text.body)}>
                        { "Quality healthcare, accessible at home and tailored to each patient and family." }
                    </p>
                </Motion>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for cards }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_have_distinct_titles() {
        let mut titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SERVICES.len());
    }

    #[test]
    fn last_card_waits_longest() {
        let last = CARD_VARIANTS.transition_for(SERVICES.len() as u32 - 1).delay;
        assert!((last - 0.45).abs() < 1e-9);
    }
}

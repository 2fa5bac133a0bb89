use yew::prelude::*;

use crate::animation::{Variants, Viewport};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::Motion;
use crate::config;
use crate::theme::{Themed, BRAND_GRADIENT_TEXT, TEXT};

const HEADING_VARIANTS: Variants = Variants::fade_up(40.0, 0.7);
const PARAGRAPH_VARIANTS: Variants = Variants::fade_up(20.0, 0.7).delayed(0.2);
const CARD_VARIANTS: Variants = Variants::fade_up(20.0, 0.6).scaled_from(0.9).staggered(0.2);
const BADGE_VARIANTS: Variants = Variants::fade_up(0.0, 0.6).scaled_from(0.95).delayed(0.8).eased(None);

/// Reveal as soon as any part of the element shows up.
const VIEWPORT: Viewport = Viewport::once(0.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactStyle {
    pub section: &'static str,
    pub card: &'static str,
    pub badge: &'static str,
}

pub static STYLE: Themed<ContactStyle> = Themed::new(
    ContactStyle {
        section: "bg-gradient-to-br from-gray-800 to-gray-900",
        card: "bg-gray-800 border-gray-700",
        badge: "bg-blue-900/50 text-blue-300 border-blue-700",
    },
    ContactStyle {
        section: "bg-gradient-to-br from-blue-50 to-purple-50",
        card: "bg-white border-gray-100",
        badge: "bg-blue-100 text-blue-800 border-blue-200",
    },
);

enum Detail {
    /// Dial numbers paired with how they are displayed.
    Phones(&'static [(&'static str, &'static str)]),
    Email(&'static str),
    Address(&'static str),
}

struct ContactCard {
    glyph: Glyph,
    title: &'static str,
    description: &'static str,
    detail: Detail,
    gradient: &'static str,
}

static CARDS: [ContactCard; 3] = [
    ContactCard {
        glyph: Glyph::Phone,
        title: "Call Us",
        description: "Available 24/7 for emergencies",
        detail: Detail::Phones(&[
            (config::PHONE_PRIMARY, config::PHONE_PRIMARY_DISPLAY),
            (config::PHONE_SECONDARY, config::PHONE_SECONDARY_DISPLAY),
        ]),
        gradient: "from-blue-500 to-cyan-500",
    },
    ContactCard {
        glyph: Glyph::Mail,
        title: "Email Us",
        description: "Get a detailed response within 24 hours",
        detail: Detail::Email(config::EMAIL),
        gradient: "from-purple-500 to-pink-500",
    },
    ContactCard {
        glyph: Glyph::MapPin,
        title: "Visit Us",
        description: "Our office is open Monday - Friday",
        detail: Detail::Address(config::LOCATION),
        gradient: "from-green-500 to-teal-500",
    },
];

fn render_detail(detail: &Detail, separator_class: &'static str) -> Html {
    match detail {
        Detail::Phones(numbers) => {
            let links = numbers.iter().enumerate().map(|(i, (number, display))| {
                html! {
                    <>
                        if i > 0 {
                            <span class={separator_class}>{ " / " }</span>
                        }
                        <a
                            href={config::tel_href(number)}
                            class="text-blue-600 font-semibold hover:text-blue-700 transition-colors"
                        >
                            { *display }
                        </a>
                    </>
                }
            });
            html! { <>{ for links }</> }
        }
        Detail::Email(address) => html! {
            <a
                href={config::mailto_href(address)}
                class="text-purple-600 font-semibold hover:text-purple-700 transition-colors"
            >
                { *address }
            </a>
        },
        Detail::Address(place) => html! {
            <p class="text-green-600 font-semibold">{ *place }</p>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub dark_mode: bool,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let style = STYLE.pick(props.dark_mode);
    let text = TEXT.pick(props.dark_mode);

    let cards = CARDS.iter().enumerate().map(|(i, card)| {
        html! {
            <Motion
                key={card.title}
                custom={i as u32}
                variants={CARD_VARIANTS}
                viewport={VIEWPORT}
                class={classes!(
                    "p-8", "rounded-2xl", "text-center", "transition-all", "hover:scale-105",
                    "border", "shadow-lg", style.card
                )}
            >
                <div class={classes!(
                    "w-16", "h-16", "bg-gradient-to-r", card.gradient, "rounded-full",
                    "flex", "items-center", "justify-center", "mx-auto", "mb-6"
                )}>
                    <Icon glyph={card.glyph} class="h-8 w-8 text-white" />
                </div>
                <h3 class={classes!("text-xl", "font-semibold", "mb-4", text.heading)}>{ card.title }</h3>
                <p class={classes!("mb-4", text.body)}>{ card.description }</p>
                { render_detail(&card.detail, text.body) }
            </Motion>
        }
    });

    html! {
        <section
            id="contact"
            aria-labelledby="contact-heading"
            class={classes!("py-20", "px-6", style.section)}
        >
            <div class="container mx-auto">
                <div class="text-center mb-16">
                    <Motion
                        tag="h2"
                        id="contact-heading"
                        variants={HEADING_VARIANTS}
                        viewport={VIEWPORT}
                        class={classes!("text-4xl", "lg:text-5xl", "font-bold", "mb-6", text.heading)}
                    >
                        { "Get In " }
                        <span class={BRAND_GRADIENT_TEXT}>{ "Touch" }</span>
                    </Motion>

                    <Motion
                        tag="p"
                        variants={PARAGRAPH_VARIANTS}
                        viewport={VIEWPORT}
                        class={classes!("text-xl", "max-w-3xl", "mx-auto", text.body)}
                    >
                        { "Ready to provide the care your family deserves. Contact us today for a free consultation." }
                    </Motion>
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    { for cards }
                </div>

                <div class="mt-16 text-center">
                    <Motion
                        variants={BADGE_VARIANTS}
                        viewport={VIEWPORT}
                        class={classes!("inline-flex", "items-center", "px-6", "py-3", "rounded-full", "border", style.badge)}
                    >
                        <Icon glyph={Glyph::Clock} class="h-5 w-5 mr-2" />
                        <span class="font-medium">{ "Emergency Support Available 24/7" }</span>
                    </Motion>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Presence;
    use crate::testing::render;

    #[test]
    fn phone_card_lists_both_numbers() {
        let Detail::Phones(numbers) = &CARDS[0].detail else {
            panic!("first card should list phone numbers");
        };
        let hrefs: Vec<String> = numbers.iter().map(|(n, _)| config::tel_href(n)).collect();
        assert_eq!(hrefs, ["tel:+254703919412", "tel:+254724551516"]);
    }

    #[test]
    fn email_card_links_the_inbox() {
        let Detail::Email(address) = &CARDS[1].detail else {
            panic!("second card should be the email card");
        };
        assert_eq!(config::mailto_href(address), "mailto:anjemmedicaresolutions@gmail.com");
    }

    #[test]
    fn cards_start_shrunk_and_stagger() {
        assert!(CARD_VARIANTS.style(Presence::Hidden, 0).contains("scale(0.9)"));
        assert!((CARD_VARIANTS.transition_for(2).delay - 0.4).abs() < 1e-9);
    }

    #[test]
    fn badge_waits_for_the_cards() {
        assert!((BADGE_VARIANTS.transition_for(0).delay - 0.8).abs() < 1e-9);
        assert_eq!(BADGE_VARIANTS.transition.ease, None);
    }

    #[test]
    fn themes_swap_card_surfaces() {
        assert_eq!(STYLE.pick(true).card, "bg-gray-800 border-gray-700");
        assert_eq!(STYLE.pick(false).card, "bg-white border-gray-100");
    }

    #[tokio::test]
    async fn section_gradient_follows_dark_mode() {
        let dark = render::<Contact>(ContactProps { dark_mode: true }).await;
        let light = render::<Contact>(ContactProps { dark_mode: false }).await;

        assert!(dark.contains("from-gray-800 to-gray-900"));
        assert!(!dark.contains("from-blue-50 to-purple-50"));
        assert!(light.contains("from-blue-50 to-purple-50"));
        assert!(!light.contains("bg-gray-800 border-gray-700"));
    }

    #[tokio::test]
    async fn rendered_links_keep_literal_endpoints() {
        let html = render::<Contact>(ContactProps { dark_mode: false }).await;

        assert!(html.contains(r#"href="tel:+254703919412""#));
        assert!(html.contains(r#"href="tel:+254724551516""#));
        assert!(html.contains(r#"href="mailto:anjemmedicaresolutions@gmail.com""#));
    }
}

use yew::prelude::*;

/// Outline glyphs drawn on a 24x24 grid with a 2px round stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ArrowRight,
    Clock,
    Heart,
    Home,
    Mail,
    MapPin,
    Menu,
    Moon,
    Phone,
    Shield,
    Star,
    Stethoscope,
    Sun,
    Users,
    X,
}

enum Shape {
    Path(&'static str),
    Circle(u8, u8, u8),
    Rect { x: u8, y: u8, width: u8, height: u8, rx: u8 },
    Polyline(&'static str),
    Polygon(&'static str),
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::ArrowRight => "arrow-right",
            Glyph::Clock => "clock",
            Glyph::Heart => "heart",
            Glyph::Home => "home",
            Glyph::Mail => "mail",
            Glyph::MapPin => "map-pin",
            Glyph::Menu => "menu",
            Glyph::Moon => "moon",
            Glyph::Phone => "phone",
            Glyph::Shield => "shield",
            Glyph::Star => "star",
            Glyph::Stethoscope => "stethoscope",
            Glyph::Sun => "sun",
            Glyph::Users => "users",
            Glyph::X => "x",
        }
    }

    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Glyph::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Glyph::Clock => &[Circle(12, 12, 10), Polyline("12 6 12 12 16 14")],
            Glyph::Heart => &[Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
            Glyph::Home => &[
                Path("m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
                Polyline("9 22 9 12 15 12 15 22"),
            ],
            Glyph::Mail => &[
                Rect { x: 2, y: 4, width: 20, height: 16, rx: 2 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Glyph::MapPin => &[
                Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
                Circle(12, 10, 3),
            ],
            Glyph::Menu => &[Path("M4 12h16"), Path("M4 6h16"), Path("M4 18h16")],
            Glyph::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
            Glyph::Phone => &[Path(
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            )],
            Glyph::Shield => &[Path(
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            )],
            Glyph::Star => &[Polygon(
                "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
            )],
            Glyph::Stethoscope => &[
                Path("M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6v0a6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3"),
                Path("M8 15v1a6 6 0 0 0 6 6v0a6 6 0 0 0 6-6v-4"),
                Circle(20, 10, 2),
            ],
            Glyph::Sun => &[
                Circle(12, 12, 4),
                Path("M12 2v2"),
                Path("M12 20v2"),
                Path("m4.93 4.93 1.41 1.41"),
                Path("m17.66 17.66 1.41 1.41"),
                Path("M2 12h2"),
                Path("M20 12h2"),
                Path("m6.34 17.66-1.41 1.41"),
                Path("m19.07 4.93-1.41 1.41"),
            ],
            Glyph::Users => &[
                Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Circle(9, 7, 4),
                Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Glyph::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Circle(cx, cy, r) => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Rect { x, y, width, height, rx } => html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx={rx.to_string()}
            />
        },
        Shape::Polyline(points) => html! { <polyline points={points} /> },
        Shape::Polygon(points) => html! { <polygon points={points} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative icon; always hidden from assistive technology.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-glyph={props.glyph.name()}
            class={props.class.clone()}
        >
            { for props.glyph.shapes().iter().map(render_shape) }
        </svg>
    }
}

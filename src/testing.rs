use yew::html::BaseComponent;
use yew::LocalServerRenderer;

/// Renders a component to plain HTML without hydration markers.
pub async fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    LocalServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// Index of each needle in `haystack`, panicking on the first one missing.
pub fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle)
                .unwrap_or_else(|| panic!("{needle:?} not found in {haystack}"))
        })
        .collect()
}

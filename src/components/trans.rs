use crate::i18n::{Segment, use_i18n};
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Wraps the rendered children of a template placeholder.
pub type InlineWrapper = Arc<dyn Fn(AnyView) -> AnyView + Send + Sync>;

/// Renders a catalog message, handing each `<name>…</name>` placeholder to the
/// matching wrapper in `components`. Placeholders without a wrapper render
/// their children unchanged.
#[component]
pub fn Trans(
    #[prop(into)] ns: String,
    #[prop(into)] i18n_key: String,
    #[prop(optional)] components: Vec<(&'static str, InlineWrapper)>,
) -> impl IntoView {
    let catalog = use_i18n();
    let components: HashMap<&'static str, InlineWrapper> = components.into_iter().collect();
    render_segments(catalog.resolve(&ns, &i18n_key), &components)
}

fn render_segments(
    segments: Vec<Segment>,
    components: &HashMap<&'static str, InlineWrapper>,
) -> AnyView {
    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.into_any(),
            Segment::Inline { name, children } => {
                let inner = render_segments(children, components);
                match components.get(name.as_str()) {
                    Some(wrap) => wrap(inner),
                    None => inner,
                }
            }
        })
        .collect_view()
        .into_any()
}

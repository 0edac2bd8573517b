use crate::i18n::{HEADER_NS, use_i18n};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

pub fn search_url(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query))
}

#[component]
pub fn Search(
    #[prop(optional)] auto_focus: bool,
    #[prop(optional)] is_mobile: bool,
) -> impl IntoView {
    let catalog = use_i18n();
    let placeholder = catalog.text(HEADER_NS, "search.placeholder");
    let submit_label = catalog.text(HEADER_NS, "search.submit");
    let (query, set_query) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked().trim().to_string();
        if q.is_empty() {
            return;
        }
        tracing::debug!(query = %q, is_mobile, "submitting search");
        navigate(&search_url(&q), Default::default());
    };

    if auto_focus {
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        });
    }

    let form_class = if is_mobile {
        "flex w-full max-w-md"
    } else {
        "flex w-full max-w-sm"
    };

    view! {
        <form role="search" class=form_class data-mobile=is_mobile.to_string() on:submit=on_submit>
            <input
                node_ref=input_ref
                type="search"
                class="flex-1 h-9 px-3 rounded-l-md border border-slate-300 dark:border-slate-700 bg-white dark:bg-slate-900 text-sm text-slate-900 dark:text-slate-100 focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder=placeholder
                autofocus=auto_focus
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="h-9 px-3 rounded-r-md bg-blue-600 hover:bg-blue-700 text-white text-sm"
            >
                {submit_label}
            </button>
        </form>
    }
}

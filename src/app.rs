use crate::components::{MainHeader, use_header_height};
use crate::i18n::{Catalog, provide_i18n};
use crate::pages::{HomePage, SearchPage};
use crate::theme::{Theme, provide_theme};
use crate::viewport::provide_viewport;
use leptos::prelude::*;
use leptos_darkmode::Darkmode;
use leptos_meta::{Html, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_query_map;
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/output.css" />
                <link rel="shortcut icon" type="image/svg+xml" href="/logo.svg" />
                <Title formatter=|text| format!("{} - Dashboard", text) text="Home" />
            </head>

            <body class="bg-white dark:bg-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let darkmode = Darkmode::init();
    provide_theme(Theme::builtin());
    provide_viewport();
    provide_i18n(Catalog::builtin());
    view! {
        <Html class:dark=move || darkmode.is_dark() />
        <Router>
            <DashboardLayout />
        </Router>
    }
}

/// `?experimental=1` (or `true`/`yes`) turns on the experimental banner.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[component]
fn DashboardLayout() -> impl IntoView {
    let query = use_query_map();
    let show_experimental = Signal::derive(move || {
        query
            .read()
            .get("experimental")
            .is_some_and(|value| is_truthy(&value))
    });
    let header_height = use_header_height(show_experimental);

    let preview_toggle = move || {
        let (href, label) = if show_experimental.get() {
            ("?experimental=0", "Hide preview")
        } else {
            ("?experimental=1", "Preview")
        };
        view! {
            <a href=href class="btn btn-ghost btn-sm whitespace-nowrap">
                {label}
            </a>
        }
    };

    view! {
        <MainHeader show_experimental=show_experimental header_actions=preview_toggle />
        <div
            class="flex flex-col min-h-screen"
            style=move || format!("padding-top: {}px", header_height.get())
        >
            <Routes fallback=|| "Page not found".into_view()>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/search") view=SearchPage />
            </Routes>
        </div>
    }
}

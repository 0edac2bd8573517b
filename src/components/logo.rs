use leptos::prelude::*;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <span class="flex items-center gap-2">
            <img class="w-9" src="/logo.svg" alt="Logo" />
            <span class="text-xl font-semibold whitespace-nowrap text-slate-900 dark:text-white">
                Dashboard
            </span>
        </span>
    }
}

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <main class="flex-grow flex flex-col items-center justify-start pt-8 p-4">
            <div class="max-w-4xl w-full">
                <h1 class="text-3xl font-bold text-center mb-6 text-gray-800 dark:text-gray-200">
                    Dashboard
                </h1>
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-8 border border-gray-200 dark:border-gray-700 text-center">
                    <p class="text-xl text-gray-600 dark:text-gray-400">
                        "Resize the window to see the header switch layouts."
                    </p>
                </div>
            </div>
        </main>
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let term = move || query.read().get("q").unwrap_or_default();

    view! {
        <Title text="Search" />
        <main class="flex-grow flex flex-col items-center justify-start pt-8 p-4">
            <div class="max-w-4xl w-full">
                <h1 class="text-2xl font-semibold mb-4 text-gray-800 dark:text-gray-200">
                    "Results for \"" {term} "\""
                </h1>
                <p class="text-gray-600 dark:text-gray-400">"No results."</p>
            </div>
        </main>
    }
}

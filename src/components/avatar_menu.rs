use crate::i18n::{HEADER_NS, use_i18n};
use leptos::prelude::*;
use leptos::tachys::dom::event_target_checked;
use leptos_darkmode::Darkmode;

#[component]
pub fn AvatarMenu() -> impl IntoView {
    let mut darkmode = use_context::<Darkmode>();
    let dark_mode_label = use_i18n().text(HEADER_NS, "avatarMenu.darkMode");

    view! {
        <div class="flex-none text-slate-600 dark:text-white">
            <details class="dropdown dropdown-end">
                <summary class="btn btn-ghost btn-circle">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 24 24"
                        class="h-6 w-6 stroke-current"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M12 21a9 9 0 1 0 0 -18a9 9 0 0 0 0 18z"
                        />
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M12 13a3 3 0 1 0 0 -6a3 3 0 0 0 0 6z"
                        />
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M6.168 18.849a4 4 0 0 1 3.832 -2.849h4a4 4 0 0 1 3.834 2.855"
                        />
                    </svg>
                </summary>
                <ul class="mt-3 p-2 shadow menu menu-sm dropdown-content rounded-box w-56 z-50 bg-white/95 dark:bg-slate-900 border border-slate-200 dark:border-slate-800 text-slate-900 dark:text-slate-100">
                    <li>
                        <div class="p-2">
                            <label class="cursor-pointer label">
                                <span class="label-text text-slate-700 dark:text-slate-200">
                                    {dark_mode_label}
                                </span>
                                <input
                                    type="checkbox"
                                    class="toggle toggle-primary"
                                    prop:checked={
                                        let darkmode = darkmode.clone();
                                        move || darkmode.clone().map(|v| v.get()).unwrap_or_default()
                                    }
                                    on:change=move |ev| {
                                        let val = event_target_checked(&ev);
                                        if let Some(darkmode) = darkmode.as_mut() {
                                            darkmode.set(val);
                                        }
                                    }
                                />
                            </label>
                        </div>
                    </li>
                </ul>
            </details>
        </div>
    }
}

use crate::components::avatar_menu::AvatarMenu;
use crate::components::header_note::HeaderNote;
use crate::components::logo::Logo;
use crate::components::search::Search;
use crate::layout::{
    BannerSpec, HeaderConfiguration, HeaderDimensions, HeaderTree, SearchProps, Slot,
    ViewportClass, header_height, plan,
};
use crate::theme::use_theme;
use crate::viewport::use_viewport;
use leptos::prelude::*;

/// Top navigation bar.
///
/// The logo, caller fragments and avatar menu are mounted once and keep their
/// state. Only the height, the banner and the search placement follow the
/// viewport and `show_experimental`: on narrow viewports the search box moves
/// from the main row to its own centered row underneath.
#[component]
pub fn MainHeader(
    #[prop(into, default = String::from("/"))] logo_href: String,
    #[prop(into, default = false.into())] show_experimental: Signal<bool>,
    #[prop(optional, into)] header_actions: Option<ViewFn>,
    #[prop(optional, into)] content_components: Option<ViewFn>,
    #[prop(optional, into)] left_icon: Option<ViewFn>,
    #[prop(optional)] auto_focus_search: Option<bool>,
) -> impl IntoView {
    let dims = use_theme().header;
    let viewport = use_viewport();

    let presence = HeaderConfiguration {
        logo_href: logo_href.clone(),
        show_experimental: false,
        header_actions: header_actions.as_ref().map(|_| ()),
        content_components: content_components.as_ref().map(|_| ()),
        left_icon: left_icon.as_ref().map(|_| ()),
        auto_focus_search,
    };
    let HeaderSignals {
        height,
        banner,
        inline_search,
        stacked_search,
    } = header_signals(viewport, show_experimental, presence, dims);

    // Group contents don't depend on the viewport, so they are planned once.
    let groups = plan(
        viewport.get_untracked(),
        HeaderConfiguration {
            logo_href,
            show_experimental: false,
            header_actions,
            content_components,
            left_icon,
            auto_focus_search,
        },
        &dims,
    )
    .main_row;

    let left = groups.left.into_iter().map(render_slot).collect_view();
    let (menu, fragments): (Vec<_>, Vec<_>) = groups
        .right
        .into_iter()
        .partition(|slot| matches!(slot, Slot::AvatarMenu));
    let fragments = fragments.into_iter().map(render_slot).collect_view();
    let menu = menu.into_iter().map(render_slot).collect_view();

    view! {
        <header
            class="fixed top-0 inset-x-0 z-40 w-full pb-2.5 shadow-md border-b border-slate-200/70 dark:border-slate-800/70 bg-white/90 dark:bg-slate-950/80 text-slate-900 dark:text-white backdrop-blur"
            style=move || format!("height: {}px", height.get())
        >
            {move || {
                let BannerSpec { visible, height: note_height } = banner.get();
                view! { <HeaderNote visible=visible height=note_height /> }
            }}
            <div class="flex items-center justify-between gap-6 mt-2.5 px-4 flex-nowrap">
                <div class="flex flex-1 items-center gap-4 flex-nowrap">{left}</div>
                {move || inline_search.get().map(render_search)}
                <div class="flex flex-1 items-center justify-end gap-4 flex-nowrap">
                    <div class="flex items-center gap-2 flex-nowrap">{fragments}</div>
                    {menu}
                </div>
            </div>
            {move || {
                stacked_search
                    .get()
                    .map(|props| {
                        view! {
                            <div class="flex justify-center mt-2.5 px-4">
                                {render_search(props)}
                            </div>
                        }
                    })
            }}
        </header>
    }
}

/// Current header height, for pages that need to reserve space under a fixed
/// header. Reads the same shared viewport signal as [`MainHeader`].
pub fn use_header_height(show_experimental: Signal<bool>) -> Signal<u32> {
    let dims = use_theme().header;
    let viewport = use_viewport();
    Signal::derive(move || header_height(viewport.get(), show_experimental.get(), &dims))
}

/// The reactive parts of the header. Each is memoized separately so a banner
/// toggle leaves the search placements untouched, and a resize leaves the
/// banner visibility untouched.
struct HeaderSignals {
    height: Memo<u32>,
    banner: Memo<BannerSpec>,
    inline_search: Memo<Option<SearchProps>>,
    stacked_search: Memo<Option<SearchProps>>,
}

fn header_signals(
    viewport: Signal<ViewportClass>,
    show_experimental: Signal<bool>,
    presence: HeaderConfiguration<()>,
    dims: HeaderDimensions,
) -> HeaderSignals {
    let layout: Memo<HeaderTree<()>> = Memo::new(move |_| {
        plan(
            viewport.get(),
            HeaderConfiguration {
                show_experimental: show_experimental.get(),
                ..presence.clone()
            },
            &dims,
        )
    });

    HeaderSignals {
        height: Memo::new(move |_| layout.with(|tree| tree.height)),
        banner: Memo::new(move |_| layout.with(|tree| tree.banner)),
        inline_search: Memo::new(move |_| layout.with(|tree| tree.main_row.center)),
        stacked_search: Memo::new(move |_| layout.with(|tree| tree.search_row)),
    }
}

fn render_slot(slot: Slot<ViewFn>) -> AnyView {
    match slot {
        Slot::LeftIcon(fragment)
        | Slot::ContentComponents(fragment)
        | Slot::HeaderActions(fragment) => fragment.run(),
        Slot::Logo { href } => view! {
            <a href=href class="flex items-center">
                <Logo />
            </a>
        }
        .into_any(),
        Slot::AvatarMenu => view! { <AvatarMenu /> }.into_any(),
    }
}

fn render_search(props: SearchProps) -> impl IntoView {
    view! { <Search auto_focus=props.auto_focus.unwrap_or(false) is_mobile=props.is_mobile /> }
}

use crate::components::trans::{InlineWrapper, Trans};
use crate::i18n::HEADER_NS;
use crate::layout::{BannerHeight, HeaderDimensions};
use crate::theme::use_theme;
use leptos::prelude::*;
use std::sync::Arc;

pub const ISSUE_FORM_URL: &str = "https://github.com/ajnart/homarr/issues/new?assignees=&labels=%F0%9F%90%9B+Bug&projects=&template=bug.yml&title=[Authentication%20Beta]:%20%3Ctitle%3E&version=1.14-beta";
pub const COMMUNITY_INVITE_URL: &str = "https://discord.com/invite/aCsmEV5RgA";

const MESSAGE_KEY: &str = "experimentalNote.label";

/// Resolved banner geometry. The box never grows: text beyond `line_clamp`
/// lines is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSpec {
    pub height_px: u32,
    pub line_clamp: u8,
}

pub fn note_spec(visible: bool, height: BannerHeight, dims: &HeaderDimensions) -> Option<NoteSpec> {
    visible.then(|| NoteSpec {
        height_px: height.pixels(dims),
        line_clamp: height.line_clamp(),
    })
}

fn external_link(href: &'static str) -> InlineWrapper {
    Arc::new(move |children: AnyView| {
        view! {
            <a href=href target="_blank" rel="noreferrer" class="underline" style="color: inherit">
                {children}
            </a>
        }
        .into_any()
    })
}

/// Red warning strip shown above the header for experimental features.
#[component]
pub fn HeaderNote(
    #[prop(optional)] visible: bool,
    #[prop(optional)] height: Option<BannerHeight>,
) -> impl IntoView {
    let dims = use_theme().header;
    note_spec(visible, height.unwrap_or(BannerHeight::Compact), &dims).map(|spec| {
        let components = vec![
            ("gh", external_link(ISSUE_FORM_URL)),
            ("dc", external_link(COMMUNITY_INVITE_URL)),
        ];
        let text_class = match spec.line_clamp {
            1 => "text-sm line-clamp-1",
            _ => "text-sm line-clamp-2",
        };

        view! {
            <div
                class="bg-red-600 text-white overflow-hidden px-1.5 py-[3px]"
                style=format!("height: {}px", spec.height_px)
                data-line-clamp=spec.line_clamp.to_string()
            >
                <div class="flex h-full items-center gap-[7px]">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="white"
                        stroke-width="2"
                        class="h-4 w-4 min-w-4 shrink-0"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            d="M10.363 3.591l-8.106 13.534a1.914 1.914 0 0 0 1.636 2.871h16.214a1.914 1.914 0 0 0 1.636 -2.87l-8.106 -13.536a1.914 1.914 0 0 0 -3.274 0z"
                        />
                        <path stroke-linecap="round" stroke-linejoin="round" d="M12 9v4" />
                        <path stroke-linecap="round" stroke-linejoin="round" d="M12 16h.01" />
                    </svg>
                    <p class=text_class>
                        <Trans ns=HEADER_NS i18n_key=MESSAGE_KEY components=components />
                    </p>
                </div>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_note_renders_nothing_for_any_height() {
        let dims = HeaderDimensions::default();
        assert_eq!(note_spec(false, BannerHeight::Compact, &dims), None);
        assert_eq!(note_spec(false, BannerHeight::Tall, &dims), None);
    }

    #[test]
    fn compact_note_is_one_line() {
        let spec = note_spec(true, BannerHeight::Compact, &HeaderDimensions::default());
        assert_eq!(
            spec,
            Some(NoteSpec {
                height_px: 30,
                line_clamp: 1
            })
        );
    }

    #[test]
    fn tall_note_is_two_lines() {
        let spec = note_spec(true, BannerHeight::Tall, &HeaderDimensions::default());
        assert_eq!(
            spec,
            Some(NoteSpec {
                height_px: 60,
                line_clamp: 2
            })
        );
    }

    #[test]
    fn links_point_at_fixed_destinations() {
        assert!(ISSUE_FORM_URL.starts_with("https://github.com/"));
        assert!(ISSUE_FORM_URL.contains("template=bug.yml"));
        assert!(COMMUNITY_INVITE_URL.starts_with("https://discord.com/invite/"));
    }
}

//! Sizing and composition rules for the main header.
//!
//! Everything here is a pure function of the current viewport class and the
//! caller's configuration. The components in `crate::components` call [`plan`]
//! on every reactive pass and never keep a computed height around, so a resize
//! can't leave a stale value behind.

use serde::Deserialize;

/// Whether the viewport is at or below the `sm` breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn is_narrow(self) -> bool {
        matches!(self, ViewportClass::Narrow)
    }
}

/// The two sizes the experimental banner can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerHeight {
    /// One line of text, used on wide viewports.
    Compact,
    /// Room for the message to wrap onto a second line.
    Tall,
}

impl BannerHeight {
    pub fn pixels(self, dims: &HeaderDimensions) -> u32 {
        match self {
            BannerHeight::Compact => dims.banner_compact,
            BannerHeight::Tall => dims.banner_tall,
        }
    }

    /// Maximum number of visible text lines before the message is clipped.
    pub fn line_clamp(self) -> u8 {
        match self {
            BannerHeight::Compact => 1,
            BannerHeight::Tall => 2,
        }
    }
}

/// Pixel sizes used by the header. The defaults are tuned for the bundled
/// stylesheet; other themes can override them through `crate::theme::Theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderDimensions {
    /// Height of the row holding the logo, inline search and account menu.
    pub base_row: u32,
    /// Extra height added on narrow viewports for the stacked search row.
    pub mobile_search_row: u32,
    pub banner_compact: u32,
    pub banner_tall: u32,
}

impl Default for HeaderDimensions {
    fn default() -> Self {
        Self {
            base_row: 60,
            mobile_search_row: 46,
            banner_compact: 30,
            banner_tall: 60,
        }
    }
}

/// Caller-facing header inputs. `F` is whatever the renderer uses for opaque
/// view fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderConfiguration<F> {
    pub logo_href: String,
    pub show_experimental: bool,
    pub header_actions: Option<F>,
    pub content_components: Option<F>,
    pub left_icon: Option<F>,
    pub auto_focus_search: Option<bool>,
}

impl<F> Default for HeaderConfiguration<F> {
    fn default() -> Self {
        Self {
            logo_href: "/".to_string(),
            show_experimental: false,
            header_actions: None,
            content_components: None,
            left_icon: None,
            auto_focus_search: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProps {
    pub auto_focus: Option<bool>,
    pub is_mobile: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerSpec {
    pub visible: bool,
    pub height: BannerHeight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Slot<F> {
    LeftIcon(F),
    Logo { href: String },
    ContentComponents(F),
    HeaderActions(F),
    AvatarMenu,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainRow<F> {
    pub left: Vec<Slot<F>>,
    /// Inline search, only present on wide viewports.
    pub center: Option<SearchProps>,
    pub right: Vec<Slot<F>>,
}

/// Fully resolved header structure for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderTree<F> {
    pub height: u32,
    /// Always rendered first, above the main row.
    pub banner: BannerSpec,
    pub main_row: MainRow<F>,
    /// Search stacked below the main row, only present on narrow viewports.
    pub search_row: Option<SearchProps>,
}

impl<F> HeaderTree<F> {
    /// Every search placement in render order.
    pub fn search_placements(&self) -> Vec<SearchProps> {
        self.main_row
            .center
            .iter()
            .chain(self.search_row.iter())
            .copied()
            .collect()
    }
}

pub fn banner_height_for(viewport: ViewportClass) -> BannerHeight {
    match viewport {
        ViewportClass::Narrow => BannerHeight::Tall,
        ViewportClass::Wide => BannerHeight::Compact,
    }
}

pub fn base_height(viewport: ViewportClass, dims: &HeaderDimensions) -> u32 {
    match viewport {
        ViewportClass::Narrow => dims.base_row.saturating_add(dims.mobile_search_row),
        ViewportClass::Wide => dims.base_row,
    }
}

/// Total header height. Pages with a fixed header offset their content by
/// exactly this amount.
pub fn header_height(
    viewport: ViewportClass,
    show_experimental: bool,
    dims: &HeaderDimensions,
) -> u32 {
    let base = base_height(viewport, dims);
    if show_experimental {
        base.saturating_add(banner_height_for(viewport).pixels(dims))
    } else {
        base
    }
}

pub fn plan<F>(
    viewport: ViewportClass,
    config: HeaderConfiguration<F>,
    dims: &HeaderDimensions,
) -> HeaderTree<F> {
    let HeaderConfiguration {
        logo_href,
        show_experimental,
        header_actions,
        content_components,
        left_icon,
        auto_focus_search,
    } = config;

    let mut left = Vec::with_capacity(2);
    left.extend(left_icon.map(Slot::LeftIcon));
    left.push(Slot::Logo { href: logo_href });

    let mut right = Vec::with_capacity(3);
    right.extend(content_components.map(Slot::ContentComponents));
    right.extend(header_actions.map(Slot::HeaderActions));
    right.push(Slot::AvatarMenu);

    let (center, search_row) = match viewport {
        ViewportClass::Wide => (
            Some(SearchProps {
                auto_focus: auto_focus_search,
                is_mobile: false,
            }),
            None,
        ),
        ViewportClass::Narrow => (
            None,
            Some(SearchProps {
                auto_focus: None,
                is_mobile: true,
            }),
        ),
    };

    let height = header_height(viewport, show_experimental, dims);
    tracing::trace!(?viewport, show_experimental, height, "planned header layout");

    HeaderTree {
        height,
        banner: BannerSpec {
            visible: show_experimental,
            height: banner_height_for(viewport),
        },
        main_row: MainRow {
            left,
            center,
            right,
        },
        search_row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> HeaderConfiguration<&'static str> {
        HeaderConfiguration {
            logo_href: "/board".to_string(),
            show_experimental: true,
            header_actions: Some("actions"),
            content_components: Some("content"),
            left_icon: Some("icon"),
            auto_focus_search: Some(true),
        }
    }

    #[test]
    fn header_height_matches_formula() {
        let dims = HeaderDimensions::default();
        assert_eq!(header_height(ViewportClass::Wide, true, &dims), 90);
        assert_eq!(header_height(ViewportClass::Narrow, true, &dims), 166);
        assert_eq!(header_height(ViewportClass::Narrow, false, &dims), 106);
        assert_eq!(header_height(ViewportClass::Wide, false, &dims), 60);
    }

    #[test]
    fn header_height_follows_custom_dimensions() {
        let dims = HeaderDimensions {
            base_row: 50,
            mobile_search_row: 40,
            banner_compact: 24,
            banner_tall: 48,
        };
        assert_eq!(header_height(ViewportClass::Wide, true, &dims), 74);
        assert_eq!(header_height(ViewportClass::Narrow, true, &dims), 138);
    }

    #[test]
    fn oversized_dimensions_saturate() {
        let dims = HeaderDimensions {
            base_row: u32::MAX - 10,
            mobile_search_row: 46,
            banner_compact: 30,
            banner_tall: 60,
        };
        assert_eq!(base_height(ViewportClass::Narrow, &dims), u32::MAX);
        assert_eq!(header_height(ViewportClass::Narrow, true, &dims), u32::MAX);
        assert_eq!(header_height(ViewportClass::Wide, true, &dims), u32::MAX);
    }

    #[test]
    fn banner_size_tracks_viewport() {
        assert_eq!(banner_height_for(ViewportClass::Wide), BannerHeight::Compact);
        assert_eq!(banner_height_for(ViewportClass::Narrow), BannerHeight::Tall);
        assert_eq!(BannerHeight::Compact.line_clamp(), 1);
        assert_eq!(BannerHeight::Tall.line_clamp(), 2);
    }

    #[test]
    fn wide_layout_places_search_inline() {
        let tree = plan(
            ViewportClass::Wide,
            full_config(),
            &HeaderDimensions::default(),
        );
        assert_eq!(
            tree.search_placements(),
            vec![SearchProps {
                auto_focus: Some(true),
                is_mobile: false
            }]
        );
        assert!(tree.main_row.center.is_some());
        assert!(tree.search_row.is_none());
    }

    #[test]
    fn narrow_layout_stacks_search_without_autofocus() {
        let tree = plan(
            ViewportClass::Narrow,
            full_config(),
            &HeaderDimensions::default(),
        );
        assert_eq!(
            tree.search_placements(),
            vec![SearchProps {
                auto_focus: None,
                is_mobile: true
            }]
        );
        assert!(tree.main_row.center.is_none());
    }

    #[test]
    fn groups_keep_their_order() {
        let tree = plan(
            ViewportClass::Wide,
            full_config(),
            &HeaderDimensions::default(),
        );
        assert_eq!(
            tree.main_row.left,
            vec![
                Slot::LeftIcon("icon"),
                Slot::Logo {
                    href: "/board".to_string()
                }
            ]
        );
        assert_eq!(
            tree.main_row.right,
            vec![
                Slot::ContentComponents("content"),
                Slot::HeaderActions("actions"),
                Slot::AvatarMenu
            ]
        );
    }

    #[test]
    fn omitted_fragments_only_drop_themselves() {
        let dims = HeaderDimensions::default();
        let without_actions = plan(
            ViewportClass::Wide,
            HeaderConfiguration {
                header_actions: None,
                ..full_config()
            },
            &dims,
        );
        assert_eq!(
            without_actions.main_row.right,
            vec![Slot::ContentComponents("content"), Slot::AvatarMenu]
        );
        assert_eq!(without_actions.main_row.left.len(), 2);

        let without_content = plan(
            ViewportClass::Wide,
            HeaderConfiguration {
                content_components: None,
                ..full_config()
            },
            &dims,
        );
        assert_eq!(
            without_content.main_row.right,
            vec![Slot::HeaderActions("actions"), Slot::AvatarMenu]
        );

        let without_icon = plan(
            ViewportClass::Narrow,
            HeaderConfiguration {
                left_icon: None,
                ..full_config()
            },
            &dims,
        );
        assert_eq!(
            without_icon.main_row.left,
            vec![Slot::Logo {
                href: "/board".to_string()
            }]
        );
        assert_eq!(without_icon.main_row.right.len(), 3);
    }

    #[test]
    fn defaults_link_logo_to_root_and_hide_banner() {
        let tree = plan::<&str>(
            ViewportClass::Wide,
            HeaderConfiguration::default(),
            &HeaderDimensions::default(),
        );
        assert_eq!(
            tree.main_row.left,
            vec![Slot::Logo {
                href: "/".to_string()
            }]
        );
        assert_eq!(tree.main_row.right, vec![Slot::AvatarMenu]);
        assert!(!tree.banner.visible);
        assert_eq!(tree.height, 60);
    }

    #[test]
    fn planning_is_deterministic() {
        let dims = HeaderDimensions::default();
        for viewport in [ViewportClass::Wide, ViewportClass::Narrow] {
            let first = plan(viewport, full_config(), &dims);
            let second = plan(viewport, full_config(), &dims);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn banner_is_planned_for_both_viewports() {
        let dims = HeaderDimensions::default();
        let narrow = plan(ViewportClass::Narrow, full_config(), &dims);
        assert_eq!(
            narrow.banner,
            BannerSpec {
                visible: true,
                height: BannerHeight::Tall
            }
        );
        assert_eq!(narrow.height, 166);
    }
}

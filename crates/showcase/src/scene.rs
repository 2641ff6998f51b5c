//! Deterministic startup scenes for exercising each overlay kind.
//!
//! A scene pre-opens one overlay configuration through the page URL
//! (`?scene=...`) so visual review and browser automation land on a
//! stable state without scripted clicks.

/// Canonical showcase scenes selectable from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseScene {
    /// Trigger row only; no overlay open.
    Idle,
    /// Profile dialog open.
    Dialog,
    /// Navigation drawer open.
    Drawer,
    /// Share popover open.
    Popover,
    /// Document actions menu open.
    Menu,
    /// Profile dialog with the confirmation dialog stacked on top.
    StackedDialogs,
}

impl Default for ShowcaseScene {
    fn default() -> Self {
        Self::Idle
    }
}

impl ShowcaseScene {
    /// Stable query-string scene id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dialog => "dialog",
            Self::Drawer => "drawer",
            Self::Popover => "popover",
            Self::Menu => "menu",
            Self::StackedDialogs => "stacked-dialogs",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "idle" => Some(Self::Idle),
            "dialog" => Some(Self::Dialog),
            "drawer" => Some(Self::Drawer),
            "popover" => Some(Self::Popover),
            "menu" => Some(Self::Menu),
            "stacked-dialogs" => Some(Self::StackedDialogs),
            _ => None,
        }
    }
}

/// Parses the requested scene from a query string.
pub fn parse_scene_from_query(query: &str) -> Option<ShowcaseScene> {
    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "scene" {
            return ShowcaseScene::parse(value);
        }
    }
    None
}

/// Returns the scene requested by the current URL, defaulting to idle.
pub fn current_scene() -> ShowcaseScene {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return ShowcaseScene::default();
        };
        let Ok(search) = window.location().search() else {
            return ShowcaseScene::default();
        };
        if let Some(scene) = parse_scene_from_query(&search) {
            return scene;
        }
    }

    ShowcaseScene::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_scene_ids() {
        assert_eq!(
            parse_scene_from_query("?scene=stacked-dialogs"),
            Some(ShowcaseScene::StackedDialogs)
        );
        assert_eq!(
            parse_scene_from_query("scene=menu&theme=dark"),
            Some(ShowcaseScene::Menu)
        );
    }

    #[test]
    fn ignores_unknown_scenes_and_other_keys() {
        assert_eq!(parse_scene_from_query("?scene=unknown"), None);
        assert_eq!(parse_scene_from_query("?theme=dark"), None);
        assert_eq!(parse_scene_from_query(""), None);
    }

    #[test]
    fn scene_ids_round_trip_through_parse() {
        for scene in [
            ShowcaseScene::Idle,
            ShowcaseScene::Dialog,
            ShowcaseScene::Drawer,
            ShowcaseScene::Popover,
            ShowcaseScene::Menu,
            ShowcaseScene::StackedDialogs,
        ] {
            assert_eq!(ShowcaseScene::parse(scene.id()), Some(scene));
        }
    }
}

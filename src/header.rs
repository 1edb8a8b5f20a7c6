//! Header State
//!
//! Scroll-state threshold and mobile menu open/close decisions.

/// Header is "scrolled" strictly past the threshold
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// What a click did, relative to the menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuClick {
    Toggle,
    NavLink,
    /// Anywhere in the document; flags say whether it landed in the toggle or menu
    Document { in_toggle: bool, in_menu: bool },
}

/// Mobile menu open state. Rendered as `active` on both toggle and menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn apply(&mut self, click: MenuClick) {
        match click {
            MenuClick::Toggle => self.open = !self.open,
            MenuClick::NavLink => self.open = false,
            MenuClick::Document { in_toggle, in_menu } => {
                if !in_toggle && !in_menu {
                    self.open = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_iff_past_threshold() {
        for y in [0.0, 10.0, 49.9, 50.0] {
            assert!(!is_scrolled(y, 50.0), "y={}", y);
        }
        for y in [50.1, 51.0, 400.0, 1e6] {
            assert!(is_scrolled(y, 50.0), "y={}", y);
        }
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        menu.apply(MenuClick::Toggle);
        assert!(menu.open);
        menu.apply(MenuClick::Toggle);
        assert!(!menu.open);
    }

    #[test]
    fn test_nav_link_closes() {
        let mut menu = MenuState { open: true };
        menu.apply(MenuClick::NavLink);
        assert!(!menu.open);
    }

    #[test]
    fn test_outside_click_closes_inside_click_keeps_open() {
        let mut menu = MenuState { open: true };
        menu.apply(MenuClick::Document { in_toggle: false, in_menu: true });
        assert!(menu.open);
        menu.apply(MenuClick::Document { in_toggle: true, in_menu: false });
        assert!(menu.open);
        menu.apply(MenuClick::Document { in_toggle: false, in_menu: false });
        assert!(!menu.open);
    }
}

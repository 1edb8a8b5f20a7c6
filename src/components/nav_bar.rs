//! Navigation Bar
//!
//! Scrolled-state class on the header and the mobile menu toggle.

use leptos::prelude::*;
use web_sys::{Element, Event};

use dom_listeners::{contains_target, listen, listen_document, listen_window};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;
use crate::header::{is_scrolled, MenuClick, MenuState};

const SCROLLED: &str = "scrolled";
const ACTIVE: &str = "active";

/// Each half is optional: no navbar means no scrolled class, no hamburger
/// means no mobile menu. A hamburger without its menu is broken markup.
pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let sel = &config.selectors;

    let navbar = dom::query(&sel.navbar)?;
    let has_navbar = navbar.is_some();
    if let Some(navbar) = navbar {
        let threshold = config.timings.scroll_threshold_px;
        listen_window("scroll", move |_: Event| {
            let y = window().scroll_y().unwrap_or(0.0);
            dom::set_class(&navbar, SCROLLED, is_scrolled(y, threshold));
        });
    }

    let has_menu = match dom::query(&sel.hamburger)? {
        Some(hamburger) => {
            let nav_menu = dom::require(&sel.nav_menu)?;
            let links = dom::query_all(&sel.nav_links)?;
            MobileMenu::bind(hamburger, nav_menu, &links);
            true
        }
        None => false,
    };

    Ok(has_navbar || has_menu)
}

/// Hamburger + slide-out menu sharing one open flag
#[derive(Clone)]
struct MobileMenu {
    state: RwSignal<MenuState>,
    hamburger: Element,
    nav_menu: Element,
}

impl MobileMenu {
    fn bind(hamburger: Element, nav_menu: Element, links: &[Element]) {
        let menu = Self {
            state: RwSignal::new(MenuState::default()),
            hamburger,
            nav_menu,
        };

        let this = menu.clone();
        listen(&menu.hamburger, "click", move |_: Event| this.apply(MenuClick::Toggle));

        for link in links {
            let this = menu.clone();
            listen(link, "click", move |_: Event| this.apply(MenuClick::NavLink));
        }

        let this = menu.clone();
        listen_document("click", move |ev: Event| {
            let click = MenuClick::Document {
                in_toggle: contains_target(&this.hamburger, &ev),
                in_menu: contains_target(&this.nav_menu, &ev),
            };
            this.apply(click);
        });
    }

    fn is_open(&self) -> bool {
        self.state.get_untracked().open
    }

    fn apply(&self, click: MenuClick) {
        self.state.update(|s| s.apply(click));
        self.render();
    }

    fn render(&self) {
        let open = self.is_open();
        dom::set_class(&self.hamburger, ACTIVE, open);
        dom::set_class(&self.nav_menu, ACTIVE, open);
    }
}

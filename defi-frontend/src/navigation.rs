//! Static navigation tables shared by the header, the footer and the docs
//! sidebar, plus the small amount of state the header owns.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

pub static NAVIGATION: &[NavigationItem] = &[
    NavigationItem {
        name: "Swap",
        href: "/swap",
        description: "Trade tokens at the best available rate",
    },
    NavigationItem {
        name: "Perpetuals",
        href: "/perpetuals",
        description: "Go long or short with up to 50x leverage",
    },
    NavigationItem {
        name: "Pools",
        href: "/pools",
        description: "Provide liquidity and earn trading fees",
    },
    NavigationItem {
        name: "Lend",
        href: "/lend",
        description: "Supply assets to earn yield or borrow against them",
    },
    NavigationItem {
        name: "Stake",
        href: "/stake",
        description: "Delegate to validators and collect rewards",
    },
    NavigationItem {
        name: "Looper",
        href: "/looper",
        description: "Amplify lending yield with automated loops",
    },
    NavigationItem {
        name: "Portfolio",
        href: "/portfolio",
        description: "Track balances, allocation and performance",
    },
    NavigationItem {
        name: "Docs",
        href: "/docs",
        description: "Guides and reference for every product",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocsLink {
    pub title: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocsSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [DocsLink],
}

pub static DOCS_SECTIONS: &[DocsSection] = &[
    DocsSection {
        title: "Overview",
        icon: "📘",
        items: &[
            DocsLink {
                title: "Introduction",
                href: "/docs",
            },
            DocsLink {
                title: "Getting Started",
                href: "/docs/getting-started",
            },
        ],
    },
    DocsSection {
        title: "Products",
        icon: "🧩",
        items: &[
            DocsLink {
                title: "Lending",
                href: "/docs/lending",
            },
            DocsLink {
                title: "Borrowing",
                href: "/docs/borrowing",
            },
            DocsLink {
                title: "Staking",
                href: "/docs/staking",
            },
            DocsLink {
                title: "Looping",
                href: "/docs/looping",
            },
        ],
    },
    DocsSection {
        title: "Resources",
        icon: "🛟",
        items: &[
            DocsLink {
                title: "Risks",
                href: "/docs/risks",
            },
            DocsLink {
                title: "FAQ",
                href: "/docs/faq",
            },
        ],
    },
];

pub const ACTIVE_LINK_CLASS: &str = "text-white bg-blue-700 px-3 py-2 rounded-md text-sm font-medium";
pub const INACTIVE_LINK_CLASS: &str =
    "text-blue-100 hover:text-white hover:bg-blue-500 px-3 py-2 rounded-md text-sm font-medium";

pub const ACTIVE_MOBILE_LINK_CLASS: &str =
    "block text-white bg-blue-700 px-3 py-2 rounded-md text-base font-medium";
pub const INACTIVE_MOBILE_LINK_CLASS: &str =
    "block text-blue-100 hover:text-white hover:bg-blue-500 px-3 py-2 rounded-md text-base font-medium";

pub const ACTIVE_DOCS_LINK_CLASS: &str =
    "block px-3 py-1.5 rounded-md text-sm font-medium bg-blue-50 text-blue-700";
pub const INACTIVE_DOCS_LINK_CLASS: &str =
    "block px-3 py-1.5 rounded-md text-sm text-gray-600 hover:bg-gray-50 hover:text-gray-900";

/// Exact path match; `/docs` is not active on `/docs/lending`.
pub fn is_active(href: &str, current_path: &str) -> bool {
    href == current_path
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        ACTIVE_LINK_CLASS
    } else {
        INACTIVE_LINK_CLASS
    }
}

pub fn mobile_nav_link_class(active: bool) -> &'static str {
    if active {
        ACTIVE_MOBILE_LINK_CLASS
    } else {
        INACTIVE_MOBILE_LINK_CLASS
    }
}

pub fn docs_link_class(active: bool) -> &'static str {
    if active {
        ACTIVE_DOCS_LINK_CLASS
    } else {
        INACTIVE_DOCS_LINK_CLASS
    }
}

/// Open/closed state of the collapsed header menu on small screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_current_path_is_active() {
        let current = "/lend";
        let classes: Vec<&str> = NAVIGATION
            .iter()
            .map(|item| nav_link_class(is_active(item.href, current)))
            .collect();

        let active: Vec<&NavigationItem> = NAVIGATION
            .iter()
            .zip(&classes)
            .filter(|(_, class)| **class == ACTIVE_LINK_CLASS)
            .map(|(item, _)| item)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Lend");
        assert_eq!(
            classes.iter().filter(|c| **c == INACTIVE_LINK_CLASS).count(),
            NAVIGATION.len() - 1
        );
    }

    #[test]
    fn unknown_path_leaves_everything_inactive() {
        assert!(NAVIGATION.iter().all(|item| !is_active(item.href, "/nowhere")));
    }

    #[test]
    fn docs_match_is_exact() {
        assert!(is_active("/docs", "/docs"));
        assert!(!is_active("/docs", "/docs/lending"));
        assert_eq!(docs_link_class(true), ACTIVE_DOCS_LINK_CLASS);
    }

    #[test]
    fn mobile_menu_flips_once_per_toggle() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());

        let menu = menu.toggled();
        assert!(menu.is_open());
        let menu = menu.toggled();
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes_open_menu() {
        let menu = MobileMenu::default().toggled();
        assert!(!menu.closed().is_open());
        assert!(!MobileMenu::default().closed().is_open());
    }

    #[test]
    fn docs_hrefs_are_unique() {
        let mut hrefs: Vec<&str> = DOCS_SECTIONS
            .iter()
            .flat_map(|section| section.items.iter().map(|link| link.href))
            .collect();
        let total = hrefs.len();
        hrefs.sort_unstable();
        hrefs.dedup();
        assert_eq!(hrefs.len(), total);
    }
}

use crate::components::docs_sidebar::DocsSidebar;
use yew::prelude::*;
use yew_router::prelude::*;

pub struct DocArticle {
    pub href: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub static DOC_ARTICLES: &[DocArticle] = &[
    DocArticle {
        href: "/docs",
        title: "Introduction",
        summary: "What the protocol offers and how the products fit together.",
        paragraphs: &[
            "The dashboard brings swapping, perpetual futures, liquidity pools, lending, staking and looping into a single interface.",
            "Every page reads from the same account so balances supplied in one product show up as collateral or allocation in the others.",
        ],
    },
    DocArticle {
        href: "/docs/getting-started",
        title: "Getting Started",
        summary: "Connect a wallet and make a first deposit.",
        paragraphs: &[
            "Open the Connect dialog from the header and choose a supported wallet.",
            "Visit the Lend page, select an asset from the market table and enter an amount to supply. The form shows the estimated annual and daily interest before you confirm.",
        ],
    },
    DocArticle {
        href: "/docs/lending",
        title: "Lending",
        summary: "Supply assets to earn variable interest.",
        paragraphs: &[
            "Supplied assets earn the market's supply APY. Interest estimates in the interface use simple, non-compounding interest: amount multiplied by APY, divided by 365 for the daily figure.",
            "Enable \"Use as collateral\" to let a supplied asset count toward your borrowing power, weighted by its collateral factor.",
        ],
    },
    DocArticle {
        href: "/docs/borrowing",
        title: "Borrowing",
        summary: "Borrow against supplied collateral.",
        paragraphs: &[
            "Your borrow limit is the sum of each collateral asset's value multiplied by its collateral factor.",
            "The health factor compares collateral to debt. Above 2.0 a position is considered safe, between 1.5 and 2.0 it needs attention, and below 1.5 it is at risk of liquidation.",
        ],
    },
    DocArticle {
        href: "/docs/staking",
        title: "Staking",
        summary: "Delegate to validators and collect rewards.",
        paragraphs: &[
            "Stakes accrue rewards every epoch at the validator's APY.",
            "Claim All Rewards collects pending rewards from every stake in a single request.",
        ],
    },
    DocArticle {
        href: "/docs/looping",
        title: "Looping",
        summary: "Repeat supply and borrow to amplify yield.",
        paragraphs: &[
            "Each loop borrows against the previous deposit at the asset's collateral factor and supplies the proceeds again.",
            "Net APY is the supply APY on the total supplied minus the borrow APY on the total borrowed. When the borrow rate exceeds the supply rate, looping reduces yield.",
        ],
    },
    DocArticle {
        href: "/docs/risks",
        title: "Risks",
        summary: "Understand what can go wrong.",
        paragraphs: &[
            "Borrowed positions can be liquidated when the health factor drops below 1.0. A liquidation penalty is charged on the collateral seized.",
            "Leveraged perpetual positions and looped positions magnify both gains and losses.",
        ],
    },
    DocArticle {
        href: "/docs/faq",
        title: "FAQ",
        summary: "Common questions.",
        paragraphs: &[
            "Are rates fixed? No. Supply and borrow APYs move with utilization.",
            "Can I withdraw at any time? Supplied assets can be withdrawn as long as the remaining collateral covers any open borrow.",
        ],
    },
];

pub fn find_article(path: &str) -> Option<&'static DocArticle> {
    DOC_ARTICLES.iter().find(|article| article.href == path)
}

#[function_component(Docs)]
pub fn docs() -> Html {
    let location = use_location();
    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_default();
    let article = find_article(&path).unwrap_or(&DOC_ARTICLES[0]);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
            <div class="md:col-span-1">
                <DocsSidebar />
            </div>
            <article class="md:col-span-3 bg-white shadow rounded-lg p-6">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">{article.title}</h1>
                <p class="text-gray-500 mb-6">{article.summary}</p>
                <div class="space-y-4 text-gray-700">
                    {article.paragraphs.iter().enumerate().map(|(i, paragraph)| html! {
                        <p key={i}>{*paragraph}</p>
                    }).collect::<Html>()}
                </div>
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::DOCS_SECTIONS;

    #[test]
    fn every_sidebar_link_has_an_article() {
        for link in DOCS_SECTIONS.iter().flat_map(|section| section.items.iter()) {
            let article = find_article(link.href)
                .unwrap_or_else(|| panic!("missing article for {}", link.href));
            assert_eq!(article.title, link.title);
        }
    }
}

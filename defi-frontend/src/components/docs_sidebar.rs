use crate::navigation::{docs_link_class, is_active, DOCS_SECTIONS};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DocsSidebar)]
pub fn docs_sidebar() -> Html {
    let location = use_location();
    let current_path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_default();

    html! {
        <aside class="bg-white shadow rounded-lg p-4">
            <nav class="space-y-6">
                {DOCS_SECTIONS.iter().map(|section| html! {
                    <div key={section.title}>
                        <h3 class="flex items-center text-xs font-semibold text-gray-500 uppercase tracking-wider mb-2">
                            <span class="mr-2">{section.icon}</span>
                            {section.title}
                        </h3>
                        <ul class="space-y-1">
                            {section.items.iter().map(|link| html! {
                                <li key={link.href}>
                                    <Link<Route>
                                        to={Route::from_href(link.href)}
                                        classes={classes!(docs_link_class(is_active(link.href, &current_path)))}
                                    >
                                        {link.title}
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()}
                        </ul>
                    </div>
                }).collect::<Html>()}
            </nav>
        </aside>
    }
}

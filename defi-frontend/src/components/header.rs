use crate::components::auth_modal::AuthModal;
use crate::config::use_app_config;
use crate::navigation::*;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_app_config();
    let location = use_location();
    let current_path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_default();

    let menu = use_state(MobileMenu::default);
    let auth_open = use_state(|| false);

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let on_close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.closed()))
    };

    let on_open_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_: MouseEvent| auth_open.set(true))
    };

    let on_close_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_: ()| auth_open.set(false))
    };

    html! {
        <nav class="bg-blue-600 shadow-lg">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <Link<Route> to={Route::Home} classes="text-white text-xl font-bold">
                            {&config.app_name}
                        </Link<Route>>
                    </div>
                    <div class="hidden md:flex items-center space-x-1">
                        {NAVIGATION.iter().map(|item| {
                            html! {
                                <Link<Route>
                                    to={Route::from_href(item.href)}
                                    classes={classes!(nav_link_class(is_active(item.href, &current_path)))}
                                >
                                    {item.name}
                                </Link<Route>>
                            }
                        }).collect::<Html>()}
                    </div>
                    <div class="flex items-center space-x-2">
                        <button
                            onclick={on_open_auth}
                            class="px-4 py-2 bg-white text-blue-700 rounded-md text-sm font-medium hover:bg-blue-50"
                        >
                            {"Connect"}
                        </button>
                        <button
                            onclick={on_toggle_menu}
                            class="md:hidden p-2 rounded-md text-blue-100 hover:text-white hover:bg-blue-500"
                            aria-label="Toggle navigation"
                        >
                            {if menu.is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            if menu.is_open() {
                <div class="md:hidden px-2 pt-2 pb-3 space-y-1">
                    {NAVIGATION.iter().map(|item| {
                        html! {
                            <div key={item.href} onclick={on_close_menu.clone()}>
                                <Link<Route>
                                    to={Route::from_href(item.href)}
                                    classes={classes!(mobile_nav_link_class(is_active(item.href, &current_path)))}
                                >
                                    <div>{item.name}</div>
                                    <div class="text-xs text-blue-200">{item.description}</div>
                                </Link<Route>>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }

            <AuthModal is_open={*auth_open} on_close={on_close_auth} />
        </nav>
    }
}

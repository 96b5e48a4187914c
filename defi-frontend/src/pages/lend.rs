use crate::components::borrow_form::BorrowForm;
use crate::components::cards::ErrorPanel;
use crate::components::lend_form::LendForm;
use crate::services::MockDataService;
use crate::types::*;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LendTab {
    Supply,
    Borrow,
}

#[function_component(Lend)]
pub fn lend() -> Html {
    let assets = use_memo((), |_| MockDataService::assets());
    let selected = use_state(|| 0usize);
    let tab = use_state(|| LendTab::Supply);

    let assets = match &*assets {
        Ok(assets) => assets,
        Err(e) => return html! { <ErrorPanel message={e.to_string()} /> },
    };
    let Some(asset) = assets.get(*selected).or_else(|| assets.first()) else {
        return html! {
            <div class="bg-gray-50 rounded-lg p-8 text-center text-gray-500">
                {"No lending markets are available."}
            </div>
        };
    };

    let tab_button = |target: LendTab, label: &'static str| {
        let tab = tab.clone();
        let active = *tab == target;
        html! {
            <button
                onclick={Callback::from(move |_: MouseEvent| tab.set(target))}
                class={if active {
                    "flex-1 py-2 text-sm font-medium text-white bg-blue-600 rounded-md"
                } else {
                    "flex-1 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100 rounded-md"
                }}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-white shadow rounded-lg p-6">
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Lending Markets"}</h2>
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Asset"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Price"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Supply APY"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Borrow APY"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Collateral Factor"}</th>
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                {assets.iter().enumerate().map(|(i, row)| {
                                    let selected = selected.clone();
                                    let is_selected = row.symbol == asset.symbol;
                                    html! {
                                        <tr
                                            key={row.symbol.clone()}
                                            onclick={Callback::from(move |_: MouseEvent| selected.set(i))}
                                            class={if is_selected { "bg-blue-50 cursor-pointer" } else { "hover:bg-gray-50 cursor-pointer" }}
                                        >
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                <div class="flex items-center space-x-2">
                                                    <img src={row.icon.clone()} alt={row.symbol.clone()} class="w-6 h-6" />
                                                    <span class="font-medium">{&row.symbol}</span>
                                                    <span class="text-gray-500">{&row.name}</span>
                                                </div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_usd(row.price)}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-green-600">{format_apy(row.supply_apy)}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-red-600">{format_apy(row.borrow_apy)}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_percent(row.collateral_factor * 100.0)}</td>
                                        </tr>
                                    }
                                }).collect::<Html>()}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="space-y-4">
                    <div class="bg-white shadow rounded-lg p-2 flex space-x-2">
                        {tab_button(LendTab::Supply, "Supply")}
                        {tab_button(LendTab::Borrow, "Borrow")}
                    </div>
                    {match *tab {
                        LendTab::Supply => html! { <LendForm key={asset.symbol.clone()} asset={asset.clone()} /> },
                        LendTab::Borrow => html! { <BorrowForm key={asset.symbol.clone()} asset={asset.clone()} /> },
                    }}
                </div>
            </div>
        </div>
    }
}

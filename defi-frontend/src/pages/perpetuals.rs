use crate::calc::{parse_amount_or_zero, position_preview, PositionSide};
use crate::components::cards::{DetailRow, ErrorPanel};
use crate::components::form::AmountInput;
use crate::config::use_app_config;
use crate::risk::Trend;
use crate::services::MockDataService;
use crate::types::*;
use yew::prelude::*;

#[function_component(Perpetuals)]
pub fn perpetuals() -> Html {
    let config = use_app_config();
    let markets = use_memo((), |_| MockDataService::perp_markets());
    let selected = use_state(|| 0usize);
    let side = use_state(PositionSide::default);
    let leverage = use_state(|| 5u32);
    let margin = use_state(String::new);

    let markets = match &*markets {
        Ok(markets) => markets,
        Err(e) => return html! { <ErrorPanel message={e.to_string()} /> },
    };
    let Some(market) = markets.get(*selected).or_else(|| markets.first()) else {
        return html! {
            <div class="bg-gray-50 rounded-lg p-8 text-center text-gray-500">
                {"No perpetual markets are available."}
            </div>
        };
    };

    let effective_leverage = (*leverage).min(market.max_leverage);
    let preview = position_preview(*side, parse_amount_or_zero(&margin), effective_leverage);
    let size_in_base = if market.mark_price > 0.0 {
        preview.notional / market.mark_price
    } else {
        0.0
    };

    let on_margin = {
        let margin = margin.clone();
        Callback::from(move |value: String| margin.set(value))
    };

    let on_side = {
        let side = side.clone();
        Callback::from(move |_: MouseEvent| side.set(side.toggled()))
    };

    let on_submit = {
        let symbol = market.symbol.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!(
                "Open position requested: {} {} margin {} at {}x",
                preview.side.as_str(),
                symbol,
                preview.margin,
                preview.leverage
            );
        })
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 bg-white shadow rounded-lg p-6">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Markets"}</h2>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Market"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Mark Price"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"24h"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Funding"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Open Interest"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {markets.iter().enumerate().map(|(i, row)| {
                                let selected = selected.clone();
                                let change = Trend::from_value(row.change_24h);
                                let funding = Trend::from_value(row.funding_rate);
                                html! {
                                    <tr
                                        key={row.symbol.clone()}
                                        onclick={Callback::from(move |_: MouseEvent| selected.set(i))}
                                        class={if row.symbol == market.symbol { "bg-blue-50 cursor-pointer" } else { "hover:bg-gray-50 cursor-pointer" }}
                                    >
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{&row.symbol}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_usd(row.mark_price)}</td>
                                        <td class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", change.text_class())}>
                                            {Trend::format_percent(row.change_24h)}
                                        </td>
                                        <td class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", funding.text_class())}>
                                            {format!("{}{:.4}%", funding.sign(), row.funding_rate)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_compact_usd(row.open_interest)}</td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                </div>
            </div>

            <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-medium text-gray-900">{format!("Trade {}", market.symbol)}</h3>

                <button
                    type="button"
                    onclick={on_side}
                    class={match *side {
                        PositionSide::Long => "w-full py-2 rounded-md text-sm font-medium text-white bg-green-600 hover:bg-green-700",
                        PositionSide::Short => "w-full py-2 rounded-md text-sm font-medium text-white bg-red-600 hover:bg-red-700",
                    }}
                >
                    {side.as_str()}
                </button>

                <AmountInput label="Margin" value={(*margin).clone()} on_change={on_margin} symbol="USDC" />

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Leverage"}</label>
                    <div class="flex flex-wrap gap-2">
                        {config.leverage_options.iter().copied().filter(|x| *x <= market.max_leverage).map(|option| {
                            let leverage = leverage.clone();
                            let active = effective_leverage == option;
                            html! {
                                <button
                                    key={option}
                                    type="button"
                                    onclick={Callback::from(move |_: MouseEvent| leverage.set(option))}
                                    class={if active {
                                        "px-3 py-1 text-sm font-medium text-white bg-blue-600 rounded-md"
                                    } else {
                                        "px-3 py-1 text-sm font-medium text-blue-700 bg-blue-50 rounded-md hover:bg-blue-100"
                                    }}
                                >
                                    {format!("{}x", option)}
                                </button>
                            }
                        }).collect::<Html>()}
                    </div>
                </div>

                <div class="bg-gray-50 rounded-lg p-4 space-y-2 text-sm">
                    <DetailRow label="Position Size" value={format_usd(preview.notional)} />
                    <DetailRow label="Size" value={format!("{:.4} {}", size_in_base, market.symbol.trim_end_matches("-PERP"))} />
                    <DetailRow label="Entry Price" value={format_usd(market.mark_price)} />
                    <DetailRow label="Max Leverage" value={format!("{}x", market.max_leverage)} />
                </div>

                <button
                    type="submit"
                    class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                >
                    {format!("Open {}", side.as_str())}
                </button>
            </form>
        </div>
    }
}

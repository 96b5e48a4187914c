use crate::calc::{loop_projection, parse_amount_or_zero};
use crate::components::cards::{DetailRow, ErrorPanel};
use crate::components::form::AmountInput;
use crate::config::use_app_config;
use crate::risk::Trend;
use crate::services::MockDataService;
use crate::types::*;
use yew::prelude::*;

#[function_component(Looper)]
pub fn looper() -> Html {
    let config = use_app_config();
    let assets = use_memo((), |_| MockDataService::assets());
    let selected = use_state(|| 0usize);
    let deposit = use_state(String::new);
    let loops = use_state(|| 3u32);

    let assets = match &*assets {
        Ok(assets) => assets,
        Err(e) => return html! { <ErrorPanel message={e.to_string()} /> },
    };
    let Some(asset) = assets.get(*selected).or_else(|| assets.first()) else {
        return html! {
            <div class="bg-gray-50 rounded-lg p-8 text-center text-gray-500">
                {"No loopable assets are available."}
            </div>
        };
    };

    let projection = loop_projection(
        parse_amount_or_zero(&deposit),
        asset.collateral_factor,
        *loops,
        asset.supply_apy,
        asset.borrow_apy,
    );
    let net_trend = Trend::from_value(projection.net_apy);

    let on_deposit = {
        let deposit = deposit.clone();
        Callback::from(move |value: String| deposit.set(value))
    };

    let on_loops = {
        let loops = loops.clone();
        let max_loops = config.max_loops;
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                if let Ok(value) = input.value().parse::<u32>() {
                    loops.set(value.min(max_loops));
                }
            }
        })
    };

    let on_submit = {
        let deposit = deposit.clone();
        let loops = loops.clone();
        let symbol = asset.symbol.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!(
                "Loop requested: {} {} over {} loops",
                parse_amount_or_zero(&deposit),
                symbol,
                *loops
            );
        })
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
                <h2 class="text-xl font-semibold text-gray-900">{"Looper"}</h2>
                <p class="text-sm text-gray-600">
                    {"Supply an asset, borrow against it and re-supply the proceeds to multiply exposure to the supply rate."}
                </p>

                <div class="flex flex-wrap gap-2">
                    {assets.iter().enumerate().map(|(i, row)| {
                        let selected = selected.clone();
                        let active = row.symbol == asset.symbol;
                        html! {
                            <button
                                key={row.symbol.clone()}
                                type="button"
                                onclick={Callback::from(move |_: MouseEvent| selected.set(i))}
                                class={if active {
                                    "px-3 py-1 text-sm font-medium text-white bg-blue-600 rounded-md"
                                } else {
                                    "px-3 py-1 text-sm font-medium text-blue-700 bg-blue-50 rounded-md hover:bg-blue-100"
                                }}
                            >
                                {&row.symbol}
                            </button>
                        }
                    }).collect::<Html>()}
                </div>

                <AmountInput label="Deposit" value={(*deposit).clone()} on_change={on_deposit} symbol={asset.symbol.clone()} />

                <div>
                    <label class="block text-sm font-medium text-gray-700">
                        {format!("Loops: {}", *loops)}
                    </label>
                    <input
                        type="range"
                        min="0"
                        max={config.max_loops.to_string()}
                        value={(*loops).to_string()}
                        oninput={on_loops}
                        class="mt-1 w-full"
                    />
                </div>

                <button
                    type="submit"
                    class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                >
                    {"Start Loop"}
                </button>
            </form>

            <div class="bg-white shadow rounded-lg p-6">
                <h3 class="text-lg font-medium text-gray-900 mb-4">{"Projection"}</h3>
                <div class="space-y-2 text-sm">
                    <DetailRow label="Effective Leverage" value={format!("{:.2}x", projection.leverage)} />
                    <DetailRow label="Total Supplied" value={format!("{:.4} {}", projection.total_supplied, asset.symbol)} />
                    <DetailRow label="Total Borrowed" value={format!("{:.4} {}", projection.total_borrowed, asset.symbol)} />
                    <DetailRow label="Supply APY" value={format_apy(asset.supply_apy)} />
                    <DetailRow label="Borrow APY" value={format_apy(asset.borrow_apy)} />
                    <DetailRow
                        label="Net APY"
                        value={Trend::format_percent(projection.net_apy)}
                        value_class={classes!(net_trend.text_class())}
                    />
                </div>
                <p class="mt-4 text-xs text-gray-500">
                    {"Projection assumes constant rates and ignores price movement of the collateral."}
                </p>
            </div>
        </div>
    }
}

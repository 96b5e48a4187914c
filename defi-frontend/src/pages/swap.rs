use crate::calc::{parse_amount_or_zero, swap_quote};
use crate::components::cards::{DetailRow, ErrorPanel};
use crate::components::form::AmountInput;
use crate::config::use_app_config;
use crate::services::MockDataService;
use crate::types::*;
use yew::prelude::*;

const SLIPPAGE_PRESETS: &[&str] = &["0.1", "0.5", "1.0"];

#[derive(Properties, PartialEq)]
struct TokenSelectProps {
    label: AttrValue,
    assets: Vec<Asset>,
    selected: usize,
    on_select: Callback<usize>,
}

#[function_component(TokenSelect)]
fn token_select(props: &TokenSelectProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Ok(index) = select.value().parse::<usize>() {
                    on_select.emit(index);
                }
            }
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{&props.label}</label>
            <select
                {onchange}
                class="mt-1 block w-full border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500"
            >
                {props.assets.iter().enumerate().map(|(i, asset)| html! {
                    <option key={asset.symbol.clone()} value={i.to_string()} selected={i == props.selected}>
                        {format!("{} ({})", asset.symbol, asset.name)}
                    </option>
                }).collect::<Html>()}
            </select>
        </div>
    }
}

#[function_component(Swap)]
pub fn swap() -> Html {
    let config = use_app_config();
    let assets = use_memo((), |_| MockDataService::assets());
    let from = use_state(|| 0usize);
    let to = use_state(|| 1usize);
    let amount = use_state(String::new);
    let slippage = use_state(|| config.default_slippage.clone());

    let assets = match &*assets {
        Ok(assets) => assets,
        Err(e) => return html! { <ErrorPanel message={e.to_string()} /> },
    };
    let (Some(from_asset), Some(to_asset)) = (assets.get(*from), assets.get(*to)) else {
        return html! {
            <div class="bg-gray-50 rounded-lg p-8 text-center text-gray-500">
                {"At least two tokens are required to swap."}
            </div>
        };
    };

    let quote = swap_quote(
        parse_amount_or_zero(&amount),
        from_asset.price,
        to_asset.price,
        parse_amount_or_zero(&slippage),
    );

    let on_from = {
        let from = from.clone();
        Callback::from(move |index: usize| from.set(index))
    };
    let on_to = {
        let to = to.clone();
        Callback::from(move |index: usize| to.set(index))
    };
    let on_flip = {
        let from = from.clone();
        let to = to.clone();
        Callback::from(move |_: MouseEvent| {
            let previous_from = *from;
            from.set(*to);
            to.set(previous_from);
        })
    };
    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |value: String| amount.set(value))
    };
    let on_slippage = {
        let slippage = slippage.clone();
        Callback::from(move |value: String| slippage.set(value))
    };

    let on_submit = {
        let amount = amount.clone();
        let slippage = slippage.clone();
        let from_symbol = from_asset.symbol.clone();
        let to_symbol = to_asset.symbol.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!(
                "Swap requested: {} {} -> {} (slippage {}%)",
                parse_amount_or_zero(&amount),
                from_symbol,
                to_symbol,
                parse_amount_or_zero(&slippage)
            );
        })
    };

    html! {
        <div class="max-w-lg mx-auto">
            <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
                <h2 class="text-xl font-semibold text-gray-900">{"Swap"}</h2>

                <TokenSelect label="From" assets={assets.clone()} selected={*from} on_select={on_from} />
                <AmountInput
                    label="Amount"
                    value={(*amount).clone()}
                    on_change={on_amount}
                    symbol={from_asset.symbol.clone()}
                />

                <div class="flex justify-center">
                    <button
                        type="button"
                        onclick={on_flip}
                        class="p-2 rounded-full bg-gray-100 hover:bg-gray-200 text-gray-700"
                        aria-label="Flip tokens"
                    >
                        {"⇅"}
                    </button>
                </div>

                <TokenSelect label="To" assets={assets.clone()} selected={*to} on_select={on_to} />

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Slippage Tolerance"}</label>
                    <div class="flex items-center space-x-2">
                        {SLIPPAGE_PRESETS.iter().map(|preset| {
                            let slippage = slippage.clone();
                            let active = slippage.as_str() == *preset;
                            let value = preset.to_string();
                            html! {
                                <button
                                    key={*preset}
                                    type="button"
                                    onclick={Callback::from(move |_: MouseEvent| slippage.set(value.clone()))}
                                    class={if active {
                                        "px-3 py-1 text-sm font-medium text-white bg-blue-600 rounded-md"
                                    } else {
                                        "px-3 py-1 text-sm font-medium text-blue-700 bg-blue-50 rounded-md hover:bg-blue-100"
                                    }}
                                >
                                    {format!("{}%", preset)}
                                </button>
                            }
                        }).collect::<Html>()}
                        <div class="flex-1">
                            <AmountInput label="Custom" value={(*slippage).clone()} on_change={on_slippage} symbol="%" />
                        </div>
                    </div>
                </div>

                <div class="bg-gray-50 rounded-lg p-4 space-y-2 text-sm">
                    if let Some(quote) = quote {
                        <DetailRow label="Rate" value={format!("1 {} = {:.6} {}", from_asset.symbol, quote.rate, to_asset.symbol)} />
                        <DetailRow label="You Receive" value={format!("{:.6} {}", quote.output, to_asset.symbol)} />
                        <DetailRow label="Minimum Received" value={format!("{:.6} {}", quote.minimum_received, to_asset.symbol)} />
                    } else {
                        <div class="text-gray-500">{"No price available for this pair."}</div>
                    }
                </div>

                <button
                    type="submit"
                    disabled={*from == *to}
                    class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400"
                >
                    {if *from == *to { "Select different tokens" } else { "Swap" }}
                </button>
            </form>
        </div>
    }
}

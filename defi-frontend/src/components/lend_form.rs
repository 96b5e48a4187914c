use crate::calc::{estimate_interest, parse_amount_or_zero};
use crate::components::cards::DetailRow;
use crate::components::form::{AmountInput, Toggle};
use crate::config::use_app_config;
use crate::types::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LendFormProps {
    pub asset: Asset,
}

#[function_component(LendForm)]
pub fn lend_form(props: &LendFormProps) -> Html {
    let config = use_app_config();
    let amount = use_state(String::new);
    let use_as_collateral = use_state(|| true);

    let estimate = estimate_interest(parse_amount_or_zero(&amount), props.asset.supply_apy);

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |value: String| amount.set(value))
    };

    let on_max = {
        let amount = amount.clone();
        let balance = config.wallet_balance;
        Callback::from(move |_: MouseEvent| amount.set(format_amount(balance)))
    };

    let on_collateral = {
        let use_as_collateral = use_as_collateral.clone();
        Callback::from(move |enabled: bool| use_as_collateral.set(enabled))
    };

    let on_submit = {
        let amount = amount.clone();
        let use_as_collateral = use_as_collateral.clone();
        let symbol = props.asset.symbol.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!(
                "Supply requested: {} {} (collateral: {})",
                parse_amount_or_zero(&amount),
                symbol,
                *use_as_collateral
            );
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-gray-900">{format!("Supply {}", props.asset.symbol)}</h3>

            <div class="flex items-end space-x-2">
                <div class="flex-1">
                    <AmountInput
                        label="Amount"
                        value={(*amount).clone()}
                        on_change={on_amount}
                        symbol={props.asset.symbol.clone()}
                        hint={format!("Wallet: {}", format_amount(config.wallet_balance))}
                    />
                </div>
                <button
                    type="button"
                    onclick={on_max}
                    class="px-3 py-2 text-sm font-medium text-blue-700 bg-blue-50 rounded-md hover:bg-blue-100"
                >
                    {"MAX"}
                </button>
            </div>

            <Toggle label="Use as collateral" enabled={*use_as_collateral} on_toggle={on_collateral} />

            <div class="bg-gray-50 rounded-lg p-4 space-y-2 text-sm">
                <DetailRow label="Supply APY" value={format_apy(props.asset.supply_apy)} value_class={classes!("text-green-600")} />
                <DetailRow label="Estimated Annual" value={format_usd(estimate.annual)} />
                <DetailRow label="Estimated Daily" value={format_usd_precise(estimate.daily)} />
                <DetailRow label="Collateral Factor" value={format_percent(props.asset.collateral_factor * 100.0)} />
            </div>

            <button
                type="submit"
                class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
            >
                {"Supply"}
            </button>
        </form>
    }
}

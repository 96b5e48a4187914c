use crate::calc::{estimate_interest, parse_amount_or_zero, quick_amount, QuickAmount};
use crate::components::cards::DetailRow;
use crate::components::form::AmountInput;
use crate::config::use_app_config;
use crate::risk::RiskLevel;
use crate::types::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BorrowFormProps {
    pub asset: Asset,
}

#[function_component(BorrowForm)]
pub fn borrow_form(props: &BorrowFormProps) -> Html {
    let config = use_app_config();
    let amount = use_state(String::new);

    let estimate = estimate_interest(parse_amount_or_zero(&amount), props.asset.borrow_apy);

    // Placeholder figures; they do not depend on the entered amount.
    let health_factor = config.placeholder_health_factor;
    let risk = RiskLevel::from_health_factor(health_factor, &config.risk);

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |value: String| amount.set(value))
    };

    let on_submit = {
        let amount = amount.clone();
        let symbol = props.asset.symbol.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("Borrow requested: {} {}", parse_amount_or_zero(&amount), symbol);
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-gray-900">{format!("Borrow {}", props.asset.symbol)}</h3>

            <AmountInput
                label="Amount"
                value={(*amount).clone()}
                on_change={on_amount}
                symbol={props.asset.symbol.clone()}
                hint={format!("Limit: {}", format_amount(config.borrow_limit))}
            />

            <div class="grid grid-cols-4 gap-2">
                {QuickAmount::ALL.iter().map(|choice| {
                    let choice = *choice;
                    let amount = amount.clone();
                    let limit = config.borrow_limit;
                    let onclick = Callback::from(move |_: MouseEvent| {
                        amount.set(format_amount(quick_amount(limit, choice)));
                    });
                    html! {
                        <button
                            key={choice.label()}
                            type="button"
                            {onclick}
                            class="py-1 text-sm font-medium text-blue-700 bg-blue-50 rounded-md hover:bg-blue-100"
                        >
                            {choice.label()}
                        </button>
                    }
                }).collect::<Html>()}
            </div>

            <div class="bg-gray-50 rounded-lg p-4 space-y-2 text-sm">
                <DetailRow label="Borrow APY" value={format_apy(props.asset.borrow_apy)} value_class={classes!("text-red-600")} />
                <DetailRow label="Estimated Annual Interest" value={format_usd(estimate.annual)} />
                <DetailRow label="Estimated Daily Interest" value={format_usd_precise(estimate.daily)} />
                <div class="flex justify-between items-center">
                    <span class="text-gray-600">{"Health Factor"}</span>
                    <span class="flex items-center space-x-2">
                        <span class={classes!("font-medium", risk.text_class())}>{format!("{:.2}", health_factor)}</span>
                        <span class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", risk.badge_class())}>
                            {risk.label()}
                        </span>
                    </span>
                </div>
                <DetailRow label="Liquidation Price" value={format_usd(config.placeholder_liquidation_price)} />
                <DetailRow label="Liquidation Penalty" value={format_percent(props.asset.liquidation_penalty)} />
            </div>

            <button
                type="submit"
                class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
            >
                {"Borrow"}
            </button>
        </form>
    }
}

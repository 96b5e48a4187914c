use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AmountInputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub symbol: Option<AttrValue>,
    #[prop_or(AttrValue::Static("0.00"))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(AmountInput)]
pub fn amount_input(props: &AmountInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <div>
            <div class="flex justify-between">
                <label class="block text-sm font-medium text-gray-700">{&props.label}</label>
                if let Some(hint) = &props.hint {
                    <span class="text-xs text-gray-500">{hint}</span>
                }
            </div>
            <div class="mt-1 flex rounded-md shadow-sm">
                <input
                    type="number"
                    min="0"
                    step="any"
                    value={props.value.clone()}
                    {oninput}
                    class="flex-1 block w-full border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500"
                    placeholder={props.placeholder.clone()}
                />
                if let Some(symbol) = &props.symbol {
                    <span class="inline-flex items-center px-3 text-sm text-gray-500">{symbol}</span>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub label: AttrValue,
    pub enabled: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let enabled = props.enabled;
        Callback::from(move |_: MouseEvent| on_toggle.emit(!enabled))
    };

    html! {
        <div class="flex items-center justify-between">
            <span class="text-sm text-gray-700">{&props.label}</span>
            <button
                type="button"
                {onclick}
                class={if props.enabled {
                    "relative inline-flex h-6 w-11 items-center rounded-full bg-blue-600"
                } else {
                    "relative inline-flex h-6 w-11 items-center rounded-full bg-gray-300"
                }}
                aria-pressed={props.enabled.to_string()}
            >
                <span class={if props.enabled {
                    "inline-block h-4 w-4 transform rounded-full bg-white translate-x-6"
                } else {
                    "inline-block h-4 w-4 transform rounded-full bg-white translate-x-1"
                }}></span>
            </button>
        </div>
    }
}

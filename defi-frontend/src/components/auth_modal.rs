use yew::prelude::*;

struct WalletOption {
    name: &'static str,
    description: &'static str,
}

const WALLET_OPTIONS: &[WalletOption] = &[
    WalletOption {
        name: "Phantom",
        description: "Browser extension and mobile",
    },
    WalletOption {
        name: "Solflare",
        description: "Browser extension and mobile",
    },
    WalletOption {
        name: "Backpack",
        description: "Browser extension",
    },
    WalletOption {
        name: "Ledger",
        description: "Hardware wallet",
    },
];

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Wallet picker. Selecting a wallet is recorded in the log only.
#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = on_backdrop.clone();
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50"
            onclick={on_backdrop}
        >
            <div class="bg-white shadow rounded-lg p-6 w-full max-w-md" onclick={keep_open}>
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{"Connect a wallet"}</h3>
                    <button
                        onclick={on_close_button}
                        class="text-gray-400 hover:text-gray-600"
                        aria-label="Close"
                    >
                        {"✕"}
                    </button>
                </div>
                <div class="space-y-2">
                    {WALLET_OPTIONS.iter().map(|wallet| {
                        let name = wallet.name;
                        let on_select = Callback::from(move |_: MouseEvent| {
                            log::info!("Wallet selected: {}", name);
                        });
                        html! {
                            <button
                                key={name}
                                onclick={on_select}
                                class="w-full flex justify-between items-center px-4 py-3 border border-gray-200 rounded-md hover:bg-gray-50"
                            >
                                <span class="font-medium text-gray-900">{name}</span>
                                <span class="text-sm text-gray-500">{wallet.description}</span>
                            </button>
                        }
                    }).collect::<Html>()}
                </div>
                <p class="mt-4 text-xs text-gray-500">
                    {"By connecting a wallet you agree to the Terms of Service."}
                </p>
            </div>
        </div>
    }
}

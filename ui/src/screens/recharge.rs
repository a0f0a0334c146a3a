//=============================================================================
// File: src/screens/recharge.rs
//=============================================================================
use crate::app_state::AppState;
use crate::backend;
use crate::components::amount::Amount;
use crate::components::amount::AmountFormat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::hooks::use_toast::use_toast;
use api::recharge::validate_amount;
use api::recharge::RechargeError;
use api::recharge::PRESET_AMOUNTS;
use api::rupee_amount::RupeeAmount;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RechargePhase {
    #[default]
    Idle,
    /// Waiting on the simulated gateway. The pay button is disabled.
    Processing,
}

/// The recharge form's state, kept as one value so its transitions can be
/// exercised without a renderer.
#[derive(Clone, PartialEq, Debug)]
pub struct RechargeForm {
    pub vehicle_number: String,
    pub amount: String,
    pub selected_preset: Option<i64>,
    pub phase: RechargePhase,
}

impl RechargeForm {
    pub fn new(vehicle_number: impl Into<String>) -> Self {
        Self {
            vehicle_number: vehicle_number.into(),
            amount: String::new(),
            selected_preset: None,
            phase: RechargePhase::Idle,
        }
    }

    pub fn select_preset(&mut self, preset: i64) {
        self.amount = preset.to_string();
        self.selected_preset = Some(preset);
    }

    /// A typed amount always deselects the preset, even if it happens to match.
    pub fn set_amount(&mut self, value: String) {
        self.amount = value;
        self.selected_preset = None;
    }

    pub fn validated_amount(&self) -> Result<RupeeAmount, RechargeError> {
        validate_amount(&self.amount)
    }

    pub fn can_submit(&self) -> bool {
        self.phase == RechargePhase::Idle && self.validated_amount().is_ok()
    }

    /// Moves to `Processing` if the amount is valid. Refused while a payment
    /// is already processing.
    pub fn begin(&mut self) -> Result<RupeeAmount, RechargeError> {
        if self.phase == RechargePhase::Processing {
            return Err(RechargeError::AlreadyProcessing);
        }
        let amount = self.validated_amount()?;
        self.phase = RechargePhase::Processing;
        Ok(amount)
    }

    /// Back to `Idle` with a cleared amount. The vehicle number is kept.
    pub fn finish(&mut self) {
        self.amount.clear();
        self.selected_preset = None;
        self.phase = RechargePhase::Idle;
    }

    /// The pay button caption.
    pub fn pay_label(&self) -> String {
        match self.phase {
            RechargePhase::Processing => "Processing Payment...".to_string(),
            RechargePhase::Idle if self.amount.trim().is_empty() => "Pay ₹0".to_string(),
            RechargePhase::Idle => format!("Pay ₹{}", self.amount.trim()),
        }
    }
}

#[component]
pub fn RechargeScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut toaster = use_toast();
    let mut form = use_signal({
        let vehicle = app_state.profile.vehicle_number.clone();
        move || RechargeForm::new(vehicle)
    });

    let on_pay = move |_: MouseEvent| {
        let begun = form.with_mut(|f| f.begin());
        let amount = match begun {
            Ok(amount) => amount,
            Err(RechargeError::AlreadyProcessing) => {
                debug!("pay pressed while a recharge is in flight");
                return;
            }
            Err(e) => {
                warn!("recharge rejected: {}", e);
                toaster.destructive("Invalid Amount", e.to_string());
                return;
            }
        };
        let vehicle_number = form.peek().vehicle_number.clone();
        let state = app_state.clone();

        // Scoped to this screen: switching tabs mid-payment drops the task.
        spawn(async move {
            let receipt = backend::recharge(state, vehicle_number, amount).await;
            form.with_mut(|f| f.finish());
            info!("recharge of {} completed", receipt.amount.to_string_with_symbol());
            toaster.success(
                "Recharge Successful! 🎉",
                format!(
                    "{} has been added to your FASTag balance",
                    receipt.amount.to_string_compact()
                ),
            );
        });
    };

    let snapshot = form.read().clone();
    let processing = snapshot.phase == RechargePhase::Processing;

    rsx! {
        div {
            class: "pq-screen",

            // Header
            div {
                class: "pq-center",
                div { class: "pq-logo-icon", "⚡" }
                h1 { class: "pq-title", "Recharge FASTag" }
                p { class: "pq-muted", "Add money to your FASTag for seamless toll payments" }
            }

            // Vehicle Details
            Card {
                Input {
                    label: "Vehicle Number",
                    name: "vehicle",
                    value: "{snapshot.vehicle_number}",
                    placeholder: "Enter vehicle number",
                    class: "pq-vehicle",
                    on_input: move |evt: FormEvent| form.with_mut(|f| f.vehicle_number = evt.value()),
                }
            }

            // Amount Selection
            Card {
                label { class: "pq-strong", "Select Amount" }
                Grid {
                    columns: 3,
                    for preset in PRESET_AMOUNTS {
                        Button {
                            key: "{preset}",
                            button_type: ButtonType::Primary,
                            outline: snapshot.selected_preset != Some(preset),
                            class: "pq-preset",
                            on_click: move |_| form.with_mut(|f| f.select_preset(preset)),
                            Amount {
                                amount: RupeeAmount::from_rupees(preset),
                                format: AmountFormat::Compact,
                            }
                        }
                    }
                }
                Input {
                    label: "Or enter custom amount",
                    name: "amount",
                    input_type: "number",
                    value: "{snapshot.amount}",
                    placeholder: "0",
                    icon: "₹",
                    class: "pq-amount-input",
                    on_input: move |evt: FormEvent| form.with_mut(|f| f.set_amount(evt.value())),
                }
            }

            // Payment Method
            Card {
                label { class: "pq-strong", "Payment Method" }
                div {
                    class: "pq-row pq-payment-method",
                    div { class: "pq-tx-icon", "💳" }
                    div {
                        class: "pq-grow",
                        p { class: "pq-strong", "UPI / Cards" }
                        p { class: "pq-muted pq-small", "Secure payment gateway" }
                    }
                    div { class: "pq-dot" }
                }
            }

            Button {
                button_type: ButtonType::Primary,
                class: "pq-pay",
                disabled: !snapshot.can_submit(),
                on_click: on_pay,
                if processing {
                    span { class: "pq-spinner", "aria-busy": "true" }
                }
                "{snapshot.pay_label()}"
            }

            p {
                class: "pq-center pq-muted pq-small",
                "Your payment is secured with 256-bit SSL encryption"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RechargeForm {
        RechargeForm::new("HR 26 DQ 1234")
    }

    #[test]
    fn preset_sets_amount_and_typing_clears_selection() {
        let mut f = form();
        f.select_preset(500);
        assert_eq!(f.amount, "500");
        assert_eq!(f.selected_preset, Some(500));

        f.set_amount("500".to_string());
        assert_eq!(f.selected_preset, None);
        assert_eq!(f.amount, "500");
    }

    #[test]
    fn submit_gate_follows_validation() {
        let mut f = form();
        assert!(!f.can_submit());
        for (input, ok) in [("9", false), ("10", true), ("", false), ("abc", false)] {
            f.set_amount(input.to_string());
            assert_eq!(f.can_submit(), ok, "amount {input:?}");
        }
    }

    #[test]
    fn idle_processing_idle() {
        let mut f = form();
        f.select_preset(1000);
        assert_eq!(f.pay_label(), "Pay ₹1000");

        let amount = f.begin().unwrap();
        assert_eq!(amount, RupeeAmount::from_rupees(1000));
        assert_eq!(f.phase, RechargePhase::Processing);
        assert!(!f.can_submit());
        assert_eq!(f.pay_label(), "Processing Payment...");

        f.finish();
        assert_eq!(f.phase, RechargePhase::Idle);
        assert!(f.amount.is_empty());
        assert_eq!(f.selected_preset, None);
        assert_eq!(f.vehicle_number, "HR 26 DQ 1234");
        assert_eq!(f.pay_label(), "Pay ₹0");
    }

    #[test]
    fn second_begin_while_processing_is_refused() {
        let mut f = form();
        f.select_preset(100);
        assert_eq!(f.begin(), Ok(RupeeAmount::from_rupees(100)));
        assert_eq!(f.begin(), Err(RechargeError::AlreadyProcessing));
        assert_eq!(f.phase, RechargePhase::Processing);

        f.finish();
        f.select_preset(200);
        assert_eq!(f.begin(), Ok(RupeeAmount::from_rupees(200)));
    }

    #[test]
    fn blank_amount_shows_zero_on_pay_button() {
        let mut f = form();
        f.set_amount("   ".to_string());
        assert_eq!(f.pay_label(), "Pay ₹0");
        f.set_amount(" 250 ".to_string());
        assert_eq!(f.pay_label(), "Pay ₹250");
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let mut f = form();
        f.set_amount("9".to_string());
        assert!(matches!(f.begin(), Err(RechargeError::BelowMinimum { .. })));
        assert_eq!(f.phase, RechargePhase::Idle);
        assert_eq!(f.amount, "9");
    }
}

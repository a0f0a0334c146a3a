//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They define common UI elements like buttons, inputs, cards, amounts and toasts.
pub mod action_link;
pub mod amount;
pub mod empty_state;
pub mod pico;
pub mod toast;

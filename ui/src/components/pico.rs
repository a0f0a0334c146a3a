//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A responsive grid layout.
#[component]
pub fn Grid(#[props(default = 2)] columns: u8, children: Element) -> Element {
    rsx! {
        div {
            class: "pq-grid",
            style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
            {children}
        }
    }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! { article { class: "pq-card {class}", {children} } }
}

/// A small pill label, e.g. a transaction status.
#[component]
pub fn Badge(children: Element) -> Element {
    rsx! { mark { class: "pq-badge", {children} } }
}

/// A grey placeholder block shown while content loads.
#[component]
pub fn Skeleton(width: String, height: String) -> Element {
    rsx! {
        div {
            class: "pq-skeleton",
            style: "width: {width}; height: {height};",
            "aria-busy": "true",
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    /// No border or fill; used for icon buttons on coloured cards.
    Ghost,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "pq-button",
            ButtonType::Ghost => "pq-ghost",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(default)]
    class: String,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        "secondary outline"
    } else {
        props.button_type.to_class()
    };
    rsx! {
        button {
            class: "{class_str} {props.class}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    #[props(default)]
    label: String,
    name: String,
    value: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    /// A glyph drawn inside the field on the left.
    #[props(optional)]
    icon: Option<String>,
    #[props(default = false)]
    disabled: bool,
    #[props(default)]
    class: String,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    let has_icon = props.icon.is_some();
    let placeholder = props.placeholder.clone().unwrap_or_default();
    rsx! {
        label {
            r#for: "{props.name}",
            if !props.label.is_empty() {
                "{props.label}"
            }
            div {
                class: if has_icon { "pq-input-wrap with-icon" } else { "pq-input-wrap" },
                if let Some(icon) = &props.icon {
                    span { class: "pq-input-icon", "{icon}" }
                }
                input {
                    id: "{props.name}",
                    r#type: "{props.input_type}",
                    name: "{props.name}",
                    class: "{props.class}",
                    value: "{props.value}",
                    placeholder: "{placeholder}",
                    disabled: props.disabled,
                    oninput: move |evt| {
                        if let Some(handler) = &props.on_input {
                            handler.call(evt);
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SwitchProps {
    name: String,
    checked: bool,
    on_change: EventHandler<bool>,
}

/// Pico's `role="switch"` checkbox.
pub fn Switch(props: SwitchProps) -> Element {
    rsx! {
        input {
            r#type: "checkbox",
            role: "switch",
            name: "{props.name}",
            checked: props.checked,
            onchange: move |evt: FormEvent| props.on_change.call(evt.checked()),
        }
    }
}

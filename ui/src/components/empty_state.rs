use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<Element>,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "pq-card pq-empty-state",

            // Icon Container
            if let Some(icon) = props.icon {
                div {
                    class: "pq-empty-icon",
                    {icon}
                }
            }

            h4 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    class: "pq-muted",
                    style: "margin: 0 auto;",
                    "{desc}"
                }
            }
        }
    }
}

use crate::components::BounceButton;
use dioxus::prelude::*;

const MINTY_THEME: &str = "https://cdn.jsdelivr.net/npm/bootswatch@5.3.3/dist/minty/bootstrap.min.css";

/// The Home page component that will be rendered when the current route is `[Route::Home]`
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Stylesheet { href: MINTY_THEME }
        div {
            class: "container-fluid",
            div {
                class: "row",
                div {
                    class: "col-12",
                    h1 {
                        class: "text-center my-4",
                        "Welcome to Dash Customization Demo!"
                    }
                }
            }
            div {
                class: "row",
                div {
                    class: "col-12",
                    BounceButton {
                        id: "custom-button".to_string(),
                        label: "Click Me!",
                        color: "primary".to_string(),
                        class_name: "btn btn-primary w-100 mt-4 mb-4".to_string(),
                    }
                }
            }
        }
    }
}

use leptos::prelude::*;
use leptos_use::{use_mouse, UseMouseReturn};

#[cfg(feature = "hydrate")]
const INTERACTIVE: &str = r#"a, button, input, textarea, [role="button"]"#;

/// Outline ring that trails the pointer plus a dot that follows it exactly.
/// The ring's lag comes from its CSS transition on `left`/`top`.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    #[allow(unused_variables)]
    let (hovering, set_hovering) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;
        use leptos_use::{use_document, use_event_listener};
        use wasm_bindgen::JsCast;

        let _ = use_event_listener(use_document(), ev::mouseover, move |ev| {
            let over_interactive = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
                .is_some();
            set_hovering.set(over_interactive);
        });
    }

    let left = move || format!("{}px", x.get());
    let top = move || format!("{}px", y.get());

    view! {
        <div class="hidden md:block" aria-hidden="true">
            <div
                class=move || {
                    if hovering.get() {
                        "custom-cursor cursor-hover"
                    } else {
                        "custom-cursor"
                    }
                }
                style:left=left
                style:top=top
            ></div>
            <div class="custom-cursor-dot" style:left=left style:top=top></div>
        </div>
    }
}

use leptos::html;
use leptos::prelude::*;

/// Delay between consecutive items revealed inside one container.
pub const STAGGER_MS: u32 = 200;

/// Delay before the item at `index` starts its entrance transition.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

#[must_use]
pub fn reveal_item_style(index: usize) -> String {
    format!("--reveal-delay: {}ms", stagger_delay_ms(index))
}

#[cfg(feature = "hydrate")]
mod observer {
    use wasm_bindgen::prelude::wasm_bindgen;
    use wasm_bindgen::JsValue;

    #[wasm_bindgen(inline_js = "export function observe_reveal(el, amount) {
        const observer = new IntersectionObserver((entries) => {
            for (const entry of entries) {
                if (entry.isIntersecting) {
                    entry.target.classList.add('is-visible');
                    observer.unobserve(entry.target);
                }
            }
        }, { threshold: amount });
        observer.observe(el);
    }")]
    extern "C" {
        pub fn observe_reveal(el: &JsValue, amount: f64);
    }
}

/// Fades and slides its children in the first time `amount` of the wrapper
/// is inside the viewport. Content is only hidden once the client has armed
/// the wrapper, so server output stays readable without the wasm bundle.
#[component]
pub fn Reveal(
    /// Fraction of the wrapper that must be visible, between 0 and 1
    #[prop(default = 0.2)]
    amount: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let armed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            armed.set(true);
            let el: &wasm_bindgen::JsValue = el.as_ref();
            observer::observe_reveal(el, amount);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = amount;

    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    view! {
        <div node_ref=node_ref class=class class:armed=move || armed.get()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_per_item() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 200);
        assert_eq!(stagger_delay_ms(2), 400);
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn item_style_sets_delay_variable() {
        assert_eq!(reveal_item_style(3), "--reveal-delay: 600ms");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn server_render_is_not_armed() {
        let html = Owner::new().with(|| {
            view! {
                <Reveal class="intro">
                    <p>"hello"</p>
                </Reveal>
            }
            .to_html()
        });

        assert!(html.contains("reveal intro"));
        assert!(html.contains("hello"));
        assert!(!html.contains("armed"));
        assert!(!html.contains("is-visible"));
    }
}

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: &'static str,
    /// Optional description under the title
    #[prop(optional)]
    description: Option<&'static str>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
    /// Whether to show close button in header
    #[prop(default = true)]
    show_close_button: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center modal-backdrop bg-black/30 transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center modal-backdrop bg-black/30 opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            // Closed dialogs stay in the DOM; keep their controls out of tab order
            inert=move || !is_open.get()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div
                class=format!("w-full {} rounded-xl bg-white shadow-card overflow-hidden animate-in fade-in zoom-in-90", max_width)
                role="dialog"
                aria-modal="true"
            >
                // Header
                <div class="flex flex-row items-center justify-between px-6 pt-6 pb-2">
                    <h2 class="font-heading text-xl text-genlingo-red">{title}</h2>
                    {show_close_button.then(|| view! {
                        <button
                            type="button"
                            class="rounded-full p-2 hover:bg-light-red focus:outline-none focus:ring-2 focus:ring-genlingo-red"
                            on:click=move |_| on_close.run(())
                            aria-label="Close"
                        >
                            <Icon name=icons::X class="w-5 h-5"/>
                        </button>
                    })}
                </div>
                {description.map(|d| view! { <p class="px-6 text-neutral-5 pb-2">{d}</p> })}

                // Content
                {children()}
            </div>
        </div>
    }
}

/// Confirmation dialog modal
#[component]
pub fn ConfirmDialog(
    /// Dialog title
    title: &'static str,
    /// Dialog message
    message: &'static str,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when confirmed
    on_confirm: Callback<()>,
    /// Callback when cancelled
    on_cancel: Callback<()>,
    /// Confirm button text
    #[prop(default = "Confirm")]
    confirm_text: &'static str,
    /// Cancel button text
    #[prop(default = "Cancel")]
    cancel_text: &'static str,
    /// Prefix for the buttons' `data-testid`
    #[prop(default = "dialog")]
    test_id: &'static str,
) -> impl IntoView {
    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=on_cancel
            max_width="max-w-sm"
            show_close_button=false
        >
            <div class="p-8 pt-2 flex flex-col items-center gap-4">
                <p class="font-body text-neutral-6 text-center">{message}</p>

                <div class="flex gap-4 mt-2">
                    <button
                        type="button"
                        class="bg-genlingo-red hover:bg-error text-white rounded-genlingo px-6 py-2 font-bold shadow-button"
                        on:click=move |_| on_confirm.run(())
                        data-testid=format!("{}-confirm", test_id)
                    >
                        {confirm_text}
                    </button>
                    <button
                        type="button"
                        class="bg-neutral-1 text-neutral-7 rounded-genlingo px-6 py-2 font-bold"
                        on:click=move |_| on_cancel.run(())
                        data-testid=format!("{}-cancel", test_id)
                    >
                        {cancel_text}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(open: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <BaseModal
                    title="Share Your Thoughts"
                    is_open=Signal::stored(open)
                    on_close=Callback::new(|_: ()| {})
                >
                    <button type="submit">"Submit Feedback"</button>
                </BaseModal>
            }
            .to_html()
        })
    }

    #[test]
    fn test_closed_modal_is_inert() {
        let html = render(false);
        assert!(html.contains("inert"));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_open_modal_is_interactive() {
        let html = render(true);
        assert!(!html.contains("inert"));
        assert!(html.contains("Submit Feedback"));
    }
}

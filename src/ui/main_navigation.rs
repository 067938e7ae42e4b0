//! Main navigation: bottom tab bar on mobile, left sidebar on desktop

use leptos::prelude::*;

use crate::core::Tab;
use crate::ui::icon::{Icon, icons};

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Learn => icons::HOME,
        Tab::Scenarios => icons::BOOK_OPEN,
        Tab::Profile => icons::USER,
    }
}

/// Visual variant of the navigation bar
#[derive(Clone, Copy, PartialEq, Eq)]
enum NavLayout {
    BottomBar,
    Sidebar,
}

impl NavLayout {
    fn container_class(self) -> &'static str {
        match self {
            NavLayout::BottomBar => {
                "fixed bottom-0 left-0 right-0 z-40 flex sm:hidden bg-white/90 border-t border-neutral-2 shadow-card h-16 justify-around items-center"
            }
            NavLayout::Sidebar => {
                "hidden sm:flex flex-col fixed top-0 left-0 h-screen w-20 bg-white border-r border-neutral-2 shadow-card items-center py-8 gap-6 z-40"
            }
        }
    }

    fn button_class(self, active: bool) -> &'static str {
        match (self, active) {
            (NavLayout::BottomBar, true) => {
                "flex flex-col items-center justify-center gap-1 flex-1 h-full min-w-[44px] min-h-[44px] transition-all duration-200 ease-bounce focus:outline-none text-genlingo-blue scale-110"
            }
            (NavLayout::BottomBar, false) => {
                "flex flex-col items-center justify-center gap-1 flex-1 h-full min-w-[44px] min-h-[44px] transition-all duration-200 ease-bounce focus:outline-none text-neutral-4 hover:text-genlingo-red"
            }
            (NavLayout::Sidebar, true) => {
                "flex flex-col items-center gap-1 w-full py-3 min-w-[44px] min-h-[44px] transition-all duration-200 ease-bounce focus:outline-none text-genlingo-red scale-110"
            }
            (NavLayout::Sidebar, false) => {
                "flex flex-col items-center gap-1 w-full py-3 min-w-[44px] min-h-[44px] transition-all duration-200 ease-bounce focus:outline-none text-neutral-4 hover:text-genlingo-blue"
            }
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            NavLayout::BottomBar => "block w-2 h-2 rounded-full bg-genlingo-blue mt-0.5 animate-bounce",
            NavLayout::Sidebar => "block w-2 h-2 rounded-full bg-genlingo-red mt-0.5 animate-bounce",
        }
    }
}

/// Tab bar and sidebar, both driven by the same selection
#[component]
pub fn MainNavigation(
    /// Currently selected tab
    current_tab: Signal<Tab>,
    /// Called with the tab the user picked
    on_tab_change: Callback<Tab>,
) -> impl IntoView {
    view! {
        <NavBar layout=NavLayout::BottomBar current_tab=current_tab on_tab_change=on_tab_change/>
        <NavBar layout=NavLayout::Sidebar current_tab=current_tab on_tab_change=on_tab_change/>
    }
}

#[component]
fn NavBar(layout: NavLayout, current_tab: Signal<Tab>, on_tab_change: Callback<Tab>) -> impl IntoView {
    view! {
        <nav class=layout.container_class() aria-label="Main">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = Signal::derive(move || current_tab.get() == tab);
                view! {
                    <button
                        type="button"
                        class=move || layout.button_class(is_active.get())
                        aria-label=tab.to_string()
                        aria-current=move || is_active.get().then_some("page")
                        on:click=move |_| on_tab_change.run(tab)
                        data-testid=format!("nav-{}", tab.key())
                    >
                        <Icon name=tab_icon(tab) class="w-7 h-7 mb-0.5 transition-all"/>
                        <span class="text-xs font-body font-medium">{tab.to_string()}</span>
                        <Show when=move || is_active.get()>
                            <span class=layout.dot_class()/>
                        </Show>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

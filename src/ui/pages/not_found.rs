//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Set the HTTP status on the server response
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4 bg-neutral-0">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 rounded-full bg-genlingo-blue flex items-center justify-center shadow-card">
                    <span class="text-5xl" role="img" aria-label="Lost mascot">"🧭"</span>
                </div>

                <h1 class="text-6xl font-bold text-genlingo-blue mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-neutral-7 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-neutral-5 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-genlingo-blue hover:bg-genlingo-red text-white font-medium rounded-genlingo transition-colors"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}

use leptos::{either::Either, ev, prelude::*};

use crate::viewport::{collapse_menu, ScrollFlag};

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#about", "Обо мне"),
    ("#portfolio", "Портфолио"),
    ("#contact", "Контакты"),
];

#[component]
pub fn Header() -> impl IntoView {
    let scroll = RwSignal::new(ScrollFlag::default());
    let menu_open = RwSignal::new(false);

    let observe_scroll = move || {
        let y = window().scroll_y().unwrap_or_default();
        scroll.maybe_update(|flag| flag.observe(y));
    };

    // pick up the position when hydrating a page that is already scrolled
    Effect::new(move |_| observe_scroll());

    let scroll_handle = window_event_listener(ev::scroll, move |_| observe_scroll());
    let resize_handle = window_event_listener(ev::resize, move |_| {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        menu_open.maybe_update(|open| collapse_menu(open, width));
    });
    on_cleanup(move || {
        scroll_handle.remove();
        resize_handle.remove();
    });

    view! {
        <header class=move || {
            if scroll.with(ScrollFlag::is_scrolled) {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 bg-white/90 backdrop-blur-md shadow-sm"
            } else {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto max-w-6xl px-4 md:px-6">
                <nav class="flex items-center justify-between h-16 md:h-20">
                    <a href="#hero" class="text-xl md:text-2xl font-bold text-slate-900">
                        "Portfolio"
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-slate-600 hover:text-slate-900 transition-colors font-medium"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-slate-100 transition-colors text-2xl leading-none"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </nav>
            </div>
            {move || {
                if menu_open.get() {
                    Either::Left(
                        view! {
                            <div class="menu-panel md:hidden bg-white border-t border-slate-200">
                                <div class="container mx-auto px-4 py-4 space-y-2">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|(href, label)| {
                                            view! {
                                                <a
                                                    href=*href
                                                    on:click=move |_| menu_open.set(false)
                                                    class="block py-3 px-4 rounded-lg hover:bg-slate-100 text-slate-700 font-medium transition-colors"
                                                >
                                                    {*label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </header>
    }
}

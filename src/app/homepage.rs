use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Project, PROFILE};

use super::about::About;
use super::avatar::Avatar;
use super::contact::ContactSection;
use super::portfolio::{Portfolio, ProjectModal};

#[component]
pub fn HomePage() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static Project>);

    // keep the page behind an open modal from scrolling
    Effect::new(move |_| lock_body_scroll(selected.with(Option::is_some)));
    #[cfg(feature = "hydrate")]
    on_cleanup(|| lock_body_scroll(false));

    view! {
        <Title text=PROFILE.name />
        <Hero />
        <About />
        <Portfolio selected />
        <ContactSection />
        <ProjectModal selected />
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let res = if locked {
        body.set_attribute("style", "overflow: hidden")
    } else {
        body.remove_attribute("style")
    };
    if res.is_err() {
        log::warn!("couldn't update body scroll lock");
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="min-h-screen flex items-center justify-center pt-20 pb-16 px-4 md:px-6 bg-gradient-to-b from-slate-100 to-slate-50"
        >
            <div class="container mx-auto max-w-6xl text-center section-content">
                <Avatar />
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-black text-slate-900 mb-4 tracking-tight">
                    "Привет, я " <span class="text-indigo-600">{PROFILE.name}</span>
                </h1>
                <p class="text-xl md:text-2xl text-slate-600 mb-8 font-medium">{PROFILE.role}</p>
                <p class="text-lg text-slate-500 mb-10 max-w-2xl mx-auto leading-relaxed">
                    {PROFILE.tagline}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#portfolio"
                        class="inline-flex items-center justify-center gap-2 bg-indigo-600 hover:bg-indigo-700 text-white px-8 py-4 rounded-xl font-semibold transition-all transform hover:scale-105 shadow-lg shadow-indigo-600/25"
                    >
                        "💼 Смотреть работы"
                    </a>
                    <a
                        href="#contact"
                        class="inline-flex items-center justify-center gap-2 bg-white hover:bg-slate-50 text-slate-900 px-8 py-4 rounded-xl font-semibold transition-all border-2 border-slate-200 hover:border-indigo-300"
                    >
                        "✉ Связаться"
                    </a>
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::content::{PROFILE, SKILLS};

use super::avatar::ExperienceBadge;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 md:py-32 px-4 md:px-6 bg-white">
            <div class="container mx-auto max-w-6xl grid md:grid-cols-2 gap-12 items-center section-content">
                <div>
                    <h2 class="text-3xl md:text-4xl font-black text-slate-900 mb-6">"Обо мне"</h2>
                    {PROFILE
                        .about
                        .iter()
                        .map(|paragraph| {
                            view! {
                                <p class="text-lg text-slate-600 mb-6 leading-relaxed">{*paragraph}</p>
                            }
                        })
                        .collect_view()}
                    <div class="flex flex-wrap gap-3 mt-8">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="flex items-center gap-2 px-4 py-2 bg-slate-100 rounded-full text-slate-700 font-medium hover:bg-indigo-50 hover:text-indigo-700 transition-colors cursor-default">
                                        <i class=skill.icon></i>
                                        {skill.name}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="relative">
                    <div class="aspect-square rounded-2xl overflow-hidden shadow-2xl">
                        <img
                            src=PROFILE.workspace_image
                            alt="Workspace"
                            class="w-full h-full object-cover"
                        />
                    </div>
                    <ExperienceBadge />
                </div>
            </div>
        </section>
    }
}

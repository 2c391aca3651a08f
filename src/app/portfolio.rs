use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{Project, PROJECTS};

#[component]
pub fn Portfolio(selected: RwSignal<Option<&'static Project>>) -> impl IntoView {
    view! {
        <section id="portfolio" class="py-20 md:py-32 px-4 md:px-6 bg-slate-50">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-16 section-content">
                    <h2 class="text-3xl md:text-4xl font-black text-slate-900 mb-4">"Портфолио"</h2>
                    <p class="text-lg text-slate-600 max-w-2xl mx-auto">
                        "Некоторые из моих последних проектов. Кликните для подробной информации."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-6 md:gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project selected /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    selected: RwSignal<Option<&'static Project>>,
) -> impl IntoView {
    view! {
        <div
            on:click=move |_| selected.set(Some(project))
            class="group cursor-pointer bg-white rounded-2xl overflow-hidden shadow-sm hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1 border border-slate-200 section-content"
        >
            <div class="aspect-video overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transform group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-slate-900 mb-2 group-hover:text-indigo-600 transition-colors">
                    {project.title}
                </h3>
                <p class="text-slate-600 mb-4 line-clamp-2">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-slate-100 text-slate-600 text-sm rounded-full font-medium">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectModal(selected: RwSignal<Option<&'static Project>>) -> impl IntoView {
    let close = move |_: MouseEvent| selected.set(None);

    move || {
        selected
            .get()
            .map(|project| {
                view! {
                    <div
                        class="modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
                        on:click=close
                    >
                        <div
                            class="modal-card bg-white rounded-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto"
                            on:click=|ev: MouseEvent| ev.stop_propagation()
                        >
                            <div class="relative aspect-video">
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="w-full h-full object-cover"
                                />
                                <button
                                    on:click=close
                                    aria-label="Close"
                                    class="absolute top-4 right-4 w-10 h-10 bg-white/90 hover:bg-white rounded-full flex items-center justify-center transition-colors shadow-lg text-slate-900"
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="p-6 md:p-8">
                                <h3 class="text-2xl md:text-3xl font-bold text-slate-900 mb-4">
                                    {project.title}
                                </h3>
                                <p class="text-slate-600 mb-6 leading-relaxed">
                                    {project.description}
                                    ". Этот проект был разработан с нуля, включая проектирование архитектуры, дизайн интерфейса и полную реализацию функционала. Особое внимание уделялось производительности и пользовательскому опыту."
                                </p>
                                <div class="mb-8">
                                    <h4 class="text-sm font-semibold text-slate-900 uppercase tracking-wider mb-3">
                                        "Технологии"
                                    </h4>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-4 py-2 bg-indigo-50 text-indigo-700 rounded-lg font-medium">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="flex gap-4">
                                    <a
                                        href=project.link
                                        class="flex-1 bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-3 rounded-xl font-semibold transition-colors text-center"
                                    >
                                        "↗ Открыть проект"
                                    </a>
                                    <button
                                        on:click=close
                                        class="px-6 py-3 border-2 border-slate-200 hover:border-slate-300 rounded-xl font-semibold transition-colors"
                                    >
                                        "Закрыть"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })
    }
}

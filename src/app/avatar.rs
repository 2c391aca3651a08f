use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="w-32 h-32 md:w-40 md:h-40 mx-auto mb-8 rounded-full overflow-hidden shadow-2xl border-4 border-white">
            <img src=PROFILE.avatar alt="Profile" class="w-full h-full object-cover" />
        </div>
    }
}

#[component]
pub fn ExperienceBadge() -> impl IntoView {
    view! {
        <div class="absolute -bottom-6 -left-6 bg-white p-6 rounded-xl shadow-xl border border-slate-100">
            <div class="flex items-center gap-3">
                <div class="w-12 h-12 bg-indigo-100 rounded-full flex items-center justify-center text-indigo-600 text-xl">
                    "</>"
                </div>
                <div>
                    <div class="text-2xl font-bold text-slate-900">
                        {format!("{}+", PROFILE.years_experience)}
                    </div>
                    <div class="text-sm text-slate-500">"лет опыта"</div>
                </div>
            </div>
        </div>
    }
}

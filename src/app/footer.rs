use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-white py-12 px-4 md:px-6">
            <div class="container mx-auto max-w-6xl flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="text-center md:text-left">
                    <div class="text-xl font-bold mb-2">"Portfolio"</div>
                    <div class="text-slate-400 text-sm">
                        {format!("© {} {}. Все права защищены.", env!("BUILD_YEAR"), PROFILE.name)}
                    </div>
                </div>
                <div class="flex items-center gap-6">
                    <a
                        href=PROFILE.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-10 h-10 bg-slate-800 hover:bg-slate-700 rounded-full flex items-center justify-center transition-colors"
                        aria-label="GitHub"
                    >
                        <i class="devicon-github-original"></i>
                    </a>
                    <a
                        href=PROFILE.telegram_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-10 h-10 bg-slate-800 hover:bg-slate-700 rounded-full flex items-center justify-center transition-colors"
                        aria-label="Telegram"
                    >
                        "➤"
                    </a>
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="w-10 h-10 bg-slate-800 hover:bg-slate-700 rounded-full flex items-center justify-center transition-colors"
                        aria-label="Email"
                    >
                        "✉"
                    </a>
                </div>
            </div>
        </footer>
    }
}

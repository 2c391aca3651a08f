use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{Outcome, RelayResponse, SubmissionState};
use crate::content::PROFILE;

/// Forwards the form to the relay. The access key never leaves the server.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<RelayResponse, ServerFnError> {
    use crate::contact::ContactForm;
    use crate::relay::GLOBAL_RELAY;

    let relay = GLOBAL_RELAY
        .get()
        .ok_or_else(|| ServerFnError::new("contact form relay is not configured"))?;
    let form = ContactForm {
        name,
        email,
        message,
    };
    relay.submit(&form).await.map_err(|err| {
        tracing::warn!(%err, "contact form relay failed");
        ServerFnError::new(err)
    })
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 md:py-32 px-4 md:px-6 bg-white">
            <div class="container mx-auto max-w-6xl grid lg:grid-cols-2 gap-12 lg:gap-20">
                <div class="section-content">
                    <h2 class="text-3xl md:text-4xl font-black text-slate-900 mb-6">
                        "Давайте работать вместе"
                    </h2>
                    <p class="text-lg text-slate-600 mb-8 leading-relaxed">
                        "Открыт для новых проектов и интересных задач. Напишите мне — обсудим детали."
                    </p>
                    <div class="space-y-6">
                        <ContactDetail icon={DetailIcon::Glyph("✉")} label="Email">
                            <a
                                href=format!("mailto:{}", PROFILE.email)
                                class="text-slate-900 font-semibold hover:text-indigo-600 transition-colors"
                            >
                                {PROFILE.email}
                            </a>
                        </ContactDetail>
                        <ContactDetail icon={DetailIcon::Glyph("📍")} label="Локация">
                            <span class="text-slate-900 font-semibold">{PROFILE.location}</span>
                        </ContactDetail>
                        <ContactDetail icon={DetailIcon::Devicon("devicon-github-original")} label="GitHub">
                            <a
                                href=PROFILE.github_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-slate-900 font-semibold hover:text-indigo-600 transition-colors"
                            >
                                {PROFILE.github_handle}
                            </a>
                        </ContactDetail>
                    </div>
                </div>
                <div class="section-content">
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy)]
enum DetailIcon {
    Glyph(&'static str),
    Devicon(&'static str),
}

#[component]
fn ContactDetail(icon: DetailIcon, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="w-12 h-12 bg-indigo-100 rounded-xl flex items-center justify-center text-indigo-600 text-xl">
                {match icon {
                    DetailIcon::Glyph(glyph) => Either::Left(glyph),
                    DetailIcon::Devicon(class) => Either::Right(view! { <i class=class></i> }),
                }}
            </div>
            <div>
                <div class="text-sm text-slate-500 mb-1">{label}</div>
                {children()}
            </div>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white border border-slate-300 rounded-xl text-slate-900 placeholder-slate-400 focus:outline-none focus:border-indigo-500 focus:ring-2 focus:ring-indigo-500/20 transition-all";

#[component]
fn MessageForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmissionState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        status.update(SubmissionState::begin);
        let (n, e, m) = (
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        spawn_local(async move {
            let outcome = Outcome::from_reply(submit_contact(n, e, m).await);
            if outcome == Outcome::Success {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            status.update(|s| s.finish(outcome));
        });
    };

    let is_submitting = move || status.with(SubmissionState::is_submitting);

    view! {
        <div class="bg-slate-50 rounded-2xl p-6 md:p-8 border border-slate-200">
            {move || {
                if status.with(SubmissionState::is_success) {
                    Either::Left(
                        view! {
                            <div class="success-panel text-center py-8">
                                <div class="w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-6 text-green-600 text-4xl">
                                    "✓"
                                </div>
                                <h3 class="text-2xl font-bold text-slate-900 mb-3">
                                    "Сообщение отправлено!"
                                </h3>
                                <p class="text-slate-600 mb-8">
                                    "Спасибо за обращение. Я свяжусь с вами в ближайшее время."
                                </p>
                                <button
                                    on:click=move |_| status.update(SubmissionState::reset)
                                    class="text-indigo-600 hover:text-indigo-700 font-semibold transition-colors"
                                >
                                    "Отправить ещё"
                                </button>
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <form on:submit=on_submit class="space-y-5">
                                <div>
                                    <label
                                        for="name"
                                        class="block text-sm font-semibold text-slate-700 mb-2"
                                    >
                                        "Имя"
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required
                                        placeholder="Ваше имя"
                                        bind:value=name
                                        class=INPUT_CLASS
                                    />
                                </div>
                                <div>
                                    <label
                                        for="email"
                                        class="block text-sm font-semibold text-slate-700 mb-2"
                                    >
                                        "Email"
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        required
                                        placeholder="your@email.com"
                                        bind:value=email
                                        class=INPUT_CLASS
                                    />
                                </div>
                                <div>
                                    <label
                                        for="message"
                                        class="block text-sm font-semibold text-slate-700 mb-2"
                                    >
                                        "Сообщение"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="4"
                                        required
                                        placeholder="Расскажите о проекте..."
                                        bind:value=message
                                        class=format!("{INPUT_CLASS} resize-none")
                                    ></textarea>
                                </div>
                                {move || {
                                    status
                                        .with(|s| s.error_message().map(str::to_owned))
                                        .map(|msg| {
                                            view! {
                                                <div class="text-red-600 text-sm bg-red-50 p-3 rounded-lg">
                                                    {msg}
                                                </div>
                                            }
                                        })
                                }}
                                <button
                                    type="submit"
                                    disabled=is_submitting
                                    class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-slate-400 disabled:cursor-not-allowed text-white px-6 py-4 rounded-xl font-semibold transition-all flex items-center justify-center gap-2"
                                >
                                    {move || {
                                        if is_submitting() {
                                            Either::Left(
                                                view! {
                                                    <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                                    "Отправка..."
                                                },
                                            )
                                        } else {
                                            Either::Right(view! { "➤ Отправить сообщение" })
                                        }
                                    }}
                                </button>
                            </form>
                        },
                    )
                }
            }}
        </div>
    }
}

use yew::prelude::*;

use crate::capture::CaptureView;
use crate::components::email_form::EmailForm;
use crate::pages::content::{PageVariant, FOOTER_TAGLINE, NAV_CTA, REASSURANCE};

#[derive(Properties, PartialEq, Clone)]
pub struct LandingProps {
    pub variant: PageVariant,
    pub hero: CaptureView,
    pub cta: CaptureView,
    pub year: i32,
}

fn icon(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg class={class} fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path stroke-linecap="round" stroke-linejoin="round" d={path} />
        </svg>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let copy = props.variant.copy();
    let action = props.variant.path();
    html! {
        <main class="min-h-screen bg-white text-slate-700">
            <nav class="fixed top-0 w-full bg-primary/95 backdrop-blur-md z-50 shadow-md">
                <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                    <span class="text-2xl font-bold tracking-tight text-white">
                        {"Simu"}<span class="text-accent-green">{"patri"}</span>
                    </span>
                    <a
                        href="#cta"
                        class="hidden sm:inline-block px-5 py-2 bg-accent-green hover:bg-accent-green-dark text-white text-sm font-semibold rounded-lg transition-colors shadow-md"
                    >
                        {NAV_CTA}
                    </a>
                </div>
            </nav>

            <section class="relative pt-32 pb-20 px-6 bg-gradient-to-b from-primary via-primary-light to-slate-50">
                <div class="max-w-3xl mx-auto text-center relative">
                    <div class="inline-block mb-6 px-4 py-1.5 rounded-full bg-white/15 border border-white/25 text-white text-sm font-medium">
                        {copy.badge}
                    </div>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl font-extrabold leading-tight mb-6 text-white">
                        {copy.headline}
                        <br />
                        <span class="text-accent-green">{copy.headline_accent}</span>
                    </h1>
                    <p class="text-lg sm:text-xl text-white/80 mb-10 max-w-2xl mx-auto">{copy.subtitle}</p>
                    <div class="flex justify-center">
                        <EmailForm view={props.hero.clone()} action={action} />
                    </div>
                    <p class="mt-4 text-sm text-white/50">{REASSURANCE}</p>
                </div>
            </section>

            <section class="py-20 px-6 bg-slate-50">
                <div class="max-w-5xl mx-auto">
                    <div class="text-center mb-14">
                        <h2 class="text-3xl sm:text-4xl font-bold mb-4 text-primary">{copy.problems_title}</h2>
                        <p class="text-slate-500 text-lg max-w-2xl mx-auto">{copy.problems_intro}</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        { for copy.problems.iter().map(|p| html! {
                            <div class="bg-white border border-secondary-light/40 rounded-2xl p-8 hover:border-secondary transition-colors shadow-sm hover:shadow-md">
                                <div class="mb-4">{icon(p.icon, "w-8 h-8 text-accent-orange")}</div>
                                <h3 class="text-xl font-semibold mb-3 text-primary">{p.title}</h3>
                                <p class="text-slate-500 leading-relaxed">{p.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-20 px-6 bg-white">
                <div class="max-w-5xl mx-auto">
                    <div class="text-center mb-14">
                        <h2 class="text-3xl sm:text-4xl font-bold mb-4 text-primary">
                            {copy.solution_title}
                            <br />
                            <span class="text-accent-green">{copy.solution_accent}</span>
                        </h2>
                        <p class="text-slate-500 text-lg max-w-2xl mx-auto">{copy.solution_intro}</p>
                    </div>
                    <div class="grid sm:grid-cols-2 gap-6 max-w-3xl mx-auto">
                        { for copy.advantages.iter().map(|a| html! {
                            <div class="flex items-start gap-4 bg-white border border-secondary-light/40 rounded-xl p-6 shadow-sm hover:shadow-md transition-shadow">
                                <div class="text-secondary shrink-0 mt-0.5">{icon(a.icon, "w-6 h-6")}</div>
                                <p class="text-slate-600 font-medium">{a.text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-20 px-6 bg-slate-50">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-14">
                        <h2 class="text-3xl sm:text-4xl font-bold mb-4 text-primary">{copy.steps_title}</h2>
                        <p class="text-slate-500 text-lg">{copy.steps_intro}</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        { for copy.steps.iter().map(|s| html! {
                            <div class="text-center">
                                <div class="w-14 h-14 bg-secondary/10 border border-secondary/25 rounded-2xl flex items-center justify-center mx-auto mb-5">
                                    <span class="text-secondary text-2xl font-bold">{s.number}</span>
                                </div>
                                <h3 class="text-xl font-semibold mb-3 text-primary">{s.title}</h3>
                                <p class="text-slate-500 leading-relaxed">{s.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="cta" class="py-24 px-6 bg-gradient-to-b from-white to-slate-50">
                <div class="max-w-2xl mx-auto text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4 text-primary">{copy.cta_title}</h2>
                    <p class="text-slate-500 text-lg mb-10">{copy.cta_intro}</p>
                    <div class="flex justify-center">
                        <EmailForm view={props.cta.clone()} action={action} />
                    </div>
                    <p class="mt-4 text-sm text-slate-400">{REASSURANCE}</p>
                </div>
            </section>

            <footer class="border-t border-slate-200 py-8 px-6 bg-primary">
                <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-white/60">
                    <span>{format!("© {} Simupatri. Tous droits reserves.", props.year)}</span>
                    <span>{FOOTER_TAGLINE}</span>
                </div>
            </footer>
        </main>
    }
}

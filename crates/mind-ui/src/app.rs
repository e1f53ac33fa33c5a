use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use mind_types::guard::AppRoute;

use crate::components::loading::Loading;
use crate::components::toast::ToastProvider;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_register::AdminRegisterPage;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::invite::InvitePage;
use crate::pages::login::LoginPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::session::{Guard, SessionProvider};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mind-status.css" />
        <Title text="Mind Status" />
        <ToastProvider>
            <SessionProvider>
                <Router>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=StaticSegment("") view=RootView />
                        <Route path=StaticSegment("login") view=LoginView />
                        <Route path=StaticSegment("dashboard") view=DashboardView />
                        <Route path=StaticSegment("admin") view=AdminView />
                        <Route path=(StaticSegment("admin"), StaticSegment("register")) view=AdminRegisterPage />
                        <Route path=StaticSegment("change-password") view=ChangePasswordView />
                        <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage />
                        <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage />
                        <Route path=(StaticSegment("invite"), ParamSegment("token")) view=InviteView />
                    </Routes>
                </Router>
            </SessionProvider>
        </ToastProvider>
    }
}

/// `/` always redirects once the session is known.
#[component]
fn RootView() -> impl IntoView {
    view! {
        <Guard route=AppRoute::Root>
            <Loading message="Redirecting..." />
        </Guard>
    }
}

#[component]
fn LoginView() -> impl IntoView {
    view! {
        <Guard route=AppRoute::Login>
            <LoginPage />
        </Guard>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    view! {
        <Guard route=AppRoute::Dashboard>
            <DashboardPage />
        </Guard>
    }
}

#[component]
fn AdminView() -> impl IntoView {
    view! {
        <Guard route=AppRoute::Admin>
            <AdminDashboardPage />
        </Guard>
    }
}

#[component]
fn ChangePasswordView() -> impl IntoView {
    view! {
        <Guard route=AppRoute::ChangePassword>
            <ChangePasswordPage />
        </Guard>
    }
}

#[component]
fn InviteView() -> impl IntoView {
    view! {
        <Guard route=AppRoute::Invite>
            <InvitePage />
        </Guard>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found"</h1>
                <p>"The page you are looking for does not exist."</p>
                <a href="/" class="btn btn-primary">"Go home"</a>
            </div>
        </div>
    }
}

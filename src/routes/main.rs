use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::domain::emergency::EMERGENCY_CONTACTS;
use crate::routes::{redirect, render_template};

#[get("/")]
pub async fn show_home(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "home.html", &page_context("home"))
}

#[get("/login")]
pub async fn show_login(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "login.html", &page_context("login"))
}

#[get("/login.html")]
pub async fn login_html_fallback() -> impl Responder {
    redirect("/login")
}

#[get("/user")]
pub async fn show_user_dashboard(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "dashboards/user.html", &page_context("user"))
}

#[get("/vendor")]
pub async fn show_vendor_dashboard(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "dashboards/vendor.html", &page_context("vendor"))
}

#[get("/admin")]
pub async fn show_admin_dashboard(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "dashboards/admin.html", &page_context("admin"))
}

#[get("/sos/{user_id}")]
pub async fn show_sos(path: web::Path<i32>, tera: web::Data<Tera>) -> impl Responder {
    let mut context = page_context("sos");
    context.insert("user_id", &path.into_inner());
    context.insert("contacts", EMERGENCY_CONTACTS);
    render_template(&tera, "sos.html", &context)
}

/// Context shared by every page; `current_page` drives the navigation highlight.
pub(crate) fn page_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

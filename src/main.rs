use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use svasta::config::ServerConfig;
use svasta::db::{establish_connection_pool, run_migrations};
use svasta::repository::DieselRepository;
use svasta::routes::api::{api_orders, chatbot_reply, place_order, update_order};
use svasta::routes::cart::{add_to_cart, get_cart, remove_from_cart};
use svasta::routes::classes::{show_classes, show_upload_class, upload_class};
use svasta::routes::main::{
    login_html_fallback, show_admin_dashboard, show_home, show_login, show_sos,
    show_user_dashboard, show_vendor_dashboard,
};
use svasta::routes::prescriptions::{upload_prescription, upload_prescription_page};
use svasta::routes::webinars::{show_upload_webinar, show_webinars, upload_webinar};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url, config.pool_size) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(applied) => log::info!("Database ready at {} ({applied} migrations applied)", config.database_url),
        Err(e) => {
            log::error!("Failed to prepare database schema: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    let tera = match Tera::new(&config.templates_glob) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let bind = (config.address.clone(), config.port);
    log::info!("Listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &config.assets_dir))
            .service(Files::new("/pharmacure", &config.storefront_dir).index_file("index.html"))
            .service(show_home)
            .service(show_login)
            .service(login_html_fallback)
            .service(show_user_dashboard)
            .service(show_vendor_dashboard)
            .service(show_admin_dashboard)
            .service(show_sos)
            .service(api_orders)
            .service(place_order)
            .service(update_order)
            .service(chatbot_reply)
            .service(get_cart)
            .service(add_to_cart)
            .service(remove_from_cart)
            .service(show_webinars)
            .service(show_upload_webinar)
            .service(upload_webinar)
            .service(show_classes)
            .service(show_upload_class)
            .service(upload_class)
            .service(upload_prescription_page)
            .service(upload_prescription)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
    })
    .bind(bind)?
    .run()
    .await
}

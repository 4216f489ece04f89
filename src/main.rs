#[macro_use]
extern crate diesel;

mod administration;
mod agenda;
mod comptabilite;
mod consultation;
mod database;
mod documents;
mod models;
mod paie;
mod patient;
mod pharmacie;
mod protocol;
mod schema;
mod soins;
mod utils;

use std::path::PathBuf;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

use documents::DocumentStore;

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

/// Dossier des images téléversées (photos de profil, pièces d'identité),
/// servi ensuite sous `/images`.
pub struct ImagesDir(pub PathBuf);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    // par défaut les factures et fiches de paie atterrissent sur le bureau
    let documents_dir = std::env::var("DOCUMENTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .expect("Home directory not found")
                .join("Desktop")
        });
    let documents =
        DocumentStore::open(&documents_dir).expect("Failed to prepare document folders");
    log::info!("Dossiers de documents prêts sous {:?}", documents_dir);

    let images_dir = std::env::var("IMAGES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("img"));
    std::fs::create_dir_all(&images_dir).expect("Failed to create images directory");

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5001".to_string());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .data(pool.clone())
            .data(documents.clone())
            .data(ImagesDir(images_dir.clone()))
            .service(web::scope("/administration").configure(administration::config))
            .service(web::scope("/patient").configure(patient::config))
            .service(web::scope("/consultation").configure(consultation::config))
            .service(web::scope("/agenda").configure(agenda::config))
            .service(web::scope("/soins").configure(soins::config))
            .service(web::scope("/paie").configure(paie::config))
            .service(web::scope("/pharmacie").configure(pharmacie::config))
            .service(web::scope("/comptabilite").configure(comptabilite::config))
            .service(Files::new("/images", images_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}

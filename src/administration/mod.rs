mod requests;
mod responses;
mod utils;

use std::path::Path;

use crate::{
    database::{assert, find_employe_by_code, get_db_conn},
    models::{
        administration::{EmployeData, NewEmploye, UpdateEmploye},
        connexions::ConnexionData,
        departements::DepartementData,
        salaire::SalaireData,
    },
    protocol::SimpleResponse,
    DbPool, ImagesDir,
};
use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{anyhow, bail, Context};
use chrono::Utc;
use diesel::prelude::*;
use futures::{StreamExt, TryStreamExt};

use self::{
    requests::*,
    responses::*,
    utils::{find_or_create_departement, find_or_create_salaire, get_id_admin_from_token},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add)
        .service(login)
        .service(logout)
        .service(search)
        .service(view)
        .service(modify)
        .service(delete)
        .service(account_info)
        .service(search_depart)
        .service(upload_document);
}

crate::post_funcs! {
    (add, "/add", AddEmployeRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
    (search, "/search", SearchEmployeRequest, SearchEmployeResponse),
    (view, "/view", ViewEmployeRequest, ViewEmployeResponse),
    (modify, "/modify", ModifyEmployeRequest, SimpleResponse),
    (delete, "/delete", DeleteEmployeRequest, SimpleResponse),
    (account_info, "/account_info", AccountInfoRequest, AccountInfoResponse),
    (search_depart, "/search_depart", SearchDepartRequest, SearchDepartResponse),
}

async fn add_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddEmployeRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::administration;

    let info = info.into_inner();
    crate::utils::assert_sexe_str(&info.sexe)?;
    let date_e = crate::utils::parse_date_str(&info.date_e).context("Date d'embauche invalide")?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let hashed_code = crate::utils::hash_code(&info.code_admin);
            let res = administration::table
                .filter(administration::code_admin.eq(&hashed_code))
                .count()
                .get_result::<i64>(&conn)
                .context("Erreur de base de données")?;
            if res > 0 {
                bail!("Code administrateur déjà utilisé");
            }

            let id_salaire = find_or_create_salaire(&conn, info.salaire)?;
            let id_departement = find_or_create_departement(&conn, &info.departement)?;

            let data = NewEmploye {
                nom: info.nom,
                prenom: info.prenom,
                age: info.age,
                sexe: info.sexe,
                situation: info.situation,
                telephone: info.telephone,
                mail: info.mail,
                id_departement,
                code_admin: hashed_code,
                diplome: info.diplome,
                date_e,
                id_salaire,
                nombre_consultation: 0,
            };
            diesel::insert_into(administration::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    use crate::schema::{connexions, departements};

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let (login_token, redirect_page) = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let employe = find_employe_by_code(&conn, &info.code_admin)?;

            let departement = departements::table
                .filter(departements::id_departement.eq(employe.id_departement))
                .select(departements::departement)
                .first::<String>(&conn)
                .optional()
                .context("Erreur de base de données")?;
            let redirect_page = utils::redirect_page(departement.as_deref().unwrap_or(""));

            let login_token = crate::utils::generate_login_token(employe.id_admin);
            let token_data = ConnexionData {
                token: login_token.clone(),
                id_admin: employe.id_admin,
                date_connexion: Utc::now().naive_utc(),
            };
            diesel::insert_into(connexions::table)
                .values(token_data)
                .execute(&conn)
                .context("Erreur de base de données")?;

            Ok((login_token, redirect_page.to_string()))
        })
    })
    .await?;

    log::info!("Connexion réussie, redirection vers {}", redirect_page);

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        redirect_page,
        login_token,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::connexions;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(connexions::table.filter(connexions::token.eq(info.login_token)))
            .execute(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchEmployeRequest>,
) -> anyhow::Result<SearchEmployeResponse> {
    use crate::schema::{administration, departements, salaire};

    let info = info.into_inner();
    let nom_pattern = crate::utils::get_str_pattern_opt(info.nom);
    let depart_pattern = crate::utils::get_str_pattern_opt(info.departement);
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        administration::table
            .inner_join(salaire::table.on(administration::id_salaire.eq(salaire::id_salaire)))
            .inner_join(
                departements::table
                    .on(administration::id_departement.eq(departements::id_departement)),
            )
            .filter(administration::nom.like(nom_pattern))
            .filter(departements::departement.like(depart_pattern))
            .order(administration::nom.asc())
            .offset(first_index)
            .limit(limit)
            .get_results::<(EmployeData, SalaireData, DepartementData)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let employes = rows
        .into_iter()
        .map(|(employe, salaire, departement)| SearchEmployeItem {
            id_admin: employe.id_admin,
            nom: employe.nom,
            prenom: employe.prenom,
            age: employe.age,
            sexe: employe.sexe,
            situation: employe.situation,
            telephone: employe.telephone,
            mail: employe.mail,
            departement: departement.departement,
            diplome: employe.diplome,
            date_e: employe.date_e.to_string(),
            salaire_brute: salaire.salaire_brute,
            inps: salaire.inps,
            amo: salaire.amo,
            nombre_consultation: employe.nombre_consultation,
        })
        .collect();

    Ok(SearchEmployeResponse {
        success: true,
        err: "".to_string(),
        employes,
    })
}

async fn view_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewEmployeRequest>,
) -> anyhow::Result<ViewEmployeResponse> {
    use crate::schema::{administration, departements, salaire};

    let info = info.into_inner();
    assert::assert_employe(&pool, info.id_admin).await?;

    let conn = get_db_conn(&pool)?;
    let id_admin = info.id_admin;
    let (employe, salaire, departement) = web::block(move || {
        administration::table
            .inner_join(salaire::table.on(administration::id_salaire.eq(salaire::id_salaire)))
            .inner_join(
                departements::table
                    .on(administration::id_departement.eq(departements::id_departement)),
            )
            .filter(administration::id_admin.eq(id_admin))
            .get_result::<(EmployeData, SalaireData, DepartementData)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(ViewEmployeResponse {
        success: true,
        err: "".to_string(),
        id_admin: employe.id_admin,
        nom: employe.nom,
        prenom: employe.prenom,
        age: employe.age,
        sexe: employe.sexe,
        situation: employe.situation,
        telephone: employe.telephone,
        mail: employe.mail,
        departement: departement.departement,
        diplome: employe.diplome,
        date_e: employe.date_e.to_string(),
        salaire_brute: salaire.salaire_brute,
        nombre_consultation: employe.nombre_consultation,
        profil: image_url(&employe.profil),
        identite: image_url(&employe.identite),
    })
}

async fn modify_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ModifyEmployeRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::administration;

    let info = info.into_inner();
    assert::assert_employe(&pool, info.id_admin).await?;

    if let Some(sexe) = &info.sexe {
        crate::utils::assert_sexe_str(sexe)?;
    }
    let date_e = match &info.date_e {
        Some(date) => Some(crate::utils::parse_date_str(date).context("Date d'embauche invalide")?),
        None => None,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let mut data = UpdateEmploye {
                nom: info.nom,
                prenom: info.prenom,
                age: info.age,
                sexe: info.sexe,
                situation: info.situation,
                telephone: info.telephone,
                mail: info.mail,
                diplome: info.diplome,
                date_e,
                code_admin: info.code_admin.as_deref().map(crate::utils::hash_code),
                ..Default::default()
            };
            if let Some(salaire_brute) = info.salaire {
                data.id_salaire = Some(find_or_create_salaire(&conn, salaire_brute)?);
            }
            if let Some(departement) = &info.departement {
                data.id_departement = Some(find_or_create_departement(&conn, departement)?);
            }

            diesel::update(
                administration::table.filter(administration::id_admin.eq(info.id_admin)),
            )
            .set(&data)
            .execute(&conn)
            .context("Erreur de base de données")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn delete_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteEmployeRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::administration;

    let info = info.into_inner();
    assert::assert_employe(&pool, info.id_admin).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(administration::table.filter(administration::id_admin.eq(info.id_admin)))
            .execute(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

async fn account_info_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AccountInfoRequest>,
) -> anyhow::Result<AccountInfoResponse> {
    use crate::schema::administration;

    let info = info.into_inner();
    let id_admin = get_id_admin_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let employe = web::block(move || {
        administration::table
            .filter(administration::id_admin.eq(id_admin))
            .get_result::<EmployeData>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(AccountInfoResponse {
        success: true,
        err: "".to_string(),
        nom: employe.nom,
        prenom: employe.prenom,
        profil: image_url(&employe.profil),
    })
}

async fn search_depart_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchDepartRequest>,
) -> anyhow::Result<SearchDepartResponse> {
    use crate::schema::departements;

    let info = info.into_inner();
    let pattern = crate::utils::get_str_pattern_opt(info.departement);

    let conn = get_db_conn(&pool)?;
    let departements = web::block(move || {
        departements::table
            .filter(departements::departement.like(pattern))
            .select(departements::departement)
            .distinct()
            .order(departements::departement.asc())
            .get_results::<String>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SearchDepartResponse {
        success: true,
        err: "".to_string(),
        departements,
    })
}

#[post("/upload_document")]
async fn upload_document(
    pool: web::Data<DbPool>,
    images: web::Data<ImagesDir>,
    payload: Multipart,
) -> impl Responder {
    let response = match upload_document_impl(pool, images, payload).await {
        Ok(response) => response,
        Err(err) => SimpleResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

/// Téléversement de la photo de profil ou de la pièce d'identité d'un
/// employé. Le fichier est renommé d'après l'horodatage, comme les autres
/// documents, et servi ensuite sous `/images`.
async fn upload_document_impl(
    pool: web::Data<DbPool>,
    images: web::Data<ImagesDir>,
    mut payload: Multipart,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::administration;

    let mut id_admin: Option<u64> = None;
    let mut champ: Option<String> = None;
    let mut fichier: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let disposition = field
            .content_disposition()
            .context("Champ multipart invalide")?;
        let name = disposition.get_name().unwrap_or("").to_string();
        let filename = disposition.get_filename().map(|s| s.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| anyhow!("Erreur lors de la lecture du fichier : {}", e))?;
            data.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "id_admin" => {
                id_admin = Some(
                    String::from_utf8_lossy(&data)
                        .trim()
                        .parse()
                        .context("id_admin invalide")?,
                );
            }
            "champ" => champ = Some(String::from_utf8_lossy(&data).trim().to_string()),
            "fichier" => {
                let extension = filename
                    .as_deref()
                    .and_then(|f| Path::new(f).extension())
                    .and_then(|e| e.to_str())
                    .map(|e| format!(".{}", e))
                    .unwrap_or_default();
                fichier = Some((extension, data));
            }
            _ => {}
        }
    }

    let id_admin = id_admin.context("id_admin manquant")?;
    let champ = champ.context("Champ de destination manquant")?;
    let (extension, data) = fichier.context("Aucun fichier fourni")?;
    if champ != "profil" && champ != "identite" {
        bail!("Champ de destination inconnu");
    }

    assert::assert_employe(&pool, id_admin).await?;

    let nom_fichier = format!("{}{}", Utc::now().timestamp_millis(), extension);
    let chemin = images.0.join(&nom_fichier);
    web::block(move || std::fs::write(chemin, data))
        .await
        .context("Erreur lors de l'enregistrement du fichier")?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        let cible = administration::table.filter(administration::id_admin.eq(id_admin));
        if champ == "profil" {
            diesel::update(cible)
                .set(administration::profil.eq(nom_fichier))
                .execute(&conn)
        } else {
            diesel::update(cible)
                .set(administration::identite.eq(nom_fichier))
                .execute(&conn)
        }
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

fn image_url(fichier: &Option<String>) -> String {
    match fichier {
        Some(fichier) => format!("/images/{}", fichier),
        None => "".to_string(),
    }
}

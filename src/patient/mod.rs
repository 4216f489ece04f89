mod requests;
mod responses;

use crate::{
    database::{assert, find_employe_by_code, get_db_conn},
    documents::{DocumentStore, Facture},
    models::{
        departements::DepartementData,
        patient::{NewPatient, PatientData},
        recu::NewRecu,
        soins::SoinData,
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add)
        .service(search)
        .service(view)
        .service(delete);
}

crate::post_funcs! {
    (search, "/search", SearchPatientRequest, SearchPatientResponse),
    (view, "/view", ViewPatientRequest, ViewPatientResponse),
    (delete, "/delete", DeletePatientRequest, SimpleResponse),
}

#[post("/add")]
async fn add(
    pool: web::Data<DbPool>,
    documents: web::Data<DocumentStore>,
    info: web::Json<AddPatientRequest>,
) -> impl Responder {
    let response = match add_impl(pool, documents, info).await {
        Ok(response) => response,
        Err(err) => AddPatientResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

/// Accueil d'un patient : le soin demandé est facturé immédiatement, le
/// compteur de consultations de l'employé est incrémenté et un reçu est
/// conservé en base.
async fn add_impl(
    pool: web::Data<DbPool>,
    documents: web::Data<DocumentStore>,
    info: web::Json<AddPatientRequest>,
) -> anyhow::Result<AddPatientResponse> {
    use crate::schema::{administration, patient, recu, soins};

    let info = info.into_inner();
    crate::utils::assert_sexe_str(&info.sexe)?;

    let nom = info.nom.clone();
    let prenom = info.prenom.clone();
    let type_soin = info.type_soin.clone();
    let age = info.age;
    let localite = info.localite.clone();

    let conn = get_db_conn(&pool)?;
    let (id_patient, prix) = web::block(move || {
        conn.transaction(|| {
            let employe = find_employe_by_code(&conn, &info.code_admin)?;

            let soin = soins::table
                .filter(soins::type_soin.eq(&info.type_soin))
                .first::<SoinData>(&conn)
                .optional()
                .context("Erreur de base de données")?;
            let soin = match soin {
                Some(soin) => soin,
                None => bail!("Type de soin invalide"),
            };

            diesel::update(
                administration::table.filter(administration::id_admin.eq(employe.id_admin)),
            )
            .set(
                administration::nombre_consultation
                    .eq(administration::nombre_consultation + 1),
            )
            .execute(&conn)
            .context("Erreur de base de données")?;

            let data = NewPatient {
                telephone: info.telephone,
                nom: info.nom,
                prenom: info.prenom,
                age: info.age,
                sexe: info.sexe,
                ethnie: info.ethnie,
                localite: info.localite,
                tension: info.tension,
                type_soin: info.type_soin,
                code_admin: employe.code_admin,
            };
            diesel::insert_into(patient::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;
            let id_patient = diesel::select(crate::database::last_insert_id)
                .get_result::<u64>(&conn)
                .context("Erreur de base de données")?;

            let data = NewRecu {
                id_patient,
                type_soin: soin.type_soin,
                id_soin: soin.id_soin,
                montant: soin.prix,
            };
            diesel::insert_into(recu::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;

            Ok((id_patient, soin.prix))
        })
    })
    .await?;

    let facture = Facture {
        id_patient,
        nom,
        prenom,
        type_soin,
        prix,
        age,
        localite,
        date: Utc::today().naive_utc(),
    };
    let store = documents.get_ref().clone();
    let chemin = web::block(move || store.write_facture(&facture)).await?;
    log::info!("Facture générée : {:?}", chemin);

    Ok(AddPatientResponse {
        success: true,
        err: "".to_string(),
        id_patient,
        facture: chemin.to_string_lossy().into_owned(),
    })
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchPatientRequest>,
) -> anyhow::Result<SearchPatientResponse> {
    use crate::schema::{departements, patient, soins};

    let info = info.into_inner();
    let filtre = info.departements;
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        let query = patient::table
            .inner_join(soins::table.on(patient::type_soin.eq(soins::type_soin)))
            .inner_join(
                departements::table.on(soins::id_departement.eq(departements::id_departement)),
            )
            .order(patient::nom.asc())
            .offset(first_index)
            .limit(limit)
            .into_boxed();
        let query = match filtre {
            Some(liste) => query.filter(departements::departement.eq_any(liste)),
            None => query,
        };
        query.get_results::<(PatientData, SoinData, DepartementData)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let patients = rows
        .into_iter()
        .map(|(patient, _, departement)| SearchPatientItem {
            id_patient: patient.id_patient,
            nom: patient.nom,
            prenom: patient.prenom,
            age: patient.age,
            sexe: patient.sexe,
            ethnie: patient.ethnie,
            telephone: patient.telephone,
            localite: patient.localite,
            tension: patient.tension,
            type_soin: patient.type_soin,
            departement: departement.departement,
        })
        .collect();

    Ok(SearchPatientResponse {
        success: true,
        err: "".to_string(),
        patients,
    })
}

async fn view_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewPatientRequest>,
) -> anyhow::Result<ViewPatientResponse> {
    use crate::schema::patient;

    let info = info.into_inner();
    assert::assert_patient(&pool, info.id_patient).await?;

    let conn = get_db_conn(&pool)?;
    let id_patient = info.id_patient;
    let data = web::block(move || {
        patient::table
            .filter(patient::id_patient.eq(id_patient))
            .get_result::<PatientData>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(ViewPatientResponse {
        success: true,
        err: "".to_string(),
        id_patient: data.id_patient,
        nom: data.nom,
        prenom: data.prenom,
        age: data.age,
        sexe: data.sexe,
        ethnie: data.ethnie,
        telephone: data.telephone,
        localite: data.localite,
        tension: data.tension,
        type_soin: data.type_soin,
    })
}

async fn delete_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeletePatientRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::patient;

    let info = info.into_inner();
    assert::assert_patient(&pool, info.id_patient).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(patient::table.filter(patient::id_patient.eq(info.id_patient)))
            .execute(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

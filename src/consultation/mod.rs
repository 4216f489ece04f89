mod requests;
mod responses;

use crate::{
    database::{assert, get_db_conn},
    models::{
        consultation::{ConsultationData, NewConsultation},
        departements::DepartementData,
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
    cfg.service(add).service(search).service(view);
}

crate::post_funcs! {
    (add, "/add", AddConsultationRequest, SimpleResponse),
    (search, "/search", SearchConsultationRequest, SearchConsultationResponse),
    (view, "/view", ViewConsultationRequest, ViewConsultationResponse),
}

/// Le montant facturé est celui du soin au moment de la consultation, il
/// est recopié dans la ligne et ne bouge plus si le tarif change ensuite.
async fn add_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddConsultationRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{administration, consultation, soins};

    let info = info.into_inner();
    assert::assert_employe(&pool, info.id_admin).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let montant = soins::table
                .filter(soins::type_soin.eq(&info.type_soin))
                .select(soins::prix)
                .first::<f64>(&conn)
                .optional()
                .context("Erreur de base de données")?;
            let montant = match montant {
                Some(montant) => montant,
                None => bail!("Type de soin introuvable"),
            };

            let data = NewConsultation {
                id_patient: info.id_patient,
                nom: info.nom,
                prenom: info.prenom,
                age: info.age,
                sexe: info.sexe,
                ethnie: info.ethnie,
                telephone: info.telephone,
                localite: info.localite,
                tension: info.tension,
                type_soin: info.type_soin,
                diagnostique: info.diagnostique,
                prescription: info.prescription,
                montant,
                id_admin: info.id_admin,
                date: Utc::now().naive_utc(),
            };
            diesel::insert_into(consultation::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;

            diesel::update(
                administration::table.filter(administration::id_admin.eq(info.id_admin)),
            )
            .set(
                administration::nombre_consultation
                    .eq(administration::nombre_consultation + 1),
            )
            .execute(&conn)
            .context("Erreur de base de données")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchConsultationRequest>,
) -> anyhow::Result<SearchConsultationResponse> {
    use crate::schema::{administration, consultation, departements};

    let info = info.into_inner();
    let filtre = info.departements;
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        let query = consultation::table
            .inner_join(
                administration::table.on(consultation::id_admin.eq(administration::id_admin)),
            )
            .inner_join(
                departements::table
                    .on(administration::id_departement.eq(departements::id_departement)),
            )
            .order(consultation::date.desc())
            .offset(first_index)
            .limit(limit)
            .into_boxed();
        let query = match filtre {
            Some(liste) => query.filter(departements::departement.eq_any(liste)),
            None => query,
        };
        query.get_results::<(
            ConsultationData,
            crate::models::administration::EmployeData,
            DepartementData,
        )>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let consultations = rows
        .into_iter()
        .map(|(data, _, _)| SearchConsultationItem {
            id_consultation: data.id_consultation,
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
            diagnostique: data.diagnostique,
            prescription: data.prescription,
            montant: data.montant,
            id_admin: data.id_admin,
            date: crate::utils::format_time_str(&data.date),
        })
        .collect();

    Ok(SearchConsultationResponse {
        success: true,
        err: "".to_string(),
        consultations,
    })
}

async fn view_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewConsultationRequest>,
) -> anyhow::Result<ViewConsultationResponse> {
    use crate::schema::consultation;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let id_consultation = info.id_consultation;
    let data = web::block(move || {
        consultation::table
            .filter(consultation::id_consultation.eq(id_consultation))
            .get_result::<ConsultationData>(&conn)
            .optional()
    })
    .await
    .context("Erreur de base de données")?;

    let data = match data {
        Some(data) => data,
        None => bail!("Consultation introuvable"),
    };

    Ok(ViewConsultationResponse {
        success: true,
        err: "".to_string(),
        id_consultation: data.id_consultation,
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
        diagnostique: data.diagnostique,
        prescription: data.prescription,
        montant: data.montant,
        id_admin: data.id_admin,
        date: crate::utils::format_time_str(&data.date),
    })
}

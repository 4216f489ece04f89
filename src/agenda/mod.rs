mod requests;
mod responses;

use crate::{
    database::{assert, get_db_conn},
    models::{
        agenda::{AgendaData, NewAgenda, UpdateAgenda},
        departements::DepartementData,
    },
    protocol::{InsertResponse, SimpleResponse},
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add)
        .service(modify)
        .service(search)
        .service(view)
        .service(delete);
}

crate::post_funcs! {
    (add, "/add", AddAgendaRequest, InsertResponse),
    (modify, "/modify", ModifyAgendaRequest, SimpleResponse),
    (search, "/search", SearchAgendaRequest, SearchAgendaResponse),
    (view, "/view", ViewAgendaRequest, ViewAgendaResponse),
    (delete, "/delete", DeleteAgendaRequest, SimpleResponse),
}

/// Promotion d'un patient : la fiche d'accueil devient un rendez-vous et la
/// ligne patient disparaît, dans la même transaction.
async fn add_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddAgendaRequest>,
) -> anyhow::Result<InsertResponse> {
    use crate::schema::{agenda, patient};

    let info = info.into_inner();
    assert::assert_patient(&pool, info.id_patient).await?;
    assert::assert_employe(&pool, info.id_admin).await?;

    let date = crate::utils::parse_date_str(&info.date).context("Date de rendez-vous invalide")?;
    if info.heure.trim().is_empty() {
        bail!("Heure de rendez-vous manquante");
    }

    let conn = get_db_conn(&pool)?;
    let id_agenda = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let data = NewAgenda {
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
                id_admin: info.id_admin,
                date,
                heure: info.heure,
            };
            diesel::insert_into(agenda::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;
            let id_agenda = diesel::select(crate::database::last_insert_id)
                .get_result::<u64>(&conn)
                .context("Erreur de base de données")?;

            diesel::delete(patient::table.filter(patient::id_patient.eq(info.id_patient)))
                .execute(&conn)
                .context("Erreur de base de données")?;

            Ok(id_agenda)
        })
    })
    .await?;

    Ok(InsertResponse::ok(id_agenda))
}

async fn modify_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ModifyAgendaRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::agenda;

    let info = info.into_inner();
    assert::assert_agenda(&pool, info.id_agenda).await?;

    if let Some(id_admin) = info.id_admin {
        assert::assert_employe(&pool, id_admin).await?;
    }
    let date = match &info.date {
        Some(date) => {
            Some(crate::utils::parse_date_str(date).context("Date de rendez-vous invalide")?)
        }
        None => None,
    };

    let id_agenda = info.id_agenda;
    let data = UpdateAgenda {
        nom: info.nom,
        prenom: info.prenom,
        age: info.age,
        sexe: info.sexe,
        ethnie: info.ethnie,
        telephone: info.telephone,
        localite: info.localite,
        tension: info.tension,
        diagnostique: info.diagnostique,
        prescription: info.prescription,
        id_admin: info.id_admin,
        date,
        heure: info.heure,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::update(agenda::table.filter(agenda::id_agenda.eq(id_agenda)))
            .set(&data)
            .execute(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchAgendaRequest>,
) -> anyhow::Result<SearchAgendaResponse> {
    use crate::schema::{administration, agenda, departements};

    let info = info.into_inner();
    let filtre = info.departements;
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        let query = agenda::table
            .inner_join(administration::table.on(agenda::id_admin.eq(administration::id_admin)))
            .inner_join(
                departements::table
                    .on(administration::id_departement.eq(departements::id_departement)),
            )
            .order(agenda::date.asc())
            .offset(first_index)
            .limit(limit)
            .into_boxed();
        let query = match filtre {
            Some(liste) => query.filter(departements::departement.eq_any(liste)),
            None => query,
        };
        query.get_results::<(
            AgendaData,
            crate::models::administration::EmployeData,
            DepartementData,
        )>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let agenda = rows
        .into_iter()
        .map(|(data, _, _)| SearchAgendaItem {
            id_agenda: data.id_agenda,
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
            id_admin: data.id_admin,
            date: data.date.to_string(),
            heure: data.heure,
        })
        .collect();

    Ok(SearchAgendaResponse {
        success: true,
        err: "".to_string(),
        agenda,
    })
}

async fn view_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewAgendaRequest>,
) -> anyhow::Result<ViewAgendaResponse> {
    use crate::schema::agenda;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let id_agenda = info.id_agenda;
    let data = web::block(move || {
        agenda::table
            .filter(agenda::id_agenda.eq(id_agenda))
            .get_result::<AgendaData>(&conn)
            .optional()
    })
    .await
    .context("Erreur de base de données")?;

    let data = match data {
        Some(data) => data,
        None => bail!("Rendez-vous introuvable"),
    };

    Ok(ViewAgendaResponse {
        success: true,
        err: "".to_string(),
        id_agenda: data.id_agenda,
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
        id_admin: data.id_admin,
        date: data.date.to_string(),
        heure: data.heure,
    })
}

async fn delete_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteAgendaRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::agenda;

    let info = info.into_inner();
    assert::assert_agenda(&pool, info.id_agenda).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(agenda::table.filter(agenda::id_agenda.eq(info.id_agenda))).execute(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

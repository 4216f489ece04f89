mod requests;
mod responses;

use crate::{
    database::{assert, get_db_conn},
    models::{
        departements::DepartementData,
        soins::{NewSoin, SoinData},
    },
    protocol::{InsertResponse, SimpleResponse},
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add).service(search).service(delete);
}

crate::post_funcs! {
    (add, "/add", AddSoinRequest, InsertResponse),
    (search, "/search", SearchSoinRequest, SearchSoinResponse),
    (delete, "/delete", DeleteSoinRequest, SimpleResponse),
}

async fn add_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddSoinRequest>,
) -> anyhow::Result<InsertResponse> {
    use crate::schema::{departements, soins};

    let info = info.into_inner();
    if info.type_soin.trim().is_empty() {
        bail!("Tous les champs sont requis");
    }
    if !info.prix.is_finite() || info.prix < 0.0 {
        bail!("Le prix doit être un nombre valide");
    }

    let conn = get_db_conn(&pool)?;
    let id_soin = web::block(move || {
        conn.transaction(|| {
            // le département doit préexister, contrairement à l'embauche qui
            // le crée à la volée
            let id_departement = departements::table
                .filter(departements::departement.eq(&info.departement))
                .select(departements::id_departement)
                .first::<u64>(&conn)
                .optional()
                .context("Erreur de base de données")?;
            let id_departement = match id_departement {
                Some(id) => id,
                None => bail!("Le département spécifié n'existe pas"),
            };

            let res = soins::table
                .filter(soins::type_soin.eq(&info.type_soin))
                .count()
                .get_result::<i64>(&conn)
                .context("Erreur de base de données")?;
            if res > 0 {
                bail!("Le soin existe déjà");
            }

            let data = NewSoin {
                type_soin: info.type_soin,
                prix: info.prix,
                id_departement,
            };
            diesel::insert_into(soins::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;
            diesel::select(crate::database::last_insert_id)
                .get_result::<u64>(&conn)
                .context("Erreur de base de données")
        })
    })
    .await?;

    Ok(InsertResponse::ok(id_soin))
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchSoinRequest>,
) -> anyhow::Result<SearchSoinResponse> {
    use crate::schema::{departements, soins};

    let info = info.into_inner();
    let pattern = crate::utils::get_str_pattern_opt(info.type_soin);
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        soins::table
            .inner_join(
                departements::table.on(soins::id_departement.eq(departements::id_departement)),
            )
            .filter(soins::type_soin.like(pattern))
            .order(soins::type_soin.asc())
            .offset(first_index)
            .limit(limit)
            .get_results::<(SoinData, DepartementData)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let soins = rows
        .into_iter()
        .map(|(soin, departement)| SearchSoinItem {
            id_soin: soin.id_soin,
            type_soin: soin.type_soin,
            prix: soin.prix,
            departement: departement.departement,
        })
        .collect();

    Ok(SearchSoinResponse {
        success: true,
        err: "".to_string(),
        soins,
    })
}

async fn delete_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteSoinRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::soins;

    let info = info.into_inner();
    assert::assert_soin(&pool, info.id_soin).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(soins::table.filter(soins::id_soin.eq(info.id_soin))).execute(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

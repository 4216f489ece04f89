mod requests;
mod responses;

use crate::{
    database::get_db_conn,
    models::comptabilite::{ChargeData, NewCharge},
    protocol::InsertResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::{
    dsl::{max, sum},
    prelude::*,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add_charge)
        .service(search_charge)
        .service(total_consultation)
        .service(total_vente)
        .service(total_achat)
        .service(total_paiement);
}

crate::post_funcs! {
    (add_charge, "/add_charge", AddChargeRequest, InsertResponse),
    (search_charge, "/search_charge", MonthRequest, SearchChargeResponse),
    (total_consultation, "/total_consultation", MonthRequest, TotalResponse),
    (total_vente, "/total_vente", MonthRequest, TotalResponse),
    (total_achat, "/total_achat", MonthRequest, TotalResponse),
    (total_paiement, "/total_paiement", MonthRequest, TotalResponse),
}

async fn add_charge_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddChargeRequest>,
) -> anyhow::Result<InsertResponse> {
    use crate::schema::comptabilite;

    let info = info.into_inner();
    if info.charge.trim().is_empty() {
        bail!("Veuillez fournir les champs obligatoires : charge, credit et date");
    }
    let date = crate::utils::parse_date_str(&info.date).context("Date de l'écriture invalide")?;

    let conn = get_db_conn(&pool)?;
    let id_charge = web::block(move || {
        conn.transaction(|| {
            let data = NewCharge {
                charge: info.charge,
                credit: info.credit,
                description: info.description,
                date,
            };
            diesel::insert_into(comptabilite::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;
            diesel::select(crate::database::last_insert_id)
                .get_result::<u64>(&conn)
                .context("Erreur de base de données")
        })
    })
    .await?;

    Ok(InsertResponse::ok(id_charge))
}

async fn search_charge_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MonthRequest>,
) -> anyhow::Result<SearchChargeResponse> {
    use crate::schema::comptabilite;

    let info = info.into_inner();
    let (debut, fin) = crate::utils::month_window(info.annee, info.mois)?;
    let (debut, fin) = (debut.date(), fin.date());

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        comptabilite::table
            .filter(comptabilite::date.ge(debut))
            .filter(comptabilite::date.lt(fin))
            .order(comptabilite::date.asc())
            .get_results::<ChargeData>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let charges = rows
        .into_iter()
        .map(|data| SearchChargeItem {
            id_charge: data.id_charge,
            charge: data.charge,
            credit: data.credit,
            description: data.description.unwrap_or_default(),
            date: data.date.to_string(),
        })
        .collect();

    Ok(SearchChargeResponse {
        success: true,
        err: "".to_string(),
        charges,
    })
}

async fn total_consultation_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MonthRequest>,
) -> anyhow::Result<TotalResponse> {
    use crate::schema::consultation;

    let info = info.into_inner();
    let (debut, fin) = crate::utils::month_window(info.annee, info.mois)?;

    let conn = get_db_conn(&pool)?;
    let (total, derniere) = web::block(move || {
        consultation::table
            .filter(consultation::date.ge(debut))
            .filter(consultation::date.lt(fin))
            .select((sum(consultation::montant), max(consultation::date)))
            .get_result::<(Option<f64>, Option<NaiveDateTime>)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(total_response(total, derniere.map(|d| crate::utils::format_time_str(&d))))
}

async fn total_vente_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MonthRequest>,
) -> anyhow::Result<TotalResponse> {
    use crate::schema::vente;

    let info = info.into_inner();
    let (debut, fin) = crate::utils::month_window(info.annee, info.mois)?;

    let conn = get_db_conn(&pool)?;
    let (total, derniere) = web::block(move || {
        vente::table
            .filter(vente::date.ge(debut))
            .filter(vente::date.lt(fin))
            .select((sum(vente::montant_total), max(vente::date)))
            .get_result::<(Option<f64>, Option<NaiveDateTime>)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(total_response(total, derniere.map(|d| crate::utils::format_time_str(&d))))
}

/// Le montant d'un achat est `quantité × prix d'achat`, le cumul est donc
/// replié côté Rust à partir des lignes du mois.
async fn total_achat_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MonthRequest>,
) -> anyhow::Result<TotalResponse> {
    use crate::schema::historique_achats;

    let info = info.into_inner();
    let (debut, fin) = crate::utils::month_window(info.annee, info.mois)?;
    let (debut, fin) = (debut.date(), fin.date());

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        historique_achats::table
            .filter(historique_achats::date_achat.ge(debut))
            .filter(historique_achats::date_achat.lt(fin))
            .select((
                historique_achats::quantite,
                historique_achats::prix_achat,
                historique_achats::date_achat,
            ))
            .get_results::<(i32, f64, NaiveDate)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let total = rows
        .iter()
        .map(|(quantite, prix_achat, _)| *quantite as f64 * prix_achat)
        .sum::<f64>();
    let derniere = rows.iter().map(|(_, _, date)| *date).max();

    Ok(total_response(
        if rows.is_empty() { None } else { Some(total) },
        derniere.map(|d| d.to_string()),
    ))
}

/// Coût employeur du mois : brut + prime + sur-salaire de chaque paie.
async fn total_paiement_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MonthRequest>,
) -> anyhow::Result<TotalResponse> {
    use crate::schema::{paiement, salaire};

    let info = info.into_inner();
    let (debut, fin) = crate::utils::month_window(info.annee, info.mois)?;

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        paiement::table
            .inner_join(salaire::table.on(paiement::id_salaire.eq(salaire::id_salaire)))
            .filter(paiement::date_paiement.ge(debut))
            .filter(paiement::date_paiement.lt(fin))
            .select((
                salaire::salaire_brute,
                paiement::prime,
                paiement::sur_salaire,
                paiement::date_paiement,
            ))
            .get_results::<(f64, f64, f64, NaiveDateTime)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let total = rows
        .iter()
        .map(|(brut, prime, sur_salaire, _)| brut + prime + sur_salaire)
        .sum::<f64>();
    let derniere = rows.iter().map(|(_, _, _, date)| *date).max();

    Ok(total_response(
        if rows.is_empty() { None } else { Some(total) },
        derniere.map(|d| crate::utils::format_time_str(&d)),
    ))
}

fn total_response(total: Option<f64>, derniere_date: Option<String>) -> TotalResponse {
    TotalResponse {
        success: true,
        err: "".to_string(),
        total: total.unwrap_or(0.0),
        derniere_date: derniere_date.unwrap_or_default(),
    }
}

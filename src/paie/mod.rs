mod requests;
mod responses;
mod utils;

use crate::{
    database::{assert, get_db_conn},
    documents::{DocumentStore, FichePaie},
    models::{
        administration::EmployeData,
        avance_salaire::NewAvance,
        paiement::NewPaiement,
        salaire::{SalaireData, UpdateSalaire},
    },
    protocol::{InsertResponse, SimpleResponse},
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::{Datelike, Utc};
use diesel::{dsl::sum, prelude::*};

use self::{
    requests::*,
    responses::*,
    utils::{salaire_net, ElementsPaie},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_salaire)
        .service(view_salaire)
        .service(modify_salaire)
        .service(add_avance)
        .service(view_avance)
        .service(pay);
}

crate::post_funcs! {
    (search_salaire, "/search_salaire", SearchSalaireRequest, SearchSalaireResponse),
    (view_salaire, "/view_salaire", ViewSalaireRequest, ViewSalaireResponse),
    (modify_salaire, "/modify_salaire", ModifySalaireRequest, SimpleResponse),
    (add_avance, "/add_avance", AddAvanceRequest, InsertResponse),
    (view_avance, "/view_avance", ViewAvanceRequest, ViewAvanceResponse),
}

async fn search_salaire_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchSalaireRequest>,
) -> anyhow::Result<SearchSalaireResponse> {
    use crate::schema::salaire;

    let info = info.into_inner();
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        salaire::table
            .order(salaire::salaire_brute.asc())
            .offset(first_index)
            .limit(limit)
            .get_results::<SalaireData>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let salaires = rows
        .into_iter()
        .map(|data| SearchSalaireItem {
            id_salaire: data.id_salaire,
            salaire_brute: data.salaire_brute,
            inps: data.inps,
            amo: data.amo,
        })
        .collect();

    Ok(SearchSalaireResponse {
        success: true,
        err: "".to_string(),
        salaires,
    })
}

async fn view_salaire_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewSalaireRequest>,
) -> anyhow::Result<ViewSalaireResponse> {
    use crate::schema::{administration, salaire};

    let info = info.into_inner();
    assert::assert_employe(&pool, info.id_admin).await?;

    let conn = get_db_conn(&pool)?;
    let id_admin = info.id_admin;
    let data = web::block(move || {
        administration::table
            .inner_join(salaire::table.on(administration::id_salaire.eq(salaire::id_salaire)))
            .filter(administration::id_admin.eq(id_admin))
            .select((
                salaire::id_salaire,
                salaire::salaire_brute,
                salaire::inps,
                salaire::amo,
            ))
            .get_result::<SalaireData>(&conn)
            .optional()
    })
    .await
    .context("Erreur de base de données")?;

    let data = match data {
        Some(data) => data,
        None => bail!("Aucun salaire trouvé pour cet employé"),
    };

    Ok(ViewSalaireResponse {
        success: true,
        err: "".to_string(),
        id_salaire: data.id_salaire,
        salaire_brute: data.salaire_brute,
        inps: data.inps,
        amo: data.amo,
    })
}

async fn modify_salaire_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ModifySalaireRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::salaire;

    let info = info.into_inner();
    assert::assert_salaire(&pool, info.id_salaire).await?;

    let data = UpdateSalaire {
        salaire_brute: info.salaire_brute,
        inps: info.inps,
        amo: info.amo,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::update(salaire::table.filter(salaire::id_salaire.eq(info.id_salaire)))
            .set(&data)
            .execute(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SimpleResponse::ok())
}

async fn add_avance_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddAvanceRequest>,
) -> anyhow::Result<InsertResponse> {
    use crate::schema::avance_salaire;

    let info = info.into_inner();
    assert::assert_employe(&pool, info.id_admin).await?;

    if !info.montant_avance.is_finite() || info.montant_avance <= 0.0 {
        bail!("Montant d'avance invalide");
    }
    let date_avance =
        crate::utils::parse_date_str(&info.date_avance).context("Date d'avance invalide")?;

    let conn = get_db_conn(&pool)?;
    let id_avance = web::block(move || {
        conn.transaction(|| {
            let data = NewAvance {
                id_admin: info.id_admin,
                montant_avance: info.montant_avance,
                date_avance,
            };
            diesel::insert_into(avance_salaire::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;
            diesel::select(crate::database::last_insert_id)
                .get_result::<u64>(&conn)
                .context("Erreur de base de données")
        })
    })
    .await?;

    Ok(InsertResponse::ok(id_avance))
}

async fn view_avance_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewAvanceRequest>,
) -> anyhow::Result<ViewAvanceResponse> {
    use crate::schema::avance_salaire;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let id_admin = info.id_admin;
    let avance = web::block(move || {
        avance_salaire::table
            .filter(avance_salaire::id_admin.eq(id_admin))
            .filter(avance_salaire::montant_avance.gt(0.0))
            .select(sum(avance_salaire::montant_avance))
            .get_result::<Option<f64>>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(ViewAvanceResponse {
        success: true,
        err: "".to_string(),
        avance: avance.unwrap_or(0.0),
    })
}

#[post("/pay")]
async fn pay(
    pool: web::Data<DbPool>,
    documents: web::Data<DocumentStore>,
    info: web::Json<PayRequest>,
) -> impl Responder {
    let response = match pay_impl(pool, documents, info).await {
        Ok(response) => response,
        Err(err) => PayResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

/// Paie mensuelle d'un employé : la tranche est retrouvée par le brut, les
/// avances en cours sont soldées dans le net et une seule paie est admise
/// par mois civil.
async fn pay_impl(
    pool: web::Data<DbPool>,
    documents: web::Data<DocumentStore>,
    info: web::Json<PayRequest>,
) -> anyhow::Result<PayResponse> {
    use crate::schema::{administration, avance_salaire, paiement, salaire};

    let info = info.into_inner();
    assert::assert_employe(&pool, info.id_admin).await?;

    let now = Utc::now().naive_utc();
    let (debut_mois, fin_mois) = crate::utils::month_window(now.year(), now.month())?;

    let conn = get_db_conn(&pool)?;
    let (employe, elements, net) = web::block(move || {
        conn.transaction(|| {
            let tranche = salaire::table
                .filter(salaire::salaire_brute.eq(info.salaire_brute))
                .first::<SalaireData>(&conn)
                .optional()
                .context("Erreur de base de données")?;
            let tranche = match tranche {
                Some(tranche) => tranche,
                None => bail!("Le salaire brut spécifié n'existe pas"),
            };

            let employe = administration::table
                .filter(administration::id_admin.eq(info.id_admin))
                .get_result::<EmployeData>(&conn)
                .context("Erreur de base de données")?;

            let avance = avance_salaire::table
                .filter(avance_salaire::id_admin.eq(info.id_admin))
                .filter(avance_salaire::montant_avance.gt(0.0))
                .select(sum(avance_salaire::montant_avance))
                .get_result::<Option<f64>>(&conn)
                .context("Erreur de base de données")?
                .unwrap_or(0.0);

            let res = paiement::table
                .filter(paiement::id_admin.eq(info.id_admin))
                .filter(paiement::date_paiement.ge(debut_mois))
                .filter(paiement::date_paiement.lt(fin_mois))
                .count()
                .get_result::<i64>(&conn)
                .context("Erreur de base de données")?;
            if res > 0 {
                bail!("Un paiement a déjà été effectué ce mois-ci pour cet employé");
            }

            let elements = ElementsPaie {
                salaire_brute: tranche.salaire_brute,
                sur_salaire: info.sur_salaire,
                prime: info.prime,
                inps: tranche.inps,
                amo: tranche.amo,
                its: info.its,
                avance,
            };
            let net = salaire_net(&elements);

            let data = NewPaiement {
                id_salaire: tranche.id_salaire,
                id_admin: info.id_admin,
                sur_salaire: elements.sur_salaire,
                prime: elements.prime,
                inps: elements.inps,
                amo: elements.amo,
                its: elements.its,
                avance: elements.avance,
                net,
                date_paiement: now,
            };
            diesel::insert_into(paiement::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;

            Ok((employe, elements, net))
        })
    })
    .await?;

    let fiche = FichePaie {
        id_admin: employe.id_admin,
        nom: employe.nom,
        prenom: employe.prenom,
        mail: employe.mail,
        telephone: employe.telephone,
        salaire_brute: elements.salaire_brute,
        sur_salaire: elements.sur_salaire,
        prime: elements.prime,
        avance: elements.avance,
        amo: elements.amo,
        inps: elements.inps,
        its: elements.its,
        net,
        date: now.date(),
    };
    let store = documents.get_ref().clone();
    let chemin = web::block(move || store.write_fiche_paie(&fiche)).await?;
    log::info!("Fiche de paie générée : {:?}", chemin);

    Ok(PayResponse {
        success: true,
        err: "".to_string(),
        net,
        fiche_paie: chemin.to_string_lossy().into_owned(),
    })
}

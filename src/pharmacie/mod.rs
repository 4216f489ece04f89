mod requests;
mod responses;

use crate::{
    database::{find_employe_by_code, get_db_conn},
    models::{
        detaille_vente::{DetailleVenteData, NewDetailleVente},
        historique_achats::{AchatData, NewAchat},
        medicaments::{MedicamentData, NewMedicament},
        stock_medicaments::{NewStock, StockData},
        vente::{NewVente, VenteData},
    },
    protocol::InsertResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add_medicament)
        .service(search_medicament)
        .service(prix)
        .service(search_nom)
        .service(search_forme)
        .service(search_dosage)
        .service(sell)
        .service(search_vente)
        .service(search_detaille)
        .service(search_achat);
}

crate::post_funcs! {
    (add_medicament, "/add_medicament", AddMedicamentRequest, InsertResponse),
    (search_medicament, "/search_medicament", SearchMedicamentRequest, SearchMedicamentResponse),
    (prix, "/prix", PrixRequest, PrixResponse),
    (search_nom, "/search_nom", SearchChampRequest, SearchChampResponse),
    (search_forme, "/search_forme", SearchChampRequest, SearchChampResponse),
    (search_dosage, "/search_dosage", SearchChampRequest, SearchChampResponse),
    (sell, "/sell", SellRequest, SellResponse),
    (search_vente, "/search_vente", SearchVenteRequest, SearchVenteResponse),
    (search_detaille, "/search_detaille", SearchDetailleRequest, SearchDetailleResponse),
    (search_achat, "/search_achat", SearchAchatRequest, SearchAchatResponse),
}

/// Entrée de stock : la fiche du médicament est créée au besoin, le stock
/// existant est abondé et l'achat est journalisé. Les champs texte sont
/// normalisés en minuscules avant comparaison.
async fn add_medicament_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddMedicamentRequest>,
) -> anyhow::Result<InsertResponse> {
    use crate::schema::{historique_achats, medicaments, stock_medicaments};

    let mut info = info.into_inner();
    info.nom = info.nom.to_lowercase();
    info.forme = info.forme.to_lowercase();
    info.dosage = info.dosage.to_lowercase();
    info.posologie = info.posologie.to_lowercase();
    info.fournisseur = info.fournisseur.to_lowercase();

    if info.stock_courant <= 0 {
        bail!("Quantité achetée invalide");
    }
    let date_achat = crate::utils::parse_date_str(&info.date_achat).context("Date d'achat invalide")?;
    let date_peremption =
        crate::utils::parse_date_str(&info.date_peremption).context("Date de péremption invalide")?;

    let conn = get_db_conn(&pool)?;
    let id_medicament = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let existing = medicaments::table
                .filter(medicaments::nom.eq(&info.nom))
                .filter(medicaments::forme.eq(&info.forme))
                .filter(medicaments::dosage.eq(&info.dosage))
                .select(medicaments::id_medicament)
                .first::<u64>(&conn)
                .optional()
                .context("Erreur de base de données")?;

            let id_medicament = match existing {
                Some(id) => id,
                None => {
                    let data = NewMedicament {
                        nom: info.nom.clone(),
                        forme: info.forme.clone(),
                        dosage: info.dosage.clone(),
                        posologie: info.posologie.clone(),
                    };
                    diesel::insert_into(medicaments::table)
                        .values(data)
                        .execute(&conn)
                        .context("Erreur de base de données")?;
                    diesel::select(crate::database::last_insert_id)
                        .get_result::<u64>(&conn)
                        .context("Erreur de base de données")?
                }
            };

            let stock = stock_medicaments::table
                .filter(stock_medicaments::id_medicament.eq(id_medicament))
                .count()
                .get_result::<i64>(&conn)
                .context("Erreur de base de données")?;
            if stock > 0 {
                diesel::update(
                    stock_medicaments::table
                        .filter(stock_medicaments::id_medicament.eq(id_medicament)),
                )
                .set((
                    stock_medicaments::stock_courant
                        .eq(stock_medicaments::stock_courant + info.stock_courant),
                    stock_medicaments::prix_achat.eq(info.prix_achat),
                    stock_medicaments::prix_unitaire.eq(info.prix_unitaire),
                    stock_medicaments::date_achat.eq(date_achat),
                    stock_medicaments::date_peremption.eq(date_peremption),
                ))
                .execute(&conn)
                .context("Erreur de base de données")?;
            } else {
                let data = NewStock {
                    id_medicament,
                    stock_courant: info.stock_courant,
                    prix_achat: info.prix_achat,
                    prix_unitaire: info.prix_unitaire,
                    date_achat,
                    date_peremption,
                };
                diesel::insert_into(stock_medicaments::table)
                    .values(data)
                    .execute(&conn)
                    .context("Erreur de base de données")?;
            }

            let data = NewAchat {
                id_medicament,
                quantite: info.stock_courant,
                prix_achat: info.prix_achat,
                date_achat,
                fournisseur: info.fournisseur,
                num_fournisseur: info.num_fournisseur,
            };
            diesel::insert_into(historique_achats::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;

            Ok(id_medicament)
        })
    })
    .await?;

    Ok(InsertResponse::ok(id_medicament))
}

async fn search_medicament_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchMedicamentRequest>,
) -> anyhow::Result<SearchMedicamentResponse> {
    use crate::schema::{medicaments, stock_medicaments};

    let info = info.into_inner();
    let nom = info.nom.map(|s| s.to_lowercase());
    let forme = info.forme.map(|s| s.to_lowercase());
    let dosage = info.dosage.map(|s| s.to_lowercase());
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        let mut query = stock_medicaments::table
            .inner_join(
                medicaments::table
                    .on(stock_medicaments::id_medicament.eq(medicaments::id_medicament)),
            )
            .order(medicaments::nom.asc())
            .offset(first_index)
            .limit(limit)
            .into_boxed();
        if let Some(nom) = nom {
            query = query.filter(medicaments::nom.eq(nom));
        }
        if let Some(forme) = forme {
            query = query.filter(medicaments::forme.eq(forme));
        }
        if let Some(dosage) = dosage {
            query = query.filter(medicaments::dosage.eq(dosage));
        }
        query.get_results::<(StockData, MedicamentData)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let medicaments = rows
        .into_iter()
        .map(|(stock, medicament)| SearchMedicamentItem {
            id_stock: stock.id_stock,
            id_medicament: medicament.id_medicament,
            nom: medicament.nom,
            forme: medicament.forme,
            dosage: medicament.dosage,
            posologie: medicament.posologie,
            prix_unitaire: stock.prix_unitaire,
            stock_courant: stock.stock_courant,
            date_peremption: stock.date_peremption.to_string(),
        })
        .collect();

    Ok(SearchMedicamentResponse {
        success: true,
        err: "".to_string(),
        medicaments,
    })
}

async fn prix_impl(
    pool: web::Data<DbPool>,
    info: web::Json<PrixRequest>,
) -> anyhow::Result<PrixResponse> {
    use crate::schema::{medicaments, stock_medicaments};

    let info = info.into_inner();
    let nom = info.nom.to_lowercase();
    let forme = info.forme.to_lowercase();
    let dosage = info.dosage.to_lowercase();

    let conn = get_db_conn(&pool)?;
    let row = web::block(move || {
        medicaments::table
            .inner_join(
                stock_medicaments::table
                    .on(medicaments::id_medicament.eq(stock_medicaments::id_medicament)),
            )
            .filter(medicaments::nom.eq(nom))
            .filter(medicaments::forme.eq(forme))
            .filter(medicaments::dosage.eq(dosage))
            .select((medicaments::id_medicament, stock_medicaments::prix_unitaire))
            .first::<(u64, f64)>(&conn)
            .optional()
    })
    .await
    .context("Erreur de base de données")?;

    let (id_medicament, prix_unitaire) = match row {
        Some(row) => row,
        None => bail!("Médicament introuvable"),
    };

    Ok(PrixResponse {
        success: true,
        err: "".to_string(),
        id_medicament,
        prix_unitaire,
    })
}

async fn search_nom_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchChampRequest>,
) -> anyhow::Result<SearchChampResponse> {
    use crate::schema::medicaments;

    let pattern = crate::utils::get_str_pattern_opt(info.into_inner().pattern);
    let conn = get_db_conn(&pool)?;
    let valeurs = web::block(move || {
        medicaments::table
            .filter(medicaments::nom.like(pattern))
            .select(medicaments::nom)
            .distinct()
            .order(medicaments::nom.asc())
            .get_results::<String>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SearchChampResponse {
        success: true,
        err: "".to_string(),
        valeurs,
    })
}

async fn search_forme_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchChampRequest>,
) -> anyhow::Result<SearchChampResponse> {
    use crate::schema::medicaments;

    let pattern = crate::utils::get_str_pattern_opt(info.into_inner().pattern);
    let conn = get_db_conn(&pool)?;
    let valeurs = web::block(move || {
        medicaments::table
            .filter(medicaments::forme.like(pattern))
            .select(medicaments::forme)
            .distinct()
            .order(medicaments::forme.asc())
            .get_results::<String>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SearchChampResponse {
        success: true,
        err: "".to_string(),
        valeurs,
    })
}

async fn search_dosage_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchChampRequest>,
) -> anyhow::Result<SearchChampResponse> {
    use crate::schema::medicaments;

    let pattern = crate::utils::get_str_pattern_opt(info.into_inner().pattern);
    let conn = get_db_conn(&pool)?;
    let valeurs = web::block(move || {
        medicaments::table
            .filter(medicaments::dosage.like(pattern))
            .select(medicaments::dosage)
            .distinct()
            .order(medicaments::dosage.asc())
            .get_results::<String>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    Ok(SearchChampResponse {
        success: true,
        err: "".to_string(),
        valeurs,
    })
}

/// Vente au comptoir. La décrémentation de chaque stock est conditionnée à
/// `stock_courant >= quantité` ; la première ligne en défaut annule la vente
/// entière, lignes et en-tête compris.
async fn sell_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SellRequest>,
) -> anyhow::Result<SellResponse> {
    use crate::schema::{administration, detaille_vente, stock_medicaments, vente};

    let info = info.into_inner();
    if info.medicaments.is_empty() {
        bail!("Aucun médicament fourni");
    }
    if info.mode_paiement.trim().is_empty() {
        bail!("Le mode de paiement est requis");
    }
    for ligne in &info.medicaments {
        if ligne.quantite_vendue <= 0 {
            bail!("Quantité vendue invalide pour le médicament : {}", ligne.nom);
        }
    }

    let montant_total = info
        .medicaments
        .iter()
        .map(|ligne| ligne.quantite_vendue as f64 * ligne.prix_unitaire)
        .sum::<f64>();

    let conn = get_db_conn(&pool)?;
    let id_vente = web::block(move || {
        conn.transaction(|| {
            let employe = find_employe_by_code(&conn, &info.code_admin)?;

            let data = NewVente {
                montant_total,
                code_admin: employe.code_admin,
                mode_paiement: info.mode_paiement,
                date: Utc::now().naive_utc(),
            };
            diesel::insert_into(vente::table)
                .values(data)
                .execute(&conn)
                .context("Erreur de base de données")?;
            let id_vente = diesel::select(crate::database::last_insert_id)
                .get_result::<u64>(&conn)
                .context("Erreur de base de données")?;

            diesel::update(
                administration::table.filter(administration::id_admin.eq(employe.id_admin)),
            )
            .set(
                administration::nombre_consultation
                    .eq(administration::nombre_consultation + 1),
            )
            .execute(&conn)
            .context("Erreur de base de données")?;

            let lignes = info
                .medicaments
                .iter()
                .map(|ligne| NewDetailleVente {
                    id_vente,
                    id_medicament: ligne.id_medicament,
                    nom: ligne.nom.clone(),
                    forme: ligne.forme.clone(),
                    dosage: ligne.dosage.clone(),
                    quantite_vendue: ligne.quantite_vendue,
                    prix_unitaire: ligne.prix_unitaire,
                })
                .collect::<Vec<_>>();
            diesel::insert_into(detaille_vente::table)
                .values(&lignes)
                .execute(&conn)
                .context("Erreur de base de données")?;

            for ligne in &info.medicaments {
                let affected = diesel::update(
                    stock_medicaments::table
                        .filter(stock_medicaments::id_medicament.eq(ligne.id_medicament))
                        .filter(stock_medicaments::stock_courant.ge(ligne.quantite_vendue)),
                )
                .set(
                    stock_medicaments::stock_courant
                        .eq(stock_medicaments::stock_courant - ligne.quantite_vendue),
                )
                .execute(&conn)
                .context("Erreur de base de données")?;
                if affected == 0 {
                    bail!("Stock insuffisant pour le médicament : {}", ligne.nom);
                }
            }

            Ok(id_vente)
        })
    })
    .await?;

    log::info!("Vente {} enregistrée, montant total {}", id_vente, montant_total);

    Ok(SellResponse {
        success: true,
        err: "".to_string(),
        id_vente,
        montant_total,
    })
}

async fn search_vente_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchVenteRequest>,
) -> anyhow::Result<SearchVenteResponse> {
    use crate::schema::vente;

    let info = info.into_inner();
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        vente::table
            .order(vente::date.desc())
            .offset(first_index)
            .limit(limit)
            .get_results::<VenteData>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let ventes = rows
        .into_iter()
        .map(|data| SearchVenteItem {
            id_vente: data.id_vente,
            montant_total: data.montant_total,
            mode_paiement: data.mode_paiement,
            date: crate::utils::format_time_str(&data.date),
        })
        .collect();

    Ok(SearchVenteResponse {
        success: true,
        err: "".to_string(),
        ventes,
    })
}

async fn search_detaille_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchDetailleRequest>,
) -> anyhow::Result<SearchDetailleResponse> {
    use crate::schema::{detaille_vente, vente};

    let info = info.into_inner();
    let id_vente = info.id_vente;
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        let mut query = detaille_vente::table
            .inner_join(vente::table.on(detaille_vente::id_vente.eq(vente::id_vente)))
            .order(detaille_vente::id_vente.desc())
            .offset(first_index)
            .limit(limit)
            .into_boxed();
        if let Some(id_vente) = id_vente {
            query = query.filter(detaille_vente::id_vente.eq(id_vente));
        }
        query.get_results::<(DetailleVenteData, VenteData)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let detailles = rows
        .into_iter()
        .map(|(detaille, vente)| SearchDetailleItem {
            id_vente: detaille.id_vente,
            id_vente_detail: detaille.id_vente_detail,
            nom: detaille.nom,
            forme: detaille.forme,
            dosage: detaille.dosage,
            quantite_vendue: detaille.quantite_vendue,
            prix_unitaire: detaille.prix_unitaire,
            montant_vente: detaille.quantite_vendue as f64 * detaille.prix_unitaire,
            mode_paiement: vente.mode_paiement,
        })
        .collect();

    Ok(SearchDetailleResponse {
        success: true,
        err: "".to_string(),
        detailles,
    })
}

async fn search_achat_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchAchatRequest>,
) -> anyhow::Result<SearchAchatResponse> {
    use crate::schema::{historique_achats, medicaments};

    let info = info.into_inner();
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        historique_achats::table
            .inner_join(
                medicaments::table
                    .on(historique_achats::id_medicament.eq(medicaments::id_medicament)),
            )
            .order(historique_achats::date_achat.desc())
            .offset(first_index)
            .limit(limit)
            .get_results::<(AchatData, MedicamentData)>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    let achats = rows
        .into_iter()
        .map(|(achat, medicament)| SearchAchatItem {
            id_achat: achat.id_achat,
            nom: medicament.nom,
            forme: medicament.forme,
            dosage: medicament.dosage,
            quantite: achat.quantite,
            prix_achat: achat.prix_achat,
            date_achat: achat.date_achat.to_string(),
            fournisseur: achat.fournisseur,
            num_fournisseur: achat.num_fournisseur,
            montant_achat: achat.quantite as f64 * achat.prix_achat,
        })
        .collect();

    Ok(SearchAchatResponse {
        success: true,
        err: "".to_string(),
        achats,
    })
}

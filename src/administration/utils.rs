use actix_web::web;
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;
use diesel::MysqlConnection;

use crate::{
    models::{
        connexions::ConnexionData,
        departements::NewDepartement,
        salaire::{NewSalaire, SalaireData, TAUX_AMO, TAUX_INPS},
    },
    DbPool,
};

pub async fn get_id_admin_from_token(token: String, pool: &web::Data<DbPool>) -> anyhow::Result<u64> {
    use crate::schema::connexions;
    const MAX_LOGIN_TIME_SECS: i64 = 3600;

    let conn = pool.get().context("Connexion à la base de données impossible")?;
    let data = web::block(move || {
        connexions::table
            .filter(connexions::token.eq(token))
            .order(connexions::date_connexion.desc())
            .limit(1)
            .get_result::<ConnexionData>(&conn)
            .optional()
    })
    .await
    .context("Erreur de base de données")?;

    if let Some(data) = data {
        let time_diff = Utc::now()
            .naive_utc()
            .signed_duration_since(data.date_connexion);
        if time_diff.num_seconds() <= MAX_LOGIN_TIME_SECS {
            Ok(data.id_admin)
        } else {
            bail!("La session a expiré");
        }
    } else {
        bail!("Session inconnue");
    }
}

/// Page du front vers laquelle rediriger l'employé selon son département.
pub fn redirect_page(departement: &str) -> &'static str {
    match departement {
        "Administrateur" => "/admin",
        "Medecin généraliste" => "/dog",
        "Sage femme" => "/sage",
        "Échographiste" => "/echo",
        "Infirmier" => "/infirm",
        "Pharmacien" => "/pharmacie",
        "Secretaire Comptable" => "/comptable",
        "Interne/Garde" => "/interne",
        _ => "/infirm",
    }
}

/// Les tranches de salaire sont partagées entre employés, une ligne par
/// salaire brut distinct. INPS et AMO sont figés à la création de la tranche.
pub fn find_or_create_salaire(conn: &MysqlConnection, salaire_brute: f64) -> anyhow::Result<u64> {
    use crate::schema::salaire;

    let existing = salaire::table
        .filter(salaire::salaire_brute.eq(salaire_brute))
        .first::<SalaireData>(conn)
        .optional()
        .context("Erreur de base de données")?;
    if let Some(data) = existing {
        return Ok(data.id_salaire);
    }

    let data = NewSalaire {
        salaire_brute,
        inps: salaire_brute * TAUX_INPS,
        amo: salaire_brute * TAUX_AMO,
    };
    diesel::insert_into(salaire::table)
        .values(data)
        .execute(conn)
        .context("Erreur de base de données")?;
    diesel::select(crate::database::last_insert_id)
        .get_result::<u64>(conn)
        .context("Erreur de base de données")
}

pub fn find_or_create_departement(conn: &MysqlConnection, departement: &str) -> anyhow::Result<u64> {
    use crate::schema::departements;

    let existing = departements::table
        .filter(departements::departement.eq(departement))
        .select(departements::id_departement)
        .first::<u64>(conn)
        .optional()
        .context("Erreur de base de données")?;
    if let Some(id) = existing {
        return Ok(id);
    }

    let data = NewDepartement {
        departement: departement.to_string(),
    };
    diesel::insert_into(departements::table)
        .values(data)
        .execute(conn)
        .context("Erreur de base de données")?;
    diesel::select(crate::database::last_insert_id)
        .get_result::<u64>(conn)
        .context("Erreur de base de données")
}

#[cfg(test)]
mod tests {
    use super::redirect_page;

    #[test]
    fn redirections_par_departement() {
        assert_eq!(redirect_page("Administrateur"), "/admin");
        assert_eq!(redirect_page("Medecin généraliste"), "/dog");
        assert_eq!(redirect_page("Sage femme"), "/sage");
        assert_eq!(redirect_page("Échographiste"), "/echo");
        assert_eq!(redirect_page("Pharmacien"), "/pharmacie");
        assert_eq!(redirect_page("Secretaire Comptable"), "/comptable");
        assert_eq!(redirect_page("Interne/Garde"), "/interne");
        // tout le reste retombe sur la page infirmier
        assert_eq!(redirect_page("Infirmier"), "/infirm");
        assert_eq!(redirect_page("Gardien"), "/infirm");
    }
}

pub mod assert;

use crate::{models::administration::EmployeData, DbPool};
use actix_web::web;
use anyhow::{bail, Context};
use diesel::{
    prelude::*,
    r2d2::ConnectionManager,
    sql_types::{Bigint, Unsigned},
    MysqlConnection,
};
use r2d2::PooledConnection;

no_arg_sql_function!(last_insert_id, Unsigned<Bigint>);

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get().context("Connexion à la base de données impossible")
}

/// Retrouve l'employé correspondant à un code personnel en clair.
/// Le code est le principal de connexion, il n'y a pas de nom d'utilisateur.
pub fn find_employe_by_code(conn: &MysqlConnection, code: &str) -> anyhow::Result<EmployeData> {
    use crate::schema::administration;

    if code.trim().is_empty() {
        bail!("Code administrateur manquant ou invalide");
    }

    let hashed = crate::utils::hash_code(code);
    let employe = administration::table
        .filter(administration::code_admin.eq(hashed))
        .first::<EmployeData>(conn)
        .optional()
        .context("Erreur de base de données")?;

    match employe {
        Some(employe) => Ok(employe),
        None => bail!("Code administrateur incorrect"),
    }
}

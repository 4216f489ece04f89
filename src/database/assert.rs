use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_employe(pool: &web::Data<DbPool>, id_admin: u64) -> anyhow::Result<()> {
    use crate::schema::administration;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        administration::table
            .filter(administration::id_admin.eq(id_admin))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    if res == 0 {
        bail!("Employé introuvable");
    }

    Ok(())
}

pub async fn assert_patient(pool: &web::Data<DbPool>, id_patient: u64) -> anyhow::Result<()> {
    use crate::schema::patient;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        patient::table
            .filter(patient::id_patient.eq(id_patient))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    if res == 0 {
        bail!("Patient non trouvé");
    }

    Ok(())
}

pub async fn assert_agenda(pool: &web::Data<DbPool>, id_agenda: u64) -> anyhow::Result<()> {
    use crate::schema::agenda;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        agenda::table
            .filter(agenda::id_agenda.eq(id_agenda))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    if res == 0 {
        bail!("Rendez-vous introuvable");
    }

    Ok(())
}

pub async fn assert_salaire(pool: &web::Data<DbPool>, id_salaire: u64) -> anyhow::Result<()> {
    use crate::schema::salaire;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        salaire::table
            .filter(salaire::id_salaire.eq(id_salaire))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    if res == 0 {
        bail!("Salaire non trouvé");
    }

    Ok(())
}

pub async fn assert_soin(pool: &web::Data<DbPool>, id_soin: u64) -> anyhow::Result<()> {
    use crate::schema::soins;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        soins::table
            .filter(soins::id_soin.eq(id_soin))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("Erreur de base de données")?;

    if res == 0 {
        bail!("Soin introuvable");
    }

    Ok(())
}

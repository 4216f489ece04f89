use crate::schema::paiement;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct PaiementData {
    pub id_paiement: u64,
    pub id_salaire: u64,
    pub id_admin: u64,
    pub sur_salaire: f64,
    pub prime: f64,
    pub inps: f64,
    pub amo: f64,
    pub its: f64,
    pub avance: f64,
    pub net: f64,
    pub date_paiement: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "paiement"]
pub struct NewPaiement {
    pub id_salaire: u64,
    pub id_admin: u64,
    pub sur_salaire: f64,
    pub prime: f64,
    pub inps: f64,
    pub amo: f64,
    pub its: f64,
    pub avance: f64,
    pub net: f64,
    pub date_paiement: NaiveDateTime,
}

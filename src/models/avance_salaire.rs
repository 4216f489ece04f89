use crate::schema::avance_salaire;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct AvanceData {
    pub id_avance: u64,
    pub id_admin: u64,
    pub montant_avance: f64,
    pub date_avance: NaiveDate,
}

#[derive(Insertable)]
#[table_name = "avance_salaire"]
pub struct NewAvance {
    pub id_admin: u64,
    pub montant_avance: f64,
    pub date_avance: NaiveDate,
}

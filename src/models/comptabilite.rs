use crate::schema::comptabilite;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct ChargeData {
    pub id_charge: u64,
    pub charge: String,
    pub credit: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

#[derive(Insertable)]
#[table_name = "comptabilite"]
pub struct NewCharge {
    pub charge: String,
    pub credit: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

use crate::schema::stock_medicaments;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct StockData {
    pub id_stock: u64,
    pub id_medicament: u64,
    pub stock_courant: i32,
    pub prix_achat: f64,
    pub prix_unitaire: f64,
    pub date_achat: NaiveDate,
    pub date_peremption: NaiveDate,
}

#[derive(Insertable)]
#[table_name = "stock_medicaments"]
pub struct NewStock {
    pub id_medicament: u64,
    pub stock_courant: i32,
    pub prix_achat: f64,
    pub prix_unitaire: f64,
    pub date_achat: NaiveDate,
    pub date_peremption: NaiveDate,
}

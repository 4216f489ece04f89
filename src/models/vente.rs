use crate::schema::vente;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct VenteData {
    pub id_vente: u64,
    pub montant_total: f64,
    pub code_admin: String,
    pub mode_paiement: String,
    pub date: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "vente"]
pub struct NewVente {
    pub montant_total: f64,
    pub code_admin: String,
    pub mode_paiement: String,
    pub date: NaiveDateTime,
}

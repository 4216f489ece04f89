use crate::schema::historique_achats;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct AchatData {
    pub id_achat: u64,
    pub id_medicament: u64,
    pub quantite: i32,
    pub prix_achat: f64,
    pub date_achat: NaiveDate,
    pub fournisseur: String,
    pub num_fournisseur: String,
}

#[derive(Insertable)]
#[table_name = "historique_achats"]
pub struct NewAchat {
    pub id_medicament: u64,
    pub quantite: i32,
    pub prix_achat: f64,
    pub date_achat: NaiveDate,
    pub fournisseur: String,
    pub num_fournisseur: String,
}

use crate::schema::detaille_vente;

#[derive(Queryable)]
pub struct DetailleVenteData {
    pub id_vente_detail: u64,
    pub id_vente: u64,
    pub id_medicament: u64,
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub quantite_vendue: i32,
    pub prix_unitaire: f64,
}

#[derive(Insertable)]
#[table_name = "detaille_vente"]
pub struct NewDetailleVente {
    pub id_vente: u64,
    pub id_medicament: u64,
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub quantite_vendue: i32,
    pub prix_unitaire: f64,
}

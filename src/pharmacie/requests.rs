use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddMedicamentRequest {
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub posologie: String,
    pub stock_courant: i32,
    pub prix_unitaire: f64,
    pub prix_achat: f64,
    pub date_achat: String,
    pub date_peremption: String,
    pub fournisseur: String,
    pub num_fournisseur: String,
}

#[derive(Deserialize)]
pub struct SearchMedicamentRequest {
    pub nom: Option<String>,
    pub forme: Option<String>,
    pub dosage: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct PrixRequest {
    pub nom: String,
    pub forme: String,
    pub dosage: String,
}

#[derive(Deserialize)]
pub struct SearchChampRequest {
    pub pattern: Option<String>,
}

#[derive(Deserialize)]
pub struct LigneVente {
    pub id_medicament: u64,
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub quantite_vendue: i32,
    pub prix_unitaire: f64,
}

#[derive(Deserialize)]
pub struct SellRequest {
    pub code_admin: String,
    pub mode_paiement: String,
    pub medicaments: Vec<LigneVente>,
}

#[derive(Deserialize)]
pub struct SearchVenteRequest {
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchDetailleRequest {
    pub id_vente: Option<u64>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchAchatRequest {
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

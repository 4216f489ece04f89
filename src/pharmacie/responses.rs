use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchMedicamentItem {
    pub id_stock: u64,
    pub id_medicament: u64,
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub posologie: String,
    pub prix_unitaire: f64,
    pub stock_courant: i32,
    pub date_peremption: String,
}

#[derive(Default, Serialize)]
pub struct SearchMedicamentResponse {
    pub success: bool,
    pub err: String,
    pub medicaments: Vec<SearchMedicamentItem>,
}

#[derive(Default, Serialize)]
pub struct PrixResponse {
    pub success: bool,
    pub err: String,
    pub id_medicament: u64,
    pub prix_unitaire: f64,
}

#[derive(Default, Serialize)]
pub struct SearchChampResponse {
    pub success: bool,
    pub err: String,
    pub valeurs: Vec<String>,
}

#[derive(Default, Serialize)]
pub struct SellResponse {
    pub success: bool,
    pub err: String,
    pub id_vente: u64,
    pub montant_total: f64,
}

#[derive(Default, Serialize)]
pub struct SearchVenteItem {
    pub id_vente: u64,
    pub montant_total: f64,
    pub mode_paiement: String,
    pub date: String,
}

#[derive(Default, Serialize)]
pub struct SearchVenteResponse {
    pub success: bool,
    pub err: String,
    pub ventes: Vec<SearchVenteItem>,
}

#[derive(Default, Serialize)]
pub struct SearchDetailleItem {
    pub id_vente: u64,
    pub id_vente_detail: u64,
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub quantite_vendue: i32,
    pub prix_unitaire: f64,
    pub montant_vente: f64,
    pub mode_paiement: String,
}

#[derive(Default, Serialize)]
pub struct SearchDetailleResponse {
    pub success: bool,
    pub err: String,
    pub detailles: Vec<SearchDetailleItem>,
}

#[derive(Default, Serialize)]
pub struct SearchAchatItem {
    pub id_achat: u64,
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub quantite: i32,
    pub prix_achat: f64,
    pub date_achat: String,
    pub fournisseur: String,
    pub num_fournisseur: String,
    pub montant_achat: f64,
}

#[derive(Default, Serialize)]
pub struct SearchAchatResponse {
    pub success: bool,
    pub err: String,
    pub achats: Vec<SearchAchatItem>,
}

crate::impl_err_response! {
    SearchMedicamentResponse,
    PrixResponse,
    SearchChampResponse,
    SellResponse,
    SearchVenteResponse,
    SearchDetailleResponse,
    SearchAchatResponse,
}

use crate::schema::recu;

#[derive(Queryable)]
pub struct RecuData {
    pub id_recu: u64,
    pub id_patient: u64,
    pub type_soin: String,
    pub id_soin: u64,
    pub montant: f64,
}

#[derive(Insertable)]
#[table_name = "recu"]
pub struct NewRecu {
    pub id_patient: u64,
    pub type_soin: String,
    pub id_soin: u64,
    pub montant: f64,
}

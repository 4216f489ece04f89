use crate::schema::soins;

#[derive(Queryable)]
pub struct SoinData {
    pub id_soin: u64,
    pub type_soin: String,
    pub prix: f64,
    pub id_departement: u64,
}

#[derive(Insertable)]
#[table_name = "soins"]
pub struct NewSoin {
    pub type_soin: String,
    pub prix: f64,
    pub id_departement: u64,
}

use crate::schema::departements;

#[derive(Queryable)]
pub struct DepartementData {
    pub id_departement: u64,
    pub departement: String,
}

#[derive(Insertable)]
#[table_name = "departements"]
pub struct NewDepartement {
    pub departement: String,
}

//! Génération des documents remis au patient ou à l'employé.
//!
//! Les factures de consultation et les fiches de paie sont produites en
//! remplissant un gabarit HTML puis écrites dans les dossiers `factures/`
//! et `fiche_paie/` du répertoire de documents configuré.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use text_placeholder::Template;

const FACTURE_TPL: &str = include_str!("../../templates/facture.html");
const FICHE_PAIE_TPL: &str = include_str!("../../templates/fiche_paie.html");

pub struct Facture {
    pub id_patient: u64,
    pub nom: String,
    pub prenom: String,
    pub type_soin: String,
    pub prix: f64,
    pub age: i32,
    pub localite: String,
    pub date: NaiveDate,
}

pub struct FichePaie {
    pub id_admin: u64,
    pub nom: String,
    pub prenom: String,
    pub mail: String,
    pub telephone: String,
    pub salaire_brute: f64,
    pub sur_salaire: f64,
    pub prime: f64,
    pub avance: f64,
    pub amo: f64,
    pub inps: f64,
    pub its: f64,
    pub net: f64,
    pub date: NaiveDate,
}

impl FichePaie {
    /// Coût employeur affiché au bas de la fiche.
    pub fn montant_total(&self) -> f64 {
        self.salaire_brute + self.prime + self.sur_salaire
    }
}

#[derive(Clone)]
pub struct DocumentStore {
    factures: PathBuf,
    fiches_paie: PathBuf,
}

impl DocumentStore {
    /// Prépare les dossiers de sortie, en les créant au besoin.
    pub fn open(base: &Path) -> anyhow::Result<Self> {
        let factures = base.join("factures");
        let fiches_paie = base.join("fiche_paie");
        fs::create_dir_all(&factures)
            .with_context(|| format!("Création du dossier {:?} impossible", factures))?;
        fs::create_dir_all(&fiches_paie)
            .with_context(|| format!("Création du dossier {:?} impossible", fiches_paie))?;
        Ok(Self {
            factures,
            fiches_paie,
        })
    }

    pub fn write_facture(&self, facture: &Facture) -> anyhow::Result<PathBuf> {
        let path = self
            .factures
            .join(format!("{}_facture.html", facture.id_patient));
        fs::write(&path, render_facture(facture))
            .context("Erreur lors de la génération de la facture")?;
        Ok(path)
    }

    pub fn write_fiche_paie(&self, fiche: &FichePaie) -> anyhow::Result<PathBuf> {
        let path = self.fiches_paie.join(format!(
            "fiche_paie_{}_{}.html",
            fiche.id_admin, fiche.date
        ));
        fs::write(&path, render_fiche_paie(fiche))
            .context("Erreur lors de la génération de la fiche de paie")?;
        Ok(path)
    }
}

fn montant(value: f64) -> String {
    format!("{:.2}", value)
}

fn render_facture(facture: &Facture) -> String {
    let prix = montant(facture.prix);
    let age = facture.age.to_string();
    let date = facture.date.to_string();

    let vars: HashMap<&str, &str> = [
        ("nom", facture.nom.as_str()),
        ("prenom", facture.prenom.as_str()),
        ("type_soin", facture.type_soin.as_str()),
        ("prix", prix.as_str()),
        ("age", age.as_str()),
        ("localite", facture.localite.as_str()),
        ("date", date.as_str()),
    ]
    .iter()
    .cloned()
    .collect();

    Template::new(FACTURE_TPL).fill_with_hashmap(&vars)
}

fn render_fiche_paie(fiche: &FichePaie) -> String {
    let salaire_brute = montant(fiche.salaire_brute);
    let sur_salaire = montant(fiche.sur_salaire);
    let prime = montant(fiche.prime);
    let avance = montant(fiche.avance);
    let amo = montant(fiche.amo);
    let inps = montant(fiche.inps);
    let its = montant(fiche.its);
    let net = montant(fiche.net);
    let montant_total = montant(fiche.montant_total());
    let date = fiche.date.to_string();

    let vars: HashMap<&str, &str> = [
        ("nom", fiche.nom.as_str()),
        ("prenom", fiche.prenom.as_str()),
        ("mail", fiche.mail.as_str()),
        ("telephone", fiche.telephone.as_str()),
        ("salaire_brute", salaire_brute.as_str()),
        ("sur_salaire", sur_salaire.as_str()),
        ("prime", prime.as_str()),
        ("avance", avance.as_str()),
        ("amo", amo.as_str()),
        ("inps", inps.as_str()),
        ("its", its.as_str()),
        ("net", net.as_str()),
        ("montant_total", montant_total.as_str()),
        ("date", date.as_str()),
    ]
    .iter()
    .cloned()
    .collect();

    Template::new(FICHE_PAIE_TPL).fill_with_hashmap(&vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facture_exemple() -> Facture {
        Facture {
            id_patient: 12,
            nom: "Traoré".to_string(),
            prenom: "Awa".to_string(),
            type_soin: "Echographie".to_string(),
            prix: 5000.0,
            age: 31,
            localite: "Bamako".to_string(),
            date: NaiveDate::from_ymd(2024, 12, 9),
        }
    }

    fn fiche_exemple() -> FichePaie {
        FichePaie {
            id_admin: 3,
            nom: "Diarra".to_string(),
            prenom: "Moussa".to_string(),
            mail: "moussa@clinique.ml".to_string(),
            telephone: "70 00 00 00".to_string(),
            salaire_brute: 150000.0,
            sur_salaire: 10000.0,
            prime: 5000.0,
            avance: 20000.0,
            amo: 4590.0,
            inps: 5400.0,
            its: 3000.0,
            net: 132010.0,
            date: NaiveDate::from_ymd(2024, 11, 30),
        }
    }

    #[test]
    fn facture_contient_les_champs() {
        let html = render_facture(&facture_exemple());
        assert!(html.contains("Awa Traoré"));
        assert!(html.contains("Echographie"));
        assert!(html.contains("5000.00 CFA"));
        assert!(html.contains("2024-12-09"));
        // tous les gabarits ont été remplis
        assert!(!html.contains("{{"));
    }

    #[test]
    fn fiche_paie_contient_les_montants() {
        let fiche = fiche_exemple();
        let html = render_fiche_paie(&fiche);
        assert!(html.contains("Diarra Moussa"));
        assert!(html.contains("150000.00 FCFA"));
        assert!(html.contains("132010.00 FCFA"));
        // brut + prime + sur-salaire
        assert!(html.contains("165000.00 FCFA"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn ecrit_les_documents_sur_disque() {
        let base = std::env::temp_dir().join("gestion-sante-test-documents");
        let store = DocumentStore::open(&base).unwrap();

        let path = store.write_facture(&facture_exemple()).unwrap();
        assert!(path.ends_with("12_facture.html"));
        assert!(path.exists());

        let path = store.write_fiche_paie(&fiche_exemple()).unwrap();
        assert!(path.ends_with("fiche_paie_3_2024-11-30.html"));
        assert!(path.exists());

        std::fs::remove_dir_all(&base).unwrap();
    }
}

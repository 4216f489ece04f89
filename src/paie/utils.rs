/// Éléments d'une paie mensuelle, tels qu'ils figurent sur la fiche.
pub struct ElementsPaie {
    pub salaire_brute: f64,
    pub sur_salaire: f64,
    pub prime: f64,
    pub inps: f64,
    pub amo: f64,
    pub its: f64,
    pub avance: f64,
}

/// Net à payer : brut et compléments, moins les retenues et l'avance déjà
/// perçue.
pub fn salaire_net(elements: &ElementsPaie) -> f64 {
    elements.salaire_brute + elements.sur_salaire + elements.prime
        - elements.inps
        - elements.amo
        - elements.its
        - elements.avance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_sans_retenues() {
        let elements = ElementsPaie {
            salaire_brute: 100000.0,
            sur_salaire: 0.0,
            prime: 0.0,
            inps: 0.0,
            amo: 0.0,
            its: 0.0,
            avance: 0.0,
        };
        assert_eq!(salaire_net(&elements), 100000.0);
    }

    #[test]
    fn net_avec_retenues_et_avance() {
        let elements = ElementsPaie {
            salaire_brute: 150000.0,
            sur_salaire: 10000.0,
            prime: 5000.0,
            inps: 5400.0,
            amo: 4590.0,
            its: 3000.0,
            avance: 20000.0,
        };
        assert_eq!(salaire_net(&elements), 132010.0);
    }

    #[test]
    fn net_coherent_avec_les_taux() {
        use crate::models::salaire::{TAUX_AMO, TAUX_INPS};

        let brut = 200000.0;
        let elements = ElementsPaie {
            salaire_brute: brut,
            sur_salaire: 0.0,
            prime: 0.0,
            inps: brut * TAUX_INPS,
            amo: brut * TAUX_AMO,
            its: 0.0,
            avance: 0.0,
        };
        let net = salaire_net(&elements);
        assert!(net < brut);
        assert!((net - brut * (1.0 - TAUX_INPS - TAUX_AMO)).abs() < 1e-6);
    }
}

// src/core/contacts/mod.rs

//! Ministry/department records and working groups.

mod registry;

pub use registry::ContactRegistry;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::Display;

/// A French/Arabic string pair. All outward-facing names and labels in the
/// registry are bilingual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub fr: String,
    pub ar: String,
}

impl Bilingual {
    pub fn new(fr: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            ar: ar.into(),
        }
    }
}

/// Submission-freshness indicator for a ministry. Derived from the age of
/// its most recent asset declaration (see [`crate::core::catalog::compliance`]);
/// the stored value is only a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ComplianceStatus {
    Compliant,
    Pending,
    Overdue,
}

/// A ministry or department contact record. Owns zero or more asset
/// declarations through their `ministry_id` soft reference; storage does
/// not enforce the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinistryContact {
    pub id: String,
    pub name: Bilingual,
    pub department: Bilingual,
    pub representative: String,
    pub role: Bilingual,
    pub phone: String,
    pub email: String,
    pub compliance_status: ComplianceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_submission: Option<NaiveDate>,
}

/// A named list of contacts used by the broadcast dialog. Membership is by
/// contact id; nothing beyond implied uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkGroup {
    pub id: String,
    pub name: String,
    pub contact_ids: Vec<String>,
}

/// Predefined sub-entities (directions, établissements) per seed ministry,
/// offered by the declaration form next to free-text entry.
pub static MINISTRY_STRUCTURES: Lazy<HashMap<&'static str, Vec<Bilingual>>> = Lazy::new(|| {
    HashMap::from([
        (
            "1", // Finances
            vec![
                Bilingual::new("Cabinet du Ministre", "ديوان الوزير"),
                Bilingual::new("Direction Générale du Budget", "المديرية العامة للميزانية"),
                Bilingual::new("Direction Générale du Trésor", "المديرية العامة للخزينة"),
                Bilingual::new("Direction Générale des Impôts", "المديرية العامة للضرائب"),
                Bilingual::new("Direction Générale des Douanes", "المديرية العامة للجمارك"),
                Bilingual::new(
                    "Direction des Domaines et du Patrimoine",
                    "مديرية العقارات وأملاك الدولة",
                ),
            ],
        ),
        (
            "2", // Santé
            vec![
                Bilingual::new("Cabinet du Ministre", "ديوان الوزير"),
                Bilingual::new("Centre Hospitalier National (CHN)", "مركز الاستطباب الوطني"),
                Bilingual::new("Hôpital Cheikh Zayed", "مستشفى الشيخ زايد"),
                Bilingual::new("Hôpital de l'Amitié", "مستشفى الصداقة"),
                Bilingual::new(
                    "Institut National de Recherche en Santé Publique (INRSP)",
                    "المعهد الوطني للبحوث في مجال الصحة العمومية",
                ),
                Bilingual::new(
                    "Direction de la Pharmacie et des Laboratoires",
                    "مديرية الصيدلة والمختبرات",
                ),
            ],
        ),
        (
            "3", // Equipement
            vec![
                Bilingual::new("Cabinet du Ministre", "ديوان الوزير"),
                Bilingual::new(
                    "Laboratoire National des Travaux Publics (LNTP)",
                    "المختبر الوطني للأشغال العامة",
                ),
                Bilingual::new(
                    "Etablissement des Travaux d'Entretien Routier (ETER)",
                    "مؤسسة أشغال صيانة الطرق",
                ),
                Bilingual::new(
                    "Direction des Infrastructures de Transport",
                    "مديرية البنى التحتية للنقل",
                ),
            ],
        ),
    ])
});

/// The ministries provisioned on first start, matching the ids that
/// [`MINISTRY_STRUCTURES`] is keyed by.
pub(crate) fn seed_contacts() -> Vec<MinistryContact> {
    vec![
        MinistryContact {
            id: "1".to_string(),
            name: Bilingual::new("Ministère des Finances", "وزارة المالية"),
            department: Bilingual::new("Direction du Patrimoine", "مديرية العقارات"),
            representative: "M. Ahmed O.".to_string(),
            role: Bilingual::new("Directeur", "مدير"),
            phone: "22245001234".to_string(),
            email: "patrimoine@finances.gov.mr".to_string(),
            compliance_status: ComplianceStatus::Compliant,
            last_submission: NaiveDate::from_ymd_opt(2024, 3, 1),
        },
        MinistryContact {
            id: "2".to_string(),
            name: Bilingual::new("Ministère de la Santé", "وزارة الصحة"),
            department: Bilingual::new("Logistique & Matériel", "اللوجستيك والمعدات"),
            representative: "Dr. Fatimetou Z.".to_string(),
            role: Bilingual::new("Point Focal", "نقطة اتصال"),
            phone: "22245009876".to_string(),
            email: "logistique@sante.gov.mr".to_string(),
            compliance_status: ComplianceStatus::Pending,
            last_submission: NaiveDate::from_ymd_opt(2023, 11, 15),
        },
        MinistryContact {
            id: "3".to_string(),
            name: Bilingual::new("Ministère de l'Équipement", "وزارة التجهيز والنقل"),
            department: Bilingual::new("Parc Mobile de l'État", "حظيرة الدولة"),
            representative: "Ing. Brahim S.".to_string(),
            role: Bilingual::new("Chef de Parc", "رئيس الحظيرة"),
            phone: "22245001122".to_string(),
            email: "materiel@equipement.gov.mr".to_string(),
            compliance_status: ComplianceStatus::Overdue,
            last_submission: NaiveDate::from_ymd_opt(2023, 1, 10),
        },
    ]
}

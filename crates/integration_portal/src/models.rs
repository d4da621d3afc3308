//! Upstream wire models
//!
//! The portal's planning payload as it actually arrives: most fields
//! nullable, French field names, flags for filler slots. Only a handful of
//! fields feed the pipeline; the rest are kept so a payload dump
//! deserializes cleanly and schema drift shows up as a parse error we can
//! see, not silent data loss.

use application::ports::{FavoriteDescriptor, RawScheduleEntry};
use serde::Deserialize;

/// Login response body
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for the planning endpoint
    pub token: String,
}

/// The nested favorite descriptor (`favori`)
///
/// Present only on real teaching slots. The `fN` names are the portal's;
/// their meaning is fixed by observation: f2 location, f3/f5 summary
/// fragments, f4 description.
#[derive(Debug, Clone, Deserialize)]
pub struct Favori {
    pub f1: Option<i64>,
    #[serde(default)]
    pub f2: String,
    #[serde(default)]
    pub f3: String,
    #[serde(default)]
    pub f4: String,
    #[serde(default)]
    pub f5: String,
}

/// One planning entry as the portal reports it
#[derive(Debug, Clone, Deserialize)]
pub struct PlanningEntry {
    pub id: Option<i64>,
    #[serde(default)]
    pub date_debut: String,
    #[serde(default)]
    pub date_fin: String,
    pub duree: Option<String>,
    pub date_debut_multijours: Option<String>,
    pub date_fin_multijours: Option<String>,
    pub matiere: Option<String>,
    pub type_activite: Option<String>,
    pub validation_intervenant: Option<String>,
    pub ressource: Option<String>,
    pub statut_intervention: Option<String>,
    #[serde(default)]
    pub intervenants: String,
    #[serde(default)]
    pub is_break: bool,
    #[serde(default)]
    pub is_empty: bool,
    pub description: Option<String>,
    pub favori: Option<Favori>,
    #[serde(default)]
    pub est_intervention_planning_apprenant: bool,
    #[serde(default)]
    pub est_intervention_planning_intervenant: bool,
    #[serde(default)]
    pub est_derniere_intervention_planning_apprenant: bool,
    #[serde(default)]
    pub est_derniere_intervention_planning_intervenant: bool,
    #[serde(default)]
    pub est_derniere_intervention_planning_app_int: bool,
}

impl From<PlanningEntry> for RawScheduleEntry {
    fn from(entry: PlanningEntry) -> Self {
        Self {
            id: entry.id,
            starts_at: entry.date_debut,
            ends_at: entry.date_fin,
            favorite: entry.favori.map(|f| FavoriteDescriptor {
                location: f.f2,
                summary_suffix: f.f3,
                description: f.f4,
                summary_prefix: f.f5,
            }),
            is_break: entry.is_break,
            is_empty: entry.is_empty,
        }
    }
}

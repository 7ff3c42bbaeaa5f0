#![allow(dead_code)]

use std::sync::Arc;

use scan_advisor::{Advisor, AdvisorError, ConfiguredAdvisor};
use scan_catalog::Catalog;
use scan_config::{DialogueConfig, MatchingConfig};
use scan_core::{Candidate, CandidateSource, Transcript};
use scan_dialogue::{ConversationState, Dialogue};

pub const DISEASES: &str = "\
Disease,General Symptoms,Symptoms,Description,Recommendation
Common Cold,\"runny nose, coughing, sore throat\",\"runny nose, coughing, sore throat, sneezing, mild fatigue\",A mild viral infection of the nose and throat.,Rest and drink plenty of fluids.
Influenza,\"sudden high fever, chills, muscle aches\",\"fever, chills, muscle aches, headache, fatigue\",A contagious respiratory illness.,Rest and see a doctor if it worsens.
Migraine,\"throbbing headache with nausea\",\"headache, nausea\",A neurological condition.,Lie down in a dark quiet room.
Allergic Rhinitis,\"sneezing, itchy eyes\",\"sneezing, itchy eyes\",An allergic reaction to airborne particles.,Avoid triggers and try antihistamines.
Mystery Ailment,\"glowing ears\",\"\",Unknown.,Ask a specialist.
";

pub const SYMPTOMS: &str = "\
Symptom,Explanation
Runny Nose,Excess nasal discharge
Coughing,A sudden expulsion of air from the lungs
Sore Throat,Pain or irritation in the throat
Sneezing,Involuntary expulsion of air through the nose
Mild Fatigue,Feeling a little more tired than usual
Fever,A raised body temperature
Chills,Feeling cold with shivering
Muscle Aches,Soreness in the muscles
Headache,Pain in the head
Fatigue,Extreme tiredness
Nausea,An urge to vomit
Itchy Eyes,Irritated eyes that make you want to rub them
";

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_csv(DISEASES.as_bytes(), SYMPTOMS.as_bytes()).expect("test catalog"))
}

pub fn dialogue_with<A: Advisor>(advisor: A, config: DialogueConfig) -> Dialogue<A> {
    Dialogue::new(catalog(), MatchingConfig::default(), config, advisor)
}

pub fn offline_dialogue() -> Dialogue {
    dialogue_with(ConfiguredAdvisor::Offline, DialogueConfig::default())
}

pub fn candidate(index: usize) -> Candidate {
    let catalog = catalog();
    let disease = catalog.disease(index).expect("row exists").clone();
    Candidate::new(disease, 40.0, CandidateSource::SymptomDescription)
}

/// Step until the machine waits for input, collecting replies.
pub async fn drive<A: Advisor>(
    dialogue: &Dialogue<A>,
    state: &mut ConversationState,
    input: Option<&str>,
    transcript: &Transcript,
) -> Vec<String> {
    let mut pending = input;
    let mut replies = Vec::new();
    for _ in 0..64 {
        let step = dialogue.step(state, pending.take(), transcript).await;
        replies.extend(step.replies);
        if step.awaiting_input {
            return replies;
        }
    }
    panic!("dialogue did not settle");
}

/// Canned advisor behaviour for dialogue tests.
pub enum Scripted {
    Rows(Vec<usize>),
    Declined,
    Malformed,
    Down,
    /// Never answers.
    Hang,
}

pub struct ScriptedAdvisor(pub Scripted);

impl Advisor for ScriptedAdvisor {
    fn is_available(&self) -> bool {
        true
    }

    async fn rank_diseases(&self, diseases_csv: &str, _query: &str) -> Result<Vec<usize>, AdvisorError> {
        assert!(diseases_csv.starts_with("Disease,General Symptoms"));
        match &self.0 {
            Scripted::Rows(rows) => Ok(rows.clone()),
            Scripted::Declined => Err(AdvisorError::Declined),
            Scripted::Malformed => Err(AdvisorError::Malformed("prose reply".into())),
            Scripted::Down => Err(AdvisorError::Api {
                status: 503,
                message: "unavailable".into(),
            }),
            Scripted::Hang => std::future::pending().await,
        }
    }

    async fn recommend(&self, disease_name: &str) -> Result<String, AdvisorError> {
        match &self.0 {
            Scripted::Down => Err(AdvisorError::NotConfigured),
            _ => Ok(format!("Advisor says: take care of your {disease_name}.")),
        }
    }

    async fn summarize(
        &self,
        user_threads: &[String],
        _bot_threads: &[String],
    ) -> Result<String, AdvisorError> {
        Ok(format!("Advisor summary of {} messages.", user_threads.len()))
    }
}

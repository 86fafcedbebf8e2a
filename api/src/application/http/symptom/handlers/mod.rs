pub mod get_symptoms;
pub mod rebuild_symptom_index;
pub mod rename_symptom;

//! In-memory fakes backing the service tests. They mirror the store-facing
//! ports closely enough that the service impls run unchanged against them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::{
    authentication::{
        entities::{AdminCredentials, Session, SessionUser},
        ports::AuthStateRepository,
    },
    common::{entities::app_errors::CoreError, services::Service, slugify},
    review::{entities::Review, ports::ReviewRepository},
    storage::ports::ObjectStoragePort,
    symptom::{entities::SymptomIndex, ports::SymptomIndexRepository},
    treatment::{
        entities::{SourceType, Treatment},
        ports::TreatmentRepository,
    },
};

const FAKE_STORE_PREFIX: &str = "https://storage.test/herbful/";

pub fn sample_treatment(name: &str, average_rating: f64, total_reviews: u64) -> Treatment {
    let now = Utc::now();
    Treatment {
        id: slugify(name),
        name: name.to_string(),
        source_type: SourceType::LocalRemedy,
        sources: vec![],
        preparation: vec!["Boil for 10 minutes".to_string()],
        usage: "Drink warm".to_string(),
        dosage: "1 cup daily".to_string(),
        warnings: vec![],
        benefits: vec!["General wellness".to_string()],
        symptoms: vec![],
        image_url: None,
        average_rating,
        total_reviews,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_review(id: &str, treatment_id: &str, treatment_name: &str, rating: u8) -> Review {
    let now = Utc::now();
    Review {
        id: id.to_string(),
        treatment_id: treatment_id.to_string(),
        treatment_name: treatment_name.to_string(),
        rating,
        comment: "Worked well for me".to_string(),
        user_name: "Maria".to_string(),
        user_email: "maria@example.com".to_string(),
        anonymous: false,
        admin_notes: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTreatmentRepository {
    records: Arc<Mutex<HashMap<String, Treatment>>>,
}

impl TreatmentRepository for InMemoryTreatmentRepository {
    async fn fetch_all(&self) -> Result<Vec<Treatment>, CoreError> {
        let records = self.records.lock().unwrap();
        let mut all: Vec<Treatment> = records.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn get_by_id(&self, treatment_id: String) -> Result<Option<Treatment>, CoreError> {
        Ok(self.records.lock().unwrap().get(&treatment_id).cloned())
    }

    async fn put(&self, treatment: Treatment) -> Result<(), CoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(treatment.id.clone(), treatment);
        Ok(())
    }

    async fn patch_rating(
        &self,
        treatment_id: String,
        average_rating: f64,
        total_reviews: u64,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let mut records = self.records.lock().unwrap();
        let treatment = records.get_mut(&treatment_id).ok_or(CoreError::NotFound)?;
        treatment.average_rating = average_rating;
        treatment.total_reviews = total_reviews;
        treatment.updated_at = updated_at;
        Ok(())
    }

    async fn patch_symptoms(
        &self,
        treatment_id: String,
        symptoms: Vec<String>,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let mut records = self.records.lock().unwrap();
        let treatment = records.get_mut(&treatment_id).ok_or(CoreError::NotFound)?;
        treatment.symptoms = symptoms;
        treatment.updated_at = updated_at;
        Ok(())
    }

    async fn patch_image_url(
        &self,
        treatment_id: String,
        image_url: Option<String>,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let mut records = self.records.lock().unwrap();
        let treatment = records.get_mut(&treatment_id).ok_or(CoreError::NotFound)?;
        treatment.image_url = image_url;
        treatment.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, treatment_id: String) -> Result<(), CoreError> {
        self.records.lock().unwrap().remove(&treatment_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryReviewRepository {
    records: Arc<Mutex<HashMap<String, Review>>>,
}

impl ReviewRepository for InMemoryReviewRepository {
    async fn fetch_all(&self) -> Result<Vec<Review>, CoreError> {
        let records = self.records.lock().unwrap();
        let mut all: Vec<Review> = records.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn get_by_id(&self, review_id: String) -> Result<Option<Review>, CoreError> {
        Ok(self.records.lock().unwrap().get(&review_id).cloned())
    }

    async fn put(&self, review: Review) -> Result<(), CoreError> {
        self.records.lock().unwrap().insert(review.id.clone(), review);
        Ok(())
    }

    async fn delete(&self, review_id: String) -> Result<(), CoreError> {
        self.records.lock().unwrap().remove(&review_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySymptomIndexRepository {
    index: Arc<Mutex<SymptomIndex>>,
}

impl SymptomIndexRepository for InMemorySymptomIndexRepository {
    async fn load(&self) -> Result<SymptomIndex, CoreError> {
        Ok(self.index.lock().unwrap().clone())
    }

    async fn store(&self, index: SymptomIndex) -> Result<(), CoreError> {
        *self.index.lock().unwrap() = index;
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryAuthStateRepository {
    credentials: Arc<Mutex<AdminCredentials>>,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl Default for InMemoryAuthStateRepository {
    fn default() -> Self {
        Self {
            credentials: Arc::new(Mutex::new(AdminCredentials::default_seed())),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl AuthStateRepository for InMemoryAuthStateRepository {
    async fn load_credentials(&self) -> Result<AdminCredentials, CoreError> {
        Ok(self.credentials.lock().unwrap().clone())
    }

    async fn store_credentials(&self, credentials: AdminCredentials) -> Result<(), CoreError> {
        *self.credentials.lock().unwrap() = credentials;
        Ok(())
    }

    async fn get_session(&self, token: String) -> Result<Option<Session>, CoreError> {
        Ok(self.sessions.lock().unwrap().get(&token).cloned())
    }

    async fn put_session(&self, session: Session) -> Result<(), CoreError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.token.clone(), session);
        Ok(())
    }

    async fn remove_session(&self, token: String) -> Result<(), CoreError> {
        self.sessions.lock().unwrap().remove(&token);
        Ok(())
    }

    async fn clear_sessions(&self) -> Result<(), CoreError> {
        self.sessions.lock().unwrap().clear();
        Ok(())
    }

    async fn update_session_users(&self, user: SessionUser) -> Result<(), CoreError> {
        for session in self.sessions.lock().unwrap().values_mut() {
            session.user = user.clone();
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeObjectStorage {
    deleted: Arc<Mutex<Vec<String>>>,
}

impl FakeObjectStorage {
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

impl ObjectStoragePort for FakeObjectStorage {
    async fn put_object(
        &self,
        _object_key: String,
        _payload: Bytes,
        _content_type: String,
    ) -> Result<(), CoreError> {
        Ok(())
    }

    async fn delete_object(&self, object_key: String) -> Result<(), CoreError> {
        self.deleted.lock().unwrap().push(object_key);
        Ok(())
    }

    fn object_url(&self, object_key: &str) -> String {
        format!("{FAKE_STORE_PREFIX}{object_key}")
    }

    fn object_key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(FAKE_STORE_PREFIX).map(str::to_string)
    }
}

pub type TestService = Service<
    InMemoryTreatmentRepository,
    InMemoryReviewRepository,
    InMemorySymptomIndexRepository,
    InMemoryAuthStateRepository,
    FakeObjectStorage,
>;

pub fn service_with(treatments: Vec<Treatment>, reviews: Vec<Review>) -> TestService {
    let treatment_repository = InMemoryTreatmentRepository::default();
    {
        let mut records = treatment_repository.records.lock().unwrap();
        for treatment in treatments {
            records.insert(treatment.id.clone(), treatment);
        }
    }

    let review_repository = InMemoryReviewRepository::default();
    {
        let mut records = review_repository.records.lock().unwrap();
        for review in reviews {
            records.insert(review.id.clone(), review);
        }
    }

    Service::new(
        treatment_repository,
        review_repository,
        InMemorySymptomIndexRepository::default(),
        InMemoryAuthStateRepository::default(),
        FakeObjectStorage::default(),
    )
}

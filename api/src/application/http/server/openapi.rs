use crate::application::http::{
    authentication::router::AuthenticationApiDoc, review::router::ReviewApiDoc,
    symptom::router::SymptomApiDoc, treatment::router::TreatmentApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Herbful Admin API"
    ),
    nest(
        (path = "/treatments", api = TreatmentApiDoc),
        (path = "/reviews", api = ReviewApiDoc),
        (path = "/symptoms", api = SymptomApiDoc),
        (path = "/auth", api = AuthenticationApiDoc),
    )
)]
pub struct ApiDoc;

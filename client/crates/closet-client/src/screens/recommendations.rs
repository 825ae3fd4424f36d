use crate::api::models::{ListPayload, Recommendation};
use crate::api::paths;
use crate::request::RequestHelper;
use crate::screens::{CollectionState, Identified};

impl Identified for Recommendation {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Outfit suggestions generated by the backend. Read-only.
pub struct RecommendationsScreen {
    helper: RequestHelper,
    pub state: CollectionState<Recommendation>,
}

impl RecommendationsScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            state: CollectionState::default(),
        }
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.state.items
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Recommendations for one event, in server order.
    pub fn for_event(&self, event_id: i64) -> Vec<&Recommendation> {
        self.state
            .items
            .iter()
            .filter(|r| r.event == Some(event_id))
            .collect()
    }

    pub async fn refresh(&mut self) -> bool {
        self.state.begin();
        match self
            .helper
            .get::<ListPayload<Recommendation>>(paths::RECOMMENDATIONS)
            .await
        {
            Ok(payload) => {
                self.state.replace_all(payload.into_items());
                true
            }
            Err(e) => {
                self.state.fail("load recommendations", &e);
                false
            }
        }
    }
}

use crate::api::models::{Event, EventUpdate, ListPayload, NewEvent};
use crate::api::paths;
use crate::request::{RequestBody, RequestHelper};
use crate::screens::messages;
use crate::screens::{CollectionState, Identified};

impl Identified for Event {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Upcoming occasions the user wants outfits for.
pub struct EventsScreen {
    helper: RequestHelper,
    pub state: CollectionState<Event>,
}

impl EventsScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            state: CollectionState::default(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.state.items
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub async fn mount(&mut self) -> bool {
        self.helper.refresh_csrf_token().await;
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> bool {
        self.state.begin();
        match self.helper.get::<ListPayload<Event>>(paths::EVENTS).await {
            Ok(payload) => {
                self.state.replace_all(payload.into_items());
                true
            }
            Err(e) => {
                self.state.fail("load events", &e);
                false
            }
        }
    }

    pub async fn add_event(&mut self, event: NewEvent) -> bool {
        if event.title.trim().is_empty() || event.date.trim().is_empty() {
            self.state.reject(messages::TITLE_AND_DATE_REQUIRED);
            return false;
        }

        self.state.begin();
        let result = match RequestBody::json(&event) {
            Ok(body) => self.helper.create::<Event>(paths::EVENTS, body).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(created) => {
                self.state.append(created);
                true
            }
            Err(e) => {
                self.state.fail("add event", &e);
                false
            }
        }
    }

    pub async fn update_event(&mut self, id: i64, update: EventUpdate) -> bool {
        self.state.begin();
        let result = match RequestBody::json(&update) {
            Ok(body) => self.helper.update::<Event>(&paths::event(id), body).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(updated) => {
                self.state.replace(updated);
                true
            }
            Err(e) => {
                self.state.fail("update event", &e);
                false
            }
        }
    }

    pub async fn delete_event(&mut self, id: i64) -> bool {
        self.state.begin();
        match self.helper.delete(&paths::event(id)).await {
            Ok(()) => {
                self.state.remove(id);
                true
            }
            Err(e) => {
                self.state.fail("delete event", &e);
                false
            }
        }
    }
}

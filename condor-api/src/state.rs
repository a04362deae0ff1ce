use std::sync::Arc;

use condor_checkin::CheckinService;

#[derive(Clone)]
pub struct AppState {
    pub checkin: Arc<CheckinService>,
}
